use super::environment::Environment;
use super::signals::SessionSignals;
use crate::utils::contains_any;
use tracing::debug;

/// Универсальный запасной вариант
pub const GENERIC_WM: &str = "generic";

/// Один детектор в таблице: совпадение по имени рабочего стола,
/// по имени сессии или по сигнатуре композитора
struct WmDetector {
    id: &'static str,
    desktop: &'static [&'static str],
    session: &'static [&'static str],
    signature: fn(&SessionSignals) -> bool,
}

fn no_signature(_: &SessionSignals) -> bool {
    false
}

/// Порядок - это приоритет: побеждает первое совпадение
static DETECTORS: &[WmDetector] = &[
    WmDetector {
        id: "Hyprland",
        desktop: &["Hyprland"],
        session: &[],
        signature: |s| s.hyprland_signature.is_some(),
    },
    WmDetector {
        id: "Sway",
        desktop: &["sway"],
        session: &[],
        signature: |s| s.sway_socket.is_some(),
    },
    WmDetector {
        id: "KDE",
        desktop: &["KDE", "Plasma"],
        session: &["kde", "plasma"],
        signature: no_signature,
    },
    WmDetector {
        id: "GNOME",
        desktop: &["GNOME"],
        session: &["gnome"],
        signature: no_signature,
    },
    WmDetector {
        id: "XFCE",
        desktop: &["XFCE"],
        session: &["xfce"],
        signature: no_signature,
    },
    WmDetector {
        id: "i3",
        desktop: &["i3"],
        session: &["i3"],
        signature: no_signature,
    },
    WmDetector {
        id: "LXDE",
        desktop: &["LXDE", "LXQt"],
        session: &["lxde", "lxqt"],
        signature: no_signature,
    },
];

impl WmDetector {
    fn matches(&self, env: &Environment, signals: &SessionSignals) -> bool {
        contains_any(&env.desktop, self.desktop)
            || (self.signature)(signals)
            || contains_any(&env.session, self.session)
    }
}

/// Канонический идентификатор менеджера; никогда не пустой.
/// Дисплейный сервер на выбор не влияет: без совпадений всегда "generic".
pub fn detect_window_manager(env: &Environment, signals: &SessionSignals) -> &'static str {
    let id = DETECTORS
        .iter()
        .find(|detector| detector.matches(env, signals))
        .map(|detector| detector.id)
        .unwrap_or(GENERIC_WM);

    debug!("Оконный менеджер: {} ({})", id, env);
    id
}
