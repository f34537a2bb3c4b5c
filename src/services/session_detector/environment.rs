use super::signals::SessionSignals;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DisplayServer {
    #[default]
    Unknown,
    X11,
    Wayland,
}

impl DisplayServer {
    /// Ключ в словаре `lock` по серверам; у Unknown ключа нет
    pub fn config_key(self) -> Option<&'static str> {
        match self {
            DisplayServer::X11 => Some("X11"),
            DisplayServer::Wayland => Some("Wayland"),
            DisplayServer::Unknown => None,
        }
    }
}

impl fmt::Display for DisplayServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key().unwrap_or("unknown"))
    }
}

/// Классифицированная сессия. Строится один раз за запуск.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    pub desktop: String,
    pub session: String,
    pub display: DisplayServer,
    pub wayland: bool,
    pub x11: bool,
    pub headless: bool,
}

impl Environment {
    pub fn detect(signals: &SessionSignals) -> Self {
        let mut env = Environment {
            desktop: signals.desktop().to_string(),
            session: signals.session().to_string(),
            ..Default::default()
        };

        env.wayland = signals.session_type() == "wayland" || signals.wayland_display.is_some();
        env.x11 = signals.session_type() == "x11" || signals.x11_display.is_some();

        if env.wayland {
            env.display = DisplayServer::Wayland;
        }

        // X11 проверяется вторым и перезаписывает display; флаг wayland при этом остаётся
        if env.x11 {
            env.display = DisplayServer::X11;
        }

        if !env.wayland && !env.x11 {
            env.display = DisplayServer::Unknown;
            env.headless = true;
        }

        env
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "desktop=\"{}\" session=\"{}\" display={} wayland={} x11={} headless={}",
            self.desktop, self.session, self.display, self.wayland, self.x11, self.headless
        )
    }
}
