/// Сырые сигналы сессии. Пустое значение переменной считается отсутствием.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSignals {
    /// XDG_CURRENT_DESKTOP
    pub desktop: Option<String>,
    /// DESKTOP_SESSION
    pub session: Option<String>,
    /// XDG_SESSION_TYPE
    pub session_type: Option<String>,
    /// WAYLAND_DISPLAY
    pub wayland_display: Option<String>,
    /// DISPLAY
    pub x11_display: Option<String>,
    /// HYPRLAND_INSTANCE_SIGNATURE
    pub hyprland_signature: Option<String>,
    /// SWAYSOCK
    pub sway_socket: Option<String>,
}

impl SessionSignals {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Сборка из произвольного источника переменных (для тестов и обёрток)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        Self {
            desktop: get("XDG_CURRENT_DESKTOP"),
            session: get("DESKTOP_SESSION"),
            session_type: get("XDG_SESSION_TYPE"),
            wayland_display: get("WAYLAND_DISPLAY"),
            x11_display: get("DISPLAY"),
            hyprland_signature: get("HYPRLAND_INSTANCE_SIGNATURE"),
            sway_socket: get("SWAYSOCK"),
        }
    }

    pub fn desktop(&self) -> &str {
        self.desktop.as_deref().unwrap_or("")
    }

    pub fn session(&self) -> &str {
        self.session.as_deref().unwrap_or("")
    }

    pub fn session_type(&self) -> &str {
        self.session_type.as_deref().unwrap_or("")
    }
}
