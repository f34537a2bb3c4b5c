use crate::action::Action;
use crate::config::{ActionSet, Config, ConfigSources, WmConfig};
use crate::error::{ByeError, Result};
use crate::services::session_detector::{
    detect_window_manager, DisplayServer, Environment, SessionSignals, GENERIC_WM,
};
use crate::trace_if_enabled;
use tracing::{debug, info};

/// Команды действия для записи менеджера. Неизвестное имя действия - пустой список.
pub fn resolve_action<'a>(entry: &'a WmConfig, action: &str, display: DisplayServer) -> &'a [String] {
    let Ok(action) = action.parse::<Action>() else {
        return &[];
    };

    match action {
        Action::Lock => resolve_lock(&entry.lock, display),
        Action::Logout => entry.logout.as_slice(),
        Action::Sleep => entry.sleep.as_slice(),
        Action::Suspend => entry.suspend.as_slice(),
        Action::Hibernate => entry.hibernate.as_slice(),
        Action::Shutdown => entry.shutdown.as_slice(),
        Action::Restart => entry.restart.as_slice(),
    }
}

/// Плоский список важнее словаря по серверам. В словаре берётся только ключ
/// текущего сервера, без перехода на ключ другого сервера.
fn resolve_lock(lock: &ActionSet, display: DisplayServer) -> &[String] {
    if !lock.commands().is_empty() {
        return lock.commands();
    }

    match display.config_key() {
        Some(key) if lock.has_by_server() => lock.for_server(key),
        _ => &[],
    }
}

/// Команды для менеджера `wm`; если у него пусто или записи нет - из "generic"
pub fn resolve<'a>(
    config: &'a Config,
    wm: &str,
    action: &str,
    display: DisplayServer,
) -> &'a [String] {
    if let Some(entry) = config.window_manager(wm) {
        let commands = resolve_action(entry, action, display);
        if !commands.is_empty() {
            trace_if_enabled!("{}/{}: {:?}", wm, action, commands);
            return commands;
        }
    }

    match config.window_manager(GENERIC_WM) {
        Some(generic) => {
            let commands = resolve_action(generic, action, display);
            trace_if_enabled!("{}/{} через {}: {:?}", wm, action, GENERIC_WM, commands);
            commands
        }
        None => &[],
    }
}

/// Готовая к работе связка: проверенная конфигурация + окружение сессии
#[derive(Debug, Clone)]
pub struct CommandResolver {
    config: Config,
    environment: Environment,
    window_manager: String,
}

impl CommandResolver {
    pub fn new(config: Config, environment: Environment, window_manager: impl Into<String>) -> Self {
        Self {
            config,
            environment,
            window_manager: window_manager.into(),
        }
    }

    /// Определение окружения, загрузка, слияние и проверка конфигурации
    pub fn from_sources(sources: &ConfigSources, signals: &SessionSignals) -> Result<Self> {
        let environment = Environment::detect(signals);
        let window_manager = detect_window_manager(&environment, signals);
        info!("Сессия: {}, менеджер: {}", environment, window_manager);

        let config = Config::load(sources)?;
        Ok(Self::new(config, environment, window_manager))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn window_manager(&self) -> &str {
        &self.window_manager
    }

    /// Упорядоченный список команд; пустой результат - ошибка `NoCommands`
    pub fn commands_for(&self, action: &str) -> Result<Vec<String>> {
        debug!(
            "Разрешение '{}' для {} (сервер: {})",
            action, self.window_manager, self.environment.display
        );

        let commands = resolve(
            &self.config,
            &self.window_manager,
            action,
            self.environment.display,
        );

        if commands.is_empty() {
            return ByeError::no_commands(action, self.window_manager.as_str());
        }

        debug!("Команды для '{}': {:?}", action, commands);
        Ok(commands.to_vec())
    }
}
