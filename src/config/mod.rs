mod action_set;
mod loader;

pub use action_set::ActionSet;
pub use loader::{ConfigSources, CONFIG_ENV_VAR};

use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub version: String,
    /// Ключ - идентификатор менеджера ("Sway", "KDE", ..., "generic"), с учётом регистра
    #[serde(default)]
    pub window_managers: BTreeMap<String, WmConfig>,
}

/// Таблица действий одного оконного менеджера
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WmConfig {
    /// Только для информации: "X11", "Wayland" или "auto"
    pub display_server: String,
    pub lock: ActionSet,
    #[serde(deserialize_with = "null_as_empty")]
    pub logout: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub sleep: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub suspend: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub hibernate: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub shutdown: Vec<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub restart: Vec<String>,
}

/// `null` вместо списка команд - то же, что пустой список
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl WmConfig {
    /// Накладывает override поверх текущих значений.
    /// Списки заменяются целиком, если в override они непустые.
    pub fn merge(&mut self, overlay: WmConfig) {
        if !overlay.display_server.is_empty() {
            self.display_server = overlay.display_server;
        }

        // Любая настройка lock в override полностью вытесняет базовую
        if overlay.lock.is_configured() {
            self.lock = overlay.lock;
        }

        replace_if_set(&mut self.logout, overlay.logout);
        replace_if_set(&mut self.sleep, overlay.sleep);
        replace_if_set(&mut self.suspend, overlay.suspend);
        replace_if_set(&mut self.hibernate, overlay.hibernate);
        replace_if_set(&mut self.shutdown, overlay.shutdown);
        replace_if_set(&mut self.restart, overlay.restart);
    }
}

fn replace_if_set(target: &mut Vec<String>, overlay: Vec<String>) {
    if !overlay.is_empty() {
        *target = overlay;
    }
}

impl Config {
    /// Слияние одного override поверх текущей конфигурации
    pub fn merge(mut self, overlay: Config) -> Config {
        if !overlay.version.is_empty() {
            self.version = overlay.version;
        }

        for (name, overlay_wm) in overlay.window_managers {
            match self.window_managers.get_mut(&name) {
                Some(base_wm) => base_wm.merge(overlay_wm),
                None => {
                    self.window_managers.insert(name, overlay_wm);
                }
            }
        }

        self
    }

    /// Левая свёртка: каждый следующий override важнее предыдущего
    pub fn merge_all<I>(self, overlays: I) -> Config
    where
        I: IntoIterator<Item = Config>,
    {
        overlays.into_iter().fold(self, Config::merge)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.version.is_empty() {
            return Err(ValidationError::MissingVersion);
        }

        if self.window_managers.is_empty() {
            return Err(ValidationError::NoWindowManagers);
        }

        Ok(())
    }

    pub fn window_manager(&self, name: &str) -> Option<&WmConfig> {
        self.window_managers.get(name)
    }
}
