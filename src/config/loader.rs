use super::Config;
use crate::debug_if_enabled;
use crate::error::{ByeError, Result};
use figment::{
    providers::{Format, Json},
    Figment,
};
use once_cell::sync::Lazy;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const SYSTEM_CONFIG_PATH: &str = "/etc/byebye/config.json";
pub const CONFIG_ENV_VAR: &str = "BYEBYE_CONFIG";

const DEFAULT_CONFIG: &str = include_str!("defaults.json");
const DEFAULT_CONFIG_ORIGIN: &str = "<embedded defaults>";

// Встроенный документ проверяется тестами, ошибка разбора здесь - ошибка сборки
static DEFAULTS: Lazy<Config> = Lazy::new(|| {
    parse_document(DEFAULT_CONFIG, Path::new(DEFAULT_CONFIG_ORIGIN))
        .expect("встроенная конфигурация должна разбираться")
});

/// Упорядоченный список файлов-override: каждый следующий важнее предыдущего
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSources {
    paths: Vec<PathBuf>,
}

impl ConfigSources {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Системный файл, затем пользовательский, затем явно указанный
    /// (`--config` или `BYEBYE_CONFIG`)
    pub fn standard(explicit: Option<PathBuf>) -> Self {
        let mut paths = vec![PathBuf::from(SYSTEM_CONFIG_PATH)];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("byebye").join("config.json"));
        }

        if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
            paths.push(path);
        }

        Self::new(paths)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

fn parse_document(text: &str, origin: &Path) -> Result<Config> {
    Figment::from(Json::string(text))
        .extract()
        .map_err(|e| ByeError::parse(origin, e))
}

impl Config {
    /// Встроенная базовая конфигурация
    pub fn baseline() -> Config {
        DEFAULTS.clone()
    }

    /// Читает один override. `Ok(None)` - файла нет, это не ошибка.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Option<Config>> {
        let path = path.as_ref();

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug_if_enabled!("Файл конфигурации отсутствует, пропускаем: {}", path.display());
                return Ok(None);
            }
            Err(e) => {
                return Err(ByeError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        let config = parse_document(&text, path)?;
        info!("Загружен override конфигурации: {}", path.display());
        Ok(Some(config))
    }

    /// Все найденные override в порядке источников.
    /// Первая же ошибка чтения или разбора прерывает загрузку.
    pub fn load_overrides(sources: &ConfigSources) -> Result<Vec<Config>> {
        let mut overrides = Vec::new();
        for path in sources.paths() {
            if let Some(config) = Self::load_file(path)? {
                overrides.push(config);
            }
        }
        Ok(overrides)
    }

    /// База + override по порядку + валидация
    pub fn load(sources: &ConfigSources) -> Result<Config> {
        Self::load_onto(Self::baseline(), sources)
    }

    /// Проверяется только итог слияния, а не отдельные файлы
    fn load_onto(base: Config, sources: &ConfigSources) -> Result<Config> {
        let overrides = Self::load_overrides(sources)?;
        debug!("Найдено override-файлов: {}", overrides.len());

        let config = base.merge_all(overrides);
        config.validate()?;

        debug!(
            "Конфигурация версии {} готова, менеджеров: {}",
            config.version,
            config.window_managers.len()
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ActionSet;
    use crate::error::ValidationError;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_embedded_defaults_parse_and_validate() {
        let config = parse_document(DEFAULT_CONFIG, Path::new(DEFAULT_CONFIG_ORIGIN)).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.version, "1.0");

        for wm in ["Hyprland", "Sway", "KDE", "GNOME", "XFCE", "i3", "LXDE", "generic"] {
            assert!(config.window_manager(wm).is_some(), "нет записи для {}", wm);
        }

        let generic = config.window_manager("generic").unwrap();
        assert!(generic.lock.has_by_server());
        assert!(!generic.lock.for_server("X11").is_empty());
        assert!(!generic.lock.for_server("Wayland").is_empty());
    }

    #[test]
    fn test_baseline_matches_embedded_document() {
        let parsed = parse_document(DEFAULT_CONFIG, Path::new(DEFAULT_CONFIG_ORIGIN)).unwrap();
        assert_eq!(Config::baseline(), parsed);
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let loaded = Config::load_file(dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.json", "{ \"version\": ");

        match Config::load_file(&path) {
            Err(ByeError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("ожидалась ошибка разбора, получено {:?}", other),
        }
    }

    #[test]
    fn test_bad_lock_shape_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "lock.json",
            r#"{"windowManagers": {"i3": {"lock": "i3lock"}}}"#,
        );

        assert!(matches!(Config::load_file(&path), Err(ByeError::Parse { .. })));
    }

    #[test]
    fn test_null_action_lists_are_empty() {
        let config = parse_document(
            r#"{"version": "1", "windowManagers": {"X": {"logout": null, "sleep": ["s"]}}}"#,
            Path::new("null.json"),
        )
        .unwrap();
        let x = config.window_manager("X").unwrap();
        assert!(x.logout.is_empty());
        assert_eq!(x.sleep, vec!["s".to_string()]);

        let config = parse_document(
            r#"{"windowManagers": {"i3": {"lock": {"X11": null}}}}"#,
            Path::new("null.json"),
        )
        .unwrap();
        assert!(config.window_manager("i3").unwrap().lock.for_server("X11").is_empty());
    }

    #[test]
    fn test_null_list_keeps_baseline_commands() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "null.json",
            r#"{"windowManagers": {"Sway": {"logout": null, "shutdown": null}}}"#,
        );

        let config = Config::load(&ConfigSources::new(vec![path])).unwrap();
        let baseline = Config::baseline();
        assert_eq!(
            config.window_manager("Sway").unwrap().logout,
            baseline.window_manager("Sway").unwrap().logout
        );
    }

    #[test]
    fn test_merged_result_is_validated() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "wms.json",
            r#"{"windowManagers": {"i3": {"lock": ["i3lock"]}}}"#,
        );
        let sources = ConfigSources::new(vec![path]);

        match Config::load_onto(Config::default(), &sources) {
            Err(ByeError::Validation(ValidationError::MissingVersion)) => {}
            other => panic!("ожидалась ошибка валидации, получено {:?}", other),
        }

        let mut base = Config::default();
        base.version = "1.0".to_string();
        let config = Config::load_onto(base, &sources).unwrap();
        assert_eq!(
            config.window_manager("i3").map(|wm| &wm.lock),
            Some(&ActionSet::Commands(vec!["i3lock".to_string()]))
        );

        let empty = Config {
            version: "1.0".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            Config::load_onto(empty, &ConfigSources::default()),
            Err(ByeError::Validation(ValidationError::NoWindowManagers))
        ));
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            Config::load_file(dir.path()),
            Err(ByeError::Read { .. })
        ));
    }

    #[test]
    fn test_overrides_apply_in_source_order() {
        let dir = TempDir::new().unwrap();
        let system = write(
            &dir,
            "system.json",
            r#"{"windowManagers": {"Sway": {"shutdown": ["system-poweroff"]}}}"#,
        );
        let user = write(
            &dir,
            "user.json",
            r#"{"version": "2.0", "windowManagers": {"Sway": {"shutdown": ["user-poweroff"]}}}"#,
        );
        let sources = ConfigSources::new(vec![
            system,
            dir.path().join("missing.json"),
            user,
        ]);

        let overrides = Config::load_overrides(&sources).unwrap();
        assert_eq!(overrides.len(), 2);

        let config = Config::load(&sources).unwrap();
        assert_eq!(config.version, "2.0");
        let sway = config.window_manager("Sway").unwrap();
        assert_eq!(sway.shutdown, vec!["user-poweroff".to_string()]);
        // Остальное приходит из базовой конфигурации
        assert_eq!(sway.lock, ActionSet::Commands(vec!["swaylock -c 000000 -e".to_string()]));
    }

    #[test]
    fn test_malformed_override_aborts_before_later_paths() {
        let dir = TempDir::new().unwrap();
        let broken = write(&dir, "broken.json", "not json");
        let later = write(&dir, "later.json", r#"{"version": "9"}"#);

        let err = Config::load(&ConfigSources::new(vec![broken.clone(), later])).unwrap_err();
        match err {
            ByeError::Parse { path, .. } => assert_eq!(path, broken),
            other => panic!("ожидалась ошибка разбора, получено {:?}", other),
        }
    }

    #[test]
    fn test_no_sources_gives_baseline() {
        let config = Config::load(&ConfigSources::default()).unwrap();
        assert_eq!(config, Config::baseline());
    }

    #[test]
    fn test_standard_sources_order() {
        let explicit = PathBuf::from("/tmp/custom-byebye.json");
        let sources = ConfigSources::standard(Some(explicit.clone()));
        let paths = sources.paths();

        assert_eq!(paths.first(), Some(&PathBuf::from(SYSTEM_CONFIG_PATH)));
        assert_eq!(paths.last(), Some(&explicit));

        let without = ConfigSources::standard(Some(PathBuf::new()));
        assert!(!without.paths().contains(&PathBuf::new()));
    }
}
