use std::path::PathBuf;
use thiserror::Error;

/// Проблемы структуры итоговой (слитой) конфигурации
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("не задана версия конфигурации (version)")]
    MissingVersion,

    #[error("не описан ни один оконный менеджер (windowManagers)")]
    NoWindowManagers,
}

#[derive(Error, Debug)]
pub enum ByeError {
    #[error("Ошибка загрузки: не удалось прочитать {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Ошибка разбора: {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },

    #[error("Ошибка валидации конфигурации: {0}")]
    Validation(#[from] ValidationError),

    #[error("Ошибка разрешения: нет команд для действия '{action}' (менеджер: {wm})")]
    NoCommands { action: String, wm: String },

    #[error("Ошибка выполнения '{action}': ни одна команда не завершилась успешно (последняя: {last})")]
    Execution { action: String, last: String },

    #[error("Ошибка выполнения: не удалось запустить '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Ошибка выполнения: команда '{command}' завершилась с кодом {code:?}")]
    ExitStatus { command: String, code: Option<i32> },

    #[error("Ошибка сериализации: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ByeError {
    pub fn parse(path: impl Into<PathBuf>, source: figment::Error) -> Self {
        ByeError::Parse {
            path: path.into(),
            source: Box::new(source),
        }
    }

    pub fn no_commands<T>(action: impl Into<String>, wm: impl Into<String>) -> Result<T> {
        Err(ByeError::NoCommands {
            action: action.into(),
            wm: wm.into(),
        })
    }
}

pub type Result<T> = std::result::Result<T, ByeError>;
