use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Действие сессии, которое можно запросить из меню или командной строки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Action {
    Lock,
    Logout,
    Sleep,
    Suspend,
    Hibernate,
    Shutdown,
    Restart,
}

impl Action {
    pub const ALL: [Action; 7] = [
        Action::Lock,
        Action::Logout,
        Action::Sleep,
        Action::Suspend,
        Action::Hibernate,
        Action::Shutdown,
        Action::Restart,
    ];

    /// Имя действия, совпадающее с ключом в конфигурации
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Lock => "lock",
            Action::Logout => "logout",
            Action::Sleep => "sleep",
            Action::Suspend => "suspend",
            Action::Hibernate => "hibernate",
            Action::Shutdown => "shutdown",
            Action::Restart => "restart",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("неизвестное действие: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    /// Точное совпадение с именем из конфигурации (регистр важен)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| UnknownAction(s.to_string()))
    }
}
