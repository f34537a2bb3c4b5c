//! Executor service: responsibility and boundaries
//!
//! Runs an already resolved, ordered command list for one action. It knows
//! nothing about configuration or session detection; it only applies the
//! fallback policy: try commands in order, stop after the first success,
//! except that a command launched into the background (trailing `&`) never
//! ends the sequence.

mod dry_run;
mod shell;
mod r#trait;

pub use self::r#trait::{create_command_runner, CommandRunner};

use crate::error::{ByeError, Result};
use tracing::{info, warn};

/// Маркер фонового запуска в конце команды
const BACKGROUND_MARKER: char = '&';

/// Успешная команда завершает перебор, если она не запущена в фоне
pub fn should_stop_after_success(command: &str) -> bool {
    !command.trim().ends_with(BACKGROUND_MARKER)
}

/// Перебирает команды по порядку до первой успешной (фоновые не в счёт).
/// Ошибка, если последняя попытка оказалась неудачной.
pub async fn execute_action<R>(runner: &R, action: &str, commands: &[String]) -> Result<()>
where
    R: CommandRunner + Sync + ?Sized,
{
    let mut last_failure: Option<String> = None;

    for command in commands {
        if command.trim().is_empty() {
            continue;
        }

        info!("{}: запуск '{}'", action, command);
        match runner.run(command).await {
            Ok(()) => {
                last_failure = None;
                if should_stop_after_success(command) {
                    return Ok(());
                }
            }
            Err(e) => {
                warn!("{}: команда не сработала: {}", action, e);
                last_failure = Some(command.clone());
            }
        }
    }

    match last_failure {
        Some(last) => Err(ByeError::Execution {
            action: action.to_string(),
            last,
        }),
        None => Ok(()),
    }
}
