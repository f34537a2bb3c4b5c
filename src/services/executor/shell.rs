use crate::error::{ByeError, Result};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

const SHELL: &str = "sh";

/// Выполняет команду через `sh -c`, вывод идёт прямо в терминал
pub struct ShellRunner;

impl ShellRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl super::r#trait::CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<()> {
        debug!("{} -c '{}'", SHELL, command);

        let status = Command::new(SHELL)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| ByeError::Spawn {
                command: command.to_string(),
                source: e,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(ByeError::ExitStatus {
                command: command.to_string(),
                code: status.code(),
            })
        }
    }
}
