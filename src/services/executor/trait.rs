use crate::error::Result;

/// Запуск одной команды оболочки
#[async_trait::async_trait]
pub trait CommandRunner {
    /// Успех определяется кодом завершения процесса
    async fn run(&self, command: &str) -> Result<()>;
}

/// Factory function to create an appropriate runner based on the dry_run flag
pub fn create_command_runner(dry_run: bool) -> Box<dyn CommandRunner + Send + Sync> {
    if dry_run {
        Box::new(super::dry_run::DryRunRunner::new())
    } else {
        Box::new(super::shell::ShellRunner::new())
    }
}
