use crate::error::Result;
use tracing::info;

pub struct DryRunRunner;

impl DryRunRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl super::r#trait::CommandRunner for DryRunRunner {
    async fn run(&self, command: &str) -> Result<()> {
        info!("Dry-run: команда не выполняется: {}", command);
        println!("{}", command);
        Ok(())
    }
}
