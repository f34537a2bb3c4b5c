use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, warn};
mod action;
mod config;
mod error;
mod services;
mod utils;

use action::Action;
use config::{ConfigSources, CONFIG_ENV_VAR};
use services::session_detector::{detect_window_manager, Environment};
use services::{create_command_runner, execute_action, CommandResolver, SessionSignals};

#[derive(Parser, Debug)]
#[command(name = "byebye")]
#[command(about = "Блокировка, выход, сон и выключение с командами под текущую сессию")]
struct Args {
    /// Действие сессии
    #[arg(value_enum, required_unless_present_any = ["detect", "dump_config"])]
    action: Option<Action>,

    /// Дополнительный файл конфигурации (применяется последним)
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Только вывести найденные команды
    #[arg(long)]
    print: bool,

    /// Режим сухого запуска (без реальных действий)
    #[arg(long)]
    dry_run: bool,

    /// Показать определённую сессию и оконный менеджер
    #[arg(long)]
    detect: bool,

    /// Показать итоговую конфигурацию после слияния
    #[arg(long)]
    dump_config: bool,

    /// Уровень логирования
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Инициализация системы логирования
    init_tracing(&args.log_level)?;

    debug!("Запуск byebye v{}", env!("CARGO_PKG_VERSION"));

    let signals = SessionSignals::from_env();
    let sources = ConfigSources::standard(args.config.clone());
    debug!("Источники конфигурации: {:?}", sources.paths());

    // Только --detect: конфигурация не нужна
    if args.action.is_none() && !args.dump_config {
        let environment = Environment::detect(&signals);
        print_detection(&environment, detect_window_manager(&environment, &signals));
        return Ok(());
    }

    // Окружение и конфигурация определяются один раз на запуск
    let resolver = CommandResolver::from_sources(&sources, &signals)?;

    if args.detect {
        print_detection(resolver.environment(), resolver.window_manager());
    }

    if args.dump_config {
        let dump = serde_json::to_string_pretty(resolver.config()).map_err(error::ByeError::from)?;
        println!("{}", dump);
    }

    let Some(action) = args.action else {
        return Ok(());
    };

    let commands = resolver.commands_for(action.as_str())?;

    if args.print {
        for command in &commands {
            println!("{}", command);
        }
        return Ok(());
    }

    if args.dry_run {
        warn!("Режим сухого запуска - реальные действия отключены");
    }

    let runner = create_command_runner(args.dry_run);
    execute_action(runner.as_ref(), action.as_str(), &commands).await?;

    info!("Действие '{}' выполнено", action);
    Ok(())
}

fn print_detection(environment: &Environment, window_manager: &str) {
    println!("{}", environment);
    println!("window_manager={}", window_manager);
}

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    Ok(())
}
