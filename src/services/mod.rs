pub mod command_resolver;
pub mod executor;
pub mod session_detector;

pub use command_resolver::CommandResolver;
pub use executor::{create_command_runner, execute_action};
pub use session_detector::SessionSignals;
