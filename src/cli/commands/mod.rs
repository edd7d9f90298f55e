//! Command implementations.
//!
//! Each subcommand has its own module with a struct implementing
//! [`Command`]. The [`CommandDispatcher`] routes parsed arguments to them.

pub mod config;
pub mod dispatcher;
pub mod plan;
pub mod resolve;

pub use config::ConfigCommand;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use plan::PlanCommand;
pub use resolve::ResolveCommand;
