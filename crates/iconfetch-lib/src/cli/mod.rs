mod args;
mod fetch;
mod params;
mod plan;
mod resolved_command;

pub use args::{Args, Command, SourceOptions, parse_args};
pub use fetch::run_fetch;
pub use params::{FetchParams, PlanParams};
pub use plan::run_plan;
pub use resolved_command::{ResolvedCommand, resolve_command};
