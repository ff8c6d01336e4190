pub mod cli;
pub mod parser;
pub mod report;
pub mod schema;
pub mod writer;

pub use cli::{Cli, Commands};
pub use report::{ConsoleReporter, MemoryReporter, Reporter, SilentReporter};
