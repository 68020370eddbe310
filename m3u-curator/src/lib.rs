mod cli;
mod config;
mod curator;
mod prompt;
mod report;
pub use cli::*;
pub use config::*;
pub use curator::*;
pub use prompt::*;
pub use report::*;
