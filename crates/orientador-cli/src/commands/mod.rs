//! Command implementations.

pub mod ask;
pub mod stats;
pub mod tool;
pub mod tools;

pub use self::ask::execute_ask;
pub use self::stats::execute_stats;
pub use self::tool::{execute_tool, parse_params};
pub use self::tools::execute_tools;
