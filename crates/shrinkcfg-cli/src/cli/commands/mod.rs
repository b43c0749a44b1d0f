//! CLI command handlers, one per file.

mod check;
mod compile;
mod names;
mod resolve;
mod show;

pub use check::run_check;
pub use compile::run_compile;
pub use names::run_names;
pub use resolve::run_resolve;
pub use show::run_show;
