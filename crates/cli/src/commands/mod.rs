//! CLI command implementations.

mod run;
mod signals;
mod validate;

pub use run::run_session;
pub use signals::run_signals;
pub use validate::run_validate;
