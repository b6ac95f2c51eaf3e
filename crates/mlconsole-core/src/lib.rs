pub mod config;
pub mod credentials;
pub mod exceptions;
mod macros;
pub mod models;
pub mod operations;
pub mod session;
pub mod utils;

// used by `get_mlconsole_setting!` so callers don't need their own `log` dependency
#[doc(hidden)]
pub use log as __log;
