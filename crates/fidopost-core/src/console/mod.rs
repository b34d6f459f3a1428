//! Station console module.
//!
//! Provides the bounded console log and its message model.

mod log;
mod model;

pub use log::ConsoleLog;
pub use model::ConsoleMessage;
