//! # fidopost-core
//!
//! Core station logic for the `fidopost` FTN mail station.
//!
//! This crate provides:
//! - Station settings: a validated snapshot model loaded from a
//!   pluggable preference store
//! - The console log: a bounded, capacity-evicting message buffer
//! - Station events: a bounded channel that tells the display layer
//!   when the log or the settings changed
//!
//! Anything that touches the network (binkp sessions, packet exchange)
//! or the screen lives in other crates; this one holds the state they
//! share.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod console;
mod error;
pub mod notify;
pub mod settings;

pub use console::{ConsoleLog, ConsoleMessage};
pub use error::{Error, Result};
pub use notify::{EventSender, StationEvent};
pub use settings::{
    MemoryStore, SettingsError, SettingsStore, StationSettings, UplinkConfig, load_settings,
};
