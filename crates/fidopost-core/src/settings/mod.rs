//! Station settings module.
//!
//! Provides the settings model, the raw preference store seam, and the
//! loader that turns stored preferences into a validated snapshot.

mod model;
mod store;
mod validation;

pub use model::{
    DEFAULT_BINKP_PORT, DEFAULT_CODEPAGE, DEFAULT_MAX_MESSAGES, MAX_LOCATION_LENGTH,
    MAX_ORIGIN_LENGTH, MAX_STATION_NAME_LENGTH, MAX_SYSOP_NAME_LENGTH, MAX_TEARLINE_LENGTH,
    StationSettings, UplinkConfig,
};
pub use store::{MemoryStore, SettingsStore, keys};
pub use validation::{SettingsError, load_settings};
