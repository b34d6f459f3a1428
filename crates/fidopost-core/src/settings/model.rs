//! Station settings model types.

use fidopost_ftn::FtnAddress;
use serde::{Deserialize, Serialize};

/// Longest allowed sysop name, in characters.
pub const MAX_SYSOP_NAME_LENGTH: usize = 36;

/// Longest allowed station name, in characters.
pub const MAX_STATION_NAME_LENGTH: usize = 64;

/// Longest allowed station location, in characters.
pub const MAX_LOCATION_LENGTH: usize = 72;

/// Longest allowed origin line, in characters.
pub const MAX_ORIGIN_LENGTH: usize = 56;

/// Longest allowed tearline, in characters.
pub const MAX_TEARLINE_LENGTH: usize = 64;

/// TCP port assumed for an uplink that does not specify one.
pub const DEFAULT_BINKP_PORT: u16 = 24554;

/// Codepage selection assumed when none is stored.
pub const DEFAULT_CODEPAGE: &str = "auto";

/// Per-area message cap assumed when none is stored.
pub const DEFAULT_MAX_MESSAGES: u32 = 300;

/// Uplink node configuration.
///
/// The uplink is the node this station polls for mail. Its FTN address
/// goes into packet headers; host, port and password describe the
/// binkp session (session handling itself lives outside this crate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UplinkConfig {
    /// FTN address of the uplink node.
    pub ftn_address: FtnAddress,
    /// Internet hostname or literal address of the uplink mailer.
    pub host: String,
    /// TCP port of the uplink mailer.
    pub port: u16,
    /// Session password. Empty for an insecure link.
    pub password: String,
}

impl UplinkConfig {
    /// Creates an unconfigured uplink with the stock port.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ftn_address: FtnAddress::default(),
            host: String::new(),
            port: DEFAULT_BINKP_PORT,
            password: String::new(),
        }
    }
}

impl Default for UplinkConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// A validated bundle of station settings.
///
/// Tasks clone one snapshot when they start and read only that clone
/// for their whole run; rewriting settings produces a fresh snapshot
/// and never mutates an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSettings {
    /// Sysop name, written into message headers.
    pub sysop_name: String,
    /// Station name announced to other nodes.
    pub station_name: String,
    /// Primary location of the station.
    pub location: String,
    /// FTN addresses served by this station, main address first.
    pub addresses: Vec<FtnAddress>,
    /// Nodelist flags advertised by the station.
    pub nodelist_attrs: String,
    /// Uplink the station polls for mail.
    pub uplink: UplinkConfig,
    /// Origin line appended to outgoing echomail.
    pub origin: String,
    /// Tearline written into outgoing messages.
    pub tearline: String,
    /// Codepage selection for message text.
    pub codepage: String,
    /// Whether to apply the Russian-N transliteration workaround to
    /// outgoing text.
    pub replace_russian_n: bool,
    /// Template inserted above a fresh message.
    pub new_message_header: String,
    /// Template inserted above a reply.
    pub reply_header: String,
    /// Signature appended to outgoing messages.
    pub signature: String,
    /// Cap on messages kept per message area.
    pub max_messages: u32,
}

impl StationSettings {
    /// Creates the unconfigured snapshot: empty identity fields, no
    /// addresses, an unconfigured uplink and the stock defaults.
    ///
    /// [`load_settings`](crate::settings::load_settings) never returns
    /// this value; it stands in before configuration is loaded.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sysop_name: String::new(),
            station_name: String::new(),
            location: String::new(),
            addresses: Vec::new(),
            nodelist_attrs: String::new(),
            uplink: UplinkConfig::new(),
            origin: String::new(),
            tearline: String::new(),
            codepage: DEFAULT_CODEPAGE.to_string(),
            replace_russian_n: true,
            new_message_header: String::new(),
            reply_header: String::new(),
            signature: String::new(),
            max_messages: DEFAULT_MAX_MESSAGES,
        }
    }

    /// Main address of the station, when at least one is configured.
    #[must_use]
    pub fn main_address(&self) -> Option<&FtnAddress> {
        self.addresses.first()
    }
}

impl Default for StationSettings {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::redundant_clone,
    clippy::manual_string_new,
    clippy::needless_collect,
    clippy::unreadable_literal,
    clippy::used_underscore_items,
    clippy::similar_names
)]
mod tests {
    use super::*;

    #[test]
    fn test_new_settings_carry_stock_defaults() {
        let settings = StationSettings::new();
        assert!(settings.sysop_name.is_empty());
        assert!(settings.addresses.is_empty());
        assert!(settings.main_address().is_none());
        assert_eq!(settings.codepage, DEFAULT_CODEPAGE);
        assert_eq!(settings.max_messages, DEFAULT_MAX_MESSAGES);
        assert!(settings.replace_russian_n);
        assert_eq!(settings.uplink.port, DEFAULT_BINKP_PORT);
    }

    #[test]
    fn test_main_address_is_first() {
        let mut settings = StationSettings::new();
        settings.addresses = vec![
            FtnAddress::parse("2:221/1").unwrap(),
            FtnAddress::parse("2:221/1.1").unwrap(),
        ];
        assert_eq!(
            settings.main_address(),
            Some(&FtnAddress::parse("2:221/1").unwrap())
        );
    }
}
