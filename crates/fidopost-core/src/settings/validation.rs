//! Settings validation and loading.

use fidopost_ftn::FtnAddress;
use tracing::debug;

use super::model::{
    DEFAULT_BINKP_PORT, DEFAULT_CODEPAGE, DEFAULT_MAX_MESSAGES, MAX_LOCATION_LENGTH,
    MAX_ORIGIN_LENGTH, MAX_STATION_NAME_LENGTH, MAX_SYSOP_NAME_LENGTH, MAX_TEARLINE_LENGTH,
    StationSettings, UplinkConfig,
};
use super::store::{SettingsStore, keys};

/// Validation error for station settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Sysop name is missing or empty.
    NoSysopName,
    /// Sysop name is too long.
    SysopNameTooLong,
    /// Station name is missing or empty.
    NoStationName,
    /// Station name is too long.
    StationNameTooLong,
    /// Station location is missing or empty.
    NoLocation,
    /// Station location is too long.
    LocationTooLong,
    /// No station FTN address is stored.
    NoSystemAddress,
    /// A station FTN address does not parse or validate.
    BadSystemAddress,
    /// Nodelist flags contain a disallowed character.
    BadNodelistAttributes,
    /// Uplink FTN address is missing or empty.
    NoUplinkFtnAddress,
    /// Uplink FTN address does not parse or validate.
    BadUplinkFtnAddress,
    /// Uplink internet address is missing or empty.
    NoUplinkInetAddress,
    /// Uplink internet address contains whitespace.
    BadUplinkInetAddress,
    /// Uplink TCP port is stored but empty.
    NoUplinkInetPort,
    /// Uplink TCP port is not a number in `0..=65535`.
    BadUplinkInetPort,
    /// Origin line is too long.
    OriginTooLong,
    /// Tearline is too long.
    TearlineTooLong,
    /// Per-area message cap is not a non-negative number.
    BadMaxMessages,
}

impl SettingsError {
    /// Get human-readable error message.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoSysopName => "Sysop name is not specified",
            Self::SysopNameTooLong => "Sysop name must be no longer than 36 symbols",
            Self::NoStationName => "Station name is not specified",
            Self::StationNameTooLong => "Station name is longer than 64 symbols",
            Self::NoLocation => "Primary location of the station is not specified",
            Self::LocationTooLong => "Primary station location is longer than 72 symbols",
            Self::NoSystemAddress => "FTN addresses of the station are not specified",
            Self::BadSystemAddress => "Malformed FTN address of the station",
            Self::BadNodelistAttributes => "Nodelist attributes contain disallowed characters",
            Self::NoUplinkFtnAddress => "FTN address of the uplink node is not specified",
            Self::BadUplinkFtnAddress => "Malformed FTN address of the uplink node",
            Self::NoUplinkInetAddress => "Uplink internet address is not set",
            Self::BadUplinkInetAddress => "Uplink internet address is incorrect",
            Self::NoUplinkInetPort => "Uplink TCP port is not set",
            Self::BadUplinkInetPort => "Incorrect uplink TCP port is specified",
            Self::OriginTooLong => "Origin text must be no longer than 56 symbols",
            Self::TearlineTooLong => "Tearline must be no longer than 64 symbols",
            Self::BadMaxMessages => "Incorrect value of the maximum messages number",
        }
    }

    /// Get the preference key this error relates to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::NoSysopName | Self::SysopNameTooLong => keys::SYSOP_NAME,
            Self::NoStationName | Self::StationNameTooLong => keys::STATION_NAME,
            Self::NoLocation | Self::LocationTooLong => keys::LOCATION,
            Self::NoSystemAddress | Self::BadSystemAddress => keys::FTN_ADDRESSES,
            Self::BadNodelistAttributes => keys::NODELIST_ATTRS,
            Self::NoUplinkFtnAddress | Self::BadUplinkFtnAddress => keys::UPLINK_FTN_ADDRESS,
            Self::NoUplinkInetAddress | Self::BadUplinkInetAddress => keys::UPLINK_INET_ADDRESS,
            Self::NoUplinkInetPort | Self::BadUplinkInetPort => keys::UPLINK_INET_PORT,
            Self::OriginTooLong => keys::ORIGIN,
            Self::TearlineTooLong => keys::TEARLINE,
            Self::BadMaxMessages => keys::MAX_MESSAGES,
        }
    }
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for SettingsError {}

/// Reads raw preferences from `store`, checks every field and builds a
/// settings snapshot.
///
/// Checking is fail-fast: the first violated rule is returned and
/// later fields are not inspected. Address problems surface through
/// this taxonomy ([`SettingsError::BadSystemAddress`],
/// [`SettingsError::BadUplinkFtnAddress`]) rather than as address
/// errors.
///
/// # Errors
///
/// Returns the [`SettingsError`] for the first missing or invalid
/// preference.
pub fn load_settings(store: &dyn SettingsStore) -> Result<StationSettings, SettingsError> {
    let sysop_name = required(store, keys::SYSOP_NAME, SettingsError::NoSysopName)?;
    if sysop_name.chars().count() > MAX_SYSOP_NAME_LENGTH {
        return Err(SettingsError::SysopNameTooLong);
    }

    let station_name = required(store, keys::STATION_NAME, SettingsError::NoStationName)?;
    if station_name.chars().count() > MAX_STATION_NAME_LENGTH {
        return Err(SettingsError::StationNameTooLong);
    }

    let location = required(store, keys::LOCATION, SettingsError::NoLocation)?;
    if location.chars().count() > MAX_LOCATION_LENGTH {
        return Err(SettingsError::LocationTooLong);
    }

    let addresses = store
        .get(keys::FTN_ADDRESSES)
        .ok_or(SettingsError::NoSystemAddress)?
        .split_whitespace()
        .map(|text| FtnAddress::parse(text).map_err(|_| SettingsError::BadSystemAddress))
        .collect::<Result<Vec<_>, _>>()?;
    if addresses.is_empty() {
        return Err(SettingsError::NoSystemAddress);
    }

    let nodelist_attrs = store
        .get(keys::NODELIST_ATTRS)
        .map(|value| value.trim().to_string())
        .unwrap_or_default();
    if !nodelist_attrs.bytes().all(is_attribute_byte) {
        return Err(SettingsError::BadNodelistAttributes);
    }

    let uplink_ftn = required(
        store,
        keys::UPLINK_FTN_ADDRESS,
        SettingsError::NoUplinkFtnAddress,
    )?;
    let uplink_ftn =
        FtnAddress::parse(&uplink_ftn).map_err(|_| SettingsError::BadUplinkFtnAddress)?;

    let uplink_host = required(
        store,
        keys::UPLINK_INET_ADDRESS,
        SettingsError::NoUplinkInetAddress,
    )?;
    if uplink_host.bytes().any(|byte| byte == b' ') {
        return Err(SettingsError::BadUplinkInetAddress);
    }

    let port_text = store.get(keys::UPLINK_INET_PORT).map_or_else(
        || DEFAULT_BINKP_PORT.to_string(),
        |value| value.trim().to_string(),
    );
    if port_text.is_empty() {
        return Err(SettingsError::NoUplinkInetPort);
    }
    let port = port_text
        .parse::<u16>()
        .map_err(|_| SettingsError::BadUplinkInetPort)?;

    let origin = store.get(keys::ORIGIN).unwrap_or_default();
    if origin.chars().count() > MAX_ORIGIN_LENGTH {
        return Err(SettingsError::OriginTooLong);
    }

    let tearline = store.get(keys::TEARLINE).unwrap_or_default();
    if tearline.chars().count() > MAX_TEARLINE_LENGTH {
        return Err(SettingsError::TearlineTooLong);
    }

    let max_messages = match store.get(keys::MAX_MESSAGES) {
        Some(value) => value.parse::<u32>().map_err(|_| SettingsError::BadMaxMessages)?,
        None => DEFAULT_MAX_MESSAGES,
    };

    let settings = StationSettings {
        sysop_name,
        station_name,
        location,
        addresses,
        nodelist_attrs,
        uplink: UplinkConfig {
            ftn_address: uplink_ftn,
            host: uplink_host,
            port,
            password: store.get(keys::UPLINK_PASSWORD).unwrap_or_default(),
        },
        origin,
        tearline,
        codepage: store
            .get(keys::CODEPAGE)
            .unwrap_or_else(|| DEFAULT_CODEPAGE.to_string()),
        replace_russian_n: store
            .get(keys::REPLACE_RUSSIAN_N)
            .is_none_or(|value| value == "yes"),
        new_message_header: store.get(keys::NEW_MESSAGE_HEADER).unwrap_or_default(),
        reply_header: store.get(keys::REPLY_HEADER).unwrap_or_default(),
        signature: store.get(keys::SIGNATURE).unwrap_or_default(),
        max_messages,
    };

    debug!("Station settings loaded with {} addresses", settings.addresses.len());
    Ok(settings)
}

/// Reads a key whose value must be present and nonempty after
/// trimming.
fn required(
    store: &dyn SettingsStore,
    key: &str,
    missing: SettingsError,
) -> Result<String, SettingsError> {
    match store.get(key) {
        Some(value) => {
            let value = value.trim();
            if value.is_empty() {
                Err(missing)
            } else {
                Ok(value.to_string())
            }
        }
        None => Err(missing),
    }
}

/// True for bytes allowed in nodelist flags: printable ASCII below
/// DEL, excluding the dot.
const fn is_attribute_byte(byte: u8) -> bool {
    byte > 32 && byte < 127 && byte != b'.'
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
    use super::super::store::MemoryStore;
    use super::*;

    /// A store holding the smallest complete configuration.
    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.set(keys::SYSOP_NAME, "Alice Example");
        store.set(keys::STATION_NAME, "Night Station");
        store.set(keys::LOCATION, "Helsinki, Finland");
        store.set(keys::FTN_ADDRESSES, "2:221/1 2:221/1.1");
        store.set(keys::UPLINK_FTN_ADDRESS, "2:221/0");
        store.set(keys::UPLINK_INET_ADDRESS, "binkp.example.net");
        store
    }

    #[test]
    fn test_loads_minimal_configuration() {
        let store = seeded_store();
        let settings = load_settings(&store).unwrap();

        assert_eq!(settings.sysop_name, "Alice Example");
        assert_eq!(settings.station_name, "Night Station");
        assert_eq!(settings.location, "Helsinki, Finland");
        assert_eq!(settings.addresses.len(), 2);
        assert_eq!(settings.addresses[0].to_string(), "2:221/1.0@fidonet");
        assert_eq!(settings.addresses[1].point(), 1);
        assert_eq!(settings.uplink.ftn_address.node(), 0);
        assert_eq!(settings.uplink.host, "binkp.example.net");
        assert_eq!(settings.uplink.port, DEFAULT_BINKP_PORT);
        assert_eq!(settings.uplink.password, "");
        assert_eq!(settings.codepage, "auto");
        assert!(settings.replace_russian_n);
        assert_eq!(settings.max_messages, 300);
    }

    #[test]
    fn test_trims_identity_fields() {
        let store = seeded_store();
        store.set(keys::SYSOP_NAME, "  Alice Example  ");
        let settings = load_settings(&store).unwrap();
        assert_eq!(settings.sysop_name, "Alice Example");
    }

    #[test]
    fn test_missing_and_empty_sysop_name() {
        let store = seeded_store();
        store.remove(keys::SYSOP_NAME);
        assert_eq!(load_settings(&store), Err(SettingsError::NoSysopName));

        store.set(keys::SYSOP_NAME, "   ");
        assert_eq!(load_settings(&store), Err(SettingsError::NoSysopName));
    }

    #[test]
    fn test_length_limits_count_characters() {
        let store = seeded_store();
        store.set(keys::SYSOP_NAME, &"x".repeat(37));
        assert_eq!(load_settings(&store), Err(SettingsError::SysopNameTooLong));

        // 36 multibyte characters are still within the limit.
        let store = seeded_store();
        store.set(keys::SYSOP_NAME, &"ä".repeat(36));
        assert!(load_settings(&store).is_ok());

        let store = seeded_store();
        store.set(keys::STATION_NAME, &"x".repeat(65));
        assert_eq!(load_settings(&store), Err(SettingsError::StationNameTooLong));

        let store = seeded_store();
        store.set(keys::LOCATION, &"x".repeat(73));
        assert_eq!(load_settings(&store), Err(SettingsError::LocationTooLong));
    }

    #[test]
    fn test_missing_station_name_and_location() {
        let store = seeded_store();
        store.remove(keys::STATION_NAME);
        assert_eq!(load_settings(&store), Err(SettingsError::NoStationName));

        let store = seeded_store();
        store.remove(keys::LOCATION);
        assert_eq!(load_settings(&store), Err(SettingsError::NoLocation));
    }

    #[test]
    fn test_station_addresses_required() {
        let store = seeded_store();
        store.remove(keys::FTN_ADDRESSES);
        assert_eq!(load_settings(&store), Err(SettingsError::NoSystemAddress));

        store.set(keys::FTN_ADDRESSES, "   ");
        assert_eq!(load_settings(&store), Err(SettingsError::NoSystemAddress));
    }

    #[test]
    fn test_station_addresses_must_parse_and_validate() {
        let store = seeded_store();
        store.set(keys::FTN_ADDRESSES, "2:221/1 nonsense");
        assert_eq!(load_settings(&store), Err(SettingsError::BadSystemAddress));

        // A range violation is reported the same way as a parse one.
        store.set(keys::FTN_ADDRESSES, "3:0/1");
        assert_eq!(load_settings(&store), Err(SettingsError::BadSystemAddress));
    }

    #[test]
    fn test_nodelist_attributes() {
        let store = seeded_store();
        store.set(keys::NODELIST_ATTRS, "CM,XA,V34");
        let settings = load_settings(&store).unwrap();
        assert_eq!(settings.nodelist_attrs, "CM,XA,V34");

        store.set(keys::NODELIST_ATTRS, "CM XA");
        assert_eq!(
            load_settings(&store),
            Err(SettingsError::BadNodelistAttributes)
        );

        store.set(keys::NODELIST_ATTRS, "CM.XA");
        assert_eq!(
            load_settings(&store),
            Err(SettingsError::BadNodelistAttributes)
        );
    }

    #[test]
    fn test_uplink_ftn_address() {
        let store = seeded_store();
        store.remove(keys::UPLINK_FTN_ADDRESS);
        assert_eq!(load_settings(&store), Err(SettingsError::NoUplinkFtnAddress));

        store.set(keys::UPLINK_FTN_ADDRESS, "1:2:3/4");
        assert_eq!(
            load_settings(&store),
            Err(SettingsError::BadUplinkFtnAddress)
        );
    }

    #[test]
    fn test_uplink_inet_address() {
        let store = seeded_store();
        store.remove(keys::UPLINK_INET_ADDRESS);
        assert_eq!(
            load_settings(&store),
            Err(SettingsError::NoUplinkInetAddress)
        );

        store.set(keys::UPLINK_INET_ADDRESS, "bad host.example.net");
        assert_eq!(
            load_settings(&store),
            Err(SettingsError::BadUplinkInetAddress)
        );
    }

    #[test]
    fn test_uplink_port() {
        let store = seeded_store();
        store.set(keys::UPLINK_INET_PORT, "");
        assert_eq!(load_settings(&store), Err(SettingsError::NoUplinkInetPort));

        store.set(keys::UPLINK_INET_PORT, "binkp");
        assert_eq!(load_settings(&store), Err(SettingsError::BadUplinkInetPort));

        store.set(keys::UPLINK_INET_PORT, "70000");
        assert_eq!(load_settings(&store), Err(SettingsError::BadUplinkInetPort));

        store.set(keys::UPLINK_INET_PORT, "-1");
        assert_eq!(load_settings(&store), Err(SettingsError::BadUplinkInetPort));

        store.set(keys::UPLINK_INET_PORT, "24555");
        let settings = load_settings(&store).unwrap();
        assert_eq!(settings.uplink.port, 24555);
    }

    #[test]
    fn test_text_limits_for_origin_and_tearline() {
        let store = seeded_store();
        store.set(keys::ORIGIN, &"x".repeat(57));
        assert_eq!(load_settings(&store), Err(SettingsError::OriginTooLong));

        let store = seeded_store();
        store.set(keys::TEARLINE, &"x".repeat(65));
        assert_eq!(load_settings(&store), Err(SettingsError::TearlineTooLong));

        let store = seeded_store();
        store.set(keys::ORIGIN, "The Night Station (2:221/1)");
        store.set(keys::TEARLINE, "fidopost");
        let settings = load_settings(&store).unwrap();
        assert_eq!(settings.origin, "The Night Station (2:221/1)");
        assert_eq!(settings.tearline, "fidopost");
    }

    #[test]
    fn test_max_messages() {
        let store = seeded_store();
        store.set(keys::MAX_MESSAGES, "500");
        let settings = load_settings(&store).unwrap();
        assert_eq!(settings.max_messages, 500);

        store.set(keys::MAX_MESSAGES, "abc");
        assert_eq!(load_settings(&store), Err(SettingsError::BadMaxMessages));

        store.set(keys::MAX_MESSAGES, "-5");
        assert_eq!(load_settings(&store), Err(SettingsError::BadMaxMessages));
    }

    #[test]
    fn test_optional_text_fields_pass_through() {
        let store = seeded_store();
        store.set(keys::UPLINK_PASSWORD, "s3cret");
        store.set(keys::CODEPAGE, "cp866");
        store.set(keys::REPLACE_RUSSIAN_N, "no");
        store.set(keys::NEW_MESSAGE_HEADER, "Hello, @to@!");
        store.set(keys::REPLY_HEADER, "@to@ wrote to @from@:");
        store.set(keys::SIGNATURE, "... Alice");

        let settings = load_settings(&store).unwrap();
        assert_eq!(settings.uplink.password, "s3cret");
        assert_eq!(settings.codepage, "cp866");
        assert!(!settings.replace_russian_n);
        assert_eq!(settings.new_message_header, "Hello, @to@!");
        assert_eq!(settings.reply_header, "@to@ wrote to @from@:");
        assert_eq!(settings.signature, "... Alice");
    }

    #[test]
    fn test_first_violation_wins() {
        // Two fields are bad; the sysop name is checked first.
        let store = seeded_store();
        store.set(keys::SYSOP_NAME, &"x".repeat(40));
        store.set(keys::UPLINK_INET_PORT, "nonsense");
        assert_eq!(load_settings(&store), Err(SettingsError::SysopNameTooLong));
    }

    #[test]
    fn test_message_and_field_lookup() {
        assert_eq!(
            SettingsError::NoSysopName.message(),
            "Sysop name is not specified"
        );
        assert_eq!(SettingsError::NoSysopName.field(), keys::SYSOP_NAME);
        assert_eq!(SettingsError::BadUplinkInetPort.field(), keys::UPLINK_INET_PORT);
        assert_eq!(
            SettingsError::BadMaxMessages.to_string(),
            SettingsError::BadMaxMessages.message()
        );
    }
}
