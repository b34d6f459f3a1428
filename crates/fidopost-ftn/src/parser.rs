//! Splitting an address string into its syntactic fields.

use crate::address::FtnAddress;
use crate::error::ParseError;

/// Fields of an FTN address as written, before range checking.
///
/// This is the output of the parse stage: every field already has the
/// right shape (decimal numbers, a raw domain string) but nothing has
/// been checked against the FRL-1002 ranges yet. Call
/// [`validate`](RawFtnAddress::validate) to obtain a validated
/// [`FtnAddress`].
///
/// Numeric fields are held as `i64` so that values beyond the 16-bit
/// field ranges survive parsing and fail validation with a range
/// error instead of a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFtnAddress {
    /// Zone number as written, or [`FtnAddress::DEFAULT_ZONE`] when
    /// the `zone:` prefix is absent.
    pub zone: i64,
    /// Net number as written.
    pub net: i64,
    /// Node number as written. The only field that may carry a sign.
    pub node: i64,
    /// Point number as written, or `0` when the `.point` suffix is
    /// absent.
    pub point: i64,
    /// Domain as written, or [`FtnAddress::DEFAULT_DOMAIN`] when the
    /// `@domain` suffix is absent.
    pub domain: String,
}

impl RawFtnAddress {
    /// Splits `text` into address fields.
    ///
    /// Whitespace around the whole address is trimmed once before
    /// splitting; whitespace inside a field stays part of that field
    /// and makes it malformed. Separators are handled in a fixed
    /// order (`/`, then `:`, then `@`, then `.`) and the first
    /// violated rule aborts the parse.
    ///
    /// # Errors
    ///
    /// Returns the [`ParseError`] for the first violated grammar rule.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let text = text.trim();

        // Net and node are the only required fields, separated by a
        // single slash.
        let parts: Vec<&str> = text.split('/').collect();
        if parts.len() < 2 {
            return Err(ParseError::MissingNetworkField);
        }
        if parts.len() > 2 {
            return Err(ParseError::ExtraSlashCharacter);
        }

        // Before the slash: `zone:net` or a bare `net`.
        let network: Vec<&str> = parts[0].split(':').collect();
        if network.len() > 2 {
            return Err(ParseError::ExtraColonCharacter);
        }
        let (zone, net) = if network.len() == 2 {
            (
                parse_unsigned(network[0], ParseError::InvalidZoneValue)?,
                parse_unsigned(network[1], ParseError::InvalidNetValue)?,
            )
        } else {
            (
                i64::from(FtnAddress::DEFAULT_ZONE),
                parse_unsigned(network[0], ParseError::InvalidNetValue)?,
            )
        };

        // After the slash: `node[.point][@domain]`.
        let station: Vec<&str> = parts[1].split('@').collect();
        if station.len() > 2 {
            return Err(ParseError::ExtraAtCharacter);
        }
        let domain = if station.len() == 2 {
            station[1].to_string()
        } else {
            FtnAddress::DEFAULT_DOMAIN.to_string()
        };

        // Point is examined before node, so a pair with both fields
        // malformed reports the point error.
        let node_and_point: Vec<&str> = station[0].split('.').collect();
        if node_and_point.len() > 2 {
            return Err(ParseError::ExtraDotCharacter);
        }
        let point = if node_and_point.len() == 2 {
            parse_unsigned(node_and_point[1], ParseError::InvalidPointValue)?
        } else {
            0
        };
        let node = node_and_point[0]
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidNodeValue)?;

        Ok(Self {
            zone,
            net,
            node,
            point,
            domain,
        })
    }
}

/// Parses a field that may not carry a sign.
///
/// A leading minus in zone, net or point is malformed input for that
/// field, never a range violation.
fn parse_unsigned(text: &str, invalid: ParseError) -> Result<i64, ParseError> {
    if text.starts_with('-') {
        return Err(invalid);
    }
    text.parse::<i64>().map_err(|_| invalid)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_address() {
        let raw = RawFtnAddress::parse("1:234/5.6@fidonet").unwrap();
        assert_eq!(raw.zone, 1);
        assert_eq!(raw.net, 234);
        assert_eq!(raw.node, 5);
        assert_eq!(raw.point, 6);
        assert_eq!(raw.domain, "fidonet");
    }

    #[test]
    fn applies_defaults_for_omitted_fields() {
        let raw = RawFtnAddress::parse("123/45").unwrap();
        assert_eq!(raw.zone, 1);
        assert_eq!(raw.net, 123);
        assert_eq!(raw.node, 45);
        assert_eq!(raw.point, 0);
        assert_eq!(raw.domain, "fidonet");
    }

    #[test]
    fn trims_surrounding_whitespace_once() {
        let raw = RawFtnAddress::parse("   2:259/67.8   ").unwrap();
        assert_eq!(raw.net, 259);
        assert_eq!(raw.node, 67);
    }

    #[test]
    fn keeps_out_of_range_values_for_validation() {
        let raw = RawFtnAddress::parse("99999:123456/7.8").unwrap();
        assert_eq!(raw.zone, 99999);
        assert_eq!(raw.net, 123456);
    }

    #[test]
    fn keeps_raw_domain_for_validation() {
        let raw = RawFtnAddress::parse("1:2/3@a domain that is too long").unwrap();
        assert_eq!(raw.domain, "a domain that is too long");
    }

    #[test]
    fn rejects_missing_slash() {
        assert_eq!(
            RawFtnAddress::parse("abcd"),
            Err(ParseError::MissingNetworkField)
        );
        assert_eq!(RawFtnAddress::parse(""), Err(ParseError::MissingNetworkField));
    }

    #[test]
    fn rejects_extra_separators() {
        assert_eq!(
            RawFtnAddress::parse("abcd/efgh/zxc"),
            Err(ParseError::ExtraSlashCharacter)
        );
        assert_eq!(
            RawFtnAddress::parse("1:1:234/145"),
            Err(ParseError::ExtraColonCharacter)
        );
        assert_eq!(
            RawFtnAddress::parse("1:123/4.1@dom@dom"),
            Err(ParseError::ExtraAtCharacter)
        );
        assert_eq!(
            RawFtnAddress::parse("1:234/145.76.b"),
            Err(ParseError::ExtraDotCharacter)
        );
    }

    #[test]
    fn checks_point_before_node() {
        // Both halves of "12d.x1" are malformed; the point error wins.
        assert_eq!(
            RawFtnAddress::parse("23:4/12d.x1"),
            Err(ParseError::InvalidPointValue)
        );
    }

    #[test]
    fn rejects_signed_zone_net_and_point() {
        assert_eq!(
            RawFtnAddress::parse("-1:234/5"),
            Err(ParseError::InvalidZoneValue)
        );
        assert_eq!(
            RawFtnAddress::parse("1:-234/5"),
            Err(ParseError::InvalidNetValue)
        );
        assert_eq!(
            RawFtnAddress::parse("2:34/6.-1"),
            Err(ParseError::InvalidPointValue)
        );
    }

    #[test]
    fn parses_signed_node() {
        let raw = RawFtnAddress::parse("2:259/-1").unwrap();
        assert_eq!(raw.node, -1);

        let raw = RawFtnAddress::parse("2:34/-2.78").unwrap();
        assert_eq!(raw.node, -2);
        assert_eq!(raw.point, 78);
    }

    #[test]
    fn rejects_interior_whitespace() {
        assert_eq!(
            RawFtnAddress::parse("23 /12d"),
            Err(ParseError::InvalidNetValue)
        );
        assert_eq!(
            RawFtnAddress::parse("1 :234/145"),
            Err(ParseError::InvalidZoneValue)
        );
        assert_eq!(
            RawFtnAddress::parse("234/12 .1"),
            Err(ParseError::InvalidNodeValue)
        );
    }
}
