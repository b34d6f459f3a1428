//! Range and character-set checks for parsed address fields.

use crate::address::FtnAddress;
use crate::error::ValidationError;
use crate::parser::RawFtnAddress;

impl RawFtnAddress {
    /// Checks every field against its FRL-1002 range and builds the
    /// validated address.
    ///
    /// Fields are checked in address order (zone, net, node, point,
    /// domain length, domain characters) and the first failure is
    /// returned, so a domain that is both too long and carries
    /// forbidden bytes reports [`ValidationError::DomainTooLong`].
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for the first field outside its
    /// valid range or character set.
    pub fn validate(self) -> Result<FtnAddress, ValidationError> {
        let zone = checked_field(self.zone, 1).ok_or(ValidationError::ZoneOutOfRange)?;
        let net = checked_field(self.net, 1).ok_or(ValidationError::NetOutOfRange)?;
        let node = checked_field(self.node, -1).ok_or(ValidationError::NodeOutOfRange)?;
        let point = checked_field(self.point, 0).ok_or(ValidationError::PointOutOfRange)?;

        if self.domain.len() > FtnAddress::MAX_DOMAIN_LENGTH {
            return Err(ValidationError::DomainTooLong);
        }
        if !self.domain.bytes().all(is_domain_byte) {
            return Err(ValidationError::DomainWithInvalidCharacters);
        }

        Ok(FtnAddress {
            zone,
            net,
            node,
            point,
            domain: self.domain,
        })
    }
}

/// Narrows a numeric field to its 16-bit storage, returning `None`
/// outside `min..=32767`.
fn checked_field(value: i64, min: i16) -> Option<i16> {
    i16::try_from(value).ok().filter(|field| *field >= min)
}

/// True for bytes allowed in a domain: printable ASCII below DEL,
/// excluding the dot.
const fn is_domain_byte(byte: u8) -> bool {
    byte > 32 && byte < 127 && byte != b'.'
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;

    fn raw(zone: i64, net: i64, node: i64, point: i64, domain: &str) -> RawFtnAddress {
        RawFtnAddress {
            zone,
            net,
            node,
            point,
            domain: domain.to_string(),
        }
    }

    #[test]
    fn accepts_boundary_values() {
        let addr = raw(32767, 32767, 32767, 32767, "fidonet").validate().unwrap();
        assert_eq!(addr.zone(), 32767);
        assert_eq!(addr.point(), 32767);

        let addr = raw(1, 1, -1, 0, "f").validate().unwrap();
        assert_eq!(addr.node(), -1);
        assert_eq!(addr.point(), 0);
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(
            raw(0, 1, 1, 0, "fidonet").validate(),
            Err(ValidationError::ZoneOutOfRange)
        );
        assert_eq!(
            raw(32768, 1, 1, 0, "fidonet").validate(),
            Err(ValidationError::ZoneOutOfRange)
        );
        assert_eq!(
            raw(1, 0, 1, 0, "fidonet").validate(),
            Err(ValidationError::NetOutOfRange)
        );
        assert_eq!(
            raw(1, 32768, 1, 0, "fidonet").validate(),
            Err(ValidationError::NetOutOfRange)
        );
        assert_eq!(
            raw(1, 1, -2, 0, "fidonet").validate(),
            Err(ValidationError::NodeOutOfRange)
        );
        assert_eq!(
            raw(1, 1, 32768, 0, "fidonet").validate(),
            Err(ValidationError::NodeOutOfRange)
        );
        assert_eq!(
            raw(1, 1, 1, -1, "fidonet").validate(),
            Err(ValidationError::PointOutOfRange)
        );
        assert_eq!(
            raw(1, 1, 1, 32768, "fidonet").validate(),
            Err(ValidationError::PointOutOfRange)
        );
    }

    #[test]
    fn checks_fields_in_address_order() {
        // Every field is bad; the zone error wins.
        assert_eq!(
            raw(0, 0, -2, -1, "way too long domain").validate(),
            Err(ValidationError::ZoneOutOfRange)
        );
    }

    #[test]
    fn rejects_long_domains() {
        assert_eq!(
            raw(1, 123, 4, 1, "verylongdomain").validate(),
            Err(ValidationError::DomainTooLong)
        );
        // Exactly eight bytes is still fine.
        assert!(raw(1, 123, 4, 1, "eightxyz").validate().is_ok());
    }

    #[test]
    fn rejects_forbidden_domain_bytes() {
        assert_eq!(
            raw(1, 123, 4, 1, "dom.dot").validate(),
            Err(ValidationError::DomainWithInvalidCharacters)
        );
        assert_eq!(
            raw(1, 123, 4, 1, "huh\u{2591}").validate(),
            Err(ValidationError::DomainWithInvalidCharacters)
        );
        assert_eq!(
            raw(1, 123, 4, 1, "with space").validate(),
            Err(ValidationError::DomainWithInvalidCharacters)
        );
    }

    #[test]
    fn length_is_checked_before_charset() {
        // Nine dots: too long and full of forbidden bytes.
        assert_eq!(
            raw(1, 123, 4, 1, ".........").validate(),
            Err(ValidationError::DomainTooLong)
        );
    }

    #[test]
    fn empty_domain_is_valid() {
        let addr = raw(1, 123, 4, 1, "").validate().unwrap();
        assert_eq!(addr.domain(), "");
    }
}
