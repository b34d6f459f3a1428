//! The validated FTN address type.

use std::fmt;
use std::str::FromStr;

use crate::error::AddressError;
use crate::parser::RawFtnAddress;

/// A validated FTN network address.
///
/// Whenever a value of this type exists, its four numeric fields and
/// its domain satisfy the FRL-1002 constraints, with one documented
/// exception: [`FtnAddress::default`] is the unconfigured placeholder
/// and deliberately fails validation. There is no mutation API; a new
/// value is built through [`FtnAddress::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FtnAddress {
    pub(crate) zone: i16,
    pub(crate) net: i16,
    pub(crate) node: i16,
    pub(crate) point: i16,
    pub(crate) domain: String,
}

impl FtnAddress {
    /// Zone assumed when an address omits the `zone:` prefix.
    pub const DEFAULT_ZONE: i16 = 1;

    /// Domain assumed when an address omits the `@domain` suffix.
    pub const DEFAULT_DOMAIN: &'static str = "fidonet";

    /// Longest allowed domain, in bytes.
    pub const MAX_DOMAIN_LENGTH: usize = 8;

    /// Creates the unconfigured placeholder address, `1:0/0.0@fidonet`.
    ///
    /// Net and node sit below their valid minimum, so this value fails
    /// validation on purpose. It stands in for a station that has not
    /// been configured yet and must never appear on the wire.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zone: Self::DEFAULT_ZONE,
            net: 0,
            node: 0,
            point: 0,
            domain: Self::DEFAULT_DOMAIN.to_string(),
        }
    }

    /// Parses and validates a textual FTN address.
    ///
    /// The text is split into fields ([`RawFtnAddress::parse`]) and,
    /// only once the whole parse succeeded, every field is
    /// range-checked ([`RawFtnAddress::validate`]). The first violated
    /// rule aborts with its specific error.
    ///
    /// # Examples
    ///
    /// ```
    /// use fidopost_ftn::FtnAddress;
    ///
    /// let addr = FtnAddress::parse("2:5020/846.7")?;
    /// assert_eq!(addr.zone(), 2);
    /// assert_eq!(addr.node(), 846);
    /// assert_eq!(addr.point(), 7);
    /// assert_eq!(addr.domain(), "fidonet");
    /// # Ok::<(), fidopost_ftn::AddressError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`AddressError::Parse`] when the text does not match
    /// the grammar and [`AddressError::Validation`] when a field is
    /// out of range.
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let raw = RawFtnAddress::parse(text)?;
        Ok(raw.validate()?)
    }

    /// Zone number, `1..=32767`.
    #[must_use]
    pub const fn zone(&self) -> i16 {
        self.zone
    }

    /// Net number, `1..=32767`.
    #[must_use]
    pub const fn net(&self) -> i16 {
        self.net
    }

    /// Node number, `-1..=32767`.
    #[must_use]
    pub const fn node(&self) -> i16 {
        self.node
    }

    /// Point number, `0..=32767`. Zero means the address names the
    /// node itself.
    #[must_use]
    pub const fn point(&self) -> i16 {
        self.point
    }

    /// Domain name, at most eight bytes.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// True when the node carries the `-1` sentinel, i.e. the address
    /// names a point behind an unspecified node.
    #[must_use]
    pub const fn is_point_only(&self) -> bool {
        self.node == -1
    }
}

impl Default for FtnAddress {
    fn default() -> Self {
        Self::new()
    }
}

/// The canonical fully-qualified form, `zone:net/node.point@domain`.
///
/// Optional fields are always written out, so the output of `Display`
/// re-parses to an equal address.
impl fmt::Display for FtnAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            zone,
            net,
            node,
            point,
            domain,
        } = self;
        write!(f, "{zone}:{net}/{node}.{point}@{domain}")
    }
}

impl FromStr for FtnAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::FtnAddress;

    impl Serialize for FtnAddress {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for FtnAddress {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let text = String::deserialize(deserializer)?;
            text.parse().map_err(D::Error::custom)
        }
    }
}
