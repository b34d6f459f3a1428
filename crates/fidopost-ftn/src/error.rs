//! Error types for FTN address handling.

use thiserror::Error;

/// Result type for address operations.
pub type Result<T> = std::result::Result<T, AddressError>;

/// Errors raised while splitting an address string into its fields.
///
/// The grammar is checked in a fixed order and the first violated rule
/// aborts the parse, so exactly one of these is ever reported for a
/// given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The address has no `/` separator between network and node.
    #[error("missing network field")]
    MissingNetworkField,

    /// The address contains more than one `/`.
    #[error("extra slash character")]
    ExtraSlashCharacter,

    /// The part before the `/` contains more than one `:`.
    #[error("extra colon character")]
    ExtraColonCharacter,

    /// The zone field is not an unsigned decimal number.
    #[error("invalid zone value")]
    InvalidZoneValue,

    /// The net field is not an unsigned decimal number.
    #[error("invalid net value")]
    InvalidNetValue,

    /// The part after the `/` contains more than one `@`.
    #[error("extra at character")]
    ExtraAtCharacter,

    /// The node and point part contains more than one `.`.
    #[error("extra dot character")]
    ExtraDotCharacter,

    /// The point field is not an unsigned decimal number.
    #[error("invalid point value")]
    InvalidPointValue,

    /// The node field is not a decimal number.
    #[error("invalid node value")]
    InvalidNodeValue,
}

/// Errors raised while range- and charset-checking parsed fields.
///
/// Fields are checked in address order (zone, net, node, point,
/// domain length, domain characters) and the first failure is
/// reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The zone is outside `1..=32767`.
    #[error("zone out of range")]
    ZoneOutOfRange,

    /// The net is outside `1..=32767`.
    #[error("net out of range")]
    NetOutOfRange,

    /// The node is outside `-1..=32767`.
    #[error("node out of range")]
    NodeOutOfRange,

    /// The point is outside `0..=32767`.
    #[error("point out of range")]
    PointOutOfRange,

    /// The domain is longer than eight bytes.
    #[error("domain too long")]
    DomainTooLong,

    /// The domain contains a byte outside printable ASCII, or a dot.
    #[error("domain with invalid characters")]
    DomainWithInvalidCharacters,
}

/// Any failure of the combined parse-and-validate entry points.
///
/// The parse and validation stages keep disjoint taxonomies; this type
/// carries whichever stage failed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The text did not match the address grammar.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// A parsed field failed its range or character-set check.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_parse_errors() {
        let err = AddressError::from(ParseError::MissingNetworkField);
        assert_eq!(err, AddressError::Parse(ParseError::MissingNetworkField));
        assert_eq!(err.to_string(), "parse error: missing network field");
    }

    #[test]
    fn wraps_validation_errors() {
        let err = AddressError::from(ValidationError::DomainTooLong);
        assert_eq!(err, AddressError::Validation(ValidationError::DomainTooLong));
        assert_eq!(err.to_string(), "validation error: domain too long");
    }
}
