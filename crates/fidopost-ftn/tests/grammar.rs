//! Grammar conformance tests for FTN address parsing.
//!
//! The tables walk the matrix of well-formed and malformed inputs,
//! asserting the exact error variant for every malformed one.

#![allow(clippy::unwrap_used)]

use fidopost_ftn::{AddressError, FtnAddress, ParseError, RawFtnAddress, ValidationError};
use proptest::prelude::*;

struct Accepted {
    text: &'static str,
    zone: i16,
    net: i16,
    node: i16,
    point: i16,
    domain: &'static str,
}

const ACCEPTED: &[Accepted] = &[
    Accepted {
        text: "1:234/5.6@fidonet",
        zone: 1,
        net: 234,
        node: 5,
        point: 6,
        domain: "fidonet",
    },
    Accepted {
        text: "2:34/6.78",
        zone: 2,
        net: 34,
        node: 6,
        point: 78,
        domain: "fidonet",
    },
    Accepted {
        text: "4:610/34",
        zone: 4,
        net: 610,
        node: 34,
        point: 0,
        domain: "fidonet",
    },
    Accepted {
        text: "123/45",
        zone: 1,
        net: 123,
        node: 45,
        point: 0,
        domain: "fidonet",
    },
    Accepted {
        text: "123/45.0",
        zone: 1,
        net: 123,
        node: 45,
        point: 0,
        domain: "fidonet",
    },
    Accepted {
        text: "955:95/2@othernet",
        zone: 955,
        net: 95,
        node: 2,
        point: 0,
        domain: "othernet",
    },
    Accepted {
        text: "2:259/-1",
        zone: 2,
        net: 259,
        node: -1,
        point: 0,
        domain: "fidonet",
    },
    Accepted {
        text: "2:259/67.8",
        zone: 2,
        net: 259,
        node: 67,
        point: 8,
        domain: "fidonet",
    },
    Accepted {
        text: "   2:259/67.8   ",
        zone: 2,
        net: 259,
        node: 67,
        point: 8,
        domain: "fidonet",
    },
];

const REJECTED: &[(&str, AddressError)] = &[
    // Grammar violations, one per rule.
    (
        "abcd",
        AddressError::Parse(ParseError::MissingNetworkField),
    ),
    (
        "abcd/efgh/zxc",
        AddressError::Parse(ParseError::ExtraSlashCharacter),
    ),
    (
        "1:1:234/145",
        AddressError::Parse(ParseError::ExtraColonCharacter),
    ),
    ("1a:234/145", AddressError::Parse(ParseError::InvalidZoneValue)),
    ("1 :234/145", AddressError::Parse(ParseError::InvalidZoneValue)),
    (
        "1.1:234/145",
        AddressError::Parse(ParseError::InvalidZoneValue),
    ),
    ("-1:234/145", AddressError::Parse(ParseError::InvalidZoneValue)),
    ("abcd/efgh", AddressError::Parse(ParseError::InvalidNetValue)),
    ("23.4/12d", AddressError::Parse(ParseError::InvalidNetValue)),
    ("23,4/12d", AddressError::Parse(ParseError::InvalidNetValue)),
    ("23-4/12d", AddressError::Parse(ParseError::InvalidNetValue)),
    ("23 /12d", AddressError::Parse(ParseError::InvalidNetValue)),
    ("1:-234/145", AddressError::Parse(ParseError::InvalidNetValue)),
    (
        "1:123/4.1@dom@dom",
        AddressError::Parse(ParseError::ExtraAtCharacter),
    ),
    (
        "1:234/145.76.b",
        AddressError::Parse(ParseError::ExtraDotCharacter),
    ),
    (
        "1:234/145.76b",
        AddressError::Parse(ParseError::InvalidPointValue),
    ),
    ("2:34/6.-1", AddressError::Parse(ParseError::InvalidPointValue)),
    ("234/12d", AddressError::Parse(ParseError::InvalidNodeValue)),
    ("234/12 .1", AddressError::Parse(ParseError::InvalidNodeValue)),
    // Range and charset violations.
    (
        "0:123/4.1",
        AddressError::Validation(ValidationError::ZoneOutOfRange),
    ),
    (
        "32768:123/4.1",
        AddressError::Validation(ValidationError::ZoneOutOfRange),
    ),
    (
        "2:0/6.78",
        AddressError::Validation(ValidationError::NetOutOfRange),
    ),
    (
        "2:32768/6.78",
        AddressError::Validation(ValidationError::NetOutOfRange),
    ),
    (
        "2:34/-2.78",
        AddressError::Validation(ValidationError::NodeOutOfRange),
    ),
    (
        "2:34/32768.78",
        AddressError::Validation(ValidationError::NodeOutOfRange),
    ),
    (
        "2:34/6.32768",
        AddressError::Validation(ValidationError::PointOutOfRange),
    ),
    (
        "1:123/4.1@verylongdomain",
        AddressError::Validation(ValidationError::DomainTooLong),
    ),
    (
        "1:123/4.1@dom.dot",
        AddressError::Validation(ValidationError::DomainWithInvalidCharacters),
    ),
    (
        "1:123/4.1@huh\u{2591}",
        AddressError::Validation(ValidationError::DomainWithInvalidCharacters),
    ),
];

#[test]
fn accepts_well_formed_addresses() {
    for sample in ACCEPTED {
        let addr = FtnAddress::parse(sample.text)
            .unwrap_or_else(|err| panic!("[{}] failed to parse: {err}", sample.text));
        assert_eq!(addr.zone(), sample.zone, "zone of [{}]", sample.text);
        assert_eq!(addr.net(), sample.net, "net of [{}]", sample.text);
        assert_eq!(addr.node(), sample.node, "node of [{}]", sample.text);
        assert_eq!(addr.point(), sample.point, "point of [{}]", sample.text);
        assert_eq!(addr.domain(), sample.domain, "domain of [{}]", sample.text);
    }
}

#[test]
fn rejects_malformed_addresses_with_exact_errors() {
    for (text, expected) in REJECTED {
        match FtnAddress::parse(text) {
            Ok(addr) => panic!("[{text}] unexpectedly parsed as {addr}"),
            Err(err) => assert_eq!(err, *expected, "error for [{text}]"),
        }
    }
}

#[test]
fn raw_parse_defers_range_checks() {
    // The parse stage accepts what validation later rejects.
    let raw = RawFtnAddress::parse("32768:123/4.1").unwrap();
    assert_eq!(raw.zone, 32768);
    assert_eq!(raw.validate(), Err(ValidationError::ZoneOutOfRange));
}

proptest! {
    /// Every in-range field combination survives a full
    /// parse-validate-display-parse cycle unchanged.
    #[test]
    fn round_trips_valid_addresses(
        zone in 1i16..=32767,
        net in 1i16..=32767,
        node in -1i16..=32767,
        point in 0i16..=32767,
        domain in "[a-z0-9_-]{1,8}",
    ) {
        let text = format!("{zone}:{net}/{node}.{point}@{domain}");
        let addr = FtnAddress::parse(&text).unwrap();
        prop_assert_eq!(addr.zone(), zone);
        prop_assert_eq!(addr.net(), net);
        prop_assert_eq!(addr.node(), node);
        prop_assert_eq!(addr.point(), point);
        prop_assert_eq!(addr.domain(), domain);

        let again = FtnAddress::parse(&addr.to_string()).unwrap();
        prop_assert_eq!(addr, again);
    }

    /// More than one slash always reports the slash error, no matter
    /// what surrounds the slashes.
    #[test]
    fn extra_slash_always_wins(
        parts in proptest::collection::vec("[a-z0-9:@. ]{0,6}", 3..6),
    ) {
        let text = parts.join("/");
        prop_assert_eq!(
            FtnAddress::parse(&text),
            Err(AddressError::Parse(ParseError::ExtraSlashCharacter))
        );
    }
}
