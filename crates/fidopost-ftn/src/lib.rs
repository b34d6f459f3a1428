//! # fidopost-ftn
//!
//! FTN (FidoNet Technology Network) address parsing and validation,
//! following FRL-1002.
//!
//! An FTN address names a node inside a store-and-forward mail network:
//!
//! ```text
//! address  := [zone ":"] net "/" node ["." point] ["@" domain]
//!
//! 2:5020/846.7@fidonet
//! │ │    │   │ └─ domain  up to 8 bytes, defaults to "fidonet"
//! │ │    │   └─── point   0..=32767, defaults to 0
//! │ │    └─────── node    -1..=32767, -1 marks a point-only address
//! │ └───────────── net    1..=32767
//! └─────────────── zone   1..=32767, defaults to 1
//! ```
//!
//! ## Features
//!
//! - **Two explicit stages**: [`RawFtnAddress::parse`] splits text into
//!   fields, [`RawFtnAddress::validate`] range-checks them into an
//!   [`FtnAddress`]
//! - **Precise errors**: every malformed input maps to exactly one
//!   [`ParseError`] or [`ValidationError`] variant, decided by a fixed
//!   rule order
//! - **Canonical output**: `Display` always writes the fully-qualified
//!   `zone:net/node.point@domain` form
//! - **Optional `serde` support**: addresses serialize as their
//!   canonical string
//!
//! ## Quick Start
//!
//! ```
//! use fidopost_ftn::{FtnAddress, RawFtnAddress};
//!
//! let addr: FtnAddress = "2:259/67.8".parse()?;
//! assert_eq!(addr.zone(), 2);
//! assert_eq!(addr.to_string(), "2:259/67.8@fidonet");
//!
//! // The stages are also available separately: parsing keeps the
//! // fields exactly as written, validation range-checks them.
//! let raw = RawFtnAddress::parse("99999:1/1")?;
//! assert_eq!(raw.zone, 99999);
//! assert!(raw.validate().is_err());
//! # Ok::<(), fidopost_ftn::AddressError>(())
//! ```
//!
//! ## Types
//!
//! - [`RawFtnAddress`]: fields as written, output of the parse stage
//! - [`FtnAddress`]: validated address, output of the validate stage
//! - [`ParseError`] / [`ValidationError`]: the two error taxonomies,
//!   joined by [`AddressError`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod address;
mod error;
mod parser;
mod validation;

pub use address::FtnAddress;
pub use error::{AddressError, ParseError, Result, ValidationError};
pub use parser::RawFtnAddress;
