#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # gcdform: issue-form field logic
//!
//! Field inference and validation behind the comic issue edit form: a
//! heuristic key-date parser for free-text publication dates, ISBN and
//! UPC/EAN checksum validators, identifier status classification, and the
//! binding layer that keeps the key date and status indicators in step with
//! what the curator types.
//!
//! ## Quick Start
//!
//! ### Inferring a key date
//!
//! ```
//! use gcdform::parse_publication_date;
//!
//! assert_eq!(parse_publication_date("June 1974"), "1974-06-00");
//! assert_eq!(parse_publication_date("Primavera 1981"), "1981-04-00");
//! assert_eq!(parse_publication_date("[n.d.]"), "");
//! ```
//!
//! ### Checking identifiers
//!
//! ```
//! use gcdform::{classify_identifier_list, Classification, IdentifierKind};
//!
//! let verdict = classify_identifier_list("978-0-306-40615-7", IdentifierKind::Isbn);
//! assert_eq!(verdict, Classification::Valid);
//! assert_eq!(verdict.label(IdentifierKind::Isbn), Some("valid ISBN"));
//! ```
//!
//! ### Binding a form
//!
//! ```
//! use gcdform::{BindingConfig, FormBinding, FormEvent, FormField, FormHost, MemoryForm};
//!
//! let mut form = MemoryForm::new().with_value(FormField::Barcode, "036000291452");
//! let mut binding = FormBinding::attach(&mut form, BindingConfig::default());
//! assert_eq!(form.shown_text(FormField::Barcode), Some("valid UPC/EAN"));
//!
//! form.set_value(FormField::PublicationDate, "Summer 1975");
//! binding.handle(&mut form, FormEvent::Input(FormField::PublicationDate));
//! assert_eq!(form.value(FormField::KeyDate), "1975-07-00");
//! ```
//!
//! ## Modules
//!
//! - [`checksum`] - ISBN-10/13 and UPC/EAN checksum validators
//! - [`key_date`] - Publication-date parsing and key dates
//! - [`status`] - Identifier list classification and labels
//! - [`host`] - The host form abstraction and an in-memory host
//! - [`binding`] - Live form behaviour (auto-fill, status, Enter suppression)
//! - [`config`] - Field names, labels and options
//! - [`error`] - Error types and result type

pub mod binding;
pub mod checksum;
pub mod config;
pub mod error;
pub mod host;
pub mod key_date;
pub mod status;

pub use binding::{EventOutcome, FillMode, FormBinding, FormEvent, Key};
pub use checksum::{
    canonical_isbn, is_valid_barcode, is_valid_isbn, is_valid_isbn10, is_valid_isbn13,
};
pub use config::{BindingConfig, FieldNames, StatusLabels};
pub use error::{FormError, Result};
pub use host::{FormField, FormHost, IndicatorHandle, MemoryForm};
pub use key_date::{parse_publication_date, KeyDate, ParsedDate};
pub use status::{classify_identifier_list, compare_note, Classification, IdentifierKind};
