//! Field-status classification for ISBN and barcode lists.
//!
//! Identifier fields hold `;`-separated lists. A list is valid only when
//! every entry passes its checksum; an empty list produces no status at all.

use std::fmt;

use serde::Serialize;

use crate::checksum::{canonical_isbn, is_valid_barcode, is_valid_isbn};

/// Which checksum family an identifier field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// ISBN-10 / ISBN-13
    Isbn,
    /// UPC-A, EAN-13 or EAN-8, optionally with an add-on
    Barcode,
}

impl IdentifierKind {
    /// Validate a single entry of this kind.
    #[must_use]
    pub fn is_valid(self, entry: &str) -> bool {
        match self {
            Self::Isbn => is_valid_isbn(entry),
            Self::Barcode => is_valid_barcode(entry),
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Isbn => write!(f, "ISBN"),
            Self::Barcode => write!(f, "UPC/EAN"),
        }
    }
}

/// Verdict for an identifier list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// No entries; the status is cleared
    Empty,
    /// Every entry validates
    Valid,
    /// At least one entry fails
    Invalid,
}

impl Classification {
    /// Default label for this verdict, or `None` for [`Classification::Empty`].
    ///
    /// # Examples
    ///
    /// ```
    /// use gcdform::{Classification, IdentifierKind};
    ///
    /// assert_eq!(Classification::Valid.label(IdentifierKind::Isbn), Some("valid ISBN"));
    /// assert_eq!(
    ///     Classification::Invalid.label(IdentifierKind::Barcode),
    ///     Some("invalid UPC/EAN or non-standard")
    /// );
    /// assert_eq!(Classification::Empty.label(IdentifierKind::Isbn), None);
    /// ```
    #[must_use]
    pub const fn label(self, kind: IdentifierKind) -> Option<&'static str> {
        match (self, kind) {
            (Self::Empty, _) => None,
            (Self::Valid, IdentifierKind::Isbn) => Some("valid ISBN"),
            (Self::Invalid, IdentifierKind::Isbn) => Some("invalid ISBN"),
            (Self::Valid, IdentifierKind::Barcode) => Some("valid UPC/EAN"),
            (Self::Invalid, IdentifierKind::Barcode) => Some("invalid UPC/EAN or non-standard"),
        }
    }
}

/// Non-blank entries of a `;`-separated list.
fn entries(text: &str) -> impl Iterator<Item = &str> {
    text.split(';').map(str::trim).filter(|e| !e.is_empty())
}

/// Classify a `;`-separated identifier list.
///
/// Blank entries are ignored. The list is valid only if every remaining
/// entry validates.
///
/// # Examples
///
/// ```
/// use gcdform::{classify_identifier_list, Classification, IdentifierKind};
///
/// assert_eq!(classify_identifier_list("", IdentifierKind::Isbn), Classification::Empty);
/// assert_eq!(
///     classify_identifier_list("0306406152; 9780306406157", IdentifierKind::Isbn),
///     Classification::Valid
/// );
/// assert_eq!(
///     classify_identifier_list("036000291452;123", IdentifierKind::Barcode),
///     Classification::Invalid
/// );
/// ```
#[must_use]
pub fn classify_identifier_list(text: &str, kind: IdentifierKind) -> Classification {
    let mut seen = false;
    for entry in entries(text) {
        seen = true;
        if !kind.is_valid(entry) {
            tracing::trace!(%kind, entry, "identifier failed checksum");
            return Classification::Invalid;
        }
    }

    if seen {
        Classification::Valid
    } else {
        Classification::Empty
    }
}

/// Review-screen note for an identifier list, as shown when comparing
/// revisions.
///
/// ISBN lists read `valid ISBN` when every entry names the same book, list
/// per-entry verdicts followed by `ISBNs are inequal` when several entries
/// disagree, and `invalid ISBN` otherwise. Barcode lists always list
/// per-entry verdicts. Returns `None` for an empty list.
///
/// # Examples
///
/// ```
/// use gcdform::{compare_note, IdentifierKind};
///
/// assert_eq!(
///     compare_note("0306406152", IdentifierKind::Isbn).as_deref(),
///     Some("0306406152 (note: valid ISBN)")
/// );
/// assert_eq!(
///     compare_note("036000291452;42", IdentifierKind::Barcode).as_deref(),
///     Some("036000291452;42 (note: valid UPC/EAN part; invalid UPC/EAN part or non-standard)")
/// );
/// ```
#[must_use]
pub fn compare_note(text: &str, kind: IdentifierKind) -> Option<String> {
    let value = text.trim();
    if value.is_empty() {
        return None;
    }

    let note = match kind {
        IdentifierKind::Isbn => {
            let parts: Vec<&str> = value.split(';').collect();
            if canonical_isbn(value).is_some() {
                "valid ISBN".to_string()
            } else if parts.len() > 1 {
                let verdicts: Vec<&str> = parts
                    .iter()
                    .map(|p| if is_valid_isbn(p.trim()) { "valid ISBN" } else { "invalid ISBN" })
                    .collect();
                format!("{}; ISBNs are inequal", verdicts.join("; "))
            } else {
                "invalid ISBN".to_string()
            }
        },
        IdentifierKind::Barcode => value
            .split(';')
            .map(|p| {
                if is_valid_barcode(p.trim()) {
                    "valid UPC/EAN part"
                } else {
                    "invalid UPC/EAN part or non-standard"
                }
            })
            .collect::<Vec<_>>()
            .join("; "),
    };

    Some(format!("{value} (note: {note})"))
}
