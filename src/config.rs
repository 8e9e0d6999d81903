//! Configuration for binding the issue form.
//!
//! This module provides [`BindingConfig`], which names the host form's
//! fields, holds the status labels rendered next to them and toggles the
//! optional behaviours of the binding layer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};
use crate::host::FormField;
use crate::status::{Classification, IdentifierKind};

/// Names of the four bound fields in the host form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldNames {
    /// Free-text publication date (source of the key date)
    pub publication_date: String,
    /// Sortable key date (auto-derived target)
    pub key_date: String,
    /// `;`-separated ISBN list
    pub isbn: String,
    /// `;`-separated barcode list
    pub barcode: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        FieldNames {
            publication_date: "id_publication_date".to_string(),
            key_date: "id_key_date".to_string(),
            isbn: "id_isbn".to_string(),
            barcode: "id_barcode".to_string(),
        }
    }
}

/// Text rendered into the status and hint indicators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusLabels {
    /// Every ISBN entry validates
    pub valid_isbn: String,
    /// Some ISBN entry fails
    pub invalid_isbn: String,
    /// Every barcode entry validates
    pub valid_barcode: String,
    /// Some barcode entry fails
    pub invalid_barcode: String,
    /// Hint shown after the key date while it is auto-populated
    pub key_date_hint: String,
}

impl Default for StatusLabels {
    fn default() -> Self {
        let label = |c: Classification, k| c.label(k).unwrap_or_default().to_string();
        StatusLabels {
            valid_isbn: label(Classification::Valid, IdentifierKind::Isbn),
            invalid_isbn: label(Classification::Invalid, IdentifierKind::Isbn),
            valid_barcode: label(Classification::Valid, IdentifierKind::Barcode),
            invalid_barcode: label(Classification::Invalid, IdentifierKind::Barcode),
            key_date_hint: "auto-set".to_string(),
        }
    }
}

impl StatusLabels {
    /// Label for a verdict, or `None` when the status should be cleared.
    #[must_use]
    pub fn for_classification(
        &self,
        classification: Classification,
        kind: IdentifierKind,
    ) -> Option<&str> {
        let label = match (classification, kind) {
            (Classification::Empty, _) => return None,
            (Classification::Valid, IdentifierKind::Isbn) => &self.valid_isbn,
            (Classification::Invalid, IdentifierKind::Isbn) => &self.invalid_isbn,
            (Classification::Valid, IdentifierKind::Barcode) => &self.valid_barcode,
            (Classification::Invalid, IdentifierKind::Barcode) => &self.invalid_barcode,
        };
        Some(label.as_str())
    }
}

/// Configuration for [`FormBinding`](crate::binding::FormBinding).
///
/// # Examples
///
/// ```
/// use gcdform::BindingConfig;
///
/// // Defaults match the issue edit form
/// let config = BindingConfig::default();
/// assert_eq!(config.fields.key_date, "id_key_date");
/// assert!(config.suppress_barcode_enter);
///
/// // Partial JSON overrides only what it names
/// let config = BindingConfig::from_json_str(r#"{"lock_prefilled_key_date": true}"#).unwrap();
/// assert!(config.lock_prefilled_key_date);
/// assert_eq!(config.labels.valid_isbn, "valid ISBN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    /// Host field names.
    pub fields: FieldNames,

    /// Indicator text.
    pub labels: StatusLabels,

    /// Swallow Enter on the barcode field.
    ///
    /// Hardware scanners terminate each scan with Enter, which would
    /// otherwise submit the form.
    pub suppress_barcode_enter: bool,

    /// Treat a key date already present at attach time as manually set.
    ///
    /// When false (default) the key date starts in auto mode even on edit
    /// forms, and the next publication-date edit may overwrite it.
    pub lock_prefilled_key_date: bool,
}

impl Default for BindingConfig {
    fn default() -> Self {
        BindingConfig {
            fields: FieldNames::default(),
            labels: StatusLabels::default(),
            suppress_barcode_enter: true,
            lock_prefilled_key_date: false,
        }
    }
}

impl BindingConfig {
    /// Parse a configuration from JSON; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Config`] if the JSON is malformed.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::IoError`] if the file cannot be read and
    /// [`FormError::Config`] if it is not valid configuration JSON.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Host name of a bound field.
    #[must_use]
    pub fn field_name(&self, field: FormField) -> &str {
        match field {
            FormField::PublicationDate => &self.fields.publication_date,
            FormField::KeyDate => &self.fields.key_date,
            FormField::Isbn => &self.fields.isbn,
            FormField::Barcode => &self.fields.barcode,
        }
    }

    /// Resolve a host field name to a bound field.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`] if `name` is not one of the four
    /// configured names.
    pub fn field_by_name(&self, name: &str) -> Result<FormField> {
        FormField::ALL
            .into_iter()
            .find(|f| self.field_name(*f) == name)
            .ok_or_else(|| FormError::UnknownField(name.to_string()))
    }
}
