//! The host form seen by the binding layer.
//!
//! The page that renders the issue form owns the real input elements. The
//! binding layer only needs to read and write four fields and to place small
//! text indicators after them, which [`FormHost`] captures. [`MemoryForm`]
//! is an in-memory host used by tests and the command-line tool.

use std::collections::HashMap;

use crate::config::BindingConfig;
use crate::error::Result;

/// The four fields of the issue form the binding layer works with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Free-text publication date
    PublicationDate,
    /// Sortable key date derived from the publication date
    KeyDate,
    /// ISBN list
    Isbn,
    /// Barcode list
    Barcode,
}

impl FormField {
    /// All bound fields, in form order.
    pub const ALL: [FormField; 4] = [
        FormField::PublicationDate,
        FormField::KeyDate,
        FormField::Isbn,
        FormField::Barcode,
    ];
}

/// Opaque reference to an indicator node created by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndicatorHandle(usize);

impl IndicatorHandle {
    /// Wrap a host-side node index.
    ///
    /// Only [`FormHost::insert_indicator_after`] implementations should call
    /// this; hosts ignore handles they did not hand out.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        IndicatorHandle(index)
    }

    /// The host-side node index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Operations the binding layer needs from the page.
pub trait FormHost {
    /// Current value of a field.
    fn value(&self, field: FormField) -> String;

    /// Overwrite a field's value. Must not be reported back as a user edit.
    fn set_value(&mut self, field: FormField, value: &str);

    /// Create an empty inline indicator placed immediately after `field`.
    fn insert_indicator_after(&mut self, field: FormField) -> IndicatorHandle;

    /// Replace an indicator's text; the empty string clears it.
    fn set_indicator_text(&mut self, indicator: IndicatorHandle, text: &str);

    /// Show or hide an indicator.
    fn set_indicator_visible(&mut self, indicator: IndicatorHandle, visible: bool);
}

/// An indicator node in a [`MemoryForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryIndicator {
    /// Field the indicator follows
    pub after: FormField,
    /// Current text
    pub text: String,
    /// Whether the indicator is displayed
    pub visible: bool,
}

/// In-memory [`FormHost`].
///
/// # Examples
///
/// ```
/// use gcdform::{FormField, FormHost, MemoryForm};
///
/// let mut form = MemoryForm::new().with_value(FormField::Isbn, "0306406152");
/// assert_eq!(form.value(FormField::Isbn), "0306406152");
///
/// let hint = form.insert_indicator_after(FormField::KeyDate);
/// form.set_indicator_text(hint, "auto-set");
/// assert_eq!(form.indicator(hint).unwrap().text, "auto-set");
/// ```
#[derive(Debug, Default, Clone)]
pub struct MemoryForm {
    values: HashMap<FormField, String>,
    indicators: Vec<MemoryIndicator>,
}

impl MemoryForm {
    /// Create a form with every field empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style initial value.
    #[must_use]
    pub fn with_value(mut self, field: FormField, value: &str) -> Self {
        self.values.insert(field, value.to_string());
        self
    }

    /// Build a form from `(field name, value)` pairs as posted by the page.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::UnknownField`](crate::FormError::UnknownField)
    /// for a name the configuration does not bind.
    pub fn from_named_values<'a, I>(config: &BindingConfig, pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut form = Self::new();
        for (name, value) in pairs {
            let field = config.field_by_name(name)?;
            form.values.insert(field, value.to_string());
        }
        Ok(form)
    }

    /// Look up an indicator.
    #[must_use]
    pub fn indicator(&self, handle: IndicatorHandle) -> Option<&MemoryIndicator> {
        self.indicators.get(handle.index())
    }

    /// Indicators placed after `field`, in creation order.
    pub fn indicators_after(&self, field: FormField) -> impl Iterator<Item = &MemoryIndicator> {
        self.indicators.iter().filter(move |i| i.after == field)
    }

    /// Visible, non-empty indicator text after `field`, if any.
    #[must_use]
    pub fn shown_text(&self, field: FormField) -> Option<&str> {
        self.indicators_after(field)
            .find(|i| i.visible && !i.text.is_empty())
            .map(|i| i.text.as_str())
    }
}

impl FormHost for MemoryForm {
    fn value(&self, field: FormField) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_value(&mut self, field: FormField, value: &str) {
        self.values.insert(field, value.to_string());
    }

    fn insert_indicator_after(&mut self, field: FormField) -> IndicatorHandle {
        self.indicators.push(MemoryIndicator {
            after: field,
            text: String::new(),
            visible: true,
        });
        IndicatorHandle::new(self.indicators.len() - 1)
    }

    fn set_indicator_text(&mut self, indicator: IndicatorHandle, text: &str) {
        if let Some(node) = self.indicators.get_mut(indicator.index()) {
            node.text = text.to_string();
        }
    }

    fn set_indicator_visible(&mut self, indicator: IndicatorHandle, visible: bool) {
        if let Some(node) = self.indicators.get_mut(indicator.index()) {
            node.visible = visible;
        }
    }
}
