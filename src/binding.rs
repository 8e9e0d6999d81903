//! Live behaviour of the issue edit form.
//!
//! [`FormBinding`] is attached once when the page is ready and then receives
//! every input and key-down event on the bound fields:
//!
//! - edits to the publication date re-derive the key date, unless the
//!   curator has typed a key date of their own;
//! - the ISBN and barcode fields show a checksum status after every edit;
//! - Enter on the barcode field is swallowed so a scanner cannot submit
//!   the form.
//!
//! All state lives in the binding itself; the host only stores values and
//! indicator nodes.

use serde::Serialize;

use crate::config::BindingConfig;
use crate::host::{FormField, FormHost, IndicatorHandle};
use crate::key_date::parse_publication_date;
use crate::status::{classify_identifier_list, IdentifierKind};

/// Whether the key date may be overwritten from the publication date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillMode {
    /// Key date follows the publication date
    #[default]
    Auto,
    /// Curator entered a key date; leave it alone
    Manual,
}

/// Keys the binding distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Enter / Return
    Enter,
    /// Anything else
    Other,
}

/// Events delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// The user changed a field's value
    Input(FormField),
    /// A key was pressed while a field had focus
    KeyDown(FormField, Key),
}

/// What the host should do with the event after the binding has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Let the default action happen
    Continue,
    /// Cancel the default action (e.g. implicit submit)
    PreventDefault,
}

/// Checksum status shown after an identifier field.
#[derive(Debug, Clone, Copy)]
struct StatusIndicator {
    field: FormField,
    kind: IdentifierKind,
    node: IndicatorHandle,
}

impl StatusIndicator {
    fn attach<H: FormHost + ?Sized>(host: &mut H, field: FormField, kind: IdentifierKind) -> Self {
        let node = host.insert_indicator_after(field);
        StatusIndicator { field, kind, node }
    }

    fn refresh<H: FormHost + ?Sized>(&self, host: &mut H, config: &BindingConfig) {
        let classification = classify_identifier_list(&host.value(self.field), self.kind);
        let text = config
            .labels
            .for_classification(classification, self.kind)
            .unwrap_or_default();
        tracing::trace!(field = ?self.field, ?classification, "refreshed identifier status");
        host.set_indicator_text(self.node, text);
    }
}

/// Fill state of the key date plus its "auto-set" hint.
#[derive(Debug, Clone, Copy)]
struct DerivedKeyDate {
    mode: FillMode,
    hint: IndicatorHandle,
}

impl DerivedKeyDate {
    fn set_mode(&mut self, mode: FillMode) {
        if self.mode != mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "key date fill mode changed");
            self.mode = mode;
        }
    }
}

/// Event handlers for one issue form.
///
/// # Examples
///
/// ```
/// use gcdform::{BindingConfig, FormBinding, FormEvent, FormField, FormHost, MemoryForm};
///
/// let mut form = MemoryForm::new();
/// let mut binding = FormBinding::attach(&mut form, BindingConfig::default());
///
/// form.set_value(FormField::PublicationDate, "June 1974");
/// binding.handle(&mut form, FormEvent::Input(FormField::PublicationDate));
/// assert_eq!(form.value(FormField::KeyDate), "1974-06-00");
/// assert_eq!(form.shown_text(FormField::KeyDate), Some("auto-set"));
/// ```
#[derive(Debug)]
pub struct FormBinding {
    config: BindingConfig,
    key_date: DerivedKeyDate,
    isbn: StatusIndicator,
    barcode: StatusIndicator,
}

impl FormBinding {
    /// Attach to a ready page.
    ///
    /// Creates the indicator nodes and renders the initial identifier
    /// status, so forms opened for editing are annotated before the first
    /// keystroke.
    pub fn attach<H: FormHost + ?Sized>(host: &mut H, config: BindingConfig) -> Self {
        let hint = host.insert_indicator_after(FormField::KeyDate);
        host.set_indicator_text(hint, &config.labels.key_date_hint);
        host.set_indicator_visible(hint, false);

        let prefilled = !is_blank(&host.value(FormField::KeyDate));
        let mode = if config.lock_prefilled_key_date && prefilled {
            FillMode::Manual
        } else {
            FillMode::Auto
        };

        let isbn = StatusIndicator::attach(host, FormField::Isbn, IdentifierKind::Isbn);
        let barcode = StatusIndicator::attach(host, FormField::Barcode, IdentifierKind::Barcode);

        let binding = FormBinding {
            config,
            key_date: DerivedKeyDate { mode, hint },
            isbn,
            barcode,
        };
        binding.isbn.refresh(host, &binding.config);
        binding.barcode.refresh(host, &binding.config);

        tracing::debug!(?mode, "attached issue form binding");
        binding
    }

    /// Current fill mode of the key date.
    #[must_use]
    pub fn key_date_mode(&self) -> FillMode {
        self.key_date.mode
    }

    /// The configuration this binding was attached with.
    #[must_use]
    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    /// Dispatch one event from the host.
    pub fn handle<H: FormHost + ?Sized>(&mut self, host: &mut H, event: FormEvent) -> EventOutcome {
        match event {
            FormEvent::Input(FormField::PublicationDate) => self.publication_date_changed(host),
            FormEvent::Input(FormField::KeyDate) => self.key_date_changed(host),
            FormEvent::Input(FormField::Isbn) => self.isbn.refresh(host, &self.config),
            FormEvent::Input(FormField::Barcode) => self.barcode.refresh(host, &self.config),
            FormEvent::KeyDown(FormField::Barcode, Key::Enter)
                if self.config.suppress_barcode_enter =>
            {
                tracing::debug!("suppressed Enter on barcode field");
                return EventOutcome::PreventDefault;
            },
            FormEvent::KeyDown(..) => {},
        }
        EventOutcome::Continue
    }

    fn publication_date_changed<H: FormHost + ?Sized>(&self, host: &mut H) {
        if self.key_date.mode == FillMode::Manual {
            return;
        }

        let key_date = parse_publication_date(&host.value(FormField::PublicationDate));
        if key_date.is_empty() {
            return;
        }

        tracing::debug!(%key_date, "auto-set key date");
        host.set_value(FormField::KeyDate, &key_date);
        host.set_indicator_visible(self.key_date.hint, true);
    }

    fn key_date_changed<H: FormHost + ?Sized>(&mut self, host: &mut H) {
        let mode = if is_blank(&host.value(FormField::KeyDate)) {
            FillMode::Auto
        } else {
            FillMode::Manual
        };
        self.key_date.set_mode(mode);
        host.set_indicator_visible(self.key_date.hint, false);
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
