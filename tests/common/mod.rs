//! Common test helpers shared across the integration suites.

use gcdform::{BindingConfig, FormBinding, FormEvent, FormField, FormHost, MemoryForm};

/// Appends the modulo-10 (EAN/UPC/ISBN-13) check digit to `body`.
///
/// The weight of each body digit depends on the final code length, so the
/// same helper serves EAN-8, UPC-A and EAN-13.
#[allow(dead_code)]
pub fn with_gtin_check_digit(body: &[u32]) -> String {
    let length = body.len() + 1;
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, d)| if (length - 1 - i) % 2 == 0 { *d } else { d * 3 })
        .sum();
    let check = (10 - sum % 10) % 10;
    digits_to_string(body) + &check.to_string()
}

/// Appends the modulo-11 ISBN-10 check character to a 9-digit body.
#[allow(dead_code)]
pub fn with_isbn10_check(body: &[u32]) -> String {
    let sum: u32 = body
        .iter()
        .zip((2..=10).rev())
        .map(|(d, w)| d * w)
        .sum();
    let check = (11 - sum % 11) % 11;
    let check = if check == 10 {
        "X".to_string()
    } else {
        check.to_string()
    };
    digits_to_string(body) + &check
}

/// Renders digits as a string.
#[allow(dead_code)]
pub fn digits_to_string(digits: &[u32]) -> String {
    digits.iter().map(u32::to_string).collect()
}

/// Creates a form with the given initial values and attaches a binding
/// with the default configuration.
#[allow(dead_code)]
pub fn attached_form(values: &[(FormField, &str)]) -> (MemoryForm, FormBinding) {
    attached_form_with(values, BindingConfig::default())
}

/// Like [`attached_form`] with an explicit configuration.
#[allow(dead_code)]
pub fn attached_form_with(
    values: &[(FormField, &str)],
    config: BindingConfig,
) -> (MemoryForm, FormBinding) {
    let mut form = MemoryForm::new();
    for (field, value) in values {
        form = form.with_value(*field, value);
    }
    let binding = FormBinding::attach(&mut form, config);
    (form, binding)
}

/// Simulates the curator typing a new value into `field`.
#[allow(dead_code)]
pub fn type_into(form: &mut MemoryForm, binding: &mut FormBinding, field: FormField, value: &str) {
    form.set_value(field, value);
    binding.handle(form, FormEvent::Input(field));
}
