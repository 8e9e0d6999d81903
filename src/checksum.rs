//! Checksum validators for ISBN and UPC/EAN identifiers.
//!
//! All validators are total: malformed input (wrong length, non-digit
//! characters where a digit is required) yields `false` rather than an error.
//! Hyphens and spaces are tolerated wherever a curator might type them.

/// Length of an ISBN-13 / EAN-13 code.
pub const EAN13_LEN: usize = 13;
/// Length of a UPC-A code.
pub const UPC_A_LEN: usize = 12;
/// Length of an EAN-8 code.
pub const EAN8_LEN: usize = 8;

/// Barcodes longer than this carry a 5-digit add-on (EAN-5).
const EAN5_THRESHOLD: usize = 16;
/// Barcodes longer than this (and not EAN-5) carry a 2-digit add-on (EAN-2).
const EAN2_THRESHOLD: usize = 13;

/// Remove hyphens and spaces from an identifier.
///
/// # Examples
///
/// ```
/// use gcdform::checksum::normalize;
///
/// assert_eq!(normalize("978-0-306-40615-7"), "9780306406157");
/// assert_eq!(normalize("0 306 40615 2"), "0306406152");
/// ```
#[must_use]
pub fn normalize(identifier: &str) -> String {
    identifier.replace(['-', ' '], "")
}

/// Weight of the digit at `index` in a GTIN-style code of `length` digits.
///
/// The rightmost (check) digit has weight 1 and weights alternate 3/1
/// leftwards, so the first digit starts at 1 for odd lengths and 3 for even.
fn gtin_weight(index: usize, length: usize) -> u32 {
    if (length - 1 - index) % 2 == 0 {
        1
    } else {
        3
    }
}

/// Validate a modulo-10 weighted checksum (ISBN-13, EAN-13, UPC-A, EAN-8).
///
/// Only the digit characters of `digits` are considered; there must be
/// exactly `length` of them. Pass `13` for ISBN-13.
///
/// # Examples
///
/// ```
/// use gcdform::checksum::is_valid_isbn13;
///
/// assert!(is_valid_isbn13("9780306406157", 13));
/// assert!(is_valid_isbn13("978-0-306-40615-7", 13));
/// assert!(!is_valid_isbn13("9780306406158", 13));
/// // UPC-A and EAN-8 share the algorithm
/// assert!(is_valid_isbn13("036000291452", 12));
/// assert!(is_valid_isbn13("96385074", 8));
/// ```
#[must_use]
pub fn is_valid_isbn13(digits: &str, length: usize) -> bool {
    let values: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();
    if length == 0 || values.len() != length {
        return false;
    }

    let sum: u32 = values
        .iter()
        .enumerate()
        .map(|(i, d)| d * gtin_weight(i, length))
        .sum();

    sum % 10 == 0
}

/// Validate an ISBN-10 checksum.
///
/// The first nine characters must be digits weighted 10 down to 2; the tenth
/// is a digit or `X` (value 10). Valid when the weighted sum is divisible
/// by 11.
///
/// # Examples
///
/// ```
/// use gcdform::checksum::is_valid_isbn10;
///
/// assert!(is_valid_isbn10("0306406152"));
/// assert!(is_valid_isbn10("0-439-42089-X"));
/// assert!(!is_valid_isbn10("0306406153"));
/// ```
#[must_use]
pub fn is_valid_isbn10(digits: &str) -> bool {
    let clean = normalize(digits);
    let chars: Vec<char> = clean.chars().collect();
    if chars.len() != 10 {
        return false;
    }

    let mut sum = 0;
    for (i, ch) in chars.iter().enumerate() {
        let value = match (i, *ch) {
            (9, 'X') => 10,
            (_, c) => match c.to_digit(10) {
                Some(d) => d,
                None => return false,
            },
        };
        // i < 10, so the weight fits trivially
        #[allow(clippy::cast_possible_truncation)]
        let weight = 10 - i as u32;
        sum += value * weight;
    }

    sum % 11 == 0
}

/// Validate a single ISBN entry, dispatching on its length (10 or 13).
///
/// # Examples
///
/// ```
/// use gcdform::checksum::is_valid_isbn;
///
/// assert!(is_valid_isbn("0306406152"));
/// assert!(is_valid_isbn("978-0-306-40615-7"));
/// assert!(!is_valid_isbn("12345"));
/// ```
#[must_use]
pub fn is_valid_isbn(entry: &str) -> bool {
    let clean = normalize(entry);
    match clean.chars().count() {
        10 => is_valid_isbn10(&clean),
        EAN13_LEN => {
            clean.chars().all(|c| c.is_ascii_digit()) && is_valid_isbn13(&clean, EAN13_LEN)
        },
        _ => false,
    }
}

/// Strip a trailing EAN-5 or EAN-2 add-on from a normalized barcode.
///
/// Codes longer than 16 lose their last five characters; otherwise codes
/// longer than 13 lose their last two.
fn strip_addon(barcode: &str) -> &str {
    let len = barcode.len();
    if len > EAN5_THRESHOLD {
        &barcode[..len - 5]
    } else if len > EAN2_THRESHOLD {
        &barcode[..len - 2]
    } else {
        barcode
    }
}

/// Validate a UPC/EAN barcode as printed on a comic cover.
///
/// Hyphens and spaces are removed; any other non-digit makes the barcode
/// invalid. Scanner output may carry a price add-on, which is discarded
/// before the check. Only EAN-13, UPC-A and EAN-8 lengths are accepted.
///
/// # Examples
///
/// ```
/// use gcdform::checksum::is_valid_barcode;
///
/// assert!(is_valid_barcode("036000291452"));
/// // UPC-A with a 5-digit issue add-on
/// assert!(is_valid_barcode("03600029145200111"));
/// assert!(!is_valid_barcode("0360002914"));
/// ```
#[must_use]
pub fn is_valid_barcode(digits: &str) -> bool {
    let clean = normalize(digits);
    if clean.is_empty() || !clean.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }

    let code = strip_addon(&clean);
    match code.len() {
        len @ (EAN13_LEN | UPC_A_LEN | EAN8_LEN) => is_valid_isbn13(code, len),
        _ => false,
    }
}

/// Compute the modulo-10 check digit for the first `length - 1` digits of a
/// code of `length` digits.
fn gtin_check_digit(body: &[u32], length: usize) -> u32 {
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(i, d)| d * gtin_weight(i, length))
        .sum();
    (10 - sum % 10) % 10
}

/// Convert a valid ISBN-10 to its ISBN-13 form (`978` prefix).
///
/// Valid ISBN-13 input is returned normalized. Anything else is `None`.
///
/// # Examples
///
/// ```
/// use gcdform::checksum::isbn10_to_isbn13;
///
/// assert_eq!(isbn10_to_isbn13("0-306-40615-2").as_deref(), Some("9780306406157"));
/// assert_eq!(isbn10_to_isbn13("0306406153"), None);
/// ```
#[must_use]
pub fn isbn10_to_isbn13(entry: &str) -> Option<String> {
    let clean = normalize(entry);
    if clean.len() == EAN13_LEN {
        return is_valid_isbn(&clean).then_some(clean);
    }
    if !is_valid_isbn10(&clean) {
        return None;
    }

    let mut body: Vec<u32> = vec![9, 7, 8];
    body.extend(clean.chars().take(9).filter_map(|c| c.to_digit(10)));
    let check = gtin_check_digit(&body, EAN13_LEN);
    body.push(check);

    Some(body.iter().map(u32::to_string).collect())
}

/// Return the ISBN-13 shared by every entry of a `;`-separated list.
///
/// All entries must be valid and name the same book (ISBN-10 entries are
/// compared through their ISBN-13 form). Blank entries are ignored; a list
/// with no entries has no canonical ISBN.
///
/// # Examples
///
/// ```
/// use gcdform::checksum::canonical_isbn;
///
/// assert_eq!(
///     canonical_isbn("0-306-40615-2; 978-0-306-40615-7").as_deref(),
///     Some("9780306406157")
/// );
/// assert_eq!(canonical_isbn("0306406152; 9780201379624"), None);
/// ```
#[must_use]
pub fn canonical_isbn(list: &str) -> Option<String> {
    let mut canonical: Option<String> = None;
    for entry in list.split(';').map(str::trim).filter(|e| !e.is_empty()) {
        let isbn13 = isbn10_to_isbn13(entry)?;
        match &canonical {
            Some(existing) if *existing != isbn13 => return None,
            Some(_) => {},
            None => canonical = Some(isbn13),
        }
    }
    canonical
}
