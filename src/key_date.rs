//! Key-date inference from free-text publication dates.
//!
//! Issue publication dates are entered as printed on the cover or in the
//! indicia: "June 1974", "Spring 1974", "1974-06", "jula 1990", "[1985?]".
//! This module extracts a best-guess year, month and day from such text and
//! renders the sortable key date `YYYY-MM-DD`, with unknown components
//! written as `00`.
//!
//! The parser degrades to a year-only key date rather than failing, and
//! yields nothing when no plausible year is present.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::error::{FormError, Result};

/// Month words, evaluated in order; the first matching pattern wins.
///
/// Tokens are lower-cased with diacritics removed before matching, so the
/// patterns are written without accents (`ø`, `đ`, `ŋ` and `ı` survive
/// folding and appear as-is). Seasons map to a representative month.
const MONTH_PATTERNS: [(&str, u8); 12] = [
    (
        r"^(?:jan\w*|gen\w*|ene\w*|ιαν\w*|oca\w*|tammi\w*|sty\w*|ođđajage\w*|winter|vinter|vintern|vinteren|hiver|inverno|invierno|talvi|zima|dalvi)$",
        1,
    ),
    (
        r"^(?:feb\w*|fev\w*|φεβ\w*|subat|helmi\w*|lut\w*|guovva\w*)$",
        2,
    ),
    (
        r"^(?:mar|march|mars|marts|mart|marz|marzo|marco|marca|marzec|maart|μαρ\w*|maalis\w*|njukca\w*)$",
        3,
    ),
    (
        r"^(?:apr\w*|abr\w*|avr\w*|απρ\w*|nisan|huhti\w*|kwi\w*|cuoŋo\w*|spring|var|varen|primavera|printemps|fruhling|fruhjahr|kevat|wiosna|giđđa|ilkbahar)$",
        4,
    ),
    (
        r"^(?:may|mayo|mayıs|mayis|mai|maj|maja|mag|maggio|maio|mei|μαι\w*|touko\w*|miesse\w*)$",
        5,
    ),
    (
        r"^(?:jun\w*|juin|giu\w*|ιουν\w*|haz\w*|kesakuu\w*|cze\w*|geasse\w*)$",
        6,
    ),
    (
        r"^(?:jul|july|juli|juillet|julio|julho|lug\w*|ιουλ\w*|tem\w*|heina\w*|lip\w*|suoidne\w*|summer|sommer|sommar|sommaren|sommeren|ete|estate|verano|verao|kesa|lato|yaz|geassi)$",
        7,
    ),
    (
        r"^(?:aug\w*|ago\w*|aout|αυγ\w*|agu\w*|elo\w*|sie\w*|borge\w*)$",
        8,
    ),
    (
        r"^(?:sep\w*|set\w*|σεπ\w*|eyl\w*|syys\w*|wrz\w*|cakca\w*)$",
        9,
    ),
    (
        r"^(?:oct\w*|okt\w*|ott\w*|out\w*|οκτ\w*|eki\w*|loka\w*|paz\w*|golg\w*|fall|autumn|høst|høsten|host|hosten|automne|herbst|autunno|otono|outono|syksy|jesien|sonbahar)$",
        10,
    ),
    (
        r"^(?:nov\w*|νοε\w*|kas\w*|marras\w*|lis\w*|skabma\w*)$",
        11,
    ),
    (
        r"^(?:dec\w*|dez\w*|dic\w*|des\w*|δεκ\w*|ara\w*|joulu\w*|gru\w*|juovla\w*|christmas|xmas|noel|natale|navidad|weihnacht\w*)$",
        12,
    ),
];

/// Scandinavian words for Christmas, checked before the month table so they
/// do not fall through to July.
const CHRISTMAS_TOKENS: [&str; 2] = ["julen", "jula"];

/// Year gate bounds. The comparison is on strings, not numbers.
const YEAR_LOWER: &str = "18";
const YEAR_UPPER: &str = "21";

/// Highest accepted day of month.
const MAX_DAY: u32 = 31;

lazy_static! {
    static ref SEPARATORS: Regex =
        Regex::new(r"[\s\[\](){},?'’.\-]+").expect("separator pattern is valid");
    static ref LEADING_YEAR: Regex = Regex::new(r"^[0-9]{4}").expect("year pattern is valid");
    static ref LEADING_DAY: Regex = Regex::new(r"^[0-9]{1,2}").expect("day pattern is valid");
    static ref MONTHS: Vec<(Regex, u8)> = MONTH_PATTERNS
        .iter()
        .map(|(pattern, month)| (Regex::new(pattern).expect("month pattern is valid"), *month))
        .collect();
    // Stored key dates: 17xx-20xx, month 00-13, any two-digit day.
    static ref STORED_KEY_DATE: Regex =
        Regex::new(r"^(?:17|18|19|20)[0-9]{2}[.-](?:0[0-9]|1[0-3])[.-][0-9]{2}$")
            .expect("key date pattern is valid");
}

/// Best-guess date components extracted from a publication date.
///
/// Zero in any component means "unknown". A parsed date is only usable when
/// the year is known.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDate {
    /// Four-digit year, or 0
    pub year: u16,
    /// Month 1-12, or 0
    pub month: u8,
    /// Day 1-31, or 0
    pub day: u8,
}

impl ParsedDate {
    /// Extract year, month and day from free text.
    ///
    /// # Examples
    ///
    /// ```
    /// use gcdform::ParsedDate;
    ///
    /// let date = ParsedDate::parse("June 12, 1974");
    /// assert_eq!((date.year, date.month, date.day), (1974, 6, 12));
    ///
    /// let date = ParsedDate::parse("undated");
    /// assert!(!date.is_usable());
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut year: Option<u16> = None;
        let mut month: Option<u8> = None;
        let mut day: Option<u8> = None;

        for token in tokenize(text) {
            if year.is_none() && is_year_token(&token) {
                year = leading_number(&token, 4).and_then(|y| u16::try_from(y).ok());
            } else if day.is_none() && LEADING_DAY.is_match(&token) {
                // zero means unknown and leaves the slot open
                day = leading_number(&token, usize::MAX)
                    .filter(|d| *d != 0 && *d <= MAX_DAY)
                    .and_then(|d| u8::try_from(d).ok());
            } else if month.is_none() {
                month = match_month(&token);
            }
        }

        let parsed = ParsedDate {
            year: year.unwrap_or(0),
            month: month.unwrap_or(0),
            day: day.unwrap_or(0),
        };
        tracing::trace!(input = text, ?parsed, "parsed publication date");
        parsed
    }

    /// Whether a year was found.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.year != 0
    }

    /// The key date for this parse, if a year was found.
    #[must_use]
    pub fn key_date(&self) -> Option<KeyDate> {
        self.is_usable()
            .then(|| KeyDate::new(self.year, self.month, self.day))
    }
}

/// Split text into lower-cased, diacritic-folded tokens.
fn tokenize(text: &str) -> Vec<String> {
    SEPARATORS
        .split(text)
        .filter(|t| !t.is_empty())
        .map(fold)
        .collect()
}

/// Lower-case a token and strip combining marks (`Märze` -> `marze`).
fn fold(token: &str) -> String {
    token
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// A token starts with four digits and sorts strictly between "18" and "21".
///
/// This admits 1800-2099 written as four-digit prefixes, but as a string
/// comparison it also admits e.g. "1974abc".
fn is_year_token(token: &str) -> bool {
    LEADING_YEAR.is_match(token) && token > YEAR_LOWER && token < YEAR_UPPER
}

/// Parse up to `max_digits` leading ASCII digits.
fn leading_number(token: &str, max_digits: usize) -> Option<u32> {
    let digits: String = token
        .chars()
        .take_while(char::is_ascii_digit)
        .take(max_digits)
        .collect();
    digits.parse().ok()
}

/// Month number for a folded token, if it names a month or season.
fn match_month(token: &str) -> Option<u8> {
    if CHRISTMAS_TOKENS.contains(&token) {
        return Some(12);
    }
    MONTHS
        .iter()
        .find(|(pattern, _)| pattern.is_match(token))
        .map(|(_, month)| *month)
}

/// Render year, month and day as `YYYY-MM-DD`, zero padded.
///
/// # Examples
///
/// ```
/// use gcdform::key_date::format_key_date;
///
/// assert_eq!(format_key_date(1974, 6, 0), "1974-06-00");
/// ```
#[must_use]
pub fn format_key_date(year: u16, month: u8, day: u8) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Infer the key date for a free-text publication date.
///
/// Returns the empty string when no usable year is found.
///
/// # Examples
///
/// ```
/// use gcdform::parse_publication_date;
///
/// assert_eq!(parse_publication_date("June 1974"), "1974-06-00");
/// assert_eq!(parse_publication_date("Spring 1974"), "1974-04-00");
/// assert_eq!(parse_publication_date("jula 1990"), "1990-12-00");
/// assert_eq!(parse_publication_date("no year here"), "");
/// ```
#[must_use]
pub fn parse_publication_date(text: &str) -> String {
    ParsedDate::parse(text)
        .key_date()
        .map(KeyDate::into_string)
        .unwrap_or_default()
}

/// Canonical sortable date `YYYY-MM-DD`; `00` marks unknown month or day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct KeyDate(String);

impl KeyDate {
    /// Build a key date from components (0 = unknown).
    #[must_use]
    pub fn new(year: u16, month: u8, day: u8) -> Self {
        KeyDate(format_key_date(year, month, day))
    }

    /// Year-only key date, `YYYY-00-00`.
    ///
    /// Used when the only known date is a series' starting year.
    #[must_use]
    pub fn from_year(year: u16) -> Self {
        KeyDate::new(year, 0, 0)
    }

    /// The key date text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for KeyDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for KeyDate {
    type Err = FormError;

    /// Validate a stored key date.
    ///
    /// Accepts years 1700-2099, months `00`-`13` and `-` or `.` separators,
    /// matching what the issue table allows.
    fn from_str(s: &str) -> Result<Self> {
        if STORED_KEY_DATE.is_match(s) {
            Ok(KeyDate(s.to_string()))
        } else {
            Err(FormError::InvalidKeyDate(s.to_string()))
        }
    }
}
