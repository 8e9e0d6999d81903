//! Key-date inference across the publication-date formats seen in issue
//! indexes: partial precision, seasons, bracketed guesses and many
//! languages.

use gcdform::key_date::format_key_date;
use gcdform::{parse_publication_date, KeyDate, ParsedDate};

#[test]
fn test_documented_examples() {
    assert_eq!(parse_publication_date("June 1974"), "1974-06-00");
    assert_eq!(parse_publication_date("Spring 1974"), "1974-04-00");
    assert_eq!(parse_publication_date("jula 1990"), "1990-12-00");
    assert_eq!(parse_publication_date("no year here"), "");
}

#[test]
fn test_year_only() {
    assert_eq!(parse_publication_date("1974"), "1974-00-00");
    assert_eq!(parse_publication_date("[1985?]"), "1985-00-00");
    assert_eq!(parse_publication_date("(c) 2003"), "2003-00-00");
}

#[test]
fn test_full_dates() {
    assert_eq!(parse_publication_date("June 12, 1974"), "1974-06-12");
    assert_eq!(parse_publication_date("3 mars 1966"), "1966-03-03");
    assert_eq!(parse_publication_date("1. Dezember 1988"), "1988-12-01");
}

#[test]
fn test_numeric_components_fill_day() {
    // only the day slot takes a bare number
    assert_eq!(parse_publication_date("1974-06"), "1974-00-06");
    assert_eq!(parse_publication_date("1974.06.15"), "1974-00-06");
}

#[test]
fn test_year_string_gate() {
    assert_eq!(parse_publication_date("1800"), "1800-00-00");
    assert_eq!(parse_publication_date("2099"), "2099-00-00");
    assert_eq!(parse_publication_date("1799"), "");
    assert_eq!(parse_publication_date("2100"), "");
    // four-digit prefixes pass the gate
    assert_eq!(parse_publication_date("1974a"), "1974-00-00");
}

#[test]
fn test_english_months() {
    let months = [
        "January", "Feb", "March", "Apr", "May", "June", "July", "Aug", "Sept", "October",
        "Nov", "December",
    ];
    for (i, name) in months.iter().enumerate() {
        assert_eq!(
            parse_publication_date(&format!("{name} 1980")),
            format_key_date(1980, u8::try_from(i + 1).unwrap(), 0),
            "month {name}"
        );
    }
}

#[test]
fn test_italian_and_spanish_months() {
    assert_eq!(parse_publication_date("gennaio 1970"), "1970-01-00");
    assert_eq!(parse_publication_date("maggio 1970"), "1970-05-00");
    assert_eq!(parse_publication_date("ottobre 1970"), "1970-10-00");
    assert_eq!(parse_publication_date("enero 1970"), "1970-01-00");
    assert_eq!(parse_publication_date("agosto 1970"), "1970-08-00");
    assert_eq!(parse_publication_date("diciembre 1970"), "1970-12-00");
}

#[test]
fn test_greek_months() {
    assert_eq!(parse_publication_date("Ιανουάριος 1983"), "1983-01-00");
    assert_eq!(parse_publication_date("Μάιος 1983"), "1983-05-00");
    assert_eq!(parse_publication_date("ΑΥΓΟΥΣΤΟΣ 1983"), "1983-08-00");
    assert_eq!(parse_publication_date("Δεκεμβρίου 1983"), "1983-12-00");
}

#[test]
fn test_turkish_months() {
    assert_eq!(parse_publication_date("Şubat 1992"), "1992-02-00");
    assert_eq!(parse_publication_date("Mayıs 1992"), "1992-05-00");
    // upper-casing drops the dotless i
    assert_eq!(parse_publication_date("MAYIS 1992"), "1992-05-00");
    assert_eq!(parse_publication_date("Mayis 1992"), "1992-05-00");
    assert_eq!(parse_publication_date("EKİM 1990"), "1990-10-00");
    assert_eq!(parse_publication_date("Ağustos 1992"), "1992-08-00");
    assert_eq!(parse_publication_date("Kasım 1992"), "1992-11-00");
}

#[test]
fn test_finnish_months() {
    assert_eq!(parse_publication_date("tammikuu 1977"), "1977-01-00");
    assert_eq!(parse_publication_date("kesäkuu 1977"), "1977-06-00");
    assert_eq!(parse_publication_date("heinäkuu 1977"), "1977-07-00");
    // marraskuu must not be read as March
    assert_eq!(parse_publication_date("marraskuu 1977"), "1977-11-00");
}

#[test]
fn test_polish_months() {
    assert_eq!(parse_publication_date("styczeń 2001"), "2001-01-00");
    assert_eq!(parse_publication_date("marca 2001"), "2001-03-00");
    assert_eq!(parse_publication_date("październik 2001"), "2001-10-00");
    assert_eq!(parse_publication_date("grudzień 2001"), "2001-12-00");
}

#[test]
fn test_sami_months() {
    assert_eq!(parse_publication_date("ođđajagemánnu 2010"), "2010-01-00");
    assert_eq!(parse_publication_date("čakčamánnu 2010"), "2010-09-00");
    assert_eq!(parse_publication_date("juovlamánnu 2010"), "2010-12-00");
}

#[test]
fn test_seasons_and_holidays() {
    assert_eq!(parse_publication_date("Winter 1972"), "1972-01-00");
    assert_eq!(parse_publication_date("Vår 1972"), "1972-04-00");
    assert_eq!(parse_publication_date("Summer 1972"), "1972-07-00");
    assert_eq!(parse_publication_date("Fall 1972"), "1972-10-00");
    assert_eq!(parse_publication_date("Høst 1972"), "1972-10-00");
    assert_eq!(parse_publication_date("Christmas 1972"), "1972-12-00");
    assert_eq!(parse_publication_date("Julen 1972"), "1972-12-00");
}

#[test]
fn test_parsed_date_components() {
    let parsed = ParsedDate::parse("Summer 1975");
    assert_eq!(
        parsed,
        ParsedDate {
            year: 1975,
            month: 7,
            day: 0
        }
    );
    assert!(parsed.is_usable());
    assert_eq!(parsed.key_date().unwrap().as_str(), "1975-07-00");

    let unknown = ParsedDate::parse("June 12");
    assert!(!unknown.is_usable());
    assert_eq!(unknown.key_date(), None);
}

#[test]
fn test_stored_key_dates() {
    assert_eq!(
        "1962-08-00".parse::<KeyDate>().unwrap(),
        KeyDate::new(1962, 8, 0)
    );
    assert_eq!(KeyDate::from_year(1962).to_string(), "1962-00-00");
    assert!("1701.00.00".parse::<KeyDate>().is_ok());
    assert!("2100-01-01".parse::<KeyDate>().is_err());
    assert!("".parse::<KeyDate>().is_err());
    assert!(matches!(
        "1974-6".parse::<KeyDate>(),
        Err(gcdform::FormError::InvalidKeyDate(value)) if value == "1974-6"
    ));
}

#[test]
fn test_inferred_key_dates_are_storable() {
    for text in ["June 1974", "Spring 1974", "12 Dec 1999", "2001"] {
        let inferred = parse_publication_date(text);
        assert!(inferred.parse::<KeyDate>().is_ok(), "{text} -> {inferred}");
    }
}
