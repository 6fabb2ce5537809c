//! Phone number composition for the login flow.
//!
//! A `PhoneNumber` is a selected country plus a raw digit buffer. The
//! buffer only ever holds ASCII digits; formatting is applied on display
//! and the wire value is `{dial_code}{digits}` with no separators.

use crate::countries::{self, Country};

/// A phone number under composition: country selection + national digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    country: &'static Country,
    digits: String,
}

impl Default for PhoneNumber {
    fn default() -> Self {
        Self {
            country: countries::default_country(),
            digits: String::new(),
        }
    }
}

impl PhoneNumber {
    /// Reconstructs a number from a previously composed value.
    ///
    /// If a known dial code prefixes the value, that country is selected
    /// and the remainder becomes the digit buffer. Otherwise the default
    /// country is kept and the whole value (digits only) is the buffer.
    /// This runs once for pre-filled values; later edits never re-split.
    pub fn hydrate(raw: &str) -> Self {
        match countries::split_dial_prefix(raw) {
            Some((country, rest)) => {
                let mut number = Self {
                    country,
                    digits: String::new(),
                };
                number.edit(rest);
                number
            }
            None => {
                let mut number = Self::default();
                number.edit(raw);
                number
            }
        }
    }

    /// Replaces the digit buffer with the digits of `input`.
    ///
    /// Non-digit characters are stripped, so typing separators or pasting
    /// a formatted number is harmless.
    pub fn edit(&mut self, input: &str) {
        self.digits = input.chars().filter(char::is_ascii_digit).collect();
    }

    /// Appends a single character to the buffer if it is a digit.
    pub fn push_digit(&mut self, c: char) {
        if c.is_ascii_digit() {
            self.digits.push(c);
        }
    }

    /// Removes the last digit, if any.
    pub fn pop_digit(&mut self) {
        self.digits.pop();
    }

    /// Changes the selected country. The digit buffer is kept as-is.
    pub fn select_country(&mut self, country: &'static Country) {
        self.country = country;
    }

    pub fn country(&self) -> &'static Country {
        self.country
    }

    pub fn digits(&self) -> &str {
        &self.digits
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// The display form of the national part, formatted per country.
    ///
    /// NANP (US/CA): progressive `(DDD) DDD-DDDD`; digits past ten
    /// extend the last group rather than being dropped.
    /// Everything else: `DDD DDD rest` grouping once enough digits exist.
    pub fn display_text(&self) -> String {
        let d = &self.digits;
        if self.country.code == "US" || self.country.code == "CA" {
            return match d.len() {
                0..=2 => d.clone(),
                3..=5 => format!("({}) {}", &d[..3], &d[3..]),
                _ => format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]),
            };
        }
        match d.len() {
            0..=3 => d.clone(),
            4..=6 => format!("{} {}", &d[..3], &d[3..]),
            _ => format!("{} {} {}", &d[..3], &d[3..6], &d[6..]),
        }
    }

    /// The display form including the dial code, e.g. `+1 (555) 123-4567`.
    pub fn display_full(&self) -> String {
        if self.digits.is_empty() {
            self.country.dial_code.to_string()
        } else {
            format!("{} {}", self.country.dial_code, self.display_text())
        }
    }

    /// The composed wire value: `{dial_code}{digits}`, or empty when no
    /// digits have been entered (an empty buffer never submits a bare
    /// dial code).
    pub fn composed(&self) -> String {
        if self.digits.is_empty() {
            String::new()
        } else {
            format!("{}{}", self.country.dial_code, self.digits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countries::COUNTRIES;

    fn country(code: &str) -> &'static Country {
        COUNTRIES.iter().find(|c| c.code == code).unwrap()
    }

    #[test]
    fn test_default_is_us_and_empty() {
        let number = PhoneNumber::default();
        assert_eq!(number.country().code, "US");
        assert!(number.is_empty());
        assert_eq!(number.composed(), "");
    }

    #[test]
    fn test_edit_strips_non_digits() {
        let mut number = PhoneNumber::default();
        number.edit("(555) 123-4567");
        assert_eq!(number.digits(), "5551234567");
    }

    #[test]
    fn test_nanp_formatting_progression() {
        let mut number = PhoneNumber::default();
        number.edit("55");
        assert_eq!(number.display_text(), "55");
        number.edit("5551");
        assert_eq!(number.display_text(), "(555) 1");
        number.edit("5551234");
        assert_eq!(number.display_text(), "(555) 123-4");
        number.edit("5551234567");
        assert_eq!(number.display_text(), "(555) 123-4567");
    }

    #[test]
    fn test_nanp_digits_beyond_ten_extend_last_group() {
        let mut number = PhoneNumber::default();
        number.edit("555123456789");
        assert_eq!(number.display_text(), "(555) 123-456789");

        // Formatting only inserts separators; every digit survives.
        let stripped: String = number
            .display_text()
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        assert_eq!(stripped, "555123456789");
    }

    #[test]
    fn test_international_formatting() {
        let mut number = PhoneNumber::default();
        number.select_country(country("DE"));
        number.edit("151");
        assert_eq!(number.display_text(), "151");
        number.edit("15123");
        assert_eq!(number.display_text(), "151 23");
        number.edit("15123456789");
        assert_eq!(number.display_text(), "151 234 56789");
    }

    #[test]
    fn test_composed_has_no_separators() {
        let mut number = PhoneNumber::default();
        number.edit("5551234567");
        assert_eq!(number.composed(), "+15551234567");

        number.select_country(country("GB"));
        assert_eq!(number.composed(), "+445551234567");
    }

    #[test]
    fn test_country_switch_keeps_digits() {
        let mut number = PhoneNumber::default();
        number.edit("555123");
        number.select_country(country("JP"));
        assert_eq!(number.digits(), "555123");
        assert_eq!(number.display_text(), "555 123");
    }

    #[test]
    fn test_hydrate_known_dial_code() {
        let number = PhoneNumber::hydrate("+445551234567");
        assert_eq!(number.country().code, "GB");
        assert_eq!(number.digits(), "5551234567");
    }

    #[test]
    fn test_hydrate_shared_dial_code_prefers_us() {
        let number = PhoneNumber::hydrate("+15551234567");
        assert_eq!(number.country().code, "US");
    }

    #[test]
    fn test_hydrate_unknown_prefix_keeps_default() {
        let number = PhoneNumber::hydrate("00445551234");
        assert_eq!(number.country().code, "US");
        assert_eq!(number.digits(), "00445551234");
    }

    #[test]
    fn test_display_full() {
        let mut number = PhoneNumber::default();
        assert_eq!(number.display_full(), "+1");
        number.edit("5551234567");
        assert_eq!(number.display_full(), "+1 (555) 123-4567");
    }
}
