//! Static country dataset for the international phone input.
//!
//! The set is a curated list of 44 countries ordered by expected usage,
//! not alphabetically. Order matters for dial-code hydration: `+1` maps
//! to the first `+1` entry (United States), same as the picker default.

/// A selectable country: ISO code, display name, flag emoji, dial code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub flag: &'static str,
    pub dial_code: &'static str,
}

impl Country {
    /// Case-insensitive match against name and ISO code, case-sensitive
    /// substring match against the dial code (queries like "+4" or "44").
    pub fn matches(&self, query: &str) -> bool {
        let query_lower = query.to_lowercase();
        self.name.to_lowercase().contains(&query_lower)
            || self.code.to_lowercase().contains(&query_lower)
            || self.dial_code.contains(query)
    }
}

pub const COUNTRIES: &[Country] = &[
    Country { code: "US", name: "United States", flag: "🇺🇸", dial_code: "+1" },
    Country { code: "CA", name: "Canada", flag: "🇨🇦", dial_code: "+1" },
    Country { code: "GB", name: "United Kingdom", flag: "🇬🇧", dial_code: "+44" },
    Country { code: "AU", name: "Australia", flag: "🇦🇺", dial_code: "+61" },
    Country { code: "DE", name: "Germany", flag: "🇩🇪", dial_code: "+49" },
    Country { code: "FR", name: "France", flag: "🇫🇷", dial_code: "+33" },
    Country { code: "JP", name: "Japan", flag: "🇯🇵", dial_code: "+81" },
    Country { code: "KR", name: "South Korea", flag: "🇰🇷", dial_code: "+82" },
    Country { code: "CN", name: "China", flag: "🇨🇳", dial_code: "+86" },
    Country { code: "IN", name: "India", flag: "🇮🇳", dial_code: "+91" },
    Country { code: "BR", name: "Brazil", flag: "🇧🇷", dial_code: "+55" },
    Country { code: "MX", name: "Mexico", flag: "🇲🇽", dial_code: "+52" },
    Country { code: "AR", name: "Argentina", flag: "🇦🇷", dial_code: "+54" },
    Country { code: "IT", name: "Italy", flag: "🇮🇹", dial_code: "+39" },
    Country { code: "ES", name: "Spain", flag: "🇪🇸", dial_code: "+34" },
    Country { code: "NL", name: "Netherlands", flag: "🇳🇱", dial_code: "+31" },
    Country { code: "CH", name: "Switzerland", flag: "🇨🇭", dial_code: "+41" },
    Country { code: "SE", name: "Sweden", flag: "🇸🇪", dial_code: "+46" },
    Country { code: "NO", name: "Norway", flag: "🇳🇴", dial_code: "+47" },
    Country { code: "DK", name: "Denmark", flag: "🇩🇰", dial_code: "+45" },
    Country { code: "FI", name: "Finland", flag: "🇫🇮", dial_code: "+358" },
    Country { code: "BE", name: "Belgium", flag: "🇧🇪", dial_code: "+32" },
    Country { code: "AT", name: "Austria", flag: "🇦🇹", dial_code: "+43" },
    Country { code: "IE", name: "Ireland", flag: "🇮🇪", dial_code: "+353" },
    Country { code: "PL", name: "Poland", flag: "🇵🇱", dial_code: "+48" },
    Country { code: "PT", name: "Portugal", flag: "🇵🇹", dial_code: "+351" },
    Country { code: "GR", name: "Greece", flag: "🇬🇷", dial_code: "+30" },
    Country { code: "RU", name: "Russia", flag: "🇷🇺", dial_code: "+7" },
    Country { code: "TR", name: "Turkey", flag: "🇹🇷", dial_code: "+90" },
    Country { code: "SA", name: "Saudi Arabia", flag: "🇸🇦", dial_code: "+966" },
    Country { code: "AE", name: "United Arab Emirates", flag: "🇦🇪", dial_code: "+971" },
    Country { code: "SG", name: "Singapore", flag: "🇸🇬", dial_code: "+65" },
    Country { code: "MY", name: "Malaysia", flag: "🇲🇾", dial_code: "+60" },
    Country { code: "TH", name: "Thailand", flag: "🇹🇭", dial_code: "+66" },
    Country { code: "PH", name: "Philippines", flag: "🇵🇭", dial_code: "+63" },
    Country { code: "VN", name: "Vietnam", flag: "🇻🇳", dial_code: "+84" },
    Country { code: "ID", name: "Indonesia", flag: "🇮🇩", dial_code: "+62" },
    Country { code: "ZA", name: "South Africa", flag: "🇿🇦", dial_code: "+27" },
    Country { code: "EG", name: "Egypt", flag: "🇪🇬", dial_code: "+20" },
    Country { code: "NG", name: "Nigeria", flag: "🇳🇬", dial_code: "+234" },
    Country { code: "KE", name: "Kenya", flag: "🇰🇪", dial_code: "+254" },
    Country { code: "CL", name: "Chile", flag: "🇨🇱", dial_code: "+56" },
    Country { code: "CO", name: "Colombia", flag: "🇨🇴", dial_code: "+57" },
    Country { code: "PE", name: "Peru", flag: "🇵🇪", dial_code: "+51" },
];

/// The picker default (first entry, United States).
pub fn default_country() -> &'static Country {
    &COUNTRIES[0]
}

/// Filters the dataset by a search query, preserving dataset order.
///
/// An empty query returns every country.
pub fn filter(query: &str) -> Vec<&'static Country> {
    if query.is_empty() {
        return COUNTRIES.iter().collect();
    }
    COUNTRIES.iter().filter(|c| c.matches(query)).collect()
}

/// Splits a raw `{dial}{digits}` value into its country and national part.
///
/// First match in dataset order wins, so `+1...` resolves to the United
/// States even though Canada shares the dial code. Returns `None` when no
/// dial code prefixes the value.
pub fn split_dial_prefix(raw: &str) -> Option<(&'static Country, &str)> {
    COUNTRIES
        .iter()
        .find(|c| raw.starts_with(c.dial_code))
        .map(|c| (c, raw[c.dial_code.len()..].trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_size_and_default() {
        assert_eq!(COUNTRIES.len(), 44);
        assert_eq!(default_country().code, "US");
        assert_eq!(COUNTRIES.last().map(|c| c.code), Some("PE"));
    }

    #[test]
    fn test_filter_by_name_case_insensitive() {
        let hits = filter("united");
        let codes: Vec<_> = hits.iter().map(|c| c.code).collect();
        assert_eq!(codes, vec!["US", "GB", "AE"]);
    }

    #[test]
    fn test_filter_by_iso_code() {
        let hits = filter("gb");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "United Kingdom");
    }

    #[test]
    fn test_filter_by_dial_code_substring() {
        // "+4" matches +44, +49, +41, +46, +47, +45, +43, +48
        let hits = filter("+4");
        assert!(hits.iter().all(|c| c.dial_code.contains("+4")));
        assert!(hits.iter().any(|c| c.code == "GB"));
        assert!(hits.iter().any(|c| c.code == "DE"));
    }

    #[test]
    fn test_filter_empty_query_returns_all() {
        assert_eq!(filter("").len(), COUNTRIES.len());
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter("zz-no-such-country").is_empty());
    }

    #[test]
    fn test_split_dial_prefix_shared_code_prefers_first() {
        let (country, rest) = split_dial_prefix("+15551234567").unwrap();
        assert_eq!(country.code, "US");
        assert_eq!(rest, "5551234567");
    }

    #[test]
    fn test_split_dial_prefix_longer_code() {
        let (country, rest) = split_dial_prefix("+3581234").unwrap();
        assert_eq!(country.code, "FI");
        assert_eq!(rest, "1234");
    }

    #[test]
    fn test_split_dial_prefix_unknown() {
        assert!(split_dial_prefix("00441234").is_none());
    }
}
