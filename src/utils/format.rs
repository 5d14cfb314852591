use num_format::{Locale, ToFormattedString};

/// Format a population as a short label: billions with one decimal (`1.5B`), millions with one
/// decimal (`12.3M`), thousands without decimals (`45K`) and the plain number below one thousand.
///
/// # Arguments
///
/// * `population`: The population.
///
/// returns: `String`
pub fn format_population(population: f64) -> String {
    if population >= 1e9 {
        format!("{:.1}B", population / 1e9)
    } else if population >= 1e6 {
        format!("{:.1}M", population / 1e6)
    } else if population >= 1e3 {
        format!("{:.0}K", population / 1e3)
    } else {
        format!("{}", population.trunc() as i64)
    }
}

/// Format an integer with comma thousands separators (`1234567` becomes `1,234,567`).
///
/// # Arguments
///
/// * `number`: The number to format.
///
/// returns: `String`
pub fn with_thousands_separator(number: u64) -> String {
    number.to_formatted_string(&Locale::en)
}

#[cfg(test)]
mod test {
    use crate::utils::{format_population, with_thousands_separator};

    #[test]
    fn test_format_population() {
        assert_eq!(format_population(2_460_000_000.0), "2.5B");
        assert_eq!(format_population(12_340_000.0), "12.3M");
        assert_eq!(format_population(1_000_000.0), "1.0M");
        assert_eq!(format_population(45_400.0), "45K");
        assert_eq!(format_population(999.9), "999");
        assert_eq!(format_population(0.0), "0");
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(with_thousands_separator(0), "0");
        assert_eq!(with_thousands_separator(999), "999");
        assert_eq!(with_thousands_separator(1000), "1,000");
        assert_eq!(with_thousands_separator(1_234_567), "1,234,567");
        assert_eq!(with_thousands_separator(u64::MAX), "18,446,744,073,709,551,615");
    }
}
