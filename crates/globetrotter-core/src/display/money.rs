//! Cost formatting.

use std::fmt;

/// An amount in rupees, rendered with thousands separators.
///
/// Whole amounts print without decimals; fractional amounts keep up to
/// two places.
///
/// # Examples
///
/// ```rust
/// use globetrotter_core::display::Rupees;
///
/// assert_eq!(Rupees(0.0).to_string(), "₹0");
/// assert_eq!(Rupees(1234567.0).to_string(), "₹1,234,567");
/// assert_eq!(Rupees(250.5).to_string(), "₹250.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rupees(pub f64);

impl fmt::Display for Rupees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = (self.0 * 100.0).round() / 100.0;
        let sign = if rounded < 0.0 { "-" } else { "" };
        let fixed = format!("{:.2}", rounded.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let fraction = fraction.trim_end_matches('0');

        write!(f, "{sign}₹{}", group_thousands(whole))?;
        if !fraction.is_empty() {
            write!(f, ".{fraction}")?;
        }
        Ok(())
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping() {
        assert_eq!(Rupees(999.0).to_string(), "₹999");
        assert_eq!(Rupees(1000.0).to_string(), "₹1,000");
        assert_eq!(Rupees(15000.0).to_string(), "₹15,000");
        assert_eq!(Rupees(100000.0).to_string(), "₹100,000");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(Rupees(49.99).to_string(), "₹49.99");
        assert_eq!(Rupees(1000.1).to_string(), "₹1,000.1");
        assert_eq!(Rupees(10.004).to_string(), "₹10");
    }

    #[test]
    fn test_negative() {
        assert_eq!(Rupees(-1500.0).to_string(), "-₹1,500");
    }
}
