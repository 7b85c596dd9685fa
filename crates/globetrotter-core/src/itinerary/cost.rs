//! Lenient cost parsing.

/// Reads a free-form cost as a non-negative number.
///
/// Every character other than ASCII digits and `.` is dropped first, so
/// currency symbols, separators and signs are ignored. The longest leading
/// decimal number of what remains is used; anything else counts as zero.
///
/// # Examples
///
/// ```rust
/// use globetrotter_core::itinerary::parse_cost;
///
/// assert_eq!(parse_cost("₹2,500"), 2500.0);
/// assert_eq!(parse_cost("$12.50 pp"), 12.5);
/// assert_eq!(parse_cost("1.2.3"), 1.2);
/// assert_eq!(parse_cost(""), 0.0);
/// assert_eq!(parse_cost("free"), 0.0);
/// ```
pub fn parse_cost(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    let number = leading_decimal(&cleaned);
    number.parse::<f64>().unwrap_or(0.0)
}

fn leading_decimal(s: &str) -> &str {
    let integer_end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());

    let rest = &s[integer_end..];
    if !rest.starts_with('.') {
        return &s[..integer_end];
    }

    let fraction_len = rest[1..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len() - 1);
    &s[..integer_end + 1 + fraction_len]
}
