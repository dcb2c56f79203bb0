/// Parse a record field as a number.
///
/// Integers are tried first, then floats. Surrounding whitespace is ignored.
/// Non-finite results (`inf`, `NaN`) are rejected.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(i as f64);
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
