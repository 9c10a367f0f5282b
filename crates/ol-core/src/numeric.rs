use crate::OlError;

/// Floating point type used throughout the system.
pub type Real = f64;

/// Round to 2 decimal places.
///
/// Electrical ratings are entered and displayed with fixed-point semantics;
/// every user-supplied number passes through this before it is stored.
pub fn round2(v: Real) -> Real {
    (v * 100.0).round() / 100.0
}

/// Parse user text into a number.
///
/// Empty or non-numeric input is absent, never zero. Finite values are rounded
/// to 2 decimal places.
pub fn parse_field(text: &str) -> Option<Real> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed
        .parse::<Real>()
        .ok()
        .filter(|v| v.is_finite())
        .map(round2)
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, OlError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(OlError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_basic() {
        assert_eq!(round2(1.234), 1.23);
        assert_eq!(round2(1.236), 1.24);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(5.0), 5.0);
    }

    #[test]
    fn parse_field_absent_on_bad_input() {
        assert_eq!(parse_field(""), None);
        assert_eq!(parse_field("   "), None);
        assert_eq!(parse_field("abc"), None);
        assert_eq!(parse_field("1.2.3"), None);
        assert_eq!(parse_field("NaN"), None);
        assert_eq!(parse_field("inf"), None);
    }

    #[test]
    fn parse_field_rounds() {
        assert_eq!(parse_field("200"), Some(200.0));
        assert_eq!(parse_field(" 3.14159 "), Some(3.14));
        assert_eq!(parse_field("-12.345"), Some(-12.35));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }
}
