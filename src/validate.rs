//! Synchronous form validators. Each returns an error message suitable for
//! inline display, or `None` when the value passes.

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

pub fn routing_number_error(value: &str) -> Option<&'static str> {
    if is_digits(value) && value.len() == 9 {
        None
    } else {
        Some("Routing number must be exactly 9 digits.")
    }
}

pub fn account_number_error(value: &str) -> Option<&'static str> {
    if is_digits(value) && (8..=17).contains(&value.len()) {
        None
    } else {
        Some("Account number must be 8-17 digits.")
    }
}

/// Amounts come in as free text; accept only a plain positive decimal.
pub fn parse_amount(value: &str) -> Result<f64, &'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err("Amount is required.");
    }
    let plain_decimal = trimmed.chars().all(|c| c.is_ascii_digit() || c == '.')
        && trimmed.chars().filter(|c| *c == '.').count() <= 1;
    if !plain_decimal {
        return Err("Amount must be a number.");
    }
    match trimmed.parse::<f64>() {
        Ok(amount) if amount > 0.0 => Ok(amount),
        _ => Err("Amount must be a positive number."),
    }
}

pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn password_error(value: &str) -> Option<&'static str> {
    if value.len() >= 8 {
        None
    } else {
        Some("Password must be at least 8 characters.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_number_needs_exactly_nine_digits() {
        assert!(routing_number_error("123456789").is_none());
        assert!(routing_number_error("12345678").is_some());
        assert!(routing_number_error("1234567890").is_some());
        assert!(routing_number_error("12345678a").is_some());
        assert!(routing_number_error("").is_some());
    }

    #[test]
    fn account_number_accepts_eight_to_seventeen_digits() {
        assert!(account_number_error("12345678").is_none());
        assert!(account_number_error("12345678901234567").is_none());
        assert!(account_number_error("1234567").is_some());
        assert!(account_number_error("123456789012345678").is_some());
        assert!(account_number_error("12 345678").is_some());
    }

    #[test]
    fn amount_must_be_a_positive_decimal() {
        assert_eq!(parse_amount("42.50"), Ok(42.5));
        assert_eq!(parse_amount(" 7 "), Ok(7.0));
        assert!(parse_amount("").is_err());
        assert!(parse_amount("0").is_err());
        assert!(parse_amount("-3").is_err());
        assert!(parse_amount("3.1.4").is_err());
        assert!(parse_amount("ten").is_err());
    }

    #[test]
    fn required_rejects_whitespace_only() {
        assert!(required("salary"));
        assert!(!required("   "));
        assert!(!required(""));
    }

    #[test]
    fn password_minimum_length() {
        assert!(password_error("password123").is_none());
        assert!(password_error("short").is_some());
    }
}
