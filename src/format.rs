pub fn format_with_commas(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut out = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let sign = if amount < 0.0 { "-" } else { "" };
    format!(
        "{}${}.{:02}",
        sign,
        format_with_commas(cents / 100),
        cents % 100
    )
}

/// All but the last four digits hidden, matching how the account list
/// renders numbers.
pub fn mask_account_number(number: &str) -> String {
    if number.len() <= 4 {
        return number.to_string();
    }
    let visible = &number[number.len() - 4..];
    format!("{}{}", "*".repeat(number.len() - 4), visible)
}

/// Local calendar date as `YYYY-MM-DD`, used as the default for date inputs.
pub fn today() -> String {
    let now = js_sys::Date::new_0();
    format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commas_group_thousands() {
        assert_eq!(format_with_commas(0), "0");
        assert_eq!(format_with_commas(999), "999");
        assert_eq!(format_with_commas(1000), "1,000");
        assert_eq!(format_with_commas(1234567), "1,234,567");
        assert_eq!(format_with_commas(-4500), "-4,500");
    }

    #[test]
    fn amounts_render_two_decimals() {
        assert_eq!(format_amount(42.5), "$42.50");
        assert_eq!(format_amount(1234.0), "$1,234.00");
        assert_eq!(format_amount(0.999), "$1.00");
        assert_eq!(format_amount(-12.3), "-$12.30");
    }

    #[test]
    fn masked_numbers_keep_last_four() {
        assert_eq!(mask_account_number("123456789"), "*****6789");
        assert_eq!(mask_account_number("1234"), "1234");
        assert_eq!(mask_account_number("123"), "123");
    }
}
