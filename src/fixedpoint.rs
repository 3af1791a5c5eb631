/**
 * Amounts are held as fixed point integers counting paise, so 150000.50
 * rupees is 15000050. The demo data never needs more than two places past
 * the point.
 *
 * Note: amounts are validated as non-negative at parse time, which is why
 * everything downstream is unsigned and the direction of a transaction
 * lives only in its type.
 */
use thiserror::Error;

const FIXED_POINT_MAGNITUDE: u64 = 100;
const EXPECTED_PRECISION: usize = 2;

pub const CURRENCY_SYMBOL: &str = "₹";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,
    #[error("amount contains more than one dot")]
    TooManyDots,
    #[error("amount exceeds two digits past the point")]
    TooPrecise,
    #[error("amount is negative")]
    Negative,
    #[error("amount is not a number: {0:?}")]
    NotANumber(String),
    #[error("amount does not fit in paise: {0:?}")]
    Overflow(String),
}

pub fn string_to_fixed_point(string: &str) -> Result<u64, AmountError> {
    let string = string.trim();
    if string.is_empty() {
        return Err(AmountError::Empty);
    }
    if string.starts_with('-') {
        return Err(AmountError::Negative);
    }

    let split_amount: Vec<&str> = string.split('.').collect();
    if split_amount.len() > 2 {
        return Err(AmountError::TooManyDots);
    }
    if split_amount.iter().all(|part| part.is_empty()) {
        return Err(AmountError::NotANumber(string.to_string()));
    }

    let units = parse_digits(split_amount[0], string)?;

    let hundredths = match split_amount.get(1) {
        None => 0,
        Some(fraction) => {
            let digits = fraction.len();
            if digits > EXPECTED_PRECISION {
                return Err(AmountError::TooPrecise);
            }
            let decimal_multiplier = 10u64.pow((EXPECTED_PRECISION - digits) as u32);
            parse_digits(fraction, string)? * decimal_multiplier
        }
    };

    units
        .checked_mul(FIXED_POINT_MAGNITUDE)
        .and_then(|paise| paise.checked_add(hundredths))
        .ok_or_else(|| AmountError::Overflow(string.to_string()))
}

// `u64::from_str` accepts a leading '+', which an amount column should not.
fn parse_digits(part: &str, whole: &str) -> Result<u64, AmountError> {
    if part.is_empty() {
        return Ok(0);
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::NotANumber(whole.to_string()));
    }
    part.parse()
        .map_err(|_| AmountError::Overflow(whole.to_string()))
}

/// Renders paise as rupees with comma grouping and exactly two decimals,
/// prefixed by the currency symbol: `15000050` becomes `₹150,000.50`.
pub fn fixed_point_to_currency(fixed_point: u64) -> String {
    format!(
        "{}{}.{:02}",
        CURRENCY_SYMBOL,
        group_thousands(fixed_point / FIXED_POINT_MAGNITUDE),
        fixed_point % FIXED_POINT_MAGNITUDE
    )
}

fn group_thousands(units: u64) -> String {
    let digits = units.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
