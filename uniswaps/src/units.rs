use alloy::primitives::U256;
use alloy::primitives::utils::parse_units;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitsError {
    #[error("amount is empty")]
    Empty,
    #[error("amount `{0}` is negative")]
    Negative(String),
    #[error("amount `{value}` is not a decimal number with at most {decimals} decimals: {reason}")]
    Malformed {
        value: String,
        decimals: u8,
        reason: String,
    },
}

/// Render a raw token amount with `decimals` places, trailing zeros trimmed.
pub fn format_token(amount: U256, decimals: u8) -> String {
    let base = U256::from(10u64).pow(U256::from(decimals));
    let whole = amount / base;
    let frac = amount % base;
    if frac.is_zero() {
        return format!("{whole}");
    }
    let digits = frac.to_string();
    let mut frac_str = "0".repeat(decimals as usize - digits.len()) + &digits;
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    format!("{whole}.{frac_str}")
}

/// Parse a human amount such as `"3.0"` into the token's smallest unit.
pub fn parse_token(amount: &str, decimals: u8) -> Result<U256, UnitsError> {
    let value = amount.trim();
    if value.is_empty() {
        return Err(UnitsError::Empty);
    }
    if value.starts_with('-') {
        return Err(UnitsError::Negative(value.to_string()));
    }
    // parse_units would truncate these; trailing zeros carry no precision.
    if let Some((_, frac)) = value.split_once('.') {
        let significant = frac.trim_end_matches('0').len();
        if significant > decimals as usize {
            return Err(UnitsError::Malformed {
                value: value.to_string(),
                decimals,
                reason: format!("{significant} fractional digits exceed the token precision"),
            });
        }
    }
    parse_units(value, decimals)
        .map(|parsed| parsed.get_absolute())
        .map_err(|e| UnitsError::Malformed {
            value: value.to_string(),
            decimals,
            reason: e.to_string(),
        })
}
