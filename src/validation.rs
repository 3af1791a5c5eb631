use std::fmt::Display;

use crate::errors::SummaryError;

pub const MIN_ACCOUNT_DIGITS: usize = 8;
pub const MAX_ACCOUNT_DIGITS: usize = 16;

/// **A digit-only account number of valid length**
///
/// Only obtainable through [`normalize_account`], so holding one means the
/// shape check has already passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountNumber(String);

impl AccountNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All but the last four digits replaced, for log lines.
    pub fn masked(&self) -> String {
        let visible = self.0.len().saturating_sub(4);
        format!("{}{}", "*".repeat(visible), &self.0[visible..])
    }
}

impl Display for AccountNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// **Strips everything but ASCII digits and checks the remaining length.**
///
/// Punctuation and spaces are dropped, never rejected, so `123-456-7890`
/// and `1234567890` are the same account.
pub fn normalize_account(raw: &str) -> Result<AccountNumber, SummaryError> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if (MIN_ACCOUNT_DIGITS..=MAX_ACCOUNT_DIGITS).contains(&digits.len()) {
        Ok(AccountNumber(digits))
    } else {
        Err(SummaryError::InvalidAccount {
            digits: digits.len(),
        })
    }
}
