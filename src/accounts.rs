use std::fmt::Display;

use serde::Deserialize;

use crate::errors::DatasetError;
use crate::fixedpoint::string_to_fixed_point;
use crate::transactions::Transaction;

#[derive(Debug, Deserialize, Copy, Clone, PartialEq, Eq)]
pub enum AccountType {
    Savings,
    Current,
}

impl Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            AccountType::Savings => "Savings",
            AccountType::Current => "Current",
        })
    }
}

#[derive(Debug, Deserialize)]
struct DeserializedAccount {
    account: String,
    dob: String,
    name: String,
    account_type: AccountType,
    ifsc: String,
    branch: String,
    balance: String,
    currency: String,
    last_updated: String,
}

/**
 * Static profile of one account. The dob is kept as the exact string the
 * holder is expected to type, it is never parsed as a date.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub dob: String,
    pub name: String,
    pub account_type: AccountType,
    pub ifsc: String,
    pub branch: String,
    /// Paise.
    pub balance: u64,
    pub currency: String,
    pub last_updated: String,
    pub transactions: Vec<Transaction>,
}

/// The account number as written in the dataset, and its record.
pub type AccountEntry = (String, AccountRecord);

impl TryFrom<DeserializedAccount> for AccountEntry {
    type Error = DatasetError;
    fn try_from(deserialized: DeserializedAccount) -> Result<Self, Self::Error> {
        let balance = string_to_fixed_point(&deserialized.balance).map_err(|source| {
            DatasetError::Amount {
                account: deserialized.account.clone(),
                source,
            }
        })?;
        Ok((
            deserialized.account,
            AccountRecord {
                dob: deserialized.dob,
                name: deserialized.name,
                account_type: deserialized.account_type,
                ifsc: deserialized.ifsc,
                branch: deserialized.branch,
                balance,
                currency: deserialized.currency,
                last_updated: deserialized.last_updated,
                transactions: Vec::new(),
            },
        ))
    }
}

/// Parses an
/// `account,dob,name,account_type,ifsc,branch,balance,currency,last_updated`
/// document. Transactions are attached separately.
pub fn csv_to_accounts(document: &str) -> Result<Vec<AccountEntry>, DatasetError> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(document.as_bytes())
        .into_deserialize()
        .map(
            |row: Result<DeserializedAccount, csv::Error>| -> Result<_, DatasetError> {
                row?.try_into()
            },
        )
        .collect()
}
