use std::fmt::Display;

use serde::Deserialize;

use crate::errors::DatasetError;
use crate::fixedpoint::string_to_fixed_point;

#[derive(Debug, Deserialize, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Credit,
    Debit,
}

impl TransactionType {
    pub fn sign(self) -> char {
        match self {
            TransactionType::Credit => '+',
            TransactionType::Debit => '-',
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            TransactionType::Credit => "credit",
            TransactionType::Debit => "debit",
        })
    }
}

#[derive(Debug, Deserialize)]
struct DeserializedTransaction {
    account: String,
    date: String,
    description: String,
    amount: String,
    r#type: TransactionType,
}

/// A flat history entry. `amount` is in paise and never negative; the
/// direction is carried by `r#type` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub date: String,
    pub description: String,
    pub amount: u64,
    pub r#type: TransactionType,
}

/// The owning account number as written in the dataset, and the entry.
pub type AccountTransactionTuple = (String, Transaction);

impl TryFrom<DeserializedTransaction> for AccountTransactionTuple {
    type Error = DatasetError;
    fn try_from(deserialized: DeserializedTransaction) -> Result<Self, Self::Error> {
        let amount = string_to_fixed_point(&deserialized.amount).map_err(|source| {
            DatasetError::Amount {
                account: deserialized.account.clone(),
                source,
            }
        })?;
        Ok((
            deserialized.account,
            Transaction {
                date: deserialized.date,
                description: deserialized.description,
                amount,
                r#type: deserialized.r#type,
            },
        ))
    }
}

/// Parses a `account,date,description,amount,type` document. Row order is
/// kept, since it is the order transactions are shown in.
pub fn csv_to_transactions(document: &str) -> Result<Vec<AccountTransactionTuple>, DatasetError> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(document.as_bytes())
        .into_deserialize()
        .map(
            |row: Result<DeserializedTransaction, csv::Error>| -> Result<_, DatasetError> {
                row?.try_into()
            },
        )
        .collect()
}
