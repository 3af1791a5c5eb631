use std::collections::HashMap;

use log::debug;

use crate::accounts::{csv_to_accounts, AccountEntry, AccountRecord};
use crate::errors::DatasetError;
use crate::transactions::{csv_to_transactions, AccountTransactionTuple};
use crate::validation::{normalize_account, AccountNumber};

const DEMO_ACCOUNTS_CSV: &str = include_str!("../data/accounts.csv");
const DEMO_TRANSACTIONS_CSV: &str = include_str!("../data/transactions.csv");

/// **Read-only "get record by account number" capability**
///
/// The summary pipeline only ever talks to this trait, so a real store can
/// stand in for the demo directory.
pub trait AccountLookup {
    fn get(&self, account: &AccountNumber) -> Option<&AccountRecord>;
}

/**
 * Immutable set of account records keyed by normalized account number.
 * Built once at startup and handed to whoever needs it; there is no
 * process-wide instance.
 */
#[derive(Debug, Default)]
pub struct AccountDirectory {
    accounts: HashMap<AccountNumber, AccountRecord>,
}

impl AccountLookup for AccountDirectory {
    fn get(&self, account: &AccountNumber) -> Option<&AccountRecord> {
        self.accounts.get(account)
    }
}

impl AccountDirectory {
    /// The two demo accounts compiled into the binary.
    pub fn demo() -> Result<Self, DatasetError> {
        Self::from_csv(DEMO_ACCOUNTS_CSV, DEMO_TRANSACTIONS_CSV)
    }

    pub fn from_csv(accounts_csv: &str, transactions_csv: &str) -> Result<Self, DatasetError> {
        Self::from_entries(
            csv_to_accounts(accounts_csv)?,
            csv_to_transactions(transactions_csv)?,
        )
    }

    /// Transactions are appended to their owning account in the order given.
    pub fn from_entries(
        accounts: impl IntoIterator<Item = AccountEntry>,
        transactions: impl IntoIterator<Item = AccountTransactionTuple>,
    ) -> Result<Self, DatasetError> {
        let mut directory = AccountDirectory::default();

        for (raw_account, record) in accounts {
            let account = dataset_account(&raw_account)?;
            if directory.accounts.contains_key(&account) {
                return Err(DatasetError::DuplicateAccount(raw_account));
            }
            directory.accounts.insert(account, record);
        }

        for (raw_account, transaction) in transactions {
            let account = dataset_account(&raw_account)?;
            directory
                .accounts
                .get_mut(&account)
                .ok_or(DatasetError::UnknownAccount(raw_account))?
                .transactions
                .push(transaction);
        }

        debug!("Loaded {} account records", directory.len());
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

fn dataset_account(raw: &str) -> Result<AccountNumber, DatasetError> {
    normalize_account(raw).map_err(|_| DatasetError::InvalidAccountNumber(raw.to_string()))
}
