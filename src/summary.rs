use std::fmt::Display;

use crate::accounts::AccountRecord;
use crate::fixedpoint::fixed_point_to_currency;
use crate::validation::AccountNumber;

const DESCRIPTION_WIDTH: usize = 20;
const TYPE_WIDTH: usize = 6;

/// A verified record ready to print. Only built once the account number has
/// been found and the credential accepted.
#[derive(Debug)]
pub struct AccountSummary<'a> {
    account: AccountNumber,
    record: &'a AccountRecord,
}

impl<'a> AccountSummary<'a> {
    pub fn new(account: AccountNumber, record: &'a AccountRecord) -> Self {
        AccountSummary { account, record }
    }

    pub fn record(&self) -> &AccountRecord {
        self.record
    }
}

impl Display for AccountSummary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let record = self.record;
        writeln!(f, "=== Account Summary ===")?;
        writeln!(f, "Account Holder : {}", record.name)?;
        writeln!(f, "Account Number : {}", self.account)?;
        writeln!(f, "Account Type   : {}", record.account_type)?;
        writeln!(f, "Branch (IFSC)  : {} ({})", record.branch, record.ifsc)?;
        writeln!(f, "Balance        : {}", fixed_point_to_currency(record.balance))?;
        writeln!(f, "Last Updated   : {}", record.last_updated)?;
        writeln!(f)?;
        writeln!(f, "Recent Transactions:")?;
        for transaction in record.transactions.iter() {
            writeln!(
                f,
                "- {} | {:<dw$.dw$} | {:<tw$} | {}{}",
                transaction.date,
                transaction.description,
                transaction.r#type,
                transaction.r#type.sign(),
                fixed_point_to_currency(transaction.amount),
                dw = DESCRIPTION_WIDTH,
                tw = TYPE_WIDTH,
            )?;
        }
        Ok(())
    }
}
