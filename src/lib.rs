//! Prints a summary of a demo bank account once the caller proves they
//! know the holder's date of birth.
//!
//! The pipeline is strictly linear: normalize the account number, look it
//! up, check the credential, render. Each failing step short-circuits with
//! a [`SummaryError`] that carries its own message and exit code.

pub mod accounts;
pub mod bank;
pub mod credentials;
pub mod errors;
pub mod fixedpoint;
pub mod summary;
pub mod transactions;
pub mod validation;

use log::{debug, info, warn};

pub use bank::{AccountDirectory, AccountLookup};
pub use credentials::{CredentialVerifier, ExactDob};
pub use errors::{DatasetError, SummaryError};
pub use summary::AccountSummary;

/// Runs normalize, lookup and verify for one request.
///
/// A missing account is reported before the credential is looked at, so the
/// two business errors are distinguishable by the caller.
pub fn summarize<'a, L, V>(
    lookup: &'a L,
    verifier: &V,
    raw_account: &str,
    dob: &str,
) -> Result<AccountSummary<'a>, SummaryError>
where
    L: AccountLookup,
    V: CredentialVerifier,
{
    let account = validation::normalize_account(raw_account).map_err(|err| {
        warn!("Rejected account input: {:?}", err);
        err
    })?;
    debug!("Normalized account to {}", account.masked());

    let record = lookup.get(&account).ok_or_else(|| {
        warn!("No record for account {}", account.masked());
        SummaryError::NotFound
    })?;

    if !verifier.verify(record, dob) {
        warn!("Credential mismatch for account {}", account.masked());
        return Err(SummaryError::DobMismatch);
    }

    info!(
        "Verified account {} with {} transactions",
        account.masked(),
        record.transactions.len()
    );
    Ok(AccountSummary::new(account, record))
}
