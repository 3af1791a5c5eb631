use crate::accounts::AccountRecord;

/// **Decides whether a supplied credential unlocks a record.**
pub trait CredentialVerifier {
    fn verify(&self, record: &AccountRecord, supplied: &str) -> bool;
}

/// Byte-for-byte comparison against the stored date of birth. No date
/// parsing: `1990-1-15` does not match `1990-01-15`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactDob;

impl CredentialVerifier for ExactDob {
    fn verify(&self, record: &AccountRecord, supplied: &str) -> bool {
        record.dob == supplied
    }
}
