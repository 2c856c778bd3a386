use crate::keystore::load_public_key;
use crate::{read_input, Error, Result};
use rsa::pkcs1v15::{Signature, VerifyingKey};
use rsa::sha2::Sha256;
use rsa::signature::Verifier;
use rsa::RsaPublicKey;
use std::path::Path;

/// Outcome of a signature check that got as far as the cryptography.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Valid,
    /// Wrong key, modified content, or a malformed signature. The cause is not
    /// reported.
    Invalid,
}

impl Verification {
    pub fn is_valid(self) -> bool {
        self == Verification::Valid
    }
}

pub fn verify_bytes(key: &RsaPublicKey, bytes: &[u8], signature: &[u8]) -> Verification {
    let Ok(signature) = Signature::try_from(signature) else {
        return Verification::Invalid;
    };

    let verifying_key = VerifyingKey::<Sha256>::new(key.clone());
    match verifying_key.verify(bytes, &signature) {
        Ok(()) => Verification::Valid,
        Err(_) => Verification::Invalid,
    }
}

/// Checks `signature` against the contents of `file` using the public key at
/// `public_key`.
///
/// Missing inputs and unreadable keys are errors; a signature that does not
/// match is `Ok(Verification::Invalid)`.
pub fn verify_file(file: &Path, signature: &Path, public_key: &Path) -> Result<Verification> {
    let data = read_input(file, Error::FileNotFound)?;
    let signature = read_input(signature, Error::SignatureNotFound)?;
    let key = load_public_key(public_key)?;

    Ok(verify_bytes(&key, &data, &signature))
}

// region:    --- Tests


// endregion: --- Tests
