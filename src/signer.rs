use crate::keystore::load_private_key;
use crate::{read_input, Error, Result};
use rsa::pkcs1v15::SigningKey;
use rsa::sha2::{Digest, Sha256};
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use std::fs;
use std::path::{Path, PathBuf};

pub const SIGNATURE_SUFFIX: &str = ".sig";

/// Result of signing a file.
#[derive(Debug, Clone)]
pub struct Signed {
    pub signature_path: PathBuf,
    pub signature: Vec<u8>,
    /// A previous signature existed at `signature_path` and was overwritten.
    pub replaced: bool,
}

/// SHA-256 of the exact bytes given.
pub fn digest(bytes: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(bytes));
    out
}

/// RSA PKCS#1 v1.5 signature over the SHA-256 digest of `bytes`.
pub fn sign_bytes(key: &RsaPrivateKey, bytes: &[u8]) -> Result<Vec<u8>> {
    let signing_key = SigningKey::<Sha256>::new(key.clone());
    let signature = signing_key.try_sign(bytes)?;

    Ok(signature.to_vec())
}

/// `file` with `.sig` appended (`notes.txt` -> `notes.txt.sig`).
pub fn signature_path_for(file: &Path) -> PathBuf {
    let mut path = file.as_os_str().to_owned();
    path.push(SIGNATURE_SUFFIX);
    PathBuf::from(path)
}

/// Signs `file` with the private key at `private_key` and writes the raw
/// signature next to it. An existing signature is replaced.
pub fn sign_file(file: &Path, private_key: &Path) -> Result<Signed> {
    let data = read_input(file, Error::FileNotFound)?;
    let key = load_private_key(private_key)?;

    let signature = sign_bytes(&key, &data)?;

    let signature_path = signature_path_for(file);
    let replaced = signature_path.exists();
    fs::write(&signature_path, &signature)?;

    Ok(Signed {
        signature_path,
        signature,
        replaced,
    })
}

// region:    --- Tests


// endregion: --- Tests
