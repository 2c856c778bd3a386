//! Sign files with RSA PKCS#1 v1.5 over SHA-256 and verify detached signatures.
//!
//! Keys are stored as PEM files (`private.pem` / `public.pem` by default) and a
//! signature for `<file>` is written as raw bytes to `<file>.sig`.

mod error;
pub mod keystore;
pub mod signer;
pub mod verifier;

pub use error::{Error, Result};
pub use keystore::{load_private_key, load_public_key, KeyPair, KeyPaths};
pub use signer::{digest, sign_bytes, sign_file, signature_path_for, Signed};
pub use verifier::{verify_bytes, verify_file, Verification};

use std::io;
use std::path::{Path, PathBuf};

/// Reads a whole input file, mapping a missing file to the caller's error kind.
pub(crate) fn read_input(path: &Path, not_found: fn(PathBuf) -> Error) -> Result<Vec<u8>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(not_found(path.to_path_buf())),
        Err(e) => Err(e.into()),
    }
}
