use derive_more::derive::From;
use std::io;
use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
    KeysAlreadyExist { private: PathBuf, public: PathBuf },
    FileNotFound(PathBuf),
    SignatureNotFound(PathBuf),
    PrivateKeyNotFound(PathBuf),
    PublicKeyNotFound(PathBuf),
    InvalidKey(PathBuf),

    #[from]
    Rsa(rsa::Error),
    #[from]
    Pkcs1(rsa::pkcs1::Error),
    #[from]
    Pkcs8spki(rsa::pkcs8::spki::Error),
    #[from]
    Signature(rsa::signature::Error),

    #[from]
    Io(io::Error),
}

impl Error {
    /// Process exit status for this error. 1 is reserved for an invalid
    /// signature and 2 for clap usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::FileNotFound(_)
            | Error::SignatureNotFound(_)
            | Error::PrivateKeyNotFound(_)
            | Error::PublicKeyNotFound(_) => 3,
            Error::KeysAlreadyExist { .. } => 4,
            Error::InvalidKey(_) => 5,
            Error::Rsa(_)
            | Error::Pkcs1(_)
            | Error::Pkcs8spki(_)
            | Error::Signature(_)
            | Error::Io(_) => 10,
        }
    }
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
    fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
        let msg = match self {
            Error::KeysAlreadyExist { private, public } => format!(
                "Error: Keys already exist ({}, {}). Delete them first if you want new keys.",
                private.display(),
                public.display()
            ),
            Error::FileNotFound(path) => {
                format!("Error: File '{}' does not exist.", path.display())
            }
            Error::SignatureNotFound(path) => {
                format!("Error: Signature '{}' does not exist.", path.display())
            }
            Error::PrivateKeyNotFound(path) => format!(
                "Error: Private key '{}' not found. Generate keys first.",
                path.display()
            ),
            Error::PublicKeyNotFound(path) => {
                format!("Error: Public key '{}' not found.", path.display())
            }
            Error::InvalidKey(path) => format!(
                "Error: '{}' does not contain a valid RSA key.",
                path.display()
            ),
            Error::Io(error) => error.to_string(),
            Error::Rsa(error) => error.to_string(),
            Error::Pkcs1(error) => error.to_string(),
            Error::Pkcs8spki(error) => error.to_string(),
            Error::Signature(error) => error.to_string(),
        };

        write!(fmt, "{}", msg)
    }
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate

// region:    --- Tests


// endregion: --- Tests
