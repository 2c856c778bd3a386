use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use rsa_sign::keystore::{DEFAULT_PRIVATE_KEY, DEFAULT_PUBLIC_KEY, KEY_SIZE};
use rsa_sign::{sign_file, verify_file, KeyPaths, Result, Verification};
use std::io::{self, Write};
use std::path::PathBuf;

/// Exit status when verification ran and the signature did not match.
const EXIT_INVALID_SIGNATURE: i32 = 1;

/// RSA digital signing tool
#[derive(Parser)]
#[clap(
    version,
    about = "Generate an RSA key pair, sign files and verify detached signatures (RSA PKCS#1 v1.5, SHA-256).",
    after_help = "EXAMPLES:\n\
    \n  Generate a 2048-bit key pair as private.pem / public.pem in the current directory:\n    rsa-sign generate-keys\n\
    \n  Sign a file, writing the signature to hello.txt.sig:\n    rsa-sign sign hello.txt\n\
    \n  Verify a file against its signature:\n    rsa-sign verify hello.txt hello.txt.sig\n\
    \n  Use keys from another location:\n    rsa-sign --private-key ./keys/me.pem sign hello.txt\n\
    \nNOTES:\n\
    - Private keys are saved as PKCS#1 PEM, public keys as X.509 SubjectPublicKeyInfo PEM.\n\
    - Existing key files are never overwritten; delete them first to generate new keys.\n\
    - Signing again replaces an existing .sig file (a warning is printed).\n\
    - Exit codes: 0 ok, 1 signature invalid, 2 usage error, 3 missing file,\n      4 keys already exist, 5 invalid key, 10 other failure.\n"
)]
struct Cli {
    /// Private key used by generate-keys and sign
    #[clap(
        long,
        global = true,
        value_parser,
        default_value = DEFAULT_PRIVATE_KEY,
        help = "Private key file (PEM)"
    )]
    private_key: PathBuf,

    /// Public key used by generate-keys and verify
    #[clap(
        long,
        global = true,
        value_parser,
        default_value = DEFAULT_PUBLIC_KEY,
        help = "Public key file (PEM)"
    )]
    public_key: PathBuf,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Generate RSA public/private keys
    GenerateKeys,
    /// Sign a file
    Sign {
        /// File to sign
        file: PathBuf,
    },
    /// Verify a file signature
    Verify {
        /// Original file
        file: PathBuf,
        /// Signature file
        signature: PathBuf,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // An unknown command is not a failure, just show what is available.
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            print_help();
            return;
        }
        Err(e) => e.exit(),
    };

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn print_help() {
    let _ = Cli::command().print_help();
}

fn run(cli: Cli) -> Result<i32> {
    let Some(command) = cli.command else {
        print_help();
        return Ok(0);
    };

    let mut stdout = io::stdout();

    match command {
        Command::GenerateKeys => {
            let paths = KeyPaths::new(cli.private_key, cli.public_key);

            writeln!(stdout, "Generating RSA key pair with size {}...", KEY_SIZE)?;
            stdout.flush()?;

            paths.generate()?;

            writeln!(stdout, "Keys generated!")?;
            writeln!(stdout, "Private key: {}", paths.private.display())?;
            writeln!(stdout, "Public key: {}", paths.public.display())?;
        }
        Command::Sign { file } => {
            let signed = sign_file(&file, &cli.private_key)?;

            if signed.replaced {
                eprintln!(
                    "Warning: replaced existing signature '{}'.",
                    signed.signature_path.display()
                );
            }
            writeln!(
                stdout,
                "File signed! Signature saved as '{}'",
                signed.signature_path.display()
            )?;
        }
        Command::Verify { file, signature } => {
            match verify_file(&file, &signature, &cli.public_key)? {
                Verification::Valid => {
                    writeln!(stdout, "✅ Verification successful: Signature is valid!")?;
                }
                Verification::Invalid => {
                    writeln!(stdout, "❌ Verification failed: Signature is invalid.")?;
                    stdout.flush()?;
                    return Ok(EXIT_INVALID_SIGNATURE);
                }
            }
        }
    }

    stdout.flush()?;

    Ok(0)
}
