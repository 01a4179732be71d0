//! Pphash CLI - derive a unique, policy-compliant password from a passphrase
//!
//! This is the command-line interface for Pphash. It takes exactly one
//! argument, the passphrase, and prints the derived password as a single
//! line on stdout. All other configuration is compiled in: externally
//! settable parameters would break the guarantee that the same passphrase
//! reproduces the same password everywhere.

use clap::Parser;

use pphash_core::{derive_password, VERSION};

/// Create a unique password by hashing a passphrase with Argon2id
#[derive(Parser)]
#[command(name = "pphash")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(after_help = "Examples:\n  pphash myphrase\n  pphash \"my memorable phrase\"")]
struct Cli {
    /// The passphrase (quote it to keep spaces and symbols verbatim)
    #[arg(value_name = "PHRASE")]
    phrase: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let password = derive_password(&cli.phrase)?;
    println!("{}", password);

    Ok(())
}
