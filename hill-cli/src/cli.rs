use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hill")]
#[command(author, version, about = "Hill cipher calculator over the 26-letter alphabet")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Key matrix as a JSON array of rows, e.g. [[3,2],[5,7]]
    #[arg(long, short, global = true, env = "HILL_KEY")]
    pub key: Option<String>,

    /// Block size used when no key is given (2 picks [[3,2],[5,7]], others the identity)
    #[arg(long, short, global = true, default_value_t = 2)]
    pub size: usize,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt text (read from stdin when omitted)
    #[command(alias = "enc")]
    Encrypt {
        /// Plaintext; non-letters are dropped
        text: Option<String>,
    },

    /// Decrypt text (read from stdin when omitted)
    #[command(alias = "dec")]
    Decrypt {
        /// Ciphertext; its letter count must be a multiple of the block size
        text: Option<String>,
    },

    /// Print the inverse of the key mod 26
    Inverse,

    /// Print the determinant of the key mod 26 and its inverse
    Determinant,

    /// Print a random key of --size that can be used for decryption
    Keygen,
}
