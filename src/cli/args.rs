use clap::Parser;
use std::path::PathBuf;

use pdf_protect::{EncryptionAlgorithm, EncryptionCheck};

const EXAMPLES: &str = "\
Examples:
  Basic usage (user & owner share the same password):
      pdf-protect report.pdf secure_report.pdf MyP@ssw0rd

  Separate user and owner passwords:
      pdf-protect report.pdf secure_report.pdf ViewOnly --owner-password Admin123

  Quiet mode (no output):
      pdf-protect report.pdf secure_report.pdf secret --quiet";

#[derive(Parser, Debug)]
#[command(
    name = "pdf-protect",
    version,
    about = "Add password protection to any PDF file",
    long_about = "Add password protection to any PDF file.\n\
                  Encrypts the PDF so it cannot be opened without the correct password.",
    after_help = EXAMPLES,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Path to the input PDF file
    pub input: PathBuf,

    /// Path for the output (protected) PDF file
    pub output: PathBuf,

    /// Password required to open the PDF
    pub password: String,

    /// Owner password granting full permissions (editing, printing, etc.).
    /// Defaults to the user password if not specified
    #[arg(long, value_name = "OWNER_PWD")]
    pub owner_password: Option<String>,

    /// Suppress all output messages
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,

    /// Encryption algorithm [default: rc4-128]
    #[arg(long, value_enum)]
    pub algorithm: Option<EncryptionAlgorithm>,

    /// Minimum password length [default: 4]
    #[arg(long, value_name = "N")]
    pub min_password_length: Option<usize>,

    /// How to detect already encrypted inputs before parsing [default: marker]
    #[arg(long, value_enum)]
    pub encryption_check: Option<EncryptionCheck>,

    /// JSON file with protection options; flags override its values
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable diagnostic logging on stderr (filter with RUST_LOG)
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
