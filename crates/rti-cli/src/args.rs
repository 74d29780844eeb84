use clap::{Parser, Subcommand};

use rti_core::model::DesignTheme;

#[derive(Parser, Debug, Clone)]
#[command(name = "rti", version, about = "RTI state catalog CLI")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Treat validation warnings as errors.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Theme for records that do not set one: telangana|default
    #[arg(long, global = true, default_value = "default")]
    pub default_theme: DesignTheme,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List every state slug.
    States,

    /// Print a state's full record.
    Show {
        /// State slug (case-insensitive).
        slug: String,
    },

    /// Print the sectioned department directory of a jurisdiction.
    Sections {
        /// Jurisdiction slug (case-insensitive).
        jurisdiction: String,
    },

    /// Validate the built-in content and print every finding.
    Validate {
        /// Validate the built-in content with this backend payload applied.
        #[arg(long)]
        payload: Option<String>,
    },

    /// Write one JSON file per state and jurisdiction, plus index.json.
    Export {
        #[arg(long, default_value = "./out")]
        out: String,
    },

    /// Apply a backend payload over the built-in content and print the result.
    Merge {
        /// Path to a JSON file holding one state record.
        payload: String,
    },
}
