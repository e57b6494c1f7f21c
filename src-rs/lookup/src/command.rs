use clap::{Parser, Subcommand};

use crate::store::parse_entry;

/// Lookup result demonstration CLI
#[derive(Parser)]
#[command(name = "lookup")]
#[command(version, about = "Look up keys and resolve missing ones in different ways", long_about = None)]
pub struct CliCommand {
    /// Store entry as KEY=VALUE; defaults to `existing=1 existing_2=2`
    #[arg(long = "entry", value_name = "KEY=VALUE", value_parser = parse_entry)]
    pub entries: Vec<(String, i64)>,

    /// Value substituted for missing keys
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    pub null_object: i64,

    /// Do not substitute missing keys at all
    #[arg(long, conflicts_with = "null_object")]
    pub no_null_object: bool,

    /// Disable colors in the output
    #[arg(long)]
    pub no_colors: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the values of the found keys, dropping missing ones
    Slip {
        /// Keys to look up
        #[arg(value_name = "KEY")]
        keys: Vec<String>,
    },
    /// Print the value of each key, or `undefined`
    OrUndef {
        /// Keys to look up
        #[arg(value_name = "KEY")]
        keys: Vec<String>,
    },
    /// Print the sum of the values, substituting the null object for missing keys
    Sum {
        /// Keys to look up
        #[arg(value_name = "KEY")]
        keys: Vec<String>,
    },
    /// Print the value of each key, failing on the first missing one
    Ensure {
        /// Keys to look up
        #[arg(value_name = "KEY")]
        keys: Vec<String>,
    },
    /// Describe the outcome of each lookup
    Match {
        /// Keys to look up
        #[arg(value_name = "KEY")]
        keys: Vec<String>,
    },
}
