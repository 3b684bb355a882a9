// src/cli/args.rs
use crate::constants::DEFAULT_EXPORT_FILE_NAME;
use crate::domain::{SearchField, Tolerance};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Backend base URL (overrides the config file)
    #[arg(long, value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Saved-drug list file (overrides the config file)
    #[arg(long, value_name = "FILE", global = true)]
    pub store: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Exactly one way of naming catalog records.
#[derive(clap::Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct Selector {
    /// Item standard code to look up
    #[arg(long, value_name = "CODE")]
    pub item_seq: Option<String>,

    /// Insurance (EDI) code to look up
    #[arg(long, value_name = "CODE")]
    pub edi_code: Option<String>,

    /// Drug name to search for (3 characters or more)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
}

impl Selector {
    /// The catalog field and query this selector names. `None` cannot
    /// happen for parsed arguments; the group requires one member.
    pub fn field_query(&self) -> Option<(SearchField, &str)> {
        if let Some(query) = self.item_seq.as_deref() {
            return Some((SearchField::ItemSeq, query));
        }
        if let Some(query) = self.edi_code.as_deref() {
            return Some((SearchField::EdiCode, query));
        }
        self.name.as_deref().map(|query| (SearchField::ItemName, query))
    }
}

/// Exactly one way of naming the base drug of a match.
#[derive(clap::Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct BaseSelector {
    /// Database id of the base drug
    #[arg(long, value_name = "ID")]
    pub id: Option<i64>,

    /// Item standard code of the base drug
    #[arg(long, value_name = "CODE")]
    pub item_seq: Option<String>,

    /// Insurance (EDI) code of the base drug
    #[arg(long, value_name = "CODE")]
    pub edi_code: Option<String>,

    /// Name of the base drug (3 characters or more, must match exactly one record)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
}

impl BaseSelector {
    /// The catalog field and query when the base is named by a searchable
    /// field rather than by `--id`.
    pub fn field_query(&self) -> Option<(SearchField, &str)> {
        if let Some(query) = self.item_seq.as_deref() {
            return Some((SearchField::ItemSeq, query));
        }
        if let Some(query) = self.edi_code.as_deref() {
            return Some((SearchField::EdiCode, query));
        }
        self.name.as_deref().map(|query| (SearchField::ItemName, query))
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the drug catalog
    Search {
        #[command(flatten)]
        selector: Selector,

        /// Output records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Find drugs dimensionally compatible with a base drug
    Match {
        #[command(flatten)]
        base: BaseSelector,

        /// Allowed dimensional deviation in percent (0, 5, 10, 15 or 20)
        #[arg(short, long, value_name = "PCT", default_value = "0")]
        tolerance: Tolerance,

        /// Only keep results sharing the base drug's dosage form
        /// (needs a searchable base, not --id)
        #[arg(long, conflicts_with = "id")]
        same_form: bool,

        /// Only keep results whose name contains this text
        #[arg(long, value_name = "TEXT")]
        filter: Option<String>,

        /// Output records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Save a drug to your personal list
    Save {
        #[command(flatten)]
        selector: Selector,
    },

    /// Show your personal drug list
    List {
        /// Only show drugs whose name contains this text
        #[arg(long, value_name = "TEXT")]
        filter: Option<String>,

        /// Output records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Remove a drug from your personal list
    Remove {
        /// Database id of the drug to remove
        #[arg(value_name = "ID")]
        id: i64,
    },

    /// Export your personal list to an .xlsx spreadsheet
    Export {
        /// Output file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_EXPORT_FILE_NAME)]
        output: PathBuf,
    },
}

