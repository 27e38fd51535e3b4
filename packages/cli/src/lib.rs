//! # tsf-cli
//!
//! Command-line access to TSF files: look at headers, dump paths as JSON,
//! build files from JSON, and move buffers through base64url text.
//!
//! ## Usage
//!
//! ```bash
//! tsf inspect serialized_path.tsf
//! tsf dump serialized_path.tsf --pretty
//! tsf pack path.json out.tsf
//! tsf to-base64 out.tsf
//! tsf from-base64 AQAAAAUAAAAAAAAAAAAAAAAAAAAAAAAA restored.tsf
//! ```
//!
//! The element limit comes from `--max-elements`, else `TSF_MAX_ELEMENTS`.
//! Set `RUST_LOG` to `debug` to see what the codec reads and writes.

pub mod commands;
pub mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tsf_codec::{DecodeOptions, TsfCodec};

pub use error::CliError;

/// tsf - inspect and convert TSF path files
#[derive(Parser, Debug)]
#[command(name = "tsf")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Largest sequence length read or written [default: TSF_MAX_ELEMENTS,
    /// then 268435456]
    ///
    /// An unparsable TSF_MAX_ELEMENTS is logged and ignored, the same as in
    /// the library; only this flag is validated strictly.
    #[arg(long, global = true)]
    pub max_elements: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the header and sequence lengths of a TSF file
    Inspect { file: PathBuf },

    /// Print a TSF file as JSON
    Dump {
        file: PathBuf,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Build a TSF file from a JSON path ({"id": 5, "x": [...], "y": [...]})
    Pack { json: PathBuf, out: PathBuf },

    /// Print a TSF file as base64url text
    ToBase64 { file: PathBuf },

    /// Decode base64url text into a TSF file
    FromBase64 { text: String, out: PathBuf },
}

impl Args {
    pub fn codec(&self) -> TsfCodec {
        let options = self
            .max_elements
            .map(DecodeOptions::with_max_elements)
            .unwrap_or_else(DecodeOptions::from_env);
        TsfCodec::with_options(options)
    }
}

/// Run one command and return what it prints.
pub fn run(args: &Args) -> Result<String, CliError> {
    commands::execute(&args.command, &args.codec())
}
