use std::path::PathBuf;

use clap::Parser;
use l10ncheck_cli::{CompareOptions, run_compare_command};

/// Checks that translations in Xcode-format resource folders are in sync.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Resource folder with the original strings
    original_folder: PathBuf,
    /// Resource folder with the translated strings
    modified_folder: PathBuf,
    /// Copy languages to this destination folder
    #[arg(long = "copy-to", value_name = "FOLDER")]
    copy_to: Option<PathBuf>,
    /// Ignore missing languages
    #[arg(long)]
    ignore_missing: bool,
}

fn main() {
    let args = Args::parse();
    let options = CompareOptions {
        original: args.original_folder,
        modified: args.modified_folder,
        ignore_missing: args.ignore_missing,
        copy_to: args.copy_to,
    };

    if let Err(message) = run_compare_command(&options) {
        eprintln!("ERROR: {}", message);
        std::process::exit(1);
    }
}
