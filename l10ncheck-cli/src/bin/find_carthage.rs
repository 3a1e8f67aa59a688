use clap::Parser;
use l10ncheck::locate::{DEPENDENCY_FOLDER, locate_dependency_folder};

/// Prints the path of the nearest Carthage checkout folder: first the one
/// the working directory is inside of, then one directly under it.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() {
    let _args = Args::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("ERROR: cannot determine the working directory: {}", e);
            std::process::exit(1);
        }
    };

    match locate_dependency_folder(&cwd) {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!(
                "ERROR: no {} folder found on {} or directly inside it",
                DEPENDENCY_FOLDER,
                cwd.display()
            );
            std::process::exit(1);
        }
    }
}
