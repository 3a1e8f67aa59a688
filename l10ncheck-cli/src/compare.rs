//! The `compare-translations` command: validate two resource folder trees,
//! then optionally materialize a merged destination tree.

use std::fs;
use std::path::{Path, PathBuf};

use l10ncheck::compare::{
    BASE_LANGUAGE, FILES_TO_COPY, MAX_ERRORS, STRINGS_FILE, cap_errors, compare_keys,
    language_folders_in, placeholder_mismatches, reconcile_languages,
};
use l10ncheck::table::StringsTable;

#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub original: PathBuf,
    pub modified: PathBuf,
    pub ignore_missing: bool,
    pub copy_to: Option<PathBuf>,
}

/// Runs the full comparison. Any `Err` is fatal: the caller reports it on
/// standard error and exits non-zero.
pub fn run_compare_command(opts: &CompareOptions) -> Result<(), String> {
    ensure_folder(&opts.original)?;
    ensure_folder(&opts.modified)?;

    let original_languages = language_folders_in(&opts.original)
        .map_err(|e| format!("Failed to list {}: {}", opts.original.display(), e))?;
    let modified_languages = language_folders_in(&opts.modified)
        .map_err(|e| format!("Failed to list {}: {}", opts.modified.display(), e))?;

    if !original_languages.contains(BASE_LANGUAGE) {
        return Err(format!(
            "No {} in original folder, is it a resource folder?",
            BASE_LANGUAGE
        ));
    }
    if !modified_languages.contains(BASE_LANGUAGE) {
        return Err(format!(
            "No {} in modified folder, is it a resource folder?",
            BASE_LANGUAGE
        ));
    }

    let delta = reconcile_languages(&original_languages, &modified_languages);
    if !delta.missing.is_empty() {
        let listed = join(&delta.missing);
        if opts.ignore_missing {
            println!("Ignoring missing languages: {}", listed);
        } else {
            return Err(format!("Missing languages: {}", listed));
        }
    }
    if !delta.extra.is_empty() {
        return Err(format!(
            "Extra languages not present in the original: {}",
            join(&delta.extra)
        ));
    }

    for language in &original_languages {
        if modified_languages.contains(language) {
            check_language(language, opts)?;
        }
    }

    if let Some(destination) = &opts.copy_to {
        // Base goes first so it can serve as the fallback source below.
        copy_language(BASE_LANGUAGE, &opts.modified, destination)?;
        for language in &original_languages {
            copy_language(language, &opts.modified, destination)?;
        }
    }

    Ok(())
}

fn ensure_folder(path: &Path) -> Result<(), String> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(format!("{} is not a folder", path.display()))
    }
}

fn join<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a String>,
{
    names
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks one language present in both trees: file existence, key-set
/// parity, and per-key placeholder signatures.
fn check_language(language: &str, opts: &CompareOptions) -> Result<(), String> {
    let original_file = opts.original.join(language).join(STRINGS_FILE);
    let modified_file = opts.modified.join(language).join(STRINGS_FILE);
    if !original_file.is_file() {
        return Err(format!(
            "Missing file in original folder: {}",
            original_file.display()
        ));
    }
    if !modified_file.is_file() {
        return Err(format!(
            "Missing file in modified folder: {}",
            modified_file.display()
        ));
    }
    println!("Checking {} ...", modified_file.display());

    let original = StringsTable::read_from(&original_file)
        .map_err(|e| format!("Failed to parse file: {}: {}", original_file.display(), e))?;
    let modified = StringsTable::read_from(&modified_file)
        .map_err(|e| format!("Failed to parse file: {}: {}", modified_file.display(), e))?;

    let keys = compare_keys(&original, &modified);
    if !keys.is_empty() {
        if !keys.missing.is_empty() {
            return Err(format!(
                "Missing entries in modified file {}: {}",
                modified_file.display(),
                keys.missing.join(", ")
            ));
        }
        if !keys.extra.is_empty() {
            return Err(format!(
                "Modified entries in {} are not present in the original file: {}",
                modified_file.display(),
                keys.extra.join(", ")
            ));
        }
    }

    let mismatches = placeholder_mismatches(language, &original, &modified);
    if !mismatches.is_empty() {
        return Err(cap_errors(mismatches, MAX_ERRORS).join("\n"));
    }

    Ok(())
}

/// Copies one language folder into the destination tree. A language with no
/// folder in the source tree is filled from the destination's base language.
fn copy_language(
    language: &str,
    source_folder: &Path,
    destination_folder: &Path,
) -> Result<(), String> {
    let source = source_folder.join(language);
    let destination = destination_folder.join(language);

    if source.is_dir() {
        println!("Copying {}", language);
        copy_language_files(&source, &destination)
    } else {
        println!("Copying base language for {}", language);
        let base = destination_folder.join(BASE_LANGUAGE);
        copy_language_files(&base, &destination)
    }
}

fn copy_language_files(source: &Path, destination: &Path) -> Result<(), String> {
    if !destination.exists() {
        fs::create_dir_all(destination)
            .map_err(|e| format!("Cannot create {}: {}", destination.display(), e))?;
    }
    for name in FILES_TO_COPY {
        let from = source.join(name);
        if from.is_file() {
            let to = destination.join(name);
            fs::copy(&from, &to).map_err(|e| format!("Cannot copy {}: {}", from.display(), e))?;
        }
    }
    Ok(())
}
