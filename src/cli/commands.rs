//! Command implementations for the lexiscan CLI.

use std::path::PathBuf;

use log::{info, warn};
use walkdir::WalkDir;

use crate::analysis::normalizer::WordNormalizer;
use crate::analysis::numeric::is_number;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::inspect::inspector::Inspector;
use crate::parallel_inspect::inspect_files;

/// Execute a CLI command.
pub fn execute_command(args: LexiscanArgs) -> Result<()> {
    match &args.command {
        Command::Inspect(inspect_args) => inspect_tree(inspect_args.clone(), &args),
        Command::Check(check_args) => check_tokens(check_args.clone(), &args),
    }
}

/// Inspect every file under a directory tree.
fn inspect_tree(args: InspectArgs, cli_args: &LexiscanArgs) -> Result<()> {
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    info!(
        "loaded {} words from {}",
        dictionary.len(),
        args.dictionary.display()
    );

    let files = list_files(&args.root)?;
    if cli_args.verbosity() > 1 {
        println!("Inspecting {} files under {}", files.len(), args.root.display());
    }

    if args.parallel {
        for result in inspect_files(&dictionary, &files) {
            match result {
                Ok(report) => {
                    if !args.only_issues || report.issue_count() > 0 || !report.warnings.is_empty()
                    {
                        output_report(&report, cli_args)?;
                    }
                }
                Err(e) => warn!("skipping unreadable file: {e}"),
            }
        }
        return Ok(());
    }

    let inspector = Inspector::new(&dictionary);
    for path in &files {
        match inspector.inspect_file(path) {
            Ok(report) => {
                if !args.only_issues || report.issue_count() > 0 || !report.warnings.is_empty() {
                    output_report(&report, cli_args)?;
                }
            }
            Err(e) => warn!("skipping {}: {e}", path.display()),
        }
    }

    Ok(())
}

/// Classify individual tokens against the dictionary.
fn check_tokens(args: CheckArgs, cli_args: &LexiscanArgs) -> Result<()> {
    let dictionary = Dictionary::load_from_file(&args.dictionary)?;
    let normalizer = WordNormalizer::new();

    let classifications: Vec<TokenClassification> = args
        .words
        .iter()
        .map(|token| {
            let canonical = normalizer.normalize(token);
            let classification = match &canonical {
                None => "ignored",
                Some(word) if is_number(word) => "numeric",
                Some(word) if dictionary.contains(word) => "known",
                Some(_) => "unknown",
            };
            TokenClassification {
                token: token.clone(),
                canonical,
                classification: classification.to_string(),
            }
        })
        .collect();

    output_classifications(&classifications, cli_args)
}

/// Collect every regular file under the given root, in walk order.
fn list_files(root: &PathBuf) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            crate::error::LexiscanError::Io(
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("walk error")),
            )
        })?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_list_files_walks_recursively() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("nested/b.txt"), "b").unwrap();

        let files = list_files(&dir.path().to_path_buf()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("a.txt")));
        assert!(files.iter().any(|p| p.ends_with("nested/b.txt")));
    }

    #[test]
    fn test_list_files_missing_root_is_an_error() {
        assert!(list_files(&PathBuf::from("/nonexistent/root")).is_err());
    }
}
