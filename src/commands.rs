//! The `fix` run: walk the documentation data directory and repair every page.

use std::path::Path;

use crate::config::Config;
use crate::error;
use crate::fixer;
use crate::scanner;

/// Running totals for one pass over the documentation tree.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Pages rewritten with at least one new reference.
    pub files_updated: usize,
    /// Reference entries added across all pages.
    pub references_added: usize,
}

/// Repair cross-module references under `root` and print progress.
///
/// A missing data directory and per-file failures are reported but are not
/// errors: the run finishes normally with whatever it could fix.
///
/// # Errors
///
/// Returns `Error::Config` if `.docc-xref.toml` exists but is invalid.
pub fn fix(root: &Path) -> Result<Option<Summary>, error::Error> {
    println!("Fixing cross-module references in: {}", root.display());

    let config = Config::load(root)?;
    let data_dir = config.data_dir_under(root);

    let summary = if data_dir.is_dir() {
        let totals = fix_tree(root, &data_dir, &config);
        print_summary(&totals);
        Some(totals)
    } else {
        eprintln!("Error: {} does not exist", data_dir.display());
        None
    };

    println!("Done!");
    return Ok(summary);
}

/// Process every JSON page under `data_dir` in traversal order. One bad
/// page is reported and skipped; it never stops the rest of the run.
pub fn fix_tree(root: &Path, data_dir: &Path, config: &Config) -> Summary {
    let mut summary = Summary::default();

    for item in scanner::json_files(data_dir) {
        let path = match item {
            Ok(path) => path,
            Err(e) => {
                eprintln!("Error processing {}: {e}", failed_path(&e, data_dir).display());
                continue;
            },
        };

        let added = match fixer::repair_file(&path, config.source()) {
            Ok(added) => added,
            Err(e) => {
                eprintln!("Error processing {}: {e}", path.display());
                continue;
            },
        };
        if added.is_empty() {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(&path);
        for symbol in &added {
            println!("Added {} reference to {}", symbol.type_name, relative.display());
        }
        summary.files_updated = summary.files_updated.saturating_add(1);
        summary.references_added = summary.references_added.saturating_add(added.len());
    }

    return summary;
}

/// Path a traversal error is about, falling back to the directory being walked.
fn failed_path<'a>(e: &'a error::Error, walked: &'a Path) -> &'a Path {
    if let error::Error::Walk(walk) = e
        && let Some(path) = walk.path()
    {
        return path;
    }
    return walked;
}

/// Print the closing totals block.
fn print_summary(summary: &Summary) {
    println!();
    println!("Summary:");
    println!("  Files updated: {}", summary.files_updated);
    println!("  Cross-module references added: {}", summary.references_added);
}
