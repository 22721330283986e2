//! Reference repair for a single DocC page: detect known symbols, add missing entries.

use std::path::Path;

use serde_json::Value;

use crate::error::Error;
use crate::symbols::{KNOWN_SYMBOLS, SymbolDescriptor};

/// Key of the reference table in a DocC page.
const REFERENCES_KEY: &str = "references";

/// Add a reference entry for every known symbol that the page mentions but
/// whose key is missing from its `references` table. Returns the symbols
/// that were added, in table order; empty means the document is unchanged.
///
/// Pages that are not objects, or have no `references` key, are left alone.
/// Detection runs over the compact re-serialization of the whole page, so
/// escaped text in the source is matched after decoding.
///
/// # Errors
///
/// Returns `Error::ReferencesNotObject` if the page mentions a known symbol
/// but `references` holds a non-object, or `Error::Json` if the page cannot
/// be re-serialized.
pub fn add_missing_references(
    document: &mut Value,
    source: &str,
    path: &Path,
) -> Result<Vec<&'static SymbolDescriptor>, Error> {
    let Some(page) = document.as_object_mut() else {
        return Ok(Vec::new());
    };
    if !page.contains_key(REFERENCES_KEY) {
        return Ok(Vec::new());
    }

    let content = serde_json::to_string(&*page)?;
    let mentioned: Vec<&'static SymbolDescriptor> = KNOWN_SYMBOLS
        .iter()
        .filter(|symbol| return content.contains(symbol.identifier))
        .collect();
    if mentioned.is_empty() {
        return Ok(Vec::new());
    }

    // Only a page that needs an entry has its table shape checked.
    let Some(references) = page.get_mut(REFERENCES_KEY).and_then(Value::as_object_mut) else {
        return Err(Error::ReferencesNotObject { path: path.to_path_buf() });
    };

    let mut added = Vec::new();
    for symbol in mentioned {
        let key = symbol.reference_key(source);
        if references.contains_key(&key) {
            continue;
        }
        let entry = serde_json::to_value(symbol.reference_entry(&key))?;
        references.insert(key, entry);
        added.push(symbol);
    }

    return Ok(added);
}

/// Read, repair and (only if something was added) rewrite one page in place
/// as compact UTF-8 JSON. Untouched pages keep their exact bytes.
///
/// # Errors
///
/// Returns `Error::Io` on read/write failure, `Error::Json` for malformed
/// JSON, or `Error::ReferencesNotObject` for a malformed reference table.
pub fn repair_file(path: &Path, source: &str) -> Result<Vec<&'static SymbolDescriptor>, Error> {
    let content = std::fs::read_to_string(path)?;
    let mut document: Value = serde_json::from_str(&content)?;

    let added = add_missing_references(&mut document, source, path)?;
    if !added.is_empty() {
        std::fs::write(path, serde_json::to_string(&document)?)?;
    }

    return Ok(added);
}
