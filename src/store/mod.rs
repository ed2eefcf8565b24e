//! Flat-file persistence for the catalog.
//!
//! One record per line: `id,name,description,category,price`. Fields are
//! not escaped, so a field containing a comma corrupts its record (format
//! limitation carried by the file layout).

pub mod paths;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::catalog::{CatalogEngine, Item};
use crate::Result;

/// Serialize the catalog to `path`, newest item first, overwriting any
/// existing file. Returns the number of records written.
pub fn save(engine: &CatalogEngine, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut out = String::new();
    let items = engine.list_all();
    for item in &items {
        let _ = writeln!(
            out,
            "{},{},{},{},{}",
            item.id, item.name, item.description, item.category, item.price
        );
    }
    fs::write(path, out)?;

    info!("Saved {} items to {}", items.len(), path.display());
    Ok(items.len())
}

/// Read records from `path` and feed each through [`CatalogEngine::insert`],
/// so indexes and the urgent queue repopulate exactly as interactive
/// insertion would. Records are inserted oldest first, restoring the
/// sequence order the file was saved with. Malformed lines are skipped.
/// Returns the number of records loaded; on I/O failure the engine is left
/// untouched.
pub fn load(engine: &mut CatalogEngine, path: &Path) -> Result<usize> {
    let content = fs::read_to_string(path)?;

    let mut records = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        match parse_record(line) {
            Some(item) => records.push(item),
            None => warn!(
                "Skipping malformed record at {}:{}",
                path.display(),
                lineno + 1
            ),
        }
    }

    // The file is newest-first; inserting in reverse rebuilds the sequence
    // in its saved order.
    let loaded = records.len();
    for item in records.into_iter().rev() {
        engine.insert(item);
    }

    info!("Loaded {} items from {}", loaded, path.display());
    Ok(loaded)
}

/// Parse one `id,name,description,category,price` line. Returns `None` when
/// the field count is not exactly five or a numeric field does not parse.
fn parse_record(line: &str) -> Option<Item> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 5 {
        return None;
    }
    let id = fields[0].parse::<i64>().ok()?;
    let price = fields[4].parse::<f64>().ok()?;
    Some(Item::new(id, fields[1], fields[2], fields[3], price))
}
