//! Sample documents shared by test suites.

use std::fs;
use std::path::PathBuf;

/// Order details modal with two `col-md-6` columns (English labels).
pub const ORDERS: &str = "Orders.js";

/// Dashboard order modal with the discount line (Arabic labels).
pub const DASHBOARD: &str = "Dashboard.js";

/// Directory holding the fixture documents.
pub fn documents_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/documents")
}

/// Read a fixture document by file name.
///
/// # Panics
/// Panics if the fixture does not exist.
pub fn document(name: &str) -> String {
    let path = documents_dir().join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("missing fixture {}: {e}", path.display()))
}
