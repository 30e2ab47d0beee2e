//! JSON exports of the remote store, read from disk.

use std::{fs, path::Path};

use crate::errors::{SourceError, SourceResult};

use super::Snapshot;

/// Reads and parses a snapshot document `{accounts, transactions, loans, items}`.
///
/// The file is read once; wrap the result in a
/// [`MemorySource`](super::MemorySource) so that every fetch of one assembly
/// sees the same version of the data.
pub fn load_snapshot(path: &Path) -> SourceResult<Snapshot> {
    if !path.exists() {
        return Err(SourceError::Unavailable(format!(
            "snapshot `{}` not found",
            path.display()
        )));
    }
    let data = fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&data)?;
    tracing::debug!(
        path = %path.display(),
        accounts = snapshot.accounts.len(),
        transactions = snapshot.transactions.len(),
        loans = snapshot.loans.len(),
        items = snapshot.items.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_arrays_default_to_empty() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"accounts": []}}"#).unwrap();
        let snapshot = load_snapshot(file.path()).unwrap();
        assert_eq!(snapshot, Snapshot::default());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let err = load_snapshot(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
    }

    #[test]
    fn malformed_document_is_a_serde_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_snapshot(file.path()).unwrap_err();
        assert!(matches!(err, SourceError::Serde(_)));
    }
}
