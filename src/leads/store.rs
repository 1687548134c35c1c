use super::domain::LeadTable;
use super::loader::{load_leads, LeadLoadError};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Session-owned cache of the lead table.
///
/// The file is read on first access and the same table is handed out until
/// [`LeadStore::invalidate`] drops it. Callers receive the store by reference
/// instead of reaching for a process-wide singleton.
#[derive(Debug)]
pub struct LeadStore {
    path: Option<PathBuf>,
    table: OnceLock<LeadTable>,
}

impl LeadStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            table: OnceLock::new(),
        }
    }

    /// Store preloaded with `table`. It cannot be refreshed: once invalidated,
    /// [`LeadStore::table`] fails with [`LeadLoadError::NoSource`].
    pub fn from_table(table: LeadTable) -> Self {
        let cell = OnceLock::new();
        let _ = cell.set(table);
        Self {
            path: None,
            table: cell,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn table(&self) -> Result<&LeadTable, LeadLoadError> {
        if let Some(table) = self.table.get() {
            return Ok(table);
        }

        let Some(path) = self.path.as_deref() else {
            return Err(LeadLoadError::NoSource);
        };

        let loaded = load_leads(path)?;
        Ok(self.table.get_or_init(|| loaded))
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// Drops the cached table; the next [`LeadStore::table`] call re-reads the file.
    ///
    /// Needs exclusive access, so the store shared by the HTTP service (behind
    /// an `Arc`) is never invalidated and serves the table it started with.
    pub fn invalidate(&mut self) {
        self.table.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CSV: &str = "cidade,segmento,nome_comercial,telefone,email,endereco_completo,capital_social\n\
Salinas,OUTRO,Loja Um,,,,10\n";

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn repeated_access_reuses_the_cached_table() {
        let file = write_csv(CSV);
        let store = LeadStore::new(file.path());
        assert!(!store.is_loaded());

        let first = store.table().expect("first load") as *const LeadTable;
        std::fs::write(file.path(), "not,a,lead,file\n").expect("overwrite");
        let second = store.table().expect("cached load") as *const LeadTable;

        assert!(store.is_loaded());
        assert_eq!(first, second);
        assert_eq!(store.table().expect("cached").len(), 1);
    }

    #[test]
    fn invalidate_forces_a_reread() {
        let file = write_csv(CSV);
        let mut store = LeadStore::new(file.path());
        assert_eq!(store.table().expect("first load").len(), 1);

        std::fs::write(file.path(), format!("{CSV}Itaobim,OUTRO,Loja Dois,,,,20\n"))
            .expect("append row");
        store.invalidate();

        assert!(!store.is_loaded());
        assert_eq!(store.table().expect("reload").len(), 2);
    }

    #[test]
    fn missing_file_leaves_store_unloaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = LeadStore::new(dir.path().join("absent.csv"));

        let err = store.table().expect_err("no file");
        assert!(matches!(err, LeadLoadError::FileNotFound { .. }));
        assert!(!store.is_loaded());
    }

    #[test]
    fn preloaded_store_serves_its_table() {
        let table = LeadTable::from_reader(CSV.as_bytes(), "inline").expect("csv parses");
        let store = LeadStore::from_table(table);
        assert!(store.path().is_none());
        assert_eq!(store.table().expect("preloaded").source(), "inline");
    }

    #[test]
    fn invalidated_preloaded_store_has_no_source() {
        let table = LeadTable::from_reader(CSV.as_bytes(), "inline").expect("csv parses");
        let mut store = LeadStore::from_table(table);
        store.invalidate();

        let err = store.table().expect_err("nothing to reload");
        assert!(matches!(err, LeadLoadError::NoSource));
        assert!(!store.is_loaded());
    }
}
