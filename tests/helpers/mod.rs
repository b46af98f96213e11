use anyhow::{Context, Result};
use std::path::PathBuf;
use tempfile::TempDir;
use wisdomvault::infrastructure::JsonFileStore;

/// Test fixture for working with a temporary copy of the quote file
#[allow(dead_code)]
pub struct TestVault {
    _temp_dir: TempDir,
    pub quotes_path: PathBuf,
    pub dir: PathBuf,
}

#[allow(dead_code)]
impl TestVault {
    /// Create a new vault by copying the fixture
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir().context("Failed to create temporary directory")?;
        let quotes_path = temp_dir.path().join("quotes.json");

        std::fs::copy(Self::fixture_path(), &quotes_path)
            .context("Failed to copy quotes fixture")?;

        Ok(Self {
            dir: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
            quotes_path,
        })
    }

    /// Write an extra file next to the vault
    pub fn write_file(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.dir.join(name);
        std::fs::write(&path, content).context("Failed to write test file")?;
        Ok(path)
    }

    fn fixture_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/quotes.json")
    }

    pub fn open_store(&self) -> JsonFileStore {
        JsonFileStore::new(&self.quotes_path)
    }
}

/// Facts about the fixture file
#[allow(dead_code)]
pub mod fixture {
    /// Documents in the file, including malformed ones
    pub const DOCUMENTS: usize = 9;
    /// Documents with a non-empty quote
    pub const VALID: usize = 7;
}
