use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::AppError;

/// Durable backing for the liked-recipes set.
///
/// Implementations hold a single value: the full list of liked titles.
/// Reads of absent or unreadable values yield the empty set rather than an
/// error, so a corrupt store never takes the interface down.
pub trait LikeStorage {
    fn read(&self) -> Result<Vec<String>, AppError>;
    fn write(&self, titles: &[String]) -> Result<(), AppError>;
}

/// Stores the liked titles as a JSON array in one file
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LikeStorage for JsonFileStorage {
    fn read(&self) -> Result<Vec<String>, AppError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        // Corrupt content reads as "no liked recipes"
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    fn write(&self, titles: &[String]) -> Result<(), AppError> {
        let raw = serde_json::to_string(titles)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory storage for tests and embedders that do not want a file.
///
/// Clones share the same backing value, so a handle kept by a test observes
/// writes made through the one handed to the store.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    titles: Rc<RefCell<Vec<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the stored titles
    pub fn titles(&self) -> Vec<String> {
        self.titles.borrow().clone()
    }
}

impl LikeStorage for MemoryStorage {
    fn read(&self) -> Result<Vec<String>, AppError> {
        Ok(self.titles.borrow().clone())
    }

    fn write(&self, titles: &[String]) -> Result<(), AppError> {
        *self.titles.borrow_mut() = titles.to_vec();
        Ok(())
    }
}
