use log::warn;

use crate::storage::LikeStorage;

/// Liked recipe titles, kept in sync with durable storage.
///
/// Every toggle rewrites the full persisted set before returning, so storage
/// always reflects memory between mutations. Order of first like is kept,
/// which makes the serialized value stable across reloads.
pub struct LikedRecipes {
    titles: Vec<String>,
    storage: Box<dyn LikeStorage>,
}

impl LikedRecipes {
    /// Load the persisted set; a missing or unreadable value starts empty.
    pub fn load(storage: Box<dyn LikeStorage>) -> Self {
        let titles = match storage.read() {
            Ok(titles) => titles,
            Err(e) => {
                warn!("Could not read liked recipes, starting empty: {}", e);
                Vec::new()
            }
        };
        Self { titles, storage }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn is_liked(&self, title: &str) -> bool {
        self.titles.iter().any(|t| t == title)
    }

    /// Toggles membership of `title` and persists the full set before
    /// returning. A storage failure keeps the in-memory change and is only
    /// logged. Returns whether the title is liked afterwards.
    pub fn toggle(&mut self, title: &str) -> bool {
        let liked = if let Some(pos) = self.titles.iter().position(|t| t == title) {
            self.titles.remove(pos);
            false
        } else {
            self.titles.push(title.to_string());
            true
        };

        if let Err(e) = self.storage.write(&self.titles) {
            warn!("Could not persist liked recipes: {}", e);
        }
        liked
    }
}
