/// The set of active dietary filters.
///
/// Toggling is involutive. Names are not validated against the catalog:
/// the interface only ever produces catalog values, but unknown names must
/// not fail.
#[derive(Debug, Default, Clone)]
pub struct FilterSet {
    active: Vec<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &[String] {
        &self.active
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.iter().any(|f| f == name)
    }

    /// Removes `name` if active, adds it otherwise.
    pub fn toggle(&mut self, name: &str) {
        if let Some(pos) = self.active.iter().position(|f| f == name) {
            self.active.remove(pos);
        } else {
            self.active.push(name.to_string());
        }
    }
}
