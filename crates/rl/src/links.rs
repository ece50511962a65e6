//! Name-to-handle index over a robot's links, built once per environment.

use crate::error::EnvError;
use physics::LinkId;
use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct LinkIndex {
    by_name: HashMap<String, LinkId>,
}

impl LinkIndex {
    /// Index `(name, handle)` pairs. A repeated name keeps its first handle.
    #[must_use]
    pub fn build(links: impl IntoIterator<Item = (String, LinkId)>) -> Self {
        let mut by_name = HashMap::new();
        for (name, id) in links {
            by_name.entry(name).or_insert(id);
        }
        Self { by_name }
    }

    /// # Errors
    ///
    /// Returns [`EnvError::LinkNotFound`] naming the missing link.
    pub fn get(&self, name: &str) -> Result<LinkId, EnvError> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| EnvError::LinkNotFound { name: name.to_string() })
    }

    /// Resolve `names` in order, failing on the first missing one.
    ///
    /// # Errors
    ///
    /// Returns [`EnvError::LinkNotFound`] naming the missing link.
    pub fn resolve<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Result<Vec<LinkId>, EnvError> {
        names.into_iter().map(|name| self.get(name)).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Resolve every requested name against the robot's link list.
///
/// # Errors
///
/// Returns [`EnvError::LinkNotFound`] naming the first missing link.
pub fn resolve_links<'a>(
    names: impl IntoIterator<Item = &'a str>,
    all_links: &[(String, LinkId)],
) -> Result<HashMap<String, LinkId>, EnvError> {
    let index = LinkIndex::build(all_links.iter().cloned());
    names
        .into_iter()
        .map(|name| index.get(name).map(|id| (name.to_string(), id)))
        .collect()
}
