//! Artifact domain types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A file produced by a job, downloadable from `url`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub path: String,
    pub url: String,
}

/// Mapping of artifact path to download URL
///
/// Serializes as a plain JSON object ordered by path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactMap(BTreeMap<String, String>);

impl ArtifactMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map for a single job. A path listed twice keeps its last URL.
    pub fn from_artifacts<'a>(artifacts: impl IntoIterator<Item = &'a Artifact>) -> Self {
        let mut map = BTreeMap::new();
        for artifact in artifacts {
            map.insert(artifact.path.clone(), artifact.url.clone());
        }
        Self(map)
    }

    /// Fold `other` into this map.
    ///
    /// Paths already present keep their existing URL, so whichever job was
    /// merged first wins a collision. Returns the number of paths added.
    pub fn merge(&mut self, other: ArtifactMap) -> usize {
        let before = self.0.len();
        for (path, url) in other.0 {
            self.0.entry(path).or_insert(url);
        }
        self.0.len() - before
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.0.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(path, url)| (path.as_str(), url.as_str()))
    }
}
