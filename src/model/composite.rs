use std::fmt;

/// Joins a pathway id and its key-enzyme string. Neither side is expected to contain it.
pub const KEY_SEPARATOR: &str = "__|__";

/// Pathway id plus one key-enzyme alternative, e.g. `rTCA__|__K00174,K00175`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CompositeKey(String);

impl CompositeKey {
    pub fn new(pathway_id: &str, key_enzymes: &str) -> Self {
        CompositeKey(format!("{pathway_id}{KEY_SEPARATOR}{key_enzymes}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn pathway_id(&self) -> &str {
        self.split().0
    }

    pub fn key_enzymes(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        self.0
            .split_once(KEY_SEPARATOR)
            .unwrap_or((self.0.as_str(), ""))
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
