use crc32fast::Hasher;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Generate a document seed from a file path using CRC32
pub fn get_document_id(path: &str) -> String {
    let mut buff = String::from(path);
    if !path.starts_with("file://") {
        buff = format!("file://{}", buff);
    }

    let mut hasher = Hasher::new();
    hasher.update(buff.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Opaque node identifier, unique across a whole document (children included)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for NodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Sequential ID generator for nodes within a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(path: &str) -> Self {
        Self {
            seed: get_document_id(path),
            count: 0,
        }
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> NodeId {
        self.count += 1;
        NodeId(format!("{}-{}", self.seed, self.count))
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::from_seed("node")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_generation() {
        let id1 = get_document_id("/home.page.json");
        let id2 = get_document_id("/home.page.json");
        assert_eq!(id1, id2);

        let id3 = get_document_id("/about.page.json");
        assert_ne!(id1, id3);

        // The file:// prefix is implied
        assert_eq!(id1, get_document_id("file:///home.page.json"));
    }

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::from_seed("page");

        let id1 = gen.new_id();
        let id2 = gen.new_id();
        let id3 = gen.new_id();

        assert_eq!(id1, "page-1");
        assert_eq!(id2, "page-2");
        assert_eq!(id3, "page-3");
    }

    #[test]
    fn test_cloned_generator_continues_sequence() {
        let mut gen = IdGenerator::new("/home.page.json");
        gen.new_id();

        let mut copy = gen.clone();
        assert_eq!(copy.new_id(), gen.new_id());
        assert!(gen.new_id().as_str().starts_with(gen.seed()));
    }
}
