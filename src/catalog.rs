//! Emoji dataset model and search.
//!
//! Parses the emoji-mart data format (`{"emojis": {"<id>": {"id", "keywords",
//! "skins": [{"native": ...}]}}}`). Fetching the dataset is the embedding
//! application's job; this module only consumes the JSON it was handed.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One emoji from the dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmojiEntry {
    /// Dataset identifier, e.g. `crab`
    pub id: String,
    /// The emoji text itself, e.g. `🦀`
    pub native: String,
    /// Search keywords
    pub keywords: Vec<String>,
}

/// Raw emoji-mart wire format
#[derive(Deserialize)]
struct RawDataset {
    emojis: std::collections::BTreeMap<String, RawEmoji>,
}

#[derive(Deserialize)]
struct RawEmoji {
    id: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    skins: Vec<RawSkin>,
}

#[derive(Deserialize)]
struct RawSkin {
    native: String,
}

/// A parsed, searchable emoji dataset
#[derive(Debug, Clone, Default)]
pub struct EmojiCatalog {
    entries: Vec<EmojiEntry>,
}

impl EmojiCatalog {
    /// Parse an emoji-mart JSON document.
    ///
    /// The first skin of each emoji provides the native text; entries without
    /// skins are dropped.
    pub fn from_json(data: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(data)?;
        let entries = raw
            .emojis
            .into_values()
            .filter_map(|e| {
                let native = e.skins.into_iter().next()?.native;
                Some(EmojiEntry {
                    id: e.id,
                    native,
                    keywords: e.keywords,
                })
            })
            .collect();
        Ok(Self { entries })
    }

    /// All entries, sorted by id
    pub fn entries(&self) -> &[EmojiEntry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its dataset id
    pub fn get(&self, id: &str) -> Option<&EmojiEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Case-insensitive substring search over ids and keywords.
    ///
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&EmojiEntry> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| {
                e.id.contains(&query) || e.keywords.iter().any(|kw| kw.contains(&query))
            })
            .collect()
    }
}
