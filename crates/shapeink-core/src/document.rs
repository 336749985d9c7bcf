//! Document dumps: a named list of pages, as stored on disk.

use crate::error::Result;
use crate::page::Page;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A document model materialized as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document name.
    #[serde(default)]
    pub name: String,
    /// Pages in reading order.
    #[serde(default)]
    pub pages: Vec<Page>,
}

impl Document {
    pub fn new(name: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            name: name.into(),
            pages,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a document file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let document = Self::from_json(&json)?;
        log::debug!(
            "Loaded {} ({} pages) from {}",
            document.name,
            document.pages.len(),
            path.display()
        );
        Ok(document)
    }
}
