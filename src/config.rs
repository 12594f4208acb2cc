//! Loader configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Options controlling how [`ElfImage`](crate::ElfImage) decodes its tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadConfig {
    /// Run the header validity checks (magic, class, byte order, version).
    /// Disabling this lets damaged headers be inspected.
    pub validate_header: bool,
    /// Name of the section decoded as the symbol table.
    pub symbol_table: String,
    /// Name of the section decoded as the dynamic table.
    pub dynamic_section: String,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            validate_header: true,
            symbol_table: ".symtab".to_string(),
            dynamic_section: ".dynamic".to_string(),
        }
    }
}

impl LoadConfig {
    /// Parse a JSON document; absent fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
