//! A neutral, file-based dictionary catalog.
//!
//! The catalog is a JSON file listing classification entries (classes,
//! properties, value lists) keyed by their source codes. Entries may
//! reference each other by code; dangling references are allowed here and
//! become unknown references at import time.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use aas_model::ConceptKey;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Type classification of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    Class,
    Property,
    ValueList,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Property => "property",
            Self::ValueList => "value list",
        }
    }
}

/// One allowed value of a value-list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogValue {
    pub code: ConceptKey,
    pub name: String,
}

/// One importable dictionary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub code: ConceptKey,
    pub kind: EntryKind,
    pub preferred_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// Code of the defining (super)class, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<ConceptKey>,
    /// Codes of the properties of a class entry, in catalog order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<ConceptKey>,
    /// Code of the value list constraining a property entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_list: Option<ConceptKey>,
    /// Allowed values of a value-list entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<CatalogValue>,
}

#[derive(Serialize, Deserialize)]
struct CatalogFile {
    name: String,
    entries: Vec<CatalogEntry>,
}

/// A loaded, validated catalog with code-based lookup.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    entries: Vec<CatalogEntry>,
    by_code: BTreeMap<ConceptKey, usize>,
}

impl Catalog {
    /// Validates and indexes a set of entries.
    pub fn new(name: impl Into<String>, entries: Vec<CatalogEntry>) -> Result<Self, CatalogError> {
        let mut by_code = BTreeMap::new();
        for (index, entry) in entries.iter().enumerate() {
            if !entry.code.is_valid() {
                return Err(CatalogError::BlankCode);
            }
            check_references(entry)?;
            if by_code.insert(entry.code.clone(), index).is_some() {
                return Err(CatalogError::DuplicateCode {
                    code: entry.code.to_string(),
                });
            }
        }
        Ok(Self {
            name: name.into(),
            entries,
            by_code,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse { source })?;
        Self::new(file.name, file.entries)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;
        tracing::debug!(
            catalog = catalog.name(),
            entries = catalog.len(),
            path = %path.display(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn entry(&self, code: &ConceptKey) -> Option<&CatalogEntry> {
        self.by_code.get(code).map(|index| &self.entries[*index])
    }

    pub(crate) fn entry_index(&self, code: &ConceptKey) -> Option<usize> {
        self.by_code.get(code).copied()
    }

    pub(crate) fn entry_at(&self, index: usize) -> &CatalogEntry {
        &self.entries[index]
    }
}

fn check_references(entry: &CatalogEntry) -> Result<(), CatalogError> {
    let references = entry
        .superclass
        .iter()
        .chain(entry.properties.iter())
        .chain(entry.value_list.iter())
        .chain(entry.values.iter().map(|value| &value.code));
    for reference in references {
        if !reference.is_valid() {
            return Err(CatalogError::BlankCode);
        }
    }
    Ok(())
}
