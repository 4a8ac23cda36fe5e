//! Concept descriptions with IEC 61360-style payloads.

use crate::element::DataTypeDef;
use crate::ids::Identifier;
use crate::reference::Reference;

/// Description of one external concept imported into the document.
///
/// The import engine creates at most one concept description per distinct
/// concept key within one operation; submodels and submodel elements link to
/// it through their semantic references.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConceptDescription {
    pub identifier: Identifier,
    pub preferred_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<DataTypeDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_of_definition: Option<String>,
    /// References to concepts this one is a case of (e.g. its defining class).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub is_case_of: Vec<Reference>,
}

impl ConceptDescription {
    pub fn new(identifier: Identifier, preferred_name: impl Into<String>) -> Self {
        Self {
            identifier,
            preferred_name: preferred_name.into(),
            short_name: None,
            definition: None,
            unit: None,
            value_type: None,
            source_of_definition: None,
            is_case_of: Vec::new(),
        }
    }
}
