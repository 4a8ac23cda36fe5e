//! Submodel elements: properties and collections.

use std::fmt;

use crate::ids::IdShort;
use crate::reference::Reference;

/// Value type of a property, mirroring the common IEC 61360 data types.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DataTypeDef {
    #[default]
    String,
    Boolean,
    Integer,
    Real,
    Date,
    Rational,
}

impl DataTypeDef {
    /// Maps source value-type vocabulary onto the closed enum. Dictionaries
    /// use wildly different spellings (`STRING_TYPE`, `REAL_MEASURE`,
    /// `NR1..3`, `int`), so matching is lenient; anything unrecognized maps
    /// to [`DataTypeDef::String`].
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_ascii_lowercase();
        if lowered.contains("bool") {
            Self::Boolean
        } else if lowered.contains("int") || lowered.starts_with("nr1") {
            Self::Integer
        } else if lowered.contains("real")
            || lowered.contains("float")
            || lowered.contains("double")
            || lowered.starts_with("nr2")
            || lowered.starts_with("nr3")
        {
            Self::Real
        } else if lowered.contains("date") || lowered.contains("time") {
            Self::Date
        } else if lowered.contains("rational") {
            Self::Rational
        } else {
            Self::String
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Real => "real",
            Self::Date => "date",
            Self::Rational => "rational",
        }
    }
}

impl fmt::Display for DataTypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-valued data element.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Property {
    pub id_short: IdShort,
    pub value_type: DataTypeDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
}

impl Property {
    pub fn new(id_short: IdShort, value_type: DataTypeDef) -> Self {
        Self {
            id_short,
            value_type,
            value: None,
            semantic_id: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_semantic_id(mut self, reference: Reference) -> Self {
        self.semantic_id = Some(reference);
        self
    }
}

/// An ordered, nestable grouping of submodel elements.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Collection {
    pub id_short: IdShort,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semantic_id: Option<Reference>,
    #[serde(default)]
    pub elements: Vec<SubmodelElement>,
}

impl Collection {
    pub fn new(id_short: IdShort) -> Self {
        Self {
            id_short,
            semantic_id: None,
            elements: Vec::new(),
        }
    }

    pub fn with_semantic_id(mut self, reference: Reference) -> Self {
        self.semantic_id = Some(reference);
        self
    }
}

/// A node within a submodel tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmodelElement {
    Property(Property),
    Collection(Collection),
}

impl SubmodelElement {
    pub fn id_short(&self) -> &IdShort {
        match self {
            Self::Property(property) => &property.id_short,
            Self::Collection(collection) => &collection.id_short,
        }
    }

    pub fn semantic_id(&self) -> Option<&Reference> {
        match self {
            Self::Property(property) => property.semantic_id.as_ref(),
            Self::Collection(collection) => collection.semantic_id.as_ref(),
        }
    }
}
