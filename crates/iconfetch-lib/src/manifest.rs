mod identifier;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub use identifier::validate_identifier;

/// The two groups of event owners whose icons are listed in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Support,
    Chara,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Support => "support",
            Collection::Chara => "chara",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Icon file name(s) attached to a record.
///
/// Support cards carry a single icon, characters may carry one per outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconRef {
    Single(String),
    Multiple(Vec<String>),
}

impl IconRef {
    pub fn identifiers(&self) -> &[String] {
        match self {
            IconRef::Single(identifier) => std::slice::from_ref(identifier),
            IconRef::Multiple(identifiers) => identifiers,
        }
    }
}

impl From<&str> for IconRef {
    fn from(identifier: &str) -> Self {
        IconRef::Single(identifier.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Remote file name and local output file name
    #[serde(rename = "i", alias = "icon")]
    pub icon: IconRef,
    /// Display name, carried into log output
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Record {
    pub fn new(icon: impl Into<IconRef>) -> Self {
        Self {
            icon: icon.into(),
            name: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub support: Vec<Record>,
    pub chara: Vec<Record>,
}

impl Manifest {
    pub fn collection(&self, collection: Collection) -> &[Record] {
        match collection {
            Collection::Support => &self.support,
            Collection::Chara => &self.chara,
        }
    }

    /// Every identifier in processing order: all support icons, then all chara icons.
    pub fn entries(&self) -> impl Iterator<Item = (Collection, &str)> + '_ {
        [Collection::Support, Collection::Chara]
            .into_iter()
            .flat_map(move |collection| {
                self.collection(collection)
                    .iter()
                    .flat_map(|record| record.icon.identifiers())
                    .map(move |identifier| (collection, identifier.as_str()))
            })
    }

    pub fn len(&self) -> usize {
        self.entries().count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().next().is_none()
    }

    pub fn from_json_str(path: &Path, content: &str) -> Result<Self, crate::error::IconFetchError> {
        let parse_error = |e: serde_json::Error| crate::error::IconFetchError::ManifestLoad {
            path: path.to_path_buf(),
            reason: format!("JSON parsing failed: {}", e),
        };
        let mut document: serde_json::Value = serde_json::from_str(content).map_err(parse_error)?;
        // The full event data document nests both collections under `owner`.
        if document.get("support").is_none() {
            let owner = document.get_mut("owner").map(serde_json::Value::take);
            if let Some(owner) = owner {
                document = owner;
            }
        }
        let manifest = Manifest::deserialize(document).map_err(parse_error)?;
        manifest.validate(path)?;
        Ok(manifest)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, crate::error::IconFetchError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::IconFetchError::ManifestLoad {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;
        Self::from_json_str(path, &content)
    }

    fn validate(&self, path: &Path) -> Result<(), crate::error::IconFetchError> {
        for (collection, identifier) in self.entries() {
            validate_identifier(identifier).map_err(|details| {
                crate::error::IconFetchError::ManifestValidation {
                    path: path.to_path_buf(),
                    details: format!("{} record: {}", collection, details),
                }
            })?;
        }
        Ok(())
    }
}
