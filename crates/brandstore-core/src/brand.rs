//! Brand model

use serde::{Deserialize, Serialize};

use crate::error::BrandError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
}

/// Payload for creating a brand. The id is always assigned by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewBrand {
    #[serde(default)]
    pub name: Option<String>,
}

impl NewBrand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Returns the name as supplied; blank names are rejected but not trimmed.
    pub(crate) fn validated_name(&self) -> Result<&str> {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(BrandError::Validation("Brand name is required".to_string())),
        }
    }
}

/// Full replacement payload for an existing brand.
///
/// `id` must match the addressed brand. The name is stored as given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BrandUpdate {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

impl BrandUpdate {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl From<Brand> for BrandUpdate {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id,
            name: brand.name,
        }
    }
}
