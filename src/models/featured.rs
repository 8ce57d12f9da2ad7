//! Featured recipe model

use serde::{Deserialize, Serialize};

/// A recipe suggestion shown as kitchen inspiration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedRecipe {
    pub title: String,
    pub description: String,
}

impl FeaturedRecipe {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}
