/// Shared data structures for the application state
///
/// These structs represent the catalog records that flow between
/// the embedded data files and the UI layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A catalog item with a base image and one pre-rendered image per style
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    /// Unique catalog ID (e.g., "p1")
    pub id: String,
    /// Display name (e.g., "Leather Jacket")
    pub name: String,
    /// Category label shown under the name
    pub category: String,
    /// URI of the unstyled product photo
    pub image: String,
    /// Style ID -> URI of the pre-rendered styled photo
    pub styled_images: BTreeMap<String, String>,
}

impl Product {
    /// The pre-rendered image for a style, if the catalog has one
    pub fn styled_image(&self, style_id: &str) -> Option<&str> {
        self.styled_images.get(style_id).map(String::as_str)
    }
}

/// A named visual treatment the user can pick
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Style {
    /// Unique catalog ID (e.g., "s1")
    pub id: String,
    pub name: String,
    pub description: String,
    /// URI of the swatch shown on the style card
    pub preview_image: String,
}
