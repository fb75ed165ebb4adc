use std::collections::HashSet;
use thiserror::Error;
use tracing::{info, warn};

use super::data::{Product, Style};

/// Product list shipped with the binary. Edit `data/products.json` to change it.
const PRODUCTS_JSON: &str = include_str!("../../data/products.json");
/// Style list shipped with the binary. Edit `data/styles.json` to change it.
const STYLES_JSON: &str = include_str!("../../data/styles.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to decode {list} catalog: {source}")]
    Decode {
        list: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("{0} catalog is empty")]
    Empty(&'static str),
    #[error("duplicate {list} id '{id}'")]
    DuplicateId { list: &'static str, id: String },
}

/// The fixed product and style lists.
///
/// Both lists are guaranteed non-empty with unique ids, so the first entry
/// of each is always available as the default selection.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    styles: Vec<Style>,
}

impl Catalog {
    /// Load the catalogs embedded at build time.
    pub fn builtin() -> Result<Self, CatalogError> {
        let catalog = Self::from_json(PRODUCTS_JSON, STYLES_JSON)?;

        info!(
            "📚 Catalog loaded: {} products, {} styles",
            catalog.products.len(),
            catalog.styles.len()
        );
        for (product_id, style_id) in catalog.missing_mappings() {
            warn!("Product '{}' has no image for style '{}'", product_id, style_id);
        }

        Ok(catalog)
    }

    /// Decode and validate catalogs from JSON text
    pub fn from_json(products: &str, styles: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(products)
            .map_err(|source| CatalogError::Decode { list: "product", source })?;
        let styles: Vec<Style> = serde_json::from_str(styles)
            .map_err(|source| CatalogError::Decode { list: "style", source })?;

        Self::new(products, styles)
    }

    pub fn new(products: Vec<Product>, styles: Vec<Style>) -> Result<Self, CatalogError> {
        if products.is_empty() {
            return Err(CatalogError::Empty("product"));
        }
        if styles.is_empty() {
            return Err(CatalogError::Empty("style"));
        }
        ensure_unique("product", products.iter().map(|p| p.id.as_str()))?;
        ensure_unique("style", styles.iter().map(|s| s.id.as_str()))?;

        Ok(Catalog { products, styles })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn styles(&self) -> &[Style] {
        &self.styles
    }

    pub fn product(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn style(&self, id: &str) -> Option<&Style> {
        self.styles.iter().find(|s| s.id == id)
    }

    pub fn product_position(&self, id: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id == id)
    }

    pub fn style_position(&self, id: &str) -> Option<usize> {
        self.styles.iter().position(|s| s.id == id)
    }

    /// (product id, style id) pairs with no pre-rendered image.
    ///
    /// These render as a broken image; nothing rejects them.
    pub fn missing_mappings(&self) -> Vec<(&str, &str)> {
        let mut missing = Vec::new();
        for product in &self.products {
            for style in &self.styles {
                if product.styled_image(&style.id).is_none() {
                    missing.push((product.id.as_str(), style.id.as_str()));
                }
            }
        }
        missing
    }

    /// Every image URI referenced anywhere in the catalog, without duplicates
    pub fn image_uris(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let product_uris = self.products.iter().flat_map(|p| {
            std::iter::once(p.image.as_str()).chain(p.styled_images.values().map(String::as_str))
        });
        let style_uris = self.styles.iter().map(|s| s.preview_image.as_str());

        product_uris
            .chain(style_uris)
            .filter(|uri| seen.insert(*uri))
            .map(str::to_owned)
            .collect()
    }
}

fn ensure_unique<'a>(
    list: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { list, id: id.to_string() });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const ONE_PRODUCT: &str =
        r#"[{"id":"p1","name":"Jacket","category":"Outerwear","image":"base","styled_images":{"s1":"A"}}]"#;
    pub(crate) const ONE_STYLE: &str =
        r#"[{"id":"s1","name":"Mono","description":"Black and white","preview_image":"swatch"}]"#;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.products().len(), 4);
        assert_eq!(catalog.styles().len(), 4);
        assert_eq!(catalog.products()[0].name, "Leather Jacket");
        assert_eq!(catalog.styles()[0].name, "Monochrome");
    }

    #[test]
    fn test_builtin_catalog_maps_every_style() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.missing_mappings().is_empty());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = Catalog::builtin().unwrap();

        assert_eq!(catalog.product("p3").map(|p| p.name.as_str()), Some("Denim Jeans"));
        assert_eq!(catalog.style("s4").map(|s| s.name.as_str()), Some("Neon"));
        assert_eq!(catalog.product_position("p2"), Some(1));
        assert!(catalog.product("nope").is_none());
        assert!(catalog.style_position("nope").is_none());
    }

    #[test]
    fn test_empty_lists_rejected() {
        let err = Catalog::from_json("[]", ONE_STYLE).unwrap_err();
        assert!(matches!(err, CatalogError::Empty("product")));

        let err = Catalog::from_json(ONE_PRODUCT, "[]").unwrap_err();
        assert!(matches!(err, CatalogError::Empty("style")));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let styles = r#"[
            {"id":"s1","name":"A","description":"","preview_image":"x"},
            {"id":"s1","name":"B","description":"","preview_image":"y"}
        ]"#;

        match Catalog::from_json(ONE_PRODUCT, styles) {
            Err(CatalogError::DuplicateId { list, id }) => {
                assert_eq!(list, "style");
                assert_eq!(id, "s1");
            }
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = Catalog::from_json("{", ONE_STYLE).unwrap_err();
        assert!(matches!(err, CatalogError::Decode { list: "product", .. }));
    }

    #[test]
    fn test_missing_mapping_is_reported_not_rejected() {
        let styles = r#"[
            {"id":"s1","name":"A","description":"","preview_image":"x"},
            {"id":"s2","name":"B","description":"","preview_image":"y"}
        ]"#;
        let catalog = Catalog::from_json(ONE_PRODUCT, styles).unwrap();

        assert_eq!(catalog.missing_mappings(), vec![("p1", "s2")]);
    }

    #[test]
    fn test_image_uris_are_deduplicated() {
        let products = r#"[{"id":"p1","name":"J","category":"C","image":"base","styled_images":{"s1":"A","s2":"A"}}]"#;
        let styles = r#"[
            {"id":"s1","name":"A","description":"","preview_image":"base"},
            {"id":"s2","name":"B","description":"","preview_image":"y"}
        ]"#;
        let catalog = Catalog::from_json(products, styles).unwrap();

        assert_eq!(catalog.image_uris(), vec!["base", "A", "y"]);
    }
}
