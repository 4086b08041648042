//! Product record type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are static data loaded once at startup and never mutated.
/// The `occasion` / `color` / `theme` attributes are lowercase category
/// tokens used by the filter engine; `color_options` / `theme_options`
/// are the display-cased customization choices offered in quick view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Average rating, 0.0 through 5.0.
    pub rating: f64,
    /// Primary image URL (product card).
    pub image: String,
    /// Gallery image URLs (quick view). May be empty.
    pub gallery: Vec<String>,
    /// Full description shown in quick view.
    pub description: String,
    /// Filterable occasion token (e.g., "birthday").
    pub occasion: String,
    /// Filterable color token (e.g., "pink").
    pub color: String,
    /// Filterable theme token (e.g., "floral").
    pub theme: String,
    /// Customization color choices.
    pub color_options: Vec<String>,
    /// Customization theme choices.
    pub theme_options: Vec<String>,
}

impl Product {
    /// Create a product with the core listing fields.
    ///
    /// The rating is clamped into the valid 0–5 range.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        rating: f64,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            rating: rating.clamp(0.0, 5.0),
            image: image.into(),
            gallery: Vec::new(),
            description: String::new(),
            occasion: String::new(),
            color: String::new(),
            theme: String::new(),
            color_options: Vec::new(),
            theme_options: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the gallery image URLs.
    pub fn with_gallery(mut self, gallery: Vec<String>) -> Self {
        self.gallery = gallery;
        self
    }

    /// Set the filterable attribute tokens.
    pub fn with_attributes(
        mut self,
        occasion: impl Into<String>,
        color: impl Into<String>,
        theme: impl Into<String>,
    ) -> Self {
        self.occasion = occasion.into();
        self.color = color.into();
        self.theme = theme.into();
        self
    }

    /// Set the customization color choices.
    pub fn with_color_options(mut self, options: Vec<String>) -> Self {
        self.color_options = options;
        self
    }

    /// Set the customization theme choices.
    pub fn with_theme_options(mut self, options: Vec<String>) -> Self {
        self.theme_options = options;
        self
    }

    /// Gallery images for display, falling back to the primary image.
    pub fn display_gallery(&self) -> Vec<String> {
        if self.gallery.is_empty() {
            vec![self.image.clone()]
        } else {
            self.gallery.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn product() -> Product {
        Product::new(
            "p-1",
            "Test Gift",
            Money::new(1999, Currency::USD),
            4.5,
            "https://example.com/a.jpg",
        )
    }

    #[test]
    fn test_rating_clamped() {
        let p = Product::new("p", "P", Money::zero(Currency::USD), 7.2, "img");
        assert_eq!(p.rating, 5.0);

        let p = Product::new("p", "P", Money::zero(Currency::USD), -1.0, "img");
        assert_eq!(p.rating, 0.0);
    }

    #[test]
    fn test_display_gallery_falls_back_to_image() {
        let p = product();
        assert_eq!(p.display_gallery(), vec!["https://example.com/a.jpg"]);

        let p = product().with_gallery(vec!["g1".into(), "g2".into()]);
        assert_eq!(p.display_gallery().len(), 2);
    }

    #[test]
    fn test_builder_attributes() {
        let p = product().with_attributes("birthday", "pink", "floral");
        assert_eq!(p.occasion, "birthday");
        assert_eq!(p.color, "pink");
        assert_eq!(p.theme, "floral");
    }
}
