//! Storefront configuration.

/// Branding and copy for the storefront shell.
///
/// Provided through context at the app root so the header, hero, and
/// footer render from one place.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store name shown in the header and footer.
    pub name: String,
    /// Document title.
    pub title: String,
    /// Tagline used for the hero copy and meta description.
    pub tagline: String,
    /// Hero heading.
    pub hero_heading: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "Crafts N' Wraps".to_string(),
            title: "Crafts N' Wraps - Handcrafted Gifts".to_string(),
            tagline: "Discover unique artisanal gifts and custom bouquets for every occasion"
                .to_string(),
            hero_heading: "Handcrafted Gifts with Love".to_string(),
        }
    }
}

impl StoreConfig {
    /// Create a configuration with the given store name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = tagline.into();
        self
    }

    /// Set the hero heading.
    pub fn with_hero_heading(mut self, heading: impl Into<String>) -> Self {
        self.hero_heading = heading.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.name, "Crafts N' Wraps");
        assert!(config.title.contains("Crafts N' Wraps"));
    }

    #[test]
    fn test_config_builder_chain() {
        let config = StoreConfig::new("Test Shop")
            .with_title("Test Shop - Home")
            .with_tagline("Gifts for testing")
            .with_hero_heading("Welcome");

        assert_eq!(config.name, "Test Shop");
        assert_eq!(config.title, "Test Shop - Home");
        assert_eq!(config.tagline, "Gifts for testing");
        assert_eq!(config.hero_heading, "Welcome");
    }
}
