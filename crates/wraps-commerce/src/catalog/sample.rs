//! Built-in sample catalog.
//!
//! There is no backend in this storefront; the catalog is this fixed
//! set of eight products, loaded once at startup.

use crate::catalog::{Catalog, Product};
use crate::money::{Currency, Money};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

/// The sample product catalog.
pub fn sample() -> Catalog {
    let products = vec![
        Product::new(
            "1",
            "Handcrafted Floral Bouquet",
            Money::new(3999, Currency::USD),
            4.5,
            "https://images.unsplash.com/photo-1612160609504-334bdc6b70c9?w=400&q=80",
        )
        .with_description(
            "A beautiful handcrafted floral bouquet made with premium seasonal flowers. \
             Perfect for birthdays, anniversaries, or any special occasion.",
        )
        .with_gallery(strings(&[
            "https://images.unsplash.com/photo-1612160609504-334bdc6b70c9?w=600&q=80",
            "https://images.unsplash.com/photo-1561181286-d3fee7d55364?w=600&q=80",
            "https://images.unsplash.com/photo-1563241527-3004b7be0ffd?w=600&q=80",
        ]))
        .with_attributes("birthday", "pink", "floral")
        .with_color_options(strings(&["Red", "Pink", "White", "Mixed"]))
        .with_theme_options(strings(&[
            "Birthday",
            "Anniversary",
            "Congratulations",
            "Thank You",
        ])),
        Product::new(
            "2",
            "Rustic Gift Basket",
            Money::new(4999, Currency::USD),
            4.2,
            "https://images.unsplash.com/photo-1549465220-1a8b9238cd48?w=400&q=80",
        )
        .with_description(
            "A charming rustic gift basket filled with artisanal treats and handcrafted \
             items. Perfect for housewarmings or to show appreciation.",
        )
        .with_gallery(strings(&[
            "https://images.unsplash.com/photo-1549465220-1a8b9238cd48?w=600&q=80",
        ]))
        .with_attributes("housewarming", "brown", "rustic")
        .with_color_options(strings(&["Brown", "Natural"]))
        .with_theme_options(strings(&["Housewarming", "Thank You", "Congratulations"])),
        Product::new(
            "3",
            "Personalized Jewelry Box",
            Money::new(2999, Currency::USD),
            4.8,
            "https://images.unsplash.com/photo-1607344645866-009c320c5ab8?w=400&q=80",
        )
        .with_description(
            "An elegant personalized jewelry box, handcrafted from premium wood with \
             customizable engravings. A perfect keepsake gift.",
        )
        .with_gallery(strings(&[
            "https://images.unsplash.com/photo-1607344645866-009c320c5ab8?w=600&q=80",
        ]))
        .with_attributes("anniversary", "white", "elegant")
        .with_color_options(strings(&["Walnut", "Cherry", "Maple"]))
        .with_theme_options(strings(&["Anniversary", "Birthday", "Wedding"])),
        Product::new(
            "4",
            "Artisanal Chocolate Collection",
            Money::new(2499, Currency::USD),
            4.7,
            "https://images.unsplash.com/photo-1562690868-60bbe7293e94?w=400&q=80",
        )
        .with_description(
            "A luxurious collection of handcrafted artisanal chocolates made with premium \
             ingredients and unique flavor combinations.",
        )
        .with_gallery(strings(&[
            "https://images.unsplash.com/photo-1562690868-60bbe7293e94?w=600&q=80",
        ]))
        .with_attributes("valentine", "brown", "gourmet")
        .with_color_options(strings(&["Assorted"]))
        .with_theme_options(strings(&["Valentine", "Birthday", "Thank You"])),
        Product::new(
            "5",
            "Handmade Scented Candles Set",
            Money::new(3499, Currency::USD),
            4.3,
            "https://images.unsplash.com/photo-1577083552431-6e5fd01988a5?w=400&q=80",
        )
        .with_description(
            "A set of handmade scented candles crafted with natural soy wax and premium \
             essential oils for a long-lasting, clean burn.",
        )
        .with_gallery(strings(&[
            "https://images.unsplash.com/photo-1577083552431-6e5fd01988a5?w=600&q=80",
        ]))
        .with_attributes("christmas", "green", "cozy")
        .with_color_options(strings(&["Green", "Red", "White"]))
        .with_theme_options(strings(&["Christmas", "Housewarming", "Self-care"])),
        Product::new(
            "6",
            "Custom Photo Frame",
            Money::new(1999, Currency::USD),
            4.1,
            "https://images.unsplash.com/photo-1523293182086-7651a899d37f?w=400&q=80",
        )
        .with_description(
            "A modern custom photo frame that can be personalized with names, dates, or \
             special messages. Available in multiple finishes.",
        )
        .with_gallery(strings(&[
            "https://images.unsplash.com/photo-1523293182086-7651a899d37f?w=600&q=80",
        ]))
        .with_attributes("graduation", "black", "modern")
        .with_color_options(strings(&["Black", "Silver", "Gold"]))
        .with_theme_options(strings(&["Graduation", "Anniversary", "Family"])),
        Product::new(
            "7",
            "Hand-Knitted Throw Blanket",
            Money::new(5999, Currency::USD),
            4.9,
            "https://images.unsplash.com/photo-1513519245088-0e12902e5a38?w=400&q=80",
        )
        .with_description(
            "A luxuriously soft hand-knitted throw blanket made from premium yarn. Perfect \
             for adding warmth and style to any home.",
        )
        .with_gallery(strings(&[
            "https://images.unsplash.com/photo-1513519245088-0e12902e5a38?w=600&q=80",
        ]))
        .with_attributes("housewarming", "beige", "cozy")
        .with_color_options(strings(&["Beige", "Gray", "Blue"]))
        .with_theme_options(strings(&["Housewarming", "Winter", "Comfort"])),
        Product::new(
            "8",
            "Ceramic Tea Set",
            Money::new(4499, Currency::USD),
            4.6,
            "https://images.unsplash.com/photo-1535585209827-a15fcdbc4c2d?w=400&q=80",
        )
        .with_description(
            "An elegant ceramic tea set handcrafted by skilled artisans. Includes teapot \
             and four matching cups with delicate designs.",
        )
        .with_gallery(strings(&[
            "https://images.unsplash.com/photo-1535585209827-a15fcdbc4c2d?w=600&q=80",
        ]))
        .with_attributes("wedding", "white", "elegant")
        .with_color_options(strings(&["White", "Blue", "Floral"]))
        .with_theme_options(strings(&["Wedding", "Housewarming", "Tea Lover"])),
    ];

    Catalog::new(products).expect("sample catalog ids are unique")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    #[test]
    fn test_sample_catalog_size() {
        assert_eq!(sample().len(), 8);
    }

    #[test]
    fn test_sample_catalog_lookup() {
        let catalog = sample();
        let bouquet = catalog.get(&ProductId::new("1")).unwrap();
        assert_eq!(bouquet.title, "Handcrafted Floral Bouquet");
        assert_eq!(bouquet.price.amount_cents, 3999);
        assert_eq!(bouquet.occasion, "birthday");
    }

    #[test]
    fn test_sample_products_have_attributes() {
        for product in sample().products() {
            assert!(!product.occasion.is_empty());
            assert!(!product.color.is_empty());
            assert!(!product.theme.is_empty());
            assert!(product.rating >= 0.0 && product.rating <= 5.0);
        }
    }
}
