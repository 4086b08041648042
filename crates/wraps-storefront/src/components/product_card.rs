//! Catalog grid card and the rating-star strip.

use leptos::prelude::*;
use wraps_commerce::prelude::*;

use crate::state::use_store;

/// Class name for each of the five star slots, left to right.
///
/// A full star per whole rating point, a half star for any fractional
/// remainder, empty stars after that.
pub(crate) fn star_classes(rating: f64) -> [&'static str; 5] {
    let full = rating.floor() as usize;
    let half = rating.fract() > 0.0;

    let mut classes = ["star empty"; 5];
    for slot in classes.iter_mut().take(full.min(5)) {
        *slot = "star full";
    }
    if half && full < 5 {
        classes[full] = "star half";
    }
    classes
}

/// Five-star rating strip with the numeric rating alongside.
#[component]
pub fn RatingStars(rating: f64) -> impl IntoView {
    view! {
        <div class="rating">
            {star_classes(rating)
                .into_iter()
                .map(|class| view! { <span class=class>"★"</span> })
                .collect_view()}
            <span class="rating-value">{format!("{rating:.1}")}</span>
        </div>
    }
}

/// One product tile in the grid.
///
/// Clicking the image or title opens quick view; "Add to Cart" adds a
/// single unit with no customization.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let state = use_store();
    let favorite = RwSignal::new(false);

    let id = StoredValue::new(product.id.clone());
    let price = product.price.to_string();

    view! {
        <article class="product-card">
            <div class="product-media" on:click=move |_| id.with_value(|id| state.open_quick_view(id))>
                <img src=product.image.clone() alt=product.title.clone()/>
                <button
                    class="favorite-button"
                    class:active=move || favorite.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        favorite.update(|f| *f = !*f);
                        id.with_value(|id| state.favorite(id));
                    }
                >
                    "♥"
                </button>
            </div>
            <div class="product-body">
                <h3
                    class="product-title"
                    on:click=move |_| id.with_value(|id| state.open_quick_view(id))
                >
                    {product.title.clone()}
                </h3>
                <RatingStars rating=product.rating/>
                <p class="product-price">{price}</p>
                <button
                    class="add-button"
                    on:click=move |_| {
                        id.with_value(|id| state.add_to_cart(id, 1, Customization::default()))
                    }
                >
                    "Add to Cart"
                </button>
            </div>
        </article>
    }
}
