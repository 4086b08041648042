//! Quick-view product modal.

use leptos::prelude::*;
use wraps_commerce::prelude::*;

use crate::components::RatingStars;
use crate::state::use_store;

/// Modal detail view for one product: gallery, customization pickers,
/// quantity stepper, and add-to-cart.
///
/// Clicking the backdrop or the close button closes the modal without
/// touching the cart.
#[component]
pub fn QuickViewModal(product: Product) -> impl IntoView {
    let state = use_store();

    let gallery = StoredValue::new(product.display_gallery());
    let Product {
        id,
        title,
        price,
        rating,
        description,
        color_options,
        theme_options,
        ..
    } = product;

    let image_index = RwSignal::new(0usize);
    let quantity = RwSignal::new(1i64);
    let favorite = RwSignal::new(false);
    let selected_color = RwSignal::new(color_options.first().cloned());
    let selected_theme = RwSignal::new(theme_options.first().cloned());

    let id = StoredValue::new(id);
    let gallery_len = gallery.with_value(|g| g.len());
    let current_image =
        move || gallery.with_value(|g| g[image_index.get().min(g.len() - 1)].clone());

    let add_to_cart = move |_| {
        let customization = Customization {
            color: selected_color.get(),
            theme: selected_theme.get(),
        };
        id.with_value(|id| state.add_to_cart(id, quantity.get(), customization));
        state.close_quick_view();
    };

    let has_colors = !color_options.is_empty();
    let has_themes = !theme_options.is_empty();

    view! {
        <div class="modal-backdrop" on:click=move |_| state.close_quick_view()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <button class="modal-close" on:click=move |_| state.close_quick_view()>
                    "✕"
                </button>
                <div class="modal-gallery">
                    <img src=current_image alt=title.clone()/>
                    <Show when=move || { gallery_len > 1 }>
                        <div class="gallery-dots">
                            {(0..gallery_len)
                                .map(|n| {
                                    view! {
                                        <button
                                            class="gallery-dot"
                                            class:current=move || image_index.get() == n
                                            on:click=move |_| image_index.set(n)
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                </div>
                <div class="modal-details">
                    <h2>{title.clone()}</h2>
                    <RatingStars rating/>
                    <p class="product-price">{price.to_string()}</p>
                    <p class="product-description">{description}</p>

                    <Show when=move || has_colors>
                        <div class="option-group">
                            <span class="option-label">"Color"</span>
                            <div class="option-choices">
                                {color_options
                                    .iter()
                                    .map(|option| {
                                        let value = option.clone();
                                        let label = option.clone();
                                        let is_selected = {
                                            let value = value.clone();
                                            move || selected_color.get().as_deref() == Some(value.as_str())
                                        };
                                        view! {
                                            <button
                                                class="option-choice"
                                                class:selected=is_selected
                                                on:click=move |_| selected_color.set(Some(value.clone()))
                                            >
                                                {label}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Show>

                    <Show when=move || has_themes>
                        <div class="option-group">
                            <span class="option-label">"Theme"</span>
                            <div class="option-choices">
                                {theme_options
                                    .iter()
                                    .map(|option| {
                                        let value = option.clone();
                                        let label = option.clone();
                                        let is_selected = {
                                            let value = value.clone();
                                            move || selected_theme.get().as_deref() == Some(value.as_str())
                                        };
                                        view! {
                                            <button
                                                class="option-choice"
                                                class:selected=is_selected
                                                on:click=move |_| selected_theme.set(Some(value.clone()))
                                            >
                                                {label}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Show>

                    <div class="quantity-row">
                        <span class="option-label">"Quantity"</span>
                        <div class="quantity-stepper">
                            <button
                                disabled=move || quantity.get() <= 1
                                on:click=move |_| quantity.update(|q| *q = (*q - 1).max(1))
                            >
                                "−"
                            </button>
                            <span class="quantity-value">{move || quantity.get()}</span>
                            <button on:click=move |_| quantity.update(|q| *q += 1)>"+"</button>
                        </div>
                    </div>

                    <div class="modal-actions">
                        <button class="add-button" on:click=add_to_cart>
                            "Add to Cart"
                        </button>
                        <button
                            class="favorite-button"
                            class:active=move || favorite.get()
                            on:click=move |_| {
                                favorite.update(|f| *f = !*f);
                                id.with_value(|id| state.favorite(id));
                            }
                        >
                            "♥"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
