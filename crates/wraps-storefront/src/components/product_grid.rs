//! Product grid with pagination controls.

use leptos::prelude::*;
use wraps_commerce::prelude::*;

use crate::components::ProductCard;
use crate::state::use_store;

/// Previous / numbered / Next pagination row. Hidden when the result
/// set fits on one page or is empty.
#[component]
fn PageControls(results: Memo<BrowseResults>) -> impl IntoView {
    let state = use_store();
    let pagination = move || results.with(|r| r.pagination);

    view! {
        <Show when=move || { pagination().total_pages > 1 }>
            <nav class="pagination">
                <button
                    class="page-step"
                    disabled=move || !pagination().has_prev
                    on:click=move |_| state.set_page(pagination().page - 1)
                >
                    "Previous"
                </button>
                {move || {
                    let current = pagination().page;
                    (1..=pagination().total_pages)
                        .map(|n| {
                            view! {
                                <button
                                    class="page-number"
                                    class:current=move || n == current
                                    on:click=move |_| state.set_page(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="page-step"
                    disabled=move || !pagination().has_next
                    on:click=move |_| state.set_page(pagination().page + 1)
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}

/// The filtered, paginated catalog grid.
#[component]
pub fn ProductGrid() -> impl IntoView {
    let state = use_store();
    let results = Memo::new(move |_| state.browse());

    view! {
        <section class="product-section">
            <Show
                when=move || !results.with(|r| r.is_empty())
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <p class="empty-title">"No products found"</p>
                            <p class="empty-hint">
                                "Try adjusting your filters to find what you're looking for."
                            </p>
                        </div>
                    }
                }
            >
                <div class="product-grid">
                    <For
                        each=move || results.with(|r| r.items.clone())
                        key=|product| product.id.clone()
                        children=|product| view! { <ProductCard product/> }
                    />
                </div>
            </Show>
            <PageControls results/>
        </section>
    }
}
