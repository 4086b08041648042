//! Site header with brand, navigation, and the cart badge.

use leptos::prelude::*;

use crate::config::StoreConfig;
use crate::state::use_store;

const NAV_LINKS: &[&str] = &["Home", "Shop", "Occasions", "Custom Orders", "About Us"];

#[component]
pub fn Header() -> impl IntoView {
    let state = use_store();
    let config = expect_context::<StoreConfig>();

    view! {
        <header class="site-header">
            <div class="brand">
                <span class="brand-mark">"🎁"</span>
                <span class="brand-name">{config.name.clone()}</span>
            </div>
            <nav class="site-nav">
                {NAV_LINKS
                    .iter()
                    .map(|link| view! { <a href="#">{*link}</a> })
                    .collect_view()}
            </nav>
            <div class="header-actions">
                <input class="header-search" type="search" placeholder="Search gifts..."/>
                <button class="cart-button" on:click=move |_| state.open_cart()>
                    "🛒"
                    <Show when=move || { state.line_count() > 0 }>
                        <span class="cart-badge">{move || state.line_count()}</span>
                    </Show>
                </button>
            </div>
        </header>
    }
}
