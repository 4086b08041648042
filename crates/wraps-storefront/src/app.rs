//! App root: context wiring and page layout.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use crate::components::{CartPanel, FilterBar, Footer, Header, ProductGrid, QuickViewModal};
use crate::config::StoreConfig;
use crate::state::StoreState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StoreConfig::default();
    let title = config.title.clone();
    let tagline = config.tagline.clone();
    let hero_heading = config.hero_heading.clone();
    provide_context(config);

    let state = StoreState::provide(wraps_commerce::catalog::sample());

    view! {
        <Title text=title/>
        <Meta name="description" content=tagline.clone()/>

        <Header/>
        <main>
            <section class="hero">
                <h1>{hero_heading}</h1>
                <p>{tagline}</p>
                <a class="hero-cta" href="#products">"Shop Now"</a>
            </section>
            <div id="products" class="page-content">
                <FilterBar/>
                <ProductGrid/>
            </div>
        </main>
        <Footer/>

        {move || {
            state
                .quick_view_open
                .get()
                .then(|| state.selected_product())
                .flatten()
                .map(|product| view! { <QuickViewModal product/> })
        }}
        <CartPanel/>
    }
}
