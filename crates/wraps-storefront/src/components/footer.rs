//! Site footer.

use leptos::prelude::*;

use crate::config::StoreConfig;

const SHOP_LINKS: &[&str] = &["All Products", "New Arrivals", "Best Sellers", "Gift Cards"];
const HELP_LINKS: &[&str] = &["Contact Us", "Shipping Info", "Returns", "FAQ"];
const COMPANY_LINKS: &[&str] = &["About Us", "Our Artisans", "Sustainability", "Careers"];

#[component]
fn LinkColumn(title: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4>{title}</h4>
            <ul>
                {links
                    .iter()
                    .map(|link| view! { <li><a href="#">{*link}</a></li> })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let config = expect_context::<StoreConfig>();
    let name = config.name.clone();

    view! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div class="footer-column footer-about">
                    <h4>{config.name.clone()}</h4>
                    <p>{config.tagline.clone()}</p>
                </div>
                <LinkColumn title="Shop" links=SHOP_LINKS/>
                <LinkColumn title="Help" links=HELP_LINKS/>
                <LinkColumn title="Company" links=COMPANY_LINKS/>
                <div class="footer-column">
                    <h4>"Stay in Touch"</h4>
                    <p>"Get updates on new arrivals and seasonal collections."</p>
                    <div class="newsletter">
                        <input type="email" placeholder="Your email"/>
                        <button>"Subscribe"</button>
                    </div>
                </div>
            </div>
            <p class="footer-copyright">{format!("© 2024 {name}. All rights reserved.")}</p>
        </footer>
    }
}
