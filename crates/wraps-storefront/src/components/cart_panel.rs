//! Slide-over cart sheet.

use leptos::prelude::*;
use wraps_commerce::prelude::*;

use crate::state::use_store;

/// One line in the cart: image, title, customization, price, quantity
/// stepper, and remove control.
#[component]
fn CartLine(item: LineItem) -> impl IntoView {
    let state = use_store();

    let line_id = StoredValue::new(item.id.clone());
    let quantity = item.quantity;
    let caption = [
        item.customization.color.as_ref().map(|c| format!("Color: {c}")),
        item.customization.theme.as_ref().map(|t| format!("Theme: {t}")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" · ");

    view! {
        <li class="cart-line">
            <img src=item.image.clone() alt=item.title.clone()/>
            <div class="cart-line-body">
                <p class="cart-line-title">{item.title.clone()}</p>
                <Show when={
                    let has_caption = !caption.is_empty();
                    move || has_caption
                }>
                    <p class="cart-line-caption">{caption.clone()}</p>
                </Show>
                <p class="cart-line-price">
                    {format!("{} × {}", item.unit_price, item.quantity)}
                </p>
            </div>
            <div class="cart-line-controls">
                <div class="quantity-stepper">
                    <button
                        disabled=quantity <= 1
                        on:click=move |_| {
                            line_id.with_value(|id| state.set_quantity(id, quantity - 1))
                        }
                    >
                        "−"
                    </button>
                    <span class="quantity-value">{quantity}</span>
                    <button on:click=move |_| {
                        line_id.with_value(|id| state.set_quantity(id, quantity + 1))
                    }>
                        "+"
                    </button>
                </div>
                <button
                    class="cart-line-remove"
                    on:click=move |_| line_id.with_value(|id| state.remove_from_cart(id))
                >
                    "Remove"
                </button>
            </div>
        </li>
    }
}

/// Subtotal / shipping / total rows plus checkout controls.
#[component]
fn CartTotals() -> impl IntoView {
    let state = use_store();
    let pricing = Memo::new(move |_| state.cart.with(|c| c.pricing().unwrap_or_default()));

    view! {
        <div class="cart-totals">
            <div class="totals-row">
                <span>"Subtotal"</span>
                <span>{move || pricing.with(|p| p.subtotal.to_string())}</span>
            </div>
            <div class="totals-row">
                <span>"Shipping"</span>
                <span>{move || pricing.with(|p| p.shipping.to_string())}</span>
            </div>
            <div class="totals-row totals-grand">
                <span>"Total"</span>
                <span>{move || pricing.with(|p| p.total.to_string())}</span>
            </div>
            <button class="checkout-button" on:click=move |_| state.checkout()>
                "Proceed to Checkout"
            </button>
            <button class="continue-button" on:click=move |_| state.close_cart()>
                "Continue Shopping"
            </button>
        </div>
    }
}

/// The cart sheet. Rendered only while open; clicking the backdrop
/// closes it.
#[component]
pub fn CartPanel() -> impl IntoView {
    let state = use_store();

    view! {
        <Show when=move || state.cart_open.get()>
            <div class="sheet-backdrop" on:click=move |_| state.close_cart()>
                <aside class="cart-sheet" on:click=|ev| ev.stop_propagation()>
                    <header class="cart-header">
                        <h2>"Your Cart"</h2>
                        <button class="modal-close" on:click=move |_| state.close_cart()>
                            "✕"
                        </button>
                    </header>
                    <Show
                        when=move || !state.cart.with(|c| c.is_empty())
                        fallback=|| {
                            view! {
                                <div class="empty-state">
                                    <p class="empty-title">"Your cart is empty"</p>
                                    <p class="empty-hint">
                                        "Add some beautiful handcrafted items to your cart"
                                    </p>
                                </div>
                            }
                        }
                    >
                        <ul class="cart-lines">
                            <For
                                each=move || state.cart.with(|c| c.items().to_vec())
                                key=|item| (item.id.clone(), item.quantity)
                                children=|item| view! { <CartLine item/> }
                            />
                        </ul>
                        <CartTotals/>
                    </Show>
                </aside>
            </div>
        </Show>
    }
}
