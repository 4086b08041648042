//! Filter controls above the product grid.

use leptos::prelude::*;
use wraps_commerce::prelude::*;

use crate::state::use_store;

const OCCASIONS: &[(&str, &str)] = &[
    ("all", "All Occasions"),
    ("birthday", "Birthday"),
    ("wedding", "Wedding"),
    ("anniversary", "Anniversary"),
    ("graduation", "Graduation"),
    ("holiday", "Holiday"),
];

const COLORS: &[(&str, &str)] = &[
    ("all", "All Colors"),
    ("red", "Red"),
    ("blue", "Blue"),
    ("green", "Green"),
    ("purple", "Purple"),
    ("pink", "Pink"),
    ("yellow", "Yellow"),
];

const THEMES: &[(&str, &str)] = &[
    ("all", "All Themes"),
    ("rustic", "Rustic"),
    ("modern", "Modern"),
    ("vintage", "Vintage"),
    ("minimalist", "Minimalist"),
    ("bohemian", "Bohemian"),
];

/// One labelled dropdown bound to a single filter dimension.
#[component]
fn FilterSelect(
    label: &'static str,
    dimension: FilterDimension,
    options: &'static [(&'static str, &'static str)],
) -> impl IntoView {
    let state = use_store();
    let current = move || state.filters.with(|f| f.get(dimension).as_value().to_string());

    view! {
        <label class="filter-field">
            <span class="filter-label">{label}</span>
            <select
                prop:value=current
                on:change=move |ev| {
                    let selection = Selection::parse(&event_target_value(&ev));
                    state.set_filter(dimension, selection);
                }
            >
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// The occasion/color/theme filter bar, with a reset control.
#[component]
pub fn FilterBar() -> impl IntoView {
    let state = use_store();

    view! {
        <section class="filter-bar">
            <h2 class="filter-title">"Find the Perfect Gift"</h2>
            <div class="filter-fields">
                <FilterSelect label="Occasion" dimension=FilterDimension::Occasion options=OCCASIONS/>
                <FilterSelect label="Color" dimension=FilterDimension::Color options=COLORS/>
                <FilterSelect label="Theme" dimension=FilterDimension::Theme options=THEMES/>
                <Show when=move || state.filters.with(|f| f.is_filtered())>
                    <button class="filter-clear" on:click=move |_| state.clear_filters()>
                        "Clear Filters"
                    </button>
                </Show>
            </div>
        </section>
    }
}
