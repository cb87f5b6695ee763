use dioxus::prelude::*;

use sillage_common::product::FragranceFamily;
use sillage_common::selection::SortKey;

use super::store_state::use_store;

fn sort_value(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Popular => "popular",
        SortKey::Newest => "newest",
        SortKey::PriceAsc => "price-asc",
        SortKey::PriceDesc => "price-desc",
    }
}

fn parse_sort(value: &str) -> SortKey {
    match value {
        "newest" => SortKey::Newest,
        "price-asc" => SortKey::PriceAsc,
        "price-desc" => SortKey::PriceDesc,
        _ => SortKey::Popular,
    }
}

#[component]
pub fn FilterBar() -> Element {
    let mut store = use_store();

    let state = store.read();
    let active_family = state.selection.family;
    let active_brand = state.selection.brand.clone();
    let active_sort = state.selection.sort;
    let brands = state.brands();
    drop(state);

    rsx! {
        div { class: "filter-bar",
            div { class: "family-pills",
                button {
                    class: if active_family.is_none() { "pill pill-active" } else { "pill" },
                    onclick: move |_| store.write().selection.family = None,
                    "All"
                }
                {FragranceFamily::all().iter().map(|&family| {
                    let is_active = active_family == Some(family);
                    rsx! {
                        button {
                            class: if is_active { "pill pill-active" } else { "pill" },
                            key: "{family.label()}",
                            onclick: move |_| store.write().selection.family = Some(family),
                            "{family.label()}"
                        }
                    }
                })}
            }

            div { class: "filter-dropdowns",
                label { class: "filter-label",
                    "Brand:"
                    select {
                        value: active_brand.as_deref().unwrap_or("All"),
                        onchange: move |evt| {
                            let value = evt.value();
                            store.write().selection.brand =
                                (value != "All").then_some(value);
                        },
                        option { value: "All", "All Brands" }
                        {brands.iter().map(|brand| rsx! {
                            option { value: "{brand}", key: "{brand}", "{brand}" }
                        })}
                    }
                }

                label { class: "filter-label",
                    "Sort by:"
                    select {
                        value: sort_value(active_sort),
                        onchange: move |evt| {
                            store.write().selection.sort = parse_sort(&evt.value());
                        },
                        {SortKey::all().iter().map(|&sort| rsx! {
                            option {
                                value: sort_value(sort),
                                key: "{sort_value(sort)}",
                                "{sort.label()}"
                            }
                        })}
                    }
                }
            }
        }
    }
}
