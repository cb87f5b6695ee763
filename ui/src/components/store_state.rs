use dioxus::prelude::*;

use sillage_common::product::ProductId;
use sillage_common::store::StoreState;

/// Visibility of the overlay surfaces layered over every page: the two
/// side panels and the product-detail view for the selected product id.
///
/// Holding the id (not a product snapshot) keeps the detail overlay
/// reading straight from the catalog, so a just-submitted review shows
/// up without any copy being patched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Panels {
    pub cart_open: bool,
    pub wishlist_open: bool,
    pub selected: Option<ProductId>,
}

/// The storefront store, provided as shared context at the app root.
pub fn use_store() -> Signal<StoreState> {
    use_context::<Signal<StoreState>>()
}

pub fn use_panels() -> Signal<Panels> {
    use_context::<Signal<Panels>>()
}

/// Add to cart and reveal the cart panel, the storefront's standard
/// add gesture. Size `None` resolves to the product's default size.
pub fn add_to_cart_and_reveal(
    mut store: Signal<StoreState>,
    mut panels: Signal<Panels>,
    id: &ProductId,
    size_label: Option<&str>,
) {
    if store.write().add_to_cart(id, size_label) {
        panels.write().cart_open = true;
    }
}
