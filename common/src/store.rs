use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::product::{Product, ProductId};
use crate::review::ReviewId;
use crate::selection::Selection;
use crate::session::SessionAccessor;
use crate::wishlist::Wishlist;

/// The single store behind the whole storefront: catalog, cart,
/// wishlist and filter selection, owned by one root and mutated only
/// through the operations below. Views read snapshots and recompute
/// their derived lists after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    pub catalog: Catalog,
    pub cart: Cart,
    pub wishlist: Wishlist,
    pub selection: Selection,
}

impl StoreState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// A store over the embedded seed catalog.
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded())
    }

    /// Add one unit of the product to the cart, resolving `size_label`
    /// against the product's size list (default size when unspecified or
    /// unknown). Returns `true` when a line was touched, which is the
    /// caller's cue to reveal the cart panel; unknown ids are a no-op.
    pub fn add_to_cart(&mut self, id: &ProductId, size_label: Option<&str>) -> bool {
        let Some(product) = self.catalog.find(id) else {
            return false;
        };
        let size = size_label.and_then(|label| product.sizes.iter().find(|s| s.label == label));
        self.cart.add(product, size);
        true
    }

    pub fn update_cart_quantity(&mut self, id: &ProductId, size_label: &str, delta: i64) {
        self.cart.update_quantity(id, size_label, delta);
    }

    pub fn remove_cart_line(&mut self, id: &ProductId, size_label: &str) {
        self.cart.remove(id, size_label);
    }

    /// Flip wishlist membership; returns the resulting state.
    pub fn toggle_wishlist(&mut self, id: &ProductId) -> bool {
        self.wishlist.toggle(id)
    }

    pub fn submit_review(
        &mut self,
        session: &dyn SessionAccessor,
        id: &ProductId,
        rating: u8,
        comment: &str,
        today: NaiveDate,
    ) -> Option<ReviewId> {
        self.catalog.submit_review(session, id, rating, comment, today)
    }

    #[cfg(feature = "std")]
    pub fn submit_review_today(
        &mut self,
        session: &dyn SessionAccessor,
        id: &ProductId,
        rating: u8,
        comment: &str,
    ) -> Option<ReviewId> {
        self.catalog.submit_review_today(session, id, rating, comment)
    }

    /// The collection grid: catalog filtered and sorted by the current
    /// selection.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.selection.apply(&self.catalog)
    }

    /// The wishlist panel's product list, in catalog order.
    pub fn wishlist_products(&self) -> Vec<&Product> {
        self.wishlist.materialize(&self.catalog)
    }

    /// Brand options for the filter bar (full catalog, deduplicated).
    pub fn brands(&self) -> Vec<String> {
        self.catalog.brands()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_by_id_resolves_the_default_size() {
        let mut store = StoreState::seeded();
        let id = ProductId("1".into());

        assert!(store.add_to_cart(&id, None));
        assert_eq!(store.cart.lines.len(), 1);
        assert_eq!(store.cart.lines[0].size_label, "50ml");
        assert_eq!(store.cart.lines[0].unit_price, 15000);
    }

    #[test]
    fn add_by_id_resolves_a_named_size() {
        let mut store = StoreState::seeded();
        let id = ProductId("1".into());

        assert!(store.add_to_cart(&id, Some("100ml")));
        assert_eq!(store.cart.lines[0].size_label, "100ml");
        assert_eq!(store.cart.lines[0].unit_price, 25000);
    }

    #[test]
    fn add_with_unknown_id_is_a_no_op() {
        let mut store = StoreState::seeded();

        assert!(!store.add_to_cart(&ProductId("ghost".into()), None));
        assert!(store.cart.is_empty());
    }

    #[test]
    fn wishlist_roundtrip_through_the_store() {
        let mut store = StoreState::seeded();
        let id = ProductId("3".into());

        assert!(store.toggle_wishlist(&id));
        assert_eq!(store.wishlist_products().len(), 1);
        assert_eq!(store.wishlist_products()[0].id, id);

        assert!(!store.toggle_wishlist(&id));
        assert!(store.wishlist_products().is_empty());
    }

    #[test]
    fn selection_changes_are_reflected_in_the_visible_view() {
        let mut store = StoreState::seeded();
        assert_eq!(store.visible_products().len(), 6);

        store.selection.brand = Some("Royal Collection".into());
        let view = store.visible_products();
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|p| p.brand == "Royal Collection"));
    }
}
