use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::product::{Product, ProductId};

/// Saved-for-later product ids. Membership only; duplicates are
/// impossible by construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    ids: BTreeSet<ProductId>,
}

impl Wishlist {
    /// Flip membership. Returns the resulting state: `true` when the
    /// product is now wishlisted. Two toggles in a row are a no-op
    /// overall.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The wishlisted products in catalog order (not insertion order).
    pub fn materialize<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .products
            .iter()
            .filter(|p| self.ids.contains(&p.id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_twice_restores_prior_membership() {
        let mut wishlist = Wishlist::default();
        let id = ProductId("3".into());

        assert!(wishlist.toggle(&id));
        assert!(wishlist.contains(&id));
        assert!(!wishlist.toggle(&id));
        assert!(!wishlist.contains(&id));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn materialize_follows_catalog_order_not_insertion_order() {
        let catalog = Catalog::seeded();
        let mut wishlist = Wishlist::default();

        // Insert out of catalog order.
        wishlist.toggle(&ProductId("5".into()));
        wishlist.toggle(&ProductId("1".into()));
        wishlist.toggle(&ProductId("3".into()));

        let ids: Vec<&str> = wishlist
            .materialize(&catalog)
            .iter()
            .map(|p| p.id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3", "5"]);
    }

    #[test]
    fn materialize_skips_ids_missing_from_the_catalog() {
        let catalog = Catalog::seeded();
        let mut wishlist = Wishlist::default();
        wishlist.toggle(&ProductId("ghost".into()));

        assert!(wishlist.materialize(&catalog).is_empty());
        assert_eq!(wishlist.len(), 1);
    }
}
