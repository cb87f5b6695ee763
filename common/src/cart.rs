use serde::{Deserialize, Serialize};

use crate::product::{FragranceFamily, Product, ProductCategory, ProductId, ProductSize};

/// One (product, size) combination in the cart.
///
/// Line identity is the compound key (product id, size label): the same
/// product in two sizes occupies two lines. `unit_price` is snapshotted
/// when the line is created and never re-read from the catalog, so
/// mid-session price drift cannot affect items already in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub category: ProductCategory,
    pub family: FragranceFamily,
    pub image_url: String,
    pub size_label: String,
    pub unit_price: u64,
    /// Always >= 1; lines leave the cart only via `remove`.
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> u64 {
        self.unit_price * self.quantity as u64
    }
}

/// The cart ledger: an ordered line-item collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// Add one unit of a product in the given size (default size when
    /// unspecified). Merges into an existing line under the compound key,
    /// leaving its price snapshot unchanged; otherwise opens a new line
    /// with quantity 1.
    pub fn add(&mut self, product: &Product, size: Option<&ProductSize>) {
        let size = size.unwrap_or_else(|| product.default_size());

        if let Some(line) = self.find_line_mut(&product.id, &size.label) {
            line.quantity += 1;
            return;
        }

        self.lines.push(CartLine {
            product_id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            description: product.description.clone(),
            category: product.category,
            family: product.family,
            image_url: product.image_url.clone(),
            size_label: size.label.clone(),
            unit_price: size.price,
            quantity: 1,
        });
    }

    /// Adjust a line's quantity by `delta`, floored at 1. Silently does
    /// nothing when no line matches; removal goes through `remove`.
    pub fn update_quantity(&mut self, product_id: &ProductId, size_label: &str, delta: i64) {
        if let Some(line) = self.find_line_mut(product_id, size_label) {
            line.quantity = (line.quantity as i64 + delta).max(1) as u32;
        }
    }

    /// Delete the matching line; no-op when absent.
    pub fn remove(&mut self, product_id: &ProductId, size_label: &str) {
        self.lines
            .retain(|line| !(line.product_id == *product_id && line.size_label == size_label));
    }

    /// Sum of snapshotted price x quantity across all lines.
    pub fn subtotal(&self) -> u64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Total unit count (the navbar badge).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn find_line_mut(&mut self, product_id: &ProductId, size_label: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == *product_id && line.size_label == size_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn catalog() -> Catalog {
        Catalog::seeded()
    }

    #[test]
    fn adding_same_product_and_size_twice_merges_into_one_line() {
        let catalog = catalog();
        let product = &catalog.products[0];
        let mut cart = Cart::default();

        cart.add(product, None);
        cart.add(product, None);

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn adding_two_sizes_of_one_product_opens_two_lines() {
        let catalog = catalog();
        let product = &catalog.products[0];
        let mut cart = Cart::default();

        cart.add(product, Some(&product.sizes[0]));
        cart.add(product, Some(&product.sizes[1]));

        assert_eq!(cart.lines.len(), 2);
        assert!(cart.lines.iter().all(|line| line.quantity == 1));
    }

    #[test]
    fn merge_keeps_the_original_price_snapshot() {
        let catalog = catalog();
        let mut product = catalog.products[0].clone();
        let mut cart = Cart::default();

        cart.add(&product, None);
        // Catalog price drifts mid-session; the open line must not re-price.
        product.sizes[0].price += 5000;
        cart.add(&product, None);

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].unit_price, 15000);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn quantity_never_drops_below_one() {
        let catalog = catalog();
        let product = &catalog.products[0];
        let mut cart = Cart::default();

        cart.add(product, None);
        cart.update_quantity(&product.id, &product.sizes[0].label, 2); // 3
        cart.update_quantity(&product.id, &product.sizes[0].label, -100);

        assert_eq!(cart.lines[0].quantity, 1);
    }

    #[test]
    fn update_on_missing_line_is_a_no_op() {
        let catalog = catalog();
        let product = &catalog.products[0];
        let mut cart = Cart::default();

        cart.update_quantity(&product.id, "50ml", 1);
        cart.remove(&product.id, "50ml");

        assert!(cart.is_empty());
    }

    #[test]
    fn remove_deletes_only_the_matching_line() {
        let catalog = catalog();
        let product = &catalog.products[0];
        let mut cart = Cart::default();

        cart.add(product, Some(&product.sizes[0]));
        cart.add(product, Some(&product.sizes[1]));
        cart.remove(&product.id, &product.sizes[0].label);

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].size_label, product.sizes[1].label);
    }

    #[test]
    fn subtotal_sums_price_times_quantity() {
        let catalog = catalog();
        let product = &catalog.products[0]; // 50ml at 15000
        let mut cart = Cart::default();

        cart.add(product, None);
        assert_eq!(cart.subtotal(), 15000);

        cart.update_quantity(&product.id, &product.sizes[0].label, 1);
        assert_eq!(cart.subtotal(), 30000);
        assert_eq!(cart.item_count(), 2);
    }
}
