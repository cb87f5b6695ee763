use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::product::{FragranceFamily, Product, ProductCategory};

/// Sort order for the collection grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Popular,
    Newest,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        &[
            SortKey::Popular,
            SortKey::Newest,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Popular => "Most Popular",
            SortKey::Newest => "Newest Arrivals",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
        }
    }
}

/// The user's active filters and sort order. `None` means "All" for each
/// filter dimension; the three are independent and AND-ed together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub category: Option<ProductCategory>,
    pub family: Option<FragranceFamily>,
    pub brand: Option<String>,
    pub sort: SortKey,
}

impl Selection {
    /// Reset every filter dimension, keeping the sort order.
    pub fn clear_filters(&mut self) {
        self.category = None;
        self.family = None;
        self.brand = None;
    }

    pub fn matches(&self, product: &Product) -> bool {
        let category_ok = self.category.map_or(true, |c| product.category == c);
        let family_ok = self.family.map_or(true, |f| product.family == f);
        let brand_ok = self
            .brand
            .as_deref()
            .map_or(true, |b| product.brand == b);
        category_ok && family_ok && brand_ok
    }

    /// Filter the catalog (in catalog order), then sort by the active
    /// key. Price sorts use the default (first) size, matching the price
    /// shown on the grid. Ties have no explicit secondary key.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        let mut result: Vec<&Product> = catalog
            .products
            .iter()
            .filter(|p| self.matches(p))
            .collect();

        match self.sort {
            SortKey::Popular => result.sort_by(|a, b| b.popularity.cmp(&a.popularity)),
            SortKey::Newest => result.sort_by(|a, b| b.date_added.cmp(&a.date_added)),
            SortKey::PriceAsc => result.sort_by_key(|p| p.default_size().price),
            SortKey::PriceDesc => {
                result.sort_by(|a, b| b.default_size().price.cmp(&a.default_size().price))
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.0.clone()).collect()
    }

    #[test]
    fn default_selection_shows_everything_most_popular_first() {
        let catalog = Catalog::seeded();
        let selection = Selection::default();

        let view = selection.apply(&catalog);
        assert_eq!(view.len(), 6);
        for pair in view.windows(2) {
            assert!(pair[0].popularity >= pair[1].popularity);
        }
    }

    #[test]
    fn category_filter_keeps_only_matching_products_in_catalog_order() {
        let catalog = Catalog::seeded();
        let selection = Selection {
            category: Some(ProductCategory::Perfume),
            sort: SortKey::Popular,
            ..Selection::default()
        };

        let view = selection.apply(&catalog);
        assert_eq!(view.len(), 4);
        assert!(view.iter().all(|p| p.category == ProductCategory::Perfume));

        // Pre-sort, filtering preserves catalog-relative order.
        let unsorted: Vec<&Product> = catalog
            .products
            .iter()
            .filter(|p| selection.matches(p))
            .collect();
        assert_eq!(ids(&unsorted), vec!["1", "2", "4", "6"]);
    }

    #[test]
    fn filters_are_a_conjunction() {
        let catalog = Catalog::seeded();
        let selection = Selection {
            category: Some(ProductCategory::Perfume),
            family: Some(FragranceFamily::Floral),
            brand: Some("Maki Signature".into()),
            sort: SortKey::Popular,
        };

        let view = selection.apply(&catalog);
        assert_eq!(ids(&view), vec!["2", "4"]);

        // A mismatch in any single dimension excludes the product.
        let wrong_brand = Selection {
            brand: Some("Royal Collection".into()),
            ..selection
        };
        assert!(wrong_brand.apply(&catalog).is_empty());
    }

    #[test]
    fn price_desc_sorts_strictly_by_first_size_price() {
        let catalog = Catalog::seeded();
        let selection = Selection {
            sort: SortKey::PriceDesc,
            ..Selection::default()
        };

        let prices: Vec<u64> = selection
            .apply(&catalog)
            .iter()
            .map(|p| p.default_size().price)
            .collect();
        assert_eq!(prices, vec![15000, 13000, 10000, 9000, 4500, 3000]);
    }

    #[test]
    fn price_asc_is_the_reverse_ordering() {
        let catalog = Catalog::seeded();
        let selection = Selection {
            sort: SortKey::PriceAsc,
            ..Selection::default()
        };

        let prices: Vec<u64> = selection
            .apply(&catalog)
            .iter()
            .map(|p| p.default_size().price)
            .collect();
        assert_eq!(prices, vec![3000, 4500, 9000, 10000, 13000, 15000]);
    }

    #[test]
    fn newest_sorts_by_creation_date_descending() {
        let catalog = Catalog::seeded();
        let selection = Selection {
            sort: SortKey::Newest,
            ..Selection::default()
        };

        let view = selection.apply(&catalog);
        for pair in view.windows(2) {
            assert!(pair[0].date_added >= pair[1].date_added);
        }
        assert_eq!(view[0].id.0, "4"); // 2024-01-10
    }

    #[test]
    fn clear_filters_keeps_the_sort_order() {
        let mut selection = Selection {
            category: Some(ProductCategory::Attar),
            family: Some(FragranceFamily::Musky),
            brand: Some("Royal Collection".into()),
            sort: SortKey::PriceAsc,
        };

        selection.clear_filters();
        assert_eq!(selection.category, None);
        assert_eq!(selection.family, None);
        assert_eq!(selection.brand, None);
        assert_eq!(selection.sort, SortKey::PriceAsc);
    }
}
