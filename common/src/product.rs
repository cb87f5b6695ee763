use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::review::Review;

/// Unique product identifier (assigned by the catalog source).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

/// Product category. Attars are concentrated oil-based fragrances and
/// come in smaller size/price tiers than spray perfumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Perfume,
    Attar,
}

impl ProductCategory {
    pub fn all() -> &'static [ProductCategory] {
        &[ProductCategory::Perfume, ProductCategory::Attar]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductCategory::Perfume => "Perfume",
            ProductCategory::Attar => "Attar",
        }
    }
}

/// The six scent-classification tags used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FragranceFamily {
    Floral,
    Woody,
    Fresh,
    Oriental,
    Spicy,
    Musky,
}

impl FragranceFamily {
    pub fn all() -> &'static [FragranceFamily] {
        &[
            FragranceFamily::Floral,
            FragranceFamily::Woody,
            FragranceFamily::Fresh,
            FragranceFamily::Oriental,
            FragranceFamily::Spicy,
            FragranceFamily::Musky,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            FragranceFamily::Floral => "Floral",
            FragranceFamily::Woody => "Woody",
            FragranceFamily::Fresh => "Fresh",
            FragranceFamily::Oriental => "Oriental",
            FragranceFamily::Spicy => "Spicy",
            FragranceFamily::Musky => "Musky",
        }
    }
}

/// Scent pyramid: ordered note lists from first impression to dry-down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScentNotes {
    pub top: Vec<String>,
    pub middle: Vec<String>,
    pub base: Vec<String>,
}

/// A purchasable size variant. Prices are whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSize {
    pub label: String,
    pub price: u64,
}

/// A catalog entry. Immutable after seeding except for review appension.
///
/// The sizes list is never empty; the first entry is the default size
/// whose price is shown on the catalog grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub description: String,
    pub category: ProductCategory,
    pub family: FragranceFamily,
    pub image_url: String,
    pub notes: ScentNotes,
    pub sizes: Vec<ProductSize>,
    pub reviews: Vec<Review>,
    pub date_added: NaiveDate,
    /// Static 0-100 sort key, not derived from tracked behavior.
    pub popularity: u8,
}

impl Product {
    /// The default size variant (first in the list).
    pub fn default_size(&self) -> &ProductSize {
        self.sizes.first().expect("sizes list is never empty")
    }

    /// Arithmetic mean of review ratings, or 0.0 when unreviewed.
    ///
    /// Callers must render 0.0 as "unrated", not as a valid score.
    pub fn average_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.reviews.iter().map(|r| r.rating as u32).sum();
        sum as f64 / self.reviews.len() as f64
    }

    pub fn review_count(&self) -> usize {
        self.reviews.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::{Review, ReviewId};

    fn dummy_product(ratings: &[u8]) -> Product {
        Product {
            id: ProductId("p-1".into()),
            name: "Test Oud".into(),
            brand: "Test House".into(),
            description: "".into(),
            category: ProductCategory::Perfume,
            family: FragranceFamily::Oriental,
            image_url: "".into(),
            notes: ScentNotes {
                top: vec![],
                middle: vec![],
                base: vec![],
            },
            sizes: vec![ProductSize {
                label: "50ml".into(),
                price: 15000,
            }],
            reviews: ratings
                .iter()
                .enumerate()
                .map(|(i, &rating)| Review {
                    id: ReviewId(format!("r-{i}")),
                    user_name: "You".into(),
                    rating,
                    comment: "nice".into(),
                    date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
                })
                .collect(),
            date_added: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap(),
            popularity: 90,
        }
    }

    #[test]
    fn average_rating_is_mean_of_ratings() {
        let product = dummy_product(&[5, 5, 4]);
        let avg = product.average_rating();
        assert!((avg - 4.666_666_666_666_667).abs() < 1e-9);
    }

    #[test]
    fn average_rating_is_zero_without_reviews() {
        let product = dummy_product(&[]);
        assert_eq!(product.average_rating(), 0.0);
    }

    #[test]
    fn default_size_is_first_entry() {
        let product = dummy_product(&[]);
        assert_eq!(product.default_size().label, "50ml");
        assert_eq!(product.default_size().price, 15000);
    }
}
