use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::product::{Product, ProductId};
use crate::review::{generate_review_id, Review, ReviewId};
use crate::session::SessionAccessor;

/// Embedded seed data from the catalog source. A remote-backed catalog
/// can replace this as long as it supplies the same `Product` shape.
const SEED_CATALOG: &str = include_str!("seed_catalog.json");

/// Author shown on reviews submitted from this session.
const REVIEW_AUTHOR: &str = "You";

/// The authoritative ordered product list. Source of truth for every
/// derived view; mutated only by review appension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The seed catalog shipped with the app.
    pub fn seeded() -> Self {
        let products: Vec<Product> =
            serde_json::from_str(SEED_CATALOG).expect("embedded seed catalog is valid");
        Self { products }
    }

    pub fn find(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == *id)
    }

    fn find_mut(&mut self, id: &ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == *id)
    }

    /// Distinct brand strings across the full catalog (never the filtered
    /// view), in first-appearance order.
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = Vec::new();
        for product in &self.products {
            if !brands.contains(&product.brand) {
                brands.push(product.brand.clone());
            }
        }
        brands
    }

    /// Append a review to a product, newest first.
    ///
    /// Rejected (returns `None`, state untouched) when the comment is
    /// empty after trimming, the rating is outside 1-5, no user is
    /// signed in, or the product id is unknown.
    pub fn submit_review(
        &mut self,
        session: &dyn SessionAccessor,
        product_id: &ProductId,
        rating: u8,
        comment: &str,
        today: NaiveDate,
    ) -> Option<ReviewId> {
        let comment = comment.trim();
        if comment.is_empty() || !(1..=5).contains(&rating) || !session.is_signed_in() {
            return None;
        }
        let product = self.find_mut(product_id)?;

        let review = Review {
            id: generate_review_id(),
            user_name: REVIEW_AUTHOR.into(),
            rating,
            comment: comment.to_string(),
            date: today,
        };
        let id = review.id.clone();
        product.reviews.insert(0, review);
        Some(id)
    }

    /// `submit_review` with today's date taken from the clock.
    #[cfg(feature = "std")]
    pub fn submit_review_today(
        &mut self,
        session: &dyn SessionAccessor,
        product_id: &ProductId,
        rating: u8,
        comment: &str,
    ) -> Option<ReviewId> {
        let today = chrono::Utc::now().date_naive();
        self.submit_review(session, product_id, rating, comment, today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::GuestSession;

    struct SignedIn;

    impl SessionAccessor for SignedIn {
        fn is_signed_in(&self) -> bool {
            true
        }

        fn display_name(&self) -> Option<String> {
            Some("Maki Irfan".into())
        }

        fn is_admin(&self) -> bool {
            false
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn seeded_catalog_holds_six_products_with_unique_ids_and_sizes() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.products.len(), 6);
        for product in &catalog.products {
            assert!(!product.sizes.is_empty(), "{} has no sizes", product.name);
            assert!(product.popularity <= 100);
        }
        let mut ids: Vec<_> = catalog.products.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn brands_are_deduplicated_in_first_appearance_order() {
        let catalog = Catalog::seeded();
        assert_eq!(
            catalog.brands(),
            vec!["Maki Signature".to_string(), "Royal Collection".to_string()]
        );
    }

    #[test]
    fn valid_review_is_prepended() {
        let mut catalog = Catalog::seeded();
        let id = ProductId("1".into());
        let before = catalog.find(&id).unwrap().reviews.len();

        let review_id = catalog
            .submit_review(&SignedIn, &id, 4, "  Lovely dry-down.  ", today())
            .expect("valid submission is accepted");

        let product = catalog.find(&id).unwrap();
        assert_eq!(product.reviews.len(), before + 1);
        assert_eq!(product.reviews[0].id, review_id);
        assert_eq!(product.reviews[0].comment, "Lovely dry-down.");
        assert_eq!(product.reviews[0].rating, 4);
        assert_eq!(product.reviews[0].user_name, "You");
    }

    #[test]
    fn blank_comment_is_rejected() {
        let mut catalog = Catalog::seeded();
        let id = ProductId("1".into());
        let before = catalog.find(&id).unwrap().reviews.len();

        assert!(catalog
            .submit_review(&SignedIn, &id, 5, "   \n\t ", today())
            .is_none());
        assert_eq!(catalog.find(&id).unwrap().reviews.len(), before);
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let mut catalog = Catalog::seeded();
        let id = ProductId("2".into());

        assert!(catalog.submit_review(&SignedIn, &id, 0, "ok", today()).is_none());
        assert!(catalog.submit_review(&SignedIn, &id, 6, "ok", today()).is_none());
        assert!(catalog.find(&id).unwrap().reviews.is_empty());
    }

    #[test]
    fn signed_out_submission_is_rejected() {
        let mut catalog = Catalog::seeded();
        let id = ProductId("1".into());
        let before = catalog.find(&id).unwrap().reviews.len();

        assert!(catalog
            .submit_review(&GuestSession, &id, 5, "great", today())
            .is_none());
        assert_eq!(catalog.find(&id).unwrap().reviews.len(), before);
    }

    #[test]
    fn unknown_product_is_a_no_op() {
        let mut catalog = Catalog::seeded();
        assert!(catalog
            .submit_review(&SignedIn, &ProductId("missing".into()), 5, "great", today())
            .is_none());
    }
}
