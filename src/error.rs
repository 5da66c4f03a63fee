//! Errors surfaced across the crate's public operations.

use std::fmt;

pub use crate::matrix::ForeignNodeError;

/// Returned when a deal rule produces a [`Discount`](crate::discount::Discount) that
/// violates its contract: an item_id outside the order, or negative savings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedDiscountError {
    /// The discount referenced an item_id not present in the order it was applied to.
    UnknownItem { deal_name: String, discount_name: String, item_id: u64 },
    /// The discount's savings were negative.
    NegativeSavings { deal_name: String, discount_name: String, savings: i64 },
}

impl fmt::Display for MalformedDiscountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedDiscountError::UnknownItem { deal_name, discount_name, item_id } => write!(
                f,
                "deal {deal_name:?} produced discount {discount_name:?} referencing item {item_id}, which is not in the order"
            ),
            MalformedDiscountError::NegativeSavings { deal_name, discount_name, savings } => write!(
                f,
                "deal {deal_name:?} produced discount {discount_name:?} with negative savings ({savings})"
            ),
        }
    }
}

impl std::error::Error for MalformedDiscountError {}
