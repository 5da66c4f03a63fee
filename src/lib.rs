//! Discount optimisation over a [dancing links] partial-cover search.
//!
//! [dancing links]: https://en.wikipedia.org/wiki/Dancing_Links
//!
//! Given an order and a library of deal rules, this crate finds the set of mutually
//! compatible discounts — discounts whose covered items are pairwise disjoint — whose
//! combined savings are maximal. The search is a variant of Knuth's Algorithm X that
//! only ever removes rows, never columns, so it enumerates every *partial* cover rather
//! than only exact ones; not every item has to end up discounted.
//!
//! # Basic example
//!
//! ```
//! use exact_cover_discounts::discount::{Discount, DealFactory, OrderItem};
//! use exact_cover_discounts::solver::DiscountSolver;
//!
//! let factory = DealFactory::new();
//! let deals = vec![
//!     factory.create("2-for-1, cheaper free", |order: &[OrderItem]| {
//!         let mut out = Vec::new();
//!         for i in 0..order.len() {
//!             for j in (i + 1)..order.len() {
//!                 let savings = order[i].price.min(order[j].price);
//!                 out.push(Discount::new("2-for-1", vec![order[i].item_id, order[j].item_id], savings));
//!             }
//!         }
//!         out
//!     }),
//! ];
//!
//! let order = vec![
//!     OrderItem::new(1, "Widget", 1000),
//!     OrderItem::new(2, "Gadget", 1500),
//! ];
//!
//! let chosen = DiscountSolver::solve(&deals, &order).unwrap();
//! assert_eq!(chosen.len(), 1);
//! assert_eq!(chosen[0].savings, 1000);
//! ```

pub mod cover;
pub mod discount;
pub mod error;
pub mod matrix;
pub mod solver;

pub use cover::CoverEnumerator;
pub use discount::{Deal, DealFactory, DealRule, Discount, OrderItem};
pub use error::MalformedDiscountError;
pub use matrix::{ForeignNodeError, SparseMatrix};
pub use solver::DiscountSolver;
