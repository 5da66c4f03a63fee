//! Enumeration of every partial cover of a [`SparseMatrix`](crate::matrix::SparseMatrix).
//!
//! This is a variant of Knuth's Algorithm X that removes only rows, never columns, so
//! it enumerates *partial* covers (pairwise column-disjoint row sets that need not cover
//! every column) rather than exact covers.

use crate::matrix::{ForeignNodeError, SparseMatrix};

/// Enumerates partial covers on top of a [`SparseMatrix`]'s remove/reinsert primitives.
pub struct CoverEnumerator;

impl CoverEnumerator {
    /// Returns every partial covering reachable downward from `start` (defaulting to the
    /// matrix's header), as the row payloads selected in each covering.
    ///
    /// The empty covering is always present. The matrix is restored to its exact
    /// pre-call state before this returns, link-for-link, regardless of how deep the
    /// search goes.
    pub fn covering_rows<R, C>(
        matrix: &mut SparseMatrix<R, C>,
        start: Option<usize>,
    ) -> Result<Vec<Vec<R>>, ForeignNodeError>
    where
        R: Clone,
    {
        let start = start.unwrap_or_else(|| matrix.head());
        matrix.rows(Some(start))?; // validates `start` belongs to this matrix
        Ok(Self::search(matrix, start))
    }

    fn search<R: Clone, C>(matrix: &mut SparseMatrix<R, C>, start: usize) -> Vec<Vec<R>> {
        let mut result = vec![Vec::new()];

        let mut r = matrix.down(start);
        while r != matrix.head() {
            let mut removals = Vec::new();

            // Collect and detach every row that shares a column with r.
            let mut x = matrix.right(r);
            while x != r {
                let col = matrix.col_of(x);
                let mut y = matrix.down(col);
                while y != col {
                    let y_next = matrix.down(y);
                    let conflicting_row = matrix.row_of(y);
                    if conflicting_row != r && matrix.is_attached(conflicting_row) {
                        matrix.detach_row(conflicting_row);
                        removals.push(conflicting_row);
                    }
                    y = y_next;
                }
                x = matrix.right(x);
            }

            // r itself must be detached last, so its own `down` pointer reflects the
            // next surviving row once conflicts are already gone.
            matrix.detach_row(r);
            removals.push(r);

            let selected = matrix.row_payload(r).expect("r is a row sentinel").clone();
            for mut covering in Self::search(matrix, r) {
                covering.push(selected.clone());
                result.push(covering);
            }

            while let Some(row) = removals.pop() {
                matrix.reattach_row(row);
            }

            r = matrix.down(r);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::SparseMatrix;
    use std::collections::HashSet;

    fn as_sets(coverings: Vec<Vec<i32>>) -> HashSet<Vec<i32>> {
        coverings
            .into_iter()
            .map(|mut c| {
                c.sort();
                c
            })
            .collect()
    }

    #[test]
    fn three_by_three_parity_matrix_matches_expected_coverings() {
        let mut mat = SparseMatrix::new(1..=3, 1..=3, |r: &i32, c: &i32| (r + c) % 2 == 0);
        let coverings = CoverEnumerator::covering_rows(&mut mat, None).unwrap();
        let got = as_sets(coverings);

        assert!(got.contains(&vec![]));
        assert!(got.contains(&vec![1]));
        assert!(got.contains(&vec![2]));
        assert!(got.contains(&vec![3]));
        assert!(got.contains(&vec![1, 2]));
        assert!(got.contains(&vec![2, 3]));
        assert!(!got.contains(&vec![1, 3]));
    }

    #[test]
    fn matrix_with_no_entries_yields_every_subset_of_rows() {
        let mut mat = SparseMatrix::new(vec!["a", "b"], Vec::<i32>::new(), |_: &&str, _: &i32| false);
        let coverings = CoverEnumerator::covering_rows(&mut mat, None).unwrap();
        assert_eq!(coverings.len(), 4); // 2^2 subsets, including the empty one
    }

    #[test]
    fn empty_matrix_yields_only_the_empty_covering() {
        let mut mat: SparseMatrix<i32, i32> = SparseMatrix::new(Vec::new(), Vec::new(), |_, _| false);
        let coverings = CoverEnumerator::covering_rows(&mut mat, None).unwrap();
        assert_eq!(coverings, vec![Vec::<i32>::new()]);
    }

    #[test]
    fn covering_rows_restores_the_matrix() {
        let mut mat = SparseMatrix::new(1..=4, 1..=4, |r: &i32, c: &i32| r == c || (r + c) % 3 == 0);
        let before = format!("{:?}", mat);
        CoverEnumerator::covering_rows(&mut mat, None).unwrap();
        let after = format!("{:?}", mat);
        assert_eq!(before, after);
    }

    #[test]
    fn foreign_start_node_is_rejected() {
        let mut mat = SparseMatrix::new(vec![1], vec![1], |_: &i32, _: &i32| true);
        assert!(CoverEnumerator::covering_rows(&mut mat, Some(12345)).is_err());
    }

    proptest::proptest! {
        #[test]
        fn every_covering_is_pairwise_column_disjoint_and_includes_empty(
            row_count in 0usize..6,
            col_count in 0usize..6,
            density in 0u32..100,
        ) {
            let rows: Vec<i32> = (0..row_count as i32).collect();
            let cols: Vec<i32> = (0..col_count as i32).collect();
            let mut mat = SparseMatrix::new(rows, cols, |r: &i32, c: &i32| {
                ((r * 13 + c * 7 + density as i32).unsigned_abs() % 100) < density
            });

            let coverings = CoverEnumerator::covering_rows(&mut mat, None).unwrap();
            proptest::prop_assert!(coverings.contains(&Vec::new()));

            for covering in &coverings {
                let mut seen = std::collections::HashSet::new();
                for &r in covering {
                    for c in 0..col_count as i32 {
                        if ((r * 13 + c * 7 + density as i32).unsigned_abs() % 100) < density {
                            proptest::prop_assert!(seen.insert(c), "covering must be column-disjoint");
                        }
                    }
                }
            }
        }

        #[test]
        fn covering_rows_restores_the_matrix_for_any_density(
            row_count in 0usize..6,
            col_count in 0usize..6,
            density in 0u32..100,
        ) {
            let rows: Vec<i32> = (0..row_count as i32).collect();
            let cols: Vec<i32> = (0..col_count as i32).collect();
            let mut mat = SparseMatrix::new(rows, cols, |r: &i32, c: &i32| {
                ((r * 13 + c * 7 + density as i32).unsigned_abs() % 100) < density
            });

            let before = format!("{:?}", mat);
            CoverEnumerator::covering_rows(&mut mat, None).unwrap();
            let after = format!("{:?}", mat);
            proptest::prop_assert_eq!(before, after);
        }
    }
}
