//! A four-way-linked sparse boolean matrix used as the substrate for partial-cover search.
//!
//! If you are looking for the search itself, see the [`cover`](crate::cover) module.

/// A single node of [`SparseMatrix`].
///
/// Every node plays one of four roles, distinguished structurally rather than by a tag:
/// the header is its own row and column, a row sentinel is its own row but points `col`
/// at the header, a column sentinel is its own column but points `row` at the header, and
/// an entry is neither.
#[derive(Debug, Default, Clone, Copy)]
struct Node {
    up: usize,
    down: usize,
    left: usize,
    right: usize,
    row: usize,
    col: usize,
}

/// An error returned when an iteration anchor does not belong to the matrix it is used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignNodeError;

impl std::fmt::Display for ForeignNodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node does not belong to this matrix")
    }
}

impl std::error::Error for ForeignNodeError {}

/// A four-way circular doubly-linked sparse boolean matrix.
///
/// Rows hold payloads of type `R`, columns hold payloads of type `C`. Row sentinels are
/// threaded into a ring anchored at the header along the `up`/`down` axis; column
/// sentinels are threaded into the dual ring along `left`/`right`. Each row sentinel
/// additionally anchors the horizontal ring of its own entries, and each column
/// sentinel anchors the vertical ring of its own entries.
#[derive(Debug)]
pub struct SparseMatrix<R, C> {
    nodes: Vec<Node>,
    row_data: Vec<Option<R>>,
    col_data: Vec<Option<C>>,
    head: usize,
}

impl<R, C> SparseMatrix<R, C> {
    const HEAD: usize = 0;

    /// Builds a matrix from row payloads, column payloads, and a predicate `p(row, col)`
    /// that decides whether an entry exists there.
    ///
    /// Iteration is outer-over-rows, inner-over-columns, in the order given, so every
    /// inserted entry is the bottom-right-most in its row and column at insertion time
    /// and each splice is O(1).
    pub fn new<I, J, P>(rows: I, cols: J, p: P) -> Self
    where
        I: IntoIterator<Item = R>,
        J: IntoIterator<Item = C>,
        P: Fn(&R, &C) -> bool,
    {
        let mut mat = SparseMatrix {
            nodes: vec![Node {
                up: Self::HEAD,
                down: Self::HEAD,
                left: Self::HEAD,
                right: Self::HEAD,
                row: Self::HEAD,
                col: Self::HEAD,
            }],
            row_data: vec![None],
            col_data: vec![None],
            head: Self::HEAD,
        };

        let mut row_ids = Vec::new();
        for r in rows {
            let id = mat.create_node(0, 0);
            mat.nodes[id].row = id;
            mat.nodes[id].col = mat.head;
            mat.row_data[id] = Some(r);
            mat.insert_up(mat.head, id);
            row_ids.push(id);
        }

        let mut col_ids = Vec::new();
        for c in cols {
            let id = mat.create_node(0, 0);
            mat.nodes[id].col = id;
            mat.nodes[id].row = mat.head;
            mat.col_data[id] = Some(c);
            mat.insert_left(mat.head, id);
            col_ids.push(id);
        }

        for &r in &row_ids {
            let mut left_node = r;
            for &c in &col_ids {
                let matches = {
                    let rd = mat.row_data[r].as_ref().unwrap();
                    let cd = mat.col_data[c].as_ref().unwrap();
                    p(rd, cd)
                };
                if !matches {
                    continue;
                }
                let e = mat.create_node(r, c);
                mat.insert_down(mat.nodes[c].up, e);
                mat.insert_right(left_node, e);
                left_node = e;
            }
        }

        mat
    }

    /// The header node, the unique root of the matrix.
    pub fn head(&self) -> usize {
        self.head
    }

    /// Returns a reference to the row payload carried by row sentinel `r`, or `None` if
    /// `r` is not a row sentinel.
    pub fn row_payload(&self, r: usize) -> Option<&R> {
        self.row_data.get(r).and_then(|o| o.as_ref())
    }

    /// Returns a reference to the column payload carried by column sentinel `c`, or
    /// `None` if `c` is not a column sentinel.
    pub fn col_payload(&self, c: usize) -> Option<&C> {
        self.col_data.get(c).and_then(|o| o.as_ref())
    }

    /// Lazily yields the row sentinels reachable downward from `from` (defaulting to the
    /// header), in the matrix's current attached order. Excludes `from` itself.
    pub fn rows(&self, from: Option<usize>) -> Result<impl Iterator<Item = usize> + '_, ForeignNodeError> {
        let start = from.unwrap_or(self.head);
        self.check_owned(start)?;
        Ok(self.ring(start, |n| n.down))
    }

    /// Lazily yields the column sentinels reachable rightward from `from` (defaulting to
    /// the header), in the matrix's current attached order. Excludes `from` itself.
    pub fn cols(&self, from: Option<usize>) -> Result<impl Iterator<Item = usize> + '_, ForeignNodeError> {
        let start = from.unwrap_or(self.head);
        self.check_owned(start)?;
        Ok(self.ring(start, |n| n.right))
    }

    /// Removes row sentinel `r`, and every entry in its horizontal ring, from their
    /// vertical rings. Horizontal links are untouched, so the row's own shape survives
    /// intact for [`reattach_row`](Self::reattach_row) to restore later.
    pub(crate) fn detach_row(&mut self, r: usize) {
        let mut n = r;
        loop {
            let up = self.nodes[n].up;
            let down = self.nodes[n].down;
            self.nodes[up].down = down;
            self.nodes[down].up = up;
            n = self.nodes[n].right;
            if n == r {
                break;
            }
        }
    }

    /// Inverse of [`detach_row`](Self::detach_row). Must be called with the same row
    /// that was most recently (and not yet reattached) detached, restoring links in
    /// LIFO order relative to any other detaches made in between.
    pub(crate) fn reattach_row(&mut self, r: usize) {
        let mut n = r;
        loop {
            let up = self.nodes[n].up;
            let down = self.nodes[n].down;
            self.nodes[up].down = n;
            self.nodes[down].up = n;
            n = self.nodes[n].right;
            if n == r {
                break;
            }
        }
    }

    /// The row (or column) immediately downward (or rightward) from `n`. Used by the
    /// cover enumerator to walk the attached rows without going through `rows`'s
    /// iterator-allocation overhead.
    pub(crate) fn down(&self, n: usize) -> usize {
        self.nodes[n].down
    }

    pub(crate) fn right(&self, n: usize) -> usize {
        self.nodes[n].right
    }

    pub(crate) fn col_of(&self, entry: usize) -> usize {
        self.nodes[entry].col
    }

    pub(crate) fn row_of(&self, entry: usize) -> usize {
        self.nodes[entry].row
    }

    /// Returns true iff all four reciprocal link invariants hold for `n`, i.e. `n` is
    /// currently spliced into the matrix rather than detached.
    pub(crate) fn is_attached(&self, n: usize) -> bool {
        let node = self.nodes[n];
        self.nodes[node.up].down == n
            && self.nodes[node.down].up == n
            && self.nodes[node.left].right == n
            && self.nodes[node.right].left == n
    }

    fn ring<'a>(&'a self, start: usize, step: impl Fn(&Node) -> usize + 'a) -> impl Iterator<Item = usize> + 'a {
        let mut current = start;
        std::iter::from_fn(move || {
            let next = step(&self.nodes[current]);
            if next == start {
                None
            } else {
                current = next;
                Some(next)
            }
        })
    }

    /// Checks that `n` belongs to this matrix by walking `n.row.col` and comparing it
    /// against the header; this holds for every role (header, row sentinel, column
    /// sentinel, entry) of a node that genuinely belongs here.
    fn check_owned(&self, n: usize) -> Result<(), ForeignNodeError> {
        let row = self.nodes.get(n).ok_or(ForeignNodeError)?.row;
        let col = self.nodes.get(row).ok_or(ForeignNodeError)?.col;
        if col == self.head {
            Ok(())
        } else {
            Err(ForeignNodeError)
        }
    }

    fn create_node(&mut self, row: usize, col: usize) -> usize {
        let idx = self.nodes.len();
        self.nodes.push(Node {
            row,
            col,
            up: idx,
            down: idx,
            left: idx,
            right: idx,
        });
        self.row_data.push(None);
        self.col_data.push(None);
        idx
    }

    fn insert_right(&mut self, at: usize, node: usize) {
        let right = self.nodes[at].right;
        self.nodes[node].right = right;
        self.nodes[right].left = node;
        self.nodes[node].left = at;
        self.nodes[at].right = node;
    }

    fn insert_down(&mut self, at: usize, node: usize) {
        let down = self.nodes[at].down;
        self.nodes[node].down = down;
        self.nodes[down].up = node;
        self.nodes[node].up = at;
        self.nodes[at].down = node;
    }

    /// Splices `node` in as the new `up` neighbour of `at`, i.e. its new immediate
    /// vertical predecessor. Used to grow the header's row-sentinel ring.
    fn insert_up(&mut self, at: usize, node: usize) {
        let up = self.nodes[at].up;
        self.nodes[node].up = up;
        self.nodes[up].down = node;
        self.nodes[node].down = at;
        self.nodes[at].up = node;
    }

    /// Splices `node` in as the new `left` neighbour of `at`. Used to grow the header's
    /// column-sentinel ring.
    fn insert_left(&mut self, at: usize, node: usize) {
        let left = self.nodes[at].left;
        self.nodes[node].left = left;
        self.nodes[left].right = node;
        self.nodes[node].right = at;
        self.nodes[at].left = node;
    }
}
