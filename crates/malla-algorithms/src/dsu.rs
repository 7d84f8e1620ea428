//! Disjoint-set union (union-find) over dense indices.
//!
//! Array-of-parents representation with union by size and path halving,
//! giving near-constant amortized `find`/`union`. This is what makes
//! Kruskal run in O(E log E) overall instead of the O(E·V) a naive
//! membership scan over frozen vertex groups would cost.

/// Tracks a partition of `0..n` into disjoint sets.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
    set_count: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..n).collect(),
            size: vec![1; n],
            set_count: n,
        }
    }

    /// Root of the set containing `x`, compressing the path as it goes.
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns false if they were already the same set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return false;
        }
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra;
        self.size[ra] += self.size[rb];
        self.set_count -= 1;
        true
    }

    /// True if `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets currently tracked.
    pub fn set_count(&self) -> usize {
        self.set_count
    }
}
