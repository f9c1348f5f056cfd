/*!
Union-find over a fixed number of elements, used to track which
auxiliary nodes of a cactus graph have been merged.

Unlike a rank-based union-find, the survivor of a union is always
the smaller representative, so merges are reproducible no matter the
order they are performed in. Path halving keeps `find` cheap.
*/

#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<usize>,
    sets: usize,
}

impl DisjointSets {
    pub fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            sets: size,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The number of disjoint sets remaining.
    #[inline]
    pub fn set_count(&self) -> usize {
        self.sets
    }

    #[inline]
    pub fn find(&mut self, mut id: usize) -> usize {
        while self.parent[id] != id {
            let grandparent = self.parent[self.parent[id]];
            self.parent[id] = grandparent;
            id = grandparent;
        }
        id
    }

    /// Like `find`, but without compressing paths.
    #[inline]
    pub fn find_immut(&self, mut id: usize) -> usize {
        while self.parent[id] != id {
            id = self.parent[id];
        }
        id
    }

    #[inline]
    pub fn same(&mut self, id_1: usize, id_2: usize) -> bool {
        self.find(id_1) == self.find(id_2)
    }

    /// Merge the sets containing `id_1` and `id_2`, returning the
    /// representative of the union, which is the smaller of the two
    /// previous representatives.
    #[inline]
    pub fn unite(&mut self, id_1: usize, id_2: usize) -> usize {
        let r_1 = self.find(id_1);
        let r_2 = self.find(id_2);

        if r_1 == r_2 {
            return r_1;
        }

        let (winner, loser) = if r_1 < r_2 { (r_1, r_2) } else { (r_2, r_1) };
        self.parent[loser] = winner;
        self.sets -= 1;
        winner
    }
}
