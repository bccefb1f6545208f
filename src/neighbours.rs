// src/neighbours.rs
//
// Neighbour-index convention shared by every lattice kernel.
//
// For each site the neighbour array holds a fixed number of indices. On a
// cubic lattice the order is
//
//     -x, +x, -y, +y, -z, +z
//
// so the array reads | 0-x, 0+x, 0-y, 0+y, 0-z, 0+z, 1-x, 1+x, ... |.
// A negative entry means "no neighbour" (vacuum, free edge). Periodic wrap is
// already resolved when the array is built: a wrapped entry simply points at
// the opposite edge.

/// Marker written for a missing neighbour. Any negative value is treated the same.
pub const ABSENT: i32 = -1;

/// Neighbour slots of a simple cubic lattice.
pub const CUBIC_ARITY: usize = 6;

/// Slot order of the cubic neighbour array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    MinusX = 0,
    PlusX = 1,
    MinusY = 2,
    PlusY = 3,
    MinusZ = 4,
    PlusZ = 5,
}

impl Direction {
    pub const ALL: [Direction; CUBIC_ARITY] = [
        Direction::MinusX,
        Direction::PlusX,
        Direction::MinusY,
        Direction::PlusY,
        Direction::MinusZ,
        Direction::PlusZ,
    ];

    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Unit bond vector r̂ pointing from a site to this neighbour.
    #[inline]
    pub fn unit_vector(self) -> [f64; 3] {
        CUBIC_BOND_DIRECTIONS[self as usize]
    }
}

/// Bond unit vectors in cubic slot order.
pub const CUBIC_BOND_DIRECTIONS: [[f64; 3]; CUBIC_ARITY] = [
    [-1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, -1.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, -1.0],
    [0.0, 0.0, 1.0],
];

/// Which raw indices count as "no neighbour".
///
/// `Negative` is the lattice-wide convention. `NonPositive` additionally
/// drops index 0; it exists only to reproduce skyrmion-number results from
/// code that tested `> 0`, where site 0 is silently ignored as a neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeighbourSkip {
    #[default]
    Negative,
    NonPositive,
}

impl NeighbourSkip {
    #[inline]
    fn resolve(self, raw: i32) -> Option<usize> {
        let present = match self {
            NeighbourSkip::Negative => raw >= 0,
            NeighbourSkip::NonPositive => raw > 0,
        };
        present.then_some(raw as usize)
    }
}

/// Read-only view over a flat neighbour array of fixed arity.
#[derive(Debug, Clone, Copy)]
pub struct Neighbours<'a> {
    ids: &'a [i32],
    arity: usize,
}

impl<'a> Neighbours<'a> {
    pub fn new(ids: &'a [i32], arity: usize) -> Self {
        debug_assert!(arity > 0);
        debug_assert_eq!(ids.len() % arity, 0, "neighbour array not a multiple of arity");
        let view = Self { ids, arity };
        #[cfg(debug_assertions)]
        {
            let n = view.n_sites() as i64;
            debug_assert!(
                ids.iter().all(|&id| (id as i64) < n),
                "neighbour index out of range (n_sites = {n})"
            );
        }
        view
    }

    /// Six-neighbour view in `-x, +x, -y, +y, -z, +z` order.
    pub fn cubic(ids: &'a [i32]) -> Self {
        Self::new(ids, CUBIC_ARITY)
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    #[inline]
    pub fn n_sites(&self) -> usize {
        self.ids.len() / self.arity
    }

    /// Raw neighbour entry, sentinel included.
    #[inline]
    pub fn raw(&self, site: usize, slot: usize) -> i32 {
        debug_assert!(slot < self.arity);
        self.ids[self.arity * site + slot]
    }

    /// Neighbour in `slot`, `None` for a negative sentinel.
    #[inline]
    pub fn get(&self, site: usize, slot: usize) -> Option<usize> {
        self.get_with(site, slot, NeighbourSkip::Negative)
    }

    #[inline]
    pub fn get_with(&self, site: usize, slot: usize, skip: NeighbourSkip) -> Option<usize> {
        skip.resolve(self.raw(site, slot))
    }

    #[inline]
    pub fn dir(&self, site: usize, dir: Direction) -> Option<usize> {
        self.get(site, dir.slot())
    }

    /// Present neighbours of `site` as `(slot, index)` pairs.
    #[inline]
    pub fn iter(&self, site: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        let row = &self.ids[self.arity * site..self.arity * (site + 1)];
        row.iter()
            .enumerate()
            .filter_map(|(slot, &raw)| NeighbourSkip::Negative.resolve(raw).map(|id| (slot, id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Three sites on an open chain along x.
    const CHAIN: [i32; 18] = [
        -1, 1, -1, -1, -1, -1, //
        0, 2, -1, -1, -1, -1, //
        1, -1, -1, -1, -1, -1,
    ];

    #[test]
    fn negative_sentinel_means_absent() {
        let n = Neighbours::cubic(&CHAIN);
        assert_eq!(n.n_sites(), 3);
        assert_eq!(n.dir(0, Direction::MinusX), None);
        assert_eq!(n.dir(0, Direction::PlusX), Some(1));
        assert_eq!(n.dir(1, Direction::MinusX), Some(0));
        assert_eq!(n.dir(2, Direction::PlusX), None);
    }

    #[test]
    fn non_positive_rule_drops_site_zero() {
        let n = Neighbours::cubic(&CHAIN);
        assert_eq!(n.get_with(1, 0, NeighbourSkip::Negative), Some(0));
        assert_eq!(n.get_with(1, 0, NeighbourSkip::NonPositive), None);
        assert_eq!(n.get_with(1, 1, NeighbourSkip::NonPositive), Some(2));
    }

    #[test]
    fn iter_yields_only_present_slots() {
        let n = Neighbours::cubic(&CHAIN);
        let mid: Vec<_> = n.iter(1).collect();
        assert_eq!(mid, vec![(0, 0), (1, 2)]);
        assert_eq!(n.iter(2).count(), 1);
    }

    #[test]
    fn bond_vectors_are_antiparallel_in_pairs() {
        for pair in Direction::ALL.chunks(2) {
            let a = pair[0].unit_vector();
            let b = pair[1].unit_vector();
            for c in 0..3 {
                assert_eq!(a[c], -b[c]);
            }
        }
    }
}
