use super::*;
use crate::collision_detection;
use crate::shapes::Circle;
use fxhash::FxHashSet;

/// Two colliding values, stored with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    pub a: u32,
    pub b: u32,
}

impl CollisionPair {
    pub fn new(first: u32, second: u32) -> Self {
        if first <= second {
            Self { a: first, b: second }
        } else {
            Self { a: second, b: first }
        }
    }
}

/// Finds colliding pairs by querying a `QuadTree` once per circle.
///
/// Buffers are kept between calls, so one engine can serve every tick.
#[derive(Default)]
pub struct CollisionEngine {
    candidates: Vec<Resident>,
    seen: FxHashSet<CollisionPair>,
    pairs: Vec<CollisionPair>,
}

impl CollisionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every pair of overlapping circles among `circles`, each pair once.
    ///
    /// Pairs come back in discovery order, which follows the order of
    /// `circles`.
    pub fn find_pairs<I>(&mut self, tree: &QuadTree, circles: I) -> &[CollisionPair]
    where
        I: IntoIterator<Item = (u32, Circle)>,
    {
        self.find_pairs_filtered(tree, circles, |_, _| true)
    }

    /// Like `find_pairs`, but only keeps pairs for which `filter` holds.
    pub fn find_pairs_filtered<I, F>(
        &mut self,
        tree: &QuadTree,
        circles: I,
        mut filter: F,
    ) -> &[CollisionPair]
    where
        I: IntoIterator<Item = (u32, Circle)>,
        F: FnMut(u32, u32) -> bool,
    {
        self.seen.clear();
        self.pairs.clear();

        for (value, circle) in circles {
            self.candidates.clear();
            tree.query(value, &circle, &mut self.candidates);

            for candidate in self.candidates.iter() {
                if candidate.value == value
                    || !collision_detection::circle_circle(&circle, &candidate.circle)
                {
                    continue;
                }
                let pair = CollisionPair::new(value, candidate.value);
                if self.seen.contains(&pair) || !filter(pair.a, pair.b) {
                    continue;
                }
                self.seen.insert(pair);
                self.pairs.push(pair);
            }
        }

        &self.pairs
    }

    pub fn pairs(&self) -> &[CollisionPair] {
        &self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_canonical() {
        assert_eq!(CollisionPair::new(7, 3), CollisionPair::new(3, 7));
        let pair = CollisionPair::new(9, 2);
        assert_eq!((pair.a, pair.b), (2, 9));
    }
}
