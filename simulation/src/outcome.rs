use crate::body::{Body, Color};
use crate::store::BodyStore;
use fxhash::{FxHashMap, FxHashSet};
use quadtree::quadtree::CollisionPair;
use rand::Rng;

/// What happens to bodies that touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Both bodies take one fresh random color.
    #[default]
    Recolor,
    /// Both bodies leave the store. Bodies of the same color never collide.
    Despawn,
}

impl CollisionPolicy {
    /// Whether a pair of bodies can collide at all under this policy.
    pub fn admits(&self, a: &Body, b: &Body) -> bool {
        match self {
            CollisionPolicy::Recolor => true,
            CollisionPolicy::Despawn => a.color != b.color,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outcome {
    pub recolored: usize,
    /// Despawned ids, in the order their first pair was found.
    pub despawned: Vec<u32>,
}

/// Applies `policy` to the pairs found in one tick.
///
/// Each body is changed at most once per call, however many pairs it is in.
pub fn resolve<R: Rng>(
    policy: CollisionPolicy,
    pairs: &[CollisionPair],
    store: &mut BodyStore,
    rng: &mut R,
) -> Outcome {
    match policy {
        CollisionPolicy::Recolor => Outcome {
            recolored: recolor(pairs, store, rng),
            despawned: Vec::new(),
        },
        CollisionPolicy::Despawn => Outcome {
            recolored: 0,
            despawned: despawn(pairs, store),
        },
    }
}

// A pair whose bodies are both untouched gets a new shared color. If one of
// them was already recolored this tick, the other adopts that color.
fn recolor<R: Rng>(pairs: &[CollisionPair], store: &mut BodyStore, rng: &mut R) -> usize {
    let mut assigned: FxHashMap<u32, Color> = FxHashMap::default();
    for pair in pairs {
        let color = match (assigned.get(&pair.a), assigned.get(&pair.b)) {
            (Some(_), Some(_)) => continue,
            (Some(&color), None) | (None, Some(&color)) => color,
            (None, None) => Color::random(rng),
        };
        assigned.entry(pair.a).or_insert(color);
        assigned.entry(pair.b).or_insert(color);
    }

    let mut recolored = 0;
    for (id, color) in assigned {
        if let Some(body) = store.get_mut(id) {
            body.color = color;
            recolored += 1;
        }
    }
    recolored
}

fn despawn(pairs: &[CollisionPair], store: &mut BodyStore) -> Vec<u32> {
    let mut removed: FxHashSet<u32> = FxHashSet::default();
    let mut order = Vec::new();
    for pair in pairs {
        for id in [pair.a, pair.b] {
            if store.contains(id) && removed.insert(id) {
                order.push(id);
            }
        }
    }
    store.remove_many(&removed);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store_with_colors(colors: &[Color]) -> BodyStore {
        let mut store = BodyStore::new();
        for color in colors {
            store.spawn(Vector2::zeros(), 1.0, Vector2::zeros(), *color);
        }
        store
    }

    #[test]
    fn recolor_shares_one_color_per_group() {
        let black = Color::new(0, 0, 0);
        let mut store = store_with_colors(&[black; 4]);
        let pairs = [
            CollisionPair::new(0, 1),
            CollisionPair::new(1, 2),
            CollisionPair::new(0, 2),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = resolve(CollisionPolicy::Recolor, &pairs, &mut store, &mut rng);
        assert_eq!(outcome.recolored, 3);
        assert!(outcome.despawned.is_empty());

        let c0 = store.get(0).unwrap().color;
        assert_eq!(store.get(1).unwrap().color, c0);
        assert_eq!(store.get(2).unwrap().color, c0);
        assert_eq!(store.get(3).unwrap().color, black);
    }

    #[test]
    fn recolor_ignores_repeated_pairs() {
        let mut store = store_with_colors(&[Color::new(0, 0, 0); 2]);
        let once = [CollisionPair::new(0, 1)];
        let twice = [CollisionPair::new(0, 1), CollisionPair::new(1, 0)];

        let outcome = resolve(
            CollisionPolicy::Recolor,
            &once,
            &mut store,
            &mut StdRng::seed_from_u64(5),
        );
        let after_once = (store.get(0).unwrap().color, store.get(1).unwrap().color);

        let mut store = store_with_colors(&[Color::new(0, 0, 0); 2]);
        let outcome_twice = resolve(
            CollisionPolicy::Recolor,
            &twice,
            &mut store,
            &mut StdRng::seed_from_u64(5),
        );
        let after_twice = (store.get(0).unwrap().color, store.get(1).unwrap().color);

        assert_eq!(outcome, outcome_twice);
        assert_eq!(after_once, after_twice);
        assert_eq!(after_once.0, after_once.1);
    }

    #[test]
    fn despawn_removes_each_body_once() {
        let colors = [
            Color::new(255, 0, 0),
            Color::new(0, 255, 0),
            Color::new(0, 0, 255),
            Color::new(9, 9, 9),
        ];
        let mut store = store_with_colors(&colors);
        let pairs = [
            CollisionPair::new(0, 1),
            CollisionPair::new(1, 2),
            CollisionPair::new(0, 2),
        ];
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = resolve(CollisionPolicy::Despawn, &pairs, &mut store, &mut rng);
        assert_eq!(outcome.despawned, vec![0, 1, 2]);
        assert_eq!(outcome.recolored, 0);
        assert_eq!(store.len(), 1);
        assert!(store.contains(3));
    }

    #[test]
    fn despawn_admits_only_differing_colors() {
        let red = Color::new(255, 0, 0);
        let store = store_with_colors(&[red, red, Color::new(0, 0, 255)]);
        let a = store.get(0).unwrap().clone();
        let b = store.get(1).unwrap().clone();
        let c = store.get(2).unwrap().clone();
        assert!(!CollisionPolicy::Despawn.admits(&a, &b));
        assert!(CollisionPolicy::Despawn.admits(&a, &c));
        assert!(CollisionPolicy::Recolor.admits(&a, &b));
    }
}
