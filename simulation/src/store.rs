use crate::body::{Body, Color};
use common::shapes::{Circle, Rectangle};
use fxhash::{FxHashMap, FxHashSet};
use nalgebra::Vector2;
use rand::Rng;

/// Ordered collection of bodies with stable ids.
///
/// Ids are handed out in increasing order and never reused, so a removed
/// body's id cannot alias a later one within the same store.
#[derive(Debug, Default)]
pub struct BodyStore {
    bodies: Vec<Body>,
    index: FxHashMap<u32, usize>,
    next_id: u32,
}

impl BodyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(
        &mut self,
        position: Vector2<f32>,
        radius: f32,
        velocity: Vector2<f32>,
        color: Color,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.index.insert(id, self.bodies.len());
        self.bodies.push(Body {
            id,
            position,
            radius,
            velocity,
            color,
        });
        id
    }

    /// Spawns a body with a random radius, velocity and color fully inside
    /// `bounds`.
    pub fn spawn_random<R: Rng>(
        &mut self,
        rng: &mut R,
        bounds: &Rectangle,
        radius_min: f32,
        radius_max: f32,
        speed_max: f32,
    ) -> u32 {
        let radius = if radius_min < radius_max {
            rng.gen_range(radius_min..=radius_max)
        } else {
            radius_min
        };
        let (x, y) = bounds.get_random_circle_coords_inside(radius, rng);
        let velocity = if speed_max > 0.0 {
            Vector2::new(
                rng.gen_range(-speed_max..=speed_max),
                rng.gen_range(-speed_max..=speed_max),
            )
        } else {
            Vector2::zeros()
        };
        let color = Color::random(rng);
        self.spawn(Vector2::new(x, y), radius, velocity, color)
    }

    pub fn get(&self, id: u32) -> Option<&Body> {
        self.index.get(&id).map(|&i| &self.bodies[i])
    }

    pub fn get_mut(&mut self, id: u32) -> Option<&mut Body> {
        match self.index.get(&id) {
            Some(&i) => self.bodies.get_mut(i),
            None => None,
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.index.contains_key(&id)
    }

    /// Removes one body, keeping the order of the rest.
    pub fn remove(&mut self, id: u32) -> Option<Body> {
        let position = self.index.remove(&id)?;
        let body = self.bodies.remove(position);
        self.reindex_from(position);
        Some(body)
    }

    /// Removes every body in `ids`, keeping the order of the rest. Returns how
    /// many were removed.
    pub fn remove_many(&mut self, ids: &FxHashSet<u32>) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|body| !ids.contains(&body.id));
        let removed = before - self.bodies.len();
        if removed > 0 {
            self.index.clear();
            self.reindex_from(0);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn as_slice(&self) -> &[Body] {
        &self.bodies
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Body> {
        self.bodies.iter_mut()
    }

    /// `(id, circle)` for every body, in store order.
    pub fn circles(&self) -> impl Iterator<Item = (u32, Circle)> + '_ {
        self.bodies.iter().map(|body| (body.id, body.circle()))
    }

    fn reindex_from(&mut self, start: usize) {
        for (i, body) in self.bodies.iter().enumerate().skip(start) {
            self.index.insert(body.id, i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn store_with(count: usize) -> BodyStore {
        let mut store = BodyStore::new();
        for i in 0..count {
            store.spawn(
                Vector2::new(i as f32, 0.0),
                1.0,
                Vector2::zeros(),
                Color::new(0, 0, 0),
            );
        }
        store
    }

    #[test]
    fn ids_are_not_reused() {
        let mut store = store_with(3);
        assert!(store.remove(2).is_some());
        let id = store.spawn(Vector2::zeros(), 1.0, Vector2::zeros(), Color::new(1, 1, 1));
        assert_eq!(id, 3);
    }

    #[test]
    fn remove_keeps_order_and_index() {
        let mut store = store_with(5);
        assert_eq!(store.remove(1).map(|b| b.id), Some(1));
        assert!(store.remove(1).is_none());
        let ids: Vec<u32> = store.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![0, 2, 3, 4]);
        for id in ids {
            assert_eq!(store.get(id).map(|b| b.id), Some(id));
        }
    }

    #[test]
    fn remove_many_reindexes() {
        let mut store = store_with(6);
        let ids: FxHashSet<u32> = [0, 3, 5, 42].into_iter().collect();
        assert_eq!(store.remove_many(&ids), 3);
        let remaining: Vec<u32> = store.iter().map(|b| b.id).collect();
        assert_eq!(remaining, vec![1, 2, 4]);
        assert_eq!(store.get(4).map(|b| b.position.x), Some(4.0));
        assert!(!store.contains(3));
    }

    #[test]
    fn spawn_random_stays_inside() {
        let mut rng = StdRng::seed_from_u64(9);
        let bounds = Rectangle::new(0.0, 0.0, 200.0, 100.0);
        let mut store = BodyStore::new();
        for _ in 0..200 {
            let id = store.spawn_random(&mut rng, &bounds, 2.0, 6.0, 50.0);
            let body = store.get(id).unwrap();
            assert!(bounds.contains(&body.circle()));
            assert!(body.radius >= 2.0 && body.radius <= 6.0);
            assert!(body.velocity.x.abs() <= 50.0 && body.velocity.y.abs() <= 50.0);
        }
        assert_eq!(store.len(), 200);
    }
}
