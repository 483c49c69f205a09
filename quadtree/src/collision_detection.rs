use crate::shapes::{Circle, Rectangle};

/// Inclusive overlap test: circles that touch count as colliding.
pub fn circle_circle(a: &Circle, b: &Circle) -> bool {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let distance_sq = dx * dx + dy * dy;
    let collision_distance = a.radius + b.radius;
    let collision_distance_sq = collision_distance * collision_distance;
    distance_sq <= collision_distance_sq
}

// Check that the circle's full bounding box is inside the rectangle
pub fn rectangle_contains_circle(rectangle: &Rectangle, circle: &Circle) -> bool {
    rectangle.contains_circle(circle.x, circle.y, circle.radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_circle_is_symmetric_and_inclusive() {
        let a = Circle::new(0.0, 0.0, 3.0);
        let b = Circle::new(6.0, 0.0, 3.0);
        assert!(circle_circle(&a, &b));
        assert!(circle_circle(&b, &a));

        let c = Circle::new(6.5, 0.0, 3.0);
        assert!(!circle_circle(&a, &c));
        assert!(!circle_circle(&c, &a));
    }

    #[test]
    fn rectangle_contains_circle_uses_closed_bounds() {
        let rect = Rectangle::new(0.0, 0.0, 10.0, 10.0);
        assert!(rectangle_contains_circle(&rect, &Circle::new(5.0, 5.0, 5.0)));
        assert!(!rectangle_contains_circle(&rect, &Circle::new(5.0, 5.0, 5.5)));
    }
}
