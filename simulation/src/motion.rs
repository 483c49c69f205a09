use crate::body::Body;
use common::shapes::Rectangle;

/// Advances one body by one tick. Called for every body before reindexing.
pub trait Integrator {
    fn advance(&mut self, body: &mut Body, bounds: &Rectangle, dt: f32);
}

/// Straight-line motion that bounces off the plane's walls.
///
/// After the step a body that crossed a wall is pushed back inside and its
/// velocity component along that axis points away from the wall.
#[derive(Debug, Default, Clone, Copy)]
pub struct BounceIntegrator;

impl Integrator for BounceIntegrator {
    fn advance(&mut self, body: &mut Body, bounds: &Rectangle, dt: f32) {
        body.position += body.velocity * dt;
        let r = body.radius;

        if body.position.x - r < bounds.left() {
            body.position.x = bounds.left() + r;
            body.velocity.x = body.velocity.x.abs();
        } else if body.position.x + r > bounds.right() {
            body.position.x = bounds.right() - r;
            body.velocity.x = -body.velocity.x.abs();
        }

        if body.position.y - r < bounds.top() {
            body.position.y = bounds.top() + r;
            body.velocity.y = body.velocity.y.abs();
        } else if body.position.y + r > bounds.bottom() {
            body.position.y = bounds.bottom() - r;
            body.velocity.y = -body.velocity.y.abs();
        }
    }
}
