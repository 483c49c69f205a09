use common::shapes::Circle;
use nalgebra::Vector2;
use rand::Rng;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        }
    }
}

// CSS form, ready for a canvas fill style.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A moving circular body. `id` is assigned by the `BodyStore`.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: u32,
    pub position: Vector2<f32>,
    pub radius: f32,
    pub velocity: Vector2<f32>,
    pub color: Color,
}

impl Body {
    pub fn circle(&self) -> Circle {
        Circle::new(self.position.x, self.position.y, self.radius)
    }
}
