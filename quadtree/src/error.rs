use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadtreeError {
    InvalidRectangleDims { width: f32, height: f32 },
    InvalidCircleRadius { radius: f32 },
    InvalidCircleCenter { x: f32, y: f32 },
    CircleOutOfBounds {
        x: f32,
        y: f32,
        radius: f32,
        bounds_min_x: f32,
        bounds_min_y: f32,
        bounds_max_x: f32,
        bounds_max_y: f32,
    },
    DuplicateValue { value: u32 },
    InvalidConfig { reason: &'static str },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;

impl fmt::Display for QuadtreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadtreeError::InvalidRectangleDims { width, height } => {
                write!(
                    f,
                    "rectangle width/height must be finite and positive (width: {}, height: {})",
                    width, height
                )
            }
            QuadtreeError::InvalidCircleRadius { radius } => {
                write!(
                    f,
                    "circle radius must be finite and positive (radius: {})",
                    radius
                )
            }
            QuadtreeError::InvalidCircleCenter { x, y } => {
                write!(f, "circle center must be finite (x: {}, y: {})", x, y)
            }
            QuadtreeError::CircleOutOfBounds {
                x,
                y,
                radius,
                bounds_min_x,
                bounds_min_y,
                bounds_max_x,
                bounds_max_y,
            } => {
                write!(
                    f,
                    "circle must lie within quadtree bounds (x: {}, y: {}, radius: {}, bounds_min_x: {}, bounds_min_y: {}, bounds_max_x: {}, bounds_max_y: {})",
                    x, y, radius, bounds_min_x, bounds_min_y, bounds_max_x, bounds_max_y
                )
            }
            QuadtreeError::DuplicateValue { value } => {
                write!(f, "value {} is already stored in the quadtree", value)
            }
            QuadtreeError::InvalidConfig { reason } => {
                write!(f, "invalid quadtree config: {}", reason)
            }
        }
    }
}

impl std::error::Error for QuadtreeError {}
