use quadtree::QuadtreeError;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    InvalidConfig { reason: String },
    InvalidTimeStep { dt: f32 },
    Quadtree(QuadtreeError),
}

pub type SimulationResult<T> = Result<T, SimulationError>;

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidConfig { reason } => {
                write!(f, "invalid simulation config: {}", reason)
            }
            SimulationError::InvalidTimeStep { dt } => {
                write!(f, "time step must be finite and non-negative (dt: {})", dt)
            }
            SimulationError::Quadtree(err) => write!(f, "spatial index error: {}", err),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::Quadtree(err) => Some(err),
            SimulationError::InvalidConfig { .. } | SimulationError::InvalidTimeStep { .. } => None,
        }
    }
}

impl From<QuadtreeError> for SimulationError {
    fn from(err: QuadtreeError) -> Self {
        SimulationError::Quadtree(err)
    }
}
