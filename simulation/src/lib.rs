pub mod body;
pub mod config;
pub mod error;
pub mod motion;
pub mod outcome;
pub mod present;
pub mod simulation;
pub mod store;

pub use body::{Body, Color};
pub use config::SimulationConfig;
pub use error::{SimulationError, SimulationResult};
pub use motion::{BounceIntegrator, Integrator};
pub use outcome::{CollisionPolicy, Outcome};
pub use present::{Frame, NullPresenter, Presenter};
pub use simulation::{check_time_step, Simulation, TickPhase, TickReport};
pub use store::BodyStore;
