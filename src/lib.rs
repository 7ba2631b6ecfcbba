pub mod constants;
pub mod control;
pub mod errors;
pub mod report;

pub use constants::*;
pub use control::bodies::{surface_gravity_of, CelestialBody, REFERENCE_BODIES};
pub use control::stage::{BodyTwr, StageCalculator, StageInputs, StagePerformance, StageResult};
pub use errors::CalculationError;

// Re-export commonly used items from the report module
pub use report::StageReport;
