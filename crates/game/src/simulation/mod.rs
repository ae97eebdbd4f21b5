mod tick;

pub use tick::{DeltaTime, FixedTimestep, SimulationLoop, SimulationState};
