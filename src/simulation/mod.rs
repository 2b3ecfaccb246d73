pub mod states;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod clock;
pub mod mode;
pub mod presets;
