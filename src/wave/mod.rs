pub mod evaluator;
pub mod params;

pub use evaluator::{displacement_at, superpose, wave, wave_into, WaveTerm};
pub use params::{ParamTuple, WaveParams};
