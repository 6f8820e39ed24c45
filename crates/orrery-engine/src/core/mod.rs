pub mod rng;
pub mod scene;
