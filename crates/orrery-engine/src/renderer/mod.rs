pub mod arena;
pub mod instance;
pub mod paths;
pub mod points;
