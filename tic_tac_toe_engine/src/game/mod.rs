pub mod computer;
pub mod engine;
pub mod models;
pub mod players;
