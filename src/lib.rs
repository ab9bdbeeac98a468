pub mod config;
pub mod core;
pub mod input;
pub mod player;
pub mod scene;
pub mod world;
