pub mod alphabet;
pub mod api;
pub mod config;
pub mod cracker;
pub mod error;
pub mod frequency;
pub mod keyed;
pub mod mapping;
pub mod optimizer;
pub mod scorer;
// cmd and reports are binary modules (see main.rs).
