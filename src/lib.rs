//! Helicoil: an interactive, parameter-driven double-helix animation.
//!
//! The core is a deterministic procedural-geometry generator plus a per-frame
//! deformation function; the egui viewer is a thin caller that feeds it a
//! parameter snapshot and a time value each tick.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod pipeline;
pub mod session;
pub mod ui;
