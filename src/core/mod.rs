pub mod container;
pub mod curve;
pub mod deform;
pub mod helix;
pub mod params;
pub mod reaction;
pub mod stability;
