//! Post-processing companion of the wavefunction simulation: renders the
//! probability density |psi|² of every saved snapshot into one PNG frame
//! per time step, for later assembly into an animation.

pub mod config;
pub mod heatmap;
pub mod layout;
pub mod render;
pub mod snapshot;
pub mod space;
