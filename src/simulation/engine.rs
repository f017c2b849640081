//! High-level runtime engine settings
//!
//! Selects the integrator strategy and whether the driver records a
//! trajectory log while stepping.

use crate::configuration::config::IntegratorConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub integrator: IntegratorConfig, // euler or verlet
    pub record_trajectory: bool,      // keep positions for playback
}
