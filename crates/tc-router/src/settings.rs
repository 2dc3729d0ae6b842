//! Routing configuration.

use crate::{RouterError, RouterResult};

/// Uniform parameters for the whole network, supplied once at construction.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouterSettings {
    /// Bus speed in km/h.  Must be positive.
    pub bus_velocity_kmh:  f64,
    /// Time spent waiting before every boarding, in minutes.
    pub bus_wait_time_min: f64,
}

impl RouterSettings {
    /// Build validated settings.
    pub fn new(bus_velocity_kmh: f64, bus_wait_time_min: f64) -> RouterResult<Self> {
        let settings = Self { bus_velocity_kmh, bus_wait_time_min };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> RouterResult<()> {
        if !(self.bus_velocity_kmh.is_finite() && self.bus_velocity_kmh > 0.0) {
            return Err(RouterError::InvalidVelocity(self.bus_velocity_kmh));
        }
        if !(self.bus_wait_time_min.is_finite() && self.bus_wait_time_min >= 0.0) {
            return Err(RouterError::InvalidWaitTime(self.bus_wait_time_min));
        }
        Ok(())
    }

    /// Wait edge weight in seconds.
    #[inline]
    pub fn wait_secs(&self) -> f64 {
        self.bus_wait_time_min * 60.0
    }

    /// Bus speed in metres per second.
    #[inline]
    pub fn velocity_m_per_s(&self) -> f64 {
        self.bus_velocity_kmh * 1000.0 / 3600.0
    }

    /// Seconds needed to ride `metres`.
    #[inline]
    pub fn ride_secs(&self, metres: f64) -> f64 {
        metres / self.velocity_m_per_s()
    }
}
