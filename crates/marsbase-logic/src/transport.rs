//! Rover deployment and operational range.

use serde::{Deserialize, Serialize};

/// Baseline range contributed by each ready rover (km).
pub const RANGE_KM_PER_ROVER: f64 = 50.0;
/// Extra range per kWh granted to transport (km).
pub const RANGE_KM_PER_KWH: f64 = 2.0;

/// One sol's surface mobility account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RoverOps {
    pub deployed_rovers: u32,
    pub range_km: f64,
}

/// Ready the rover fleet and size its operational range.
///
/// A negative count reads as an empty garage. The energy term stays live
/// even though the current allocation policy grants transport 0 kWh, so
/// the assembled pipeline only ever sees the rover baseline.
pub fn compute_rover_ops(rover_count: i32, energy_kwh: f64) -> RoverOps {
    let deployed_rovers = rover_count.max(0) as u32;
    let range_km = RANGE_KM_PER_ROVER * deployed_rovers as f64 + RANGE_KM_PER_KWH * energy_kwh;
    RoverOps {
        deployed_rovers,
        range_km,
    }
}
