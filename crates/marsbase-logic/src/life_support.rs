//! Oxygen loop: electrolysis-driven O2 production and its water cost.

use serde::{Deserialize, Serialize};

use crate::brief::rates;

/// Oxygen produced per kWh of life-support energy (liters).
pub const O2_L_PER_KWH: f64 = 300.0;
/// Electrolysis feed water per 300 L batch of oxygen (liters).
pub const ELECTROLYSIS_WATER_L_PER_BATCH: f64 = 0.45;

/// One sol's oxygen account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OxygenBalance {
    pub need_l: f64,
    pub produced_l: f64,
    /// Unmet oxygen need (L, >= 0).
    pub deficit_l: f64,
    /// Water consumed by electrolysis, drawn from the reserve before the
    /// water ledger opens.
    pub electrolysis_water_l: f64,
}

/// Convert the life-support energy share into oxygen output.
pub fn compute_oxygen_balance(crew: u32, energy_kwh: f64) -> OxygenBalance {
    let need_l = rates::O2_L_PER_PERSON * crew as f64;
    let produced_l = O2_L_PER_KWH * energy_kwh;
    let deficit_l = (need_l - produced_l).max(0.0);
    // Water cost follows the O2 actually produced, not the energy spent.
    let electrolysis_water_l = (produced_l / O2_L_PER_KWH) * ELECTROLYSIS_WATER_L_PER_BATCH;
    OxygenBalance {
        need_l,
        produced_l,
        deficit_l,
        electrolysis_water_l,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_scales_with_energy() {
        let o2 = compute_oxygen_balance(4, 11.0);
        assert_eq!(o2.need_l, 2200.0);
        assert_eq!(o2.produced_l, 3300.0);
        assert_eq!(o2.deficit_l, 0.0);
        assert!((o2.electrolysis_water_l - 4.95).abs() < 1e-9);
    }

    #[test]
    fn test_no_energy_full_deficit() {
        let o2 = compute_oxygen_balance(4, 0.0);
        assert_eq!(o2.produced_l, 0.0);
        assert_eq!(o2.deficit_l, 2200.0);
        assert_eq!(o2.electrolysis_water_l, 0.0);
    }

    #[test]
    fn test_zero_crew_no_deficit() {
        let o2 = compute_oxygen_balance(0, 10.0);
        assert_eq!(o2.need_l, 0.0);
        assert_eq!(o2.produced_l, 3000.0);
        assert_eq!(o2.deficit_l, 0.0);
    }

    #[test]
    fn test_water_cost_tracks_production() {
        // 1 kWh makes one 300 L batch, costing one 0.45 L electrolysis feed
        let o2 = compute_oxygen_balance(1, 1.0);
        assert!((o2.electrolysis_water_l - 0.45).abs() < 1e-12);
    }
}
