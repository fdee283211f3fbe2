//! Water ledger: withdrawals against the reserve, recycling, closing balance.
//!
//! Recycling recovers a fixed fraction of every withdrawal. The fraction is
//! a step function of the energy granted to the water subsystem: below the
//! pump-and-purification threshold, recovery drops from 80% to 60%. The
//! closing reserve is never clamped; a negative balance is the signal that
//! the settlement is drawing down faster than it recovers.

use serde::{Deserialize, Serialize};

use crate::brief::rates;

/// Fraction of withdrawals recovered when recycling is fully powered.
pub const RECYCLE_RATE_FULL: f64 = 0.8;
/// Recovery fraction when the water subsystem is underpowered.
pub const RECYCLE_RATE_DEGRADED: f64 = 0.6;
/// Energy the pumps and purifiers need for full recovery (kWh).
pub const RECYCLE_POWER_THRESHOLD_KWH: f64 = 8.0;

/// Whether the reserve survived the sol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReserveStatus {
    Stable,
    Depleting,
}

impl ReserveStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReserveStatus::Stable => "stable",
            ReserveStatus::Depleting => "depleting",
        }
    }
}

/// One sol's water account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaterLedger {
    /// Reserve at ledger open (L), already net of the electrolysis draw.
    pub opening_reserve_l: f64,
    /// Crew demand (L).
    pub base_demand_l: f64,
    /// Hydroponics withdrawal requested by food production (L).
    pub hydro_withdrawal_l: f64,
    pub total_withdrawal_l: f64,
    /// Effective recovery fraction, 0.8 or 0.6.
    pub recycle_rate: f64,
    pub recovered_l: f64,
    pub net_use_l: f64,
    /// Reserve at ledger close (L). May be negative, never clamped.
    pub closing_reserve_l: f64,
    pub status: ReserveStatus,
}

/// Recovery fraction for a given water-subsystem energy grant.
pub fn recycle_rate_for(energy_kwh: f64) -> f64 {
    if energy_kwh >= RECYCLE_POWER_THRESHOLD_KWH {
        RECYCLE_RATE_FULL
    } else {
        RECYCLE_RATE_DEGRADED
    }
}

/// Settle the sol's water account against the reserve.
pub fn compute_water_ledger(
    crew: u32,
    opening_reserve_l: f64,
    energy_kwh: f64,
    hydro_withdrawal_l: f64,
) -> WaterLedger {
    let base_demand_l = rates::WATER_L_PER_PERSON * crew as f64;
    let total_withdrawal_l = base_demand_l + hydro_withdrawal_l;

    let recycle_rate = recycle_rate_for(energy_kwh);
    let recovered_l = total_withdrawal_l * recycle_rate;
    let net_use_l = total_withdrawal_l - recovered_l;

    let closing_reserve_l = opening_reserve_l - net_use_l;
    let status = if closing_reserve_l >= 0.0 {
        ReserveStatus::Stable
    } else {
        ReserveStatus::Depleting
    };

    WaterLedger {
        opening_reserve_l,
        base_demand_l,
        hydro_withdrawal_l,
        total_withdrawal_l,
        recycle_rate,
        recovered_l,
        net_use_l,
        closing_reserve_l,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_recycling_above_threshold() {
        let ledger = compute_water_ledger(4, 1195.05, 12.0, 15.4);
        assert_eq!(ledger.recycle_rate, 0.8);
        assert!((ledger.total_withdrawal_l - 75.4).abs() < 1e-9);
        assert!((ledger.net_use_l - 15.08).abs() < 1e-9);
        assert!((ledger.closing_reserve_l - 1179.97).abs() < 1e-9);
        assert_eq!(ledger.status, ReserveStatus::Stable);
    }

    #[test]
    fn test_degraded_recycling_below_threshold() {
        let ledger = compute_water_ledger(6, 143.7, 6.0, 4.8);
        assert_eq!(ledger.recycle_rate, 0.6);
        assert!((ledger.net_use_l - 37.92).abs() < 1e-9);
        assert!((ledger.closing_reserve_l - 105.78).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        assert_eq!(recycle_rate_for(8.0), RECYCLE_RATE_FULL);
        assert_eq!(recycle_rate_for(7.999), RECYCLE_RATE_DEGRADED);
        assert_eq!(recycle_rate_for(0.0), RECYCLE_RATE_DEGRADED);
    }

    #[test]
    fn test_closing_reserve_goes_negative() {
        // 150 L of demand at 80% recovery: 30 L net against a 20 L reserve
        let ledger = compute_water_ledger(10, 20.0, 12.0, 0.0);
        assert!((ledger.closing_reserve_l - (-10.0)).abs() < 1e-9);
        assert_eq!(ledger.status, ReserveStatus::Depleting);
    }

    #[test]
    fn test_closing_identity() {
        let ledger = compute_water_ledger(3, 87.5, 9.0, 12.25);
        assert_eq!(
            ledger.closing_reserve_l,
            ledger.opening_reserve_l - ledger.net_use_l
        );
        assert_eq!(
            ledger.total_withdrawal_l,
            ledger.base_demand_l + ledger.hydro_withdrawal_l
        );
    }

    #[test]
    fn test_no_crew_no_base_demand() {
        let ledger = compute_water_ledger(0, 495.5, 12.0, 5.0);
        assert_eq!(ledger.base_demand_l, 0.0);
        assert!((ledger.closing_reserve_l - 494.5).abs() < 1e-9);
        assert_eq!(ledger.status, ReserveStatus::Stable);
    }
}
