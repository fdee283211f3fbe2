//! Priority allocation of the sol's energy across the five subsystems.
//!
//! Total available energy (solar output plus the battery discharge
//! allowance) is split in strict priority order: life support first, then
//! water, food, comms, and transport. Each subsystem receives at most its
//! fixed minimum need, so energy beyond the sum of all minimums is left
//! unallocated. Subsystems at the back of the list are starved first when
//! energy runs short.

use serde::{Deserialize, Serialize};

/// Minimum per-sol energy budgets that keep each loop alive (kWh).
pub mod minimums {
    /// Life support never runs below this, regardless of crew.
    pub const LIFE_SUPPORT_FLOOR_KWH: f64 = 10.0;
    /// Crew-scaled life support budget: base plus a per-settler share.
    pub const LIFE_SUPPORT_BASE_KWH: f64 = 5.0;
    pub const LIFE_SUPPORT_PER_CREW_KWH: f64 = 1.5;
    /// Recycling pumps and purification.
    pub const WATER_KWH: f64 = 12.0;
    /// Growth lighting, irrigation pumps, and climate control.
    pub const FOOD_KWH: f64 = 25.0;
    /// Baseband plus the relay window.
    pub const COMMS_KWH: f64 = 6.0;
    /// Rovers run off their own cells; nothing is budgeted by default.
    pub const TRANSPORT_KWH: f64 = 0.0;
}

/// The five prioritized energy consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsystem {
    LifeSupport,
    Water,
    Food,
    Comms,
    Transport,
}

/// Allocation order. Earlier entries are starved last.
pub const PRIORITY_ORDER: [Subsystem; 5] = [
    Subsystem::LifeSupport,
    Subsystem::Water,
    Subsystem::Food,
    Subsystem::Comms,
    Subsystem::Transport,
];

impl Subsystem {
    /// Stable identifier for logs and harness output.
    pub fn name(self) -> &'static str {
        match self {
            Subsystem::LifeSupport => "life_support",
            Subsystem::Water => "water",
            Subsystem::Food => "food",
            Subsystem::Comms => "comms",
            Subsystem::Transport => "transport",
        }
    }

    /// Human-readable label for the text report.
    pub fn label(self) -> &'static str {
        match self {
            Subsystem::LifeSupport => "Life support",
            Subsystem::Water => "Water",
            Subsystem::Food => "Food",
            Subsystem::Comms => "Comms",
            Subsystem::Transport => "Transport",
        }
    }
}

/// Per-subsystem energy table (kWh), used for both needs and grants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubsystemEnergy {
    pub life_support: f64,
    pub water: f64,
    pub food: f64,
    pub comms: f64,
    pub transport: f64,
}

impl SubsystemEnergy {
    pub fn total(&self) -> f64 {
        self.life_support + self.water + self.food + self.comms + self.transport
    }

    pub fn get(&self, subsystem: Subsystem) -> f64 {
        match subsystem {
            Subsystem::LifeSupport => self.life_support,
            Subsystem::Water => self.water,
            Subsystem::Food => self.food,
            Subsystem::Comms => self.comms,
            Subsystem::Transport => self.transport,
        }
    }

    fn set(&mut self, subsystem: Subsystem, kwh: f64) {
        match subsystem {
            Subsystem::LifeSupport => self.life_support = kwh,
            Subsystem::Water => self.water = kwh,
            Subsystem::Food => self.food = kwh,
            Subsystem::Comms => self.comms = kwh,
            Subsystem::Transport => self.transport = kwh,
        }
    }
}

/// Result of one sol's energy allocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergyAllocation {
    /// Solar plus battery (kWh).
    pub total_kwh: f64,
    /// Energy granted to each subsystem, never above its minimum need.
    pub per_subsystem: SubsystemEnergy,
    /// How far total fell below the sum of minimum needs (kWh, >= 0).
    pub shortfall_kwh: f64,
}

/// Minimum needs for a given crew. Only life support scales with crew.
pub fn minimum_needs(crew: u32) -> SubsystemEnergy {
    use minimums::*;
    let life_support =
        LIFE_SUPPORT_FLOOR_KWH.max(LIFE_SUPPORT_BASE_KWH + LIFE_SUPPORT_PER_CREW_KWH * crew as f64);
    SubsystemEnergy {
        life_support,
        water: WATER_KWH,
        food: FOOD_KWH,
        comms: COMMS_KWH,
        transport: TRANSPORT_KWH,
    }
}

/// Grant each subsystem up to its need, in priority order.
///
/// Whatever remains after the last grant is headroom; it is not
/// distributed, so no subsystem ever receives more than its minimum
/// through this path.
fn allocate_in_priority_order(total_kwh: f64, needs: &SubsystemEnergy) -> SubsystemEnergy {
    let (granted, _headroom) = PRIORITY_ORDER.into_iter().fold(
        (SubsystemEnergy::default(), total_kwh),
        |(mut granted, remaining), subsystem| {
            let give = needs.get(subsystem).min(remaining);
            granted.set(subsystem, give);
            (granted, remaining - give)
        },
    );
    granted
}

/// Split the sol's available energy across the five subsystems.
pub fn compute_energy_allocation(solar_kwh: f64, battery_kwh: f64, crew: u32) -> EnergyAllocation {
    let total_kwh = solar_kwh + battery_kwh;
    let needs = minimum_needs(crew);
    let per_subsystem = allocate_in_priority_order(total_kwh, &needs);
    let shortfall_kwh = (needs.total() - total_kwh).max(0.0);
    EnergyAllocation {
        total_kwh,
        per_subsystem,
        shortfall_kwh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_needs_scale_with_crew() {
        assert_eq!(minimum_needs(0).life_support, 10.0); // floor wins below 4 crew
        assert_eq!(minimum_needs(4).life_support, 11.0); // 5 + 1.5 * 4
        assert_eq!(minimum_needs(6).life_support, 14.0);
        assert_eq!(minimum_needs(4).total(), 54.0);
    }

    #[test]
    fn test_ample_energy_grants_all_minimums() {
        let alloc = compute_energy_allocation(200.0, 20.0, 4);
        assert_eq!(alloc.total_kwh, 220.0);
        assert_eq!(alloc.per_subsystem.life_support, 11.0);
        assert_eq!(alloc.per_subsystem.water, 12.0);
        assert_eq!(alloc.per_subsystem.food, 25.0);
        assert_eq!(alloc.per_subsystem.comms, 6.0);
        assert_eq!(alloc.per_subsystem.transport, 0.0);
        assert_eq!(alloc.shortfall_kwh, 0.0);
    }

    #[test]
    fn test_headroom_is_not_distributed() {
        let alloc = compute_energy_allocation(1000.0, 0.0, 4);
        // 946 kWh of headroom stays unallocated
        assert_eq!(alloc.per_subsystem.total(), 54.0);
        assert_eq!(alloc.per_subsystem.transport, 0.0);
        assert_eq!(alloc.shortfall_kwh, 0.0);
    }

    #[test]
    fn test_scarce_energy_starves_low_priority_first() {
        let alloc = compute_energy_allocation(20.0, 0.0, 6);
        assert_eq!(alloc.per_subsystem.life_support, 14.0);
        assert_eq!(alloc.per_subsystem.water, 6.0);
        assert_eq!(alloc.per_subsystem.food, 0.0);
        assert_eq!(alloc.per_subsystem.comms, 0.0);
        assert_eq!(alloc.shortfall_kwh, 37.0); // 57 kWh needed, 20 available
    }

    #[test]
    fn test_zero_energy_grants_nothing() {
        let alloc = compute_energy_allocation(0.0, 0.0, 8);
        assert_eq!(alloc.per_subsystem.total(), 0.0);
        assert_eq!(alloc.shortfall_kwh, minimum_needs(8).total());
    }

    #[test]
    fn test_partial_grant_lands_on_priority_boundary() {
        // 11 + 12 = 23 covers life support and water exactly; food gets the rest
        let alloc = compute_energy_allocation(30.0, 0.0, 4);
        assert_eq!(alloc.per_subsystem.life_support, 11.0);
        assert_eq!(alloc.per_subsystem.water, 12.0);
        assert_eq!(alloc.per_subsystem.food, 7.0);
        assert_eq!(alloc.per_subsystem.comms, 0.0);
        assert_eq!(alloc.per_subsystem.transport, 0.0);
    }

    #[test]
    fn test_shares_never_exceed_needs_or_total() {
        for crew in [0u32, 1, 5, 12] {
            for total in [0.0, 13.0, 27.5, 54.0, 150.0] {
                let needs = minimum_needs(crew);
                let alloc = compute_energy_allocation(total, 0.0, crew);
                for subsystem in PRIORITY_ORDER {
                    assert!(
                        alloc.per_subsystem.get(subsystem) <= needs.get(subsystem),
                        "share above minimum for {} at crew={} total={}",
                        subsystem.name(),
                        crew,
                        total
                    );
                }
                assert!(
                    alloc.per_subsystem.total() <= total + 1e-9,
                    "grants exceed available at crew={} total={}",
                    crew,
                    total
                );
            }
        }
    }
}
