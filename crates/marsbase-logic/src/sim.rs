//! Single-sol orchestration: subsystem sequencing and the stability verdict.
//!
//! Stages run in a fixed order so that every cross-subsystem hand-off is
//! explicit: the energy table feeds everything, life support's electrolysis
//! draw and food's withdrawal request both land in the water ledger, and
//! the verdict reads only the finished records.
//!
//! # Water settles in two passes
//!
//! Food production is capped against the opening reserve before the
//! electrolysis draw is taken out; the ledger then settles against the
//! reduced reserve using food's actual withdrawal. The food cap therefore
//! sees slightly more water than the ledger will. This two-pass
//! approximation is part of the model's contract, and downstream code must
//! not collapse it into a single consistent pass.

use serde::{Deserialize, Serialize};

use crate::brief::{compute_mission_brief, MissionBrief};
use crate::comms::{compute_comms_uptime, CommsUptime};
use crate::energy::{compute_energy_allocation, EnergyAllocation};
use crate::food::{compute_food_balance, FoodBalance};
use crate::input::SimulationInput;
use crate::life_support::{compute_oxygen_balance, OxygenBalance};
use crate::transport::{compute_rover_ops, RoverOps};
use crate::water::{compute_water_ledger, ReserveStatus, WaterLedger};

/// Overall stability classification for the sol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Life-critical resources met and the energy minimums fully funded.
    AllStable,
    /// Life-critical resources met, but the energy budget fell short.
    CriticalStableOptimize,
    /// At least one life-critical resource is in deficit.
    CriticalDeficit,
}

impl Verdict {
    /// The one-line verdict sentence for reports.
    pub fn summary(self) -> &'static str {
        match self {
            Verdict::AllStable => "All systems stable.",
            Verdict::CriticalStableOptimize => {
                "Critical life-support stable; optimize energy and operations."
            }
            Verdict::CriticalDeficit => "Critical deficits present – reallocate or reduce load.",
        }
    }
}

/// Everything one simulated sol produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolReport {
    pub input: SimulationInput,
    pub brief: MissionBrief,
    pub energy: EnergyAllocation,
    pub oxygen: OxygenBalance,
    pub food: FoodBalance,
    pub water: WaterLedger,
    pub comms: CommsUptime,
    pub transport: RoverOps,
    pub verdict: Verdict,
}

/// Classify the sol from the finished subsystem records.
///
/// Comms and transport are operational concerns and never gate the
/// verdict. Deficits come out of `max(0, ..)` clamps, so comparing
/// against exactly 0.0 is well-defined.
pub fn assess_verdict(
    oxygen: &OxygenBalance,
    water: &WaterLedger,
    food: &FoodBalance,
    energy: &EnergyAllocation,
) -> Verdict {
    let critical_ok = oxygen.deficit_l == 0.0
        && water.status == ReserveStatus::Stable
        && food.deficit_kg == 0.0;
    if critical_ok && energy.shortfall_kwh == 0.0 {
        Verdict::AllStable
    } else if critical_ok {
        Verdict::CriticalStableOptimize
    } else {
        Verdict::CriticalDeficit
    }
}

/// Run one sol.
pub fn simulate_sol(input: &SimulationInput) -> SolReport {
    let brief = compute_mission_brief(input.crew);
    let energy = compute_energy_allocation(input.solar_kwh, input.battery_kwh, input.crew);
    let shares = energy.per_subsystem;

    let oxygen = compute_oxygen_balance(input.crew, shares.life_support);

    // Provisional ceiling: the opening reserve, untouched by the sol's
    // electrolysis draw.
    let food = compute_food_balance(
        input.crew,
        input.greenhouse_area_m2,
        shares.food,
        input.water_reserve_l,
    );

    // Settlement: electrolysis comes off the reserve first, then the ledger
    // nets crew demand and food's withdrawal.
    let water = compute_water_ledger(
        input.crew,
        input.water_reserve_l - oxygen.electrolysis_water_l,
        shares.water,
        food.water_draw_l,
    );

    let comms = compute_comms_uptime(input.required_comms_uptime_h, shares.comms);
    let transport = compute_rover_ops(input.rover_count, shares.transport);

    let verdict = assess_verdict(&oxygen, &water, &food, &energy);

    SolReport {
        input: *input,
        brief,
        energy,
        oxygen,
        food,
        water,
        comms,
        transport,
        verdict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nominal_input() -> SimulationInput {
        SimulationInput {
            crew: 4,
            solar_kwh: 200.0,
            battery_kwh: 20.0,
            water_reserve_l: 1200.0,
            greenhouse_area_m2: 180.0,
            rover_count: 1,
            required_comms_uptime_h: 12.0,
        }
    }

    #[test]
    fn test_nominal_sol_numbers() {
        let sol = simulate_sol(&nominal_input());
        assert_eq!(sol.energy.total_kwh, 220.0);
        assert_eq!(sol.energy.shortfall_kwh, 0.0);
        assert_eq!(sol.oxygen.produced_l, 3300.0);
        assert_eq!(sol.oxygen.deficit_l, 0.0);
        assert!((sol.food.produced_kg - 7.7).abs() < 1e-9);
        assert!((sol.food.deficit_kg - 4.3).abs() < 1e-9);
        assert!((sol.water.closing_reserve_l - 1179.97).abs() < 1e-6);
        assert_eq!(sol.water.status, ReserveStatus::Stable);
        assert_eq!(sol.comms.achieved_h, 12.0);
        assert_eq!(sol.transport.range_km, 50.0);
        // Food is the one deficit keeping this sol critical
        assert_eq!(sol.verdict, Verdict::CriticalDeficit);
    }

    #[test]
    fn test_uncrewed_sol_is_all_stable() {
        let input = SimulationInput {
            crew: 0,
            solar_kwh: 60.0,
            battery_kwh: 0.0,
            water_reserve_l: 500.0,
            greenhouse_area_m2: 50.0,
            rover_count: 0,
            required_comms_uptime_h: 6.0,
        };
        let sol = simulate_sol(&input);
        assert_eq!(sol.energy.shortfall_kwh, 0.0);
        assert_eq!(sol.oxygen.deficit_l, 0.0);
        assert_eq!(sol.food.deficit_kg, 0.0);
        assert!((sol.water.closing_reserve_l - 494.5).abs() < 1e-9);
        assert_eq!(sol.verdict, Verdict::AllStable);
    }

    #[test]
    fn test_energy_starved_sol_is_critical() {
        let input = SimulationInput {
            crew: 6,
            solar_kwh: 20.0,
            battery_kwh: 0.0,
            water_reserve_l: 150.0,
            greenhouse_area_m2: 60.0,
            rover_count: 1,
            required_comms_uptime_h: 16.0,
        };
        let sol = simulate_sol(&input);
        assert_eq!(sol.energy.shortfall_kwh, 37.0);
        assert_eq!(sol.energy.per_subsystem.life_support, 14.0);
        assert_eq!(sol.energy.per_subsystem.water, 6.0);
        assert_eq!(sol.energy.per_subsystem.food, 0.0);
        assert_eq!(sol.oxygen.deficit_l, 0.0); // 4200 L produced vs 3300 L needed
        assert!((sol.food.deficit_kg - 15.6).abs() < 1e-9);
        assert_eq!(sol.water.recycle_rate, 0.6);
        assert_eq!(sol.comms.achieved_h, 0.0);
        assert_eq!(sol.verdict, Verdict::CriticalDeficit);
    }

    #[test]
    fn test_optimize_verdict_when_only_energy_short() {
        // Life-critical loops hold; the budget does not
        let input = SimulationInput {
            crew: 0,
            solar_kwh: 40.0,
            battery_kwh: 0.0,
            water_reserve_l: 400.0,
            greenhouse_area_m2: 10.0,
            rover_count: 0,
            required_comms_uptime_h: 0.0,
        };
        let sol = simulate_sol(&input);
        assert!(sol.energy.shortfall_kwh > 0.0);
        assert_eq!(sol.oxygen.deficit_l, 0.0);
        assert_eq!(sol.food.deficit_kg, 0.0);
        assert_eq!(sol.water.status, ReserveStatus::Stable);
        assert_eq!(sol.verdict, Verdict::CriticalStableOptimize);
    }

    #[test]
    fn test_food_caps_against_pre_electrolysis_reserve() {
        // Huge greenhouse, tiny reserve: food may draw the full opening
        // reserve even though electrolysis settles first in the ledger.
        let input = SimulationInput {
            crew: 0,
            solar_kwh: 100.0,
            battery_kwh: 0.0,
            water_reserve_l: 10.0,
            greenhouse_area_m2: 1000.0,
            rover_count: 0,
            required_comms_uptime_h: 0.0,
        };
        let sol = simulate_sol(&input);
        assert_eq!(sol.food.water_draw_l, 10.0);
        assert!((sol.water.opening_reserve_l - 5.5).abs() < 1e-9);
        assert!((sol.water.closing_reserve_l - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_transport_share_is_always_zero() {
        let sol = simulate_sol(&nominal_input());
        assert_eq!(sol.energy.per_subsystem.transport, 0.0);
        // Range is the rover baseline alone
        assert_eq!(sol.transport.range_km, 50.0);
    }

    #[test]
    fn test_depleting_reserve_forces_critical() {
        let input = SimulationInput {
            crew: 10,
            solar_kwh: 500.0,
            battery_kwh: 0.0,
            water_reserve_l: 25.0,
            greenhouse_area_m2: 10000.0,
            rover_count: 0,
            required_comms_uptime_h: 0.0,
        };
        let sol = simulate_sol(&input);
        assert_eq!(sol.water.status, ReserveStatus::Depleting);
        assert!(sol.water.closing_reserve_l < 0.0);
        assert_eq!(sol.verdict, Verdict::CriticalDeficit);
    }

    #[test]
    fn test_comms_shortfall_does_not_gate_verdict() {
        // Uncrewed sol with an unfundable comms ask stays AllStable
        let input = SimulationInput {
            crew: 0,
            solar_kwh: 60.0,
            battery_kwh: 0.0,
            water_reserve_l: 500.0,
            greenhouse_area_m2: 50.0,
            rover_count: 0,
            required_comms_uptime_h: 1000.0,
        };
        let sol = simulate_sol(&input);
        assert!(sol.comms.shortfall_h > 0.0);
        assert_eq!(sol.verdict, Verdict::AllStable);
    }
}
