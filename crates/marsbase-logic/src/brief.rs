//! Per-sol survival targets derived from crew size.
//!
//! The brief is computed once at the top of a run and read by every
//! downstream subsystem. The per-person rates live in [`rates`] so that a
//! subsystem re-deriving a need from crew size uses the same constants.

use serde::{Deserialize, Serialize};

/// Per-person daily consumption rates.
pub mod rates {
    /// Breathable oxygen per settler per sol (liters).
    pub const O2_L_PER_PERSON: f64 = 550.0;
    /// Drinking, hygiene, and cooking water per settler per sol (liters),
    /// before recycling recovery.
    pub const WATER_L_PER_PERSON: f64 = 15.0;
    /// Fresh food mass per settler per sol (kilograms).
    pub const FOOD_KG_PER_PERSON: f64 = 3.0;
}

/// Survival targets for one sol.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MissionBrief {
    pub crew: u32,
    /// Oxygen the whole crew must breathe (L/sol).
    pub o2_need_l: f64,
    /// Water the whole crew draws before recycling (L/sol).
    pub water_need_l: f64,
    /// Fresh food mass the whole crew consumes (kg/sol).
    pub food_need_kg: f64,
}

/// Derive the survival targets for a crew.
pub fn compute_mission_brief(crew: u32) -> MissionBrief {
    MissionBrief {
        crew,
        o2_need_l: rates::O2_L_PER_PERSON * crew as f64,
        water_need_l: rates::WATER_L_PER_PERSON * crew as f64,
        food_need_kg: rates::FOOD_KG_PER_PERSON * crew as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_scale_with_crew() {
        let brief = compute_mission_brief(4);
        assert_eq!(brief.crew, 4);
        assert_eq!(brief.o2_need_l, 2200.0);
        assert_eq!(brief.water_need_l, 60.0);
        assert_eq!(brief.food_need_kg, 12.0);
    }

    #[test]
    fn test_zero_crew_zero_targets() {
        let brief = compute_mission_brief(0);
        assert_eq!(brief.o2_need_l, 0.0);
        assert_eq!(brief.water_need_l, 0.0);
        assert_eq!(brief.food_need_kg, 0.0);
    }
}
