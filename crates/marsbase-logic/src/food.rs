//! Hydroponic food production, rationed by the water actually available.

use serde::{Deserialize, Serialize};

use crate::brief::rates;

/// Base yield per square meter of growing area (kg/sol).
pub const YIELD_KG_PER_M2: f64 = 0.04;
/// Additional yield per kWh granted to the food subsystem (kg/sol).
pub const YIELD_KG_PER_KWH: f64 = 0.02;
/// Hydroponics water drawn per kilogram produced (liters).
pub const WATER_L_PER_KG: f64 = 2.0;

/// One sol's food account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FoodBalance {
    pub need_kg: f64,
    pub produced_kg: f64,
    /// Unmet food need (kg, >= 0).
    pub deficit_kg: f64,
    /// Water withdrawal handed to the water ledger (liters).
    pub water_draw_l: f64,
}

/// Grow biomass from area and energy, capped by available water.
///
/// `water_available_l` is the provisional ceiling the orchestrator
/// supplies. When water binds, production scales down linearly and the
/// draw consumes everything available; there is no hard cutoff.
pub fn compute_food_balance(
    crew: u32,
    greenhouse_area_m2: f64,
    energy_kwh: f64,
    water_available_l: f64,
) -> FoodBalance {
    let need_kg = rates::FOOD_KG_PER_PERSON * crew as f64;
    let raw_kg = YIELD_KG_PER_M2 * greenhouse_area_m2 + YIELD_KG_PER_KWH * energy_kwh;
    let water_needed_l = WATER_L_PER_KG * raw_kg;

    let (produced_kg, water_draw_l) = if water_needed_l > water_available_l {
        let scale = if water_needed_l > 0.0 {
            water_available_l / water_needed_l
        } else {
            0.0
        };
        (raw_kg * scale, water_available_l)
    } else {
        (raw_kg, water_needed_l)
    };

    let deficit_kg = (need_kg - produced_kg).max(0.0);
    FoodBalance {
        need_kg,
        produced_kg,
        deficit_kg,
        water_draw_l,
    }
}
