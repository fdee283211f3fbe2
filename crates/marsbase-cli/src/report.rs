//! Plain-text rendering of a [`SolReport`].
//!
//! Every function here is a pure formatter over the finished records; the
//! simulation never runs inside the reporter.

use marsbase_logic::energy::{minimum_needs, PRIORITY_ORDER};
use marsbase_logic::food::{YIELD_KG_PER_KWH, YIELD_KG_PER_M2};
use marsbase_logic::sim::SolReport;

/// ASCII map of how resources move between subsystems.
const FLOW_MAP: &str = "\
Resource/Data Flow Map
----------------------
   Solar/Battery --> ENERGY SYS --> {allocations to: Life, Water, Food, Comms, Transport}
           ENERGY --> LIFE SUPPORT --> uses water (electrolysis) --> O2 to Habitat
           ENERGY --> WATER SYS <---- hydroponics water draw request from FOOD
           ENERGY --> FOOD SYS  ----> biomass (food) to Habitat; water draw to WATER
           ENERGY --> COMMS ----> achieved uptime (ops data link)
           ENERGY --> TRANSPORT ----> rover range (km)
   HABITAT (crew demand): O2, Water, Food consumed; feedback -> next-sol planning
";

/// Render the full text report.
pub fn render(sol: &SolReport, with_flow_map: bool) -> String {
    let mut out = String::new();
    render_brief(sol, &mut out);
    render_energy(sol, &mut out);
    render_subsystems(sol, &mut out);
    if with_flow_map {
        out.push('\n');
        out.push_str(FLOW_MAP);
    }
    out.push('\n');
    render_summary(sol, &mut out);
    out.push_str(&format!(
        "\nSimulation complete: {}\n",
        sol.verdict.summary()
    ));
    out
}

fn render_brief(sol: &SolReport, out: &mut String) {
    out.push_str(&format!(
        "Mission Brief: Establishing survival base for {} crew members.\n",
        sol.brief.crew
    ));
    out.push_str(&format!(
        "Targets -> O2: {:.2} L/sol, Water: {:.2} L/sol, Food: {:.2} kg/sol.\n",
        sol.brief.o2_need_l, sol.brief.water_need_l, sol.brief.food_need_kg
    ));
}

fn render_energy(sol: &SolReport, out: &mut String) {
    out.push_str(&format!(
        "Energy System: {:.2} kWh available (Solar: {:.2}, Battery: {:.2}).\n",
        sol.energy.total_kwh, sol.input.solar_kwh, sol.input.battery_kwh
    ));
    for subsystem in PRIORITY_ORDER {
        out.push_str(&format!(
            "  • {} allocation: {:.2} kWh\n",
            subsystem.label(),
            sol.energy.per_subsystem.get(subsystem)
        ));
    }
    if sol.energy.shortfall_kwh > 0.0 {
        out.push_str(&format!(
            "  !! Energy shortfall: {:.2} kWh vs. minimal sol need {:.2} kWh\n",
            sol.energy.shortfall_kwh,
            minimum_needs(sol.input.crew).total()
        ));
    } else {
        out.push_str("  Energy status: Minimal priorities met.\n");
    }
}

fn render_subsystems(sol: &SolReport, out: &mut String) {
    out.push_str(&format!(
        "Life Support: O2 need {:.2} L; production {:.2} L using {:.2} kWh; deficit {:.2} L.\n",
        sol.oxygen.need_l,
        sol.oxygen.produced_l,
        sol.energy.per_subsystem.life_support,
        sol.oxygen.deficit_l
    ));
    out.push_str(&format!(
        "Food System: Need {:.2} kg; production {:.2} kg (area {:.2} + energy {:.2}); water draw {:.2} L; deficit {:.2} kg.\n",
        sol.food.need_kg,
        sol.food.produced_kg,
        YIELD_KG_PER_M2 * sol.input.greenhouse_area_m2,
        YIELD_KG_PER_KWH * sol.energy.per_subsystem.food,
        sol.food.water_draw_l,
        sol.food.deficit_kg
    ));
    out.push_str(&format!(
        "Water System: Demand {:.2} L (crew {:.2} + hydro {:.2}); recycling {:.0}% -> recovered {:.2} L; net use {:.2} L; reserve -> {:.2} L ({}).\n",
        sol.water.total_withdrawal_l,
        sol.water.base_demand_l,
        sol.water.hydro_withdrawal_l,
        sol.water.recycle_rate * 100.0,
        sol.water.recovered_l,
        sol.water.net_use_l,
        sol.water.closing_reserve_l,
        sol.water.status.as_str()
    ));
    out.push_str(&format!(
        "Comms: Required {:.2} h; achieved {:.2} h with {:.2} kWh; shortfall {:.2} h.\n",
        sol.comms.required_h,
        sol.comms.achieved_h,
        sol.energy.per_subsystem.comms,
        sol.comms.shortfall_h
    ));
    out.push_str(&format!(
        "Transport: {} rover(s) ready; operational range {:.2} km given {:.2} kWh.\n",
        sol.transport.deployed_rovers,
        sol.transport.range_km,
        sol.energy.per_subsystem.transport
    ));
}

fn render_summary(sol: &SolReport, out: &mut String) {
    out.push_str("Essential Resources Summary\n");
    out.push_str("---------------------------\n");
    out.push_str(&format!(
        "OXYGEN -> need {:.2} L, produced {:.2} L, deficit {:.2} L, water used {:.2} L.\n",
        sol.oxygen.need_l,
        sol.oxygen.produced_l,
        sol.oxygen.deficit_l,
        sol.oxygen.electrolysis_water_l
    ));
    out.push_str(&format!(
        "WATER  -> opening {:.2} L, net use {:.2} L, closing {:.2} L (status: {}).\n",
        sol.input.water_reserve_l,
        sol.water.net_use_l,
        sol.water.closing_reserve_l,
        sol.water.status.as_str()
    ));
    out.push_str(&format!(
        "ENERGY -> total {:.2} kWh, shortfall {:.2} kWh.\n",
        sol.energy.total_kwh, sol.energy.shortfall_kwh
    ));
    out.push_str(&format!(
        "FOOD   -> need {:.2} kg, produced {:.2} kg, deficit {:.2} kg.\n",
        sol.food.need_kg, sol.food.produced_kg, sol.food.deficit_kg
    ));
    out.push_str(&format!(
        "COMMS  -> required {:.2} h, achieved {:.2} h, shortfall {:.2} h.\n",
        sol.comms.required_h, sol.comms.achieved_h, sol.comms.shortfall_h
    ));
    out.push_str(&format!(
        "TRANSPORT -> rovers {}, range {:.2} km.\n",
        sol.transport.deployed_rovers, sol.transport.range_km
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use marsbase_logic::input::SimulationInput;
    use marsbase_logic::sim::simulate_sol;

    fn nominal_report() -> SolReport {
        simulate_sol(&SimulationInput {
            crew: 4,
            solar_kwh: 200.0,
            battery_kwh: 20.0,
            water_reserve_l: 1200.0,
            greenhouse_area_m2: 180.0,
            rover_count: 1,
            required_comms_uptime_h: 12.0,
        })
    }

    #[test]
    fn test_render_covers_every_section() {
        let text = render(&nominal_report(), true);
        assert!(text.contains("Mission Brief: Establishing survival base for 4 crew members."));
        assert!(text.contains("Energy System: 220.00 kWh available"));
        assert!(text.contains("Life support allocation: 11.00 kWh"));
        assert!(text.contains("Life Support: O2 need 2200.00 L"));
        assert!(text.contains("Water System:"));
        assert!(text.contains("Resource/Data Flow Map"));
        assert!(text.contains("Essential Resources Summary"));
        assert!(text.contains("Simulation complete:"));
    }

    #[test]
    fn test_quiet_render_skips_flow_map() {
        let text = render(&nominal_report(), false);
        assert!(!text.contains("Resource/Data Flow Map"));
        assert!(text.contains("Essential Resources Summary"));
    }

    #[test]
    fn test_summary_reports_raw_opening_reserve() {
        // The ledger opens after the electrolysis draw; the summary shows
        // the reserve as the operator entered it.
        let text = render(&nominal_report(), false);
        assert!(text.contains("WATER  -> opening 1200.00 L"));
    }

    #[test]
    fn test_shortfall_warning_appears_when_starved() {
        let sol = simulate_sol(&SimulationInput {
            crew: 6,
            solar_kwh: 20.0,
            battery_kwh: 0.0,
            water_reserve_l: 150.0,
            greenhouse_area_m2: 60.0,
            rover_count: 1,
            required_comms_uptime_h: 16.0,
        });
        let text = render(&sol, false);
        assert!(text.contains("!! Energy shortfall: 37.00 kWh"));
        assert!(!text.contains("Minimal priorities met"));
    }

    #[test]
    fn test_verdict_sentence_closes_the_report() {
        let text = render(&nominal_report(), false);
        assert!(text.ends_with(&format!(
            "Simulation complete: {}\n",
            nominal_report().verdict.summary()
        )));
    }
}
