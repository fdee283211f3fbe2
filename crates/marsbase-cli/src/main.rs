//! marsbase: single-sol resource simulator for a Mars settlement.
//!
//! Collects the seven sol inputs (flags, or interactive prompts for
//! whatever is missing), validates them, runs the simulation core once,
//! and prints the text report or JSON.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;

use marsbase_logic::input::{validate_input, Scenario, SimulationInput};
use marsbase_logic::sim::simulate_sol;
use marsbase_logic::water::ReserveStatus;

mod report;

const SCENARIOS_JSON: &str = include_str!("../../../data/scenarios.json");

#[derive(Parser, Debug)]
#[command(name = "marsbase")]
#[command(about = "Single-sol resource simulator for a Mars settlement")]
#[command(version)]
struct Args {
    /// Settlers on base
    #[arg(long)]
    crew: Option<u32>,

    /// Solar energy available this sol (kWh)
    #[arg(long)]
    solar: Option<f64>,

    /// Battery discharge allowance for the sol (kWh)
    #[arg(long)]
    battery: Option<f64>,

    /// Water reserve at sol start (L)
    #[arg(long)]
    water: Option<f64>,

    /// Greenhouse growing area (m^2)
    #[arg(long)]
    area: Option<f64>,

    /// Rovers available for surface operations
    #[arg(long)]
    rovers: Option<i32>,

    /// Communications uptime required (hours)
    #[arg(long)]
    comms_hours: Option<f64>,

    /// Run a bundled reference sol instead of supplying inputs
    #[arg(
        long,
        conflicts_with_all = ["crew", "solar", "battery", "water", "area", "rovers", "comms_hours"]
    )]
    scenario: Option<String>,

    /// List the bundled reference sols and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Emit the sol report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Skip the resource flow map in the text report
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let scenarios: Vec<Scenario> = match serde_json::from_str(SCENARIOS_JSON) {
        Ok(scenarios) => scenarios,
        Err(err) => {
            eprintln!("error: bundled scenario data is unreadable: {err}");
            return ExitCode::from(2);
        }
    };

    if args.list_scenarios {
        for scenario in &scenarios {
            println!(
                "{:<16} {:<28} {}",
                scenario.name, scenario.label, scenario.description
            );
        }
        return ExitCode::SUCCESS;
    }

    let input = match gather_input(&args, &scenarios) {
        Ok(input) => input,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    let problems = validate_input(&input);
    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("error: {}", problem.message());
        }
        return ExitCode::from(2);
    }

    log::info!("simulating one sol for a crew of {}", input.crew);
    let sol = simulate_sol(&input);
    if sol.energy.shortfall_kwh > 0.0 {
        log::warn!(
            "energy shortfall of {:.2} kWh against the subsystem minimums",
            sol.energy.shortfall_kwh
        );
    }
    if sol.water.status == ReserveStatus::Depleting {
        log::warn!(
            "water reserve depleting: closing balance {:.2} L",
            sol.water.closing_reserve_l
        );
    }

    if args.json {
        match serde_json::to_string_pretty(&sol) {
            Ok(text) => println!("{text}"),
            Err(err) => {
                eprintln!("error: report serialization failed: {err}");
                return ExitCode::from(2);
            }
        }
    } else {
        print!("{}", report::render(&sol, !args.quiet));
    }

    ExitCode::SUCCESS
}

/// Assemble the sol's input from a scenario, flags, or prompts.
fn gather_input(args: &Args, scenarios: &[Scenario]) -> Result<SimulationInput, String> {
    if let Some(name) = &args.scenario {
        return scenarios
            .iter()
            .find(|scenario| scenario.name == *name)
            .map(|scenario| scenario.input)
            .ok_or_else(|| format!("unknown scenario {name:?}; try --list-scenarios"));
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    Ok(SimulationInput {
        crew: resolve(args.crew, "Enter crew size: ", &mut lines)?,
        solar_kwh: resolve(args.solar, "Enter available solar energy (kWh): ", &mut lines)?,
        battery_kwh: resolve(
            args.battery,
            "Enter available battery energy for the sol (kWh): ",
            &mut lines,
        )?,
        water_reserve_l: resolve(args.water, "Enter current water reserve (L): ", &mut lines)?,
        greenhouse_area_m2: resolve(
            args.area,
            "Enter greenhouse growing area (m^2): ",
            &mut lines,
        )?,
        rover_count: resolve(args.rovers, "Enter number of available rovers: ", &mut lines)?,
        required_comms_uptime_h: resolve(
            args.comms_hours,
            "Enter required communications uptime (hours): ",
            &mut lines,
        )?,
    })
}

/// Use the flag value if given, otherwise prompt until a line parses.
///
/// Unparseable lines re-prompt; end of input aborts with an error.
fn resolve<T, I>(flag: Option<T>, prompt: &str, lines: &mut I) -> Result<T, String>
where
    T: FromStr,
    I: Iterator<Item = io::Result<String>>,
{
    if let Some(value) = flag {
        return Ok(value);
    }
    loop {
        print!("{prompt}");
        let _ = io::stdout().flush();
        match lines.next() {
            Some(Ok(line)) => match line.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => eprintln!("Could not read {:?} as a number; try again.", line.trim()),
            },
            Some(Err(err)) => return Err(format!("could not read input: {err}")),
            None => return Err("input ended before all values were supplied".into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(entries: &[&str]) -> impl Iterator<Item = io::Result<String>> {
        entries
            .iter()
            .map(|s| Ok(s.to_string()))
            .collect::<Vec<io::Result<String>>>()
            .into_iter()
    }

    #[test]
    fn test_flag_value_skips_prompting() {
        let mut input = lines(&["999"]);
        let value: u32 = resolve(Some(4), "crew: ", &mut input).unwrap();
        assert_eq!(value, 4);
        // The queued line is untouched
        assert_eq!(input.next().unwrap().unwrap(), "999");
    }

    #[test]
    fn test_prompt_parses_first_line() {
        let mut input = lines(&["12.5"]);
        let value: f64 = resolve(None, "solar: ", &mut input).unwrap();
        assert_eq!(value, 12.5);
    }

    #[test]
    fn test_bad_line_reprompts() {
        let mut input = lines(&["six", " 6 "]);
        let value: i32 = resolve(None, "rovers: ", &mut input).unwrap();
        assert_eq!(value, 6);
    }

    #[test]
    fn test_eof_aborts() {
        let mut input = lines(&[]);
        let result: Result<u32, String> = resolve(None, "crew: ", &mut input);
        assert!(result.is_err());
    }

    #[test]
    fn test_bundled_scenarios_parse() {
        let scenarios: Vec<Scenario> = serde_json::from_str(SCENARIOS_JSON).unwrap();
        assert_eq!(scenarios.len(), 3);
        assert!(scenarios.iter().any(|s| s.name == "nominal"));
        for scenario in &scenarios {
            assert!(
                validate_input(&scenario.input).is_empty(),
                "bundled scenario {:?} fails validation",
                scenario.name
            );
        }
    }
}
