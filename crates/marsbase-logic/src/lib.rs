//! Pure simulation logic for marsbase.
//!
//! This crate contains all settlement model logic that is independent of any
//! terminal, file format, or runtime. Functions take plain data and return
//! fresh result records, which keeps them unit-testable and portable across
//! the CLI, the headless harness, and any future frontend.
//!
//! The model covers one sol: seven scalar inputs go in, one
//! [`sim::SolReport`] comes out. Nothing is persisted between runs.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`brief`] | Per-sol survival targets derived from crew size |
//! | [`comms`] | Energy-limited communications uptime |
//! | [`energy`] | Priority allocation of solar + battery energy |
//! | [`food`] | Hydroponic biomass yield, rationed by available water |
//! | [`input`] | Simulation input record, scenarios, boundary validation |
//! | [`life_support`] | Oxygen production and its electrolysis water cost |
//! | [`sim`] | Single-sol orchestration and the stability verdict |
//! | [`transport`] | Rover deployment and operational range |
//! | [`water`] | Water ledger: withdrawals, recycling, closing reserve |

pub mod brief;
pub mod comms;
pub mod energy;
pub mod food;
pub mod input;
pub mod life_support;
pub mod sim;
pub mod transport;
pub mod water;
