//! Shared test harnesses.

pub mod stage_contract;
