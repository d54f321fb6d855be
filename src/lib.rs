//! fitcalc Library
//!
//! Body-metrics, energy and macronutrient calculations for gym members.

pub mod build_info;
pub mod calculator;
pub mod config;
pub mod mcp;
pub mod models;
pub mod session;
pub mod tools;
