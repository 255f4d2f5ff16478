//! Automatic Categorization Engine for jiu-jitsu tournaments
//!
//! This crate computes an athlete's competitive age, age division, weight
//! division and full category label for a competition year, from rule
//! tables loaded as configuration.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
