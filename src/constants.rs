// ABOUTME: Named constants for the base recipe, calculator defaults, and environment variables
// ABOUTME: Groups values by domain so no magic numbers leak into the update algebra
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Impasto Contributors

//! # Constants Module
//!
//! The base recipe quantities here define the proportions every later rescale
//! preserves. They are the session seed, not a tunable: user input reshapes the
//! recipe exclusively through the calculator's update operations.

/// Base recipe quantities in grams, as mixed before any user-driven scaling.
///
/// The pre-ferment and main dough are seeded from these values at session
/// start. Water is measured in grams here too (1 mL of water weighs 1 g), so
/// component totals are plain sums.
pub mod base_recipe {
    /// Flour in the base pre-ferment
    pub const PREFERMENT_FLOUR_G: f64 = 300.0;

    /// Water in the base pre-ferment
    pub const PREFERMENT_WATER_G: f64 = 300.0;

    /// Yeast in the base pre-ferment
    pub const PREFERMENT_YEAST_G: f64 = 6.0;

    /// Honey in the base pre-ferment
    pub const PREFERMENT_HONEY_G: f64 = 5.0;

    /// Flour in the base main dough
    pub const MAIN_FLOUR_G: f64 = 700.0;

    /// Water in the base main dough
    pub const MAIN_WATER_G: f64 = 400.0;

    /// Olive oil in the base main dough
    pub const MAIN_OLIVE_OIL_G: f64 = 10.0;

    /// Salt in the base main dough
    pub const MAIN_SALT_G: f64 = 25.0;
}

/// Default control-knob values applied when no configuration overrides them
pub mod defaults {
    /// Total grams of the key ingredient the session starts from
    pub const KEY_INGREDIENT_GRAMS: f64 = 1000.0;

    /// Main-dough hydration as a water/flour fraction
    pub const HYDRATION: f64 = 0.7;

    /// Fraction of the key ingredient allocated to the pre-ferment
    pub const PREFERMENT_SHARE: f64 = 0.3;

    /// Weight of a single dough ball in grams
    pub const WEIGHT_PER_PIZZA_G: f64 = 250.0;
}

/// Environment variable names recognized by [`crate::config::CalculatorConfig`]
/// and the logging setup
pub mod env_vars {
    /// Key ingredient selector, `flour` or `water`
    pub const KEY_INGREDIENT: &str = "IMPASTO_KEY_INGREDIENT";

    /// Total grams of the key ingredient
    pub const KEY_GRAMS: &str = "IMPASTO_KEY_GRAMS";

    /// Main-dough hydration fraction in (0, 1]
    pub const HYDRATION: &str = "IMPASTO_HYDRATION";

    /// Pre-ferment share of the key ingredient in [0, 1]
    pub const PREFERMENT_SHARE: &str = "IMPASTO_PREFERMENT_SHARE";

    /// Weight of a single dough ball in grams
    pub const WEIGHT_PER_PIZZA: &str = "IMPASTO_WEIGHT_PER_PIZZA";

    /// Log filter directives, `tracing_subscriber::EnvFilter` syntax
    pub const LOG: &str = "IMPASTO_LOG";

    /// Log output format, `pretty`, `compact`, or `json`
    pub const LOG_FORMAT: &str = "IMPASTO_LOG_FORMAT";
}
