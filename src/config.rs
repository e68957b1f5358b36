// ABOUTME: Session configuration for the calculator, resolved from environment variables
// ABOUTME: Unset or unparseable variables fall back to the built-in recipe defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Impasto Contributors

//! # Calculator Configuration
//!
//! [`CalculatorConfig`] carries the control-knob values a session starts from.
//! `from_env` never fails: an unparseable variable is logged and replaced by
//! its default, so a stray shell export cannot keep the calculator from
//! starting. Range validation happens when the calculator ingests the config,
//! not here.

use std::env;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::constants::{defaults, env_vars};
use crate::errors::RecipeError;
use crate::models::KeyIngredient;

/// Control-knob values a calculator session is seeded from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Which ingredient sizes the recipe
    pub key_ingredient: KeyIngredient,
    /// Target total grams of the key ingredient across both components
    pub key_ingredient_grams: f64,
    /// Main-dough hydration as a water/flour fraction in (0, 1]
    pub hydration: f64,
    /// Fraction of the key ingredient allocated to the pre-ferment, in [0, 1]
    pub preferment_share: f64,
    /// Weight of a single dough ball in grams
    pub weight_per_pizza_g: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            key_ingredient: KeyIngredient::default(),
            key_ingredient_grams: defaults::KEY_INGREDIENT_GRAMS,
            hydration: defaults::HYDRATION,
            preferment_share: defaults::PREFERMENT_SHARE,
            weight_per_pizza_g: defaults::WEIGHT_PER_PIZZA_G,
        }
    }
}

impl CalculatorConfig {
    /// Resolve the configuration from `IMPASTO_*` environment variables.
    ///
    /// Missing variables use the built-in defaults; values that fail to parse
    /// are logged and replaced by their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let key_ingredient = env::var(env_vars::KEY_INGREDIENT)
            .map(|raw| KeyIngredient::from_str_param(&raw))
            .unwrap_or_default();

        Self {
            key_ingredient,
            key_ingredient_grams: env_f64_or(env_vars::KEY_GRAMS, defaults::KEY_INGREDIENT_GRAMS),
            hydration: env_f64_or(env_vars::HYDRATION, defaults::HYDRATION),
            preferment_share: env_f64_or(env_vars::PREFERMENT_SHARE, defaults::PREFERMENT_SHARE),
            weight_per_pizza_g: env_f64_or(
                env_vars::WEIGHT_PER_PIZZA,
                defaults::WEIGHT_PER_PIZZA_G,
            ),
        }
    }
}

/// Get an `f64` environment variable or a default value
fn env_f64_or(var: &str, default: f64) -> f64 {
    match env::var(var) {
        Ok(raw) => raw.trim().parse::<f64>().unwrap_or_else(|_| {
            let error = RecipeError::InvalidConfig {
                var: var.to_owned(),
                value: raw.clone(),
            };
            warn!(%error, default, "using default value");
            default
        }),
        Err(_) => default,
    }
}
