// ABOUTME: Main library entry point for the impasto dough calculator
// ABOUTME: Exposes the recipe models, update algebra, and rendering formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Impasto Contributors

#![deny(unsafe_code)]

//! # Impasto
//!
//! A two-stage pizza dough calculator. The recipe is split into a pre-ferment
//! ("poulish") and a main dough; the calculator lets any one of several
//! control knobs drive the numbers while every other quantity recomputes
//! consistently:
//!
//! - the total mass of a **key ingredient** (flour or water)
//! - the **pizza count** or the **weight per pizza**
//! - the pre-ferment/main-dough **split ratio**
//! - the main dough's **hydration**
//!
//! ## Architecture
//!
//! - **Models**: [`Ingredient`], [`IngredientSet`], and [`Dough`], the
//!   validated quantity types and their multiplicative rescale operations
//! - **Calculator**: [`DoughCalculator`], the session state and the
//!   cross-component update algebra
//! - **Formatters**: table, markdown, and JSON renderings of a
//!   [`RecipeSnapshot`]
//! - **Config**: [`CalculatorConfig`] resolved from `IMPASTO_*` environment
//!   variables
//!
//! ## Example Usage
//!
//! ```rust
//! use impasto::DoughCalculator;
//!
//! let mut calculator = DoughCalculator::new();
//!
//! // Bake for a crowd: 10 pizzas at 250 g each.
//! calculator.update_batch(10.0, 250.0);
//!
//! // Then push hydration up for a softer crumb.
//! calculator.set_hydration(0.75);
//!
//! let snapshot = calculator.snapshot();
//! assert!((snapshot.total_grams / snapshot.weight_per_pizza_g - snapshot.pizza_count).abs() < 1e-9);
//! ```

pub mod calculator;
pub mod config;
pub mod constants;
pub mod errors;
pub mod formatters;
pub mod logging;
pub mod models;

pub use calculator::{ComponentView, DoughCalculator, IngredientRow, RecipeSnapshot};
pub use config::CalculatorConfig;
pub use errors::{RecipeError, RecipeResult};
pub use formatters::OutputFormat;
pub use models::{Dough, Ingredient, IngredientSet, KeyIngredient};
