// ABOUTME: impasto CLI - computes two-stage pizza dough recipes from the command line
// ABOUTME: Applies control-knob flags to a calculator session and prints the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Impasto Contributors

//! # Impasto CLI
//!
//! Usage:
//! ```bash
//! # Default recipe: 1000 g flour, 30% poulish, hydration 0.7
//! impasto
//!
//! # Size the recipe from 1500 g of flour
//! impasto --key-total 1500
//!
//! # Drive from water instead, with a wetter main dough
//! impasto --key-ingredient water --key-total 800 --hydration 0.75
//!
//! # Ten pizzas at 280 g each, recipe card output
//! impasto --pizzas 10 --weight-per-pizza 280 --format markdown
//!
//! # Machine-readable snapshot
//! impasto --format json
//! ```

use anyhow::{bail, Result};
use clap::Parser;
use tracing::debug;

use impasto::formatters::format_snapshot;
use impasto::logging::LoggingConfig;
use impasto::{CalculatorConfig, DoughCalculator, KeyIngredient, OutputFormat};

#[derive(Parser)]
#[command(
    name = "impasto",
    version,
    about = "Two-stage pizza dough calculator",
    long_about = "Computes pre-ferment (poulish) and main dough quantities. Any control knob \
                  can drive the recipe: a key ingredient total, the pizza count, the per-pizza \
                  weight, the poulish/main split, or the main-dough hydration. Every other \
                  quantity recomputes to stay consistent. Environment variables (IMPASTO_*) \
                  seed the session; flags apply on top."
)]
struct Cli {
    /// Ingredient that sizes the recipe: flour or water
    #[arg(long, value_name = "INGREDIENT")]
    key_ingredient: Option<String>,

    /// Pre-ferment share of total flour, 0 to 1 (moves flour only)
    #[arg(long, value_name = "RATIO")]
    split: Option<f64>,

    /// Main-dough hydration as a water/flour fraction in (0, 1]
    #[arg(long, value_name = "FRACTION")]
    hydration: Option<f64>,

    /// Target total grams of the key ingredient across both doughs
    #[arg(long, value_name = "GRAMS")]
    key_total: Option<f64>,

    /// Number of pizzas to bake
    #[arg(long, value_name = "COUNT")]
    pizzas: Option<f64>,

    /// Weight of a single dough ball in grams
    #[arg(long, value_name = "GRAMS")]
    weight_per_pizza: Option<f64>,

    /// Output format: table, markdown, or json
    #[arg(long, short = 'f', default_value = "table", value_name = "FORMAT")]
    format: String,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    let mut calculator = DoughCalculator::from_config(CalculatorConfig::from_env());
    debug!(session_id = %calculator.session_id(), "session initialized");

    // Proportion knobs first, then sizing knobs, so a batch target given on
    // the same invocation has the last word on absolute quantities.
    if let Some(raw) = cli.key_ingredient.as_deref() {
        calculator.set_key_ingredient(parse_key_ingredient(raw)?);
    }
    if let Some(ratio) = cli.split {
        calculator.update_split_ratio(ratio);
    }
    if let Some(hydration) = cli.hydration {
        calculator.set_hydration(hydration);
    }
    if let Some(grams) = cli.key_total {
        calculator.update_by_key_ingredient(grams, None);
    }
    match (cli.pizzas, cli.weight_per_pizza) {
        (Some(pizzas), Some(weight)) => calculator.update_batch(pizzas, weight),
        (Some(pizzas), None) => calculator.set_pizza_count(pizzas),
        (None, Some(weight)) => calculator.set_weight_per_pizza(weight),
        (None, None) => {}
    }

    let format = OutputFormat::from_str_param(&cli.format);
    let output = format_snapshot(&calculator.snapshot(), format)?;
    println!("{}", output.trim_end());
    Ok(())
}

fn parse_key_ingredient(raw: &str) -> Result<KeyIngredient> {
    match raw.to_lowercase().as_str() {
        "flour" => Ok(KeyIngredient::Flour),
        "water" => Ok(KeyIngredient::Water),
        other => bail!("unknown key ingredient '{other}', expected flour or water"),
    }
}
