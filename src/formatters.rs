// ABOUTME: Output format abstraction for rendering recipe snapshots
// ABOUTME: Supports an aligned text table, step-by-step markdown, and JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Impasto Contributors

//! Output Format Abstraction Layer
//!
//! Renders a [`RecipeSnapshot`] for human or machine consumption:
//!
//! - **Table**: aligned per-component ingredient tables with batch totals,
//!   the default for terminal use
//! - **Markdown**: the step-by-step recipe text, ready for a recipe card
//! - **JSON**: the full snapshot, pretty-printed, for downstream tooling

use std::fmt;

use crate::calculator::{ComponentView, RecipeSnapshot};
use crate::models::Ingredient;

/// Output rendering format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text table (default) for terminal display
    #[default]
    Table,
    /// Step-by-step recipe text in markdown
    Markdown,
    /// Full snapshot as pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Table` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "markdown" | "md" => Self::Markdown,
            "json" => Self::Json,
            _ => Self::Table,
        }
    }

    /// String form used in parameters and help text
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Markdown => "markdown",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error during snapshot rendering
#[derive(Debug)]
pub struct FormatError {
    /// What went wrong
    pub message: String,
    /// Which format was requested
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl std::error::Error for FormatError {}

/// Render a snapshot in the requested output format
///
/// # Errors
///
/// Returns [`FormatError`] when JSON serialization fails; the text formats
/// cannot fail.
pub fn format_snapshot(
    snapshot: &RecipeSnapshot,
    format: OutputFormat,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Table => Ok(render_table(snapshot)),
        OutputFormat::Markdown => Ok(render_recipe_markdown(snapshot)),
        OutputFormat::Json => serde_json::to_string_pretty(snapshot).map_err(|e| FormatError {
            message: e.to_string(),
            format,
        }),
    }
}

/// Render the aligned ingredient tables with the batch summary
#[must_use]
pub fn render_table(snapshot: &RecipeSnapshot) -> String {
    let label_width = snapshot
        .preferment
        .ingredients
        .iter()
        .chain(&snapshot.main_dough.ingredients)
        .map(|row| row.label.len())
        .max()
        .unwrap_or(0)
        .max("Total".len());

    let mut out = String::new();
    out.push_str(&format!(
        "Key ingredient: {} ({} g across both doughs)\n",
        snapshot.key_ingredient,
        group_thousands(snapshot.key_ingredient_grams, 1),
    ));
    out.push_str(&format!(
        "Hydration: {:.2} | Poulish share: {:.2}\n\n",
        snapshot.hydration, snapshot.preferment_share,
    ));

    render_component(&mut out, &snapshot.preferment, label_width);
    out.push('\n');
    render_component(&mut out, &snapshot.main_dough, label_width);

    out.push_str(&format!(
        "\nTotal weight is ca. {} g.\n",
        group_thousands(snapshot.total_grams, 2),
    ));
    out.push_str(&format!(
        "Total weight results in ca. {:.0} pizzas à {:.1} g.\n",
        snapshot.pizza_count, snapshot.weight_per_pizza_g,
    ));
    out
}

fn render_component(out: &mut String, component: &ComponentView, label_width: usize) {
    out.push_str(&component.name);
    out.push('\n');
    for row in &component.ingredients {
        out.push_str(&format!(
            "  {:<label_width$}  {:>10}\n",
            row.label,
            group_thousands(row.grams, 1),
        ));
    }
    out.push_str(&format!(
        "  {:<label_width$}  {:>10}\n",
        "Total",
        group_thousands(component.total_grams, 1),
    ));
}

/// Render the step-by-step recipe text in markdown
#[must_use]
pub fn render_recipe_markdown(snapshot: &RecipeSnapshot) -> String {
    let pre_flour = component_quantity(&snapshot.preferment, Ingredient::Flour);
    let pre_water = component_quantity(&snapshot.preferment, Ingredient::Water);
    let yeast = component_quantity(&snapshot.preferment, Ingredient::Yeast);
    let honey = component_quantity(&snapshot.preferment, Ingredient::Honey);
    let main_flour = component_quantity(&snapshot.main_dough, Ingredient::Flour);
    let main_water = component_quantity(&snapshot.main_dough, Ingredient::Water);
    let salt = component_quantity(&snapshot.main_dough, Ingredient::Salt);
    let oil = component_quantity(&snapshot.main_dough, Ingredient::OliveOil);
    let pizzas = snapshot.pizza_count;
    let weight = snapshot.weight_per_pizza_g;

    format!(
        "## Pizza Recipe\n\
         \n\
         Yields {pizzas:.0} pizzas à {weight:.1} g.\n\
         \n\
         ### Poulish\n\
         1. Dissolve {yeast:.1} grams of yeast in {pre_water:.1} mL of water.\n\
         2. Add {honey:.1} g of honey and dissolve.\n\
         3. Add {pre_flour:.1} g of flour and mix.\n\
         4. Cover the poulish in an airtight container and let it rest for 30 min at room temperature.\n\
         5. Then, put it in the fridge for 16 - 24 h.\n\
         \n\
         ### Main Dough\n\
         1. Take the poulish out of the fridge ca. 30 min before starting the main dough.\n\
         2. Add {main_water:.1} mL of water and dissolve the poulish in it.\n\
         3. Add {main_flour:.1} g of flour and knead for 10 min.\n\
         4. Add {salt:.1} g of salt and knead for 5 min.\n\
         5. When the dough starts to become sticky, add {oil:.1} g of olive oil.\n\
         6. Then, place the dough in the fridge for 16 - 24 h.\n\
         7. Take the dough out of the fridge ca. 30 min before forming the dough balls.\n\
         8. Divide the dough into {pizzas:.0} balls à {weight:.1} g.\n\
         9. Let them rest for min. 1.5 h.\n"
    )
}

fn component_quantity(component: &ComponentView, ingredient: Ingredient) -> f64 {
    component
        .ingredients
        .iter()
        .find(|row| row.ingredient == ingredient)
        .map_or(0.0, |row| row.grams)
}

/// Formats a quantity with thousands separators, e.g. `1746.0` as `1,746.00`
fn group_thousands(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_owned(), Some(frac_part.to_owned())),
        None => (formatted, None),
    };
    let (sign, digits) = int_part
        .strip_prefix('-')
        .map_or(("", int_part.as_str()), |digits| ("-", digits));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, ch) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}
