// ABOUTME: Two-stage dough calculator holding the pre-ferment and main dough session state
// ABOUTME: Implements the cross-component update algebra and the read-only recipe snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Impasto Contributors

//! # Dough Calculator
//!
//! [`DoughCalculator`] owns one recipe session: the pre-ferment and main
//! dough, the control knobs (key ingredient, hydration, batch size), and the
//! cached derived values the presentation layer displays.
//!
//! ## Update algebra
//!
//! Four operations keep the two components and the derived totals mutually
//! consistent:
//!
//! - [`update_by_key_ingredient`](DoughCalculator::update_by_key_ingredient)
//!   resizes both components so the selected key ingredient lands on a target
//!   total, split between the components by a share ratio
//! - [`update_split_ratio`](DoughCalculator::update_split_ratio) redistributes
//!   flour between the components without resizing anything else
//! - [`update_batch`](DoughCalculator::update_batch) rescales the whole recipe
//!   to hit a pizza count at a per-pizza weight
//! - [`refresh_key_ingredient_view`](DoughCalculator::refresh_key_ingredient_view)
//!   re-derives the displayed key-ingredient total after indirect changes
//!
//! Each operation is one atomic recompute per input event; inputs are full
//! target values, never incremental diffs. Inside
//! `update_by_key_ingredient` the ordering is load-bearing: hydration is
//! re-applied to the main dough after the pre-ferment rescale but before the
//! main-dough rescale, while main-dough water still reflects the pre-update
//! flour level. Moving that step double-counts the water adjustment.
//!
//! ## Failure semantics
//!
//! Degenerate inputs (zero targets, non-positive factors, out-of-range
//! hydration) never abort an interactive session. The dough-level operations
//! report them as typed [`RecipeError`](crate::errors::RecipeError) values and
//! this layer logs and skips the affected step, so the state the presentation
//! layer sees is always displayable. Construction is the only hard-failing
//! boundary.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::CalculatorConfig;
use crate::constants::base_recipe;
use crate::errors::RecipeError;
use crate::models::{Dough, Ingredient, IngredientSet, KeyIngredient};

/// One recipe session: two dough components plus control knobs and caches
#[derive(Debug, Clone, PartialEq)]
pub struct DoughCalculator {
    session_id: Uuid,
    config: CalculatorConfig,
    preferment: Dough,
    main_dough: Dough,
    key_ingredient: KeyIngredient,
    key_ingredient_grams: f64,
    hydration: f64,
    pizza_count: f64,
    weight_per_pizza_g: f64,
    total_grams: f64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for DoughCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl DoughCalculator {
    /// Starts a session from the built-in defaults
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(CalculatorConfig::default())
    }

    /// Starts a session from an explicit configuration.
    ///
    /// Out-of-range knob values are logged and replaced by their defaults, so
    /// the session always begins in a displayable state. The sanitized
    /// configuration is kept for [`reset`](Self::reset).
    #[must_use]
    pub fn from_config(config: CalculatorConfig) -> Self {
        let config = sanitize_config(config);
        let now = Utc::now();

        let mut calculator = Self {
            session_id: Uuid::new_v4(),
            preferment: Dough::new(base_preferment_set()),
            main_dough: Dough::new(base_main_dough_set()).with_hydration(config.hydration),
            key_ingredient: config.key_ingredient,
            key_ingredient_grams: 0.0,
            hydration: config.hydration,
            pizza_count: 0.0,
            weight_per_pizza_g: config.weight_per_pizza_g,
            total_grams: 0.0,
            created_at: now,
            updated_at: now,
            config,
        };

        calculator.refresh_key_ingredient_view();
        calculator.recompute_batch();
        calculator.update_by_key_ingredient(
            calculator.config.key_ingredient_grams,
            Some(calculator.config.preferment_share),
        );
        calculator
    }

    /// Resizes both components so the key ingredient totals `new_total_grams`.
    ///
    /// `preferment_share` is the fraction of that total allocated to the
    /// pre-ferment; when `None`, the currently measured split for the key
    /// ingredient is kept. An explicit share outside `[0, 1]` is logged and
    /// the whole operation skipped. Each component is rescaled uniformly, so
    /// all in-component ratios survive; between the two rescales the stored
    /// hydration knob is re-applied to the main dough.
    ///
    /// Degenerate sub-steps (zero targets, an impossible rescale) are logged
    /// and skipped; the remaining steps still run.
    pub fn update_by_key_ingredient(
        &mut self,
        new_total_grams: f64,
        preferment_share: Option<f64>,
    ) {
        let key = self.key_ingredient.ingredient();
        let share = match preferment_share {
            Some(value) => {
                if !(0.0..=1.0).contains(&value) {
                    warn!(share = value, "pre-ferment share outside [0, 1], skipping update");
                    return;
                }
                value
            }
            None => match self.measured_preferment_share() {
                Some(value) => value,
                None => {
                    warn!(
                        key_ingredient = %self.key_ingredient,
                        "cannot derive a split share without any key ingredient, skipping update"
                    );
                    return;
                }
            },
        };

        if let Err(error) = self.preferment.rescale_to(key, share * new_total_grams) {
            warn!(%error, component = "poulish", "skipping component rescale");
        }
        // Must happen between the two rescales: main-dough water still sits at
        // its pre-update flour level here.
        if let Err(error) = self.main_dough.apply_hydration(self.hydration) {
            warn!(%error, "keeping previous water level");
        }
        if let Err(error) = self
            .main_dough
            .rescale_to(key, (1.0 - share) * new_total_grams)
        {
            warn!(%error, component = "main dough", "skipping component rescale");
        }

        self.refresh_key_ingredient_view();
        self.recompute_batch();
        self.touch();
    }

    /// Redistributes flour between the two components.
    ///
    /// Total flour is conserved: the pre-ferment gets `new_ratio` of it, the
    /// main dough the rest. Only flour moves; no other ingredient is rescaled,
    /// so the overall batch size stays put. Ratios outside `[0, 1]` are logged
    /// and ignored.
    pub fn update_split_ratio(&mut self, new_ratio: f64) {
        if !(0.0..=1.0).contains(&new_ratio) {
            warn!(ratio = new_ratio, "split ratio outside [0, 1], skipping update");
            return;
        }

        let total_flour = self.preferment.quantity(Ingredient::Flour)
            + self.main_dough.quantity(Ingredient::Flour);

        if let Err(error) = self
            .preferment
            .set_quantity(Ingredient::Flour, new_ratio * total_flour)
        {
            warn!(%error, component = "poulish", "skipping flour assignment");
        }
        if let Err(error) = self
            .main_dough
            .set_quantity(Ingredient::Flour, (1.0 - new_ratio) * total_flour)
        {
            warn!(%error, component = "main dough", "skipping flour assignment");
        }

        self.refresh_key_ingredient_view();
        self.recompute_batch();
        self.touch();
    }

    /// Rescales the whole recipe to `pizza_count` pizzas of
    /// `weight_per_pizza_g` grams each.
    ///
    /// Both components are multiplied by the same factor, so every ratio,
    /// including the pre-ferment/main split, survives. Non-positive or
    /// non-finite batch parameters are logged and ignored.
    pub fn update_batch(&mut self, pizza_count: f64, weight_per_pizza_g: f64) {
        if !pizza_count.is_finite()
            || pizza_count <= 0.0
            || !weight_per_pizza_g.is_finite()
            || weight_per_pizza_g <= 0.0
        {
            let error = RecipeError::InvalidBatch {
                count: pizza_count,
                weight_per_pizza: weight_per_pizza_g,
            };
            warn!(%error, "skipping batch update");
            return;
        }

        let new_total_grams = pizza_count * weight_per_pizza_g;
        let factor = new_total_grams / self.total_grams;
        if !factor.is_finite() || factor <= 0.0 {
            warn!(factor, "degenerate batch rescale factor, skipping update");
            return;
        }

        if let Err(error) = self.preferment.scale(factor) {
            warn!(%error, component = "poulish", "skipping batch rescale");
        }
        if let Err(error) = self.main_dough.scale(factor) {
            warn!(%error, component = "main dough", "skipping batch rescale");
        }

        self.weight_per_pizza_g = weight_per_pizza_g;
        self.refresh_key_ingredient_view();
        self.recompute_batch();
        self.touch();
    }

    /// Re-derives the displayed key-ingredient total from both components.
    ///
    /// Runs automatically at the end of every update; call it directly after
    /// switching the key ingredient selector or any other indirect change.
    pub fn refresh_key_ingredient_view(&mut self) {
        let key = self.key_ingredient.ingredient();
        self.key_ingredient_grams =
            self.preferment.quantity(key) + self.main_dough.quantity(key);
    }

    /// Changes the main-dough hydration knob and re-syncs water.
    ///
    /// Values outside `(0, 1]` are logged and ignored; an unchanged value is
    /// a no-op. Otherwise the full key-ingredient update re-runs with the
    /// current measured split, which moves main-dough water by
    /// `new / old` hydration.
    pub fn set_hydration(&mut self, hydration: f64) {
        if !(hydration > 0.0 && hydration <= 1.0) {
            let error = RecipeError::HydrationOutOfRange(hydration);
            warn!(%error, "keeping current hydration");
            return;
        }
        if (hydration - self.hydration).abs() < f64::EPSILON {
            debug!(hydration, "hydration unchanged, nothing to recompute");
            return;
        }

        self.hydration = hydration;
        self.update_by_key_ingredient(self.key_ingredient_grams, None);
    }

    /// Switches which ingredient drives the recipe.
    ///
    /// Quantities stay untouched; only the displayed key-ingredient total is
    /// re-derived for the new selector.
    pub fn set_key_ingredient(&mut self, key_ingredient: KeyIngredient) {
        if key_ingredient == self.key_ingredient {
            return;
        }
        self.key_ingredient = key_ingredient;
        self.refresh_key_ingredient_view();
        self.touch();
    }

    /// Pizza-count convenience driver: keeps the current per-pizza weight
    pub fn set_pizza_count(&mut self, pizza_count: f64) {
        let weight_per_pizza_g = self.weight_per_pizza_g;
        self.update_batch(pizza_count, weight_per_pizza_g);
    }

    /// Per-pizza-weight convenience driver: keeps the current pizza count
    pub fn set_weight_per_pizza(&mut self, weight_per_pizza_g: f64) {
        let pizza_count = self.pizza_count;
        self.update_batch(pizza_count, weight_per_pizza_g);
    }

    /// Reinitializes the session wholesale from its stored configuration.
    ///
    /// Both components return to the configured state; a fresh session id is
    /// issued.
    pub fn reset(&mut self) {
        debug!(session_id = %self.session_id, "resetting session to its configuration");
        *self = Self::from_config(self.config.clone());
    }

    /// Currently measured pre-ferment share of the key ingredient, or `None`
    /// when neither component holds any of it
    #[must_use]
    pub fn measured_preferment_share(&self) -> Option<f64> {
        let key = self.key_ingredient.ingredient();
        let preferment = self.preferment.quantity(key);
        let total = preferment + self.main_dough.quantity(key);
        (total > 0.0).then(|| preferment / total)
    }

    /// Read-only view of the whole session for rendering and export
    #[must_use]
    pub fn snapshot(&self) -> RecipeSnapshot {
        RecipeSnapshot {
            session_id: self.session_id,
            generated_at: Utc::now(),
            key_ingredient: self.key_ingredient,
            key_ingredient_grams: self.key_ingredient_grams,
            hydration: self.hydration,
            preferment_share: self.measured_preferment_share().unwrap_or(0.0),
            pizza_count: self.pizza_count,
            weight_per_pizza_g: self.weight_per_pizza_g,
            total_grams: self.total_grams,
            preferment: ComponentView::from_dough("Poulish", &self.preferment),
            main_dough: ComponentView::from_dough("Main Dough", &self.main_dough),
        }
    }

    /// Session identifier, fresh for every initialization and reset
    #[must_use]
    pub const fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// The configuration this session was started from
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The pre-ferment component
    #[must_use]
    pub const fn preferment(&self) -> &Dough {
        &self.preferment
    }

    /// The main-dough component
    #[must_use]
    pub const fn main_dough(&self) -> &Dough {
        &self.main_dough
    }

    /// Currently selected key ingredient
    #[must_use]
    pub const fn key_ingredient(&self) -> KeyIngredient {
        self.key_ingredient
    }

    /// Cached key-ingredient total across both components, in grams
    #[must_use]
    pub const fn key_ingredient_grams(&self) -> f64 {
        self.key_ingredient_grams
    }

    /// Current hydration knob value
    #[must_use]
    pub const fn hydration(&self) -> f64 {
        self.hydration
    }

    /// Derived pizza count at the current per-pizza weight
    #[must_use]
    pub const fn pizza_count(&self) -> f64 {
        self.pizza_count
    }

    /// Weight of a single dough ball in grams
    #[must_use]
    pub const fn weight_per_pizza_g(&self) -> f64 {
        self.weight_per_pizza_g
    }

    /// Total mass of both components in grams
    #[must_use]
    pub const fn total_grams(&self) -> f64 {
        self.total_grams
    }

    /// When this session was created
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When this session last changed
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn recompute_batch(&mut self) {
        self.total_grams = self.preferment.total_grams() + self.main_dough.total_grams();
        self.pizza_count = self.total_grams / self.weight_per_pizza_g;
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Read-only export of a full session for rendering and serialization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSnapshot {
    /// Session identifier
    pub session_id: Uuid,
    /// When this snapshot was taken
    pub generated_at: DateTime<Utc>,
    /// Which ingredient currently sizes the recipe
    pub key_ingredient: KeyIngredient,
    /// Key-ingredient total across both components, in grams
    pub key_ingredient_grams: f64,
    /// Main-dough hydration knob value
    pub hydration: f64,
    /// Measured pre-ferment share of the key ingredient
    pub preferment_share: f64,
    /// Pizza count implied by the total mass and per-pizza weight
    pub pizza_count: f64,
    /// Weight of a single dough ball in grams
    pub weight_per_pizza_g: f64,
    /// Total mass of both components in grams
    pub total_grams: f64,
    /// Pre-ferment quantities
    pub preferment: ComponentView,
    /// Main-dough quantities
    pub main_dough: ComponentView,
}

/// Ingredient table for one dough component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentView {
    /// Display name of the component
    pub name: String,
    /// Component mass in grams
    pub total_grams: f64,
    /// Per-ingredient rows in canonical display order
    pub ingredients: Vec<IngredientRow>,
}

impl ComponentView {
    fn from_dough(name: &str, dough: &Dough) -> Self {
        Self {
            name: name.to_owned(),
            total_grams: dough.total_grams(),
            ingredients: dough
                .ingredients()
                .quantities()
                .map(|(ingredient, grams)| IngredientRow {
                    ingredient,
                    label: ingredient.label().to_owned(),
                    grams,
                })
                .collect(),
        }
    }
}

/// One ingredient row in a component table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRow {
    /// Which ingredient this row describes
    pub ingredient: Ingredient,
    /// Display label, unit included
    pub label: String,
    /// Quantity in grams
    pub grams: f64,
}

/// Replaces out-of-range knob values with their defaults, logging each fix
fn sanitize_config(mut config: CalculatorConfig) -> CalculatorConfig {
    let fallback = CalculatorConfig::default();

    if !(config.hydration > 0.0 && config.hydration <= 1.0) {
        warn!(hydration = config.hydration, "hydration outside (0, 1], using default");
        config.hydration = fallback.hydration;
    }
    if !(0.0..=1.0).contains(&config.preferment_share) {
        warn!(share = config.preferment_share, "pre-ferment share outside [0, 1], using default");
        config.preferment_share = fallback.preferment_share;
    }
    if !config.key_ingredient_grams.is_finite() || config.key_ingredient_grams < 0.0 {
        warn!(grams = config.key_ingredient_grams, "key ingredient grams invalid, using default");
        config.key_ingredient_grams = fallback.key_ingredient_grams;
    }
    if !config.weight_per_pizza_g.is_finite() || config.weight_per_pizza_g <= 0.0 {
        warn!(weight = config.weight_per_pizza_g, "weight per pizza invalid, using default");
        config.weight_per_pizza_g = fallback.weight_per_pizza_g;
    }

    config
}

fn base_preferment_set() -> IngredientSet {
    IngredientSet::with_base(
        base_recipe::PREFERMENT_FLOUR_G,
        base_recipe::PREFERMENT_WATER_G,
    )
    .with_ingredient(Ingredient::Yeast, base_recipe::PREFERMENT_YEAST_G)
    .with_ingredient(Ingredient::Honey, base_recipe::PREFERMENT_HONEY_G)
}

fn base_main_dough_set() -> IngredientSet {
    IngredientSet::with_base(base_recipe::MAIN_FLOUR_G, base_recipe::MAIN_WATER_G)
        .with_ingredient(Ingredient::OliveOil, base_recipe::MAIN_OLIVE_OIL_G)
        .with_ingredient(Ingredient::Salt, base_recipe::MAIN_SALT_G)
}
