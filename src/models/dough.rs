// ABOUTME: One dough component: a validated ingredient set plus an optional hydration fraction
// ABOUTME: Provides the multiplicative rescale, hydration, and scaling operations the calculator composes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Impasto Contributors

//! # Dough Component
//!
//! Two [`Dough`] values exist per recipe session, the pre-ferment and the main
//! dough. Every mutation here is a uniform multiplicative rescale, so the
//! ingredient ratios inside a component are the invariant the whole update
//! algebra leans on. The single deliberate exception is [`Dough::apply_hydration`],
//! which moves water relative to flour without touching anything else.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{RecipeError, RecipeResult};
use crate::models::{Ingredient, IngredientSet};

/// A single dough component with its ingredient quantities and an optional
/// hydration fraction.
///
/// Hydration is defined as water mass divided by flour mass. It starts unset;
/// while unset, [`Dough::apply_hydration`] is a no-op, which keeps the
/// pre-ferment (whose hydration is never configured) out of hydration-driven
/// water adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dough {
    ingredients: IngredientSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    hydration: Option<f64>,
}

impl Dough {
    /// Wraps a validated ingredient set; hydration starts unset
    #[must_use]
    pub const fn new(ingredients: IngredientSet) -> Self {
        Self {
            ingredients,
            hydration: None,
        }
    }

    /// Builds a dough from raw quantities.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::MissingIngredient`] when flour or water is
    /// absent, or [`RecipeError::InvalidQuantity`] for negative or non-finite
    /// quantities.
    pub fn from_quantities(quantities: HashMap<Ingredient, f64>) -> RecipeResult<Self> {
        Ok(Self::new(IngredientSet::new(quantities)?))
    }

    /// Sets the hydration fraction, builder style.
    ///
    /// Out-of-range values are logged and ignored, leaving hydration unset
    /// (or at its previous value), mirroring [`Dough::set_hydration`].
    #[must_use]
    pub fn with_hydration(mut self, hydration: f64) -> Self {
        if let Err(error) = self.set_hydration(hydration) {
            tracing::warn!(%error, "ignoring hydration outside (0, 1]");
        }
        self
    }

    /// Current hydration fraction, if one has been set
    #[must_use]
    pub const fn hydration(&self) -> Option<f64> {
        self.hydration
    }

    /// Sets the hydration fraction without touching any quantity.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::HydrationOutOfRange`] unless
    /// `0 < hydration <= 1`; the previous value is kept.
    pub fn set_hydration(&mut self, hydration: f64) -> RecipeResult<()> {
        if hydration > 0.0 && hydration <= 1.0 {
            self.hydration = Some(hydration);
            Ok(())
        } else {
            Err(RecipeError::HydrationOutOfRange(hydration))
        }
    }

    /// Quantity of one ingredient in grams, 0 when absent
    #[must_use]
    pub fn quantity(&self, ingredient: Ingredient) -> f64 {
        self.ingredients.quantity(ingredient)
    }

    /// Sets one ingredient to an absolute quantity without touching the rest.
    ///
    /// This is the targeted-assignment escape hatch the split-ratio operation
    /// uses; every other mutation goes through the ratio-preserving rescales.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::InvalidQuantity`] when `grams` is negative or
    /// not finite.
    pub fn set_quantity(&mut self, ingredient: Ingredient, grams: f64) -> RecipeResult<()> {
        self.ingredients.set_quantity(ingredient, grams)
    }

    /// Read access to the underlying ingredient set
    #[must_use]
    pub const fn ingredients(&self) -> &IngredientSet {
        &self.ingredients
    }

    /// Sum of all ingredient quantities in grams
    #[must_use]
    pub fn total_grams(&self) -> f64 {
        self.ingredients.total_grams()
    }

    /// Rescales every ingredient so that `ingredient` lands on `target_grams`,
    /// preserving all ratios within the component.
    ///
    /// A target of exactly zero is a no-op: sizing a recipe down to nothing is
    /// treated as an input artifact, not an instruction.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::MissingIngredient`] when the ingredient is not
    /// part of this dough, [`RecipeError::InvalidQuantity`] when the target is
    /// negative or not finite, and [`RecipeError::ZeroQuantityRescale`] when
    /// the ingredient's current quantity is zero and no ratio can be formed.
    pub fn rescale_to(&mut self, ingredient: Ingredient, target_grams: f64) -> RecipeResult<()> {
        if target_grams == 0.0 {
            return Ok(());
        }
        if !self.ingredients.contains(ingredient) {
            return Err(RecipeError::MissingIngredient(ingredient));
        }
        if !target_grams.is_finite() || target_grams < 0.0 {
            return Err(RecipeError::InvalidQuantity {
                ingredient,
                grams: target_grams,
            });
        }
        let current = self.ingredients.quantity(ingredient);
        if current == 0.0 {
            return Err(RecipeError::ZeroQuantityRescale(ingredient));
        }
        self.ingredients.scale(target_grams / current)
    }

    /// Moves water to match a new hydration fraction.
    ///
    /// Water is scaled by `new_hydration / old_hydration`, so repeated calls
    /// compose: the second call works from the water level the first one
    /// produced. No other ingredient moves. No-op while hydration is unset or
    /// when the new value equals the stored one.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::HydrationOutOfRange`] unless
    /// `0 < new_hydration <= 1`; water and the stored hydration are kept.
    pub fn apply_hydration(&mut self, new_hydration: f64) -> RecipeResult<()> {
        let Some(old_hydration) = self.hydration else {
            return Ok(());
        };
        if (new_hydration - old_hydration).abs() < f64::EPSILON {
            return Ok(());
        }
        if !(new_hydration > 0.0 && new_hydration <= 1.0) {
            return Err(RecipeError::HydrationOutOfRange(new_hydration));
        }
        let water = self.ingredients.quantity(Ingredient::Water);
        self.ingredients
            .set_quantity(Ingredient::Water, water * new_hydration / old_hydration)?;
        self.hydration = Some(new_hydration);
        Ok(())
    }

    /// Multiplies every ingredient quantity by `factor`.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::NonPositiveFactor`] when `factor` is zero,
    /// negative, or not finite; quantities are left unchanged.
    pub fn scale(&mut self, factor: f64) -> RecipeResult<()> {
        self.ingredients.scale(factor)
    }
}
