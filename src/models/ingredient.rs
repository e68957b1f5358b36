// ABOUTME: Ingredient enumeration and the validated ingredient-to-grams mapping
// ABOUTME: IngredientSet guarantees flour and water are present and quantities stay finite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Impasto Contributors

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{RecipeError, RecipeResult};

/// Everything that can go into one of the two dough components.
///
/// The set is closed: recipes never grow new ingredient kinds at runtime, so
/// membership is checked by the compiler instead of by string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ingredient {
    /// Wheat flour, the mass every proportion is anchored to
    Flour,
    /// Water, the hydration-controlled ingredient
    Water,
    /// Fresh yeast, dissolved into the pre-ferment
    Yeast,
    /// Salt, added to the main dough only
    Salt,
    /// Honey, feeds the pre-ferment
    Honey,
    /// Olive oil, worked into the main dough late
    OliveOil,
}

impl Ingredient {
    /// All ingredient kinds in canonical display order
    pub const ALL: [Self; 6] = [
        Self::Flour,
        Self::Water,
        Self::Yeast,
        Self::Salt,
        Self::Honey,
        Self::OliveOil,
    ];

    /// Short human-readable name without a unit suffix
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Flour => "Flour",
            Self::Water => "Water",
            Self::Yeast => "Yeast",
            Self::Salt => "Salt",
            Self::Honey => "Honey",
            Self::OliveOil => "Olive Oil",
        }
    }

    /// Display label used in ingredient tables, unit included
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Flour => "Flour [g]",
            Self::Water => "Water [g]",
            Self::Yeast => "Yeast [g]",
            Self::Salt => "Salt [g]",
            Self::Honey => "Honey [g]",
            Self::OliveOil => "Olive Oil [g]",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The ingredient currently designated as the recipe's primary control
/// variable.
///
/// Only flour and water can size a recipe; the other ingredients exist in
/// quantities too small to drive proportions from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum KeyIngredient {
    /// Size the recipe from total flour mass
    #[default]
    Flour,
    /// Size the recipe from total water mass
    Water,
}

impl KeyIngredient {
    /// Parse from a string parameter.
    ///
    /// Returns `Flour` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "water" => Self::Water,
            _ => Self::Flour,
        }
    }

    /// String form used in parameters and serialized output
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flour => "flour",
            Self::Water => "water",
        }
    }

    /// The underlying ingredient this selector points at
    #[must_use]
    pub const fn ingredient(&self) -> Ingredient {
        match self {
            Self::Flour => Ingredient::Flour,
            Self::Water => Ingredient::Water,
        }
    }
}

impl fmt::Display for KeyIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mapping from [`Ingredient`] to a non-negative quantity in grams.
///
/// Construction enforces the dough invariant that flour and water are always
/// present; quantities are kept finite and non-negative through every mutation
/// path. Insertion order carries no meaning, iteration follows
/// [`Ingredient::ALL`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "HashMap<Ingredient, f64>",
    into = "HashMap<Ingredient, f64>"
)]
pub struct IngredientSet {
    quantities: HashMap<Ingredient, f64>,
}

impl TryFrom<HashMap<Ingredient, f64>> for IngredientSet {
    type Error = RecipeError;

    fn try_from(quantities: HashMap<Ingredient, f64>) -> Result<Self, Self::Error> {
        for required in [Ingredient::Flour, Ingredient::Water] {
            if !quantities.contains_key(&required) {
                return Err(RecipeError::MissingIngredient(required));
            }
        }
        for (&ingredient, &grams) in &quantities {
            if !grams.is_finite() || grams < 0.0 {
                return Err(RecipeError::InvalidQuantity { ingredient, grams });
            }
        }
        Ok(Self { quantities })
    }
}

impl From<IngredientSet> for HashMap<Ingredient, f64> {
    fn from(set: IngredientSet) -> Self {
        set.quantities
    }
}

impl IngredientSet {
    /// Builds a validated set from arbitrary quantities.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::MissingIngredient`] when flour or water is
    /// absent, or [`RecipeError::InvalidQuantity`] when any quantity is
    /// negative or not finite.
    pub fn new(quantities: HashMap<Ingredient, f64>) -> RecipeResult<Self> {
        Self::try_from(quantities)
    }

    /// Seeds a set from explicit flour and water quantities.
    ///
    /// Taking the two mandatory ingredients as typed parameters makes the
    /// construction invariant hold without a fallible check. Degenerate
    /// quantities are clamped to zero.
    #[must_use]
    pub fn with_base(flour_g: f64, water_g: f64) -> Self {
        let mut quantities = HashMap::new();
        quantities.insert(Ingredient::Flour, sanitize(flour_g));
        quantities.insert(Ingredient::Water, sanitize(water_g));
        Self { quantities }
    }

    /// Adds one more ingredient, builder style.
    ///
    /// Invalid quantities are logged and skipped so recipe seeding can stay
    /// infallible.
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: Ingredient, grams: f64) -> Self {
        if let Err(error) = self.set_quantity(ingredient, grams) {
            warn!(%error, "skipping ingredient with invalid quantity");
        }
        self
    }

    /// Returns the quantity for an ingredient, or 0 when it is absent
    #[must_use]
    pub fn quantity(&self, ingredient: Ingredient) -> f64 {
        self.quantities.get(&ingredient).copied().unwrap_or(0.0)
    }

    /// True when the ingredient is part of this set
    #[must_use]
    pub fn contains(&self, ingredient: Ingredient) -> bool {
        self.quantities.contains_key(&ingredient)
    }

    /// Number of distinct ingredients in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// True when the set holds no ingredients; unreachable through public
    /// constructors, which always seed flour and water
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Sets an ingredient to an absolute quantity.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::InvalidQuantity`] when `grams` is negative or
    /// not finite; the set is left unchanged.
    pub fn set_quantity(&mut self, ingredient: Ingredient, grams: f64) -> RecipeResult<()> {
        if !grams.is_finite() || grams < 0.0 {
            return Err(RecipeError::InvalidQuantity { ingredient, grams });
        }
        self.quantities.insert(ingredient, grams);
        Ok(())
    }

    /// Multiplies every quantity by `factor`, preserving all ratios.
    ///
    /// # Errors
    ///
    /// Returns [`RecipeError::NonPositiveFactor`] when `factor` is zero,
    /// negative, or not finite; the set is left unchanged.
    pub fn scale(&mut self, factor: f64) -> RecipeResult<()> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(RecipeError::NonPositiveFactor(factor));
        }
        for grams in self.quantities.values_mut() {
            *grams *= factor;
        }
        Ok(())
    }

    /// Sum of all quantities in grams
    #[must_use]
    pub fn total_grams(&self) -> f64 {
        self.quantities.values().sum()
    }

    /// Iterates present ingredients in canonical display order
    pub fn quantities(&self) -> impl Iterator<Item = (Ingredient, f64)> + '_ {
        Ingredient::ALL
            .iter()
            .copied()
            .filter_map(|ingredient| self.quantities.get(&ingredient).map(|g| (ingredient, *g)))
    }
}

/// Clamps a seed quantity to a usable value: negative, NaN, and infinite
/// inputs all become zero
fn sanitize(grams: f64) -> f64 {
    if grams.is_finite() && grams > 0.0 {
        grams
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_set() -> IngredientSet {
        IngredientSet::with_base(300.0, 300.0)
            .with_ingredient(Ingredient::Yeast, 6.0)
            .with_ingredient(Ingredient::Honey, 5.0)
    }

    #[test]
    fn test_construction_requires_water() {
        let mut quantities = HashMap::new();
        quantities.insert(Ingredient::Flour, 100.0);

        let result = IngredientSet::new(quantities);
        assert_eq!(result, Err(RecipeError::MissingIngredient(Ingredient::Water)));
    }

    #[test]
    fn test_construction_requires_flour() {
        let mut quantities = HashMap::new();
        quantities.insert(Ingredient::Water, 100.0);
        quantities.insert(Ingredient::Salt, 3.0);

        let result = IngredientSet::new(quantities);
        assert_eq!(result, Err(RecipeError::MissingIngredient(Ingredient::Flour)));
    }

    #[test]
    fn test_construction_rejects_negative_quantities() {
        let mut quantities = HashMap::new();
        quantities.insert(Ingredient::Flour, 100.0);
        quantities.insert(Ingredient::Water, -1.0);

        let result = IngredientSet::new(quantities);
        assert_eq!(
            result,
            Err(RecipeError::InvalidQuantity {
                ingredient: Ingredient::Water,
                grams: -1.0,
            })
        );
    }

    #[test]
    fn test_absent_ingredient_reads_zero() {
        let set = base_set();
        assert!((set.quantity(Ingredient::Salt) - 0.0).abs() < f64::EPSILON);
        assert!(!set.contains(Ingredient::Salt));
    }

    #[test]
    fn test_with_base_clamps_degenerate_seeds() {
        let set = IngredientSet::with_base(-5.0, f64::NAN);
        assert!((set.quantity(Ingredient::Flour) - 0.0).abs() < f64::EPSILON);
        assert!((set.quantity(Ingredient::Water) - 0.0).abs() < f64::EPSILON);
        assert!(set.contains(Ingredient::Flour));
        assert!(set.contains(Ingredient::Water));
    }

    #[test]
    fn test_set_quantity_rejects_non_finite() {
        let mut set = base_set();
        let before = set.clone();

        assert!(set.set_quantity(Ingredient::Flour, f64::INFINITY).is_err());
        assert!(set.set_quantity(Ingredient::Flour, -0.5).is_err());
        assert_eq!(set, before);
    }

    #[test]
    fn test_scale_multiplies_all_quantities() {
        let mut set = base_set();
        set.scale(2.0).unwrap();

        assert!((set.quantity(Ingredient::Flour) - 600.0).abs() < 1e-9);
        assert!((set.quantity(Ingredient::Water) - 600.0).abs() < 1e-9);
        assert!((set.quantity(Ingredient::Yeast) - 12.0).abs() < 1e-9);
        assert!((set.quantity(Ingredient::Honey) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_scale_rejects_non_positive_factors() {
        let mut set = base_set();
        let before = set.clone();

        assert_eq!(set.scale(0.0), Err(RecipeError::NonPositiveFactor(0.0)));
        assert_eq!(set.scale(-1.5), Err(RecipeError::NonPositiveFactor(-1.5)));
        assert!(set.scale(f64::NAN).is_err());
        assert_eq!(set, before, "rejected scale must leave the set unchanged");
    }

    #[test]
    fn test_total_is_sum_of_quantities() {
        let set = base_set();
        assert!((set.total_grams() - 611.0).abs() < 1e-9);
    }

    #[test]
    fn test_iteration_canonical_order() {
        let order: Vec<Ingredient> = base_set().quantities().map(|(i, _)| i).collect();
        assert_eq!(
            order,
            vec![
                Ingredient::Flour,
                Ingredient::Water,
                Ingredient::Yeast,
                Ingredient::Honey,
            ]
        );
    }

    #[test]
    fn test_deserialization_enforces_invariant() {
        let err = serde_json::from_str::<IngredientSet>(r#"{"flour": 100.0}"#);
        assert!(err.is_err());

        let ok = serde_json::from_str::<IngredientSet>(r#"{"flour": 100.0, "water": 70.0}"#);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_key_ingredient_parsing() {
        assert_eq!(KeyIngredient::from_str_param("water"), KeyIngredient::Water);
        assert_eq!(KeyIngredient::from_str_param("Flour"), KeyIngredient::Flour);
        assert_eq!(KeyIngredient::from_str_param("yeast"), KeyIngredient::Flour);
    }

    #[test]
    fn test_key_ingredient_mapping() {
        assert_eq!(KeyIngredient::Flour.ingredient(), Ingredient::Flour);
        assert_eq!(KeyIngredient::Water.ingredient(), Ingredient::Water);
        assert_eq!(KeyIngredient::default(), KeyIngredient::Flour);
    }
}
