// ABOUTME: Error types for dough recipe calculations and configuration parsing
// ABOUTME: Defines RecipeError with structured context and the RecipeResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Impasto Contributors

//! # Recipe Error Types
//!
//! Every fallible recipe operation returns [`RecipeResult`]. Errors carry the
//! ingredient or value that caused the failure so callers can decide whether to
//! surface, log, or skip the update. The interactive layers treat most of these
//! as benign (log and keep the previous state); library callers get the full
//! picture and can match on the variant.

use crate::models::Ingredient;

/// Common error types for dough recipe operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecipeError {
    /// An operation referenced an ingredient the dough does not contain
    #[error("Ingredient '{0}' is not part of this dough")]
    MissingIngredient(Ingredient),

    /// Hydration must stay within the accepted interval
    #[error("Hydration {0} is outside the accepted range (0, 1]")]
    HydrationOutOfRange(f64),

    /// Proportional rescaling needs a nonzero current quantity to divide by
    #[error("Cannot rescale against '{0}': its current quantity is zero")]
    ZeroQuantityRescale(Ingredient),

    /// A target quantity was negative or not finite
    #[error("Invalid quantity {grams} g for ingredient '{ingredient}'")]
    InvalidQuantity {
        /// Ingredient the quantity was meant for
        ingredient: Ingredient,
        /// The rejected value in grams
        grams: f64,
    },

    /// A scale factor was zero, negative, or not finite
    #[error("Scale factor {0} must be a positive finite number")]
    NonPositiveFactor(f64),

    /// Pizza count or per-pizza weight would produce a degenerate batch
    #[error("Invalid batch: {count} pizzas at {weight_per_pizza} g per pizza")]
    InvalidBatch {
        /// Requested number of pizzas
        count: f64,
        /// Requested weight of a single dough ball in grams
        weight_per_pizza: f64,
    },

    /// An environment variable held a value that could not be parsed
    #[error("Invalid value '{value}' for configuration variable {var}")]
    InvalidConfig {
        /// Name of the offending environment variable
        var: String,
        /// The raw value that failed to parse
        value: String,
    },
}

/// Result type alias for recipe operations
pub type RecipeResult<T> = Result<T, RecipeError>;
