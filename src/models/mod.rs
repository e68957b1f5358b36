// ABOUTME: Core data models for the two-stage dough recipe
// ABOUTME: Re-exports Ingredient, IngredientSet, and Dough from their submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Impasto Contributors

//! # Data Models
//!
//! The recipe is modelled bottom-up:
//!
//! - [`Ingredient`]: closed enumeration of everything that can go into a dough
//! - [`IngredientSet`]: validated ingredient-to-grams mapping (flour and water
//!   are mandatory)
//! - [`Dough`]: one dough component, an ingredient set plus an optional
//!   hydration fraction, with the multiplicative update operations the
//!   calculator composes
//!
//! ## Design Principles
//!
//! - **Closed ingredient set**: ingredient kinds are a compile-time enum, not
//!   runtime strings, so a typo cannot create a phantom ingredient
//! - **Ratios are the invariant**: every mutation is a uniform rescale that
//!   preserves ingredient proportions within a component; only hydration
//!   deliberately moves water relative to flour
//! - **Serializable**: all models support JSON serialization for snapshots

pub mod dough;
pub mod ingredient;

pub use dough::Dough;
pub use ingredient::{Ingredient, IngredientSet, KeyIngredient};
