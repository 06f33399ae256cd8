// Pokedex Schema - Shared type definitions
// This crate holds the closed type enum, the type chart and the plain data
// records supplied by the reference data service, so that front ends can
// depend on them without pulling in the analysis code.

// Re-export the main types
pub use evolution_data::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod evolution_data;
pub mod pokemon_types;
pub mod species_data;
