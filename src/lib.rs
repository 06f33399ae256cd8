// In: src/lib.rs

//! Pokedex Core
//!
//! The deterministic part of a Pokedex: type effectiveness over the 18-type
//! chart, resolution of branching evolution trees into a single line, and
//! rule-based synergy diagnostics for a team of up to six Pokemon. All
//! analysis is pure and synchronous; fetching and storing data is left to
//! the caller.

// --- MODULE DECLARATIONS ---
pub mod cli;
pub mod data;
pub mod effectiveness;
pub mod errors;
pub mod evolution;
pub mod mcp_interface;
pub mod synergy;
pub mod team;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    BaseStats, EvolutionNode, EvolutionStage, Locale, Multiplier, ParseTypeError, Pokemon,
    PokemonType,
};

// --- From this crate's modules (`src/`) ---

// Type matchups.
pub use effectiveness::{
    defensive_multiplier, defensive_weaknesses, offensive_strengths, type_profile,
    DefensiveProfile, OffensiveProfile, TypeProfile,
};

// Evolution lines.
pub use evolution::{leaf_paths, resolve_evolution_chain, EvolutionChain};

// Team roster and analysis.
pub use synergy::{analyze_team, analyze_team_localized, Suggestion, SynergyReport};
pub use team::{Team, MAX_TEAM_SIZE};

// Crate-specific error and result types.
pub use errors::{
    DataError, DataResult, PokedexError, PokedexResult, TeamError, TeamResult,
};
