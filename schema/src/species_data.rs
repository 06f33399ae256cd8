use crate::PokemonType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
    pub sp_attack: u8,
    pub sp_defense: u8,
    pub speed: u8,
}

impl BaseStats {
    pub fn total(&self) -> u16 {
        self.hp as u16
            + self.attack as u16
            + self.defense as u16
            + self.sp_attack as u16
            + self.sp_defense as u16
            + self.speed as u16
    }
}

/// A Pokemon record as supplied by the reference data service.
/// Only `types` matters to the analysis; the rest is carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u16,
    pub name: String,
    pub types: Vec<PokemonType>, // One or two entries
    #[serde(default)]
    pub base_stats: Option<BaseStats>,
}

impl Pokemon {
    pub fn new(id: u16, name: impl Into<String>, types: Vec<PokemonType>) -> Self {
        Self {
            id,
            name: name.into(),
            types,
            base_stats: None,
        }
    }
}
