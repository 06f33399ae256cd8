use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

/// The 18 elemental types. Declaration order is the canonical iteration
/// order and doubles as the row/column index into the type chart.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

/// Display language for type names and rendered diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    English,
    German,
}

/// Damage scaling of one attacking type against one defending type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Multiplier {
    Immune,
    NotVeryEffective,
    Neutral,
    SuperEffective,
}

impl Multiplier {
    pub fn value(self) -> f32 {
        match self {
            Multiplier::Immune => 0.0,
            Multiplier::NotVeryEffective => 0.5,
            Multiplier::Neutral => 1.0,
            Multiplier::SuperEffective => 2.0,
        }
    }
}

const O: Multiplier = Multiplier::Immune;
const H: Multiplier = Multiplier::NotVeryEffective;
const N: Multiplier = Multiplier::Neutral;
const S: Multiplier = Multiplier::SuperEffective;

// Rows: attacker. Columns: defender. Both in `PokemonType` declaration order:
// Nor Fir Wat Gra Ele Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Dar Ste Fai
#[rustfmt::skip]
const TYPE_CHART: [[Multiplier; PokemonType::COUNT]; PokemonType::COUNT] = [
    /* Normal   */ [N, N, N, N, N, N, N, N, N, N, N, N, H, O, N, N, H, N],
    /* Fire     */ [N, H, H, S, N, S, N, N, N, N, N, S, H, N, H, N, S, N],
    /* Water    */ [N, S, H, H, N, N, N, N, S, N, N, N, S, N, H, N, N, N],
    /* Grass    */ [N, H, S, H, N, N, N, H, S, H, N, H, S, N, H, N, H, N],
    /* Electric */ [N, N, S, H, H, N, N, N, O, S, N, N, N, N, H, N, N, N],
    /* Ice      */ [N, H, H, S, N, H, N, N, S, S, N, N, N, N, S, N, H, N],
    /* Fighting */ [S, N, N, N, N, S, N, H, N, H, H, H, S, O, N, S, S, H],
    /* Poison   */ [N, N, N, S, N, N, N, H, H, N, N, N, H, H, N, N, O, S],
    /* Ground   */ [N, S, N, H, S, N, N, S, N, O, N, H, S, N, N, N, S, N],
    /* Flying   */ [N, N, N, S, H, N, S, N, N, N, N, S, H, N, N, N, H, N],
    /* Psychic  */ [N, N, N, N, N, N, S, S, N, N, H, N, N, N, N, O, H, N],
    /* Bug      */ [N, H, N, S, N, N, H, H, N, H, S, N, N, H, N, S, H, H],
    /* Rock     */ [N, S, N, N, N, S, H, N, H, S, N, S, N, N, N, N, H, N],
    /* Ghost    */ [O, N, N, N, N, N, N, N, N, N, S, N, N, S, N, H, N, N],
    /* Dragon   */ [N, N, N, N, N, N, N, N, N, N, N, N, N, N, S, N, H, O],
    /* Dark     */ [N, N, N, N, N, N, H, N, N, N, S, N, N, S, N, H, N, H],
    /* Steel    */ [N, H, H, N, H, S, N, N, N, N, N, N, S, N, N, N, H, S],
    /* Fairy    */ [N, H, N, N, N, N, S, H, N, N, N, N, N, N, S, S, H, N],
];

impl PokemonType {
    /// Type effectiveness multiplier for an attacking type against a single
    /// defending type. Pairs without an explicit chart entry are neutral.
    pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> Multiplier {
        TYPE_CHART[attacking as usize][defending as usize]
    }

    pub fn is_immune(attacking: PokemonType, defending: PokemonType) -> bool {
        Self::type_effectiveness(attacking, defending) == Multiplier::Immune
    }

    /// All 18 types in canonical order.
    pub fn all() -> impl Iterator<Item = PokemonType> {
        PokemonType::iter()
    }

    pub fn name(self, locale: Locale) -> &'static str {
        match locale {
            Locale::English => self.english_name(),
            Locale::German => self.german_name(),
        }
    }

    pub fn english_name(self) -> &'static str {
        use PokemonType::*;
        match self {
            Normal => "Normal",
            Fire => "Fire",
            Water => "Water",
            Grass => "Grass",
            Electric => "Electric",
            Ice => "Ice",
            Fighting => "Fighting",
            Poison => "Poison",
            Ground => "Ground",
            Flying => "Flying",
            Psychic => "Psychic",
            Bug => "Bug",
            Rock => "Rock",
            Ghost => "Ghost",
            Dragon => "Dragon",
            Dark => "Dark",
            Steel => "Steel",
            Fairy => "Fairy",
        }
    }

    pub fn german_name(self) -> &'static str {
        use PokemonType::*;
        match self {
            Normal => "Normal",
            Fire => "Feuer",
            Water => "Wasser",
            Grass => "Pflanze",
            Electric => "Elektro",
            Ice => "Eis",
            Fighting => "Kampf",
            Poison => "Gift",
            Ground => "Boden",
            Flying => "Flug",
            Psychic => "Psycho",
            Bug => "Käfer",
            Rock => "Gestein",
            Ghost => "Geist",
            Dragon => "Drache",
            Dark => "Unlicht",
            Steel => "Stahl",
            Fairy => "Fee",
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Returned when text names neither an English nor a German type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTypeError(pub String);

impl fmt::Display for ParseTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown type: {}", self.0)
    }
}

impl std::error::Error for ParseTypeError {}

impl FromStr for PokemonType {
    type Err = ParseTypeError;

    /// Accepts English or German names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PokemonType::iter()
            .find(|t| {
                t.english_name().to_lowercase() == wanted
                    || t.german_name().to_lowercase() == wanted
            })
            .ok_or_else(|| ParseTypeError(s.to_string()))
    }
}
