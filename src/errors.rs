use schema::{ParseTypeError, PokemonType};
use std::fmt;

/// Main error type for the Pokedex core front ends
#[derive(Debug)]
pub enum PokedexError {
    /// A type name could not be parsed
    Type(ParseTypeError),
    /// A defending Pokemon was given fewer than one or more than two types
    InvalidTypeCount(usize),
    /// A defending Pokemon was given the same type twice
    RepeatedType(PokemonType),
    /// A roster operation was rejected
    Team(TeamError),
    /// Fixture data could not be read or parsed
    Data(DataError),
}

/// Errors related to roster operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamError {
    /// The team already holds the maximum number of members
    TeamFull(usize),
    /// A member with this id is already on the team
    DuplicateMember(u16),
    /// No member with this id is on the team
    MemberNotFound(u16),
    /// A Pokemon must have one or two types
    InvalidTypeCount { id: u16, count: usize },
    /// A Pokemon lists the same type twice
    RepeatedType { id: u16, pokemon_type: PokemonType },
}

/// Errors related to loading fixture data
#[derive(Debug)]
pub enum DataError {
    /// The file could not be read
    Io(std::io::Error),
    /// The file contents were not valid RON for the expected shape
    Ron(ron::error::SpannedError),
    /// The contents were not valid JSON for the expected shape
    Json(serde_json::Error),
}

impl fmt::Display for PokedexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PokedexError::Type(err) => write!(f, "Type error: {}", err),
            PokedexError::InvalidTypeCount(count) => {
                write!(f, "Expected one or two types, got {}", count)
            }
            PokedexError::RepeatedType(t) => write!(f, "Type {} was given twice", t),
            PokedexError::Team(err) => write!(f, "Team error: {}", err),
            PokedexError::Data(err) => write!(f, "Data error: {}", err),
        }
    }
}

impl fmt::Display for TeamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamError::TeamFull(max) => write!(f, "Team is full ({} members)", max),
            TeamError::DuplicateMember(id) => write!(f, "Pokemon #{} is already on the team", id),
            TeamError::MemberNotFound(id) => write!(f, "Pokemon #{} is not on the team", id),
            TeamError::InvalidTypeCount { id, count } => {
                write!(f, "Pokemon #{} has {} types, expected one or two", id, count)
            }
            TeamError::RepeatedType { id, pokemon_type } => {
                write!(f, "Pokemon #{} lists {} twice", id, pokemon_type)
            }
        }
    }
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io(err) => write!(f, "Failed to read data file: {}", err),
            DataError::Ron(err) => write!(f, "Malformed RON data: {}", err),
            DataError::Json(err) => write!(f, "Malformed JSON data: {}", err),
        }
    }
}

impl std::error::Error for PokedexError {}
impl std::error::Error for TeamError {}
impl std::error::Error for DataError {}

impl From<ParseTypeError> for PokedexError {
    fn from(err: ParseTypeError) -> Self {
        PokedexError::Type(err)
    }
}

impl From<TeamError> for PokedexError {
    fn from(err: TeamError) -> Self {
        PokedexError::Team(err)
    }
}

impl From<DataError> for PokedexError {
    fn from(err: DataError) -> Self {
        PokedexError::Data(err)
    }
}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err)
    }
}

impl From<ron::error::SpannedError> for DataError {
    fn from(err: ron::error::SpannedError) -> Self {
        DataError::Ron(err)
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Json(err)
    }
}

/// Type alias for Results using PokedexError
pub type PokedexResult<T> = Result<T, PokedexError>;

/// Type alias for Results using TeamError
pub type TeamResult<T> = Result<T, TeamError>;

/// Type alias for Results using DataError
pub type DataResult<T> = Result<T, DataError>;
