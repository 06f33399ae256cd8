use crate::effectiveness::MAX_TYPES_PER_POKEMON;
use crate::errors::{TeamError, TeamResult};
use schema::Pokemon;
use serde::{Deserialize, Serialize};

/// Maximum number of Pokemon on a team.
pub const MAX_TEAM_SIZE: usize = 6;

/// An ordered roster of up to six Pokemon with unique ids.
///
/// Serializes as a plain list; deserializing re-checks the roster rules so a
/// stored team can't come back oversized or with duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Pokemon>", into = "Vec<Pokemon>")]
pub struct Team {
    members: Vec<Pokemon>,
}

impl Team {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pokemon: Pokemon) -> TeamResult<()> {
        if self.is_full() {
            return Err(TeamError::TeamFull(MAX_TEAM_SIZE));
        }
        if self.contains(pokemon.id) {
            return Err(TeamError::DuplicateMember(pokemon.id));
        }
        if pokemon.types.is_empty() || pokemon.types.len() > MAX_TYPES_PER_POKEMON {
            return Err(TeamError::InvalidTypeCount {
                id: pokemon.id,
                count: pokemon.types.len(),
            });
        }
        if let [first, second] = pokemon.types.as_slice() {
            if first == second {
                return Err(TeamError::RepeatedType {
                    id: pokemon.id,
                    pokemon_type: *first,
                });
            }
        }
        self.members.push(pokemon);
        Ok(())
    }

    /// Remove and return the member with `id`.
    pub fn remove(&mut self, id: u16) -> TeamResult<Pokemon> {
        let index = self
            .members
            .iter()
            .position(|p| p.id == id)
            .ok_or(TeamError::MemberNotFound(id))?;
        Ok(self.members.remove(index))
    }

    pub fn contains(&self, id: u16) -> bool {
        self.members.iter().any(|p| p.id == id)
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn members(&self) -> &[Pokemon] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_TEAM_SIZE
    }
}

impl TryFrom<Vec<Pokemon>> for Team {
    type Error = TeamError;

    fn try_from(members: Vec<Pokemon>) -> Result<Self, Self::Error> {
        let mut team = Team::new();
        for pokemon in members {
            team.add(pokemon)?;
        }
        Ok(team)
    }
}

impl From<Team> for Vec<Pokemon> {
    fn from(team: Team) -> Self {
        team.members
    }
}
