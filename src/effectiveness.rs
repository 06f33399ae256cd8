//! Offensive and defensive type matchups built on the static type chart.
//!
//! Offense and defense combine dual types differently. An attacker with two
//! types threatens the union of what each type hits super effectively.
//! A defender with two types takes the product of both multipliers, so a
//! resistance and a weakness to the same attacker cancel out, and two
//! weaknesses stack to 4x.

use schema::{Multiplier, PokemonType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Maximum number of types a single Pokemon can have.
pub const MAX_TYPES_PER_POKEMON: usize = 2;

/// Types that at least one of `attacker_types` hits super effectively.
pub fn offensive_strengths(attacker_types: &[PokemonType]) -> BTreeSet<PokemonType> {
    attacker_types
        .iter()
        .flat_map(|&attacker| {
            PokemonType::all().filter(move |&defender| {
                PokemonType::type_effectiveness(attacker, defender) == Multiplier::SuperEffective
            })
        })
        .collect()
}

/// Combined multiplier of `attacker` against a defender with `defender_types`.
///
/// Panics if `defender_types` is empty, holds more than two types, or lists
/// the same type twice.
pub fn defensive_multiplier(attacker: PokemonType, defender_types: &[PokemonType]) -> f32 {
    assert!(
        !defender_types.is_empty() && defender_types.len() <= MAX_TYPES_PER_POKEMON,
        "a defender must have one or two types, got {}",
        defender_types.len()
    );
    assert!(
        defender_types.len() < 2 || defender_types[0] != defender_types[1],
        "a defender must have two distinct types, got {:?} twice",
        defender_types[0]
    );

    defender_types
        .iter()
        .map(|&defender| PokemonType::type_effectiveness(attacker, defender).value())
        .product()
}

/// Attacking types whose stacked multiplier against `defender_types` exceeds 1.
///
/// Panics under the same conditions as [`defensive_multiplier`].
pub fn defensive_weaknesses(defender_types: &[PokemonType]) -> BTreeSet<PokemonType> {
    PokemonType::all()
        .filter(|&attacker| defensive_multiplier(attacker, defender_types) > 1.0)
        .collect()
}

/// How a single type fares when attacking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffensiveProfile {
    pub strong_against: Vec<PokemonType>,
    pub weak_against: Vec<PokemonType>,
    pub no_effect_against: Vec<PokemonType>,
    pub neutral_against: Vec<PokemonType>,
}

/// How a single type fares when defending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefensiveProfile {
    pub weak_from: Vec<PokemonType>,
    pub resistant_to: Vec<PokemonType>,
    pub immune_to: Vec<PokemonType>,
    pub neutral_from: Vec<PokemonType>,
}

/// Full breakdown of one type. Each axis partitions all 18 types:
/// every type appears in exactly one bucket of `offensive` and exactly one
/// bucket of `defensive`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeProfile {
    pub pokemon_type: PokemonType,
    pub offensive: OffensiveProfile,
    pub defensive: DefensiveProfile,
}

pub fn type_profile(pokemon_type: PokemonType) -> TypeProfile {
    let mut offensive = OffensiveProfile::default();
    for defender in PokemonType::all() {
        let bucket = match PokemonType::type_effectiveness(pokemon_type, defender) {
            Multiplier::SuperEffective => &mut offensive.strong_against,
            Multiplier::NotVeryEffective => &mut offensive.weak_against,
            Multiplier::Immune => &mut offensive.no_effect_against,
            Multiplier::Neutral => &mut offensive.neutral_against,
        };
        bucket.push(defender);
    }

    let mut defensive = DefensiveProfile::default();
    for attacker in PokemonType::all() {
        let bucket = match PokemonType::type_effectiveness(attacker, pokemon_type) {
            Multiplier::SuperEffective => &mut defensive.weak_from,
            Multiplier::NotVeryEffective => &mut defensive.resistant_to,
            Multiplier::Immune => &mut defensive.immune_to,
            Multiplier::Neutral => &mut defensive.neutral_from,
        };
        bucket.push(attacker);
    }

    TypeProfile {
        pokemon_type,
        offensive,
        defensive,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use PokemonType::*;

    fn set(types: &[PokemonType]) -> BTreeSet<PokemonType> {
        types.iter().copied().collect()
    }

    #[test]
    fn test_single_type_weaknesses_match_chart_column() {
        for defender in PokemonType::all() {
            let expected: BTreeSet<PokemonType> = PokemonType::all()
                .filter(|&a| PokemonType::type_effectiveness(a, defender).value() > 1.0)
                .collect();
            assert_eq!(defensive_weaknesses(&[defender]), expected, "{}", defender);
        }
    }

    #[rstest]
    #[case::fire(&[Fire], &[Water, Ground, Rock])]
    #[case::grass(&[Grass], &[Fire, Ice, Poison, Flying, Bug])]
    #[case::normal(&[Normal], &[Fighting])]
    #[case::water_ground(&[Water, Ground], &[Grass])]
    #[case::steel_fairy(&[Steel, Fairy], &[Fire, Ground])]
    fn test_defensive_weaknesses(#[case] defender: &[PokemonType], #[case] expected: &[PokemonType]) {
        assert_eq!(defensive_weaknesses(defender), set(expected));
    }

    #[test]
    fn test_resistance_cancels_weakness() {
        // Water resists Ice, Ground is weak to it: 0.5 * 2 = 1.
        assert_eq!(defensive_multiplier(Ice, &[Water, Ground]), 1.0);
        assert!(!defensive_weaknesses(&[Water, Ground]).contains(&Ice));
    }

    #[test]
    fn test_quad_weakness() {
        // Grass and Flying are both weak to Ice.
        assert_eq!(defensive_multiplier(Ice, &[Grass, Flying]), 4.0);
        assert!(defensive_weaknesses(&[Grass, Flying]).contains(&Ice));
    }

    #[test]
    fn test_immunity_absorbs_weakness() {
        // Flying is immune to Ground even though Electric is weak to it.
        assert_eq!(defensive_multiplier(Ground, &[Electric, Flying]), 0.0);
        assert!(!defensive_weaknesses(&[Electric, Flying]).contains(&Ground));
    }

    #[test]
    #[should_panic(expected = "one or two types")]
    fn test_three_defender_types_panics() {
        defensive_weaknesses(&[Fire, Water, Grass]);
    }

    #[test]
    #[should_panic(expected = "one or two types")]
    fn test_empty_defender_panics() {
        defensive_weaknesses(&[]);
    }

    #[test]
    #[should_panic(expected = "two distinct types")]
    fn test_repeated_defender_type_panics() {
        // [Fire, Fire] would otherwise report a 4x Water weakness.
        defensive_multiplier(Water, &[Fire, Fire]);
    }

    #[test]
    fn test_offensive_strengths_are_a_union() {
        assert_eq!(offensive_strengths(&[Fire]), set(&[Grass, Ice, Bug, Steel]));
        assert_eq!(offensive_strengths(&[Water]), set(&[Fire, Ground, Rock]));
        assert_eq!(
            offensive_strengths(&[Fire, Water]),
            set(&[Fire, Grass, Ice, Ground, Bug, Rock, Steel])
        );
        assert!(offensive_strengths(&[Normal]).is_empty());
        assert!(offensive_strengths(&[]).is_empty());
    }

    #[test]
    fn test_type_profile_partitions_both_axes() {
        for t in PokemonType::all() {
            let profile = type_profile(t);
            let o = &profile.offensive;
            let d = &profile.defensive;

            let mut offensive: Vec<PokemonType> = [
                &o.strong_against,
                &o.weak_against,
                &o.no_effect_against,
                &o.neutral_against,
            ]
            .into_iter()
            .flatten()
            .copied()
            .collect();
            offensive.sort();

            let mut defensive: Vec<PokemonType> = [
                &d.weak_from,
                &d.resistant_to,
                &d.immune_to,
                &d.neutral_from,
            ]
            .into_iter()
            .flatten()
            .copied()
            .collect();
            defensive.sort();

            let all: Vec<PokemonType> = PokemonType::all().collect();
            assert_eq!(offensive, all, "offensive axis of {}", t);
            assert_eq!(defensive, all, "defensive axis of {}", t);
        }
    }

    #[test]
    fn test_ghost_profile() {
        let profile = type_profile(Ghost);
        assert_eq!(profile.offensive.strong_against, vec![Psychic, Ghost]);
        assert_eq!(profile.offensive.weak_against, vec![Dark]);
        assert_eq!(profile.offensive.no_effect_against, vec![Normal]);
        assert_eq!(profile.defensive.weak_from, vec![Ghost, Dark]);
        assert_eq!(profile.defensive.resistant_to, vec![Poison, Bug]);
        assert_eq!(profile.defensive.immune_to, vec![Normal, Fighting]);
    }
}
