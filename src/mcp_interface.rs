//! Text rendering and argument handling shared by the CLI and the MCP server.
//!
//! Everything here is presentation: the functions take core results and turn
//! them into plain text, or turn user-typed strings into core inputs.

use crate::effectiveness::{
    defensive_multiplier, defensive_weaknesses, offensive_strengths, type_profile,
    MAX_TYPES_PER_POKEMON,
};
use crate::errors::{PokedexError, PokedexResult};
use crate::evolution::EvolutionChain;
use crate::synergy::SynergyReport;
use crate::team::{Team, MAX_TEAM_SIZE};
use schema::{Locale, PokemonType};

/// Parse type names (English or German).
pub fn parse_types<S: AsRef<str>>(names: &[S]) -> PokedexResult<Vec<PokemonType>> {
    names
        .iter()
        .map(|name| name.as_ref().parse::<PokemonType>().map_err(PokedexError::from))
        .collect()
}

/// Parse the types of a defending Pokemon: one type, or two distinct ones.
pub fn parse_defender_types<S: AsRef<str>>(names: &[S]) -> PokedexResult<Vec<PokemonType>> {
    let types = parse_types(names)?;
    if types.is_empty() || types.len() > MAX_TYPES_PER_POKEMON {
        return Err(PokedexError::InvalidTypeCount(types.len()));
    }
    if let [first, second] = types.as_slice() {
        if first == second {
            return Err(PokedexError::RepeatedType(*first));
        }
    }
    Ok(types)
}

fn type_list<'a>(types: impl IntoIterator<Item = &'a PokemonType>, locale: Locale) -> String {
    let names: Vec<&str> = types.into_iter().map(|t| t.name(locale)).collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

/// Full offensive and defensive breakdown of one type.
pub fn format_type_profile(pokemon_type: PokemonType, locale: Locale) -> String {
    let profile = type_profile(pokemon_type);
    let o = &profile.offensive;
    let d = &profile.defensive;

    let mut output = format!("{} type\n", pokemon_type.name(locale));
    output.push_str("Offense:\n");
    output.push_str(&format!("  Super effective against: {}\n", type_list(&o.strong_against, locale)));
    output.push_str(&format!("  Not very effective against: {}\n", type_list(&o.weak_against, locale)));
    output.push_str(&format!("  No effect against: {}\n", type_list(&o.no_effect_against, locale)));
    output.push_str("Defense:\n");
    output.push_str(&format!("  Weak to: {}\n", type_list(&d.weak_from, locale)));
    output.push_str(&format!("  Resists: {}\n", type_list(&d.resistant_to, locale)));
    output.push_str(&format!("  Immune to: {}\n", type_list(&d.immune_to, locale)));
    output
}

/// Weaknesses of a defender, each tagged with its stacked multiplier.
pub fn format_defensive_weaknesses(defender_types: &[PokemonType], locale: Locale) -> String {
    let weaknesses = defensive_weaknesses(defender_types);
    let header = format!("{} is weak to:", type_list(defender_types, locale));
    if weaknesses.is_empty() {
        return format!("{} nothing\n", header);
    }

    let mut output = format!("{}\n", header);
    for attacker in weaknesses {
        let multiplier = defensive_multiplier(attacker, defender_types);
        output.push_str(&format!("  {} ({}x)\n", attacker.name(locale), multiplier));
    }
    output
}

pub fn format_offensive_strengths(attacker_types: &[PokemonType], locale: Locale) -> String {
    let strengths = offensive_strengths(attacker_types);
    format!(
        "{} is super effective against: {}\n",
        type_list(attacker_types, locale),
        type_list(&strengths, locale)
    )
}

/// One line per stage, with the condition that leads into it.
pub fn format_evolution_chain(chain: &EvolutionChain, target_id: u16) -> String {
    let mut output = String::from("Evolution line:\n");
    for stage in chain.stages() {
        let marker = if stage.id == target_id { "*" } else { " " };
        match &stage.condition {
            Some(condition) => {
                output.push_str(&format!("{} #{:03} ({})\n", marker, stage.id, condition))
            }
            None => output.push_str(&format!("{} #{:03}\n", marker, stage.id)),
        }
    }
    if !chain.contains(target_id) {
        output.push_str(&format!("(#{:03} is not part of this tree)\n", target_id));
    }
    output
}

pub fn format_team(team: &Team, locale: Locale) -> String {
    if team.is_empty() {
        return "Your team is empty.\n".to_string();
    }

    let mut output = format!("Team ({}/{}):\n", team.len(), MAX_TEAM_SIZE);
    for (i, pokemon) in team.members().iter().enumerate() {
        output.push_str(&format!(
            "  {}. #{:03} {} [{}]\n",
            i + 1,
            pokemon.id,
            pokemon.name,
            type_list(&pokemon.types, locale)
        ));
    }
    output
}

/// Weakness and coverage tallies followed by the rendered suggestions.
pub fn format_synergy_report(report: &SynergyReport, locale: Locale) -> String {
    let mut output = String::new();

    if !report.weakness_counts.is_empty() {
        output.push_str("Weaknesses (members weak to each type):\n");
        for (t, count) in &report.weakness_counts {
            output.push_str(&format!("  {}: {}\n", t.name(locale), count));
        }
    }

    if !report.coverage_counts.is_empty() {
        output.push_str("Coverage (members super effective against each type):\n");
        for (t, count) in &report.coverage_counts {
            output.push_str(&format!("  {}: {}\n", t.name(locale), count));
        }
    }

    output.push_str("Suggestions:\n");
    if report.suggestions.is_empty() {
        output.push_str("  (none)\n");
    }
    for suggestion in &report.suggestions {
        output.push_str(&format!("  - {}\n", suggestion));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::resolve_evolution_chain;
    use crate::synergy::analyze_team;
    use pretty_assertions::assert_eq;
    use schema::{EvolutionNode, Pokemon};

    #[test]
    fn test_parse_defender_types() {
        assert_eq!(
            parse_defender_types(&["Feuer", "flying"]).unwrap(),
            vec![PokemonType::Fire, PokemonType::Flying]
        );
        assert!(matches!(
            parse_defender_types(&["Fire", "Water", "Grass"]),
            Err(PokedexError::InvalidTypeCount(3))
        ));
        assert!(matches!(
            parse_defender_types::<&str>(&[]),
            Err(PokedexError::InvalidTypeCount(0))
        ));
        assert!(matches!(parse_types(&["Plasma"]), Err(PokedexError::Type(_))));
        // "Feuer" and "fire" name the same type.
        assert!(matches!(
            parse_defender_types(&["Feuer", "fire"]),
            Err(PokedexError::RepeatedType(PokemonType::Fire))
        ));
    }

    #[test]
    fn test_format_defensive_weaknesses_shows_quad() {
        let text = format_defensive_weaknesses(&[PokemonType::Grass, PokemonType::Flying], Locale::English);
        assert!(text.contains("Ice (4x)"), "{}", text);
        assert!(text.contains("Rock (2x)"), "{}", text);
    }

    #[test]
    fn test_format_type_profile_german() {
        let text = format_type_profile(PokemonType::Dragon, Locale::German);
        assert!(text.starts_with("Drache type\n"));
        assert!(text.contains("No effect against: Fee\n"));
    }

    #[test]
    fn test_format_evolution_chain_marks_target() {
        let tree = EvolutionNode::new(1).evolves_to(EvolutionNode::new(2).with_condition("Lvl 16"));
        let chain = resolve_evolution_chain(&tree, 2);
        assert_eq!(
            format_evolution_chain(&chain, 2),
            "Evolution line:\n  #001\n* #002 (Lvl 16)\n"
        );
    }

    #[test]
    fn test_format_team_and_report() {
        let team = Team::try_from(vec![Pokemon::new(
            25,
            "Pikachu",
            vec![PokemonType::Electric],
        )])
        .unwrap();
        assert_eq!(
            format_team(&team, Locale::English),
            "Team (1/6):\n  1. #025 Pikachu [Electric]\n"
        );

        let report = analyze_team(team.members());
        let text = format_synergy_report(&report, Locale::English);
        assert!(text.contains("Weaknesses (members weak to each type):\n  Ground: 1\n"));
        assert!(text.ends_with("Suggestions:\n  (none)\n"));
    }
}
