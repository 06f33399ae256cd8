//! Argument dispatch for the `pokedex` binary.
//!
//! Exit codes: 0 on success, 1 when a command fails at runtime (unreadable
//! file, unknown type name, invalid roster), 2 when the arguments don't fit
//! the usage.

use std::path::Path;

use crate::data::{load_evolution_tree, load_team};
use crate::errors::{PokedexError, PokedexResult};
use crate::evolution::resolve_evolution_chain;
use crate::mcp_interface::{
    format_defensive_weaknesses, format_evolution_chain, format_offensive_strengths,
    format_synergy_report, format_team, format_type_profile, parse_defender_types, parse_types,
};
use crate::synergy::analyze_team_localized;
use schema::{Locale, PokemonType};

pub const USAGE: &str = "usage: pokedex [--de] <command>
  type <TYPE>                 full offensive/defensive breakdown
  weak <TYPE> [TYPE]          weaknesses of a single or dual type
  strong <TYPE> [TYPE]        types hit super effectively
  team <roster.ron>           synergy analysis of a saved team
  evolution <tree.ron> <ID>   evolution line containing ID";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Type,
    Weak,
    Strong,
    Team,
    Evolution,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.first().map(String::as_str) {
        Some("type") => Some(Command::Type),
        Some("weak") => Some(Command::Weak),
        Some("strong") => Some(Command::Strong),
        Some("team") => Some(Command::Team),
        Some("evolution") => Some(Command::Evolution),
        _ => None,
    }
}

/// What a command produced, before anything is written to the terminal.
#[derive(Debug)]
pub enum Outcome {
    Output(String),
    Usage,
    Failed(PokedexError),
}

impl Outcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Output(_) => 0,
            Outcome::Failed(_) => 1,
            Outcome::Usage => 2,
        }
    }
}

/// Run the command line (program name already stripped) and return the exit code.
pub fn run_with_args(args: &[String]) -> i32 {
    let outcome = dispatch(args);
    match &outcome {
        Outcome::Output(output) => print!("{}", output),
        Outcome::Usage => eprintln!("{}", USAGE),
        Outcome::Failed(err) => eprintln!("error: {}", err),
    }
    outcome.exit_code()
}

pub fn dispatch(args: &[String]) -> Outcome {
    let locale = if args.iter().any(|arg| arg == "--de") {
        Locale::German
    } else {
        Locale::English
    };
    let args: Vec<String> = args.iter().filter(|arg| *arg != "--de").cloned().collect();

    let result = match parse_command(&args) {
        Some(Command::Type) => handle_type(&args[1..], locale),
        Some(Command::Weak) => handle_weak(&args[1..], locale),
        Some(Command::Strong) => handle_strong(&args[1..], locale),
        Some(Command::Team) => handle_team(&args[1..], locale),
        Some(Command::Evolution) => handle_evolution(&args[1..]),
        None => return Outcome::Usage,
    };

    match result {
        Ok(Some(output)) => Outcome::Output(output),
        Ok(None) => Outcome::Usage,
        Err(err) => Outcome::Failed(err),
    }
}

// Each handler returns Ok(None) when its arguments don't fit the usage.

fn handle_type(args: &[String], locale: Locale) -> PokedexResult<Option<String>> {
    let [name] = args else {
        return Ok(None);
    };
    let pokemon_type: PokemonType = name.parse()?;
    Ok(Some(format_type_profile(pokemon_type, locale)))
}

fn handle_weak(args: &[String], locale: Locale) -> PokedexResult<Option<String>> {
    if args.is_empty() {
        return Ok(None);
    }
    let types = parse_defender_types(args)?;
    Ok(Some(format_defensive_weaknesses(&types, locale)))
}

fn handle_strong(args: &[String], locale: Locale) -> PokedexResult<Option<String>> {
    if args.is_empty() {
        return Ok(None);
    }
    let types = parse_types(args)?;
    Ok(Some(format_offensive_strengths(&types, locale)))
}

fn handle_team(args: &[String], locale: Locale) -> PokedexResult<Option<String>> {
    let [path] = args else {
        return Ok(None);
    };
    let team = load_team(Path::new(path))?;
    let report = analyze_team_localized(team.members(), locale);
    Ok(Some(format!(
        "{}\n{}",
        format_team(&team, locale),
        format_synergy_report(&report, locale)
    )))
}

fn handle_evolution(args: &[String]) -> PokedexResult<Option<String>> {
    let [path, id] = args else {
        return Ok(None);
    };
    let Ok(target_id) = id.parse::<u16>() else {
        return Ok(None);
    };
    let tree = load_evolution_tree(Path::new(path))?;
    let chain = resolve_evolution_chain(&tree, target_id);
    Ok(Some(format_evolution_chain(&chain, target_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn fixture(relative: &str) -> String {
        format!("{}/data/{}", env!("CARGO_MANIFEST_DIR"), relative)
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command(&args(&["weak", "Fire"])), Some(Command::Weak));
        assert_eq!(parse_command(&args(&["evolution"])), Some(Command::Evolution));
        assert_eq!(parse_command(&args(&["battle"])), None);
        assert_eq!(parse_command(&[]), None);
    }

    #[rstest]
    #[case::no_command(&[])]
    #[case::unknown_command(&["battle"])]
    #[case::type_without_name(&["type"])]
    #[case::type_with_two_names(&["type", "Fire", "Water"])]
    #[case::weak_without_types(&["weak"])]
    #[case::team_without_path(&["team"])]
    #[case::evolution_without_id(&["evolution", "tree.ron"])]
    #[case::evolution_with_bad_id(&["evolution", "tree.ron", "pikachu"])]
    fn test_usage_errors_exit_with_two(#[case] argv: &[&str]) {
        let outcome = dispatch(&args(argv));
        assert!(matches!(outcome, Outcome::Usage), "{:?}", outcome);
        assert_eq!(outcome.exit_code(), 2);
    }

    #[test]
    fn test_unknown_type_exits_with_one() {
        let outcome = dispatch(&args(&["weak", "Plasma"]));
        assert!(matches!(outcome, Outcome::Failed(PokedexError::Type(_))));
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_three_defender_types_exit_with_one() {
        let outcome = dispatch(&args(&["weak", "Fire", "Water", "Grass"]));
        assert!(matches!(
            outcome,
            Outcome::Failed(PokedexError::InvalidTypeCount(3))
        ));
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_repeated_defender_type_exits_with_one() {
        let outcome = dispatch(&args(&["weak", "Fire", "Feuer"]));
        assert!(matches!(
            outcome,
            Outcome::Failed(PokedexError::RepeatedType(PokemonType::Fire))
        ));
    }

    #[test]
    fn test_missing_file_exits_with_one() {
        let outcome = dispatch(&args(&["team", "/nonexistent/roster.ron"]));
        assert!(matches!(outcome, Outcome::Failed(PokedexError::Data(_))));
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn test_weak_dual_type_succeeds() {
        let outcome = dispatch(&args(&["weak", "Grass", "Flying"]));
        assert_eq!(outcome.exit_code(), 0);
        let text = match outcome {
            Outcome::Output(text) => text,
            other => panic!("expected output, got {:?}", other),
        };
        assert!(text.starts_with("Grass, Flying is weak to:\n"), "{}", text);
        assert!(text.contains("  Ice (4x)\n"), "{}", text);
    }

    #[test]
    fn test_german_flag_anywhere_switches_locale() {
        let Outcome::Output(text) = dispatch(&args(&["strong", "Water", "--de"])) else {
            panic!("strong should succeed");
        };
        assert_eq!(text, "Wasser is super effective against: Feuer, Boden, Gestein\n");
    }

    #[test]
    fn test_team_and_evolution_fixtures() {
        let team = dispatch(&args(&["team", &fixture("teams/balanced.ron")]));
        assert_eq!(team.exit_code(), 0);

        let evolution = dispatch(&args(&[
            "evolution",
            &fixture("evolutions/oddish.ron"),
            "182",
        ]));
        let Outcome::Output(text) = evolution else {
            panic!("evolution should succeed");
        };
        assert!(text.contains("* #182"), "{}", text);
    }

    #[test]
    fn test_run_with_args_returns_exit_code() {
        assert_eq!(run_with_args(&args(&["type", "Ghost"])), 0);
        assert_eq!(run_with_args(&args(&["type", "Sound"])), 1);
        assert_eq!(run_with_args(&args(&["dex"])), 2);
    }
}
