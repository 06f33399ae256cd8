//! Loading of roster and evolution tree fixtures.
//!
//! Files are RON, the same format the species data ships in. Evolution trees
//! can also be given as JSON, which is what the MCP tools receive.

use crate::errors::DataResult;
use crate::team::Team;
use schema::EvolutionNode;
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load_team(path: &Path) -> DataResult<Team> {
    let content = fs::read_to_string(path)?;
    let team = parse_team_ron(&content)?;
    debug!(path = %path.display(), members = team.len(), "loaded team");
    Ok(team)
}

pub fn parse_team_ron(content: &str) -> DataResult<Team> {
    Ok(ron::from_str(content)?)
}

pub fn load_evolution_tree(path: &Path) -> DataResult<EvolutionNode> {
    let content = fs::read_to_string(path)?;
    let tree = parse_evolution_tree_ron(&content)?;
    debug!(path = %path.display(), root = tree.id, "loaded evolution tree");
    Ok(tree)
}

pub fn parse_evolution_tree_ron(content: &str) -> DataResult<EvolutionNode> {
    Ok(ron::from_str(content)?)
}

pub fn parse_evolution_tree_json(content: &str) -> DataResult<EvolutionNode> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DataError;
    use pretty_assertions::assert_eq;
    use schema::PokemonType;

    #[test]
    fn test_parse_team_ron() {
        let team = parse_team_ron(
            r#"[
                (id: 6, name: "Charizard", types: [Fire, Flying]),
                (id: 9, name: "Blastoise", types: [Water]),
            ]"#,
        )
        .unwrap();
        assert_eq!(team.len(), 2);
        assert_eq!(
            team.members()[0].types,
            vec![PokemonType::Fire, PokemonType::Flying]
        );
        assert_eq!(team.members()[1].base_stats, None);
    }

    #[test]
    fn test_oversized_team_is_rejected() {
        let content = format!(
            "[{}]",
            (1..=7)
                .map(|id| format!("(id: {}, name: \"x\", types: [Normal])", id))
                .collect::<Vec<_>>()
                .join(", ")
        );
        assert!(matches!(parse_team_ron(&content), Err(DataError::Ron(_))));
    }

    #[test]
    fn test_parse_evolution_tree_ron() {
        let tree = parse_evolution_tree_ron(
            r#"(
                id: 133,
                evolves_to: [
                    (id: 134, condition: Some("Water Stone")),
                    (id: 135, condition: Some("Thunder Stone")),
                ],
            )"#,
        )
        .unwrap();
        assert_eq!(tree.id, 133);
        assert_eq!(tree.condition, None);
        assert_eq!(tree.evolves_to.len(), 2);
        assert_eq!(tree.evolves_to[1].condition.as_deref(), Some("Thunder Stone"));
    }

    #[test]
    fn test_parse_evolution_tree_json() {
        let tree = parse_evolution_tree_json(
            r#"{"id": 1, "evolves_to": [{"id": 2, "condition": "Lvl 16"}]}"#,
        )
        .unwrap();
        assert_eq!(tree.evolves_to[0].id, 2);
        assert!(tree.evolves_to[0].is_leaf());
    }

    #[test]
    fn test_missing_file() {
        let result = load_team(Path::new("does/not/exist.ron"));
        assert!(matches!(result, Err(DataError::Io(_))));
    }
}
