//! Rule-based team diagnostics.
//!
//! The analyzer tallies per-type weaknesses and offensive coverage across a
//! roster and flags threshold violations. It never searches for a better
//! roster.

use crate::effectiveness::{defensive_weaknesses, offensive_strengths};
use schema::{Locale, Pokemon, PokemonType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// A type is a major weakness once this many members are weak to it.
pub const MAJOR_WEAKNESS_THRESHOLD: u32 = 3;
/// Missing coverage is only reported for teams at least this large.
pub const MIN_TEAM_FOR_COVERAGE: usize = 3;
/// At most this many uncovered types are listed.
pub const MAX_MISSING_COVERAGE_LISTED: usize = 3;
/// A type is redundant once this many members have it.
pub const REDUNDANCY_THRESHOLD: u32 = 3;
/// The all-clear message needs a team at least this large.
pub const MIN_TEAM_FOR_ALL_CLEAR: usize = 4;

/// A single diagnostic about a team, independent of display language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suggestion {
    /// The team is empty; nothing was analyzed.
    EmptyTeam,
    /// Types that too many members are weak to.
    MajorWeakness(Vec<PokemonType>),
    /// Types no member hits super effectively (truncated list).
    MissingCoverage(Vec<PokemonType>),
    /// Types shared by too many members, in order of first appearance.
    TypeRedundancy(Vec<PokemonType>),
    /// No rule fired on a full-enough team.
    Balanced,
}

fn join_types(types: &[PokemonType], locale: Locale, separator: &str) -> String {
    types
        .iter()
        .map(|t| t.name(locale))
        .collect::<Vec<_>>()
        .join(separator)
}

impl Suggestion {
    pub fn render(&self, locale: Locale) -> String {
        match (self, locale) {
            (Suggestion::EmptyTeam, Locale::English) => {
                "Add Pokemon to your team to get an analysis.".to_string()
            }
            (Suggestion::EmptyTeam, Locale::German) => {
                "Füge Pokemon hinzu, um eine Analyse zu erhalten.".to_string()
            }
            (Suggestion::MajorWeakness(types), Locale::English) => format!(
                "Warning: your team is very vulnerable to {}. Try adding Pokemon that resist {}.",
                join_types(types, locale, ", "),
                join_types(types, locale, "/")
            ),
            (Suggestion::MajorWeakness(types), Locale::German) => format!(
                "Achtung: Dein Team ist sehr anfällig gegen {}. Versuche, Pokemon hinzuzufügen, die resistent gegen {} sind.",
                join_types(types, locale, ", "),
                join_types(types, locale, "/")
            ),
            (Suggestion::MissingCoverage(types), Locale::English) => format!(
                "Your team lacks offense against: {}.",
                join_types(types, locale, ", ")
            ),
            (Suggestion::MissingCoverage(types), Locale::German) => format!(
                "Dir fehlt Offensive gegen: {}.",
                join_types(types, locale, ", ")
            ),
            (Suggestion::TypeRedundancy(types), Locale::English) => format!(
                "You have many {} Pokemon. More variety improves your chances!",
                join_types(types, locale, "/")
            ),
            (Suggestion::TypeRedundancy(types), Locale::German) => format!(
                "Du hast viele {}-Pokemon. Mehr Vielfalt erhöht deine Chancen!",
                join_types(types, locale, "/")
            ),
            (Suggestion::Balanced, Locale::English) => {
                "Your team looks very well balanced! Great!".to_string()
            }
            (Suggestion::Balanced, Locale::German) => {
                "Dein Team sieht sehr ausgewogen aus! Super!".to_string()
            }
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Locale::English))
    }
}

/// Result of one analysis call. Recomputed from scratch every time.
///
/// The count maps only hold types with a non-zero tally; use
/// [`SynergyReport::weakness_count`] and [`SynergyReport::coverage_count`]
/// to read zeros.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyReport {
    pub weakness_counts: BTreeMap<PokemonType, u32>,
    pub coverage_counts: BTreeMap<PokemonType, u32>,
    pub diagnostics: Vec<Suggestion>,
    pub suggestions: Vec<String>,
}

impl SynergyReport {
    pub fn weakness_count(&self, pokemon_type: PokemonType) -> u32 {
        self.weakness_counts.get(&pokemon_type).copied().unwrap_or(0)
    }

    pub fn coverage_count(&self, pokemon_type: PokemonType) -> u32 {
        self.coverage_counts.get(&pokemon_type).copied().unwrap_or(0)
    }
}

/// Analyze a roster with English suggestion text.
pub fn analyze_team(team: &[Pokemon]) -> SynergyReport {
    analyze_team_localized(team, Locale::English)
}

pub fn analyze_team_localized(team: &[Pokemon], locale: Locale) -> SynergyReport {
    if team.is_empty() {
        let diagnostics = vec![Suggestion::EmptyTeam];
        return SynergyReport {
            suggestions: render_all(&diagnostics, locale),
            diagnostics,
            ..SynergyReport::default()
        };
    }

    let mut weakness_counts: BTreeMap<PokemonType, u32> = BTreeMap::new();
    let mut coverage_counts: BTreeMap<PokemonType, u32> = BTreeMap::new();

    for pokemon in team {
        for weakness in defensive_weaknesses(&pokemon.types) {
            *weakness_counts.entry(weakness).or_insert(0) += 1;
        }
        for strength in offensive_strengths(&pokemon.types) {
            *coverage_counts.entry(strength).or_insert(0) += 1;
        }
    }

    let mut report = SynergyReport {
        weakness_counts,
        coverage_counts,
        ..SynergyReport::default()
    };
    report.diagnostics = diagnose(team, &report);
    report.suggestions = render_all(&report.diagnostics, locale);

    debug!(
        team_size = team.len(),
        diagnostics = report.diagnostics.len(),
        "analyzed team synergy"
    );
    report
}

fn render_all(diagnostics: &[Suggestion], locale: Locale) -> Vec<String> {
    diagnostics.iter().map(|s| s.render(locale)).collect()
}

fn diagnose(team: &[Pokemon], report: &SynergyReport) -> Vec<Suggestion> {
    let mut diagnostics = Vec::new();

    let major_weaknesses: Vec<PokemonType> = PokemonType::all()
        .filter(|&t| report.weakness_count(t) >= MAJOR_WEAKNESS_THRESHOLD)
        .collect();
    if !major_weaknesses.is_empty() {
        diagnostics.push(Suggestion::MajorWeakness(major_weaknesses));
    }

    if team.len() >= MIN_TEAM_FOR_COVERAGE {
        let missing: Vec<PokemonType> = PokemonType::all()
            .filter(|&t| report.coverage_count(t) == 0)
            .take(MAX_MISSING_COVERAGE_LISTED)
            .collect();
        if !missing.is_empty() {
            diagnostics.push(Suggestion::MissingCoverage(missing));
        }
    }

    // Tallied in order of first appearance on the roster.
    let mut type_counts: Vec<(PokemonType, u32)> = Vec::new();
    for pokemon in team {
        for &t in &pokemon.types {
            match type_counts.iter_mut().find(|(seen, _)| *seen == t) {
                Some((_, count)) => *count += 1,
                None => type_counts.push((t, 1)),
            }
        }
    }
    let redundant: Vec<PokemonType> = type_counts
        .into_iter()
        .filter(|&(_, count)| count >= REDUNDANCY_THRESHOLD)
        .map(|(t, _)| t)
        .collect();
    if !redundant.is_empty() {
        diagnostics.push(Suggestion::TypeRedundancy(redundant));
    }

    if diagnostics.is_empty() && team.len() >= MIN_TEAM_FOR_ALL_CLEAR {
        diagnostics.push(Suggestion::Balanced);
    }

    diagnostics
}
