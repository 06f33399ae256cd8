//! Pokedex MCP Server
//!
//! A Model Context Protocol server using the official Rust SDK (rmcp) that
//! exposes type matchups, evolution line resolution and team analysis for
//! LLM interaction. Speaks MCP over stdio; logs go to stderr.

use std::borrow::Cow;
use std::sync::{Arc, Mutex, MutexGuard};

use pokedex_core::data::parse_evolution_tree_json;
use pokedex_core::mcp_interface::*;
use pokedex_core::{
    analyze_team_localized, resolve_evolution_chain, Locale, Pokemon, PokemonType, Team,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ErrorData as McpError, *},
    schemars, tool, tool_handler, tool_router, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tokio::io::{stdin, stdout};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone)]
pub struct PokedexService {
    tool_router: ToolRouter<PokedexService>,
    team: Arc<Mutex<Team>>,
}

// Tool request structures
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TypeProfileRequest {
    #[schemars(description = "Type name in English or German, e.g. 'Fire' or 'Feuer'")]
    pub type_name: String,
    #[schemars(description = "Render type names in German")]
    #[serde(default)]
    pub german: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TypesRequest {
    #[schemars(description = "One or two type names in English or German")]
    pub types: Vec<String>,
    #[schemars(description = "Render type names in German")]
    #[serde(default)]
    pub german: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EvolutionRequest {
    #[schemars(
        description = "Evolution tree as JSON: {\"id\": 1, \"condition\": null, \"evolves_to\": [...]}"
    )]
    pub tree_json: String,
    #[schemars(description = "National Pokedex id of the Pokemon being viewed")]
    pub target_id: u16,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddToTeamRequest {
    #[schemars(description = "National Pokedex id")]
    pub id: u16,
    #[schemars(description = "Display name of the Pokemon")]
    pub name: String,
    #[schemars(description = "One or two type names in English or German")]
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RemoveFromTeamRequest {
    #[schemars(description = "National Pokedex id of the member to remove")]
    pub id: u16,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTeamRequest {
    #[schemars(description = "Render suggestions in German")]
    #[serde(default)]
    pub german: bool,
}

fn locale(german: bool) -> Locale {
    if german {
        Locale::German
    } else {
        Locale::English
    }
}

fn invalid_params(message: String) -> McpError {
    McpError {
        code: ErrorCode(-32602),
        message: Cow::from(message),
        data: None,
    }
}

fn internal_error(message: &str) -> McpError {
    McpError {
        code: ErrorCode(-32603),
        message: Cow::from(message.to_string()),
        data: None,
    }
}

fn text_result(text: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_router]
impl PokedexService {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            team: Arc::new(Mutex::new(Team::new())),
        }
    }

    fn lock_team(&self) -> Result<MutexGuard<'_, Team>, McpError> {
        self.team
            .lock()
            .map_err(|_| internal_error("Team state is unavailable"))
    }

    #[tool(description = "Show what a type is strong and weak against, offensively and defensively")]
    async fn type_profile(
        &self,
        Parameters(request): Parameters<TypeProfileRequest>,
    ) -> Result<CallToolResult, McpError> {
        let pokemon_type = request
            .type_name
            .parse::<PokemonType>()
            .map_err(|e| invalid_params(format!("{}", e)))?;
        text_result(format_type_profile(pokemon_type, locale(request.german)))
    }

    #[tool(description = "List the types that are super effective against a single or dual type")]
    async fn defensive_weaknesses(
        &self,
        Parameters(request): Parameters<TypesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let types = parse_defender_types(&request.types)
            .map_err(|e| invalid_params(format!("{}", e)))?;
        text_result(format_defensive_weaknesses(&types, locale(request.german)))
    }

    #[tool(description = "List the types that one or more attacking types hit super effectively")]
    async fn offensive_strengths(
        &self,
        Parameters(request): Parameters<TypesRequest>,
    ) -> Result<CallToolResult, McpError> {
        let types = parse_types(&request.types).map_err(|e| invalid_params(format!("{}", e)))?;
        text_result(format_offensive_strengths(&types, locale(request.german)))
    }

    #[tool(description = "Resolve a branching evolution tree into the line containing a Pokemon")]
    async fn resolve_evolution_chain(
        &self,
        Parameters(request): Parameters<EvolutionRequest>,
    ) -> Result<CallToolResult, McpError> {
        let tree = parse_evolution_tree_json(&request.tree_json)
            .map_err(|e| invalid_params(format!("{}", e)))?;
        let chain = resolve_evolution_chain(&tree, request.target_id);
        text_result(format_evolution_chain(&chain, request.target_id))
    }

    #[tool(description = "Add a Pokemon to the team (at most 6, no duplicates)")]
    async fn add_to_team(
        &self,
        Parameters(request): Parameters<AddToTeamRequest>,
    ) -> Result<CallToolResult, McpError> {
        let types = parse_types(&request.types).map_err(|e| invalid_params(format!("{}", e)))?;
        let mut team = self.lock_team()?;
        let text = match team.add(Pokemon::new(request.id, request.name, types)) {
            Ok(()) => format_team(&team, Locale::English),
            Err(e) => format!("Error: {}", e),
        };
        text_result(text)
    }

    #[tool(description = "Remove a Pokemon from the team by id")]
    async fn remove_from_team(
        &self,
        Parameters(request): Parameters<RemoveFromTeamRequest>,
    ) -> Result<CallToolResult, McpError> {
        let mut team = self.lock_team()?;
        let text = match team.remove(request.id) {
            Ok(removed) => format!(
                "Removed {}.\n{}",
                removed.name,
                format_team(&team, Locale::English)
            ),
            Err(e) => format!("Error: {}", e),
        };
        text_result(text)
    }

    #[tool(description = "Remove every Pokemon from the team")]
    async fn clear_team(&self) -> Result<CallToolResult, McpError> {
        self.lock_team()?.clear();
        text_result("Team cleared.".to_string())
    }

    #[tool(description = "Show the current team")]
    async fn show_team(&self) -> Result<CallToolResult, McpError> {
        let team = self.lock_team()?;
        text_result(format_team(&team, Locale::English))
    }

    #[tool(description = "Analyze the current team's weaknesses, coverage and type variety")]
    async fn analyze_team(
        &self,
        Parameters(request): Parameters<AnalyzeTeamRequest>,
    ) -> Result<CallToolResult, McpError> {
        let locale = locale(request.german);
        let team = self.lock_team()?;
        let report = analyze_team_localized(team.members(), locale);
        text_result(format_synergy_report(&report, locale))
    }
}

#[tool_handler]
impl ServerHandler for PokedexService {}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("Pokedex MCP server starting");

    let service = PokedexService::new();
    let transport = (stdin(), stdout());

    let server = service.serve(transport).await?;

    info!("Server running, waiting for shutdown");
    let quit_reason = server.waiting().await?;

    info!(?quit_reason, "Pokedex MCP server exiting");
    Ok(())
}
