use serde::{Deserialize, Serialize};

/// One node of a species' evolution tree. The root is the earliest stage;
/// `condition` describes the edge leading into this node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub id: u16,
    #[serde(default)]
    pub condition: Option<String>, // e.g. "Lvl 16", "Leaf Stone", "Trade"
    #[serde(default)]
    pub evolves_to: Vec<EvolutionNode>,
}

impl EvolutionNode {
    pub fn new(id: u16) -> Self {
        Self {
            id,
            condition: None,
            evolves_to: Vec::new(),
        }
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn evolves_to(mut self, child: EvolutionNode) -> Self {
        self.evolves_to.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.evolves_to.is_empty()
    }
}

/// A single stage of a resolved, linear evolution line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStage {
    pub id: u16,
    pub condition: Option<String>,
}

impl From<&EvolutionNode> for EvolutionStage {
    fn from(node: &EvolutionNode) -> Self {
        Self {
            id: node.id,
            condition: node.condition.clone(),
        }
    }
}
