//! Resolves a branching evolution tree into the single line that contains
//! the Pokemon being viewed.

use schema::{EvolutionNode, EvolutionStage};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A linear evolution line, root first. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionChain {
    stages: Vec<EvolutionStage>,
}

impl EvolutionChain {
    pub fn stages(&self) -> &[EvolutionStage] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// A resolved chain always holds at least the root stage.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn contains(&self, id: u16) -> bool {
        self.position_of(id).is_some()
    }

    pub fn position_of(&self, id: u16) -> Option<usize> {
        self.stages.iter().position(|stage| stage.id == id)
    }

    /// The stage `id` evolves into on this line, if any.
    pub fn successor(&self, id: u16) -> Option<&EvolutionStage> {
        self.position_of(id).and_then(|i| self.stages.get(i + 1))
    }

    /// The stage `id` evolved from on this line, if any.
    pub fn predecessor(&self, id: u16) -> Option<&EvolutionStage> {
        match self.position_of(id) {
            Some(i) if i > 0 => self.stages.get(i - 1),
            _ => None,
        }
    }
}

/// Every root-to-leaf path of the tree, in depth-first order
/// (children visited left to right). The root stage carries no condition.
pub fn leaf_paths(root: &EvolutionNode) -> Vec<Vec<EvolutionStage>> {
    let mut paths = Vec::new();
    let mut current = vec![EvolutionStage {
        id: root.id,
        condition: None,
    }];
    collect_paths(root, &mut current, &mut paths);
    paths
}

fn collect_paths(
    node: &EvolutionNode,
    current: &mut Vec<EvolutionStage>,
    paths: &mut Vec<Vec<EvolutionStage>>,
) {
    if node.is_leaf() {
        paths.push(current.clone());
        return;
    }

    for child in &node.evolves_to {
        current.push(EvolutionStage::from(child));
        collect_paths(child, current, paths);
        current.pop();
    }
}

/// Resolve `root` into the line that contains `target_id`.
///
/// The first path in depth-first order containing the target wins, so a
/// target that appears on several branches (malformed data) resolves to the
/// leftmost of them. When no path contains the target the leftmost path is
/// returned instead.
pub fn resolve_evolution_chain(root: &EvolutionNode, target_id: u16) -> EvolutionChain {
    let mut paths = leaf_paths(root);
    debug!(
        root = root.id,
        target = target_id,
        candidates = paths.len(),
        "resolving evolution chain"
    );

    let selected = match paths
        .iter()
        .position(|path| path.iter().any(|stage| stage.id == target_id))
    {
        Some(index) => index,
        None => {
            warn!(
                root = root.id,
                target = target_id,
                "target not found in evolution tree, falling back to first branch"
            );
            0
        }
    };

    // A tree always yields at least the root path.
    EvolutionChain {
        stages: paths.swap_remove(selected),
    }
}
