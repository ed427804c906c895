//! Node Registry
//!
//! Maps registration identifiers to nodes. A registry is built once, at
//! plugin load, and handed to the host; there is no process-wide instance.

use crate::{BatchNode, ConcatNode, NodeDescriptor, NodeError, NodeInputs, NodeOutputs, Result};
use std::collections::HashMap;
use std::sync::Arc;
use videogrid_core::{ConcatOptions, ProgressSink};

/// Which builtin nodes to register and how they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Also register the legacy horizontal identity so older graphs load.
    pub legacy_nodes: bool,
    pub options: ConcatOptions,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            legacy_nodes: true,
            options: ConcatOptions::default(),
        }
    }
}

#[derive(Clone)]
pub struct NodeRegistry {
    nodes: HashMap<String, Arc<dyn BatchNode>>,
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }

    /// Registry holding the builtin concatenation nodes.
    pub fn with_builtin_nodes(config: &RegistryConfig) -> Self {
        let mut registry = Self::new();
        let mut builtins = vec![ConcatNode::horizontal(), ConcatNode::vertical()];
        if config.legacy_nodes {
            builtins.push(ConcatNode::legacy_horizontal());
        }
        for node in builtins {
            registry.insert(Arc::new(node.with_options(config.options)));
        }
        registry
    }

    /// Register a node under its descriptor id.
    ///
    /// Fails if the id is already taken.
    pub fn register<N>(&mut self, node: N) -> Result<()>
    where
        N: BatchNode + 'static,
    {
        if self.has_type(node.id()) {
            return Err(NodeError::DuplicateNode(node.id().to_string()));
        }
        self.insert(Arc::new(node));
        Ok(())
    }

    fn insert(&mut self, node: Arc<dyn BatchNode>) {
        tracing::debug!("Registered node: {}", node.id());
        self.nodes.insert(node.id().to_string(), node);
    }

    pub fn get(&self, id: &str) -> Result<Arc<dyn BatchNode>> {
        self.nodes
            .get(id)
            .cloned()
            .ok_or_else(|| NodeError::UnknownNodeType(id.to_string()))
    }

    pub fn has_type(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Registered ids, sorted.
    pub fn list_types(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.nodes.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Descriptors of all registered nodes, sorted by id.
    pub fn descriptors(&self) -> Vec<&NodeDescriptor> {
        let mut descriptors: Vec<&NodeDescriptor> =
            self.nodes.values().map(|n| n.descriptor()).collect();
        descriptors.sort_by(|a, b| a.id.cmp(&b.id));
        descriptors
    }

    /// Look up `id` and run it.
    pub fn execute(
        &self,
        id: &str,
        inputs: &NodeInputs<'_>,
        progress: &dyn ProgressSink,
    ) -> Result<NodeOutputs> {
        self.get(id)?.execute(inputs, progress)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::with_builtin_nodes(&RegistryConfig::default())
    }
}

impl std::fmt::Debug for NodeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRegistry")
            .field("nodes", &self.list_types())
            .finish()
    }
}
