//! Named inputs and outputs passed across the host boundary.

use crate::{NodeError, Result};
use std::collections::HashMap;
use videogrid_core::FrameBatch;

/// Build [`NodeInputs`] from `name => &batch` pairs.
///
/// # Example
/// ```ignore
/// let inputs = inputs! {
///     "images_left" => &left,
///     "images_right" => &right,
/// };
/// ```
#[macro_export]
macro_rules! inputs {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut inputs = $crate::NodeInputs::new();
        $(
            inputs.insert($key, $value);
        )*
        inputs
    }};
}

/// Borrowed input batches keyed by port name. The host keeps ownership.
#[derive(Debug, Default, Clone)]
pub struct NodeInputs<'a> {
    batches: HashMap<String, &'a FrameBatch>,
}

impl<'a> NodeInputs<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, batch: &'a FrameBatch) {
        self.batches.insert(name.into(), batch);
    }

    pub fn get(&self, name: &str) -> Option<&'a FrameBatch> {
        self.batches.get(name).copied()
    }

    /// Look up a required input of `node`.
    pub fn require(&self, node: &str, name: &str) -> Result<&'a FrameBatch> {
        self.get(name).ok_or_else(|| NodeError::MissingInput {
            node: node.to_string(),
            input: name.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}

/// Output batches keyed by port name, owned by the caller.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NodeOutputs {
    batches: HashMap<String, FrameBatch>,
}

impl NodeOutputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, batch: FrameBatch) {
        self.batches.insert(name.into(), batch);
    }

    pub fn get(&self, name: &str) -> Option<&FrameBatch> {
        self.batches.get(name)
    }

    pub fn take(&mut self, name: &str) -> Option<FrameBatch> {
        self.batches.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.batches.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }
}
