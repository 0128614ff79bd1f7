use crate::{InferError, IoBinding, RunError};
use base::Buffer;
use std::path::Path;
use tract_hir::ops::unimpl::UnimplementedOp;
use tract_tensorflow::prelude::*;

/// An imported, immutable computation graph.
///
/// Operations are addressed by their exact node name.
#[derive(Debug)]
pub struct Graph {
    model: InferenceModel,
}

impl Graph {
    /// Imports a serialized TensorFlow `GraphDef` (a frozen graph).
    ///
    /// The import is all or nothing: malformed bytes, or a graph that uses an
    /// operation the runtime cannot execute, fail with `GraphImport`.
    pub fn import(graph_def: &Buffer) -> Result<Self, InferError> {
        let mut reader = graph_def.as_slice();
        let model = tract_tensorflow::tensorflow()
            .model_for_read(&mut reader)
            .map_err(|e| InferError::GraphImport(format!("{e:#}")))?;

        let unsupported: Vec<&str> = model
            .nodes()
            .iter()
            .filter(|node| node.op_is::<UnimplementedOp>())
            .map(|node| node.name.as_str())
            .collect();
        if !unsupported.is_empty() {
            return Err(InferError::GraphImport(format!(
                "unsupported operations: {}",
                unsupported.join(", ")
            )));
        }

        log::debug!(
            "imported graph with {} operations from {} bytes",
            model.nodes().len(),
            graph_def.len()
        );
        Ok(Self { model })
    }

    /// Loads and imports the graph file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InferError> {
        let buffer = Buffer::load(path)?;
        Self::import(&buffer)
    }

    pub fn operation_count(&self) -> usize {
        self.model.nodes().len()
    }

    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.model.nodes().iter().map(|node| node.name.as_str())
    }

    pub fn has_operation(&self, name: &str) -> bool {
        self.operation_names().any(|n| n == name)
    }

    /// Resolves a binding against the operation table.
    pub(crate) fn outlet(&self, binding: &IoBinding) -> Result<OutletId, RunError> {
        let node = self
            .model
            .nodes()
            .iter()
            .find(|node| node.name == binding.operation)
            .ok_or_else(|| RunError::UnknownOperation {
                name: binding.operation.clone(),
            })?;
        if binding.index >= node.outputs.len() {
            return Err(RunError::UnknownOutput {
                name: binding.operation.clone(),
                index: binding.index,
                available: node.outputs.len(),
            });
        }
        Ok(OutletId::new(node.id, binding.index))
    }

    pub(crate) fn model(&self) -> &InferenceModel {
        &self.model
    }
}
