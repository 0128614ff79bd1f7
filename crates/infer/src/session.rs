use crate::{Graph, InferError, IoBinding, RunError};
use base::Tensor;
use tract_hir::infer::{Factoid, ShapeFactoid};
use tract_hir::internal::DimLike;
use tract_tensorflow::prelude::*;

/// An execution context bound to exactly one `Graph`.
///
/// The session borrows its graph, so the graph outlives it and it can never be
/// moved onto another graph. `close` consumes the session; dropping it has the
/// same effect.
pub struct Session<'g> {
    graph: &'g Graph,
    model: InferenceModel,
    runs: usize,
}

impl<'g> Session<'g> {
    /// Opens a session and type-checks the graph as far as its declared
    /// facts allow. A graph whose operations disagree with each other fails
    /// here with `SessionInit`.
    pub fn open(graph: &'g Graph) -> Result<Self, InferError> {
        if graph.operation_count() == 0 {
            return Err(InferError::SessionInit(
                "graph has no operations".to_string(),
            ));
        }
        let mut model = graph.model().clone();
        model
            .analyse(false)
            .map_err(|e| InferError::SessionInit(format!("{e:#}")))?;

        log::debug!("session opened on {} operations", graph.operation_count());
        Ok(Self {
            graph,
            model,
            runs: 0,
        })
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Number of forward passes completed so far.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Executes one forward pass.
    ///
    /// Each input tensor is fed to its bound operation; the returned tensors
    /// follow the order of `outputs`. The call blocks until the runtime is
    /// done.
    pub fn run(
        &mut self,
        inputs: &[(IoBinding, Tensor<f32>)],
        outputs: &[IoBinding],
    ) -> Result<Vec<Tensor<f32>>, InferError> {
        if inputs.is_empty() {
            return Err(RunError::NoInputs.into());
        }
        if outputs.is_empty() {
            return Err(RunError::NoOutputs.into());
        }

        let input_outlets = inputs
            .iter()
            .map(|(binding, _)| self.graph.outlet(binding))
            .collect::<Result<Vec<_>, _>>()?;
        let output_outlets = outputs
            .iter()
            .map(|binding| self.graph.outlet(binding))
            .collect::<Result<Vec<_>, _>>()?;

        let mut model = self.model.clone();
        model
            .set_input_outlets(&input_outlets)
            .map_err(RunError::runtime)?;
        model
            .set_output_outlets(&output_outlets)
            .map_err(RunError::runtime)?;

        for (ix, (binding, tensor)) in inputs.iter().enumerate() {
            let declared = model.input_fact(ix).map_err(RunError::runtime)?;
            check_declared(binding, declared, tensor)?;
            model
                .set_input_fact(ix, f32::fact(tensor.shape().to_vec()).into())
                .map_err(RunError::runtime)?;
        }

        let plan = model
            .into_optimized()
            .and_then(|typed| typed.into_runnable())
            .map_err(RunError::runtime)?;

        let values = inputs
            .iter()
            .map(|(_, tensor)| to_runtime(tensor))
            .collect::<Result<TVec<TValue>, _>>()?;
        let results = plan.run(values).map_err(RunError::runtime)?;
        self.runs += 1;

        results
            .iter()
            .zip(outputs)
            .map(|(value, binding)| from_runtime(value, binding))
            .collect()
    }

    /// Releases the execution context.
    pub fn close(self) {
        log::debug!(
            "closing session on {} operations",
            self.model.nodes().len()
        );
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        log::debug!("session closed after {} run(s)", self.runs);
    }
}

fn format_declared(declared: &ShapeFactoid) -> String {
    let mut dims: Vec<String> = declared
        .dims()
        .map(|d| match d.concretize().map(|d| d.to_usize()) {
            Some(Ok(d)) => d.to_string(),
            _ => "?".to_string(),
        })
        .collect();
    if declared.is_open() {
        dims.push("..".to_string());
    }
    format!("[{}]", dims.join(", "))
}

// Known declared dimensions must match; unknown ones accept any size. The rank
// is checked whenever the declared shape is closed.
fn check_declared(
    binding: &IoBinding,
    declared: &InferenceFact,
    tensor: &Tensor<f32>,
) -> Result<(), RunError> {
    if let Some(datum_type) = declared.datum_type.concretize() {
        if datum_type != DatumType::F32 {
            return Err(RunError::DatumMismatch {
                name: binding.operation.clone(),
                expected: format!("{datum_type:?}"),
            });
        }
    }

    let shape = &declared.shape;
    let rank = shape.dims().count();
    let rank_mismatch = if shape.is_open() {
        tensor.ndim() < rank
    } else {
        tensor.ndim() != rank
    };
    let dim_mismatch = shape.dims().zip(tensor.shape()).any(|(d, &got)| {
        d.concretize()
            .and_then(|d| d.to_usize().ok())
            .is_some_and(|want| want != got)
    });
    if rank_mismatch || dim_mismatch {
        return Err(RunError::ShapeMismatch {
            name: binding.operation.clone(),
            expected: format_declared(shape),
            got: tensor.shape().to_vec(),
        });
    }
    Ok(())
}

fn to_runtime(tensor: &Tensor<f32>) -> Result<TValue, RunError> {
    let value = tract_tensorflow::prelude::Tensor::from_shape(tensor.shape(), &tensor.data)
        .map_err(RunError::runtime)?;
    Ok(value.into())
}

fn from_runtime(value: &TValue, binding: &IoBinding) -> Result<Tensor<f32>, InferError> {
    let floats = value.cast_to::<f32>().map_err(|e| {
        RunError::Runtime(format!("output \"{binding}\" is not numeric: {e:#}"))
    })?;
    let data = floats.as_slice::<f32>().map_err(RunError::runtime)?.to_vec();
    Ok(Tensor::new(floats.shape().to_vec(), data)?)
}
