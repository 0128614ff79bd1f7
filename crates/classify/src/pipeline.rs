use crate::{PipelineConfig, PipelineError, Step};
use base::{Buffer, Tensor};
use infer::{Graph, IoBinding, Session, build_tensor};
use std::path::Path;

/// Progress of a pipeline run. `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    GraphLoaded,
    SessionOpened,
    ImageDecoded,
    TensorBuilt,
    Inferred,
    Done,
    Failed(Step),
}

/// Output tensors of one run, in the order they were requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub outputs: Vec<(IoBinding, Tensor<f32>)>,
}

impl Classification {
    pub fn output(&self, operation: &str) -> Option<&Tensor<f32>> {
        self.outputs
            .iter()
            .find(|(binding, _)| binding.operation == operation)
            .map(|(_, tensor)| tensor)
    }

    /// Flattened first output, the class score vector for a classifier.
    pub fn scores(&self) -> &[f32] {
        self.outputs
            .first()
            .map(|(_, tensor)| tensor.data.as_slice())
            .unwrap_or(&[])
    }
}

/// Single-shot classification: graph, session, image, tensor, inference.
///
/// Every stage is checked before the next one starts and the first failure
/// ends the run. All resources acquired by a run are released when `run`
/// returns, whatever the outcome.
pub struct Pipeline {
    config: PipelineConfig,
    state: State,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            state: State::Start,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn state(&self) -> State {
        self.state
    }

    fn advance(&mut self, state: State, step: &str) {
        log::info!("{step}");
        self.state = state;
    }

    pub fn run(
        &mut self,
        graph_path: impl AsRef<Path>,
        image_path: impl AsRef<Path>,
    ) -> Result<Classification, PipelineError> {
        self.state = State::Start;
        let result = self.stages(graph_path.as_ref(), image_path.as_ref());
        if let Err(err) = &result {
            log::debug!("pipeline failed after {:?}", self.state);
            self.state = State::Failed(err.step);
        }
        result
    }

    fn stages(
        &mut self,
        graph_path: &Path,
        image_path: &Path,
    ) -> Result<Classification, PipelineError> {
        let graph = Graph::load(graph_path).map_err(PipelineError::at(Step::Graph))?;
        self.advance(State::GraphLoaded, "Loading graph");

        let mut session = Session::open(&graph).map_err(PipelineError::at(Step::Session))?;
        self.advance(State::SessionOpened, "Opening session");

        let buffer = Buffer::load(image_path).map_err(PipelineError::at(Step::Image))?;
        let image = image::decode_image(&buffer).map_err(PipelineError::at(Step::Image))?;
        drop(buffer);
        self.advance(State::ImageDecoded, "Decoding image");

        let tensor =
            build_tensor(&image, self.config.conversion).map_err(PipelineError::at(Step::Tensor))?;
        drop(image);
        self.advance(State::TensorBuilt, "Building input tensor");

        let inputs = [(self.config.input.clone(), tensor)];
        let tensors = session
            .run(&inputs, &self.config.outputs)
            .map_err(PipelineError::at(Step::Inference))?;
        self.advance(State::Inferred, "Running inference");

        session.close();
        self.advance(State::Done, "Closing session");

        Ok(Classification {
            outputs: self.config.outputs.iter().cloned().zip(tensors).collect(),
        })
    }
}
