use infer::{IoBinding, PixelConversion};

pub const DEFAULT_INPUT: &str = "input";
pub const DEFAULT_OUTPUT: &str = "InceptionV3/Predictions/Reshape_1";

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Operation that receives the image tensor.
    pub input: IoBinding,
    /// Operations whose outputs are captured, in this order.
    pub outputs: Vec<IoBinding>,
    pub conversion: PixelConversion,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: IoBinding::new(DEFAULT_INPUT),
            outputs: vec![IoBinding::new(DEFAULT_OUTPUT)],
            conversion: PixelConversion::Cast,
        }
    }
}
