//! Test fixtures: frozen TensorFlow graphs and JPEG images built in memory.

pub mod graphdef;

use base::Tensor;
use graphdef::{AttrValue, DataType, GraphDef, NodeDef, TensorProto, TensorShapeProto, VersionDef};
use image::Image;
use prost::Message;
use std::path::{Path, PathBuf};

fn placeholder(name: &str, shape: &[i64]) -> NodeDef {
    NodeDef::new(name, "Placeholder")
        .attr("dtype", AttrValue::datatype(DataType::Float))
        .attr("shape", AttrValue::shape(TensorShapeProto::from_dims(shape)))
}

fn encode(nodes: Vec<NodeDef>) -> Vec<u8> {
    GraphDef {
        node: nodes,
        versions: Some(VersionDef { producer: 27 }),
    }
    .encode_to_vec()
}

/// `input` (Placeholder of `shape`) -> `out` (Identity).
pub fn identity_graph(shape: &[i64]) -> Vec<u8> {
    encode(vec![
        placeholder("input", shape),
        NodeDef::new("out", "Identity")
            .input("input")
            .attr("T", AttrValue::datatype(DataType::Float)),
    ])
}

/// A linear classifier over a `[1, height, width, channels]` image.
///
/// `input` -> `flatten` (Reshape) -> `logits` (MatMul). Pixel `i` of the
/// flattened image contributes to class `i % classes`, so with three classes
/// each score is the sum of one color channel.
pub fn classifier_graph(height: usize, width: usize, channels: usize, classes: usize) -> Vec<u8> {
    let features = height * width * channels;
    let mut weights = vec![0.0f32; features * classes];
    for i in 0..features {
        weights[i * classes + i % classes] = 1.0;
    }

    encode(vec![
        placeholder("input", &[1, height as i64, width as i64, channels as i64]),
        NodeDef::new("flatten/shape", "Const")
            .attr("dtype", AttrValue::datatype(DataType::Int32))
            .attr(
                "value",
                AttrValue::tensor(TensorProto::int32(&[2], vec![1, features as i32])),
            ),
        NodeDef::new("flatten", "Reshape")
            .input("input")
            .input("flatten/shape")
            .attr("T", AttrValue::datatype(DataType::Float))
            .attr("Tshape", AttrValue::datatype(DataType::Int32)),
        NodeDef::new("weights", "Const")
            .attr("dtype", AttrValue::datatype(DataType::Float))
            .attr(
                "value",
                AttrValue::tensor(TensorProto::float(&[features as i64, classes as i64], weights)),
            ),
        NodeDef::new("logits", "MatMul")
            .input("flatten")
            .input("weights")
            .attr("T", AttrValue::datatype(DataType::Float))
            .attr("transpose_a", AttrValue::boolean(false))
            .attr("transpose_b", AttrValue::boolean(false)),
    ])
}

/// `input` reshaped to a volume it does not have. Imports fine but cannot be
/// type-checked.
pub fn inconsistent_graph() -> Vec<u8> {
    encode(vec![
        placeholder("input", &[1, 2, 2, 3]),
        NodeDef::new("flatten/shape", "Const")
            .attr("dtype", AttrValue::datatype(DataType::Int32))
            .attr("value", AttrValue::tensor(TensorProto::int32(&[2], vec![1, 13]))),
        NodeDef::new("flatten", "Reshape")
            .input("input")
            .input("flatten/shape")
            .attr("T", AttrValue::datatype(DataType::Float))
            .attr("Tshape", AttrValue::datatype(DataType::Int32)),
    ])
}

/// An identity graph whose output goes through an operation type the runtime
/// does not know.
pub fn unsupported_graph() -> Vec<u8> {
    encode(vec![
        placeholder("input", &[1, 2, 2, 3]),
        NodeDef::new("mystery", "FrobnicateV9")
            .input("input")
            .attr("T", AttrValue::datatype(DataType::Float)),
    ])
}

/// A `width` x `height` JPEG filled with one RGB color.
pub fn solid_jpeg(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
    let data: Vec<u8> = rgb.iter().copied().cycle().take(width * height * 3).collect();
    let image = Image::U8(Tensor::new(vec![height, width, 3], data).expect("valid shape"));
    image::encode_jpeg(&image, 100).expect("encodable image")
}

pub fn black_jpeg(width: usize, height: usize) -> Vec<u8> {
    solid_jpeg(width, height, [0, 0, 0])
}

pub fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("writable fixture directory");
    path
}
