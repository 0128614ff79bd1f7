//! The subset of TensorFlow's `graph.proto` needed to write frozen graphs.

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum DataType {
    Float = 1,
    Int32 = 3,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct GraphDef {
    #[prost(message, repeated, tag = "1")]
    pub node: Vec<NodeDef>,
    #[prost(message, optional, tag = "4")]
    pub versions: Option<VersionDef>,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct VersionDef {
    #[prost(int32, tag = "1")]
    pub producer: i32,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct NodeDef {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub op: String,
    #[prost(string, repeated, tag = "3")]
    pub input: Vec<String>,
    #[prost(map = "string, message", tag = "5")]
    pub attr: HashMap<String, AttrValue>,
}

impl NodeDef {
    pub fn new(name: &str, op: &str) -> Self {
        Self {
            name: name.to_string(),
            op: op.to_string(),
            input: Vec::new(),
            attr: HashMap::new(),
        }
    }

    pub fn input(mut self, name: &str) -> Self {
        self.input.push(name.to_string());
        self
    }

    pub fn attr(mut self, key: &str, value: AttrValue) -> Self {
        self.attr.insert(key.to_string(), value);
        self
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct AttrValue {
    #[prost(oneof = "attr_value::Value", tags = "2, 3, 4, 5, 6, 7, 8")]
    pub value: Option<attr_value::Value>,
}

pub mod attr_value {
    use super::{TensorProto, TensorShapeProto};

    #[derive(Clone, PartialEq, prost::Oneof)]
    pub enum Value {
        #[prost(bytes, tag = "2")]
        S(Vec<u8>),
        #[prost(int64, tag = "3")]
        I(i64),
        #[prost(float, tag = "4")]
        F(f32),
        #[prost(bool, tag = "5")]
        B(bool),
        #[prost(int32, tag = "6")]
        Type(i32),
        #[prost(message, tag = "7")]
        Shape(TensorShapeProto),
        #[prost(message, tag = "8")]
        Tensor(TensorProto),
    }
}

impl AttrValue {
    pub fn datatype(dt: DataType) -> Self {
        Self {
            value: Some(attr_value::Value::Type(dt as i32)),
        }
    }

    pub fn boolean(b: bool) -> Self {
        Self {
            value: Some(attr_value::Value::B(b)),
        }
    }

    pub fn shape(shape: TensorShapeProto) -> Self {
        Self {
            value: Some(attr_value::Value::Shape(shape)),
        }
    }

    pub fn tensor(tensor: TensorProto) -> Self {
        Self {
            value: Some(attr_value::Value::Tensor(tensor)),
        }
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TensorShapeProto {
    #[prost(message, repeated, tag = "2")]
    pub dim: Vec<Dim>,
    #[prost(bool, tag = "3")]
    pub unknown_rank: bool,
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct Dim {
    #[prost(int64, tag = "1")]
    pub size: i64,
    #[prost(string, tag = "2")]
    pub name: String,
}

impl TensorShapeProto {
    pub fn from_dims(dims: &[i64]) -> Self {
        Self {
            dim: dims
                .iter()
                .map(|&size| Dim {
                    size,
                    name: String::new(),
                })
                .collect(),
            unknown_rank: false,
        }
    }
}

#[derive(Clone, PartialEq, prost::Message)]
pub struct TensorProto {
    #[prost(int32, tag = "1")]
    pub dtype: i32,
    #[prost(message, optional, tag = "2")]
    pub tensor_shape: Option<TensorShapeProto>,
    #[prost(float, repeated, tag = "5")]
    pub float_val: Vec<f32>,
    #[prost(int32, repeated, tag = "7")]
    pub int_val: Vec<i32>,
}

impl TensorProto {
    pub fn float(dims: &[i64], values: Vec<f32>) -> Self {
        Self {
            dtype: DataType::Float as i32,
            tensor_shape: Some(TensorShapeProto::from_dims(dims)),
            float_val: values,
            int_val: Vec::new(),
        }
    }

    pub fn int32(dims: &[i64], values: Vec<i32>) -> Self {
        Self {
            dtype: DataType::Int32 as i32,
            tensor_shape: Some(TensorShapeProto::from_dims(dims)),
            float_val: Vec::new(),
            int_val: values,
        }
    }
}
