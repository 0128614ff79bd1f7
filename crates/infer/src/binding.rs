use std::fmt;
use std::str::FromStr;

/// A named graph operation and one of its output slots.
///
/// Written `name` (slot 0) or `name:slot`, the TensorFlow tensor-name
/// convention. Operation names may themselves contain `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IoBinding {
    pub operation: String,
    pub index: usize,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParseBindingError {
    #[error("empty operation name in binding \"{0}\"")]
    EmptyName(String),
}

impl IoBinding {
    pub fn new(operation: impl Into<String>) -> Self {
        Self::with_index(operation, 0)
    }

    pub fn with_index(operation: impl Into<String>, index: usize) -> Self {
        Self {
            operation: operation.into(),
            index,
        }
    }
}

impl FromStr for IoBinding {
    type Err = ParseBindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (operation, index) = match s.rsplit_once(':') {
            Some((name, slot)) => match slot.parse::<usize>() {
                Ok(index) => (name, index),
                Err(_) => (s, 0),
            },
            None => (s, 0),
        };
        if operation.is_empty() {
            return Err(ParseBindingError::EmptyName(s.to_string()));
        }
        Ok(Self::with_index(operation, index))
    }
}

impl fmt::Display for IoBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.index == 0 {
            write!(f, "{}", self.operation)
        } else {
            write!(f, "{}:{}", self.operation, self.index)
        }
    }
}
