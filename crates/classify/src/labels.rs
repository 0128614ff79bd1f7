use crate::{ErrorKind, PipelineError, Step};
use base::Buffer;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub index: usize,
    pub label: String,
    pub score: f32,
}

/// Reads one label per line. Trailing whitespace is trimmed and trailing
/// empty lines are dropped; empty lines in between keep their position.
pub fn load_labels(path: impl AsRef<Path>) -> Result<Vec<String>, PipelineError> {
    let buffer = Buffer::load(path).map_err(PipelineError::at(Step::Labels))?;
    let text = String::from_utf8(buffer.into_vec()).map_err(|e| {
        PipelineError::new(Step::Labels, ErrorKind::Labels(format!("labels are not UTF-8: {e}")))
    })?;

    let mut labels: Vec<String> = text.lines().map(|l| l.trim_end().to_string()).collect();
    while labels.last().is_some_and(|l| l.is_empty()) {
        labels.pop();
    }
    log::debug!("loaded {} labels", labels.len());
    Ok(labels)
}

/// The `k` best scores, highest first. Equal scores keep index order.
pub fn top_k(scores: &[f32], labels: &[String], k: usize) -> Vec<Prediction> {
    let mut ranked: Vec<(usize, f32)> = scores.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(k)
        .map(|(index, score)| Prediction {
            index,
            label: labels
                .get(index)
                .cloned()
                .unwrap_or_else(|| format!("#{index}")),
            score,
        })
        .collect()
}
