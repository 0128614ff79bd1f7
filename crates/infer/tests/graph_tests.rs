use base::Buffer;
use infer::{Graph, InferError};

#[test]
fn test_import_lists_every_operation() {
    let graph = Graph::import(&Buffer::from_vec(fixtures::classifier_graph(2, 2, 3, 4))).unwrap();

    let names: Vec<&str> = graph.operation_names().collect();
    for expected in ["input", "flatten/shape", "flatten", "weights", "logits"] {
        assert!(names.contains(&expected), "missing operation {expected}");
    }
    assert_eq!(graph.operation_count(), 5);
    assert!(graph.has_operation("logits"));
    assert!(!graph.has_operation("Logits"));
}

#[test]
fn test_import_rejects_garbage() {
    let result = Graph::import(&Buffer::from_vec(vec![0xFF; 64]));
    assert!(matches!(result, Err(InferError::GraphImport(_))));
}

#[test]
fn test_import_rejects_unsupported_operation() {
    match Graph::import(&Buffer::from_vec(fixtures::unsupported_graph())) {
        Err(InferError::GraphImport(msg)) => {
            assert!(msg.contains("mystery") || msg.contains("FrobnicateV9"), "got: {msg}")
        }
        other => panic!("Expected GraphImport error, got {:?}", other),
    }
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixtures::write_file(dir.path(), "model.pb", &fixtures::identity_graph(&[1, 2, 2, 3]));

    let graph = Graph::load(&path).unwrap();
    assert!(graph.has_operation("out"));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Graph::load(dir.path().join("model.pb"));
    assert!(matches!(result, Err(InferError::Buffer(_))));
}
