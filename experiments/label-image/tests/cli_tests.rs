use std::path::PathBuf;
use std::process::{Command, Output};

fn label_image(args: &[&PathBuf], extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_label_image"))
        .args(args)
        .args(extra)
        .output()
        .expect("binary runs")
}

struct Fixture {
    _dir: tempfile::TempDir,
    graph: PathBuf,
    labels: PathBuf,
    image: PathBuf,
}

fn fixture(graph: &[u8], image: &[u8]) -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let labels = b"red\ngreen\nblue\n";
    Fixture {
        graph: fixtures::write_file(dir.path(), "model.pb", graph),
        labels: fixtures::write_file(dir.path(), "labels.txt", labels),
        image: fixtures::write_file(dir.path(), "img.jpg", image),
        _dir: dir,
    }
}

#[test]
fn test_identity_graph_exits_zero() {
    let f = fixture(&fixtures::identity_graph(&[1, 2, 2, 3]), &fixtures::black_jpeg(2, 2));
    let output = label_image(&[&f.graph, &f.labels, &f.image], &["--output", "out", "--top", "2"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stderr.is_empty());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("red (0): 0.00000"));
    assert!(stdout.contains("green (1): 0.00000"));
}

#[test]
fn test_classifier_prints_ranked_labels() {
    let f = fixture(
        &fixtures::classifier_graph(2, 2, 3, 3),
        &fixtures::solid_jpeg(2, 2, [20, 60, 240]),
    );
    let output = label_image(
        &[&f.graph, &f.labels, &f.image],
        &["--input", "input:0", "--output", "logits", "--top", "1"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("blue (2):"));
    assert!(!stdout.contains("red (0):"));
}

#[test]
fn test_missing_graph_reports_graph_step() {
    let dir = tempfile::tempdir().unwrap();
    let graph = dir.path().join("model.pb");
    let labels = fixtures::write_file(dir.path(), "labels.txt", b"a\n");
    let image = dir.path().join("img.jpg");

    let output = label_image(&[&graph, &labels, &image], &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1);
    assert!(stderr.contains("graph"));
    assert!(!stderr.contains("img.jpg"));
}

#[test]
fn test_dimension_mismatch_exits_non_zero_without_predictions() {
    let f = fixture(&fixtures::classifier_graph(2, 2, 3, 3), &fixtures::black_jpeg(4, 4));
    let output = label_image(&[&f.graph, &f.labels, &f.image], &["--output", "logits"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error at step \"inference\""));
    assert!(stderr.contains("shape mismatch"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("red ("));
}

#[test]
fn test_missing_labels_fails_after_inference() {
    let f = fixture(&fixtures::identity_graph(&[1, 2, 2, 3]), &fixtures::black_jpeg(2, 2));
    let missing = f.labels.with_file_name("nope.txt");
    let output = label_image(&[&f.graph, &missing, &f.image], &["--output", "out"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("error at step \"labels\""));
}

#[test]
fn test_mean_requires_std() {
    let f = fixture(&fixtures::identity_graph(&[1, 2, 2, 3]), &fixtures::black_jpeg(2, 2));
    let output = label_image(&[&f.graph, &f.labels, &f.image], &["--mean", "128"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("--std"), "stderr: {stderr}");
}

#[test]
fn test_wrong_argument_count() {
    let output = Command::new(env!("CARGO_BIN_EXE_label_image"))
        .arg("model.pb")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.starts_with("error at step \"arguments\": "), "stderr: {stderr}");
    assert!(stderr.contains("<LABELS>"), "stderr: {stderr}");
}

#[test]
fn test_help_exits_zero() {
    let output = Command::new(env!("CARGO_BIN_EXE_label_image"))
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("--output"));
}

#[test]
fn test_log_dir_receives_step_logs() {
    let f = fixture(&fixtures::identity_graph(&[1, 2, 2, 3]), &fixtures::black_jpeg(2, 2));
    let logs = tempfile::tempdir().unwrap();
    let output = label_image(
        &[&f.graph, &f.labels, &f.image],
        &["--output", "out", "--log-dir", logs.path().to_str().unwrap()],
    );
    assert!(output.status.success());

    let entries: Vec<_> = std::fs::read_dir(logs.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let content = std::fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap();
    assert!(content.contains("Loading graph"));
    assert!(content.contains("Running inference"));
}
