use base::{Buffer, BufferError};
use std::io::Write;

#[test]
fn test_load_reads_whole_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let payload: Vec<u8> = (0..=255).cycle().take(10_000).collect();
    file.write_all(&payload).unwrap();
    file.flush().unwrap();

    let buffer = Buffer::load(file.path()).unwrap();
    assert_eq!(buffer.len(), 10_000);
    assert_eq!(buffer.as_slice(), payload.as_slice());
}

#[test]
fn test_load_empty_file() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let buffer = Buffer::load(file.path()).unwrap();
    assert!(buffer.is_empty());
}

#[test]
fn test_load_nonexistent_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.pb");

    match Buffer::load(&path) {
        Err(BufferError::Open { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("Expected Open error, got {:?}", other),
    }
}

#[test]
fn test_load_directory_fails() {
    let dir = tempfile::tempdir().unwrap();

    match Buffer::load(dir.path()) {
        Err(BufferError::Read { path, source }) => {
            assert_eq!(path, dir.path());
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidInput);
        }
        other => panic!("Expected Read error, got {:?}", other),
    }
}

#[test]
fn test_error_display_names_path() {
    let err = Buffer::load("/definitely/not/here.jpg").unwrap_err();
    assert!(err.to_string().contains("/definitely/not/here.jpg"));
}

#[test]
fn test_buffer_derefs_to_bytes() {
    let buffer = Buffer::from_vec(vec![1, 2, 3]);
    assert_eq!(&buffer[..2], &[1, 2]);
    assert_eq!(buffer.into_vec(), vec![1, 2, 3]);
}
