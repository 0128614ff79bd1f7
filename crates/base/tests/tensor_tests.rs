use base::{Tensor, TensorError};

#[test]
fn test_tensor_new_valid() {
    let tensor = Tensor::new(vec![2, 3], vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(tensor.shape, vec![2, 3]);
    assert_eq!(tensor.data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_tensor_new_shape_mismatch() {
    let result = Tensor::new(vec![1, 2, 2, 3], vec![0.0f32; 11]);
    assert_eq!(
        result.unwrap_err(),
        TensorError::ShapeMismatch {
            expected: 12,
            got: 11
        }
    );
}

#[test]
fn test_tensor_new_overflow() {
    let result = Tensor::<f32>::new(vec![usize::MAX, 2], vec![]);
    assert!(matches!(result, Err(TensorError::ShapeOverflow)));
}

#[test]
fn test_tensor_zeros() {
    let tensor = Tensor::<f32>::zeros(vec![1, 2, 2, 3]).unwrap();
    assert_eq!(tensor.shape(), &[1, 2, 2, 3]);
    assert_eq!(tensor.ndim(), 4);
    assert!(tensor.data.iter().all(|&v| v == 0.0));
}

#[test]
fn test_tensor_is_empty() {
    assert!(Tensor::<f32>::new(vec![0], vec![]).unwrap().is_empty());
    assert!(!Tensor::new(vec![2], vec![1.0, 2.0]).unwrap().is_empty());
}

#[test]
fn test_tensor_debug() {
    let tensor = Tensor::new(vec![2], vec![1.0, 2.0]).unwrap();
    let debug_str = format!("{:?}", tensor);
    assert!(debug_str.contains("Tensor"));
    assert!(debug_str.contains("shape"));
}
