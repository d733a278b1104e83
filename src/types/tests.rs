use super::*;

#[test]
fn test_from_slice_length_check() {
    assert!(SecretBytes::<16>::from_slice(&[0u8; 16]).is_ok());
    assert!(SecretBytes::<16>::from_slice(&[0u8; 15]).is_err());
}

#[test]
fn test_debug_redacts() {
    let secret = SecretBytes::<8>::new([0xAA; 8]);
    let rendered = format!("{:?}", secret);
    assert!(!rendered.contains("170"));
    assert!(rendered.contains("REDACTED"));

    let buffer = SecretBuffer::<4>::new([0xAA; 4]);
    let rendered = format!("{:?}", buffer);
    assert!(!rendered.contains("170"));
    assert!(rendered.contains("REDACTED"));
}

#[test]
fn test_constant_time_eq() {
    let a = SecretBytes::<4>::new([1, 2, 3, 4]);
    let b = SecretBytes::<4>::new([1, 2, 3, 4]);
    let c = SecretBytes::<4>::new([1, 2, 3, 5]);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_buffer_geometry() {
    let buffer = SecretBuffer::<16>::zeroed();
    assert_eq!(buffer.len(), 16);
    assert!(!buffer.is_empty());
    assert_eq!(buffer.as_ref(), &[0u8; 16]);
}
