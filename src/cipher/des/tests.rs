use super::*;
use crate::cipher::BlockCipher;

#[test]
fn test_nessie_vector() {
    let key = hex::decode("7ca110454a1a6e57").unwrap();
    let cipher = Des::new(&key).unwrap();

    let mut block = hex::decode("01a1d6d039776742").unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "690f5b0d9a26939b");

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "01a1d6d039776742");
}

#[test]
fn test_classic_vector() {
    // The widely published "8787878787878787" / "0123456789abcdef" pair
    let key = hex::decode("0e329232ea6d0d73").unwrap();
    let cipher = Des::new(&key).unwrap();

    let mut block = hex::decode("8787878787878787").unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "0000000000000000");
}

#[test]
fn test_weak_parity_equivalence() {
    // Parity bits do not participate in the schedule: keys differing only in
    // the low bit of each byte encrypt identically
    let cipher_a = Des::new(&hex::decode("0101010101010101").unwrap()).unwrap();
    let cipher_b = Des::new(&hex::decode("0000000000000000").unwrap()).unwrap();

    let mut block_a = *b"DESblock";
    let mut block_b = *b"DESblock";
    cipher_a.encrypt_block(&mut block_a).unwrap();
    cipher_b.encrypt_block(&mut block_b).unwrap();
    assert_eq!(block_a, block_b);
}

#[test]
fn test_key_length_rejected() {
    assert!(Des::new(&[0u8; 7]).is_err());
    assert!(Des::new(&[0u8; 16]).is_err());
}

#[test]
fn test_block_length_rejected() {
    let cipher = Des::new(&[0u8; 8]).unwrap();
    let mut wide = [0u8; 16];
    assert!(cipher.encrypt_block(&mut wide).is_err());
}
