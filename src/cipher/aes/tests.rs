use super::*;
use crate::cipher::BlockCipher;

// FIPS 197 Appendix C known-answer vectors

#[test]
fn test_aes128_fips197_vector() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let cipher = Aes128::new(&key).unwrap();

    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "69c4e0d86a7b0430d8cdb78070b4c55a");

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "00112233445566778899aabbccddeeff");
}

#[test]
fn test_aes192_fips197_vector() {
    let key = hex::decode("000102030405060708090a0b0c0d0e0f1011121314151617").unwrap();
    let cipher = Aes192::new(&key).unwrap();

    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "dda97ca4864cdfe06eaf70a0ec0d7191");

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "00112233445566778899aabbccddeeff");
}

#[test]
fn test_aes256_fips197_vector() {
    let key =
        hex::decode("000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f").unwrap();
    let cipher = Aes256::new(&key).unwrap();

    let mut block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "8ea2b7ca516745bfeafc49904b496089");

    cipher.decrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "00112233445566778899aabbccddeeff");
}

#[test]
fn test_sp800_38a_single_block() {
    // First ECB block of the SP 800-38A test suite
    let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let cipher = Aes128::new(&key).unwrap();

    let mut block = hex::decode("6bc1bee22e409f96e93d7e117393172a").unwrap();
    cipher.encrypt_block(&mut block).unwrap();
    assert_eq!(hex::encode(&block), "3ad77bb40d7a3660a89ecaf32466ef97");
}

#[test]
fn test_key_length_rejected() {
    assert!(Aes128::new(&[0u8; 15]).is_err());
    assert!(Aes128::new(&[0u8; 24]).is_err());
    assert!(Aes192::new(&[0u8; 16]).is_err());
    assert!(Aes256::new(&[0u8; 16]).is_err());
}

#[test]
fn test_block_length_rejected() {
    let cipher = Aes128::new(&[0u8; 16]).unwrap();
    let mut short = [0u8; 8];
    assert!(cipher.encrypt_block(&mut short).is_err());
    let mut long = [0u8; 17];
    assert!(cipher.decrypt_block(&mut long).is_err());
}

#[test]
fn test_sbox_pair_inverts() {
    for value in 0u16..=255 {
        let value = value as u8;
        assert_eq!(inv_sbox(sbox(value)), value);
    }
}
