use super::*;
use crate::cipher::Aes128;
use crate::error::Error;

// NIST SP 800-38A F.2.1 (CBC-AES128)
const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const IV: &str = "000102030405060708090a0b0c0d0e0f";
const PLAINTEXT: &str = "6bc1bee22e409f96e93d7e117393172a\
                         ae2d8a571e03ac9c9eb76fac45af8e51\
                         30c81c46a35ce411e5fbc1191a0a52ef";
const CIPHERTEXT: &str = "7649abac8119b246cee98e9b12e9197d\
                          5086cb9b507219ee95db113a917678b2\
                          73bed6b8e3c1743b7116e69e22229516";

fn fixture() -> (Vec<u8>, Vec<u8>, Vec<u8>, Vec<u8>) {
    (
        hex::decode(KEY).unwrap(),
        hex::decode(IV).unwrap(),
        hex::decode(PLAINTEXT).unwrap(),
        hex::decode(CIPHERTEXT).unwrap(),
    )
}

#[test]
fn test_cbc_nist_known_answer() {
    let (key, iv, plaintext, ciphertext) = fixture();

    let mut cbc = Cbc::new(Aes128::new(&key).unwrap(), &iv).unwrap();
    assert_eq!(cbc.encrypt(&plaintext).unwrap(), ciphertext);

    let mut cbc = Cbc::new(Aes128::new(&key).unwrap(), &iv).unwrap();
    assert_eq!(cbc.decrypt(&ciphertext).unwrap(), plaintext);
}

#[test]
fn test_cbc_split_calls_match_single_call() {
    let (key, iv, plaintext, ciphertext) = fixture();

    for split in [1, 7, 16, 17, 32, 33, 47] {
        let mut cbc = Cbc::new(Aes128::new(&key).unwrap(), &iv).unwrap();
        let mut out = cbc.encrypt(&plaintext[..split]).unwrap();
        out.extend(cbc.encrypt(&plaintext[split..]).unwrap());
        assert_eq!(out, ciphertext, "split at {}", split);
    }
}

#[test]
fn test_cbc_split_decrypt_matches_single_call() {
    let (key, iv, plaintext, ciphertext) = fixture();

    let mut cbc = Cbc::new(Aes128::new(&key).unwrap(), &iv).unwrap();
    let mut out = cbc.decrypt(&ciphertext[..9]).unwrap();
    out.extend(cbc.decrypt(&ciphertext[9..30]).unwrap());
    out.extend(cbc.decrypt(&ciphertext[30..]).unwrap());
    assert_eq!(out, plaintext);
}

#[test]
fn test_cbc_rejects_wrong_iv_length() {
    let key = [0u8; 16];
    let cipher = Aes128::new(&key).unwrap();
    match Cbc::new(cipher, &[0u8; 12]) {
        Err(Error::IvLength { mode, expected, actual }) => {
            assert_eq!(mode, "CBC");
            assert_eq!(expected, 16);
            assert_eq!(actual, 12);
        }
        other => panic!("expected IvLength error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_cbc_partial_block_is_buffered() {
    let (key, iv, plaintext, _) = fixture();

    let mut cbc = Cbc::new(Aes128::new(&key).unwrap(), &iv).unwrap();
    assert!(cbc.encrypt(&plaintext[..5]).unwrap().is_empty());
    assert_eq!(cbc.pending(), 5);
    assert_eq!(cbc.encrypt(&plaintext[5..16]).unwrap().len(), 16);
    assert_eq!(cbc.pending(), 0);
}
