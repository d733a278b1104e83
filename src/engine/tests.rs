use super::*;
use crate::cipher::Aes128;
use crate::error::Error;

const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c";
const IV: &str = "000102030405060708090a0b0c0d0e0f";

#[test]
fn test_engine_cbc_known_answer() {
    let key = hex::decode(KEY).unwrap();
    let iv = hex::decode(IV).unwrap();
    let plaintext = hex::decode(
        "6bc1bee22e409f96e93d7e117393172a\
         ae2d8a571e03ac9c9eb76fac45af8e51\
         30c81c46a35ce411e5fbc1191a0a52ef",
    )
    .unwrap();
    let ciphertext = hex::decode(
        "7649abac8119b246cee98e9b12e9197d\
         5086cb9b507219ee95db113a917678b2\
         73bed6b8e3c1743b7116e69e22229516",
    )
    .unwrap();

    let mut engine = ModeEngine::<Aes128>::new(&key, Mode::Cbc, Some(&iv), None).unwrap();
    assert_eq!(engine.encrypt(&plaintext).unwrap(), ciphertext);
    assert!(engine.finish().unwrap().is_empty());
}

#[test]
fn test_engine_ctr_known_answer() {
    let key = hex::decode(KEY).unwrap();
    let counter = hex::decode("f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff").unwrap();
    let plaintext = hex::decode(
        "6bc1bee22e409f96e93d7e117393172a\
         ae2d8a571e03ac9c9eb76fac45af8e51\
         30c81c46a35ce411e5fbc1191a0a52ef",
    )
    .unwrap();
    let ciphertext = hex::decode(
        "874d6191b620e3261bef6864990db6ce\
         9806f66b7970fdff8617187bb9fffdff\
         5ae4df3edbd5d35e5b4f09020db03eab",
    )
    .unwrap();

    let mut engine = ModeEngine::<Aes128>::new(&key, Mode::Ctr, None, Some(&counter)).unwrap();
    assert_eq!(engine.encrypt(&plaintext).unwrap(), ciphertext);
}

#[test]
fn test_engine_xts_double_length_key_roundtrip() {
    // data and tweak halves may even be equal; the engine only splits
    let mut key = hex::decode(KEY).unwrap();
    key.extend(hex::decode(KEY).unwrap());

    let message: Vec<u8> = (0u8..64).collect();

    let mut enc = ModeEngine::<Aes128>::new(&key, Mode::Xts, None, None).unwrap();
    let mut ciphertext = enc.encrypt(&message[..31]).unwrap();
    ciphertext.extend(enc.encrypt(&message[31..]).unwrap());
    ciphertext.extend(enc.finish().unwrap());
    assert_eq!(ciphertext.len(), message.len());

    let mut dec = ModeEngine::<Aes128>::new(&key, Mode::Xts, None, None).unwrap();
    let mut plaintext = dec.decrypt(&ciphertext[..31]).unwrap();
    plaintext.extend(dec.decrypt(&ciphertext[31..]).unwrap());
    plaintext.extend(dec.finish().unwrap());
    assert_eq!(plaintext, message);
}

#[test]
fn test_engine_with_sector_matches_default_for_zero() {
    let mut key = hex::decode(KEY).unwrap();
    key.extend(hex::decode(KEY).unwrap());
    let message = [0x42u8; 48];

    let mut a = ModeEngine::<Aes128>::new(&key, Mode::Xts, None, None).unwrap();
    let mut ct_a = a.encrypt(&message).unwrap();
    ct_a.extend(a.finish().unwrap());

    let mut b = ModeEngine::<Aes128>::with_sector(&key, 0).unwrap();
    let mut ct_b = b.encrypt(&message).unwrap();
    ct_b.extend(b.finish().unwrap());
    assert_eq!(ct_a, ct_b);

    let mut c = ModeEngine::<Aes128>::with_sector(&key, 1).unwrap();
    let mut ct_c = c.encrypt(&message).unwrap();
    ct_c.extend(c.finish().unwrap());
    assert_ne!(ct_a, ct_c);
}

#[test]
fn test_engine_rejects_iv_for_modes_without_one() {
    let key = hex::decode(KEY).unwrap();
    let iv = hex::decode(IV).unwrap();
    let mut xts_key = key.clone();
    xts_key.extend(&key);

    for (mode, key) in [
        (Mode::Ecb, key.as_slice()),
        (Mode::Ctr, key.as_slice()),
        (Mode::Xts, xts_key.as_slice()),
    ] {
        assert!(
            matches!(
                ModeEngine::<Aes128>::new(key, mode, Some(&iv), None).err(),
                Some(Error::UnsupportedParameter { parameter: "iv", .. })
            ),
            "{} accepted an IV",
            mode
        );
    }
}

#[test]
fn test_engine_rejects_counter_for_non_ctr_modes() {
    let key = hex::decode(KEY).unwrap();
    let iv = hex::decode(IV).unwrap();
    let counter = [0u8; 16];

    for (mode, iv) in [
        (Mode::Ecb, None),
        (Mode::Cbc, Some(iv.as_slice())),
        (Mode::Cfb, Some(iv.as_slice())),
        (Mode::Ofb, Some(iv.as_slice())),
    ] {
        assert!(
            matches!(
                ModeEngine::<Aes128>::new(&key, mode, iv, Some(&counter)).err(),
                Some(Error::UnsupportedParameter { parameter: "counter", .. })
            ),
            "{} accepted a counter",
            mode
        );
    }
}

#[test]
fn test_engine_missing_iv_reports_length_zero() {
    let key = hex::decode(KEY).unwrap();
    assert!(matches!(
        ModeEngine::<Aes128>::new(&key, Mode::Cbc, None, None).err(),
        Some(Error::IvLength { mode: "CBC", expected: 16, actual: 0 })
    ));
    assert!(matches!(
        ModeEngine::<Aes128>::new(&key, Mode::Ctr, None, None).err(),
        Some(Error::CounterLength { expected: 16, actual: 0 })
    ));
}

#[test]
fn test_engine_rejects_wrong_key_lengths() {
    let iv = hex::decode(IV).unwrap();
    assert!(matches!(
        ModeEngine::<Aes128>::new(&[0u8; 15], Mode::Cbc, Some(&iv), None).err(),
        Some(Error::KeyLength { expected: 16, actual: 15, .. })
    ));

    // XTS needs twice the primitive's key length
    assert!(matches!(
        ModeEngine::<Aes128>::new(&[0u8; 16], Mode::Xts, None, None).err(),
        Some(Error::KeyLength { expected: 32, actual: 16, .. })
    ));
}

#[test]
fn test_engine_mode_and_block_size_accessors() {
    let key = hex::decode(KEY).unwrap();
    let engine = ModeEngine::<Aes128>::new(&key, Mode::Ecb, None, None).unwrap();
    assert_eq!(engine.mode(), Mode::Ecb);
    assert_eq!(engine.block_size(), 16);
    assert_eq!(engine.mode().name(), "ECB");
}
