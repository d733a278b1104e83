//! Runtime-parameterised mode engine
//!
//! [`ModeEngine`] wraps the six chaining modes behind one surface selected
//! by a [`Mode`] value at construction, validating the key, IV and counter
//! parameters for the selected mode up front. All streaming semantics are
//! those of the underlying mode instance.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::cipher::BlockCipher;
use crate::error::{validate, Result};
use crate::modes::{Cbc, Cfb, Ctr, Ecb, Ofb, Xts};

/// Chaining mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Electronic Codebook
    Ecb,
    /// Cipher Block Chaining
    Cbc,
    /// Cipher Feedback (full-block)
    Cfb,
    /// Output Feedback
    Ofb,
    /// Counter
    Ctr,
    /// Tweaked codebook with ciphertext stealing
    Xts,
}

impl Mode {
    /// Canonical mode name
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Ecb => "ECB",
            Mode::Cbc => "CBC",
            Mode::Cfb => "CFB",
            Mode::Ofb => "OFB",
            Mode::Ctr => "CTR",
            Mode::Xts => "XTS",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Zeroize, ZeroizeOnDrop)]
enum Inner<B: BlockCipher> {
    Ecb(Ecb<B>),
    Cbc(Cbc<B>),
    Cfb(Cfb<B>),
    Ofb(Ofb<B>),
    Ctr(Ctr<B>),
    Xts(Xts<B>),
}

/// Mode-generic cipher engine over a block primitive
///
/// ```
/// use blockmodes::{Aes128, Mode, ModeEngine};
///
/// let key = [0u8; 16];
/// let counter = [0u8; 16];
/// let mut engine = ModeEngine::<Aes128>::new(&key, Mode::Ctr, None, Some(&counter)).unwrap();
/// let ciphertext = engine.encrypt(b"any length works in CTR").unwrap();
/// assert_eq!(ciphertext.len(), 23);
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct ModeEngine<B: BlockCipher> {
    inner: Inner<B>,
}

impl<B: BlockCipher> ModeEngine<B> {
    /// Creates an engine for `mode`, validating parameters up front
    ///
    /// - ECB takes neither IV nor counter.
    /// - CBC, CFB and OFB require a block-length IV and no counter.
    /// - CTR requires a block-length initial counter and no IV.
    /// - XTS takes neither; the key must be double length (data key
    ///   followed by tweak key) and the sector index defaults to 0.
    pub fn new(key: &[u8], mode: Mode, iv: Option<&[u8]>, counter: Option<&[u8]>) -> Result<Self> {
        if mode != Mode::Ctr {
            validate::no_parameter(counter.is_none(), mode.name(), "counter")?;
        }
        match mode {
            Mode::Ecb | Mode::Ctr | Mode::Xts => {
                validate::no_parameter(iv.is_none(), mode.name(), "iv")?;
            }
            _ => {}
        }

        let inner = match mode {
            Mode::Ecb => Inner::Ecb(Ecb::new(B::new(key)?)),
            Mode::Cbc => Inner::Cbc(Cbc::new(B::new(key)?, iv.unwrap_or(&[]))?),
            Mode::Cfb => Inner::Cfb(Cfb::new(B::new(key)?, iv.unwrap_or(&[]))?),
            Mode::Ofb => Inner::Ofb(Ofb::new(B::new(key)?, iv.unwrap_or(&[]))?),
            Mode::Ctr => Inner::Ctr(Ctr::new(B::new(key)?, counter.unwrap_or(&[]))?),
            Mode::Xts => Inner::Xts(Self::build_xts(key, 0)?),
        };
        Ok(Self { inner })
    }

    /// Creates an XTS engine bound to the given sector index
    ///
    /// The key is the data key followed by the tweak key.
    pub fn with_sector(key: &[u8], sector: u64) -> Result<Self> {
        Ok(Self {
            inner: Inner::Xts(Self::build_xts(key, sector)?),
        })
    }

    fn build_xts(key: &[u8], sector: u64) -> Result<Xts<B>> {
        validate::key_length(B::name(), key.len(), 2 * B::key_size())?;
        let (data_key, tweak_key) = key.split_at(B::key_size());
        let data_cipher = B::new(data_key)?;
        let tweak_cipher = B::new(tweak_key)?;
        Xts::new(data_cipher, &tweak_cipher, sector)
    }

    /// Encrypts a fragment of the message
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        match &mut self.inner {
            Inner::Ecb(mode) => mode.encrypt(plaintext),
            Inner::Cbc(mode) => mode.encrypt(plaintext),
            Inner::Cfb(mode) => mode.encrypt(plaintext),
            Inner::Ofb(mode) => mode.encrypt(plaintext),
            Inner::Ctr(mode) => mode.encrypt(plaintext),
            Inner::Xts(mode) => mode.encrypt(plaintext),
        }
    }

    /// Decrypts a fragment of the message
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        match &mut self.inner {
            Inner::Ecb(mode) => mode.decrypt(ciphertext),
            Inner::Cbc(mode) => mode.decrypt(ciphertext),
            Inner::Cfb(mode) => mode.decrypt(ciphertext),
            Inner::Ofb(mode) => mode.decrypt(ciphertext),
            Inner::Ctr(mode) => mode.decrypt(ciphertext),
            Inner::Xts(mode) => mode.decrypt(ciphertext),
        }
    }

    /// Completes the message
    ///
    /// XTS flushes its withheld tail here; every other mode returns an
    /// empty vector.
    pub fn finish(&mut self) -> Result<Vec<u8>> {
        match &mut self.inner {
            Inner::Xts(mode) => mode.finish(),
            _ => Ok(Vec::new()),
        }
    }

    /// The mode this engine was constructed with
    pub fn mode(&self) -> Mode {
        match &self.inner {
            Inner::Ecb(_) => Mode::Ecb,
            Inner::Cbc(_) => Mode::Cbc,
            Inner::Cfb(_) => Mode::Cfb,
            Inner::Ofb(_) => Mode::Ofb,
            Inner::Ctr(_) => Mode::Ctr,
            Inner::Xts(_) => Mode::Xts,
        }
    }

    /// Block size of the underlying primitive in bytes
    pub fn block_size(&self) -> usize {
        B::block_size()
    }
}

#[cfg(test)]
mod tests;
