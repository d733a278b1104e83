//! Block cipher primitives and the contract the mode layer consumes
//!
//! A mode never sees anything of a primitive beyond [`BlockCipher`]: a keyed
//! single-block transform plus its compile-time geometry. Any primitive
//! satisfying the trait plugs into every mode without changes to the mode
//! layer.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::error::Result;

pub mod aes;
pub mod des;

// Re-exports
pub use aes::{Aes128, Aes192, Aes256};
pub use des::Des;

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// Trait for keyed single-block transforms
///
/// Implementations validate the key length at construction and the block
/// length per call; beyond that the per-call operations never fail and have
/// no side effects. All chaining state lives above this trait.
pub trait BlockCipher: Sized + Zeroize {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Creates a new cipher instance, deriving the key schedule
    ///
    /// Fails with a key-length error when `key` is not exactly
    /// [`CipherAlgorithm::KEY_SIZE`] bytes.
    fn new(key: &[u8]) -> Result<Self>;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }

    /// Generate a random key of the correct length
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Zeroizing<Vec<u8>> {
        let mut key = Zeroizing::new(vec![0u8; Self::Algorithm::KEY_SIZE]);
        rng.fill_bytes(&mut key);
        key
    }
}
