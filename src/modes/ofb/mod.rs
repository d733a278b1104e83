//! Output Feedback (OFB) mode
//!
//! The keystream is the iterated block encryption of the IV, independent of
//! the data: `K_1 = E(IV)`, `K_{i+1} = E(K_i)`. Encryption and decryption
//! are the same XOR, so both directions use only the forward primitive.
//!
//! The keystream is consumed through a byte cursor, so input of any length
//! is transformed immediately and the position inside the current keystream
//! block survives across calls.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::cipher::BlockCipher;
use crate::error::{validate, Result};

/// Streaming OFB mode instance
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ofb<B: BlockCipher> {
    cipher: B,
    // current keystream block, re-encrypted in place for the next one
    register: Zeroizing<Vec<u8>>,
    keystream_pos: usize,
}

impl<B: BlockCipher> Ofb<B> {
    /// Creates a new OFB mode instance with the given cipher and IV
    ///
    /// The IV must be exactly one block long.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let block_size = B::block_size();
        validate::iv_length("OFB", iv.len(), block_size)?;

        Ok(Self {
            cipher,
            register: Zeroizing::new(iv.to_vec()),
            // forces the first register encryption on first use
            keystream_pos: block_size,
        })
    }

    fn transform(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        let mut output = Vec::with_capacity(data.len());

        for &byte in data {
            if self.keystream_pos == block_size {
                self.cipher.encrypt_block(&mut self.register)?;
                self.keystream_pos = 0;
            }
            output.push(byte ^ self.register[self.keystream_pos]);
            self.keystream_pos += 1;
        }

        Ok(output)
    }

    /// Encrypts data of any length, emitting output immediately
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.transform(plaintext)
    }

    /// Decrypts data of any length; identical to encryption in OFB
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.transform(ciphertext)
    }
}
