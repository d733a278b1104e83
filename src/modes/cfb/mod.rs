//! Cipher Feedback (CFB) mode
//!
//! Full-block feedback variant (CFB-128 for a 16-byte primitive): the
//! keystream for each segment is the block encryption of the previous
//! ciphertext block, seeded by the IV. Only the forward direction of the
//! primitive is ever used; decryption regenerates the keystream from the
//! received ciphertext.
//!
//! The keystream is consumed through a byte cursor, so input of any length
//! is transformed immediately and the position inside the current segment
//! survives across calls.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::cipher::BlockCipher;
use crate::error::{validate, Result};

/// Streaming CFB mode instance
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cfb<B: BlockCipher> {
    cipher: B,
    // ciphertext block being assembled, fed back once complete
    register: Zeroizing<Vec<u8>>,
    keystream: Zeroizing<Vec<u8>>,
    keystream_pos: usize,
}

impl<B: BlockCipher> Cfb<B> {
    /// Creates a new CFB mode instance with the given cipher and IV
    ///
    /// The IV must be exactly one block long.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        let block_size = B::block_size();
        validate::iv_length("CFB", iv.len(), block_size)?;

        Ok(Self {
            cipher,
            register: Zeroizing::new(iv.to_vec()),
            keystream: Zeroizing::new(Vec::new()),
            // forces keystream generation on first use
            keystream_pos: block_size,
        })
    }

    fn transform(&mut self, data: &[u8], decrypt: bool) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        let mut output = Vec::with_capacity(data.len());

        for &byte in data {
            if self.keystream_pos == block_size {
                self.keystream.clear();
                self.keystream.extend_from_slice(&self.register);
                self.cipher.encrypt_block(&mut self.keystream)?;
                self.keystream_pos = 0;
            }

            let out = byte ^ self.keystream[self.keystream_pos];
            let ciphertext_byte = if decrypt { byte } else { out };
            self.register[self.keystream_pos] = ciphertext_byte;
            self.keystream_pos += 1;
            output.push(out);
        }

        Ok(output)
    }

    /// Encrypts data of any length, emitting output immediately
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.transform(plaintext, false)
    }

    /// Decrypts data of any length, emitting output immediately
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.transform(ciphertext, true)
    }
}
