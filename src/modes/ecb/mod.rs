//! Electronic Codebook (ECB) mode
//!
//! Each complete block is transformed independently; there is no chaining
//! state. ECB leaks plaintext structure across identical blocks and is kept
//! for compatibility, not recommended for new designs.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::BlockBuffer;
use crate::cipher::BlockCipher;
use crate::error::Result;

/// Streaming ECB mode instance
///
/// Input that does not fill a whole block is carried over to the next call;
/// trailing bytes short of a block are never transformed (no padding is
/// applied).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ecb<B: BlockCipher> {
    cipher: B,
    carry: BlockBuffer,
}

impl<B: BlockCipher> Ecb<B> {
    /// Creates a new ECB mode instance
    pub fn new(cipher: B) -> Self {
        Self {
            cipher,
            carry: BlockBuffer::new(),
        }
    }

    fn process(&mut self, data: &[u8], decrypt: bool) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        self.carry.fill(data);

        let mut output = self.carry.drain_blocks(block_size, 0);
        for block in output.chunks_mut(block_size) {
            if decrypt {
                self.cipher.decrypt_block(block)?;
            } else {
                self.cipher.encrypt_block(block)?;
            }
        }
        Ok(output.to_vec())
    }

    /// Encrypts all complete blocks available, buffering the remainder
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext, false)
    }

    /// Decrypts all complete blocks available, buffering the remainder
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext, true)
    }

    /// Bytes currently buffered short of a block boundary
    pub fn pending(&self) -> usize {
        self.carry.len()
    }
}
