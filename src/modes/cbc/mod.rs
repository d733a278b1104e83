//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the IV. This implementation
//! follows NIST SP 800-38A and is streaming: the chaining register survives
//! across calls, so a message fed in pieces produces byte-identical output
//! to a single call.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::{xor_in_place, BlockBuffer};
use crate::cipher::BlockCipher;
use crate::error::{validate, Result};

/// Streaming CBC mode instance
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher> {
    cipher: B,
    // last ciphertext block, or the IV before any block was processed
    prev: Zeroizing<Vec<u8>>,
    carry: BlockBuffer,
}

impl<B: BlockCipher> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be exactly one block long.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::iv_length("CBC", iv.len(), B::block_size())?;

        Ok(Self {
            cipher,
            prev: Zeroizing::new(iv.to_vec()),
            carry: BlockBuffer::new(),
        })
    }

    /// Encrypts all complete blocks available, buffering the remainder
    ///
    /// The trailing partial block, if any, is retained for the next call;
    /// it is the caller's job to supply padded, block-aligned totals.
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        self.carry.fill(plaintext);

        let mut output = self.carry.drain_blocks(block_size, 0);
        for block in output.chunks_mut(block_size) {
            xor_in_place(block, &self.prev);
            self.cipher.encrypt_block(block)?;
            self.prev.copy_from_slice(block);
        }
        Ok(output.to_vec())
    }

    /// Decrypts all complete blocks available, buffering the remainder
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        self.carry.fill(ciphertext);

        let mut output = self.carry.drain_blocks(block_size, 0);
        let mut current = Zeroizing::new(vec![0u8; block_size]);
        for block in output.chunks_mut(block_size) {
            current.copy_from_slice(block);
            self.cipher.decrypt_block(block)?;
            xor_in_place(block, &self.prev);
            self.prev.copy_from_slice(&current);
        }
        Ok(output.to_vec())
    }

    /// Bytes currently buffered short of a block boundary
    pub fn pending(&self) -> usize {
        self.carry.len()
    }
}

#[cfg(test)]
mod tests;
