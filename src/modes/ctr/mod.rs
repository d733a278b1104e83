//! Counter (CTR) mode
//!
//! The keystream is the block encryption of a counter sequence: the caller
//! supplies the initial counter block and every keystream block consumes
//! exactly one counter step, regardless of how the input is chunked across
//! calls. The counter is treated as one big-endian integer spanning the
//! whole block and wraps silently at the block width.
//!
//! Only the forward direction of the primitive is used for both encryption
//! and decryption.

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::cipher::BlockCipher;
use crate::error::{validate, Result};

/// Restartable big-endian counter sequence over a fixed-width block
///
/// `next` yields the current value and advances by one; `reset` restarts
/// from the seed. Increment wraps modulo 2^(8·len).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Counter {
    seed: Zeroizing<Vec<u8>>,
    value: Zeroizing<Vec<u8>>,
}

impl Counter {
    /// Creates a counter sequence starting at `initial`
    pub fn new(initial: &[u8]) -> Self {
        Self {
            seed: Zeroizing::new(initial.to_vec()),
            value: Zeroizing::new(initial.to_vec()),
        }
    }

    /// Writes the current counter value into `out` and advances the sequence
    ///
    /// `out` must be the counter's width.
    pub fn next(&mut self, out: &mut [u8]) {
        out.copy_from_slice(&self.value);
        self.increment();
    }

    /// Restarts the sequence from its seed
    pub fn reset(&mut self) {
        self.value.copy_from_slice(&self.seed);
    }

    /// Current counter width in bytes
    pub fn width(&self) -> usize {
        self.value.len()
    }

    fn increment(&mut self) {
        match self.value.len() {
            16 => {
                let n = BigEndian::read_u128(&self.value).wrapping_add(1);
                BigEndian::write_u128(&mut self.value, n);
            }
            8 => {
                let n = BigEndian::read_u64(&self.value).wrapping_add(1);
                BigEndian::write_u64(&mut self.value, n);
            }
            _ => {
                for byte in self.value.iter_mut().rev() {
                    *byte = byte.wrapping_add(1);
                    if *byte != 0 {
                        break;
                    }
                }
            }
        }
    }
}

/// Streaming CTR mode instance
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Ctr<B: BlockCipher> {
    cipher: B,
    counter: Counter,
    keystream: Zeroizing<Vec<u8>>,
    keystream_pos: usize,
}

impl<B: BlockCipher> Ctr<B> {
    /// Creates a new CTR mode instance with the given cipher and initial
    /// counter block
    ///
    /// The counter must be exactly one block long.
    pub fn new(cipher: B, initial_counter: &[u8]) -> Result<Self> {
        let block_size = B::block_size();
        validate::counter_length(initial_counter.len(), block_size)?;

        Ok(Self {
            cipher,
            counter: Counter::new(initial_counter),
            keystream: Zeroizing::new(vec![0u8; block_size]),
            // forces keystream generation on first use
            keystream_pos: block_size,
        })
    }

    fn transform(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let block_size = B::block_size();
        let mut output = Vec::with_capacity(data.len());

        for &byte in data {
            if self.keystream_pos == block_size {
                self.counter.next(&mut self.keystream);
                self.cipher.encrypt_block(&mut self.keystream)?;
                self.keystream_pos = 0;
            }
            output.push(byte ^ self.keystream[self.keystream_pos]);
            self.keystream_pos += 1;
        }

        Ok(output)
    }

    /// Encrypts data of any length, emitting output immediately
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.transform(plaintext)
    }

    /// Decrypts data of any length; identical to encryption in CTR
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.transform(ciphertext)
    }
}
