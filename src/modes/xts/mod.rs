//! XEX-based tweaked-codebook mode with ciphertext stealing (XTS)
//!
//! IEEE 1619 construction over a 16-byte block primitive. Two independently
//! keyed instances of the primitive are used: one transforms the data, the
//! other encrypts the little-endian sector (data unit) index into the
//! initial tweak. Successive blocks multiply the tweak by α in GF(2^128).
//!
//! The mode is streaming with a deferred tail: the last full block plus any
//! partial remainder stay in the carry buffer until [`Xts::finish`], which
//! either processes the held block normally (block-aligned total) or
//! performs ciphertext stealing over the held block and fragment. Output
//! length always equals input length; totals under one block are rejected
//! at the flush.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use byteorder::{ByteOrder, LittleEndian};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::{xor_in_place, BlockBuffer};
use crate::cipher::BlockCipher;
use crate::error::{validate, Result};
use crate::types::SecretBytes;

/// XTS block width; the construction is defined over GF(2^128) only
const TWEAK_SIZE: usize = 16;

/// Per-sector tweak progression
///
/// Seeded by encrypting the little-endian sector index under the tweak
/// cipher; each [`advance`](TweakSequence::advance) yields the current
/// tweak and multiplies the stored value by α (left shift with 0x87
/// feedback on carry out of the top bit).
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct TweakSequence {
    value: SecretBytes<TWEAK_SIZE>,
}

impl TweakSequence {
    /// Derives the tweak for `sector` under the given tweak cipher
    pub fn new<B: BlockCipher>(tweak_cipher: &B, sector: u64) -> Result<Self> {
        let mut value = SecretBytes::zeroed();
        LittleEndian::write_u64(&mut value[..8], sector);
        tweak_cipher.encrypt_block(value.as_mut())?;
        Ok(Self { value })
    }

    /// Returns the current tweak and steps to the next block's tweak
    pub fn advance(&mut self) -> SecretBytes<TWEAK_SIZE> {
        let current = self.value.clone();

        let mut carry = 0u8;
        for byte in self.value.iter_mut() {
            let next_carry = *byte >> 7;
            *byte = (*byte << 1) | carry;
            carry = next_carry;
        }
        if carry == 1 {
            self.value[0] ^= 0x87;
        }

        current
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Streaming XTS mode instance, bound to a single sector
///
/// The tweak progression is seeded once from the sector index given at
/// construction and advances with cumulative block position across calls.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Xts<B: BlockCipher> {
    cipher: B,
    tweak: TweakSequence,
    carry: BlockBuffer,
    #[zeroize(skip)]
    direction: Option<Direction>,
}

impl<B: BlockCipher> Xts<B> {
    /// Creates a new XTS mode instance for the given sector
    ///
    /// `data_cipher` and `tweak_cipher` must be independently keyed; the
    /// primitive must have a 16-byte block.
    pub fn new(data_cipher: B, tweak_cipher: &B, sector: u64) -> Result<Self> {
        validate::block_length(B::name(), B::block_size(), TWEAK_SIZE)?;

        Ok(Self {
            cipher: data_cipher,
            tweak: TweakSequence::new(tweak_cipher, sector)?,
            carry: BlockBuffer::new(),
            direction: None,
        })
    }

    fn tweaked_block(&self, block: &mut [u8], tweak: &[u8], decrypt: bool) -> Result<()> {
        xor_in_place(block, tweak);
        if decrypt {
            self.cipher.decrypt_block(block)?;
        } else {
            self.cipher.encrypt_block(block)?;
        }
        xor_in_place(block, tweak);
        Ok(())
    }

    fn process(&mut self, data: &[u8], direction: Direction) -> Result<Vec<u8>> {
        self.direction = Some(direction);
        self.carry.fill(data);

        // always hold the last full block plus the partial remainder, so
        // the flush can steal ciphertext if the total is not block-aligned
        let hold_back = TWEAK_SIZE + self.carry.len() % TWEAK_SIZE;
        let mut output = self.carry.drain_blocks(TWEAK_SIZE, hold_back);

        let decrypt = direction == Direction::Decrypt;
        for block in output.chunks_mut(TWEAK_SIZE) {
            let tweak = self.tweak.advance();
            self.tweaked_block(block, tweak.as_ref(), decrypt)?;
        }
        Ok(output.to_vec())
    }

    /// Encrypts bytes, withholding the tail needed for the final flush
    pub fn encrypt(&mut self, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.process(plaintext, Direction::Encrypt)
    }

    /// Decrypts bytes, withholding the tail needed for the final flush
    pub fn decrypt(&mut self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.process(ciphertext, Direction::Decrypt)
    }

    /// Flushes the withheld tail, completing the message
    ///
    /// Processes the held block normally when the cumulative length is a
    /// multiple of the block size, otherwise performs ciphertext stealing
    /// over the held block and fragment. Fails with `InsufficientData` if
    /// fewer than 16 bytes were supplied in total.
    pub fn finish(&mut self) -> Result<Vec<u8>> {
        validate::min_data("XTS", self.carry.len(), TWEAK_SIZE)?;

        let held = Zeroizing::new(self.carry.as_slice().to_vec());
        self.carry.clear();
        let fragment = held.len() - TWEAK_SIZE;
        let decrypt = matches!(self.direction, Some(Direction::Decrypt));

        let mut output = Zeroizing::new(held.to_vec());
        if fragment == 0 {
            let tweak = self.tweak.advance();
            self.tweaked_block(&mut output, tweak.as_ref(), decrypt)?;
            return Ok(output.to_vec());
        }

        if decrypt {
            self.steal_decrypt(&held, fragment, &mut output)?;
        } else {
            self.steal_encrypt(&held, fragment, &mut output)?;
        }
        Ok(output.to_vec())
    }

    // C_{m-1} = E(P_m || CC[r..], T_{j+1}), C_m = CC[..r]
    // where CC = E(P_{m-1}, T_j) and r is the fragment length
    fn steal_encrypt(&mut self, held: &[u8], fragment: usize, output: &mut [u8]) -> Result<()> {
        let first_tweak = self.tweak.advance();
        let second_tweak = self.tweak.advance();

        let mut stolen = Zeroizing::new([0u8; TWEAK_SIZE]);
        stolen.copy_from_slice(&held[..TWEAK_SIZE]);
        self.tweaked_block(stolen.as_mut(), first_tweak.as_ref(), false)?;

        output[TWEAK_SIZE..].copy_from_slice(&stolen[..fragment]);

        let mut last = Zeroizing::new([0u8; TWEAK_SIZE]);
        last[..fragment].copy_from_slice(&held[TWEAK_SIZE..]);
        last[fragment..].copy_from_slice(&stolen[fragment..]);
        self.tweaked_block(last.as_mut(), second_tweak.as_ref(), false)?;

        output[..TWEAK_SIZE].copy_from_slice(last.as_ref());
        Ok(())
    }

    // P_{m-1} = D(C_m || PP[r..], T_j), P_m = PP[..r]
    // where PP = D(C_{m-1}, T_{j+1}); the tweak order is swapped relative
    // to encryption because C_{m-1} was produced under the later tweak
    fn steal_decrypt(&mut self, held: &[u8], fragment: usize, output: &mut [u8]) -> Result<()> {
        let first_tweak = self.tweak.advance();
        let second_tweak = self.tweak.advance();

        let mut stolen = Zeroizing::new([0u8; TWEAK_SIZE]);
        stolen.copy_from_slice(&held[..TWEAK_SIZE]);
        self.tweaked_block(stolen.as_mut(), second_tweak.as_ref(), true)?;

        output[TWEAK_SIZE..].copy_from_slice(&stolen[..fragment]);

        let mut last = Zeroizing::new([0u8; TWEAK_SIZE]);
        last[..fragment].copy_from_slice(&held[TWEAK_SIZE..]);
        last[fragment..].copy_from_slice(&stolen[fragment..]);
        self.tweaked_block(last.as_mut(), first_tweak.as_ref(), true)?;

        output[..TWEAK_SIZE].copy_from_slice(last.as_ref());
        Ok(())
    }

    /// Bytes withheld for the final flush
    pub fn pending(&self) -> usize {
        self.carry.len()
    }
}
