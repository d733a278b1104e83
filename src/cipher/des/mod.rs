//! DES block cipher implementation
//!
//! Implements the Data Encryption Standard (FIPS 46-3): a 16-round Feistel
//! network over 8-byte blocks with an 8-byte key whose parity bits are
//! ignored. DES is kept for compatibility with legacy data formats; it is
//! not a recommended cipher for new designs.

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};

/// DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// DES key size in bytes (including the 8 parity bits)
pub const DES_KEY_SIZE: usize = 8;

/// Initial permutation
const IP: [u8; 64] = [
    58, 50, 42, 34, 26, 18, 10, 2, 60, 52, 44, 36, 28, 20, 12, 4, 62, 54, 46, 38, 30, 22, 14, 6,
    64, 56, 48, 40, 32, 24, 16, 8, 57, 49, 41, 33, 25, 17, 9, 1, 59, 51, 43, 35, 27, 19, 11, 3,
    61, 53, 45, 37, 29, 21, 13, 5, 63, 55, 47, 39, 31, 23, 15, 7,
];

/// Final permutation (inverse of IP)
const FP: [u8; 64] = [
    40, 8, 48, 16, 56, 24, 64, 32, 39, 7, 47, 15, 55, 23, 63, 31, 38, 6, 46, 14, 54, 22, 62, 30,
    37, 5, 45, 13, 53, 21, 61, 29, 36, 4, 44, 12, 52, 20, 60, 28, 35, 3, 43, 11, 51, 19, 59, 27,
    34, 2, 42, 10, 50, 18, 58, 26, 33, 1, 41, 9, 49, 17, 57, 25,
];

/// Expansion of the 32-bit half block to 48 bits
const E: [u8; 48] = [
    32, 1, 2, 3, 4, 5, 4, 5, 6, 7, 8, 9, 8, 9, 10, 11, 12, 13, 12, 13, 14, 15, 16, 17, 16, 17,
    18, 19, 20, 21, 20, 21, 22, 23, 24, 25, 24, 25, 26, 27, 28, 29, 28, 29, 30, 31, 32, 1,
];

/// Permutation applied to the S-box output
const P: [u8; 32] = [
    16, 7, 20, 21, 29, 12, 28, 17, 1, 15, 23, 26, 5, 18, 31, 10, 2, 8, 24, 14, 32, 27, 3, 9, 19,
    13, 30, 6, 22, 11, 4, 25,
];

/// Permuted choice 1: 64-bit key to 56 bits, dropping parity
const PC1: [u8; 56] = [
    57, 49, 41, 33, 25, 17, 9, 1, 58, 50, 42, 34, 26, 18, 10, 2, 59, 51, 43, 35, 27, 19, 11, 3,
    60, 52, 44, 36, 63, 55, 47, 39, 31, 23, 15, 7, 62, 54, 46, 38, 30, 22, 14, 6, 61, 53, 45, 37,
    29, 21, 13, 5, 28, 20, 12, 4,
];

/// Permuted choice 2: 56-bit state to the 48-bit round subkey
const PC2: [u8; 48] = [
    14, 17, 11, 24, 1, 5, 3, 28, 15, 6, 21, 10, 23, 19, 12, 4, 26, 8, 16, 7, 27, 20, 13, 2, 41,
    52, 31, 37, 47, 55, 30, 40, 51, 45, 33, 48, 44, 49, 39, 56, 34, 53, 46, 42, 50, 36, 29, 32,
];

/// Per-round left-rotation amounts for the key halves
const SHIFTS: [u32; 16] = [1, 1, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 1];

/// The eight S-boxes, each 4 rows x 16 columns
const SBOX: [[u8; 64]; 8] = [
    [
        14, 4, 13, 1, 2, 15, 11, 8, 3, 10, 6, 12, 5, 9, 0, 7, 0, 15, 7, 4, 14, 2, 13, 1, 10, 6,
        12, 11, 9, 5, 3, 8, 4, 1, 14, 8, 13, 6, 2, 11, 15, 12, 9, 7, 3, 10, 5, 0, 15, 12, 8, 2,
        4, 9, 1, 7, 5, 11, 3, 14, 10, 0, 6, 13,
    ],
    [
        15, 1, 8, 14, 6, 11, 3, 4, 9, 7, 2, 13, 12, 0, 5, 10, 3, 13, 4, 7, 15, 2, 8, 14, 12, 0,
        1, 10, 6, 9, 11, 5, 0, 14, 7, 11, 10, 4, 13, 1, 5, 8, 12, 6, 9, 3, 2, 15, 13, 8, 10, 1,
        3, 15, 4, 2, 11, 6, 7, 12, 0, 5, 14, 9,
    ],
    [
        10, 0, 9, 14, 6, 3, 15, 5, 1, 13, 12, 7, 11, 4, 2, 8, 13, 7, 0, 9, 3, 4, 6, 10, 2, 8, 5,
        14, 12, 11, 15, 1, 13, 6, 4, 9, 8, 15, 3, 0, 11, 1, 2, 12, 5, 10, 14, 7, 1, 10, 13, 0, 6,
        9, 8, 7, 4, 15, 14, 3, 11, 5, 2, 12,
    ],
    [
        7, 13, 14, 3, 0, 6, 9, 10, 1, 2, 8, 5, 11, 12, 4, 15, 13, 8, 11, 5, 6, 15, 0, 3, 4, 7, 2,
        12, 1, 10, 14, 9, 10, 6, 9, 0, 12, 11, 7, 13, 15, 1, 3, 14, 5, 2, 8, 4, 3, 15, 0, 6, 10,
        1, 13, 8, 9, 4, 5, 11, 12, 7, 2, 14,
    ],
    [
        2, 12, 4, 1, 7, 10, 11, 6, 8, 5, 3, 15, 13, 0, 14, 9, 14, 11, 2, 12, 4, 7, 13, 1, 5, 0,
        15, 10, 3, 9, 8, 6, 4, 2, 1, 11, 10, 13, 7, 8, 15, 9, 12, 5, 6, 3, 0, 14, 11, 8, 12, 7,
        1, 14, 2, 13, 6, 15, 0, 9, 10, 4, 5, 3,
    ],
    [
        12, 1, 10, 15, 9, 2, 6, 8, 0, 13, 3, 4, 14, 7, 5, 11, 10, 15, 4, 2, 7, 12, 9, 5, 6, 1,
        13, 14, 0, 11, 3, 8, 9, 14, 15, 5, 2, 8, 12, 3, 7, 0, 4, 10, 1, 13, 11, 6, 4, 3, 2, 12,
        9, 5, 15, 10, 11, 14, 1, 7, 6, 0, 8, 13,
    ],
    [
        4, 11, 2, 14, 15, 0, 8, 13, 3, 12, 9, 7, 5, 10, 6, 1, 13, 0, 11, 7, 4, 9, 1, 10, 14, 3,
        5, 12, 2, 15, 8, 6, 1, 4, 11, 13, 12, 3, 7, 14, 10, 15, 6, 8, 0, 5, 9, 2, 6, 11, 13, 8,
        1, 4, 10, 7, 9, 5, 0, 15, 14, 2, 3, 12,
    ],
    [
        13, 2, 8, 4, 6, 15, 11, 1, 10, 9, 3, 14, 5, 0, 12, 7, 1, 15, 13, 8, 10, 3, 7, 4, 12, 5,
        6, 11, 0, 14, 9, 2, 7, 11, 4, 1, 9, 12, 14, 2, 0, 6, 10, 13, 15, 3, 5, 8, 2, 1, 14, 7,
        4, 10, 8, 13, 15, 12, 9, 0, 3, 5, 6, 11,
    ],
];

/// Apply a 1-based bit permutation table to `src`, reading `src_bits` wide
#[inline(always)]
fn permute(src: u64, src_bits: u32, table: &[u8]) -> u64 {
    let mut out = 0u64;
    for &pos in table {
        out = (out << 1) | ((src >> (src_bits - pos as u32)) & 1);
    }
    out
}

/// Rotate a 28-bit key half left by `n`
#[inline(always)]
fn rotate28(half: u64, n: u32) -> u64 {
    ((half << n) | (half >> (28 - n))) & 0x0FFF_FFFF
}

/// The Feistel round function on a 32-bit half block
fn feistel(half: u32, subkey: u64) -> u32 {
    let expanded = permute(half as u64, 32, &E) ^ subkey;

    let mut out = 0u32;
    for (i, sbox) in SBOX.iter().enumerate() {
        let chunk = ((expanded >> (42 - 6 * i)) & 0x3F) as usize;
        // outer two bits select the row, inner four the column
        let row = ((chunk >> 4) & 0x2) | (chunk & 0x1);
        let col = (chunk >> 1) & 0xF;
        out = (out << 4) | sbox[row * 16 + col] as u32;
    }

    permute(out as u64, 32, &P) as u32
}

/// Type-level constants for DES
pub enum DesAlgorithm {}

impl CipherAlgorithm for DesAlgorithm {
    const KEY_SIZE: usize = DES_KEY_SIZE;
    const BLOCK_SIZE: usize = DES_BLOCK_SIZE;

    fn name() -> &'static str {
        "DES"
    }
}

/// DES block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Des {
    subkeys: [u64; 16],
}

impl Des {
    /// Derives the 16 round subkeys from the 64-bit key
    fn expand_key(key: &[u8]) -> [u64; 16] {
        let raw = BigEndian::read_u64(key);
        let permuted = permute(raw, 64, &PC1);
        let mut c = (permuted >> 28) & 0x0FFF_FFFF;
        let mut d = permuted & 0x0FFF_FFFF;

        let mut subkeys = [0u64; 16];
        for (round, subkey) in subkeys.iter_mut().enumerate() {
            c = rotate28(c, SHIFTS[round]);
            d = rotate28(d, SHIFTS[round]);
            *subkey = permute((c << 28) | d, 56, &PC2);
        }
        subkeys
    }

    /// Runs the 16-round Feistel network with the given subkey order
    fn transform(&self, block: &mut [u8], decrypt: bool) -> Result<()> {
        validate::block_length("DES", block.len(), DES_BLOCK_SIZE)?;

        let state = permute(BigEndian::read_u64(block), 64, &IP);
        let mut left = (state >> 32) as u32;
        let mut right = state as u32;

        for round in 0..16 {
            let subkey = if decrypt {
                self.subkeys[15 - round]
            } else {
                self.subkeys[round]
            };
            let next = left ^ feistel(right, subkey);
            left = right;
            right = next;
        }

        // the halves are swapped before the final permutation
        let preoutput = ((right as u64) << 32) | left as u64;
        BigEndian::write_u64(block, permute(preoutput, 64, &FP));
        Ok(())
    }
}

impl BlockCipher for Des {
    type Algorithm = DesAlgorithm;

    fn new(key: &[u8]) -> Result<Self> {
        validate::key_length("DES", key.len(), DES_KEY_SIZE)?;
        Ok(Self {
            subkeys: Self::expand_key(key),
        })
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        self.transform(block, false)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        self.transform(block, true)
    }
}

#[cfg(test)]
mod tests;
