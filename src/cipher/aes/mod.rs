//! AES block cipher implementations
//!
//! Implements the Advanced Encryption Standard (FIPS 197) for 128, 192 and
//! 256 bit keys.
//!
//! ## Constant-Time Guarantees
//!
//! This implementation mitigates timing side-channel attacks by:
//! - Using branchless arithmetic for GF(2^8) operations
//! - Using bitsliced S-box computation instead of table lookups
//! - Ensuring consistent memory access patterns
//!
//! On platforms with AES hardware acceleration, prefer hardware instructions
//! for better side-channel resistance.

#[cfg(not(feature = "std"))]
use portable_atomic::{compiler_fence, Ordering};
#[cfg(feature = "std")]
use std::sync::atomic::{compiler_fence, Ordering};

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::types::SecretBuffer;

/// AES block size in bytes, common to all key sizes
pub const AES_BLOCK_SIZE: usize = 16;

/// Round constants for key expansion
const RCON: [u32; 11] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000, 0x40000000,
    0x80000000, 0x1b000000, 0x36000000,
];

/// Multiply two bytes in GF(2^8) with AES's reduction poly x^8 + x^4 + x^3 + x + 1
#[inline(always)]
fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        a ^= ((hi != 0) as u8) * 0x1B;
        b >>= 1;
    }
    p
}

/// Raise to the 254th power (b^-1 in GF(2^8)) in constant time
#[inline(always)]
fn gf_inv(x: u8) -> u8 {
    // always run the full exponentiation, even for x==0
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    y = gf_mul(y, x2);

    // mask to zero if original x was zero
    let mask = ((x != 0) as u8).wrapping_neg();
    y & mask
}

/// AES forward S-box: inv(x) XOR ROTL(inv(x),1..4) XOR 0x63
#[inline(always)]
fn sbox(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

/// AES inverse S-box: undo the affine map, then invert
#[inline(always)]
fn inv_sbox(x: u8) -> u8 {
    let y = x ^ 0x63;
    // the inverse affine map is convolution by t^1 + t^3 + t^6 mod (t^8+1)
    let u = y.rotate_left(1) ^ y.rotate_left(3) ^ y.rotate_left(6);
    gf_inv(u)
}

#[inline(always)]
fn bytes_to_u32(bytes: &[u8]) -> u32 {
    ((bytes[0] as u32) << 24) | ((bytes[1] as u32) << 16) | ((bytes[2] as u32) << 8) | (bytes[3] as u32)
}

#[inline(always)]
fn u32_to_bytes(word: u32) -> [u8; 4] {
    [(word >> 24) as u8, (word >> 16) as u8, (word >> 8) as u8, word as u8]
}

/// Substitutes each byte in a word using the S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let bytes = u32_to_bytes(word);
    let sub = [sbox(bytes[0]), sbox(bytes[1]), sbox(bytes[2]), sbox(bytes[3])];
    bytes_to_u32(&sub)
}

/// Generic FIPS 197 key expansion: `nk` key words expanded to fill `schedule`
fn expand_key(key: &[u8], nk: usize, schedule: &mut [u8]) {
    let total = schedule.len() / 4;
    // 60 words is the AES-256 schedule, the largest of the three
    let mut words = [0u32; 60];

    for (i, word) in words.iter_mut().take(nk).enumerate() {
        *word = bytes_to_u32(&key[i * 4..(i + 1) * 4]);
    }

    for i in nk..total {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(temp.rotate_left(8)) ^ RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        words[i] = words[i - nk] ^ temp;
    }

    for (i, word) in words.iter().take(total).enumerate() {
        schedule[i * 4..(i + 1) * 4].copy_from_slice(&u32_to_bytes(*word));
    }
    words.zeroize();
}

/// SubBytes step, bitsliced
fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
    // ensure no reordering around our bit-ops
    compiler_fence(Ordering::SeqCst);
}

/// Inverse SubBytes, bitsliced
fn inv_sub_bytes(state: &mut [u8; 16]) {
    for byte in state.iter_mut() {
        *byte = inv_sbox(*byte);
    }
    compiler_fence(Ordering::SeqCst);
}

/// ShiftRows step
fn shift_rows(state: &mut [u8; 16]) {
    let temp = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[col * 4 + row] = temp[((col + row) % 4) * 4 + row];
        }
    }
}

/// Inverse ShiftRows
fn inv_shift_rows(state: &mut [u8; 16]) {
    let temp = *state;
    for row in 1..4 {
        for col in 0..4 {
            state[((col + row) % 4) * 4 + row] = temp[col * 4 + row];
        }
    }
}

/// Multiply by 2 in GF(2^8)
#[inline(always)]
fn mul2(byte: u8) -> u8 {
    let high = byte >> 7;
    (byte << 1) ^ (high * 0x1B)
}

#[inline(always)]
fn mul9(byte: u8) -> u8 {
    mul2(mul2(mul2(byte))) ^ byte
}

#[inline(always)]
fn mul11(byte: u8) -> u8 {
    mul2(mul2(mul2(byte))) ^ mul2(byte) ^ byte
}

#[inline(always)]
fn mul13(byte: u8) -> u8 {
    mul2(mul2(mul2(byte))) ^ mul2(mul2(byte)) ^ byte
}

#[inline(always)]
fn mul14(byte: u8) -> u8 {
    mul2(mul2(mul2(byte))) ^ mul2(mul2(byte)) ^ mul2(byte)
}

/// MixColumns step
fn mix_columns(state: &mut [u8; 16]) {
    for c in 0..4 {
        let i = c * 4;
        let s0 = state[i];
        let s1 = state[i + 1];
        let s2 = state[i + 2];
        let s3 = state[i + 3];
        state[i] = mul2(s0) ^ mul2(s1) ^ s1 ^ s2 ^ s3;
        state[i + 1] = s0 ^ mul2(s1) ^ mul2(s2) ^ s2 ^ s3;
        state[i + 2] = s0 ^ s1 ^ mul2(s2) ^ mul2(s3) ^ s3;
        state[i + 3] = mul2(s0) ^ s0 ^ s1 ^ s2 ^ mul2(s3);
    }
}

/// Inverse MixColumns
fn inv_mix_columns(state: &mut [u8; 16]) {
    for c in 0..4 {
        let i = c * 4;
        let s0 = state[i];
        let s1 = state[i + 1];
        let s2 = state[i + 2];
        let s3 = state[i + 3];
        state[i] = mul14(s0) ^ mul11(s1) ^ mul13(s2) ^ mul9(s3);
        state[i + 1] = mul9(s0) ^ mul14(s1) ^ mul11(s2) ^ mul13(s3);
        state[i + 2] = mul13(s0) ^ mul9(s1) ^ mul14(s2) ^ mul11(s3);
        state[i + 3] = mul11(s0) ^ mul13(s1) ^ mul9(s2) ^ mul14(s3);
    }
}

/// AddRoundKey step
#[inline(always)]
fn add_round_key(state: &mut [u8; 16], round_key: &[u8]) {
    for i in 0..16 {
        state[i] ^= round_key[i];
    }
}

/// Shared encryption pass over `rounds` main rounds
fn encrypt_rounds(block: &mut [u8], round_keys: &[u8], rounds: usize) -> Result<()> {
    validate::block_length("AES", block.len(), AES_BLOCK_SIZE)?;

    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    add_round_key(&mut state, &round_keys[0..16]);

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        let offset = round * 16;
        add_round_key(&mut state, &round_keys[offset..offset + 16]);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[rounds * 16..rounds * 16 + 16]);

    block.copy_from_slice(&state);
    state.zeroize();
    Ok(())
}

/// Shared decryption pass, rounds applied in reverse
fn decrypt_rounds(block: &mut [u8], round_keys: &[u8], rounds: usize) -> Result<()> {
    validate::block_length("AES", block.len(), AES_BLOCK_SIZE)?;

    let mut state = [0u8; 16];
    state.copy_from_slice(block);

    add_round_key(&mut state, &round_keys[rounds * 16..rounds * 16 + 16]);

    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        let offset = round * 16;
        add_round_key(&mut state, &round_keys[offset..offset + 16]);
        inv_mix_columns(&mut state);
    }

    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, &round_keys[0..16]);

    block.copy_from_slice(&state);
    state.zeroize();
    Ok(())
}

macro_rules! aes_variant {
    ($name:ident, $algo:ident, $display:literal, $key_size:literal, $nk:literal, $rounds:literal, $schedule:literal) => {
        /// Type-level constants for this AES variant
        pub enum $algo {}

        impl CipherAlgorithm for $algo {
            const KEY_SIZE: usize = $key_size;
            const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

            fn name() -> &'static str {
                $display
            }
        }

        #[doc = concat!($display, " block cipher")]
        #[derive(Clone, Zeroize, ZeroizeOnDrop)]
        pub struct $name {
            round_keys: SecretBuffer<$schedule>,
        }

        impl BlockCipher for $name {
            type Algorithm = $algo;

            fn new(key: &[u8]) -> Result<Self> {
                validate::key_length($display, key.len(), $key_size)?;
                let mut schedule = [0u8; $schedule];
                expand_key(key, $nk, &mut schedule);
                Ok(Self {
                    round_keys: SecretBuffer::new(schedule),
                })
            }

            fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
                encrypt_rounds(block, self.round_keys.as_ref(), $rounds)
            }

            fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
                decrypt_rounds(block, self.round_keys.as_ref(), $rounds)
            }
        }
    };
}

aes_variant!(Aes128, Aes128Algorithm, "AES-128", 16, 4, 10, 176);
aes_variant!(Aes192, Aes192Algorithm, "AES-192", 24, 6, 12, 208);
aes_variant!(Aes256, Aes256Algorithm, "AES-256", 32, 8, 14, 240);

#[cfg(test)]
mod tests;
