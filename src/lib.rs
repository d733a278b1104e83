//! Streaming block cipher modes of operation
//!
//! This crate turns a single-block keyed permutation into a general-purpose
//! streaming symmetric cipher. It implements the ECB, CBC, CFB, OFB, CTR and
//! XTS chaining modes over any primitive satisfying the [`BlockCipher`]
//! contract, and ships constant-time AES (128/192/256) and DES primitives.
//!
//! All mode state is owned by the mode instance: chaining registers, counter
//! progression, tweak derivation and partial-block carry buffers survive
//! across calls, so a message may be fed in arbitrary pieces and the output
//! is byte-identical to a single call with the whole message.
//!
//! # Security Features
//!
//! - Secure memory handling with automatic zeroization of key schedules,
//!   chaining registers, keystreams and carry buffers
//! - Constant-time comparison operations for secret byte containers
//! - Table-free, branchless AES with memory barriers around S-box passes
//!
//! # Example
//!
//! ```
//! use blockmodes::{Aes128, Mode, ModeEngine};
//!
//! let key = hex::decode("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
//! let iv = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
//!
//! let mut engine = ModeEngine::<Aes128>::new(&key, Mode::Cbc, Some(&iv), None).unwrap();
//! let ciphertext = engine.encrypt(b"sixteen byte blk").unwrap();
//!
//! let mut decipher = ModeEngine::<Aes128>::new(&key, Mode::Cbc, Some(&iv), None).unwrap();
//! assert_eq!(decipher.decrypt(&ciphertext).unwrap(), b"sixteen byte blk");
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Type system
pub mod types;
pub use types::{SecretBuffer, SecretBytes};

// Block cipher primitives
pub mod cipher;
pub use cipher::{Aes128, Aes192, Aes256, BlockCipher, CipherAlgorithm, Des};

// Chaining modes
pub mod modes;
pub use modes::{Cbc, Cfb, Counter, Ctr, Ecb, Ofb, TweakSequence, Xts};

// Mode-dispatching engine
pub mod engine;
pub use engine::{Mode, ModeEngine};
