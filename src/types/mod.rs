//! Secret byte containers with guaranteed zeroization
//!
//! Key material and key schedules live in these wrappers so that dropping a
//! cipher or mode instance scrubs the sensitive bytes, and so that equality
//! on key-sized values is constant-time.

mod secret;

pub use secret::{SecretBuffer, SecretBytes};

#[cfg(test)]
mod tests;
