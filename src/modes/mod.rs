//! Chaining modes of operation over [`BlockCipher`](crate::cipher::BlockCipher) primitives
//!
//! Every mode here is streaming: an instance owns all chaining state plus a
//! carry buffer for bytes that do not yet form a complete block, so output
//! depends only on the cumulative input and never on how the caller chunks
//! its calls.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

pub mod cbc;
pub mod cfb;
pub mod ctr;
pub mod ecb;
pub mod ofb;
pub mod xts;

// Re-exports
pub use cbc::Cbc;
pub use cfb::Cfb;
pub use ctr::{Counter, Ctr};
pub use ecb::Ecb;
pub use ofb::Ofb;
pub use xts::{TweakSequence, Xts};

/// Carry buffer for not-yet-processed input bytes
///
/// One instance per mode instance; holds the undigested remainder between
/// calls. The drain step is the single place where input is cut into
/// complete blocks, shared by every block-aligned mode.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct BlockBuffer {
    data: Zeroizing<Vec<u8>>,
}

impl BlockBuffer {
    pub(crate) fn new() -> Self {
        Self {
            data: Zeroizing::new(Vec::new()),
        }
    }

    /// Append incoming bytes to the carry buffer
    pub(crate) fn fill(&mut self, input: &[u8]) {
        self.data.extend_from_slice(input);
    }

    /// Remove and return the largest prefix that is a whole number of
    /// blocks, keeping at least `hold_back` trailing bytes buffered
    pub(crate) fn drain_blocks(&mut self, block_size: usize, hold_back: usize) -> Zeroizing<Vec<u8>> {
        let available = self.data.len().saturating_sub(hold_back);
        let take = available - available % block_size;
        let drained = Zeroizing::new(self.data[..take].to_vec());
        let kept = self.data.len() - take;
        self.data.copy_within(take.., 0);
        self.data.truncate(kept);
        drained
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len()
    }

    pub(crate) fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn clear(&mut self) {
        self.data.zeroize();
        self.data.clear();
    }
}

/// XOR `src` into `dst` byte by byte
#[inline(always)]
pub(crate) fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}
