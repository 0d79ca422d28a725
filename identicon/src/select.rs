//! Derive the block choices and base rotation from an MD5 digest.

use md5::{Digest, Md5};

use crate::block::Block;
use crate::geometry::Rotation;

/// Length of the digest the selection is read from.
pub const DIGEST_LEN: usize = 16;

/// Everything the compositor needs to draw one identicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Drawn in the four corner cells.
    pub corner: Block,
    /// Drawn in the four edge cells.
    pub edge: Block,
    /// Drawn once in the middle, never rotated.
    pub center: Block,
    /// Rotation of the first quadrant.
    pub rotation: Rotation,
}

impl Selection {
    /// Hash `data` and derive a selection from the digest.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::from_digest(&digest(data))
    }

    /// Derive a selection from a 16-byte digest.
    ///
    /// Each 4-byte group is summed as unsigned integers (0..=1020). The
    /// first two sums pick corner and edge blocks from the full library,
    /// the third picks the center block, the last picks the base rotation.
    pub fn from_digest(digest: &[u8; DIGEST_LEN]) -> Self {
        let group_sum = |group: usize| -> usize {
            digest[group * 4..group * 4 + 4]
                .iter()
                .map(|&b| b as usize)
                .sum()
        };

        let corner = Block::wrapping(group_sum(0));
        let edge = Block::wrapping(group_sum(1));
        let center = Block::CENTER[group_sum(2) % Block::CENTER.len()];
        let rotation = Rotation::new((group_sum(3) % 4) as u8);

        let selection = Selection {
            corner,
            edge,
            center,
            rotation,
        };
        log::debug!(
            "digest {} -> corner {} edge {} center {} rotation {}",
            hex::encode(digest),
            selection.corner.index(),
            selection.edge.index(),
            selection.center.index(),
            selection.rotation.quarter_turns(),
        );
        selection
    }
}

/// MD5 of `data`.
pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Md5::digest(data));
    out
}
