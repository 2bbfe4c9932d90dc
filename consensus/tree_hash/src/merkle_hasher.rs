use crate::{get_zero_hash, Hash256, HASHSIZE};
use ethereum_hashing::hash32_concat;
use smallvec::SmallVec;

type Chunk = [u8; HASHSIZE];

#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// More leaves were written than the tree was created for.
    MaximumLeavesExceeded { max_leaves: usize },
}

/// Computes a Merkle root from a stream of bytes without holding the leaves in memory.
///
/// Bytes may be written in slices of any length; they are cut into 32-byte leaves as they
/// arrive. Leaves that are never written are treated as `[0; 32]` and entire missing subtrees
/// are read from the zero hash cache, so finishing a sparse tree costs one hash per level.
///
/// The hasher keeps at most one completed left subtree per level, the same way a binary counter
/// keeps at most one set bit per position. Writing a leaf carries up through every level that
/// already holds a left subtree, hashing as it goes.
pub struct MerkleHasher {
    /// `pending[h]` is the root of a complete subtree of height `h` that is waiting for its right
    /// sibling.
    pending: SmallVec<[Option<Chunk>; 16]>,
    /// The tree has `2^height` leaves.
    height: usize,
    leaves_written: usize,
    /// Bytes of a partially written leaf.
    buffer: SmallVec<[u8; HASHSIZE]>,
    /// Set once every leaf of the tree has been written.
    root: Option<Chunk>,
}

impl MerkleHasher {
    /// Creates a hasher for a tree able to hold `num_leaves` leaves, rounded up to a power of two.
    ///
    /// `with_leaves(0)` and `with_leaves(1)` both give a single-leaf tree, whose root is the leaf
    /// itself, or `[0; 32]` if nothing is written.
    pub fn with_leaves(num_leaves: usize) -> Self {
        Self::with_height(num_leaves.next_power_of_two().trailing_zeros() as usize)
    }

    /// Creates a hasher for a tree of `depth` layers, counting the root and the leaves, which
    /// holds `2^(depth - 1)` leaves. A `depth` of zero is treated as one.
    pub fn with_depth(depth: usize) -> Self {
        Self::with_height(depth.saturating_sub(1))
    }

    fn with_height(height: usize) -> Self {
        Self {
            pending: SmallVec::from_elem(None, height),
            height,
            leaves_written: 0,
            buffer: SmallVec::new(),
            root: None,
        }
    }

    /// The number of leaves the tree was created with.
    pub fn max_leaves(&self) -> usize {
        1 << self.height
    }

    /// Appends `bytes` to the leaves of the tree.
    ///
    /// ## Errors
    ///
    /// Returns an error if `bytes` completes a leaf beyond `max_leaves()`.
    pub fn write(&mut self, mut bytes: &[u8]) -> Result<(), Error> {
        if !self.buffer.is_empty() {
            let take = std::cmp::min(HASHSIZE - self.buffer.len(), bytes.len());
            self.buffer.extend_from_slice(&bytes[..take]);
            bytes = &bytes[take..];

            if self.buffer.len() < HASHSIZE {
                return Ok(());
            }

            let mut leaf = [0; HASHSIZE];
            leaf.copy_from_slice(&self.buffer);
            self.buffer.clear();
            self.push_leaf(leaf)?;
        }

        let mut chunks = bytes.chunks_exact(HASHSIZE);
        for chunk in &mut chunks {
            let mut leaf = [0; HASHSIZE];
            leaf.copy_from_slice(chunk);
            self.push_leaf(leaf)?;
        }
        self.buffer.extend_from_slice(chunks.remainder());

        Ok(())
    }

    fn push_leaf(&mut self, leaf: Chunk) -> Result<(), Error> {
        if self.leaves_written >= self.max_leaves() {
            return Err(Error::MaximumLeavesExceeded {
                max_leaves: self.max_leaves(),
            });
        }
        self.leaves_written += 1;

        let mut node = leaf;
        let mut level = 0;
        while let Some(left) = self.pending.get_mut(level).and_then(Option::take) {
            node = hash32_concat(&left, &node);
            level += 1;
        }

        if level == self.height {
            self.root = Some(node);
        } else {
            self.pending[level] = Some(node);
        }

        Ok(())
    }

    /// Returns the root of the tree, padding any leaves not yet written with zeros.
    ///
    /// ## Errors
    ///
    /// Returns an error if the partially written leaf held in the buffer does not fit in the tree.
    pub fn finish(mut self) -> Result<Hash256, Error> {
        if !self.buffer.is_empty() {
            let mut leaf = [0; HASHSIZE];
            leaf[..self.buffer.len()].copy_from_slice(&self.buffer);
            self.push_leaf(leaf)?;
        }

        if let Some(root) = self.root {
            return Ok(Hash256::from(root));
        }

        // `right` is the root of the rightmost, partially written subtree at `level`.
        let mut right: Option<Chunk> = None;
        for (level, left) in self.pending.into_iter().enumerate() {
            right = match (left, right) {
                (Some(left), Some(right)) => Some(hash32_concat(&left, &right)),
                (Some(left), None) => Some(hash32_concat(&left, get_zero_hash(level))),
                (None, Some(right)) => Some(hash32_concat(&right, get_zero_hash(level))),
                (None, None) => None,
            };
        }

        Ok(match right {
            Some(root) => Hash256::from(root),
            None => Hash256::from_slice(get_zero_hash(self.height)),
        })
    }
}
