#[macro_use]
extern crate lazy_static;

pub mod impls;
mod merkle_hasher;
mod merkleize_padded;
mod parallel;

pub use merkle_hasher::{Error, MerkleHasher};
pub use merkleize_padded::merkleize_padded;
pub use parallel::{merkle_root_parallel, PARALLEL_MIN_LEAVES};

use ethereum_hashing::{hash32_concat, hash_fixed};
use smallvec::SmallVec;

pub const BYTES_PER_CHUNK: usize = 32;
pub const HASHSIZE: usize = 32;
pub const MERKLE_HASH_CHUNK: usize = 2 * BYTES_PER_CHUNK;
/// The deepest tree for which a padding node is cached. Enough for `2^48` leaves.
pub const MAX_TREE_DEPTH: usize = 48;

pub type Hash256 = alloy_primitives::B256;
pub type PackedEncoding = SmallVec<[u8; BYTES_PER_CHUNK]>;

lazy_static! {
    /// Cached zero hashes where `ZERO_HASHES[i]` is the root of a Merkle tree with `2^i` zero
    /// leaves.
    pub static ref ZERO_HASHES: Vec<[u8; HASHSIZE]> = {
        let mut hashes = vec![[0; HASHSIZE]; MAX_TREE_DEPTH + 1];

        for i in 0..MAX_TREE_DEPTH {
            hashes[i + 1] = hash32_concat(&hashes[i], &hashes[i]);
        }

        hashes
    };
}

/// Convenience method for `MerkleHasher` which also provides some fast-paths for small trees.
///
/// `minimum_leaf_count` will only be used if it is greater than or equal to the minimum number of
/// leaves that can be created from `bytes`.
pub fn merkle_root(bytes: &[u8], minimum_leaf_count: usize) -> Hash256 {
    let leaves = std::cmp::max(bytes.len().div_ceil(HASHSIZE), minimum_leaf_count);

    if leaves == 0 {
        // If there are no bytes then the hash is always zero.
        Hash256::ZERO
    } else if leaves == 1 {
        // If there is only one leaf, the hash is always those leaf bytes padded out to 32-bytes.
        let mut hash = [0; HASHSIZE];
        hash[0..bytes.len()].copy_from_slice(bytes);
        Hash256::from(hash)
    } else if leaves == 2 {
        // If there are only two leaves (this is common with BLS pubkeys), we can avoid some
        // overhead with `MerkleHasher` and just do a simple 3-node tree here.
        let mut leaves = [0; HASHSIZE * 2];
        leaves[0..bytes.len()].copy_from_slice(bytes);

        Hash256::from(hash_fixed(&leaves))
    } else {
        // If there are 3 or more leaves, use `MerkleHasher`.
        let mut hasher = MerkleHasher::with_leaves(leaves);
        hasher
            .write(bytes)
            .expect("the number of leaves is adequate for the number of bytes");
        hasher
            .finish()
            .expect("the number of leaves is adequate for the number of bytes")
    }
}

/// Returns the node created by hashing `root` and `length`.
///
/// Used in `TreeHash` for inserting the length of a list above it's root.
pub fn mix_in_length(root: &Hash256, length: usize) -> Hash256 {
    let usize_len = std::mem::size_of::<usize>();

    let mut length_bytes = [0; BYTES_PER_CHUNK];
    length_bytes[0..usize_len].copy_from_slice(&length.to_le_bytes());

    Hash256::from(hash32_concat(root.as_slice(), &length_bytes))
}

/// Returns a cached padding node for a given height.
///
/// ## Panics
///
/// Panics if `height > MAX_TREE_DEPTH`. No consensus type comes close to that depth.
pub fn get_zero_hash(height: usize) -> &'static [u8] {
    if height <= MAX_TREE_DEPTH {
        &ZERO_HASHES[height]
    } else {
        panic!("Tree exceeds MAX_TREE_DEPTH of {}", MAX_TREE_DEPTH)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum TreeHashType {
    Basic,
    Vector,
    List,
    Container,
}

pub trait TreeHash {
    fn tree_hash_type() -> TreeHashType;

    fn tree_hash_packed_encoding(&self) -> PackedEncoding;

    fn tree_hash_packing_factor() -> usize;

    fn tree_hash_root(&self) -> Hash256;
}

/// Punch through references.
impl<T> TreeHash for &T
where
    T: TreeHash,
{
    fn tree_hash_type() -> TreeHashType {
        T::tree_hash_type()
    }

    fn tree_hash_packed_encoding(&self) -> PackedEncoding {
        T::tree_hash_packed_encoding(*self)
    }

    fn tree_hash_packing_factor() -> usize {
        T::tree_hash_packing_factor()
    }

    fn tree_hash_root(&self) -> Hash256 {
        T::tree_hash_root(*self)
    }
}
