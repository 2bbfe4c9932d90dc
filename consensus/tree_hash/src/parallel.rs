use super::{get_zero_hash, merkle_root, Hash256, BYTES_PER_CHUNK};
use ethereum_hashing::hash32_concat;

/// Trees with fewer leaves holding values than this are always hashed on the current thread.
pub const PARALLEL_MIN_LEAVES: usize = 1024;

/// Subtrees of this depth or less are hashed sequentially by a single task.
const SEQUENTIAL_SUBTREE_DEPTH: usize = 8;

/// Returns the same root as `merkle_root(bytes, minimum_leaf_count)`, hashing the left and right
/// halves of large trees concurrently on the rayon thread pool.
///
/// Subtrees made entirely of padding are never hashed; their root is read from the zero hash
/// cache.
pub fn merkle_root_parallel(bytes: &[u8], minimum_leaf_count: usize) -> Hash256 {
    let leaves_with_values = bytes.len().div_ceil(BYTES_PER_CHUNK);

    if leaves_with_values < PARALLEL_MIN_LEAVES {
        return merkle_root(bytes, minimum_leaf_count);
    }

    let leaves = std::cmp::max(leaves_with_values, minimum_leaf_count);
    let depth = leaves.next_power_of_two().trailing_zeros() as usize;

    subtree_root(bytes, depth)
}

/// Computes the root of a subtree with `2^depth` leaves, of which `bytes` are the leftmost.
fn subtree_root(bytes: &[u8], depth: usize) -> Hash256 {
    if bytes.is_empty() {
        return Hash256::from_slice(get_zero_hash(depth));
    }

    if depth <= SEQUENTIAL_SUBTREE_DEPTH {
        return merkle_root(bytes, 1 << depth);
    }

    let half = (1 << (depth - 1)) * BYTES_PER_CHUNK;
    let (left, right) = bytes.split_at(std::cmp::min(half, bytes.len()));

    let (left_root, right_root) = rayon::join(
        || subtree_root(left, depth - 1),
        || subtree_root(right, depth - 1),
    );

    Hash256::from(hash32_concat(left_root.as_slice(), right_root.as_slice()))
}
