use super::{get_zero_hash, Hash256, BYTES_PER_CHUNK};
use ethereum_hashing::hash32_concat;

/// Merkleizes `bytes` one layer at a time and returns the root.
///
/// The tree has `max(leaves(bytes), min_leaves)` leaves, rounded up to the next power of two.
/// Missing leaves are zero and whole missing subtrees are replaced by their cached zero hash, so
/// the scratch space is never larger than the layer of leaves that have values.
///
/// This is a straightforward implementation kept as a reference for `MerkleHasher` and the
/// parallel Merkleizer.
pub fn merkleize_padded(bytes: &[u8], min_leaves: usize) -> Hash256 {
    // The number of leaves that can be made directly from `bytes`.
    let leaves_with_values = bytes.len().div_ceil(BYTES_PER_CHUNK);

    // The number of leaves in the full tree (including padding nodes).
    let num_leaves = std::cmp::max(
        leaves_with_values.next_power_of_two(),
        min_leaves.next_power_of_two(),
    );

    // The height of the full tree.
    let height = num_leaves.trailing_zeros() as usize;

    let mut layer: Vec<[u8; BYTES_PER_CHUNK]> = bytes
        .chunks(BYTES_PER_CHUNK)
        .map(|chunk| {
            let mut leaf = [0; BYTES_PER_CHUNK];
            leaf[..chunk.len()].copy_from_slice(chunk);
            leaf
        })
        .collect();

    for h in 0..height {
        if layer.len() % 2 == 1 {
            let mut padding = [0; BYTES_PER_CHUNK];
            padding.copy_from_slice(get_zero_hash(h));
            layer.push(padding);
        }

        layer = layer
            .chunks(2)
            .map(|pair| hash32_concat(&pair[0], &pair[1]))
            .collect();
    }

    match layer.first() {
        Some(root) => Hash256::from(*root),
        None => Hash256::from_slice(get_zero_hash(height)),
    }
}
