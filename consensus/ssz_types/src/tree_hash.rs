use tree_hash::{merkle_root_parallel, Hash256, TreeHash, TreeHashType, HASHSIZE};
use typenum::Unsigned;

/// Returns the root of the items in `vec`, in a tree sized for `N` items.
///
/// Basic items are packed together into chunks, everything else contributes one chunk (its own
/// root) per item. The tree always has room for `N` items; for lists the caller mixes in the
/// length.
pub fn vec_tree_hash_root<T, N>(vec: &[T]) -> Hash256
where
    T: TreeHash,
    N: Unsigned,
{
    match T::tree_hash_type() {
        TreeHashType::Basic => {
            let packing_factor = T::tree_hash_packing_factor();
            let mut bytes = Vec::with_capacity(vec.len().div_ceil(packing_factor) * HASHSIZE);

            for item in vec {
                bytes.extend_from_slice(&item.tree_hash_packed_encoding());
            }

            merkle_root_parallel(&bytes, N::to_usize().div_ceil(packing_factor))
        }
        TreeHashType::Container | TreeHashType::List | TreeHashType::Vector => {
            let mut bytes = Vec::with_capacity(vec.len() * HASHSIZE);

            for item in vec {
                bytes.extend_from_slice(item.tree_hash_root().as_slice());
            }

            merkle_root_parallel(&bytes, N::to_usize())
        }
    }
}
