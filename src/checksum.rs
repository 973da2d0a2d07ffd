//! Deterministic structural fingerprints over fetched feed data.

use crate::network::{ApiPost, ApiUser};

/// Fingerprint of a (user, posts) snapshot.
///
/// Recomputed on demand; carries no identity of its own and must not be
/// persisted across crate versions.
pub type Fingerprint = i32;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 16_777_619;

/// FNV-1a 32-bit hash over the UTF-8 bytes of `text`.
///
/// Pinned so fingerprints are stable across runs and platforms.
fn fnv1a(text: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for byte in text.as_bytes() {
        hash ^= u32::from(*byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}

/// Checksum of a single text value (display names, presentation headers).
pub fn text_checksum(text: &str) -> i32 {
    fnv1a(text) as i32
}

// Fold of the high and low words of a 64-bit identifier.
fn id_hash(id: u64) -> i32 {
    ((id >> 32) ^ id) as u32 as i32
}

fn combine(acc: i32, hash: i32) -> i32 {
    acc.wrapping_mul(31).wrapping_add(hash)
}

/// Compute the structural fingerprint of a fetched snapshot.
///
/// Base-31 rolling hash over the user fields followed by every post in
/// sequence order, with wrapping 32-bit signed arithmetic. Equal inputs always
/// yield equal output; reordering the posts changes the result. Total over its
/// inputs: an empty post slice is valid and the result then depends only on
/// the user fields.
pub fn snapshot_checksum(user: &ApiUser, posts: &[ApiPost]) -> Fingerprint {
    let mut acc: i32 = 1;
    acc = combine(acc, id_hash(user.id));
    acc = combine(acc, text_checksum(&user.name));
    for post in posts {
        acc = combine(acc, id_hash(post.id));
        acc = combine(acc, text_checksum(&post.title));
    }
    acc
}
