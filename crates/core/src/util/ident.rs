//! Random id-prefix generation for generated documents.

use rand::RngExt;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of the random base-36 suffix
const SUFFIX_LEN: usize = 11;

/// Generate a random base-36 string of the given length
pub fn random_suffix(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Fresh id-prefix for one generated document.
///
/// Used to namespace every element id so concatenated documents never
/// collide. Not a security boundary.
pub fn fresh_uid() -> String {
    format!("tabs-{}", random_suffix(SUFFIX_LEN))
}
