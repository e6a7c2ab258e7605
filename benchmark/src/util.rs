/// Median of `times`, taking the lower middle value for even lengths.
/// Zero for an empty slice.
pub fn median(times: &[u64]) -> u64 {
    if times.is_empty() {
        return 0;
    }
    let mut sorted = times.to_vec();
    sorted.sort_unstable();
    sorted[(sorted.len() - 1) / 2]
}

/// Clamps an exponent so `1 << exp` stays addressable.
pub fn pow2(exp: u32) -> usize {
    1usize << exp.min(usize::BITS - 2)
}
