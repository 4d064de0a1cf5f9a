//! Deterministic bucketing
//!
//! Assigns a context to a variation using a 32-bit rolling string hash
//! (`h = h * 31 + unit`, wrapping) over `"{context_key}-{flag_key}"`.
//! The hash runs over UTF-16 code units so non-ASCII keys bucket the same way
//! browser-side SDKs bucket them.

/// Rolling 32-bit hash of `input`, returned as its absolute value.
///
/// `i32::MIN` has no positive `i32` counterpart, so the magnitude is returned
/// as `u32` (2^31 in that case).
pub fn string_hash(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
        .unsigned_abs()
}

/// Hash used to bucket `context_key` into `flag_key`.
pub fn bucket_hash(context_key: &str, flag_key: &str) -> u32 {
    string_hash(&format!("{context_key}-{flag_key}"))
}

/// Variation index for `context_key` on a flag with `variations` options.
///
/// Returns 0 when `variations` is 0; validated flags never have that.
pub fn bucket(context_key: &str, flag_key: &str, variations: usize) -> usize {
    if variations == 0 {
        return 0;
    }
    bucket_hash(context_key, flag_key) as usize % variations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_hashes() {
        assert_eq!(string_hash(""), 0);
        assert_eq!(string_hash("a"), 97);
        assert_eq!(string_hash("ab"), 97 * 31 + 98);
        // "hello" = 99162322, a well known value for this hash
        assert_eq!(string_hash("hello"), 99_162_322);
    }

    #[test]
    fn test_negative_hash_is_absolute() {
        // "polygenelubricants" hashes to i32::MIN
        assert_eq!(string_hash("polygenelubricants"), 1u32 << 31);
        // wraps to -1910022912
        assert_eq!(string_hash("zzzzzzzz"), 1_910_022_912);
        // wraps to -561469190
        assert_eq!(bucket_hash("user-123", "hero-banner-variant"), 561_469_190);
    }

    #[test]
    fn test_hash_uses_utf16_units() {
        assert_eq!(string_hash("café"), 3_045_921);
        // surrogate pair: 0xD83D, 0xDE00
        assert_eq!(string_hash("😀"), 0xD83D * 31 + 0xDE00);
    }

    #[test]
    fn test_bucket_is_deterministic_and_in_range() {
        for i in 0..200 {
            let key = format!("user-{i}");
            let first = bucket(&key, "promo-campaign", 3);
            assert!(first < 3);
            assert_eq!(first, bucket(&key, "promo-campaign", 3));
        }
    }

    #[test]
    fn test_bucket_spreads_contexts() {
        let mut counts = [0usize; 2];
        for i in 0..1000 {
            counts[bucket(&format!("user-{i}"), "hero-banner-variant", 2)] += 1;
        }

        assert!(counts.iter().all(|&c| c > 300), "skewed buckets: {counts:?}");
    }

    #[test]
    fn test_bucket_zero_variations() {
        assert_eq!(bucket("user-1", "flag", 0), 0);
    }
}
