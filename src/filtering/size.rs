// src/filtering/size.rs

/// Checks a file size against the ceiling. A file of exactly `max_bytes` passes.
#[inline]
pub fn passes_size_filter(size: u64, max_bytes: u64) -> bool {
    size <= max_bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary() {
        assert!(passes_size_filter(9, 10));
        assert!(passes_size_filter(10, 10));
        assert!(!passes_size_filter(11, 10));
    }

    #[test]
    fn test_zero_ceiling_admits_only_empty_files() {
        assert!(passes_size_filter(0, 0));
        assert!(!passes_size_filter(1, 0));
    }
}
