//! Output comment length policy.

/// Longest output comment the engine accepts, in bytes.
pub const OUTPUT_COMMENT_LIMIT: usize = 255;

/// Cut `bytes` down to at most `limit` bytes. The flag reports whether
/// anything was removed.
pub fn truncate_bytes(bytes: &[u8], limit: usize) -> (&[u8], bool) {
    if bytes.len() > limit {
        (&bytes[..limit], true)
    } else {
        (bytes, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_input_is_cut_to_limit() {
        let input: Vec<u8> = (0..300u32).map(|i| b'a' + (i % 26) as u8).collect();
        let (kept, truncated) = truncate_bytes(&input, OUTPUT_COMMENT_LIMIT);
        assert!(truncated);
        assert_eq!(kept.len(), 255);
        assert_eq!(kept, &input[..255]);
    }

    #[test]
    fn boundary_lengths() {
        let at_limit = [b'x'; 255];
        assert_eq!(truncate_bytes(&at_limit, OUTPUT_COMMENT_LIMIT), (&at_limit[..], false));

        let over = [b'x'; 256];
        let (kept, truncated) = truncate_bytes(&over, OUTPUT_COMMENT_LIMIT);
        assert!(truncated);
        assert_eq!(kept.len(), 255);
    }

    #[test]
    fn short_input_is_untouched() {
        let input = "y".repeat(100);
        assert_eq!(
            truncate_bytes(input.as_bytes(), OUTPUT_COMMENT_LIMIT),
            (input.as_bytes(), false)
        );
    }

    #[test]
    fn multibyte_cut_is_byte_exact() {
        // 254 ASCII bytes followed by a 2-byte character straddling the limit.
        let input = format!("{}é!", "a".repeat(254));
        let (kept, truncated) = truncate_bytes(input.as_bytes(), OUTPUT_COMMENT_LIMIT);
        assert!(truncated);
        assert_eq!(kept, &input.as_bytes()[..255]);
    }
}
