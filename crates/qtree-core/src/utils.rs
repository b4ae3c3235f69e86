/// Number of decimal digits needed to print indices `0..count`.
///
/// # Examples
/// ```
/// use qtree_core::utils::width_for_count;
/// assert_eq!(width_for_count(0), 1);
/// assert_eq!(width_for_count(10), 1);
/// assert_eq!(width_for_count(11), 2);
/// ```
pub fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        (count - 1).ilog10() as usize + 1
    }
}

/// Format a word as `0x` followed by eight hex digits.
pub fn hex_word(word: u32) -> String {
    format!("0x{word:08x}")
}
