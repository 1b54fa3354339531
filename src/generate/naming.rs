//! Node naming for generated graphs.
//!
//! Random graphs are often requested by size alone. These helpers turn a node count into
//! a list of distinct node values: integers counting from one, or fixed-width uppercase
//! letter codes.

/// Widest letter code produced by [`lettered_nodes`].
const MAX_LETTER_WIDTH: u32 = 12;

/// Returns the nodes `1..=count`.
///
/// # Examples
///
/// ```rust
/// assert_eq!(loopless::numbered_nodes(3), vec![1, 2, 3]);
/// ```
#[must_use]
pub fn numbered_nodes(count: usize) -> Vec<usize> {
    (1..=count).collect()
}

/// Returns `count` distinct uppercase letter codes of equal width.
///
/// The width is the smallest `w` for which `26^w >= count`, capped at twelve letters.
/// Codes count in base 26 with `A` as zero: `A..Z` for up to 26 nodes, `AA, AB, .., ZZ`
/// for up to 676 nodes, and so on.
///
/// # Examples
///
/// ```rust
/// use loopless::lettered_nodes;
///
/// assert_eq!(lettered_nodes(3), vec!["A", "B", "C"]);
///
/// let wide = lettered_nodes(28);
/// assert_eq!(wide[0], "AA");
/// assert_eq!(wide[25], "AZ");
/// assert_eq!(wide[27], "BB");
/// ```
#[must_use]
pub fn lettered_nodes(count: usize) -> Vec<String> {
    let width = letter_width(count);
    (0..count as u64).map(|index| letter_code(index, width)).collect()
}

fn letter_width(count: usize) -> u32 {
    let count = count as u64;
    (1..MAX_LETTER_WIDTH)
        .find(|width| 26u64.pow(*width) >= count)
        .unwrap_or(MAX_LETTER_WIDTH)
}

fn letter_code(mut index: u64, width: u32) -> String {
    let mut letters = vec![b'A'; width as usize];
    for slot in letters.iter_mut().rev() {
        // index < 26^width, so every digit fits in 0..26
        *slot = b'A' + (index % 26) as u8;
        index /= 26;
    }
    letters.into_iter().map(char::from).collect()
}
