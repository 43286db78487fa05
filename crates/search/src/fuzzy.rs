//! Edit-distance primitives.

/// Calculate Levenshtein edit distance between two strings.
///
/// Distances are counted in Unicode scalar values, so `"é"` is one edit
/// away from `"e"`.
///
/// # Arguments
/// * `a` - First string
/// * `b` - Second string
///
/// # Returns
/// Number of single-character edits needed to transform a into b
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Two rows of the DP table are enough
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            curr[j] = if a_chars[i - 1] == b_chars[j - 1] {
                prev[j - 1]
            } else {
                1 + prev[j - 1].min(curr[j - 1]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity in `[0, 1]` derived from the edit distance.
///
/// `1 - distance / max(len(a), len(b))`. Two empty strings are identical
/// and score `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }

    1.0 - levenshtein_distance(a, b) as f64 / longest as f64
}
