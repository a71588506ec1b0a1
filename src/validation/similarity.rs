/*!
 * Normalized edit-distance similarity.
 *
 * Both inputs are lowercased and trimmed before comparison. Lengths are
 * counted in characters so accented Spanish letters weigh one edit each.
 */

/// Similarity between two strings in `[0.0, 1.0]`
///
/// Equal normalized strings (including two empty ones) score 1.0, a single
/// empty side scores 0.0, otherwise `1 - distance / max_len`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let distance = levenshtein_distance(&a, &b);
    let max_len = a.chars().count().max(b.chars().count());

    1.0 - (distance as f64 / max_len as f64)
}

/// Similarity expressed as a whole percentage, rounded half away from zero
pub fn similarity_percentage(a: &str, b: &str) -> u8 {
    // similarity() is within [0, 1], so the cast cannot overflow
    (similarity(a, b) * 100.0).round() as u8
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Levenshtein distance between two strings, in characters
///
/// Insertion, deletion and substitution each cost 1. Keeps two rows sized by
/// the shorter input.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // The row runs over the shorter string
    let (long, short) = if a_chars.len() >= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; short.len() + 1];

    for i in 1..=long.len() {
        curr_row[0] = i;

        for j in 1..=short.len() {
            let cost = if long[i - 1] == short[j - 1] { 0 } else { 1 };

            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}
