/// Similarity of two strings on a 0-100 scale, 100 meaning identical.
///
/// Uses the indel distance (insertions and deletions only, so a substitution
/// costs 2): `round(100 * (len_a + len_b - distance) / (len_a + len_b))`.
/// Two empty strings score 100.
pub fn ratio(a: &str, b: &str) -> u8 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 100;
    }

    let distance = indel_distance(a, b);
    let score = 100.0 * (total - distance) as f64 / total as f64;
    score.round() as u8
}

/// Edit distance where substitution costs as much as a deletion plus an insertion
pub fn indel_distance(a: &str, b: &str) -> usize {
    weighted_distance(a, b, 2)
}

/// Calculate Levenshtein distance between two strings
pub fn edit_distance(a: &str, b: &str) -> usize {
    weighted_distance(a, b, 1)
}

fn weighted_distance(a: &str, b: &str, substitution_cost: usize) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let a_len = a_chars.len();
    let b_len = b_chars.len();

    if a_len == 0 {
        return b_len;
    }
    if b_len == 0 {
        return a_len;
    }

    let mut matrix = vec![vec![0; b_len + 1]; a_len + 1];

    for (i, row) in matrix.iter_mut().enumerate().take(a_len + 1) {
        row[0] = i;
    }
    for (j, item) in matrix[0].iter_mut().enumerate().take(b_len + 1) {
        *item = j;
    }

    for (i, a_char) in a_chars.iter().enumerate() {
        for (j, b_char) in b_chars.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { substitution_cost };

            matrix[i + 1][j + 1] = std::cmp::min(
                std::cmp::min(
                    matrix[i][j + 1] + 1, // deletion
                    matrix[i + 1][j] + 1, // insertion
                ),
                matrix[i][j] + cost, // substitution
            );
        }
    }

    matrix[a_len][b_len]
}
