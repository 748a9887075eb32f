/// Levenshtein edit distance between two strings, counted in chars.
///
/// Insertion, deletion and substitution each cost 1. Fills the full
/// `(len(a)+1) x (len(b)+1)` table; inputs here are single words, so the
/// table stays tiny.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (m, n) = (a.len(), b.len());

    if m == 0 || n == 0 {
        return m.max(n);
    }

    let width = n + 1;
    let mut table = vec![0usize; (m + 1) * width];
    for i in 0..=m {
        table[i * width] = i;
    }
    for j in 0..=n {
        table[j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            table[i * width + j] = (table[(i - 1) * width + j] + 1) // deletion
                .min(table[i * width + j - 1] + 1) // insertion
                .min(table[(i - 1) * width + j - 1] + cost); // substitution
        }
    }

    table[m * width + n]
}
