//! Levenshtein-based "did you mean" matching for enum-valued rule fields.

/// Closest candidate to `input`, or `None` when even the best candidate is
/// more than half the longer string's length away.
pub(crate) fn suggest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let needle = input.trim().to_lowercase();
    let (best, distance) = candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein(&needle, candidate)))
        .min_by_key(|&(_, distance)| distance)?;
    (distance <= needle.len().max(best.len()) / 2).then_some(best)
}

/// Levenshtein edit distance between two strings.
pub(crate) fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let m = a.len();
    let n = b.len();

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
