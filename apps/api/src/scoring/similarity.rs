use strsim::levenshtein;

pub const EXACT_MATCH: f64 = 1.0;
pub const CONTAINMENT_MATCH: f64 = 0.85;

/// Normalized similarity between two labels, in [0, 1].
///
/// 1. equal after trim + lowercase → 1.0
/// 2. one contains the other → 0.85
/// 3. otherwise `1 - levenshtein / longer_len`, floored at 0.0
///
/// A blank label only matches another blank label.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        return EXACT_MATCH;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return CONTAINMENT_MATCH;
    }

    let longer = a.chars().count().max(b.chars().count());
    let distance = levenshtein(&a, &b);
    (1.0 - distance as f64 / longer as f64).max(0.0)
}
