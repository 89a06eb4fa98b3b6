/// Indel similarity (insertions and deletions only) on a 0-100 scale.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    rapidfuzz::fuzz::ratio(a.chars(), b.chars()) * 100.0
}

/// Best case-insensitive match for `target` among `candidates`, if its ratio is
/// strictly above `threshold`. Ties go to the earliest candidate.
pub fn find_best_match<'c, S: AsRef<str>>(target: &str, candidates: &'c [S], threshold: f64) -> Option<&'c str> {
    find_best_match_by(target, candidates, threshold, similarity_ratio)
}

pub fn find_best_match_by<'c, S, F>(target: &str, candidates: &'c [S], threshold: f64, ratio: F) -> Option<&'c str>
where
    S: AsRef<str>,
    F: Fn(&str, &str) -> f64,
{
    let target = target.to_lowercase();
    let mut best: Option<(&'c str, f64)> = None;

    for candidate in candidates {
        let candidate = candidate.as_ref();
        let score = ratio(&target, &candidate.to_lowercase());
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    best.filter(|&(_, score)| score > threshold).map(|(candidate, _)| candidate)
}
