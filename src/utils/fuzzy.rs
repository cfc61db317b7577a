// Fuzzy matching utilities for column name suggestions

/// Calculate Levenshtein distance between two strings
/// Returns the minimum number of single-character edits (insertions, deletions, substitutions)
/// needed to transform one string into another
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Single rolling row instead of the full matrix
    let mut prev: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1)  // deletion
                .min(curr[j] + 1)            // insertion
                .min(prev[j] + cost);        // substitution
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[s2_chars.len()]
}

/// Check if s2 is a prefix of s1 (case-insensitive)
pub fn is_prefix_match(s1: &str, s2: &str) -> bool {
    !s2.is_empty() && s1.to_lowercase().starts_with(&s2.to_lowercase())
}

/// Find the closest candidate to `search` (case-insensitive).
///
/// Prefix matches win outright; otherwise the candidate with the smallest
/// edit distance within `max_distance` is returned. Ties keep the earlier
/// candidate.
pub fn find_closest<'a>(search: &str, candidates: &[&'a str], max_distance: usize) -> Option<&'a str> {
    if let Some(prefix) = candidates.iter().find(|c| is_prefix_match(c, search)) {
        return Some(*prefix);
    }

    let search_lower = search.to_lowercase();
    let mut best: Option<(&'a str, usize)> = None;
    for candidate in candidates {
        let distance = levenshtein_distance(&search_lower, &candidate.to_lowercase());
        if distance > max_distance {
            continue;
        }
        match best {
            Some((_, best_dist)) if distance >= best_dist => {}
            _ => best = Some((*candidate, distance)),
        }
    }
    best.map(|(name, _)| name)
}
