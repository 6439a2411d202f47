// ============================================================
// COLUMN NAMING POLICY
// ============================================================
// Duplicate-name resolution and display-name sanitization

use std::collections::HashSet;

/// Resolve duplicate column names left to right.
///
/// A name that is already claimed gets a `_<k>` suffix with the smallest
/// positive `k` that is unique among the names seen so far. A colliding
/// name that itself ends in a numeric suffix rejoins its family instead of
/// stacking suffixes: `["a", "b", "a", "a_1"]` resolves to
/// `["a", "b", "a_1", "a_2"]`.
pub fn resolve_duplicate_names(names: &[String]) -> Vec<String> {
    let mut resolved: Vec<String> = Vec::with_capacity(names.len());
    let mut seen: HashSet<String> = HashSet::with_capacity(names.len());

    for name in names {
        let unique = if seen.contains(name) {
            next_free_name(strip_numeric_suffix(name), &seen)
        } else {
            name.clone()
        };
        seen.insert(unique.clone());
        resolved.push(unique);
    }

    resolved
}

/// Sanitize column names taken from a row-object key set.
///
/// Empty keys are replaced by a synthesized `c<index>` name, disambiguated
/// with the same `_<k>` policy against both the original key set and names
/// already assigned. The first literal period in a name becomes an
/// underscore (periods collide with field-path syntax downstream).
pub fn sanitize_object_names(names: &[String]) -> Vec<String> {
    let originals: HashSet<String> = names.iter().cloned().collect();
    let mut assigned: HashSet<String> = HashSet::with_capacity(names.len());
    let mut cleaned: Vec<String> = Vec::with_capacity(names.len());

    for (index, name) in names.iter().enumerate() {
        let clean = if name.is_empty() {
            let candidate = format!("c{}", index);
            if originals.contains(&candidate) || assigned.contains(&candidate) {
                let taken: HashSet<String> = originals.union(&assigned).cloned().collect();
                next_free_name(&candidate, &taken)
            } else {
                candidate
            }
        } else if name.contains('.') {
            name.replacen('.', "_", 1)
        } else {
            name.clone()
        };
        assigned.insert(clean.clone());
        cleaned.push(clean);
    }

    cleaned
}

fn next_free_name(base: &str, taken: &HashSet<String>) -> String {
    let mut k = 1usize;
    loop {
        let candidate = format!("{}_{}", base, k);
        if !taken.contains(&candidate) {
            return candidate;
        }
        k += 1;
    }
}

fn strip_numeric_suffix(name: &str) -> &str {
    if let Some((base, suffix)) = name.rsplit_once('_') {
        if !base.is_empty() && !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
            return base;
        }
    }
    name
}
