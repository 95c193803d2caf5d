//! Fragment comparison and version-change classification

use crate::domain::{DependencyDiff, DiffKind, Fragment};

/// Range-operator prefixes stripped before the numeric split, checked in
/// this order with longest match first. `<=` is not in the table: only its
/// `<` is stripped, the stray `=` then fails the numeric parse and the
/// change stays unclassified.
const RANGE_PREFIXES: [&str; 5] = [">=", "||", "^", "~", "<"];

/// Compares two fragments package by package.
///
/// Record order is part of the contract: additions in the new fragment's
/// key order, then removals in the old fragment's key order, then changed
/// values in the new fragment's key order. Packages whose value is
/// textually identical on both sides are omitted.
pub fn compare_fragments(old: &Fragment, new: &Fragment) -> Vec<DependencyDiff> {
    let mut diffs = Vec::new();

    for (package, version) in new {
        if !old.contains_key(package) {
            diffs.push(difference(package, None, Some(version)));
        }
    }

    for (package, version) in old {
        if !new.contains_key(package) {
            diffs.push(difference(package, Some(version), None));
        }
    }

    for (package, new_version) in new {
        if let Some(old_version) = old.get(package) {
            if old_version != new_version {
                diffs.push(difference(package, Some(old_version), Some(new_version)));
            }
        }
    }

    diffs
}

/// Classifies the change between two optional version specifiers.
///
/// Both versions present: the first differing numeric component (major,
/// minor, patch) decides. A specifier that does not reduce to at most three
/// integer components leaves the change unclassified (`None`) rather than
/// failing.
pub fn classify(old: Option<&str>, new: Option<&str>) -> Option<DiffKind> {
    let (old, new) = match (old, new) {
        (None, None) => return None,
        (None, Some(_)) => return Some(DiffKind::Added),
        (Some(_), None) => return Some(DiffKind::Removed),
        (Some(old), Some(new)) => (old, new),
    };

    let old_parts = split_version(old)?;
    let new_parts = split_version(new)?;

    for (index, kind) in [DiffKind::Major, DiffKind::Minor, DiffKind::Patch]
        .into_iter()
        .enumerate()
    {
        if old_parts.get(index) != new_parts.get(index) {
            return Some(kind);
        }
    }

    None
}

fn difference(package: &str, old: Option<&str>, new: Option<&str>) -> DependencyDiff {
    DependencyDiff {
        package: package.to_string(),
        old: old.map(str::to_string),
        new: new.map(str::to_string),
        kind: classify(old, new),
    }
}

/// Splits a specifier into its numeric components after stripping one
/// range-operator prefix. Input is expected in the form x.x(.x).
fn split_version(value: &str) -> Option<Vec<u64>> {
    let stripped = &value[prefix_len(value)..];
    let parts: Vec<&str> = stripped.split('.').collect();

    if parts.len() > 3 {
        return None;
    }

    parts.iter().map(|part| part.parse().ok()).collect()
}

fn prefix_len(value: &str) -> usize {
    RANGE_PREFIXES
        .iter()
        .find(|prefix| value.starts_with(**prefix))
        .map_or(0, |prefix| prefix.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(entries: &[(&str, &str)]) -> Fragment {
        entries
            .iter()
            .map(|(package, version)| (package.to_string(), version.to_string()))
            .collect()
    }

    #[test]
    fn test_identical_fragments_yield_nothing() {
        let fragment = fragment(&[("express", "^4.19.2"), ("lodash", "~4.17.21")]);
        assert!(compare_fragments(&fragment, &fragment.clone()).is_empty());
    }

    #[test]
    fn test_empty_fragments_yield_nothing() {
        assert!(compare_fragments(&Fragment::new(), &Fragment::new()).is_empty());
    }

    #[test]
    fn test_added_records_in_new_key_order() {
        let old = Fragment::new();
        let new = fragment(&[("zod", "^3.0.0"), ("axios", "^1.0.0")]);

        let diffs = compare_fragments(&old, &new);
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[0].package, "zod");
        assert_eq!(diffs[1].package, "axios");
        assert!(diffs.iter().all(|d| d.kind == Some(DiffKind::Added)));
        assert!(diffs.iter().all(|d| d.old.is_none()));
    }

    #[test]
    fn test_removed_records_in_old_key_order() {
        let old = fragment(&[("zod", "^3.0.0"), ("axios", "^1.0.0")]);
        let new = Fragment::new();

        let diffs = compare_fragments(&old, &new);
        assert_eq!(diffs.len(), 2);
        assert_eq!(diffs[0].package, "zod");
        assert_eq!(diffs[1].package, "axios");
        assert!(diffs.iter().all(|d| d.kind == Some(DiffKind::Removed)));
        assert!(diffs.iter().all(|d| d.new.is_none()));
    }

    #[test]
    fn test_record_order_added_removed_changed() {
        let old = fragment(&[("kept", "1.0.0"), ("dropped", "2.0.0"), ("bumped", "3.0.0")]);
        let new = fragment(&[("fresh", "0.1.0"), ("kept", "1.0.0"), ("bumped", "3.1.0")]);

        let diffs = compare_fragments(&old, &new);
        let packages: Vec<&str> = diffs.iter().map(|d| d.package.as_str()).collect();
        assert_eq!(packages, ["fresh", "dropped", "bumped"]);
        assert_eq!(diffs[0].kind, Some(DiffKind::Added));
        assert_eq!(diffs[1].kind, Some(DiffKind::Removed));
        assert_eq!(diffs[2].kind, Some(DiffKind::Minor));
    }

    #[test]
    fn test_unchanged_value_is_omitted() {
        let old = fragment(&[("express", "^4.19.2"), ("lodash", "^4.17.21")]);
        let new = fragment(&[("express", "^4.19.2"), ("lodash", "^4.17.22")]);

        let diffs = compare_fragments(&old, &new);
        assert_eq!(diffs.len(), 1);
        assert_eq!(diffs[0].package, "lodash");
    }

    #[test]
    fn test_classify_absent_sides() {
        assert_eq!(classify(None, None), None);
        assert_eq!(classify(None, Some("1.0.0")), Some(DiffKind::Added));
        assert_eq!(classify(Some("1.0.0"), None), Some(DiffKind::Removed));
    }

    #[test]
    fn test_classify_component_buckets() {
        assert_eq!(
            classify(Some("1.0.0"), Some("1.2.0")),
            Some(DiffKind::Minor)
        );
        assert_eq!(
            classify(Some("^18.3.1"), Some("^19.2.0")),
            Some(DiffKind::Major)
        );
        assert_eq!(
            classify(Some("2.2.1"), Some("7.1.0")),
            Some(DiffKind::Major)
        );
        assert_eq!(
            classify(Some("^9.4.0"), Some("^9.5.0")),
            Some(DiffKind::Minor)
        );
        assert_eq!(
            classify(Some("1.2.3"), Some("1.2.4")),
            Some(DiffKind::Patch)
        );
    }

    #[test]
    fn test_classify_equal_versions() {
        assert_eq!(classify(Some("^1.0.0"), Some("^1.0.0")), None);
    }

    #[test]
    fn test_classify_mixed_prefixes() {
        assert_eq!(
            classify(Some("~4.18.2"), Some(">=5.0.0")),
            Some(DiffKind::Major)
        );
        assert_eq!(
            classify(Some("||2.0.0"), Some("2.1.0")),
            Some(DiffKind::Minor)
        );
    }

    #[test]
    fn test_classify_too_many_components() {
        assert_eq!(classify(Some(">=2.33.0"), Some("2.33.0.1")), None);
    }

    #[test]
    fn test_classify_unparsable_components() {
        assert_eq!(classify(Some("latest"), Some("next")), None);
        assert_eq!(classify(Some("1.x"), Some("2.x")), None);
        assert_eq!(classify(Some("1.0.0-beta.1"), Some("1.0.0")), None);
    }

    #[test]
    fn test_classify_le_prefix_stays_unclassified() {
        // `<=` is not a recognized prefix; the leftover `=` poisons the parse
        assert_eq!(classify(Some("<=1.2.3"), Some("<=1.4.0")), None);
        assert_eq!(classify(Some("<=1.2.3"), Some("1.4.0")), None);
    }

    #[test]
    fn test_classify_lt_prefix_is_stripped() {
        assert_eq!(
            classify(Some("<2.0.0"), Some("<3.0.0")),
            Some(DiffKind::Major)
        );
    }

    #[test]
    fn test_classify_missing_component_differs() {
        assert_eq!(classify(Some("1.2"), Some("1.2.0")), Some(DiffKind::Patch));
        assert_eq!(classify(Some("1"), Some("1.0")), Some(DiffKind::Minor));
        assert_eq!(classify(Some("1.2"), Some("1.2")), None);
    }

    #[test]
    fn test_classify_is_direction_independent() {
        let pairs = [
            ("1.0.0", "2.0.0"),
            ("^9.4.0", "^9.5.0"),
            ("1.2.3", "1.2.4"),
            ("<=1.2.3", "1.4.0"),
        ];
        for (a, b) in pairs {
            assert_eq!(classify(Some(a), Some(b)), classify(Some(b), Some(a)));
        }
    }

    #[test]
    fn test_prefix_len() {
        assert_eq!(prefix_len("^1.2.3"), 1);
        assert_eq!(prefix_len("~1.2.3"), 1);
        assert_eq!(prefix_len(">=1.2.3"), 2);
        assert_eq!(prefix_len("||1.2.3"), 2);
        assert_eq!(prefix_len("<1.2.3"), 1);
        assert_eq!(prefix_len("<=1.2.3"), 1);
        assert_eq!(prefix_len("1.2.3"), 0);
        assert_eq!(prefix_len(""), 0);
    }

    #[test]
    fn test_split_version() {
        assert_eq!(split_version("1.2.3"), Some(vec![1, 2, 3]));
        assert_eq!(split_version("^1.2.3"), Some(vec![1, 2, 3]));
        assert_eq!(split_version("1.2"), Some(vec![1, 2]));
        assert_eq!(split_version("18"), Some(vec![18]));
        assert_eq!(split_version("1.2.3.4"), None);
        assert_eq!(split_version("=1.2.3"), None);
        assert_eq!(split_version("abc"), None);
        assert_eq!(split_version(""), None);
    }
}
