//! Feature-label normalization.

/// Substring → canonical-name table, consulted in declaration order.
///
/// Order is significant: a label may contain several patterns (e.g. both
/// "storage" and "battery") and the first declared match wins. That is a
/// deliberate, reproducible tie-break.
pub const KEY_PATTERNS: &[(&str, &str)] = &[
    ("memory", "RAM"),
    ("ram", "RAM"),
    ("internal storage", "Storage"),
    ("storage", "Storage"),
    ("battery capacity", "Battery"),
    ("battery", "Battery"),
    ("camera", "Camera"),
    ("main camera", "Camera"),
    ("display", "Display"),
    ("screen size", "Display"),
    ("price", "Price"),
    ("product", "Product"),
];

/// Canonicalize a raw spec label.
///
/// Lowercases and trims, then returns the canonical name of the first
/// table pattern occurring as a substring; unmatched labels come back
/// title-cased. Pure and total: the output is never empty.
pub fn normalize_key(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    for (pattern, canonical) in KEY_PATTERNS {
        if key.contains(pattern) {
            return (*canonical).to_string();
        }
    }
    if key.is_empty() {
        return "Unknown".to_string();
    }
    title_case(&key)
}

fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_known_substrings() {
        assert_eq!(normalize_key("RAM"), "RAM");
        assert_eq!(normalize_key("Memory"), "RAM");
        assert_eq!(normalize_key("Internal Storage"), "Storage");
        assert_eq!(normalize_key("Battery Capacity"), "Battery");
        assert_eq!(normalize_key("Screen Size"), "Display");
        assert_eq!(normalize_key("  price  "), "Price");
    }

    #[test]
    fn substring_match_anywhere_in_label() {
        assert_eq!(normalize_key("Installed memory (RAM)"), "RAM");
        assert_eq!(normalize_key("Rear camera resolution"), "Camera");
    }

    #[test]
    fn first_declared_pattern_wins() {
        // Contains both "storage" and "battery"; "internal storage" is
        // declared before "battery capacity" in the table.
        assert_eq!(normalize_key("battery and internal storage"), "Storage");
        // "memory" is declared before "storage".
        assert_eq!(normalize_key("memory storage"), "RAM");
    }

    #[test]
    fn unmatched_labels_are_title_cased() {
        assert_eq!(normalize_key("operating system"), "Operating System");
        assert_eq!(normalize_key("WEIGHT"), "Weight");
    }

    #[test]
    fn total_and_never_empty() {
        for raw in ["", "   ", "x", "item weight", "BATTERY storage"] {
            assert!(!normalize_key(raw).is_empty());
        }
    }

    #[test]
    fn deterministic() {
        let label = "battery capacity and storage";
        assert_eq!(normalize_key(label), normalize_key(label));
    }
}
