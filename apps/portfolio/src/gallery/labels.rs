//! Tag → display label mapping.
//!
//! Two tiers: an exact-match table of domain acronyms and brand spellings, then a
//! hyphen-split title-case rule for everything else. The table always wins.

const LABEL_OVERRIDES: &[(&str, &str)] = &[
    ("arcgis", "ArcGIS"),
    ("gis", "GIS"),
    ("ppo", "PPO"),
    ("html", "HTML"),
    ("css", "CSS"),
    ("sql", "SQL"),
    ("ai", "AI"),
    ("ml", "ML"),
];

/// Returns the display label for a normalized tag token.
pub fn format_tag_label(tag: &str) -> String {
    if let Some((_, label)) = LABEL_OVERRIDES.iter().find(|(token, _)| *token == tag) {
        return label.to_string();
    }

    tag.split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entries_use_canonical_spelling() {
        assert_eq!(format_tag_label("gis"), "GIS");
        assert_eq!(format_tag_label("arcgis"), "ArcGIS");
        assert_eq!(format_tag_label("ml"), "ML");
    }

    #[test]
    fn test_unknown_tokens_are_title_cased_per_segment() {
        assert_eq!(format_tag_label("machine-learning"), "Machine Learning");
        assert_eq!(format_tag_label("python"), "Python");
    }

    #[test]
    fn test_empty_segments_are_dropped() {
        assert_eq!(format_tag_label("-web--design-"), "Web Design");
        assert_eq!(format_tag_label(""), "");
    }

    #[test]
    fn test_table_is_exact_match_only() {
        // "gis-analysis" is not in the table, so only the derived rule applies
        assert_eq!(format_tag_label("gis-analysis"), "Gis Analysis");
    }
}
