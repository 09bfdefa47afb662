use super::*;

// =============================================================
// Figures
// =============================================================

#[test]
fn example_files_are_unique() {
    for (i, a) in EXAMPLES.iter().enumerate() {
        for b in &EXAMPLES[i + 1..] {
            assert_ne!(a.file, b.file);
        }
    }
}

#[test]
fn gallery_covers_every_expected_asset() {
    let mut files: Vec<&str> = EXAMPLES.iter().map(|e| e.file).collect();
    files.extend(RESULTS.iter().map(|r| r.file));
    files.extend([TEASER.file, METHODOLOGY.file, IMPLEMENTATION.file]);
    files.sort_unstable();
    assert_eq!(
        files,
        vec![
            "bystander.jpg",
            "change_chart.png",
            "confidential.jpg",
            "dr_chart.png",
            "identity.jpg",
            "implementation.jpg",
            "location.jpg",
            "methodology.jpg",
            "self-disclosure.jpg",
            "spaf_chart.png",
            "teaser.jpg",
        ]
    );
}

#[test]
fn self_disclosure_caption_matches_page_copy() {
    let example = EXAMPLES
        .iter()
        .find(|e| e.title == "Self-Disclosure Risk");
    assert!(example.is_some_and(|e| {
        e.file == "self-disclosure.jpg" && e.caption.starts_with("Imago Obscura addresses “self disclosure risks”.")
    }));
}

// =============================================================
// Authors
// =============================================================

#[test]
fn only_wu_has_no_profile_link() {
    let unlinked: Vec<&str> = AUTHORS
        .iter()
        .filter(|a| a.url.is_none())
        .map(|a| a.name)
        .collect();
    assert_eq!(unlinked, vec!["Yuchen Wu"]);
}

#[test]
fn author_location_is_recorded_but_separate_from_institution() {
    for author in AUTHORS {
        assert!(!author.location.is_empty(), "{} has no location", author.name);
        assert!(!author.institution.contains(author.location));
    }
}

// =============================================================
// Abstract + citation
// =============================================================

#[test]
fn abstract_rest_continues_the_intro() {
    assert!(ABSTRACT_REST.starts_with(' '));
    assert!(ABSTRACT_INTRO.ends_with('.'));
}

#[test]
fn citation_is_a_multiline_bibtex_entry() {
    let lines: Vec<&str> = CITATION_BIBTEX.lines().collect();
    assert_eq!(lines.first(), Some(&"@article{monteiro2025imago,"));
    assert_eq!(lines.last(), Some(&"}"));
    assert!(CITATION_BIBTEX.contains("year={2025}"));
    assert!(CITATION_BIBTEX.contains("journal={arXiv preprint arXiv:2505.20916}"));
}

#[test]
fn external_links_are_absolute_https() {
    assert!(PAPER_URL.starts_with("https://"));
    assert!(DEMO_URL.starts_with("https://"));
}

#[test]
fn example_figure_uses_title_for_label_and_caption_for_lightbox() {
    let figure = EXAMPLES[1].figure();
    assert_eq!(figure.file, "identity.jpg");
    assert_eq!(figure.label, "Identity Exposure Risk");
    assert_eq!(figure.alt, "Identity Exposure Risk");
    assert_eq!(figure.caption, EXAMPLES[1].caption);
}

#[test]
fn result_figure_uses_caption_everywhere() {
    let figure = RESULTS[0].figure();
    assert_eq!(figure.file, "spaf_chart.png");
    assert_eq!(figure.alt, figure.caption);
    assert_eq!(figure.label, figure.caption);
}
