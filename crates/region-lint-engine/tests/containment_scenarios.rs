use region_lint_engine::{
    AnalyzerOptions, LineIndex, MarkerKind, analyze_source, is_completely_contained_in_body,
    markers,
};
use region_lint_syntax::{SyntaxKind, parse};
use rstest::rstest;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.cs",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

/// Verdict for every marker in the file, in source order.
fn verdicts(source: &str) -> Vec<(MarkerKind, bool)> {
    let tree = parse(source);
    markers(&tree)
        .map(|m| (m.kind(), is_completely_contained_in_body(m.token()).unwrap()))
        .collect()
}

#[rstest]
#[case::a_method_body("scenario_a_method_body", true)]
#[case::b_sibling_methods("scenario_b_sibling_methods", false)]
#[case::c_class_body("scenario_c_class_body", false)]
#[case::d_nested_blocks("scenario_d_nested_blocks", true)]
#[case::conditional_two_bodies("conditional_two_bodies", false)]
#[case::region_leaves_body("region_leaves_body", false)]
fn scenario_verdicts(#[case] name: &str, #[case] expected: bool) {
    let source = fixture(name);
    let verdicts = verdicts(&source);

    assert!(!verdicts.is_empty());
    for (kind, contained) in verdicts {
        assert_eq!(contained, expected, "{name}: {kind:?}");
    }
}

#[test]
fn fixtures_round_trip() {
    for name in [
        "scenario_a_method_body",
        "scenario_b_sibling_methods",
        "scenario_c_class_body",
        "scenario_d_nested_blocks",
        "conditional_two_bodies",
        "region_leaves_body",
        "mixed_markers",
    ] {
        let source = fixture(name);
        assert_eq!(parse(&source).text().to_string(), source, "{name}");
    }
}

#[test]
fn mixed_markers_report() {
    let source = fixture("mixed_markers");
    let index = LineIndex::new(&source);
    let report = analyze_source(&source, &AnalyzerOptions::default())
        .iter()
        .map(|f| {
            let at = index.line_col(f.range.start());
            format!(
                "{}:{} {:?} {}",
                at.line,
                at.column,
                f.marker,
                f.name.as_deref().unwrap_or("-")
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(report, @r"
    10:13 CommentRegionStart Validation
    25:17 RegionStart Format
    33:13 RegionStart Lambda
    42:17 RegionStart Modes
    ");
}

#[test]
fn nested_blocks_report_the_enclosing_method() {
    let source = fixture("scenario_d_nested_blocks");
    let findings = analyze_source(&source, &AnalyzerOptions::default());

    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].name.as_deref(), Some("Import rows"));
    assert_eq!(findings[0].element, Some(SyntaxKind::METHOD));
}

#[test]
fn verdict_is_shared_by_the_whole_group() {
    let source = fixture("mixed_markers");
    let verdicts = verdicts(&source);

    // Models/endregion comment pair wraps the class
    assert_eq!(verdicts.first(), Some(&(MarkerKind::CommentRegionStart, false)));
    assert_eq!(verdicts.last(), Some(&(MarkerKind::CommentRegionEnd, false)));
    assert!(verdicts[1..verdicts.len() - 1].iter().all(|(_, v)| *v));
}
