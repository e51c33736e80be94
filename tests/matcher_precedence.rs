//! Parametrized checks that each tier of the matching ladder is actually
//! reachable and wins over the ones below it.

use rstest::rstest;
use tycode_diffcore::apply_diff_chunk;

#[rstest]
#[case::exact("abc\n", "abc\n", "ABC\n", "ABC\n")]
#[case::line_trimmed("  abc  \n", "abc\n", "ABC\n", "ABC\n")]
#[case::whole_line_untouched_elsewhere("prefix\nabc\nsuffix\n", "abc\n", "ABC\n", "prefix\nABC\nsuffix\n")]
fn matcher_ladder_resolves_each_case(
    #[case] original: &str,
    #[case] search: &str,
    #[case] replace: &str,
    #[case] expected: &str,
) {
    let diff = format!("<<<<<<< SEARCH\n{search}=======\n{replace}>>>>>>> REPLACE\n");
    let result = apply_diff_chunk(&diff, original, true).unwrap();
    assert_eq!(result.content, expected);
}

#[rstest]
#[case::two_lines(2)]
#[case::three_lines(3)]
#[case::five_lines(5)]
fn block_anchor_requires_at_least_three_lines(#[case] search_line_count: usize) {
    let body: Vec<String> = (0..search_line_count).map(|i| format!("line{i}")).collect();
    let original = format!("header\n{}\nfooter\n", body.join("\n"));
    // Shift the middle content, leaving only the anchors intact, to force a
    // case where exact and line-trimmed both fail and only block-anchor
    // (when eligible) can recover the match.
    let mut drifted = body.clone();
    if drifted.len() > 2 {
        for line in &mut drifted[1..drifted.len() - 1] {
            line.push_str("_drifted");
        }
    } else if drifted.len() == 2 {
        drifted[0].push_str("_drifted");
    }
    let search = format!("{}\n", drifted.join("\n"));
    let diff = format!("<<<<<<< SEARCH\n{search}=======\nreplaced\n>>>>>>> REPLACE\n");

    let result = apply_diff_chunk(&diff, &original, true);
    if search_line_count >= 3 {
        assert!(result.is_ok(), "block-anchor should recover a {search_line_count}-line block");
    } else {
        assert!(result.is_err(), "fewer than 3 lines must not fall back to block-anchor");
    }
}
