use quickcheck::quickcheck;
use textdiff::{
    apply_patch, closest_match, closest_matches, context_diff, join_lines, ndiff, restore,
    sequence_ratio, split_lines, string_ratio, unified_diff, DiffFormatter, DiffInput,
};

#[test]
fn split_lines_cases() {
    assert_eq!(split_lines("foo\nbar\nbaz\n"), ["foo\n", "bar\n", "baz\n"]);
    assert_eq!(split_lines("foo\nbar"), ["foo\n", "bar"]);
    assert_eq!(split_lines(""), Vec::<&str>::new());
}

#[test]
fn unified_diff_header_shape() {
    let a = split_lines("x\n");
    let b = split_lines("y\n");
    let rendered = unified_diff(DiffInput {
        a: &a,
        b: &b,
        from_file: "old.txt",
        to_file: "new.txt",
        ..Default::default()
    })
    .to_string();

    assert!(rendered.starts_with("--- old.txt\n+++ new.txt\n@@ -1,1 +1,1 @@\n"));
}

#[test]
fn unified_diff_empty_file_labels() {
    let a = split_lines("x\n");
    let b = split_lines("y\n");
    let rendered = unified_diff(DiffInput {
        a: &a,
        b: &b,
        ..Default::default()
    })
    .to_string();

    // Labels default to the empty string
    assert!(rendered.starts_with("--- \n+++ \n"));
}

#[test]
fn patch_round_trip() {
    let a = split_lines("foo\nbar\nbaz\n");
    let b = split_lines("foo\nBAR\nbaz\n");
    let patch = unified_diff(DiffInput {
        a: &a,
        b: &b,
        from_file: "a",
        to_file: "b",
        context: 3,
    })
    .to_string();

    let patched = apply_patch(&a, &patch).unwrap();
    assert_eq!(patched, b);
    assert_eq!(join_lines(&patched), "foo\nBAR\nbaz\n");
}

#[test]
fn string_ratio_values() {
    assert_eq!(string_ratio("kitten", "kitten"), 1.0);
    let r = string_ratio("kitten", "sitting");
    assert!(r > 0.0 && r < 1.0);
    assert_eq!(r, 8.0 / 13.0);
}

#[test]
fn sequence_ratio_empty_inputs() {
    assert_eq!(sequence_ratio::<&str>(&[], &[]), 1.0);
}

#[test]
fn closest_match_empty_candidates() {
    assert_eq!(closest_match("foo", &[]), (String::new(), 0.0));
}

#[test]
fn closest_matches_caps_at_candidate_count() {
    assert_eq!(
        closest_matches("foo", &["foo", "bar"], 10),
        ["foo", "bar"]
    );
}

#[test]
fn context_diff_marks_changes() {
    let a = split_lines("one\ntwo\nthree\n");
    let b = split_lines("one\nTWO\nthree\n");
    let lines = context_diff(DiffInput {
        a: &a,
        b: &b,
        from_file: "orig",
        to_file: "new",
        ..Default::default()
    });
    let joined = join_lines(&lines);
    assert!(joined.contains("! two\n"));
    assert!(joined.contains("! TWO\n"));
}

#[test]
fn colorless_formatter_matches_display() {
    let a = split_lines("one\ntwo\n");
    let b = split_lines("one\nTWO\n");
    let diff = unified_diff(DiffInput {
        a: &a,
        b: &b,
        from_file: "a",
        to_file: "b",
        ..Default::default()
    });

    let plain = DiffFormatter::new().fmt_diff(&diff).to_string();
    assert_eq!(plain, diff.to_string());

    let colored = DiffFormatter::new().with_color().fmt_diff(&diff).to_string();
    assert!(colored.contains("\u{1b}[31m"));
    assert!(colored.contains("-two\n"));
}

fn sample_lines(raw: &[u8]) -> Vec<String> {
    raw.iter().take(24).map(|x| format!("{}\n", x % 4)).collect()
}

fn as_refs(lines: &[String]) -> Vec<&str> {
    lines.iter().map(String::as_str).collect()
}

#[test]
fn prop_split_join_round_trip() {
    fn prop(s: String) -> bool {
        join_lines(&split_lines(&s)) == s
    }
    quickcheck(prop as fn(String) -> bool);
}

#[test]
fn prop_patch_round_trip() {
    fn prop(a: Vec<u8>, b: Vec<u8>) -> bool {
        let a = sample_lines(&a);
        let b = sample_lines(&b);
        let a = as_refs(&a);
        let b = as_refs(&b);
        let patch = unified_diff(DiffInput {
            a: &a,
            b: &b,
            ..Default::default()
        })
        .to_string();
        match apply_patch(&a, &patch) {
            Ok(patched) => patched == b,
            Err(_) => false,
        }
    }
    quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> bool);
}

#[test]
fn prop_restore_recovers_both_sides() {
    fn prop(a: Vec<u8>, b: Vec<u8>) -> bool {
        let a = sample_lines(&a);
        let b = sample_lines(&b);
        let delta = ndiff(&as_refs(&a), &as_refs(&b));
        restore(&delta, 1) == a && restore(&delta, 2) == b
    }
    quickcheck(prop as fn(Vec<u8>, Vec<u8>) -> bool);
}

#[test]
fn prop_equal_inputs_yield_empty_diff() {
    fn prop(a: Vec<u8>) -> bool {
        let a = sample_lines(&a);
        let a = as_refs(&a);
        let diff = unified_diff(DiffInput {
            a: &a,
            b: &a,
            ..Default::default()
        });
        diff.is_empty() && diff.to_string().is_empty()
    }
    quickcheck(prop as fn(Vec<u8>) -> bool);
}
