use pretty_assertions::assert_eq;
use stackdiff::aggregator::Snapshot;
use stackdiff::diff::generate_diff;
use stackdiff::output::render_terminal_diff;

fn render(left: &str, right: &str, over: i64, diff: i64, omit: bool) -> String {
    colored::control::set_override(false);

    let left = Snapshot::from_dump(left, over).unwrap();
    let right = Snapshot::from_dump(right, over).unwrap();
    render_terminal_diff(&generate_diff(&left, &right, diff), omit)
}

#[test]
fn test_render_worked_example() {
    let out = render("12 @ foo\n\n3 @ bar", "20 @ foo\n\n15 @ baz", 10, 5, true);
    assert_eq!(out, "Left: 12 Right: 20 @ foo\nRight not Left\n15 @ baz\n");
}

#[test]
fn test_render_left_section() {
    let out = render("50 @ gone\n\n12 @ foo", "12 @ foo", 10, 5, true);
    assert_eq!(out, "Left not Right\n50 @ gone\n");
}

#[test]
fn test_render_identical_dumps() {
    let dump = "30 @ a\n\n20 @ b";

    assert_eq!(render(dump, dump, 10, 0, true), "");
    assert_eq!(render(dump, dump, 10, 5, false), "");
}

#[test]
fn test_render_identical_dumps_with_negative_diff() {
    let dump = "30 @ a\n\n20 @ b";

    assert_eq!(render(dump, dump, 10, -1, true), "");
    assert_eq!(
        render(dump, dump, 10, -1, false),
        "Left: 30 Right: 30 @ a\nLeft: 20 Right: 20 @ b\n"
    );
}

#[test]
fn test_render_multiline_body() {
    let left = "goroutine profile: total 12\n12 @ 0x1 0x2\n#\t0x1\tmain.f+0x1";
    let right = "goroutine profile: total 40\n40 @ 0x1 0x2\n#\t0x1\tmain.f+0x1";

    let out = render(left, right, 10, 5, true);
    assert_eq!(out, "Left: 12 Right: 40 @ 0x1 0x2\n#\t0x1\tmain.f+0x1\n");
}
