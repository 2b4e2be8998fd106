use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use todo_fmt_engine::{Catalog, FormatMode, Formatter};

/// `>` in progress, `-` todo, `+` done.
#[fixture]
fn formatter() -> Formatter {
    Formatter::new(Catalog::new([("doing", '>'), ("todo", '-'), ("done", '+')]).unwrap())
}

const SAMPLES: [&str; 10] = [
    "+ b\n- a\n> c",
    "- a\n+ b\n\n> c\n- d",
    "- x\n-y",
    "```\ncode here\n```",
    "title\n---",
    "Plan\n====\n+ ship\n- test\n\nNotes\nfree text\n\n\n- later",
    "- a\n```\n+ z\n- y\n```\n+ b",
    "  + a  \n\t- b\n\n\n",
    "one\n\ntwo\n\n\nthree\n- x\n\n+ y",
    "",
];

#[rstest]
fn format_is_idempotent(
    formatter: Formatter,
    #[values(FormatMode::Todo, FormatMode::Notes)] mode: FormatMode,
) {
    for text in SAMPLES {
        let once = formatter.format(text, mode);
        let twice = formatter.format(&once, mode);
        assert_eq!(twice, once, "input {text:?} in {mode:?} mode");
    }
}

#[rstest]
fn ranks_never_decrease_within_a_group(
    formatter: Formatter,
    #[values(FormatMode::Todo, FormatMode::Notes)] mode: FormatMode,
) {
    for text in SAMPLES {
        let formatted = formatter.format(text, mode);
        for group in formatter.parse(&formatted, mode) {
            if group.is_passthrough(formatter.fences()) {
                continue;
            }
            let ranks: Vec<u32> = group
                .lines
                .iter()
                .map(|l| formatter.classifier().rank(l))
                .collect();
            assert!(
                ranks.windows(2).all(|w| w[0] <= w[1]),
                "ranks {ranks:?} out of order for {text:?}"
            );
        }
    }
}

#[rstest]
fn equal_ranks_keep_input_order(formatter: Formatter) {
    assert_eq!(
        formatter.format("+ 1\n- 1\n+ 2\n> 1\n- 2\n+ 3\n> 2", FormatMode::Todo),
        "> 1\n> 2\n- 1\n- 2\n+ 1\n+ 2\n+ 3\n"
    );
}

#[rstest]
fn fenced_content_is_byte_identical(formatter: Formatter) {
    let fenced = "```\n  + keep   spacing\n- and order\n\n\t> tabs\n```";
    let text = format!("- before\n{fenced}\n+ after");
    for mode in [FormatMode::Todo, FormatMode::Notes] {
        let formatted = formatter.format(&text, mode);
        assert!(
            formatted.contains(fenced),
            "{mode:?} output lost the fence: {formatted:?}"
        );
    }
}

#[rstest]
fn plain_text_round_trips(formatter: Formatter) {
    let text = "alpha\nbeta gamma\ndelta";
    assert_eq!(formatter.format(text, FormatMode::Notes), text);
    assert_eq!(formatter.format(text, FormatMode::Todo), format!("{text}\n"));
    assert_eq!(formatter.parse(text, FormatMode::Todo).len(), 1);
}

#[rstest]
#[case::priority_order("+ b\n- a\n> c", FormatMode::Todo, "> c\n- a\n+ b\n")]
#[case::groups_split_by_blank("- a\n+ b\n\n> c\n- d", FormatMode::Todo, "- a\n+ b\n\n> c\n- d\n")]
#[case::glued_bullet("- x\n-y", FormatMode::Todo, "- x\n- y\n")]
#[case::fence("```\ncode here\n```", FormatMode::Todo, "```\ncode here\n```\n")]
#[case::heading("title\n---", FormatMode::Todo, "title\n-----\n")]
#[case::fence_after_text_starts_own_group(
    "title\n```\nx\n```",
    FormatMode::Todo,
    "title\n\n```\nx\n```\n"
)]
#[case::strip_whitespace("  + a  \n\t- b", FormatMode::Notes, "- b\n+ a")]
#[case::notes_blank_runs("notes\n\n\n\nmore", FormatMode::Notes, "notes\n\nmore")]
#[case::rule_after_blank_is_kept("- a\n\n---", FormatMode::Notes, "- a\n\n---")]
#[case::empty_todo("", FormatMode::Todo, "\n")]
#[case::empty_notes("", FormatMode::Notes, "")]
fn scenarios(
    formatter: Formatter,
    #[case] text: &str,
    #[case] mode: FormatMode,
    #[case] expected: &str,
) {
    assert_eq!(formatter.format(text, mode), expected);
}
