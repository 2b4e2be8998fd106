use crate::mode::FormatMode;

use super::{classify::LineClassifier, fence::Fences, grouper::Group};

/// Sorts each group by rank and joins the groups back into text.
pub fn render(
    classifier: &LineClassifier,
    fences: &Fences,
    groups: &[Group<'_>],
    mode: FormatMode,
) -> String {
    let rendered: Vec<String> = groups
        .iter()
        .map(|group| render_group(classifier, fences, group))
        .collect();

    let mut out = rendered.join(mode.group_separator());
    out.push_str(mode.ending());
    out
}

fn render_group(classifier: &LineClassifier, fences: &Fences, group: &Group<'_>) -> String {
    if group.is_passthrough(fences) {
        return group.lines.join("\n");
    }

    let mut decorated: Vec<(u32, &str)> = group
        .lines
        .iter()
        .map(|line| (classifier.rank(line), line.as_ref()))
        .collect();
    // sort_by_key is stable: equal ranks keep their input order.
    decorated.sort_by_key(|&(rank, _)| rank);

    decorated
        .into_iter()
        .map(|(_, line)| line)
        .collect::<Vec<_>>()
        .join("\n")
}
