//! Plain-text rendering of runs.

use crate::domain::Run;
use std::borrow::Cow;

/// Render one run: the bare text for a single occurrence, `text (×N)` otherwise.
pub fn render_run(run: &Run) -> Cow<'_, str> {
    if run.count == 1 {
        Cow::Borrowed(run.text.as_str())
    } else {
        Cow::Owned(format!("{} (×{})", run.text, run.count))
    }
}

/// Render all runs joined with `\n`. No newline is appended after the last run.
pub fn render_runs(runs: &[Run]) -> String {
    runs.iter().map(render_run).collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::{render_run, render_runs};
    use crate::domain::Run;

    #[test]
    fn single_occurrence_has_no_suffix() {
        assert_eq!(render_run(&Run::new("foo")), "foo");
    }

    #[test]
    fn repeated_run_gets_count_suffix() {
        let run = Run { text: "foo".to_string(), count: 12 };
        assert_eq!(render_run(&run), "foo (×12)");
    }

    #[test]
    fn repeated_empty_line_keeps_suffix() {
        let run = Run { text: String::new(), count: 3 };
        assert_eq!(render_run(&run), " (×3)");
    }

    #[test]
    fn runs_join_without_trailing_newline() {
        let runs = vec![
            Run { text: "foo".to_string(), count: 2 },
            Run::new("bar"),
            Run::new(""),
        ];
        similar_asserts::assert_eq!(render_runs(&runs), "foo (×2)\nbar\n");
    }

    #[test]
    fn no_runs_render_to_empty_string() {
        assert_eq!(render_runs(&[]), "");
    }
}
