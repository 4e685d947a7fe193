use std::fmt;

use crate::org::chart::model::EmployeeId;

use super::Hierarchy;

const LAST_BRANCH: &str = "\u{2514}\u{2500}";
const INNER_BRANCH: &str = "\u{251C}\u{2500}";
const LAST_INDENT: &str = "  ";
const INNER_INDENT: &str = "\u{2502} ";

/// One line of the rendered org chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartLine {
    /// Distance from the employee the rendering started at.
    pub depth: usize,
    /// Inherited indentation followed by the branch glyph.
    pub prefix: String,
    /// Employee name.
    pub name: String,
}

impl fmt::Display for ChartLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.name)
    }
}

struct Frame {
    position: usize,
    depth: usize,
    indent: String,
    is_last: bool,
}

impl Hierarchy {
    /// Depth-first, name-ordered rendering of the whole organisation.
    pub fn render(&self) -> Vec<ChartLine> {
        self.render_subtree(self.root)
    }

    /// Renders the subtree headed by the given employee.
    ///
    /// Returns `None` when the id is unknown or not reachable from the head.
    pub fn render_from(&self, id: EmployeeId) -> Option<Vec<ChartLine>> {
        self.reachable_position(id)
            .map(|position| self.render_subtree(position))
    }

    /// The whole chart as text, one newline-terminated line per employee.
    pub fn render_text(&self) -> String {
        lines_to_text(&self.render())
    }

    fn render_subtree(&self, start: usize) -> Vec<ChartLine> {
        let mut lines = Vec::new();
        let mut pending = vec![Frame {
            position: start,
            depth: 0,
            indent: String::new(),
            is_last: true,
        }];

        while let Some(frame) = pending.pop() {
            let record = &self.records[frame.position];
            let (branch, child_indent) = if frame.is_last {
                (LAST_BRANCH, LAST_INDENT)
            } else {
                (INNER_BRANCH, INNER_INDENT)
            };
            lines.push(ChartLine {
                depth: frame.depth,
                prefix: format!("{}{branch}", frame.indent),
                name: record.name.clone(),
            });

            let indent = format!("{}{child_indent}", frame.indent);
            let reports = self.report_positions(record.id);
            // Pushed in reverse so the first report by name is popped next.
            for (offset, &position) in reports.iter().enumerate().rev() {
                pending.push(Frame {
                    position,
                    depth: frame.depth + 1,
                    indent: indent.clone(),
                    is_last: offset + 1 == reports.len(),
                });
            }
        }

        lines
    }
}

/// Joins chart lines into text, terminating every line with `\n`.
pub(crate) fn lines_to_text(lines: &[ChartLine]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}
