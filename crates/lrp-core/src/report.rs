use crate::types::PatchRange;

/// Advisory snapshot of what a splice is about to remove. Printed before
/// every write for manual verification; never gates anything.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeReport {
    pub total_lines: usize,
    pub range: PatchRange,
    pub first_removed: Option<String>,
    pub last_removed: Option<String>,
    pub following: Option<String>,
}

impl RangeReport {
    pub fn new(lines: &[String], range: PatchRange) -> Self {
        let trimmed = |idx: usize| lines.get(idx).map(|s| s.trim().to_string());

        let (first_removed, last_removed) = if range.is_insertion() {
            (None, None)
        } else {
            (trimmed(range.start), trimmed(range.end.saturating_sub(1)))
        };

        Self {
            total_lines: lines.len(),
            range,
            first_removed,
            last_removed,
            following: trimmed(range.end),
        }
    }

    pub fn render(&self) -> Vec<String> {
        let mut out = Vec::new();
        out.push(format!("Total lines: {}", self.total_lines));

        if self.range.is_insertion() {
            out.push(format!(
                "Inserting before line {} (no lines removed)",
                self.range.start + 1
            ));
        } else {
            out.push(format!(
                "Removing lines {} to {}:",
                self.range.start + 1,
                self.range.end
            ));
            out.push(format!(
                "Start line content: {}",
                self.first_removed.as_deref().unwrap_or("<out of range>")
            ));
            out.push(format!(
                "End line content: {}",
                self.last_removed.as_deref().unwrap_or("<out of range>")
            ));
        }

        out.push(format!(
            "Next line content: {}",
            self.following.as_deref().unwrap_or("<end of file>")
        ));
        out
    }
}
