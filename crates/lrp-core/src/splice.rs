use crate::types::PatchRange;
use anyhow::{anyhow, Result};

pub fn split_lines(content: &str) -> Vec<String> {
    content
        .split_inclusive('\n')
        .map(|s| s.to_string())
        .collect()
}

/// Replaces `range` with a single element holding the whole block plus a
/// trailing newline. Lines outside the range are carried over untouched.
pub fn splice_block(lines: &[String], range: PatchRange, block: &str) -> Result<Vec<String>> {
    validate_range(range, lines.len())?;

    let mut new_lines = Vec::with_capacity(lines.len() - range.removed_len() + 1);
    new_lines.extend_from_slice(&lines[..range.start]);
    new_lines.push(format!("{}\n", block));
    new_lines.extend_from_slice(&lines[range.end..]);
    Ok(new_lines)
}

pub fn validate_range(range: PatchRange, line_count: usize) -> Result<()> {
    if range.start > range.end {
        return Err(anyhow!(
            "Range start {} is past range end {}",
            range.start,
            range.end
        ));
    }
    if range.end > line_count {
        return Err(anyhow!(
            "Range end {} exceeds document length {}",
            range.end,
            line_count
        ));
    }
    Ok(())
}
