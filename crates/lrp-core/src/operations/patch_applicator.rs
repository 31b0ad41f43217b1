use crate::operations::file_operations::{read_file_content, write_file_atomic};
use crate::report::RangeReport;
use crate::splice::{splice_block, split_lines};
use crate::types::{BlockSource, LinePatch};
use anyhow::Result;
use log::debug;

pub fn apply_patch(patch: &LinePatch, dry_run: bool) -> Result<String> {
    let path = &patch.target;
    println!("--- Applying patch to: {:?}", path);

    let content = read_file_content(path)?;
    let lines = split_lines(&content);
    debug!("Loaded {} lines from {:?}", lines.len(), path);

    let block = resolve_block(&patch.block)?;

    let report = RangeReport::new(&lines, patch.range);
    for line in report.render() {
        println!("{}", line);
    }

    let new_lines = splice_block(&lines, patch.range, &block)?;
    debug!(
        "Document goes from {} to {} lines",
        lines.len(),
        new_lines.len()
    );

    if dry_run {
        Ok("    [DRY RUN] Patch would be applied successfully.".to_string())
    } else {
        write_file_atomic(path, &new_lines.concat())?;
        Ok("    [SUCCESS] Patch applied.".to_string())
    }
}

pub fn resolve_block(source: &BlockSource) -> Result<String> {
    match source {
        BlockSource::File(path) => read_file_content(path),
        BlockSource::Inline(text) => Ok(text.clone()),
    }
}
