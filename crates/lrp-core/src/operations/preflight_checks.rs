use crate::operations::file_operations::is_read_only;
use crate::splice::{split_lines, validate_range};
use crate::types::{BlockSource, LinePatch};
use std::fs;

pub fn run_preflight_checks(patches: &[LinePatch]) -> Result<(), Vec<String>> {
    println!("--- Running Preflight Checks ---");
    let mut errors = Vec::new();

    for (i, patch) in patches.iter().enumerate() {
        let prefix = format!("  - Patch #{} for '{:?}':", i + 1, patch.target);

        if !patch.target.exists() {
            errors.push(format!("{} FAILED (Target file not found)", prefix));
            continue;
        }

        if let Ok(true) = is_read_only(&patch.target) {
            errors.push(format!("{} FAILED (Target file is read-only)", prefix));
            continue;
        }

        if let BlockSource::File(block_path) = &patch.block {
            if !block_path.exists() {
                errors.push(format!(
                    "{} FAILED (Block file '{:?}' not found)",
                    prefix, block_path
                ));
                continue;
            }
        }

        match fs::read_to_string(&patch.target) {
            Ok(content) => {
                let line_count = split_lines(&content).len();
                match validate_range(patch.range, line_count) {
                    Ok(()) => {
                        if patch.range.is_insertion() {
                            println!(
                                "{} OK (Insert before line {} of {})",
                                prefix,
                                patch.range.start + 1,
                                line_count
                            );
                        } else {
                            println!(
                                "{} OK (Replace lines {} to {} of {})",
                                prefix,
                                patch.range.start + 1,
                                patch.range.end,
                                line_count
                            );
                        }
                    }
                    Err(e) => {
                        errors.push(format!("{} FAILED ({})", prefix, e));
                    }
                }
            }
            Err(e) => {
                errors.push(format!("{} FAILED (Could not read file: {})", prefix, e));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
