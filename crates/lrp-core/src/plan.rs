use crate::types::{BlockSource, LinePatch, PatchRange};
use anyhow::{bail, Context, Result};
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct PlanFile {
    #[serde(default, rename = "patch")]
    patches: Vec<PlanEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PlanEntry {
    target: PathBuf,
    block: Option<PathBuf>,
    text: Option<String>,
    start: usize,
    end: usize,
}

pub fn load_plan(path: &Path) -> Result<Vec<LinePatch>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read plan file: {:?}", path))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    let patches = parse_plan(&content, base_dir)
        .with_context(|| format!("Invalid plan file: {:?}", path))?;
    info!("Loaded {} patch(es) from {:?}", patches.len(), path);
    Ok(patches)
}

/// Relative paths in the plan are resolved against the plan file's directory.
pub fn parse_plan(content: &str, base_dir: &Path) -> Result<Vec<LinePatch>> {
    let plan: PlanFile = toml::from_str(content).context("Failed to parse TOML")?;

    if plan.patches.is_empty() {
        bail!("Plan contains no [[patch]] entries");
    }

    let mut patches = Vec::with_capacity(plan.patches.len());
    for (i, entry) in plan.patches.into_iter().enumerate() {
        let block = match (entry.block, entry.text) {
            (Some(path), None) => BlockSource::File(resolve(base_dir, &path)),
            (None, Some(text)) => BlockSource::Inline(text),
            (Some(_), Some(_)) => {
                bail!("Patch #{} sets both 'block' and 'text'", i + 1)
            }
            (None, None) => {
                bail!("Patch #{} sets neither 'block' nor 'text'", i + 1)
            }
        };

        patches.push(LinePatch {
            target: resolve(base_dir, &entry.target),
            block,
            range: PatchRange::new(entry.start, entry.end),
        });
    }

    Ok(patches)
}

fn resolve(base_dir: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_block_and_text_entries() {
        let content = r#"
[[patch]]
target = "grid_bot.js"
block = "new_block.js"
start = 2239
end = 2873

[[patch]]
target = "/abs/other.txt"
text = "inline replacement\n"
start = 0
end = 0
"#;
        let patches = parse_plan(content, Path::new("/plans")).unwrap();
        assert_eq!(patches.len(), 2);

        assert_eq!(patches[0].target, PathBuf::from("/plans/grid_bot.js"));
        assert_eq!(
            patches[0].block,
            BlockSource::File(PathBuf::from("/plans/new_block.js"))
        );
        assert_eq!(patches[0].range, PatchRange::new(2239, 2873));

        assert_eq!(patches[1].target, PathBuf::from("/abs/other.txt"));
        assert_eq!(
            patches[1].block,
            BlockSource::Inline("inline replacement\n".to_string())
        );
        assert!(patches[1].range.is_insertion());
    }

    #[test]
    fn test_parse_plan_rejects_ambiguous_entry() {
        let content = r#"
[[patch]]
target = "a.txt"
block = "b.txt"
text = "also inline"
start = 0
end = 1
"#;
        let err = parse_plan(content, Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("both 'block' and 'text'"));
    }

    #[test]
    fn test_parse_plan_rejects_missing_block() {
        let content = r#"
[[patch]]
target = "a.txt"
start = 0
end = 1
"#;
        let err = parse_plan(content, Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("neither 'block' nor 'text'"));
    }

    #[test]
    fn test_parse_plan_rejects_empty_plan() {
        let err = parse_plan("", Path::new(".")).unwrap_err();
        assert!(err.to_string().contains("no [[patch]] entries"));
    }

    #[test]
    fn test_parse_plan_rejects_unknown_fields() {
        let content = r#"
[[patch]]
target = "a.txt"
text = "x"
start = 0
end = 1
lines = 5
"#;
        assert!(parse_plan(content, Path::new(".")).is_err());
    }

    #[test]
    fn test_load_plan_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_plan(&dir.path().join("absent.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read plan file"));
    }
}
