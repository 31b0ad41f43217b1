pub mod operations;
pub mod plan;
pub mod report;
pub mod splice;
pub mod types;

pub use operations::{apply_patch, run_preflight_checks};
pub use plan::{load_plan, parse_plan};
pub use report::RangeReport;
pub use splice::{splice_block, split_lines};
pub use types::{BlockSource, LinePatch, PatchRange};
