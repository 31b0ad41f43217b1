use anyhow::{bail, Context, Result};
use clap::Parser;
use lrp_core::{apply_patch, load_plan, run_preflight_checks, BlockSource, LinePatch, PatchRange};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "lrp",
    version,
    about = "Replace a line range in a text file with a block of text"
)]
struct Args {
    /// File to patch
    #[arg(required_unless_present = "plan")]
    target: Option<PathBuf>,

    /// File holding the replacement block, or '-' to read it from stdin
    #[arg(required_unless_present = "plan")]
    block: Option<String>,

    /// First line of the range to replace (zero-based)
    #[arg(required_unless_present = "plan")]
    start: Option<usize>,

    /// One past the last line of the range (zero-based, half-open)
    #[arg(required_unless_present = "plan")]
    end: Option<usize>,

    /// TOML plan listing the patches to apply
    #[arg(long, conflicts_with_all = ["target", "block", "start", "end"])]
    plan: Option<PathBuf>,

    /// Run preflight and print diagnostics without writing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let patches = match collect_patches(&args) {
        Ok(patches) => patches,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            process::exit(1);
        }
    };

    match run_preflight_checks(&patches) {
        Ok(_) => println!("\n--- Preflight Checks Passed. Proceeding with patching. ---"),
        Err(errors) => {
            println!("\n--- Preflight Checks Failed ---");
            for err in errors {
                println!("{}", err);
            }
            println!("\nAborting. No files were modified.");
            process::exit(1);
        }
    }

    let mut success_count = 0;
    let mut fail_count = 0;

    for patch in &patches {
        match apply_patch(patch, args.dry_run) {
            Ok(msg) => {
                println!("{}", msg);
                success_count += 1;
            }
            Err(e) => {
                println!("    [ERROR] {:#}", e);
                fail_count += 1;
            }
        }
    }

    println!("\n--- Summary ---");
    println!("Total patches:        {}", patches.len());
    println!("Successfully applied: {}", success_count);
    println!("Failed to apply:      {}", fail_count);

    if fail_count > 0 {
        process::exit(1);
    }

    Ok(())
}

fn collect_patches(args: &Args) -> Result<Vec<LinePatch>> {
    if let Some(plan_path) = &args.plan {
        return load_plan(plan_path);
    }

    // clap enforces presence of the positionals when --plan is absent
    let target = args.target.clone().context("TARGET is required")?;
    let block_arg = args.block.clone().context("BLOCK is required")?;
    let start = args.start.context("START is required")?;
    let end = args.end.context("END is required")?;

    let block = if block_arg == "-" {
        if atty::is(atty::Stream::Stdin) {
            bail!("Block is '-' but no data is piped from stdin");
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read block from stdin")?;
        BlockSource::Inline(buffer)
    } else {
        BlockSource::File(PathBuf::from(block_arg))
    };

    Ok(vec![LinePatch {
        target,
        block,
        range: PatchRange::new(start, end),
    }])
}
