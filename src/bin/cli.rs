use anyhow::Result;
use colored::Colorize;
use std::path::PathBuf;
use structopt::StructOpt;

use analyst::analysis::payload::load_payload;
use analyst::core::config::DashboardConfig;
use analyst::dashboard::{render_dashboard, ExpandedSections};
use analyst::utils::terminal::print_blocks;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "analyst-cli",
    about = "Render AI-generated filing analyses in the terminal"
)]
struct Opt {
    /// Analysis payload JSON file; defaults to <data_dir>/analysis.json
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Expand only the named sections (exact section names)
    #[structopt(short, long)]
    section: Vec<String>,

    /// Expand every section
    #[structopt(short, long)]
    all: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let opt = Opt::from_args();
    let config = DashboardConfig::from_env()?;

    let path = opt
        .input
        .unwrap_or_else(|| config.data_dir.join("analysis.json"));
    let payload = load_payload(&path)?;

    // Sections start collapsed; flags and env opt into expansion.
    let mut expanded = ExpandedSections::new();
    if opt.all || config.expand_all {
        expanded.expand_all(payload.sections.iter().map(|s| s.name.as_str()));
    }
    for name in &opt.section {
        expanded.toggle(name);
    }

    if let Some(company) = &payload.company {
        println!("{}", company.bold());
    }
    if let Some(generated_at) = &payload.generated_at {
        println!(
            "{}",
            format!("Generated {}", generated_at.format("%Y-%m-%d %H:%M UTC")).dimmed()
        );
    }
    println!();

    let blocks = render_dashboard(&payload.sections, &expanded)?;
    print_blocks(&blocks);

    Ok(())
}
