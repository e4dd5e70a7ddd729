use std::path::Path;

use crate::subs::runnable::RunnableSubcommand;
use anyhow::Result;
use clap::Parser;
use sizegraph::curve::{JsonCurveStore, MemoryCurveStore};
use sizegraph::registry::visualize_sequence;
use sizegraph::sizefmt::format_size;

pb_create_spinner!();

#[derive(Parser)]
#[command(author, version, about = "Scan one sequence and report its size graph", long_about = None)]
pub struct Scan {
    #[clap(long, short, help = "Representative file in the sequence")]
    input: String,

    #[clap(long, short, help = "Curve output directory")]
    output: Option<String>,

    #[clap(long, short, help = "Curve name")]
    name: Option<String>,
}

#[async_trait::async_trait]
impl RunnableSubcommand for Scan {
    async fn run(&self) -> Result<()> {
        pb_set_print!();

        let name = self.name.clone().unwrap_or_else(|| "Graph".to_owned());
        let stats = if let Some(output) = &self.output {
            let mut store = JsonCurveStore::new(Path::new(output))?;
            visualize_sequence(&name, Path::new(&self.input), &mut store)?
        } else {
            let mut store = MemoryCurveStore::new();
            visualize_sequence(&name, Path::new(&self.input), &mut store)?
        };

        pb_done!();

        println!("Frames matched: {}", stats.matched_files);
        if stats.has_matches() {
            println!("Frame range: {:04}-{:04}", stats.min_frame, stats.max_frame);
            println!(
                "Sizes: {} - {}",
                format_size(stats.min_size),
                format_size(stats.max_size)
            );
        } else {
            println!("No files matched the sequence pattern");
        }
        Ok(())
    }
}
