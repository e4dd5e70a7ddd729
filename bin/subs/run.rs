use std::path::Path;

use crate::subs::runnable::RunnableSubcommand;
use anyhow::Result;
use clap::Parser;
use itertools::Itertools;
use serde::Serialize;
use sizegraph::curve::JsonCurveStore;
use sizegraph::graphset;
use sizegraph::sizefmt::format_size;
use sizegraph::stats::SequenceStats;

pb_create!();

#[derive(Parser)]
#[command(author, version, about = "Recompute every configured graph", long_about = None)]
pub struct Run {
    #[clap(long, short, help = "Graph set toml file")]
    config: String,

    #[clap(long, short, help = "Curve output directory")]
    output: String,

    #[clap(long, short, help = "Run report path")]
    report: Option<String>,
}

#[derive(Serialize)]
struct RunReport {
    generated: String,
    graphs: Vec<GraphReport>,
}

#[derive(Serialize)]
struct GraphReport {
    name: String,
    filepath: String,
    error: Option<String>,
    stats: Option<SequenceStats>,
}

#[async_trait::async_trait]
impl RunnableSubcommand for Run {
    async fn run(&self) -> Result<()> {
        pb_set_print!();

        let graph_set = graphset::load_graph_set(&self.config)?;
        let mut store = JsonCurveStore::new(Path::new(&self.output))?;

        info!("Building registry from {}", self.config);
        let mut registry = graph_set.build_registry(&mut store)?;

        pb_set_length!(registry.len());
        let outcomes = registry.run_all(&mut store, |_outcome| {
            pb_inc!();
        });
        pb_done!();

        for outcome in &outcomes {
            match &outcome.result {
                Ok(stats) if stats.has_matches() => {
                    println!(
                        "{}: {} frames, range {:04}-{:04}, sizes {} - {}",
                        outcome.name,
                        stats.matched_files,
                        stats.min_frame,
                        stats.max_frame,
                        format_size(stats.min_size),
                        format_size(stats.max_size)
                    );
                }
                Ok(_) => {
                    println!("{}: no matching files", outcome.name);
                }
                Err(why) => {
                    println!("{}: failed ({})", outcome.name, why);
                }
            }
        }

        let failed: Vec<&str> = outcomes
            .iter()
            .filter(|outcome| outcome.result.is_err())
            .map(|outcome| outcome.name.as_str())
            .collect();
        if !failed.is_empty() {
            warn!(
                "{} of {} graphs failed: {}",
                failed.len(),
                outcomes.len(),
                failed.iter().join(", ")
            );
        }

        if let Some(report_path) = &self.report {
            let report = RunReport {
                generated: chrono::Utc::now().to_rfc3339(),
                graphs: outcomes
                    .iter()
                    .map(|outcome| GraphReport {
                        name: outcome.name.clone(),
                        filepath: outcome.filepath.display().to_string(),
                        error: outcome.result.as_ref().err().map(|why| why.to_string()),
                        stats: outcome.result.as_ref().ok().cloned(),
                    })
                    .collect(),
            };
            std::fs::write(report_path, serde_json::to_string_pretty(&report)?)?;
            info!("Wrote run report to {}", report_path);
        }

        Ok(())
    }
}
