use std::path::Path;

use anyhow::Result;
use clap::Parser;
use sizegraph::pattern::SequenceDescriptor;

use crate::subs::runnable::RunnableSubcommand;

#[derive(Parser)]
#[command(author, version, about = "Print the naming pattern derived from a file", long_about = None)]
pub struct Pattern {
    #[clap(long, short, help = "File name or path")]
    input: String,
}

#[async_trait::async_trait]
impl RunnableSubcommand for Pattern {
    async fn run(&self) -> Result<()> {
        let descriptor = SequenceDescriptor::from_path(Path::new(&self.input))?;
        println!("Directory: {}", descriptor.directory.display());
        println!("Pattern: {}", descriptor.pattern);
        println!("Padding: {}", descriptor.padding);
        println!("Frame index: {}", descriptor.frame_index);
        Ok(())
    }
}
