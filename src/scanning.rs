use std::collections::BTreeMap;
use std::fs;

use crate::error::{SizeGraphError, SizeGraphResult};
use crate::pattern::{split_frame_name, SequenceDescriptor};
use crate::stats::SequenceStats;

/// Raw collector output: sizes keyed by matched frame index, plus the
/// running statistics over the matched set only.
#[derive(Debug, Clone, Default)]
pub struct SequenceScan {
    pub frames: BTreeMap<usize, u64>,
    pub stats: SequenceStats,
}

/// Lists the descriptor's directory once, non-recursively, and records the
/// on-disk size of every entry whose derived pattern equals the
/// descriptor's. Entries that fail to parse or that belong to a different
/// sequence are skipped, never fatal. A directory that cannot be listed at
/// all is an error scoped to this one sequence.
pub fn scan_sequence(descriptor: &SequenceDescriptor) -> SizeGraphResult<SequenceScan> {
    let listing =
        fs::read_dir(&descriptor.directory).map_err(|_| SizeGraphError::DirectoryNotFound {
            path: descriptor.directory.clone(),
        })?;

    let mut scan = SequenceScan::default();

    for entry in listing {
        let entry = match entry {
            Ok(entry) => entry,
            Err(why) => {
                warn!("Failed to read directory entry: {}", why);
                continue;
            }
        };

        let file_name = entry.file_name().to_string_lossy().to_string();

        let (pattern, _, frame_index) = match split_frame_name(&file_name) {
            Ok(parts) => parts,
            Err(_) => {
                vprintln!("Could not parse file {}", file_name);
                continue;
            }
        };

        if pattern != descriptor.pattern {
            vprintln!("Skipping {}: not a member of {}", file_name, descriptor.pattern);
            continue;
        }

        let size = match entry.metadata() {
            Ok(metadata) => metadata.len(),
            Err(why) => {
                warn!("Failed to stat {}: {}", file_name, why);
                continue;
            }
        };

        scan.stats.record(frame_index, size);
        scan.frames.insert(frame_index, size);
    }

    Ok(scan)
}
