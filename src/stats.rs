use serde::Serialize;

/// Summary statistics for one scanned sequence. Size extremes start at
/// +infinity/zero and are only updated by real file sizes, so an empty
/// match set reports `min_size` as +infinity ("no data").
#[derive(Debug, Clone, Serialize)]
pub struct SequenceStats {
    pub matched_files: usize,
    pub min_frame: usize,
    pub max_frame: usize,
    pub min_size: f64,
    pub max_size: f64,
}

impl Default for SequenceStats {
    fn default() -> Self {
        SequenceStats {
            matched_files: 0,
            min_frame: usize::MAX,
            max_frame: 0,
            min_size: f64::INFINITY,
            max_size: 0.0,
        }
    }
}

impl SequenceStats {
    pub fn record(&mut self, frame: usize, size: u64) {
        self.matched_files += 1;

        if frame < self.min_frame {
            self.min_frame = frame;
        }
        if frame > self.max_frame {
            self.max_frame = frame;
        }

        let size = size as f64;
        if size < self.min_size {
            self.min_size = size;
        }
        if size > self.max_size {
            self.max_size = size;
        }
    }

    pub fn has_matches(&self) -> bool {
        self.matched_files > 0
    }
}
