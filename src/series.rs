use crate::curve::CurvePoint;
use crate::scanning::SequenceScan;
use crate::stats::SequenceStats;

/// Size value marking an expected frame file that is absent on disk.
pub const MISSING_FRAME: f64 = -1.0;

/// Dense per-frame size series covering every integer frame in
/// `0..=max_frame`, missing frames holding the sentinel.
#[derive(Debug, Clone)]
pub struct FrameSeries {
    pub values: Vec<f64>,
    pub stats: SequenceStats,
}

impl FrameSeries {
    /// Fills the gaps in a scan. The dense range always starts at frame 0,
    /// even when the sequence itself starts later.
    pub fn from_scan(scan: SequenceScan) -> Self {
        let mut values = vec![MISSING_FRAME; scan.stats.max_frame + 1];
        for (frame, size) in scan.frames {
            values[frame] = size as f64;
        }

        FrameSeries {
            values,
            stats: scan.stats,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Emits the series in ascending frame order, one point per frame,
    /// with the frame index on x and the size on z. Real sizes are scaled
    /// to a 0-100 range against the largest observed size; sentinel
    /// entries stay exactly at the sentinel value. When `max_size` is 0
    /// the raw size is passed through unscaled.
    pub fn curve_points(&self) -> Vec<CurvePoint> {
        self.values
            .iter()
            .enumerate()
            .map(|(frame, &size)| {
                let z = if size == MISSING_FRAME {
                    MISSING_FRAME
                } else if self.stats.max_size != 0.0 {
                    size / self.stats.max_size * 100.0
                } else {
                    size
                };

                CurvePoint {
                    x: frame as f64,
                    z,
                }
            })
            .collect()
    }
}
