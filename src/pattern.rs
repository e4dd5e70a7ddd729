use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{SizeGraphError, SizeGraphResult};

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Naming pattern of a numbered file sequence, derived from one
/// representative member path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceDescriptor {
    pub directory: PathBuf,
    pub pattern: String,
    pub padding: usize,
    pub frame_index: usize,
}

/// Splits a filename into its naming pattern, frame number padding, and
/// frame index. The *last* (rightmost) run of decimal digits is the frame
/// number; its digit count becomes the padding and the run is replaced by
/// a `{padding}` placeholder to form the pattern.
///
/// The replacement targets the first textual occurrence of the digit run
/// substring, which is not necessarily the rightmost match when the same
/// digits appear earlier in the name.
pub fn split_frame_name(filename: &str) -> SizeGraphResult<(String, usize, usize)> {
    let run = DIGIT_RUN
        .find_iter(filename)
        .last()
        .ok_or_else(|| SizeGraphError::NoFrameNumber {
            filename: filename.to_owned(),
        })?;

    let digits = run.as_str();
    let padding = digits.len();
    let frame_index = digits
        .parse::<usize>()
        .map_err(|_| SizeGraphError::NoFrameNumber {
            filename: filename.to_owned(),
        })?;
    let pattern = filename.replacen(digits, &placeholder(padding), 1);

    Ok((pattern, padding, frame_index))
}

fn placeholder(padding: usize) -> String {
    format!("{{{}}}", padding)
}

impl SequenceDescriptor {
    pub fn from_path(filepath: &Path) -> SizeGraphResult<Self> {
        let filename = filepath
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| SizeGraphError::NoFrameNumber {
                filename: filepath.display().to_string(),
            })?;

        let (pattern, padding, frame_index) = split_frame_name(&filename)?;

        Ok(SequenceDescriptor {
            directory: filepath.parent().unwrap_or_else(|| Path::new("")).to_path_buf(),
            pattern,
            padding,
            frame_index,
        })
    }

    /// Reconstructs the filename of an arbitrary member frame by
    /// substituting the zero-padded index back into the placeholder.
    pub fn frame_filename(&self, frame: usize) -> String {
        self.pattern.replacen(
            &placeholder(self.padding),
            &format!("{:0width$}", frame, width = self.padding),
            1,
        )
    }
}
