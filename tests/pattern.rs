use std::path::Path;

use anyhow::Result;
use sizegraph::error::SizeGraphError;
use sizegraph::pattern::{split_frame_name, SequenceDescriptor};

#[test]
fn test_last_digit_run_is_the_frame_number() -> Result<()> {
    let (pattern, padding, frame) = split_frame_name("shot02_beauty.0153.png")?;
    assert_eq!(pattern, "shot02_beauty.{4}.png");
    assert_eq!(padding, 4);
    assert_eq!(frame, 153);
    Ok(())
}

#[test]
fn test_padding_follows_run_width() -> Result<()> {
    let (pattern, padding, frame) = split_frame_name("render.012.exr")?;
    assert_eq!(pattern, "render.{3}.exr");
    assert_eq!(padding, 3);
    assert_eq!(frame, 12);
    Ok(())
}

#[test]
fn test_round_trip_reconstruction() -> Result<()> {
    let descriptor = SequenceDescriptor::from_path(Path::new("/renders/beauty/render.0007.png"))?;
    assert_eq!(descriptor.frame_filename(123), "render.0123.png");

    let (pattern, _, frame) = split_frame_name(&descriptor.frame_filename(42))?;
    assert_eq!(pattern, descriptor.pattern);
    assert_eq!(frame, 42);
    Ok(())
}

#[test]
fn test_first_textual_occurrence_is_replaced() -> Result<()> {
    // The rightmost run selects the frame number, but when the same digit
    // string occurs earlier in the name, the earlier occurrence gets the
    // placeholder.
    let (pattern, _, frame) = split_frame_name("v12_comp.12.png")?;
    assert_eq!(pattern, "v{2}_comp.12.png");
    assert_eq!(frame, 12);
    Ok(())
}

#[test]
fn test_no_digits_is_an_error() {
    let result = split_frame_name("beauty.png");
    assert!(matches!(
        result,
        Err(SizeGraphError::NoFrameNumber { .. })
    ));
}

#[test]
fn test_descriptor_from_path() -> Result<()> {
    let descriptor = SequenceDescriptor::from_path(Path::new("/renders/beauty/render.0001.png"))?;
    assert_eq!(descriptor.directory, Path::new("/renders/beauty"));
    assert_eq!(descriptor.pattern, "render.{4}.png");
    assert_eq!(descriptor.padding, 4);
    assert_eq!(descriptor.frame_index, 1);
    Ok(())
}

#[test]
fn test_descriptor_from_bare_filename() -> Result<()> {
    let descriptor = SequenceDescriptor::from_path(Path::new("render.0001.png"))?;
    assert_eq!(descriptor.directory, Path::new(""));
    assert_eq!(descriptor.pattern, "render.{4}.png");
    Ok(())
}
