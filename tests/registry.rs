mod common;

use std::path::PathBuf;

use anyhow::Result;
use common::TestDir;
use sizegraph::curve::{CurvePoint, CurveStore, MemoryCurveStore};
use sizegraph::registry::GraphRegistry;
use sizegraph::series::MISSING_FRAME;

#[test]
fn test_auto_names_fill_first_unused_slot() -> Result<()> {
    let mut store = MemoryCurveStore::new();
    let mut registry = GraphRegistry::default();

    let a = registry.add(PathBuf::from("/tmp/a.0001.png"), &mut store)?;
    let b = registry.add(PathBuf::from("/tmp/b.0001.png"), &mut store)?;
    let c = registry.add(PathBuf::from("/tmp/c.0001.png"), &mut store)?;
    assert_eq!(a, "Graph");
    assert_eq!(b, "Graph.001");
    assert_eq!(c, "Graph.002");
    assert!(store.contains("Graph.001"));

    // Removing the middle entry frees its slot for the next add.
    registry.remove(1, &mut store)?;
    assert!(!store.contains("Graph.001"));

    let d = registry.add(PathBuf::from("/tmp/d.0001.png"), &mut store)?;
    assert_eq!(d, "Graph.001");
    Ok(())
}

#[test]
fn test_duplicate_names_are_rejected() -> Result<()> {
    let mut store = MemoryCurveStore::new();
    let mut registry = GraphRegistry::default();

    registry.add_named("beauty", PathBuf::from("/tmp/a.0001.png"), &mut store)?;
    assert!(registry
        .add_named("beauty", PathBuf::from("/tmp/b.0001.png"), &mut store)
        .is_err());
    Ok(())
}

#[test]
fn test_rename_propagates_to_store() -> Result<()> {
    let mut store = MemoryCurveStore::new();
    let mut registry = GraphRegistry::default();

    registry.add(PathBuf::from("/tmp/a.0001.png"), &mut store)?;
    let points = vec![
        CurvePoint { x: 0.0, z: 50.0 },
        CurvePoint { x: 1.0, z: 100.0 },
    ];
    store.replace_points("Graph", &points)?;

    registry.rename(0, "Sequence_A", &mut store)?;

    assert!(!store.contains("Graph"));
    assert_eq!(store.points("Sequence_A"), Some(points));
    assert_eq!(registry.get(0).map(|entry| entry.name.as_str()), Some("Sequence_A"));
    Ok(())
}

#[test]
fn test_rename_without_curve_ensures_one() -> Result<()> {
    let mut store = MemoryCurveStore::new();
    store.rename("absent", "fresh")?;
    assert!(store.contains("fresh"));
    assert_eq!(store.points("fresh"), Some(vec![]));
    Ok(())
}

#[test]
fn test_run_all_isolates_failing_entries() -> Result<()> {
    let dir = TestDir::create("registry-run")?;
    dir.write_file("render.0001.png", 100)?;
    dir.write_file("render.0003.png", 200)?;

    let mut store = MemoryCurveStore::new();
    let mut registry = GraphRegistry::default();
    registry.add_named("good", dir.join("render.0001.png"), &mut store)?;
    registry.add_named(
        "lost",
        PathBuf::from("/nonexistent-sizegraph/render.0001.png"),
        &mut store,
    )?;

    let outcomes = registry.run_all(&mut store, |_outcome| {});

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].result.is_ok());
    assert!(outcomes[1].result.is_err());

    // The failing entry still has an (empty) curve object.
    assert!(store.contains("lost"));
    assert_eq!(store.points("lost"), Some(vec![]));

    let good_points = store.points("good").expect("curve should exist");
    assert_eq!(good_points.len(), 4);
    assert_eq!(good_points[0].z, MISSING_FRAME);
    assert_eq!(good_points[3].z, 100.0);

    // Stats are written back onto the entry that succeeded.
    assert_eq!(registry.get(0).map(|entry| entry.stats.matched_files), Some(2));
    Ok(())
}
