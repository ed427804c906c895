//! VideoGrid construction and direct concatenation.

use crate::helpers::*;
use videogrid::prelude::*;
use videogrid::ConcatOptions;

#[test]
fn test_default_grid_registers_all_nodes() {
    let grid = test_grid();

    assert_eq!(grid.registry().len(), 3);
    assert!(grid.registry().has_type(HORIZONTAL_NODE_ID));
    assert!(grid.registry().has_type(VERTICAL_NODE_ID));
    assert!(grid.registry().has_type(LEGACY_HORIZONTAL_NODE_ID));
    assert!(!grid.options().parallel);
}

#[test]
fn test_grid_without_legacy_nodes() {
    let grid = VideoGrid::builder().legacy_nodes(false).build().unwrap();

    let ids: Vec<&str> = grid.descriptors().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec![HORIZONTAL_NODE_ID, VERTICAL_NODE_ID]);
    assert!(grid.descriptors().iter().all(|d| d.category == "Video Grid"));
}

#[test]
fn test_invalid_options_rejected() {
    let result = VideoGrid::builder()
        .parallel(true)
        .min_parallel_frames(0)
        .build();
    assert!(matches!(result, Err(Error::Core(_))));

    let result = VideoGrid::builder()
        .options(ConcatOptions {
            parallel: false,
            min_parallel_frames: 0,
        })
        .build();
    assert!(result.is_err());
}

#[test]
fn test_direct_concat_horizontal() {
    let grid = test_grid();
    let left = tagged_batch((3, 4, 5, 3), 1);
    let right = tagged_batch((3, 4, 2, 3), 2);

    let out = grid.concat_horizontal(&left, &right).unwrap();
    assert_eq!(out.shape().as_tuple(), (3, 4, 7, 3));
    assert_frames_joined(&out, &left, &right, Direction::Horizontal);
}

#[test]
fn test_direct_concat_vertical() {
    let grid = test_grid();
    let top = tagged_batch((3, 4, 5, 4), 1);
    let bottom = tagged_batch((3, 6, 5, 4), 2);

    let out = grid.concat_vertical(&top, &bottom).unwrap();
    assert_eq!(out.shape().as_tuple(), (3, 10, 5, 4));
    assert_frames_joined(&out, &top, &bottom, Direction::Vertical);
}

#[test]
fn test_direct_concat_mismatch_is_validation_error() {
    let grid = test_grid();
    let left = FrameBatch::zeros(REFERENCE_SHAPE);
    let right = FrameBatch::zeros((2, 150, 200, 3));

    match grid.concat_horizontal(&left, &right) {
        Err(Error::Validation(err)) => {
            assert_eq!(err.to_string(), "Height mismatch for horizontal stacking: 100 vs 150");
        }
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn test_node_and_direct_mismatch_agree() {
    let grid = test_grid();
    let left = FrameBatch::zeros(REFERENCE_SHAPE);
    let right = FrameBatch::zeros((2, 150, 200, 3));

    let direct = grid.concat_horizontal(&left, &right).unwrap_err();
    let via_node = grid
        .execute(
            HORIZONTAL_NODE_ID,
            &inputs! { "images_left" => &left, "images_right" => &right },
        )
        .unwrap_err();

    match (direct, via_node) {
        (Error::Validation(a), Error::Validation(b)) => assert_eq!(a, b),
        other => panic!("Expected two validation errors, got {other:?}"),
    }
}

#[test]
fn test_into_registry_hands_over_nodes() {
    let registry = test_grid().into_registry();
    assert_eq!(registry.list_types().len(), 3);
}
