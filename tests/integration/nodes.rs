//! Reference scenarios executed through the node registry, the way a host
//! invokes them.

use crate::helpers::*;
use videogrid::prelude::*;
use videogrid::{NodeError, ValidationError};

fn run_horizontal(
    grid: &VideoGrid,
    left: &FrameBatch,
    right: &FrameBatch,
) -> videogrid::Result<FrameBatch> {
    let mut outputs = grid.execute(
        HORIZONTAL_NODE_ID,
        &inputs! { "images_left" => left, "images_right" => right },
    )?;
    Ok(outputs.take("images").expect("missing output"))
}

fn run_vertical(
    grid: &VideoGrid,
    top: &FrameBatch,
    bottom: &FrameBatch,
) -> videogrid::Result<FrameBatch> {
    let mut outputs = grid.execute(
        VERTICAL_NODE_ID,
        &inputs! { "images_top" => top, "images_bottom" => bottom },
    )?;
    Ok(outputs.take("images").expect("missing output"))
}

fn validation_error(result: videogrid::Result<FrameBatch>) -> ValidationError {
    match result {
        Err(videogrid::Error::Validation(err)) => err,
        other => panic!("Expected validation error, got {other:?}"),
    }
}

#[test]
fn test_horizontal_equal_shapes() {
    let grid = test_grid();
    let out = run_horizontal(
        &grid,
        &FrameBatch::zeros(REFERENCE_SHAPE),
        &FrameBatch::zeros(REFERENCE_SHAPE),
    )
    .unwrap();
    assert_eq!(out.shape().as_tuple(), (2, 100, 400, 3));
}

#[test]
fn test_horizontal_frame_count_mismatch() {
    let grid = test_grid();
    let err = validation_error(run_horizontal(
        &grid,
        &FrameBatch::zeros(REFERENCE_SHAPE),
        &FrameBatch::zeros((3, 100, 200, 3)),
    ));
    assert!(matches!(
        err,
        ValidationError::FrameCount {
            first: 2,
            second: 3,
            ..
        }
    ));
}

#[test]
fn test_horizontal_height_mismatch() {
    let grid = test_grid();
    let err = validation_error(run_horizontal(
        &grid,
        &FrameBatch::zeros(REFERENCE_SHAPE),
        &FrameBatch::zeros((2, 150, 200, 3)),
    ));
    assert!(matches!(err, ValidationError::Height { .. }));
}

#[test]
fn test_horizontal_channel_mismatch() {
    let grid = test_grid();
    let err = validation_error(run_horizontal(
        &grid,
        &FrameBatch::zeros(REFERENCE_SHAPE),
        &FrameBatch::zeros((2, 100, 200, 4)),
    ));
    assert!(matches!(err, ValidationError::Channels { .. }));
}

#[test]
fn test_horizontal_width_is_free() {
    let grid = test_grid();
    let out = run_horizontal(
        &grid,
        &FrameBatch::zeros(REFERENCE_SHAPE),
        &FrameBatch::zeros((2, 100, 300, 3)),
    )
    .unwrap();
    assert_eq!(out.shape().as_tuple(), (2, 100, 500, 3));
}

#[test]
fn test_vertical_height_is_free() {
    let grid = test_grid();
    let out = run_vertical(
        &grid,
        &FrameBatch::zeros(REFERENCE_SHAPE),
        &FrameBatch::zeros((2, 150, 200, 3)),
    )
    .unwrap();
    assert_eq!(out.shape().as_tuple(), (2, 250, 200, 3));
}

#[test]
fn test_vertical_channel_mismatch() {
    let grid = test_grid();
    let err = validation_error(run_vertical(
        &grid,
        &FrameBatch::zeros(REFERENCE_SHAPE),
        &FrameBatch::zeros((2, 100, 200, 4)),
    ));
    assert!(matches!(
        err,
        ValidationError::Channels {
            direction: Direction::Vertical,
            first: 3,
            second: 4,
        }
    ));
}

#[test]
fn test_vertical_width_and_frame_mismatch() {
    let grid = test_grid();
    let err = validation_error(run_vertical(
        &grid,
        &FrameBatch::zeros(REFERENCE_SHAPE),
        &FrameBatch::zeros((2, 100, 300, 3)),
    ));
    assert!(matches!(err, ValidationError::Width { .. }));

    let err = validation_error(run_vertical(
        &grid,
        &FrameBatch::zeros(REFERENCE_SHAPE),
        &FrameBatch::zeros((3, 100, 200, 3)),
    ));
    assert!(matches!(err, ValidationError::FrameCount { .. }));
}

#[test]
fn test_sample_order_through_nodes() {
    let grid = test_grid();
    let left = tagged_batch((4, 3, 2, 3), 1);
    let right = tagged_batch((4, 3, 5, 3), 2);
    let out = run_horizontal(&grid, &left, &right).unwrap();
    assert_frames_joined(&out, &left, &right, Direction::Horizontal);

    let top = tagged_batch((4, 2, 3, 4), 3);
    let bottom = tagged_batch((4, 1, 3, 4), 4);
    let out = run_vertical(&grid, &top, &bottom).unwrap();
    assert_frames_joined(&out, &top, &bottom, Direction::Vertical);
}

#[test]
fn test_legacy_node_output_name() {
    let grid = test_grid();
    let left = tagged_batch((2, 3, 2, 3), 1);
    let right = tagged_batch((2, 3, 4, 3), 2);

    let outputs = grid
        .execute(
            LEGACY_HORIZONTAL_NODE_ID,
            &inputs! { "imagesL" => &left, "imagesR" => &right },
        )
        .unwrap();
    assert!(outputs.get("images").is_none());
    assert_frames_joined(outputs.get("IMAGE").unwrap(), &left, &right, Direction::Horizontal);
}

#[test]
fn test_wrong_port_names_are_missing_inputs() {
    let grid = test_grid();
    let a = FrameBatch::zeros(REFERENCE_SHAPE);
    let result = grid.execute(
        VERTICAL_NODE_ID,
        &inputs! { "images_left" => &a, "images_right" => &a },
    );
    assert!(matches!(
        result,
        Err(videogrid::Error::Node(NodeError::MissingInput { .. }))
    ));
}

#[test]
fn test_progress_reported_per_frame() {
    let grid = test_grid();
    let top = FrameBatch::zeros((6, 2, 2, 3));
    let bottom = FrameBatch::zeros((6, 3, 2, 3));

    let seen = std::sync::Mutex::new(Vec::new());
    let on_progress = |p: ConcatProgress| seen.lock().unwrap().push(p.fraction());
    grid.execute_with_progress(
        VERTICAL_NODE_ID,
        &inputs! { "images_top" => &top, "images_bottom" => &bottom },
        &on_progress,
    )
    .unwrap();

    let seen = seen.into_inner().unwrap();
    assert_eq!(seen.len(), 6);
    approx::assert_relative_eq!(*seen.last().unwrap(), 1.0);
}
