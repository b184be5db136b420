//! Static layout tables for the flight scene.
//!
//! Everything the experience shows besides the airplane itself is data:
//! curve control points, cloud placements, and narration blocks. The render
//! engine treats these as opaque configuration.

use crate::manifest::{CloudPlacement, NarrationPlacement};
use constants::flight::CURVE_DISTANCE;
use std::f32::consts::PI;

/// Control points of the path the camera rig follows: a long run down -Z
/// with two wide S-bends in the middle.
pub fn flight_path_control_points() -> Vec<[f32; 3]> {
    vec![
        [0.0, 0.0, 0.0],
        [0.0, 0.0, -CURVE_DISTANCE],
        [100.0, 0.0, -2.0 * CURVE_DISTANCE],
        [-100.0, 0.0, -3.0 * CURVE_DISTANCE],
        [100.0, 0.0, -4.0 * CURVE_DISTANCE],
        [0.0, 0.0, -5.0 * CURVE_DISTANCE],
        [0.0, 0.0, -6.0 * CURVE_DISTANCE],
        [0.0, 0.0, -7.0 * CURVE_DISTANCE],
    ]
}

/// Second rendered path. Identical to the flight path except that it stays
/// straight through the first bend, so the two ribbons visibly diverge.
pub fn decorative_path_control_points() -> Vec<[f32; 3]> {
    vec![
        [0.0, 0.0, 0.0],
        [0.0, 0.0, -CURVE_DISTANCE],
        [0.0, 0.0, -2.0 * CURVE_DISTANCE],
        [-100.0, 0.0, -3.0 * CURVE_DISTANCE],
        [100.0, 0.0, -4.0 * CURVE_DISTANCE],
        [0.0, 0.0, -5.0 * CURVE_DISTANCE],
        [0.0, 0.0, -6.0 * CURVE_DISTANCE],
        [0.0, 0.0, -7.0 * CURVE_DISTANCE],
    ]
}

fn cloud(position: [f32; 3], scale: [f32; 3], rotation_y: f32) -> CloudPlacement {
    CloudPlacement {
        position,
        scale,
        rotation_y,
    }
}

/// Cloud placements, densest near the start and clustered around each
/// narration block further along the route.
pub fn cloud_placements() -> Vec<CloudPlacement> {
    vec![
        cloud([-3.5, -1.2, -7.0], [1.0, 1.0, 1.5], 0.0),
        cloud([3.5, -1.0, -10.0], [1.0, 1.0, 2.0], PI),
        cloud([-3.5, 0.2, -12.0], [1.0, 1.0, 1.0], PI / 3.0),
        cloud([3.5, 0.2, -12.0], [1.0, 1.0, 1.0], 0.0),
        cloud([1.0, -0.2, -12.0], [0.4, 0.4, 0.4], PI / 9.0),
        cloud([-4.0, -0.5, -53.0], [0.3, 0.5, 2.0], 0.0),
        cloud([-1.0, -1.5, -100.0], [0.8, 0.8, 0.8], 0.0),
        cloud([-3.2, 0.0, -200.0], [0.8, 0.8, 0.8], 0.0),
        cloud([-9.0, -1.5, -200.0], [0.8, 0.8, 0.8], 0.0),
        cloud([-3.0, 0.0, -250.0], [0.8, 0.8, 0.8], PI),
        cloud([3.0, -1.5, -250.0], [0.8, 0.8, 0.8], 0.0),
        cloud([73.0, -1.5, -400.0], [0.8, 0.8, 0.8], 0.0),
        cloud([79.0, 0.0, -400.0], [0.8, 0.8, 0.8], -PI / 2.0),
        cloud([-70.0, 1.0, -680.0], [0.8, 0.8, 0.8], -PI / 2.0),
        cloud([-60.0, -1.5, -680.0], [0.8, 0.8, 0.8], 0.0),
        cloud([-28.0, -1.5, -860.0], [0.8, 0.8, 0.8], 0.0),
        cloud([-20.0, -1.5, -860.0], [0.8, 0.8, 0.8], -PI / 2.0),
        cloud([95.0, -1.5, -1000.0], [0.8, 0.8, 0.8], 0.0),
        cloud([103.0, 0.0, -1000.0], [0.8, 0.8, 0.8], -PI / 3.0),
        cloud([21.0, -1.5, -1200.0], [0.8, 0.8, 0.8], 0.0),
        cloud([15.0, 1.0, -1200.0], [0.8, 0.8, 0.8], PI / 3.0),
        cloud([-10.0, -1.5, -1300.0], [0.8, 0.8, 0.8], 0.0),
        cloud([-3.0, 1.0, -1300.0], [0.8, 0.8, 0.8], -PI / 3.0),
        cloud([-8.0, -1.5, -1400.0], [0.8, 0.8, 0.8], PI / 3.0),
        cloud([-2.0, 1.0, -1400.0], [0.8, 0.8, 0.8], -PI / 3.0),
        cloud([-3.0, -1.5, -1500.0], [0.8, 0.8, 0.8], PI),
        cloud([3.0, 0.0, -1500.0], [0.8, 0.8, 0.8], 0.0),
        cloud([-2.0, 0.0, -1550.0], [0.8, 0.8, 0.8], PI / 3.0),
    ]
}

fn narration(position: [f32; 3], text: &str) -> NarrationPlacement {
    NarrationPlacement {
        position,
        text: String::from(text),
    }
}

/// Narrative text blocks, in route order.
pub fn narration_blocks() -> Vec<NarrationPlacement> {
    vec![
        narration([-1.0, 2.0, -10.0], "Our lives are always at a crossroads."),
        narration(
            [-10.0, 1.0, -200.0],
            "And we're often put in situations where we have to make a choice.",
        ),
        narration(
            [2.0, 1.0, -250.0],
            "And like any good choice, there will always be regrets.",
        ),
        narration(
            [72.0, 1.0, -400.0],
            "Maybe the choice is to do the easy thing the hard way,",
        ),
        narration(
            [-62.0, 1.0, -680.0],
            "or, conversely, make something difficult easier,",
        ),
        narration(
            [-28.0, 1.0, -860.0],
            "Fear of not choosing a better outcome in the future creates regret.",
        ),
        narration(
            [95.0, 1.0, -1000.0],
            "But what matters is, \"Are you doing the best you can in the moment?\"",
        ),
        narration(
            [20.0, 1.0, -1200.0],
            "The pain or responsibility that comes with a choice makes us more mature.",
        ),
        narration(
            [-10.0, 1.0, -1300.0],
            "The sweet consequences of our choices are the rewards for our efforts.",
        ),
        narration(
            [-8.0, 1.0, -1400.0],
            "Whatever the case, choices make us stronger.",
        ),
        narration([-3.0, 1.0, -1500.0], "So don't be afraid to make choices."),
        narration(
            [2.0, 1.0, -1550.0],
            "Sending you words of comfort and encouragement as you live your life today.",
        ),
        narration(
            [-1.6, 2.0, -1650.0],
            "You've done well, and you'll do well.",
        ),
    ]
}
