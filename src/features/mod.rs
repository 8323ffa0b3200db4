use serde::{Serialize, Deserialize};

use crate::Float;

// Keypoints come from an external detector. Location is sub-pixel; the
// remaining fields are detector metadata that is carried through untouched.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct KeyPoint {
    pub x: Float,
    pub y: Float,
    pub size: Float,
    pub angle: Float,
    pub response: Float,
    pub octave: i32
}

impl KeyPoint {
    pub fn new(x: Float, y: Float) -> KeyPoint {
        KeyPoint{x, y, size: 0.0, angle: -1.0, response: 0.0, octave: 0}
    }
}

// A keypoint survives iff its whole sampling footprint, patch plus kernel
// margin, stays inside the image. Relative order is preserved. An image no
// larger than twice the margin in either dimension keeps no keypoints at all.
pub fn retain_within_border(keypoints: Vec<KeyPoint>, image_width: usize, image_height: usize, border_margin: usize) -> Vec<KeyPoint> {
    let margin = border_margin as Float;
    let width = image_width as Float;
    let height = image_height as Float;

    keypoints.into_iter()
             .filter(|keypoint| keypoint.x >= margin && keypoint.x < width - margin && keypoint.y >= margin && keypoint.y < height - margin)
             .collect::<Vec<KeyPoint>>()
}
