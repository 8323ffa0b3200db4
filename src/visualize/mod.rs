use log::warn;

use crate::Float;
use crate::image::Image;
use crate::features::KeyPoint;

const MARKER_INTENSITY: Float = 128.0;

pub fn draw_square(image: &mut Image, x: usize, y: usize, side_length: usize) -> () {
    let height = image.buffer.nrows();
    let width = image.buffer.ncols();

    if x < side_length || y < side_length || y + side_length >= height || x + side_length >= width {
        warn!("marker at ({},{}) with side {} does not fit image {}x{}", x, y, side_length, width, height);
        return;
    }

    for i in x-side_length..x+side_length+1 {
        image.buffer[(y + side_length,i)] = MARKER_INTENSITY;
        image.buffer[(y - side_length,i)] = MARKER_INTENSITY;
    }

    for j in y-side_length+1..y+side_length {
        image.buffer[(j,x + side_length)] = MARKER_INTENSITY;
        image.buffer[(j,x - side_length)] = MARKER_INTENSITY;
    }
}

pub fn draw_keypoints(image: &mut Image, keypoints: &Vec<KeyPoint>, side_length: usize) -> () {
    for keypoint in keypoints {
        draw_square(image, keypoint.x.trunc() as usize, keypoint.y.trunc() as usize, side_length);
    }
}

// Side by side composite of both images with matched keypoint pairs marked.
// match_indices pairs index into keypoints_a and keypoints_b respectively.
pub fn display_matches(image_a: &Image, image_b: &Image, keypoints_a: &Vec<KeyPoint>, keypoints_b: &Vec<KeyPoint>, match_indices: &Vec<(usize,usize)>) -> Image {
    let height = image_a.buffer.nrows().max(image_b.buffer.nrows());
    let width = image_a.buffer.ncols() + image_b.buffer.ncols();

    let mut target_image = Image::empty(width, height, image_a.original_encoding);

    for x in 0..image_a.buffer.ncols() {
        for y in 0..image_a.buffer.nrows() {
            target_image.buffer[(y,x)] = image_a.buffer[(y,x)];
        }
    }
    for x in 0..image_b.buffer.ncols() {
        for y in 0..image_b.buffer.nrows() {
            target_image.buffer[(y,x+image_a.buffer.ncols())] = image_b.buffer[(y,x)];
        }
    }

    for &(a_index,b_index) in match_indices {
        let keypoint_a = &keypoints_a[a_index];
        let keypoint_b = &keypoints_b[b_index];

        let target_a_x = keypoint_a.x.trunc() as usize;
        let target_a_y = keypoint_a.y.trunc() as usize;

        let target_b_x = image_a.buffer.ncols() + keypoint_b.x.trunc() as usize;
        let target_b_y = keypoint_b.y.trunc() as usize;

        draw_square(&mut target_image, target_a_x, target_a_y, 2);
        draw_square(&mut target_image, target_b_x, target_b_y, 2);
    }

    target_image
}
