use nalgebra as na;

use na::DMatrix;
use brief::Float;
use brief::image::{Image, image_encoding::ImageEncoding, integral_image::IntegralImage};

fn checker_image(rows: usize, cols: usize) -> Image {
    let buffer = DMatrix::<Float>::from_fn(rows, cols, |r,c| ((r*31 + c*17) % 255) as Float);
    Image::from_matrix(&buffer, ImageEncoding::F64, false)
}

fn naive_window_sum(image: &Image, cx: usize, cy: usize, kernel_radius: usize) -> Float {
    let mut sum = 0.0;
    for r in cy-kernel_radius..cy+kernel_radius+1 {
        for c in cx-kernel_radius..cx+kernel_radius+1 {
            sum += image.buffer[(r,c)];
        }
    }
    sum
}

#[test]
fn test_dimensions_one_larger_than_source() {
    let image = checker_image(7, 5);
    let integral_image = IntegralImage::new(&image);

    assert_eq!(integral_image.buffer.nrows(), 8);
    assert_eq!(integral_image.buffer.ncols(), 6);
    assert_eq!(integral_image.source_height(), 7);
    assert_eq!(integral_image.source_width(), 5);
}

#[test]
fn test_first_row_and_column_are_zero() {
    let image = checker_image(4, 4);
    let integral_image = IntegralImage::new(&image);

    for c in 0..5 {
        assert_eq!(integral_image.buffer[(0,c)], 0.0);
    }
    for r in 0..5 {
        assert_eq!(integral_image.buffer[(r,0)], 0.0);
    }
}

#[test]
fn test_last_entry_is_total_sum() {
    let image = checker_image(6, 9);
    let integral_image = IntegralImage::new(&image);

    assert_eq!(integral_image.buffer[(6,9)], image.buffer.sum());
}

#[test]
fn test_patch_sum_matches_naive_window_sum() {
    let image = checker_image(16, 16);
    let integral_image = IntegralImage::new(&image);

    for &kernel_radius in [0, 1, 4].iter() {
        let sum = integral_image.patch_sum(8.0, 8.0, kernel_radius);
        assert_eq!(sum, naive_window_sum(&image, 8, 8, kernel_radius));
    }
}

#[test]
fn test_patch_sum_radius_zero_is_single_pixel() {
    let image = checker_image(8, 8);
    let integral_image = IntegralImage::new(&image);

    assert_eq!(integral_image.patch_sum(3.0, 5.0, 0), image.buffer[(5,3)]);
}

#[test]
fn test_patch_sum_truncates_sub_pixel_centers() {
    let image = checker_image(16, 16);
    let integral_image = IntegralImage::new(&image);

    assert_eq!(integral_image.patch_sum(7.9, 6.2, 2), integral_image.patch_sum(7.0, 6.0, 2));
}
