extern crate nalgebra as na;

use na::DMatrix;

use crate::Float;
use crate::image::Image;

// Prefix sum grid, one row and one column larger than the source image.
// Row 0 and column 0 are zero so that S(r,c) is the sum of the source over
// rows [0,r) and columns [0,c).
#[derive(Debug,Clone)]
pub struct IntegralImage {
    pub buffer: DMatrix<Float>
}

impl IntegralImage {

    pub fn new(image: &Image) -> IntegralImage {
        let rows = image.buffer.nrows();
        let cols = image.buffer.ncols();
        let mut buffer = DMatrix::<Float>::zeros(rows+1,cols+1);

        for r in 0..rows {
            let mut row_sum = 0.0;
            for c in 0..cols {
                row_sum += image.buffer[(r,c)];
                buffer[(r+1,c+1)] = buffer[(r,c+1)] + row_sum;
            }
        }

        IntegralImage{buffer}
    }

    pub fn source_width(&self) -> usize {
        self.buffer.ncols()-1
    }

    pub fn source_height(&self) -> usize {
        self.buffer.nrows()-1
    }

    // Sum over the square window of side 2*kernel_radius+1 centered at (cx,cy).
    // Sub-pixel centers are truncated, not interpolated. All four reads must be
    // in range; callers guarantee this by filtering keypoints against the
    // border margin beforehand.
    pub fn patch_sum(&self, cx: Float, cy: Float, kernel_radius: usize) -> Float {
        let x = cx.trunc() as usize;
        let y = cy.trunc() as usize;
        let r = kernel_radius;

        self.buffer[(y-r,x-r)] + self.buffer[(y+r+1,x+r+1)]
            - self.buffer[(y-r,x+r+1)] - self.buffer[(y+r+1,x-r)]
    }

}
