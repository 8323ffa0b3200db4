use crate::Float;
use crate::image::Image;
use crate::image::integral_image::IntegralImage;
use crate::features::{KeyPoint, retain_within_border};
use crate::pattern::SamplingPattern;
use self::brief_runtime_parameters::BriefRuntimeParameters;

pub mod brief_runtime_parameters;

#[derive(Debug,Clone)]
pub struct BriefDescriptor {
    pub data: Vec<u8>
}

impl BriefDescriptor {

    // Pure in (keypoint, integral image, pattern): identical inputs always
    // produce identical bytes. Group order fixes byte order, pair order fixes
    // bit order within a byte, most significant bit first. The caller has
    // already filtered the keypoint against the border margin.
    pub fn new(keypoint: &KeyPoint, integral_image: &IntegralImage, pattern: &SamplingPattern, kernel_radius: usize) -> BriefDescriptor {
        let mut data = Vec::<u8>::with_capacity(pattern.byte_groups.len());

        for pairs in &pattern.byte_groups {
            let mut accumulator = 0u8;
            for pair in pairs {
                // The +0.5 recenters the integer offset grid on pixel centers.
                let left_cx = keypoint.x + 0.5 + pair.left.dx as Float;
                let left_cy = keypoint.y + 0.5 + pair.left.dy as Float;
                let right_cx = keypoint.x + 0.5 + pair.right.dx as Float;
                let right_cy = keypoint.y + 0.5 + pair.right.dy as Float;

                let left_sum = integral_image.patch_sum(left_cx, left_cy, kernel_radius);
                let right_sum = integral_image.patch_sum(right_cx, right_cy, kernel_radius);

                let bit = match left_sum < right_sum {
                    true => 1,
                    false => 0
                };
                accumulator = (accumulator << 1) | bit;
            }
            data.push(accumulator);
        }

        BriefDescriptor{data}
    }

    pub fn length(&self) -> usize {
        self.data.len()
    }

    pub fn hamming_distance(&self, other: &BriefDescriptor) -> u64 {
        assert_eq!(self.data.len(), other.data.len());
        self.data.iter()
                 .zip(other.data.iter())
                 .map(|(byte_a,byte_b)| (byte_a ^ byte_b).count_ones() as u64)
                 .sum()
    }

    pub fn sorted_matches_against(descriptor: &BriefDescriptor, other_descriptors: &Vec<BriefDescriptor>, matching_max_distance: u64) -> Option<Vec<(usize, u64)>> {
        let mut indexed_distances
            = other_descriptors
            .iter()
            .enumerate()
            .map(|(idx,other)| (idx,descriptor.hamming_distance(other))).collect::<Vec<(usize, u64)>>();
        indexed_distances.sort_unstable_by(|a,b| a.1.cmp(&b.1));

        match indexed_distances {
            vec if vec.is_empty() => None,
            vec if vec[0].1 > matching_max_distance => None,
            vec => Some(vec)
        }
    }

    pub fn sorted_match_descriptors(descriptors_a: &Vec<BriefDescriptor>, descriptors_b: &Vec<BriefDescriptor>, matching_max_distance: u64) -> Vec<Option<Vec<(usize, u64)>>> {
        descriptors_a.iter().map(|x| BriefDescriptor::sorted_matches_against(x, descriptors_b, matching_max_distance)).collect::<Vec<Option<Vec<(usize, u64)>>>>()
    }

}

// Builds the integral image, drops keypoints whose sampling footprint would
// leave the image, and evaluates the pattern for each survivor. Returned
// descriptors align index for index with the returned keypoints. Each
// keypoint is independent of the others, so this map parallelizes without
// locking if it ever needs to.
pub fn generate_descriptors(image: &Image, keypoints: Vec<KeyPoint>, pattern: &SamplingPattern, runtime_parameters: &BriefRuntimeParameters) -> (Vec<KeyPoint>, Vec<BriefDescriptor>) {
    assert!(runtime_parameters.kernel_size % 2 == 1);

    let integral_image = IntegralImage::new(image);
    let surviving_keypoints = retain_within_border(keypoints, image.width(), image.height(), runtime_parameters.border_margin());

    let descriptors = surviving_keypoints.iter()
                                         .map(|keypoint| BriefDescriptor::new(keypoint, &integral_image, pattern, runtime_parameters.kernel_radius()))
                                         .collect::<Vec<BriefDescriptor>>();

    (surviving_keypoints, descriptors)
}
