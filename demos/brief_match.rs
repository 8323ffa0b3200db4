extern crate brief;

use std::path::Path;
use color_eyre::eyre::Result;

use brief::Float;
use brief::io;
use brief::features::KeyPoint;
use brief::pattern::SamplingPattern;
use brief::descriptor::{BriefDescriptor, generate_descriptors};
use brief::descriptor::brief_runtime_parameters::BriefRuntimeParameters;
use brief::visualize::display_matches;

fn grid_keypoints(width: usize, height: usize, step: usize) -> Vec<KeyPoint> {
    let mut keypoints = Vec::<KeyPoint>::new();
    for y in (0..height).step_by(step) {
        for x in (0..width).step_by(step) {
            keypoints.push(KeyPoint::new(x as Float, y as Float));
        }
    }
    keypoints
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let image_name = "lenna";
    let image_name_2 = "lenna_90";
    let image_format = "png";
    let image_folder = "images/";
    let image_out_folder = "output/";
    let image_path = format!("{}{}.{}", image_folder, image_name, image_format);
    let image_path_2 = format!("{}{}.{}", image_folder, image_name_2, image_format);
    let converted_file_out_path = format!("{}{}_brief_matches.{}", image_out_folder, image_name, image_format);

    let runtime_parameters = BriefRuntimeParameters::default();
    let matching_max_distance = 64;

    let pattern = SamplingPattern::generate(runtime_parameters.descriptor_length, runtime_parameters.patch_size);

    let image = io::load_image_as_gray(Path::new(&image_path), false);
    let image_2 = io::load_image_as_gray(Path::new(&image_path_2), false);

    let keypoints = grid_keypoints(image.width(), image.height(), 8);
    let keypoints_2 = grid_keypoints(image_2.width(), image_2.height(), 8);

    let (surviving_keypoints, descriptors) = generate_descriptors(&image, keypoints, &pattern, &runtime_parameters);
    let (surviving_keypoints_2, descriptors_2) = generate_descriptors(&image_2, keypoints_2, &pattern, &runtime_parameters);

    let match_lists = BriefDescriptor::sorted_match_descriptors(&descriptors, &descriptors_2, matching_max_distance);
    let match_indices = match_lists.iter()
                                   .enumerate()
                                   .filter(|x| x.1.is_some())
                                   .map(|(idx,matches)| (idx, matches.as_ref().unwrap()[0].0))
                                   .collect::<Vec<(usize,usize)>>();
    println!("{} of {} descriptors matched below distance {}", match_indices.len(), descriptors.len(), matching_max_distance);

    let match_display = display_matches(&image, &image_2, &surviving_keypoints, &surviving_keypoints_2, &match_indices);
    match_display.to_image().save(converted_file_out_path)?;

    Ok(())
}
