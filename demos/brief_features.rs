extern crate brief;

use std::path::Path;
use color_eyre::eyre::Result;

use brief::Float;
use brief::io;
use brief::features::KeyPoint;
use brief::pattern::SamplingPattern;
use brief::descriptor::generate_descriptors;
use brief::descriptor::brief_runtime_parameters::BriefRuntimeParameters;
use brief::visualize::draw_keypoints;

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let image_name = "lenna";
    let image_format = "png";
    let image_folder = "images/";
    let image_out_folder = "output/";
    let pattern_folder = "patterns/";
    let image_path = format!("{}{}.{}", image_folder, image_name, image_format);
    let converted_file_out_path = format!("{}{}_brief_keypoints.{}", image_out_folder, image_name, image_format);

    let runtime_parameters = BriefRuntimeParameters::default();

    let pattern_path = format!("{}{}", pattern_folder, runtime_parameters.pattern_file_name());
    let pattern = match io::load_sampling_pattern(Path::new(&pattern_path)) {
        Ok(pattern) => pattern,
        Err(_) => SamplingPattern::generate(runtime_parameters.descriptor_length, runtime_parameters.patch_size)
    };

    let image = io::load_image_as_gray(Path::new(&image_path), false);

    // Stand in for an external detector with a coarse grid of candidates.
    let step = 16;
    let mut keypoints = Vec::<KeyPoint>::new();
    for y in (0..image.height()).step_by(step) {
        for x in (0..image.width()).step_by(step) {
            keypoints.push(KeyPoint::new(x as Float, y as Float));
        }
    }

    let (surviving_keypoints, descriptors) = generate_descriptors(&image, keypoints, &pattern, &runtime_parameters);
    println!("{} keypoints survived the border filter, {} descriptors of {} bytes", surviving_keypoints.len(), descriptors.len(), pattern.descriptor_length());

    let mut display = image.clone();
    draw_keypoints(&mut display, &surviving_keypoints, 2);
    display.to_image().save(converted_file_out_path)?;

    Ok(())
}
