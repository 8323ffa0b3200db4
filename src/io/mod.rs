extern crate image as image_rs;

use std::path::Path;
use std::fs::File;
use std::io::{BufReader,Read};

use crate::image::Image;
use crate::pattern::SamplingPattern;
use crate::descriptor::brief_runtime_parameters::BriefRuntimeParameters;

// Missing or unreadable specification text is the one fatal parser input;
// everything else the parser tolerates.
pub fn read_pattern_specification(file_path: &Path) -> Result<String, std::io::Error> {
    let file = File::open(file_path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn load_sampling_pattern(file_path: &Path) -> Result<SamplingPattern, std::io::Error> {
    let specification = read_pattern_specification(file_path)?;
    Ok(SamplingPattern::parse(&specification))
}

pub fn save_sampling_pattern(pattern: &SamplingPattern, file_path: &Path) -> Result<(), std::io::Error> {
    std::fs::write(file_path, pattern.to_specification())
}

pub fn load_image_as_gray(file_path: &Path, normalize: bool) -> Image {
    let gray_image = image_rs::open(&Path::new(&file_path)).expect("load_image failed").to_luma8();
    Image::from_gray_image(&gray_image, normalize)
}

pub fn load_runtime_parameters(file_path: &Path) -> Result<BriefRuntimeParameters, Box<dyn std::error::Error>> {
    let file = File::open(file_path)?;
    let runtime_parameters = serde_yaml::from_reader(BufReader::new(file))?;
    Ok(runtime_parameters)
}
