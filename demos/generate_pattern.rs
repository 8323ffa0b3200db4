extern crate brief;

use std::path::Path;
use color_eyre::eyre::Result;

use brief::io;
use brief::pattern::SamplingPattern;

// Writes deterministic sampling patterns in the textual specification format
// for both supported descriptor lengths.
fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let pattern_folder = "patterns/";
    let patch_size = 48;

    std::fs::create_dir_all(pattern_folder)?;

    for &byte_count in [16, 32].iter() {
        let pattern = SamplingPattern::generate(byte_count, patch_size);
        let file_path = format!("{}brief_pattern_{}.txt", pattern_folder, byte_count);
        io::save_sampling_pattern(&pattern, Path::new(&file_path))?;
        println!("wrote {} byte groups to {}", pattern.descriptor_length(), file_path);
    }

    Ok(())
}
