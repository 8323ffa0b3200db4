use serde::{Serialize, Deserialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct BriefRuntimeParameters {
    pub descriptor_length: usize,
    pub kernel_size: usize,
    pub patch_size: usize
}

impl Default for BriefRuntimeParameters {
    fn default() -> BriefRuntimeParameters {
        BriefRuntimeParameters {
            descriptor_length: 32,
            kernel_size: 9,
            patch_size: 48
        }
    }
}

impl BriefRuntimeParameters {

    pub fn kernel_radius(&self) -> usize {
        self.kernel_size/2
    }

    // Patch half-extent plus kernel half-extent. Keypoints this close to an
    // edge cannot have their full sampling footprint evaluated; changing the
    // kernel size without re-deriving this margin breaks the bounds invariant.
    pub fn border_margin(&self) -> usize {
        self.patch_size/2 + self.kernel_size/2
    }

    // The descriptor length selects which pattern specification to load.
    pub fn pattern_file_name(&self) -> String {
        format!("brief_pattern_{}.txt", self.descriptor_length)
    }

}
