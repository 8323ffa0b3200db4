extern crate rand;
extern crate rand_distr;

use rand::prelude::*;
use rand_distr::{Normal, Distribution};
use log::{debug, warn};

use crate::Float;

pub const PAIRS_PER_BYTE: usize = 8;

const RECORD_DELIMITER: char = ';';
const TERM_DELIMITER: char = '+';
const LEFT_TERM_MARKERS: (&str, &str) = ("(SMOOTHED(", ")<SMOOTHED");
const RIGHT_TERM_MARKERS: (&str, &str) = ("<SMOOTHED(", "))");

// Offsets are stored (row, column) relative to a keypoint center, matching
// the order they appear in the specification text.
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct Offset {
    pub dy: i32,
    pub dx: i32
}

impl Offset {
    pub fn new(dy: i32, dx: i32) -> Offset {
        Offset{dy, dx}
    }
}

// The two patch centers whose smoothed sums are compared to produce one bit.
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub struct OffsetPair {
    pub left: Offset,
    pub right: Offset
}

// Pair order within a group is bit order, most significant bit first.
pub type ByteGroup = Vec<OffsetPair>;

// Built once per descriptor-length configuration and shared read-only
// afterwards. Group order is output byte order.
#[derive(Debug,Clone)]
pub struct SamplingPattern {
    pub byte_groups: Vec<ByteGroup>,
    pub skipped_records: usize
}

impl SamplingPattern {

    // Line-records are separated by ';', terms within a record by '+'. A
    // non-empty record that yields no valid term is dropped and counted;
    // malformed individual terms are skipped without affecting their
    // neighbours. Records with other than 8 valid terms are kept at whatever
    // length was matched.
    pub fn parse(specification: &str) -> SamplingPattern {
        let mut byte_groups = Vec::<ByteGroup>::new();
        let mut skipped_records = 0;

        for record in specification.split(RECORD_DELIMITER) {
            let cleaned = record.chars().filter(|c| !c.is_whitespace()).collect::<String>();
            if cleaned.is_empty() {
                continue;
            }

            let pairs = cleaned.split(TERM_DELIMITER)
                               .filter_map(|term| parse_term(term))
                               .collect::<ByteGroup>();

            match pairs.len() {
                0 => skipped_records += 1,
                n => {
                    if n != PAIRS_PER_BYTE {
                        debug!("pattern record matched {} terms instead of {}", n, PAIRS_PER_BYTE);
                    }
                    byte_groups.push(pairs);
                }
            }
        }

        if skipped_records > 0 {
            warn!("skipped {} pattern records with no valid offset pairs", skipped_records);
        }

        SamplingPattern{byte_groups, skipped_records}
    }

    // One byte per group in the generated descriptor.
    pub fn descriptor_length(&self) -> usize {
        self.byte_groups.len()
    }

    // Deterministic replacement for a pattern file: offset components are
    // drawn from an isotropic Gaussian with sigma = patch/5 and clamped so
    // every sampling footprint stays within the border margin derived from
    // the patch size.
    pub fn generate(byte_count: usize, patch_size: usize) -> SamplingPattern {
        let std_dev = patch_size as Float/5.0;
        let half_extent = (patch_size/2) as i32;

        let mut sampling_rng = rand::rngs::SmallRng::seed_from_u64(0x0DDB1A5ECBAD5EEDu64);
        let normal_distribution = Normal::new(0.0,std_dev).unwrap();

        let mut byte_groups = Vec::<ByteGroup>::with_capacity(byte_count);
        for _ in 0..byte_count {
            let mut pairs = Vec::<OffsetPair>::with_capacity(PAIRS_PER_BYTE);
            for _ in 0..PAIRS_PER_BYTE {
                let left = generate_offset(&mut sampling_rng, &normal_distribution, half_extent);
                let right = generate_offset(&mut sampling_rng, &normal_distribution, half_extent);
                pairs.push(OffsetPair{left, right});
            }
            byte_groups.push(pairs);
        }

        SamplingPattern{byte_groups, skipped_records: 0}
    }

    // Formats the pattern back into the textual specification so generated
    // and file-loaded patterns are interchangeable.
    pub fn to_specification(&self) -> String {
        let mut specification = String::new();
        for pairs in &self.byte_groups {
            let terms = pairs.iter()
                             .map(|pair| format!("(SMOOTHED({},{})<SMOOTHED({},{}))", pair.left.dy, pair.left.dx, pair.right.dy, pair.right.dx))
                             .collect::<Vec<String>>();
            specification.push_str(&terms.join("+"));
            specification.push(RECORD_DELIMITER);
            specification.push('\n');
        }
        specification
    }

}

fn generate_offset(sampling_rng: &mut dyn RngCore, normal_distribution: &Normal<Float>, half_extent: i32) -> Offset {
    let dy = normal_distribution.sample(sampling_rng).round() as i32;
    let dx = normal_distribution.sample(sampling_rng).round() as i32;

    // The upper bound is exclusive of the half extent itself, otherwise the
    // outermost integral read would land one past the border margin.
    Offset {
        dy: dy.max(-half_extent).min(half_extent-1),
        dx: dx.max(-half_extent).min(half_extent-1)
    }
}

fn parse_term(term: &str) -> Option<OffsetPair> {
    let left = parse_offset(extract_between(term, LEFT_TERM_MARKERS.0, LEFT_TERM_MARKERS.1)?)?;
    let right = parse_offset(extract_between(term, RIGHT_TERM_MARKERS.0, RIGHT_TERM_MARKERS.1)?)?;
    Some(OffsetPair{left, right})
}

fn extract_between<'a>(term: &'a str, start_marker: &str, end_marker: &str) -> Option<&'a str> {
    let start = term.find(start_marker)? + start_marker.len();
    let remainder = &term[start..];
    let end = remainder.find(end_marker)?;
    Some(&remainder[..end])
}

fn parse_offset(token: &str) -> Option<Offset> {
    let components = token.split(',').collect::<Vec<&str>>();
    match components[..] {
        [dy, dx] => match (dy.parse::<i32>(), dx.parse::<i32>()) {
            (Ok(dy), Ok(dx)) => Some(Offset::new(dy, dx)),
            _ => None
        },
        _ => None
    }
}
