use brief::pattern::{SamplingPattern, Offset, PAIRS_PER_BYTE};

fn term(left: (i32,i32), right: (i32,i32)) -> String {
    format!("(SMOOTHED({},{})<SMOOTHED({},{}))", left.0, left.1, right.0, right.1)
}

#[test]
fn test_parse_single_term() {
    let pattern = SamplingPattern::parse("(SMOOTHED(1,2)<SMOOTHED(3,4))");

    assert_eq!(pattern.byte_groups.len(), 1);
    assert_eq!(pattern.byte_groups[0].len(), 1);
    assert_eq!(pattern.byte_groups[0][0].left, Offset::new(1,2));
    assert_eq!(pattern.byte_groups[0][0].right, Offset::new(3,4));
    assert_eq!(pattern.skipped_records, 0);
}

#[test]
fn test_parse_strips_whitespace() {
    let pattern = SamplingPattern::parse("( SMOOTHED( -8 , 3 ) < SMOOTHED( 7 , -1 ) )");

    assert_eq!(pattern.byte_groups.len(), 1);
    assert_eq!(pattern.byte_groups[0][0].left, Offset::new(-8,3));
    assert_eq!(pattern.byte_groups[0][0].right, Offset::new(7,-1));
}

#[test]
fn test_parse_full_record() {
    let terms = (0..PAIRS_PER_BYTE as i32).map(|i| term((i,-i),(i+1,i+2))).collect::<Vec<String>>();
    let record = format!("{};", terms.join("+"));

    let pattern = SamplingPattern::parse(&record);

    assert_eq!(pattern.byte_groups.len(), 1);
    assert_eq!(pattern.byte_groups[0].len(), PAIRS_PER_BYTE);
    assert_eq!(pattern.descriptor_length(), 1);
    for (i,pair) in pattern.byte_groups[0].iter().enumerate() {
        let i = i as i32;
        assert_eq!(pair.left, Offset::new(i,-i));
        assert_eq!(pair.right, Offset::new(i+1,i+2));
    }
}

#[test]
fn test_empty_record_does_not_shift_groups() {
    let specification = format!("{};\n;{};", term((1,2),(3,4)), term((5,6),(7,8)));

    let pattern = SamplingPattern::parse(&specification);

    assert_eq!(pattern.byte_groups.len(), 2);
    assert_eq!(pattern.byte_groups[0][0].left, Offset::new(1,2));
    assert_eq!(pattern.byte_groups[1][0].left, Offset::new(5,6));
    assert_eq!(pattern.skipped_records, 0);
}

#[test]
fn test_record_without_valid_terms_is_dropped_and_counted() {
    let specification = format!("{};this record has no terms;{};", term((1,2),(3,4)), term((5,6),(7,8)));

    let pattern = SamplingPattern::parse(&specification);

    assert_eq!(pattern.byte_groups.len(), 2);
    assert_eq!(pattern.byte_groups[1][0].right, Offset::new(7,8));
    assert_eq!(pattern.skipped_records, 1);
}

#[test]
fn test_malformed_terms_are_skipped_within_record() {
    let record = format!("{}+(SMOOTHED(1)<SMOOTHED(2,3))+junk+{};", term((1,2),(3,4)), term((5,6),(7,8)));

    let pattern = SamplingPattern::parse(&record);

    assert_eq!(pattern.byte_groups.len(), 1);
    assert_eq!(pattern.byte_groups[0].len(), 2);
    assert_eq!(pattern.byte_groups[0][0].left, Offset::new(1,2));
    assert_eq!(pattern.byte_groups[0][1].left, Offset::new(5,6));
}

#[test]
fn test_short_record_keeps_matched_length() {
    let record = format!("{}+{};", term((1,2),(3,4)), term((5,6),(7,8)));

    let pattern = SamplingPattern::parse(&record);

    assert_eq!(pattern.byte_groups.len(), 1);
    assert_eq!(pattern.byte_groups[0].len(), 2);
}

#[test]
fn test_generate_respects_patch_extent() {
    let patch_size = 48;
    let half_extent = (patch_size/2) as i32;
    let pattern = SamplingPattern::generate(32, patch_size);

    assert_eq!(pattern.byte_groups.len(), 32);
    for pairs in &pattern.byte_groups {
        assert_eq!(pairs.len(), PAIRS_PER_BYTE);
        for pair in pairs {
            for offset in [pair.left, pair.right].iter() {
                assert!(offset.dy >= -half_extent && offset.dy < half_extent);
                assert!(offset.dx >= -half_extent && offset.dx < half_extent);
            }
        }
    }
}

#[test]
fn test_generate_is_deterministic() {
    let pattern_a = SamplingPattern::generate(16, 48);
    let pattern_b = SamplingPattern::generate(16, 48);

    assert_eq!(pattern_a.byte_groups, pattern_b.byte_groups);
}

#[test]
fn test_generated_specification_parses_back() {
    let generated = SamplingPattern::generate(32, 48);

    let reparsed = SamplingPattern::parse(&generated.to_specification());

    assert_eq!(reparsed.byte_groups, generated.byte_groups);
    assert_eq!(reparsed.skipped_records, 0);
}
