//! Integration tests for encoding property lists and verifying round-trip.

use clprops::prelude::*;

#[test]
fn test_roundtrip_context_with_additional() {
    let mut props = ContextProperties::with_platform(PlatformId::from_raw(0x2000));
    props.interop_user_sync = Some(true);
    props.additional.push_raw(0x9999, 11);
    props.additional.push_raw(0x8888, 22);

    let list = props.to_property_list().expect("encode failed");
    // Schema fields first in table order, then additional pairs verbatim.
    assert_eq!(
        list.as_words(),
        &[0x1084, 0x2000, 0x1085, 1, 0x9999, 11, 0x8888, 22, 0]
    );

    let back = ContextProperties::from_property_list(list.as_words()).expect("decode failed");
    assert_eq!(back, props);
}

#[test]
fn test_roundtrip_additional_only_set() {
    let mut props = ContextProperties::new();
    props.additional.push_raw(0x7001, 1);
    props.additional.push_raw(0x7000, 2);

    let list = props.to_property_list().expect("encode failed");
    let back = ContextProperties::from_property_list(list.as_words()).expect("decode failed");

    assert_eq!(back, props);
    let keys: Vec<ClWord> = back.additional.iter().map(|p| p.key).collect();
    assert_eq!(keys, vec![0x7001, 0x7000], "bucket order must survive");
}

#[test]
fn test_empty_sets_encode_to_lone_sentinel() {
    assert_eq!(
        ContextProperties::new().to_property_list().expect("context").as_words(),
        &[0]
    );
    assert_eq!(
        SamplerProperties::default().to_property_list().expect("sampler").as_words(),
        &[0]
    );
    assert_eq!(
        PipeProperties::new().to_property_list().expect("pipe").as_words(),
        &[0]
    );
}

#[test]
fn test_empty_list_decodes_to_empty_sets() {
    let props = SamplerProperties::from_property_list(&[0]).expect("decode failed");
    assert_eq!(props, SamplerProperties::default());
    assert!(props.additional.is_empty());
}

#[test]
fn test_float_exactness_through_full_cycle() {
    let mut props = SamplerProperties::default();
    props.lod_min_khr = Some(1.0);
    props.lod_max_khr = Some(f32::NAN);

    let list = props.to_property_list().expect("encode failed");
    // 1.0 travels as its bit pattern, not as the integer 1.
    assert!(list.as_words().contains(&0x3F80_0000));
    assert!(!list.as_words().contains(&1));

    let back = SamplerProperties::from_property_list(list.as_words()).expect("decode failed");
    assert_eq!(back.lod_min_khr, Some(1.0));
    assert_eq!(
        back.lod_max_khr.expect("lod_max present").to_bits(),
        f32::NAN.to_bits()
    );
}

#[test]
fn test_unknown_key_position_preserved() {
    // Unknown key between two known ones.
    let words = [0x1152, 1, 0xABCD, 99, 0x1154, 0x1140, 0];
    let props = SamplerProperties::from_property_list(&words).expect("decode failed");

    assert_eq!(props.normalized_coords, Some(true));
    assert_eq!(props.filter_mode, Some(FilterMode::Nearest));
    assert_eq!(props.additional.len(), 1);
    assert_eq!(props.additional.as_slice()[0], RawProperty::new(0xABCD, 99));
}

#[test]
fn test_boolean_normalization() {
    let words = [0x1152, 2, 0];
    let props = SamplerProperties::from_property_list(&words).expect("decode failed");
    assert_eq!(props.normalized_coords, Some(true));

    // Re-encoding always emits exactly 1.
    let list = props.to_property_list().expect("encode failed");
    assert_eq!(list.as_words(), &[0x1152, 1, 0]);
}

#[test]
fn test_malformed_inputs_error_instead_of_overrunning() {
    // Key with no value slot.
    assert!(matches!(
        ContextProperties::from_property_list(&[0x1084, 1, 0x1085]),
        Err(Error::MalformedPropertyList(_))
    ));
    // No terminator at all.
    assert!(matches!(
        ContextProperties::from_property_list(&[0x1084, 1]),
        Err(Error::MalformedPropertyList(_))
    ));
    assert!(matches!(
        ContextProperties::from_property_list(&[]),
        Err(Error::MalformedPropertyList(_))
    ));
}

#[test]
fn test_trailing_data_after_sentinel_ignored() {
    let words = [0x1084, 0x2000, 0, 0x5555, 0x6666];
    let props = ContextProperties::from_property_list(&words).expect("decode failed");
    assert_eq!(props.platform, Some(PlatformId::from_raw(0x2000)));
    assert!(props.additional.is_empty());
}

#[test]
fn test_degenerate_pipe_schema_full_cycle() {
    let words = [0x42, 7, 0x43, 8, 0];
    let props = PipeProperties::from_property_list(&words).expect("decode failed");
    assert_eq!(props.additional.len(), 2);

    let list = props.to_property_list().expect("encode failed");
    assert_eq!(list.as_words(), &words);
}

#[test]
fn test_cross_schema_decode_keeps_every_pair() {
    // A sampler list read through the pipe schema: nothing is typed,
    // nothing is lost.
    let sampler_list = SamplerProperties::new(
        Some(true),
        Some(AddressingMode::MirroredRepeat),
        Some(FilterMode::Linear),
    )
    .to_property_list()
    .expect("encode failed");

    let as_pipe = PipeProperties::from_property_list(sampler_list.as_words())
        .expect("decode failed");
    assert_eq!(as_pipe.additional.len(), 3);

    let reencoded = as_pipe.to_property_list().expect("re-encode failed");
    assert_eq!(reencoded.as_words(), sampler_list.as_words());
}

#[test]
fn test_encode_is_deterministic() {
    let mut a = ContextProperties::new();
    a.terminate_khr = Some(false);
    a.platform = Some(PlatformId::from_raw(3));

    let mut b = ContextProperties::new();
    b.platform = Some(PlatformId::from_raw(3));
    b.terminate_khr = Some(false);

    assert_eq!(
        a.to_property_list().expect("encode a").as_words(),
        b.to_property_list().expect("encode b").as_words()
    );
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_wide_integer_fits_on_64_bit() {
    let mut props = ContextProperties::new();
    props.memory_initialize_khr = Some(1 << 40);
    let list = props.to_property_list().expect("encode failed");
    assert_eq!(list.as_words()[1], 1 << 40);
}

#[cfg(target_pointer_width = "32")]
#[test]
fn test_wide_integer_rejected_on_32_bit() {
    let mut props = ContextProperties::new();
    props.memory_initialize_khr = Some(1 << 40);
    assert!(matches!(
        props.to_property_list(),
        Err(Error::UnsupportedValueWidth { .. })
    ));
}
