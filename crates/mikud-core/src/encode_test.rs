use super::*;

#[test]
fn strict_encodes_space_as_percent_20() {
    assert_eq!(encode_field("a b", EncodeMode::Strict), "a%20b");
}

#[test]
fn space_preserving_keeps_literal_spaces() {
    let encoded = encode_field("שדרות העצמאות", EncodeMode::SpacePreserving);
    assert!(encoded.contains(' '));
    assert!(!encoded.contains("%20"));
}

#[test]
fn space_preserving_never_uses_plus() {
    assert_eq!(encode_field("a b c", EncodeMode::SpacePreserving), "a b c");
}

#[test]
fn strict_output_has_no_literal_space() {
    let encoded = encode_field("המלך ג'ורג'", EncodeMode::Strict);
    assert!(!encoded.contains(' '));
}

#[test]
fn hebrew_is_utf8_percent_encoded() {
    // "תל" is D7 AA D7 9C in UTF-8.
    assert_eq!(encode_field("תל", EncodeMode::Strict), "%D7%AA%D7%9C");
}

#[test]
fn hebrew_with_space_in_preserving_mode() {
    assert_eq!(
        encode_field("תל אביב", EncodeMode::SpacePreserving),
        "%D7%AA%D7%9C %D7%90%D7%91%D7%99%D7%91"
    );
}

#[test]
fn alphanumerics_pass_through_in_both_modes() {
    assert_eq!(encode_field("Herzl12", EncodeMode::Strict), "Herzl12");
    assert_eq!(encode_field("Herzl12", EncodeMode::SpacePreserving), "Herzl12");
}

#[test]
fn component_safe_punctuation_passes_through() {
    // encodeURIComponent leaves -_.!~*'() unescaped.
    let s = "-_.!~*'()";
    assert_eq!(encode_field(s, EncodeMode::Strict), s);
    assert_eq!(encode_field(s, EncodeMode::SpacePreserving), s);
}

#[test]
fn reserved_punctuation_is_escaped() {
    assert_eq!(encode_field("a&b=c", EncodeMode::Strict), "a%26b%3Dc");
    assert_eq!(encode_field("a/b?c", EncodeMode::Strict), "a%2Fb%3Fc");
}

#[test]
fn apostrophe_in_street_name_survives() {
    // ג'ורג' — the geresh is an ASCII apostrophe, safe per encodeURIComponent.
    let encoded = encode_field("ג'ורג'", EncodeMode::SpacePreserving);
    assert_eq!(encoded, "%D7%92'%D7%95%D7%A8%D7%92'");
}

#[test]
fn plain_ascii_identical_under_both_modes() {
    // No spaces, no specials: the two modes must agree byte for byte.
    let s = "Allenby9";
    assert_eq!(
        encode_field(s, EncodeMode::Strict),
        encode_field(s, EncodeMode::SpacePreserving)
    );
}
