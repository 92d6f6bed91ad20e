//! End-to-end conversion matrix across all four pipeline directions.

use msgpack_bridge::{
    convert, ConvertMode, ConvertOptions, HexSeparator, Indent, INVALID_BASE64, INVALID_HEX,
    INVALID_JSON, INVALID_MSGPACK,
};

const FIXTURE_JSON: &str = r#"{"a":1,"b":[true,null,"x"]}"#;
const FIXTURE_B64: &str = "gqFhAaFik8PAoXg=";

fn with(indent: Indent, hex_separator: HexSeparator) -> ConvertOptions {
    ConvertOptions {
        indent,
        hex_separator,
        ..ConvertOptions::default()
    }
}

#[test]
fn json_to_base64() {
    let options = ConvertOptions::default();
    assert_eq!(
        convert(FIXTURE_JSON, ConvertMode::JsonToMsgpackBase64, options),
        FIXTURE_B64
    );
}

#[test]
fn json_to_hex_all_separators() {
    let cases = [
        (HexSeparator::None, "82A16101A16293C3C0A178"),
        (HexSeparator::Space, "82 A1 61 01 A1 62 93 C3 C0 A1 78"),
        (HexSeparator::Dash, "82-A1-61-01-A1-62-93-C3-C0-A1-78"),
        (HexSeparator::Comma, "82,A1,61,01,A1,62,93,C3,C0,A1,78"),
    ];
    for (separator, expected) in cases {
        let options = with(Indent::Minified, separator);
        assert_eq!(
            convert(FIXTURE_JSON, ConvertMode::JsonToMsgpackHex, options),
            expected
        );
    }
}

#[test]
fn base64_to_json() {
    let options = with(Indent::Minified, HexSeparator::None);
    assert_eq!(
        convert(FIXTURE_B64, ConvertMode::MsgpackBase64ToJson, options),
        FIXTURE_JSON
    );
}

#[test]
fn hex_to_json_any_separator_mix() {
    let options = with(Indent::Minified, HexSeparator::None);
    for input in [
        "82A16101A16293C3C0A178",
        "82-A1-61-01-A1-62-93-C3-C0-A1-78",
        "82 a1 61 01,a1-62 93 c3 c0 a1 78",
    ] {
        assert_eq!(
            convert(input, ConvertMode::MsgpackHexToJson, options),
            FIXTURE_JSON
        );
    }
}

#[test]
fn indentation_changes_whitespace_only() {
    let minified = convert(
        FIXTURE_B64,
        ConvertMode::MsgpackBase64ToJson,
        with(Indent::Minified, HexSeparator::None),
    );
    for indent in [Indent::TwoSpaces, Indent::FourSpaces, Indent::Tab] {
        let pretty = convert(
            FIXTURE_B64,
            ConvertMode::MsgpackBase64ToJson,
            with(indent, HexSeparator::None),
        );
        let squeezed: String = pretty.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(squeezed, minified);
        assert_ne!(pretty, minified);
    }
}

#[test]
fn two_space_layout_of_fixture() {
    let options = with(Indent::TwoSpaces, HexSeparator::None);
    assert_eq!(
        convert(FIXTURE_B64, ConvertMode::MsgpackBase64ToJson, options),
        "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    null,\n    \"x\"\n  ]\n}"
    );
}

#[test]
fn non_canonical_input_normalizes_on_reencode() {
    let options = with(Indent::Minified, HexSeparator::None);
    // uint16 encoding of 1; the canonical form is the fixint 0x01.
    let json = convert("CD0001", ConvertMode::MsgpackHexToJson, options);
    assert_eq!(json, "1");
    assert_eq!(convert(&json, ConvertMode::JsonToMsgpackHex, options), "01");
}

#[test]
fn blank_input_is_empty_everywhere() {
    for mode in [
        ConvertMode::MsgpackBase64ToJson,
        ConvertMode::JsonToMsgpackBase64,
        ConvertMode::MsgpackHexToJson,
        ConvertMode::JsonToMsgpackHex,
    ] {
        assert_eq!(convert("   ", mode, ConvertOptions::default()), "");
    }
}

#[test]
fn sentinel_matrix() {
    let options = ConvertOptions::default();
    assert_eq!(
        convert("====", ConvertMode::MsgpackBase64ToJson, options),
        INVALID_BASE64
    );
    assert_eq!(
        convert("0x!!", ConvertMode::MsgpackHexToJson, options),
        INVALID_HEX
    );
    // Valid hex whose payload truncates mid-array.
    assert_eq!(
        convert("92C3", ConvertMode::MsgpackHexToJson, options),
        INVALID_MSGPACK
    );
    // Trailing bytes after a complete document are also rejected.
    assert_eq!(
        convert("C3C3", ConvertMode::MsgpackHexToJson, options),
        INVALID_MSGPACK
    );
    assert_eq!(
        convert("{\"a\":}", ConvertMode::JsonToMsgpackBase64, options),
        INVALID_JSON
    );
    assert_eq!(
        convert("not json", ConvertMode::JsonToMsgpackHex, options),
        INVALID_JSON
    );
}

#[test]
fn float_values_survive_both_directions() {
    let options = with(Indent::Minified, HexSeparator::None);
    let hex = convert("[1.5,2.0]", ConvertMode::JsonToMsgpackHex, options);
    // float64 markers for both elements.
    assert_eq!(hex, "92CB3FF8000000000000CB4000000000000000");
    assert_eq!(
        convert(&hex, ConvertMode::MsgpackHexToJson, options),
        "[1.5,2.0]"
    );
}

#[test]
fn uint64_above_i64_max_round_trips() {
    let options = with(Indent::Minified, HexSeparator::None);
    let hex = convert(
        "18446744073709551615",
        ConvertMode::JsonToMsgpackHex,
        options,
    );
    assert_eq!(hex, "CFFFFFFFFFFFFFFFFF");
    assert_eq!(
        convert(&hex, ConvertMode::MsgpackHexToJson, options),
        "18446744073709551615"
    );
}
