//! Conversion modes and options.
//!
//! Options are an explicit struct passed into every conversion call; there is
//! no process-wide settings state.

/// Directional conversion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertMode {
    MsgpackBase64ToJson,
    JsonToMsgpackBase64,
    MsgpackHexToJson,
    JsonToMsgpackHex,
}

/// JSON output indentation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    TwoSpaces,
    FourSpaces,
    Tab,
    Minified,
}

impl Indent {
    /// The text unit written per nesting level. Empty for minified output.
    pub fn unit(self) -> &'static str {
        match self {
            Indent::TwoSpaces => "  ",
            Indent::FourSpaces => "    ",
            Indent::Tab => "\t",
            Indent::Minified => "",
        }
    }
}

/// Separator between hex byte pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexSeparator {
    None,
    Space,
    Dash,
    Comma,
}

impl HexSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            HexSeparator::None => "",
            HexSeparator::Space => " ",
            HexSeparator::Dash => "-",
            HexSeparator::Comma => ",",
        }
    }
}

/// Character encoding for plain text ↔ bytes transcoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Ascii,
}

/// Options bundle consumed by [`crate::convert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    pub indent: Indent,
    pub hex_separator: HexSeparator,
    pub text_encoding: TextEncoding,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            indent: Indent::TwoSpaces,
            hex_separator: HexSeparator::None,
            text_encoding: TextEncoding::Utf8,
        }
    }
}
