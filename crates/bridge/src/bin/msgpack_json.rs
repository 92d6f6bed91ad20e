//! `msgpack-json` — convert between MessagePack (Base64/hex) and JSON.
//!
//! Usage:
//!   msgpack-json [--mode b64-to-json|json-to-b64|hex-to-json|json-to-hex]
//!                [--indent 2|4|tab|min] [--separator none|space|dash|comma]
//!
//! Reads the source text from stdin and writes the converted text to stdout.

use std::io::{self, Read, Write};

use msgpack_bridge::{convert, ConvertMode, ConvertOptions, HexSeparator, Indent};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut mode = ConvertMode::MsgpackBase64ToJson;
    let mut options = ConvertOptions::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--mode" => {
                i += 1;
                mode = match args.get(i).map(String::as_str) {
                    Some("b64-to-json") => ConvertMode::MsgpackBase64ToJson,
                    Some("json-to-b64") => ConvertMode::JsonToMsgpackBase64,
                    Some("hex-to-json") => ConvertMode::MsgpackHexToJson,
                    Some("json-to-hex") => ConvertMode::JsonToMsgpackHex,
                    other => {
                        eprintln!("Unknown mode: {}", other.unwrap_or(""));
                        std::process::exit(1);
                    }
                };
            }
            "--indent" => {
                i += 1;
                options.indent = match args.get(i).map(String::as_str) {
                    Some("2") => Indent::TwoSpaces,
                    Some("4") => Indent::FourSpaces,
                    Some("tab") => Indent::Tab,
                    Some("min") => Indent::Minified,
                    other => {
                        eprintln!("Unknown indent: {}", other.unwrap_or(""));
                        std::process::exit(1);
                    }
                };
            }
            "--separator" => {
                i += 1;
                options.hex_separator = match args.get(i).map(String::as_str) {
                    Some("none") => HexSeparator::None,
                    Some("space") => HexSeparator::Space,
                    Some("dash") => HexSeparator::Dash,
                    Some("comma") => HexSeparator::Comma,
                    other => {
                        eprintln!("Unknown separator: {}", other.unwrap_or(""));
                        std::process::exit(1);
                    }
                };
            }
            flag => {
                eprintln!("Unknown flag: {flag}");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    let output = convert(&buf, mode, options);
    let mut stdout = io::stdout();
    if writeln!(stdout, "{output}").is_err() {
        std::process::exit(1);
    }
}
