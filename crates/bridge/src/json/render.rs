//! JSON text rendering of a value tree.
//!
//! Writes UTF-8 JSON directly to a buffer. Indentation affects whitespace
//! only; the rendered content is identical across modes.

use msgpack_bridge_buffers::Writer;

use msgpack_bridge_base64::to_base64;
use msgpack_bridge_codec::{Ext, Value};

use super::{BIN_URI_START, EXT_URI_START};
use crate::options::Indent;

/// Renders a value tree as JSON text in the given indentation mode.
pub fn render(value: &Value, indent: Indent) -> String {
    Renderer::new(indent).render(value)
}

pub struct Renderer {
    writer: Writer,
    indent: Indent,
    depth: usize,
}

impl Renderer {
    pub fn new(indent: Indent) -> Self {
        Self {
            writer: Writer::new(),
            indent,
            depth: 0,
        }
    }

    pub fn render(&mut self, value: &Value) -> String {
        self.writer.reset();
        self.depth = 0;
        self.write_any(value);
        String::from_utf8_lossy(&self.writer.flush()).into_owned()
    }

    fn write_any(&mut self, value: &Value) {
        match value {
            Value::Nil => self.writer.ascii("null"),
            Value::Bool(true) => self.writer.ascii("true"),
            Value::Bool(false) => self.writer.ascii("false"),
            Value::Int(i) => self.writer.ascii(&i.to_string()),
            Value::UInt(u) => self.writer.ascii(&u.to_string()),
            Value::F32(f) => self.writer.ascii(&format_f64(*f as f64)),
            Value::F64(f) => self.writer.ascii(&format_f64(*f)),
            Value::Str(s) => self.write_str(s),
            Value::Bin(b) => self.write_bin(b),
            Value::Ext(ext) => self.write_ext(ext),
            Value::Array(arr) => self.write_arr(arr),
            Value::Map(map) => self.write_map(map),
        }
    }

    fn write_str(&mut self, s: &str) {
        // serde_json handles escaping; strings render identically either way.
        match serde_json::to_string(s) {
            Ok(escaped) => self.writer.utf8(&escaped),
            Err(_) => self.writer.utf8("\"\""),
        };
    }

    fn write_bin(&mut self, buf: &[u8]) {
        self.writer.u8(b'"');
        self.writer.ascii(BIN_URI_START);
        self.writer.ascii(&to_base64(buf));
        self.writer.u8(b'"');
    }

    fn write_ext(&mut self, ext: &Ext) {
        self.writer.u8(b'"');
        self.writer.ascii(EXT_URI_START);
        self.writer.ascii(&ext.tag.to_string());
        self.writer.u8(b',');
        self.writer.ascii(&to_base64(&ext.data));
        self.writer.u8(b'"');
    }

    fn write_arr(&mut self, arr: &[Value]) {
        if arr.is_empty() {
            self.writer.ascii("[]");
            return;
        }
        self.writer.u8(b'[');
        self.depth += 1;
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.writer.u8(b',');
            }
            self.break_line();
            self.write_any(item);
        }
        self.depth -= 1;
        self.break_line();
        self.writer.u8(b']');
    }

    fn write_map(&mut self, map: &[(Value, Value)]) {
        if map.is_empty() {
            self.writer.ascii("{}");
            return;
        }
        self.writer.u8(b'{');
        self.depth += 1;
        for (i, (key, val)) in map.iter().enumerate() {
            if i > 0 {
                self.writer.u8(b',');
            }
            self.break_line();
            self.write_key(key);
            self.writer.u8(b':');
            if self.indent != Indent::Minified {
                self.writer.u8(b' ');
            }
            self.write_any(val);
        }
        self.depth -= 1;
        self.break_line();
        self.writer.u8(b'}');
    }

    /// JSON object keys must be strings; a non-string key renders as its own
    /// minified JSON wrapped in a string literal.
    fn write_key(&mut self, key: &Value) {
        match key {
            Value::Str(s) => self.write_str(s),
            other => {
                let literal = Renderer::new(Indent::Minified).render(other);
                self.write_str(&literal);
            }
        }
    }

    fn break_line(&mut self) {
        if self.indent == Indent::Minified {
            return;
        }
        self.writer.u8(b'\n');
        for _ in 0..self.depth {
            self.writer.ascii(self.indent.unit());
        }
    }
}

/// JSON number text for a float. Whole values keep a `.0` suffix so the
/// float-ness survives a reparse; NaN and infinities have no JSON
/// representation and render as null.
fn format_f64(f: f64) -> String {
    if !f.is_finite() {
        return "null".to_string();
    }
    if f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        format!("{f}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_keep_their_float_shape() {
        assert_eq!(format_f64(1.0), "1.0");
        assert_eq!(format_f64(-0.5), "-0.5");
        assert_eq!(format_f64(f64::NAN), "null");
        assert_eq!(format_f64(f64::INFINITY), "null");
    }

    #[test]
    fn minified_has_no_whitespace() {
        let value = Value::map_from([(
            "a",
            Value::Array(vec![Value::Int(1), Value::Bool(true)]),
        )]);
        assert_eq!(render(&value, Indent::Minified), r#"{"a":[1,true]}"#);
    }

    #[test]
    fn two_space_layout() {
        let value = Value::map_from([("a", Value::Array(vec![Value::Int(1)]))]);
        assert_eq!(
            render(&value, Indent::TwoSpaces),
            "{\n  \"a\": [\n    1\n  ]\n}"
        );
    }

    #[test]
    fn tab_layout() {
        let value = Value::map_from([("a", Value::Int(1))]);
        assert_eq!(render(&value, Indent::Tab), "{\n\t\"a\": 1\n}");
    }

    #[test]
    fn non_string_keys_render_as_string_literals() {
        let value = Value::Map(vec![(Value::Int(1), Value::Str("x".into()))]);
        assert_eq!(render(&value, Indent::Minified), r#"{"1":"x"}"#);
    }

    #[test]
    fn empty_containers_stay_inline() {
        let value = Value::map_from([
            ("a", Value::Array(vec![])),
            ("m", Value::Map(vec![])),
        ]);
        assert_eq!(
            render(&value, Indent::TwoSpaces),
            "{\n  \"a\": [],\n  \"m\": {}\n}"
        );
    }
}
