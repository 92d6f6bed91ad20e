//! Canonical MessagePack encoder.
//!
//! Every value is written with the smallest format tag that exactly
//! represents it: positive fixint before uint8 before uint16 and so on, and
//! the smallest length-prefix family for str/bin/array/map payloads. Encoding
//! a well-formed tree never fails.

use msgpack_bridge_buffers::Writer;

use crate::{Ext, Value};

pub struct Encoder {
    writer: Writer,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Encoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    pub fn encode(&mut self, value: &Value) -> Vec<u8> {
        self.writer.reset();
        self.write_any(value);
        self.writer.flush()
    }

    pub fn write_any(&mut self, value: &Value) {
        match value {
            Value::Nil => self.writer.u8(0xc0),
            Value::Bool(b) => self.writer.u8(if *b { 0xc3 } else { 0xc2 }),
            Value::Int(i) => self.write_int(*i),
            Value::UInt(u) => self.write_uint(*u),
            Value::F32(f) => self.write_f32(*f),
            Value::F64(f) => self.write_f64(*f),
            Value::Str(s) => self.write_str(s),
            Value::Bin(b) => self.write_bin(b),
            Value::Array(arr) => self.write_arr(arr),
            Value::Map(map) => self.write_map(map),
            Value::Ext(ext) => self.write_ext(ext),
        }
    }

    pub fn write_int(&mut self, int: i64) {
        if int >= 0 {
            self.write_uint(int as u64);
        } else if int >= -0x20 {
            // negative fixint: 0xe0-0xff
            self.writer.u8(int as u8);
        } else if int >= -0x80 {
            self.writer.u8(0xd0);
            self.writer.i8(int as i8);
        } else if int >= -0x8000 {
            self.writer.u8(0xd1);
            self.writer.i16(int as i16);
        } else if int >= -0x8000_0000 {
            self.writer.u8(0xd2);
            self.writer.i32(int as i32);
        } else {
            self.writer.u8(0xd3);
            self.writer.i64(int);
        }
    }

    pub fn write_uint(&mut self, uint: u64) {
        if uint <= 0x7f {
            // positive fixint
            self.writer.u8(uint as u8);
        } else if uint <= 0xff {
            self.writer.u16(0xcc00 | uint as u16);
        } else if uint <= 0xffff {
            self.writer.u8u16(0xcd, uint as u16);
        } else if uint <= 0xffff_ffff {
            self.writer.u8u32(0xce, uint as u32);
        } else {
            self.writer.u8u64(0xcf, uint);
        }
    }

    pub fn write_f32(&mut self, float: f32) {
        self.writer.u8(0xca);
        self.writer.f32(float);
    }

    pub fn write_f64(&mut self, float: f64) {
        self.writer.u8(0xcb);
        self.writer.f64(float);
    }

    pub fn write_str_hdr(&mut self, length: usize) {
        if length <= 0x1f {
            self.writer.u8(0xa0 | length as u8);
        } else if length <= 0xff {
            self.writer.u16(0xd900 | length as u16);
        } else if length <= 0xffff {
            self.writer.u8u16(0xda, length as u16);
        } else {
            self.writer.u8u32(0xdb, length as u32);
        }
    }

    pub fn write_str(&mut self, s: &str) {
        self.write_str_hdr(s.len());
        self.writer.utf8(s);
    }

    pub fn write_bin_hdr(&mut self, length: usize) {
        if length <= 0xff {
            self.writer.u16(0xc400 | length as u16);
        } else if length <= 0xffff {
            self.writer.u8u16(0xc5, length as u16);
        } else {
            self.writer.u8u32(0xc6, length as u32);
        }
    }

    pub fn write_bin(&mut self, buf: &[u8]) {
        self.write_bin_hdr(buf.len());
        self.writer.buf(buf);
    }

    pub fn write_arr_hdr(&mut self, length: usize) {
        if length <= 0xf {
            self.writer.u8(0x90 | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xdc, length as u16);
        } else {
            self.writer.u8u32(0xdd, length as u32);
        }
    }

    pub fn write_arr(&mut self, arr: &[Value]) {
        self.write_arr_hdr(arr.len());
        for item in arr {
            self.write_any(item);
        }
    }

    pub fn write_map_hdr(&mut self, length: usize) {
        if length <= 0xf {
            self.writer.u8(0x80 | length as u8);
        } else if length <= 0xffff {
            self.writer.u8u16(0xde, length as u16);
        } else {
            self.writer.u8u32(0xdf, length as u32);
        }
    }

    pub fn write_map(&mut self, map: &[(Value, Value)]) {
        self.write_map_hdr(map.len());
        for (key, val) in map {
            self.write_any(key);
            self.write_any(val);
        }
    }

    pub fn write_ext(&mut self, ext: &Ext) {
        let length = ext.data.len();
        match length {
            1 => self.writer.u8(0xd4),
            2 => self.writer.u8(0xd5),
            4 => self.writer.u8(0xd6),
            8 => self.writer.u8(0xd7),
            16 => self.writer.u8(0xd8),
            _ => {
                if length <= 0xff {
                    self.writer.u16(0xc700 | length as u16);
                } else if length <= 0xffff {
                    self.writer.u8u16(0xc8, length as u16);
                } else {
                    self.writer.u8u32(0xc9, length as u32);
                }
            }
        }
        self.writer.i8(ext.tag);
        self.writer.buf(&ext.data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(value: &Value) -> Vec<u8> {
        Encoder::new().encode(value)
    }

    #[test]
    fn integer_width_ladder() {
        assert_eq!(encode(&Value::Int(0)), [0x00]);
        assert_eq!(encode(&Value::Int(127)), [0x7f]);
        assert_eq!(encode(&Value::Int(128)), [0xcc, 0x80]);
        assert_eq!(encode(&Value::Int(255)), [0xcc, 0xff]);
        assert_eq!(encode(&Value::Int(256)), [0xcd, 0x01, 0x00]);
        assert_eq!(encode(&Value::Int(65536)), [0xce, 0, 1, 0, 0]);
        assert_eq!(
            encode(&Value::Int(1 << 32)),
            [0xcf, 0, 0, 0, 1, 0, 0, 0, 0]
        );
        assert_eq!(encode(&Value::Int(-1)), [0xff]);
        assert_eq!(encode(&Value::Int(-32)), [0xe0]);
        assert_eq!(encode(&Value::Int(-33)), [0xd0, 0xdf]);
        assert_eq!(encode(&Value::Int(-128)), [0xd0, 0x80]);
        assert_eq!(encode(&Value::Int(-129)), [0xd1, 0xff, 0x7f]);
        assert_eq!(
            encode(&Value::Int(i64::MIN)),
            [0xd3, 0x80, 0, 0, 0, 0, 0, 0, 0]
        );
        assert_eq!(
            encode(&Value::UInt(u64::MAX)),
            [0xcf, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]
        );
    }

    #[test]
    fn float_width_is_preserved() {
        assert_eq!(encode(&Value::F32(1.5)), [0xca, 0x3f, 0xc0, 0x00, 0x00]);
        assert_eq!(
            encode(&Value::F64(1.5)),
            [0xcb, 0x3f, 0xf8, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn string_header_selection_uses_byte_length() {
        assert_eq!(encode(&Value::Str("".into())), [0xa0]);
        assert_eq!(encode(&Value::Str("foo".into())), [0xa3, b'f', b'o', b'o']);
        // 31 bytes fits fixstr, 32 spills to str8.
        let s31 = "a".repeat(31);
        assert_eq!(encode(&Value::Str(s31))[0], 0xbf);
        let s32 = "a".repeat(32);
        assert_eq!(&encode(&Value::Str(s32))[..2], &[0xd9, 32]);
        // Multibyte text: 10 chars but 30 bytes still fits fixstr.
        let euro = "€".repeat(10);
        assert_eq!(encode(&Value::Str(euro))[0], 0xa0 | 30);
    }

    #[test]
    fn container_header_selection() {
        let arr15 = Value::Array(vec![Value::Nil; 15]);
        assert_eq!(encode(&arr15)[0], 0x9f);
        let arr16 = Value::Array(vec![Value::Nil; 16]);
        assert_eq!(&encode(&arr16)[..3], &[0xdc, 0x00, 0x10]);

        let map16 = Value::map_from((0..16).map(|i| (i.to_string(), Value::Int(i))));
        assert_eq!(&encode(&map16)[..3], &[0xde, 0x00, 0x10]);
    }

    #[test]
    fn ext_header_selection() {
        assert_eq!(encode(&Value::Ext(Ext::new(5, vec![0xaa]))), [0xd4, 5, 0xaa]);
        assert_eq!(
            encode(&Value::Ext(Ext::new(-1, vec![1, 2, 3]))),
            [0xc7, 3, 0xff, 1, 2, 3]
        );
        let ext16 = Value::Ext(Ext::new(7, vec![0; 300]));
        assert_eq!(&encode(&ext16)[..4], &[0xc8, 0x01, 0x2c, 7]);
    }
}
