//! Strict single-pass MessagePack decoder.
//!
//! Recursive descent over the leading format byte of each term. The tag space
//! is fixed by the MessagePack specification, so dispatch is a closed match
//! over byte ranges. Container nesting is bounded by an explicit depth limit
//! so adversarial input cannot overflow the host stack.

use super::error::DecodeError;
use crate::{Ext, Value};

/// Default container nesting limit.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

pub struct Decoder {
    data: Vec<u8>,
    x: usize,
    depth: usize,
    max_depth: usize,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self::with_max_depth(DEFAULT_MAX_DEPTH)
    }

    /// Creates a decoder with a custom container nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            data: Vec::new(),
            x: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Decodes exactly one MessagePack value from `input`.
    ///
    /// Trailing bytes after the value are a [`DecodeError::TrailingData`]
    /// error; use [`Decoder::read_any`] after [`Decoder::reset`] for
    /// incremental reads.
    pub fn decode(&mut self, input: &[u8]) -> Result<Value, DecodeError> {
        self.reset(input);
        let value = self.read_any()?;
        if self.x != self.data.len() {
            return Err(DecodeError::TrailingData);
        }
        Ok(value)
    }

    /// Resets the decoder to read from the start of `input`.
    pub fn reset(&mut self, input: &[u8]) {
        self.data = input.to_vec();
        self.x = 0;
        self.depth = 0;
    }

    #[inline]
    fn check(&self, n: usize) -> Result<(), DecodeError> {
        if self.x + n > self.data.len() {
            Err(DecodeError::UnexpectedEof)
        } else {
            Ok(())
        }
    }

    #[inline]
    fn u8(&mut self) -> Result<u8, DecodeError> {
        self.check(1)?;
        let v = self.data[self.x];
        self.x += 1;
        Ok(v)
    }

    #[inline]
    fn u16(&mut self) -> Result<u16, DecodeError> {
        self.check(2)?;
        let v = u16::from_be_bytes([self.data[self.x], self.data[self.x + 1]]);
        self.x += 2;
        Ok(v)
    }

    #[inline]
    fn u32(&mut self) -> Result<u32, DecodeError> {
        self.check(4)?;
        let v = u32::from_be_bytes([
            self.data[self.x],
            self.data[self.x + 1],
            self.data[self.x + 2],
            self.data[self.x + 3],
        ]);
        self.x += 4;
        Ok(v)
    }

    #[inline]
    fn u64(&mut self) -> Result<u64, DecodeError> {
        self.check(8)?;
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&self.data[self.x..self.x + 8]);
        self.x += 8;
        Ok(u64::from_be_bytes(bytes))
    }

    #[inline]
    fn i8(&mut self) -> Result<i8, DecodeError> {
        Ok(self.u8()? as i8)
    }

    #[inline]
    fn i16(&mut self) -> Result<i16, DecodeError> {
        Ok(self.u16()? as i16)
    }

    #[inline]
    fn i32(&mut self) -> Result<i32, DecodeError> {
        Ok(self.u32()? as i32)
    }

    #[inline]
    fn i64(&mut self) -> Result<i64, DecodeError> {
        Ok(self.u64()? as i64)
    }

    #[inline]
    fn f32(&mut self) -> Result<f32, DecodeError> {
        Ok(f32::from_bits(self.u32()?))
    }

    #[inline]
    fn f64(&mut self) -> Result<f64, DecodeError> {
        Ok(f64::from_bits(self.u64()?))
    }

    fn utf8(&mut self, size: usize) -> Result<String, DecodeError> {
        self.check(size)?;
        let slice = &self.data[self.x..self.x + size];
        let s = std::str::from_utf8(slice)
            .map_err(|_| DecodeError::InvalidUtf8)?
            .to_string();
        self.x += size;
        Ok(s)
    }

    fn buf(&mut self, size: usize) -> Result<Vec<u8>, DecodeError> {
        self.check(size)?;
        let v = self.data[self.x..self.x + size].to_vec();
        self.x += size;
        Ok(v)
    }

    /// Reads one MessagePack value at the current offset.
    pub fn read_any(&mut self) -> Result<Value, DecodeError> {
        let byte = self.u8()?;

        // negative fixint: 0xe0-0xff
        if byte >= 0xe0 {
            return Ok(Value::Int(byte as i8 as i64));
        }
        // positive fixint: 0x00-0x7f
        if byte <= 0x7f {
            return Ok(Value::Int(byte as i64));
        }
        // fixmap: 0x80-0x8f
        if (0x80..=0x8f).contains(&byte) {
            return self.read_map(byte as usize & 0xf);
        }
        // fixarray: 0x90-0x9f
        if (0x90..=0x9f).contains(&byte) {
            return self.read_arr(byte as usize & 0xf);
        }
        // fixstr: 0xa0-0xbf
        if (0xa0..=0xbf).contains(&byte) {
            let n = byte as usize & 0x1f;
            return self.utf8(n).map(Value::Str);
        }

        match byte {
            0xc0 => Ok(Value::Nil),
            0xc2 => Ok(Value::Bool(false)),
            0xc3 => Ok(Value::Bool(true)),
            // bin8, bin16, bin32
            0xc4 => {
                let n = self.u8()? as usize;
                Ok(Value::Bin(self.buf(n)?))
            }
            0xc5 => {
                let n = self.u16()? as usize;
                Ok(Value::Bin(self.buf(n)?))
            }
            0xc6 => {
                let n = self.u32()? as usize;
                Ok(Value::Bin(self.buf(n)?))
            }
            // ext8, ext16, ext32
            0xc7 => {
                let n = self.u8()? as usize;
                self.read_ext(n)
            }
            0xc8 => {
                let n = self.u16()? as usize;
                self.read_ext(n)
            }
            0xc9 => {
                let n = self.u32()? as usize;
                self.read_ext(n)
            }
            // float32, float64 (wire width recorded in the value)
            0xca => Ok(Value::F32(self.f32()?)),
            0xcb => Ok(Value::F64(self.f64()?)),
            // uint8, uint16, uint32, uint64
            0xcc => Ok(Value::Int(self.u8()? as i64)),
            0xcd => Ok(Value::Int(self.u16()? as i64)),
            0xce => Ok(Value::Int(self.u32()? as i64)),
            0xcf => {
                let v = self.u64()?;
                if v <= i64::MAX as u64 {
                    Ok(Value::Int(v as i64))
                } else {
                    Ok(Value::UInt(v))
                }
            }
            // int8, int16, int32, int64
            0xd0 => Ok(Value::Int(self.i8()? as i64)),
            0xd1 => Ok(Value::Int(self.i16()? as i64)),
            0xd2 => Ok(Value::Int(self.i32()? as i64)),
            0xd3 => Ok(Value::Int(self.i64()?)),
            // fixext1, fixext2, fixext4, fixext8, fixext16
            0xd4 => self.read_ext(1),
            0xd5 => self.read_ext(2),
            0xd6 => self.read_ext(4),
            0xd7 => self.read_ext(8),
            0xd8 => self.read_ext(16),
            // str8, str16, str32
            0xd9 => {
                let n = self.u8()? as usize;
                self.utf8(n).map(Value::Str)
            }
            0xda => {
                let n = self.u16()? as usize;
                self.utf8(n).map(Value::Str)
            }
            0xdb => {
                let n = self.u32()? as usize;
                self.utf8(n).map(Value::Str)
            }
            // array16, array32
            0xdc => {
                let n = self.u16()? as usize;
                self.read_arr(n)
            }
            0xdd => {
                let n = self.u32()? as usize;
                self.read_arr(n)
            }
            // map16, map32
            0xde => {
                let n = self.u16()? as usize;
                self.read_map(n)
            }
            0xdf => {
                let n = self.u32()? as usize;
                self.read_map(n)
            }
            // 0xc1 is never a valid MessagePack value
            other => Err(DecodeError::InvalidMarker(other)),
        }
    }

    fn enter(&mut self) -> Result<(), DecodeError> {
        if self.depth >= self.max_depth {
            return Err(DecodeError::DepthLimit);
        }
        self.depth += 1;
        Ok(())
    }

    fn read_arr(&mut self, size: usize) -> Result<Value, DecodeError> {
        self.enter()?;
        let mut arr = Vec::with_capacity(size.min(self.data.len() - self.x));
        for _ in 0..size {
            arr.push(self.read_any()?);
        }
        self.depth -= 1;
        Ok(Value::Array(arr))
    }

    fn read_map(&mut self, size: usize) -> Result<Value, DecodeError> {
        self.enter()?;
        let mut map = Vec::with_capacity(size.min(self.data.len() - self.x));
        for _ in 0..size {
            // Keys are arbitrary values; order and duplicates are preserved.
            let key = self.read_any()?;
            let val = self.read_any()?;
            map.push((key, val));
        }
        self.depth -= 1;
        Ok(Value::Map(map))
    }

    fn read_ext(&mut self, size: usize) -> Result<Value, DecodeError> {
        let tag = self.i8()?;
        let data = self.buf(size)?;
        Ok(Value::Ext(Ext::new(tag, data)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncated_array_header_is_an_error() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.decode(&[0x92]), Err(DecodeError::UnexpectedEof));
    }

    #[test]
    fn reserved_marker_is_an_error() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.decode(&[0xc1]), Err(DecodeError::InvalidMarker(0xc1)));
    }

    #[test]
    fn trailing_bytes_are_an_error() {
        let mut decoder = Decoder::new();
        assert_eq!(decoder.decode(&[0xc0, 0xc0]), Err(DecodeError::TrailingData));
    }

    #[test]
    fn depth_limit_stops_nested_arrays() {
        // 40 nested single-element arrays against a limit of 8.
        let input = vec![0x91u8; 40];
        let mut decoder = Decoder::with_max_depth(8);
        assert_eq!(decoder.decode(&input), Err(DecodeError::DepthLimit));
    }

    #[test]
    fn length_prefix_past_end_is_an_error() {
        let mut decoder = Decoder::new();
        // str8 declaring 200 payload bytes with only 2 present.
        assert_eq!(
            decoder.decode(&[0xd9, 200, b'a', b'b']),
            Err(DecodeError::UnexpectedEof)
        );
    }
}
