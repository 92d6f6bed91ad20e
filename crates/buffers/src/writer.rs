//! Binary buffer writer with auto-growing capacity.

/// A big-endian binary writer that grows its buffer automatically.
///
/// # Example
///
/// ```
/// use msgpack_bridge_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.u16(0x0203);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0x02, 0x03]);
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    buf: Vec<u8>,
    /// Position of the last flush.
    x0: usize,
    /// Current cursor position.
    x: usize,
    /// Allocation step when the buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a writer with the default allocation step (16KB).
    pub fn new() -> Self {
        Self::with_alloc_size(16 * 1024)
    }

    /// Creates a writer with a custom allocation step.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        Self {
            buf: vec![0u8; alloc_size],
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.buf.len() - self.x;
        if remaining < capacity {
            let pending = self.x - self.x0;
            let required = pending + capacity;
            let new_size = if required <= self.alloc_size {
                self.alloc_size
            } else {
                required * 2
            };
            let mut grown = vec![0u8; new_size];
            grown[..pending].copy_from_slice(&self.buf[self.x0..self.x]);
            self.buf = grown;
            self.x = pending;
            self.x0 = 0;
        }
    }

    /// Marks the current cursor as the start of the next flush.
    pub fn reset(&mut self) {
        self.x0 = self.x;
    }

    /// Returns the bytes written since the last flush and advances the flush mark.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.buf[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    /// Number of bytes written since the last flush.
    pub fn written(&self) -> usize {
        self.x - self.x0
    }

    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.buf[self.x] = val;
        self.x += 1;
    }

    #[inline]
    pub fn i8(&mut self, val: i8) {
        self.u8(val as u8);
    }

    #[inline]
    pub fn u16(&mut self, val: u16) {
        self.ensure_capacity(2);
        self.buf[self.x..self.x + 2].copy_from_slice(&val.to_be_bytes());
        self.x += 2;
    }

    #[inline]
    pub fn i16(&mut self, val: i16) {
        self.u16(val as u16);
    }

    #[inline]
    pub fn u32(&mut self, val: u32) {
        self.ensure_capacity(4);
        self.buf[self.x..self.x + 4].copy_from_slice(&val.to_be_bytes());
        self.x += 4;
    }

    #[inline]
    pub fn i32(&mut self, val: i32) {
        self.u32(val as u32);
    }

    #[inline]
    pub fn u64(&mut self, val: u64) {
        self.ensure_capacity(8);
        self.buf[self.x..self.x + 8].copy_from_slice(&val.to_be_bytes());
        self.x += 8;
    }

    #[inline]
    pub fn i64(&mut self, val: i64) {
        self.u64(val as u64);
    }

    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.u32(val.to_bits());
    }

    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.u64(val.to_bits());
    }

    /// Writes a `u8` followed by a big-endian `u16`.
    pub fn u8u16(&mut self, a: u8, b: u16) {
        self.ensure_capacity(3);
        self.buf[self.x] = a;
        self.buf[self.x + 1..self.x + 3].copy_from_slice(&b.to_be_bytes());
        self.x += 3;
    }

    /// Writes a `u8` followed by a big-endian `u32`.
    pub fn u8u32(&mut self, a: u8, b: u32) {
        self.ensure_capacity(5);
        self.buf[self.x] = a;
        self.buf[self.x + 1..self.x + 5].copy_from_slice(&b.to_be_bytes());
        self.x += 5;
    }

    /// Writes a `u8` followed by a big-endian `u64`.
    pub fn u8u64(&mut self, a: u8, b: u64) {
        self.ensure_capacity(9);
        self.buf[self.x] = a;
        self.buf[self.x + 1..self.x + 9].copy_from_slice(&b.to_be_bytes());
        self.x += 9;
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, bytes: &[u8]) {
        let length = bytes.len();
        self.ensure_capacity(length);
        self.buf[self.x..self.x + length].copy_from_slice(bytes);
        self.x += length;
    }

    /// Writes the UTF-8 bytes of a string. Returns the number of bytes written.
    pub fn utf8(&mut self, s: &str) -> usize {
        self.buf(s.as_bytes());
        s.len()
    }

    /// Writes an ASCII string.
    pub fn ascii(&mut self, s: &str) {
        self.buf(s.as_bytes());
    }
}
