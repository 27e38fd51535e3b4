//! TSF version 1.
//!
//! ```text
//! offset            field     type
//! 0                 version   u32   (= 1)
//! 4                 id        u32
//! 8                 x_count   u64
//! 16                x_values  x_count * f64
//! 16 + 8*x_count    y_count   u64
//! 24 + 8*x_count    y_values  y_count * f64
//! ```
//!
//! Every field is little-endian with no padding. Values are written by bit
//! pattern, so NaN payloads and signed zeros survive a round trip.

use bytes::{Buf, BufMut, Bytes, BytesMut};
use tsf_path_store::{Axis, Path};

use crate::format::{Header, COUNT_LEN, TSF_VERSION_1, VALUE_LEN, VERSION_LEN};
use crate::{Codec, CodecError, DecodeOptions};

/// Version tag, id and x_count.
pub const HEADER_LEN: usize = VERSION_LEN + 4 + COUNT_LEN;

/// A buffer holding two empty sequences.
pub const MIN_LEN: usize = HEADER_LEN + COUNT_LEN;

/// Exact encoded size of a path with the given sequence lengths.
pub fn encoded_len(x_count: usize, y_count: usize) -> usize {
    MIN_LEN + VALUE_LEN * (x_count + y_count)
}

pub struct TsfV1 {
    options: DecodeOptions,
}

impl TsfV1 {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    fn check_limit(&self, axis: Axis, count: u64) -> Result<(), CodecError> {
        if count > self.options.max_elements {
            return Err(CodecError::TooManyElements {
                axis,
                count,
                limit: self.options.max_elements,
            });
        }
        Ok(())
    }

    fn read_sequence(&self, buf: &mut &[u8], axis: Axis) -> Result<Vec<f64>, CodecError> {
        let (count_field, values_field) = match axis {
            Axis::X => ("x_count", "x_values"),
            Axis::Y => ("y_count", "y_values"),
        };

        require(buf, COUNT_LEN as u64, count_field)?;
        let count = buf.get_u64_le();
        self.check_limit(axis, count)?;

        // Overflow can only mean the count is far past the end of the buffer.
        let byte_len = count.checked_mul(VALUE_LEN as u64).unwrap_or(u64::MAX);
        require(buf, byte_len, values_field)?;

        let mut values = Vec::with_capacity(count as usize);
        for _ in 0..count {
            values.push(f64::from_bits(buf.get_u64_le()));
        }
        Ok(values)
    }
}

fn require(buf: &[u8], needed: u64, field: &'static str) -> Result<(), CodecError> {
    if (buf.remaining() as u64) < needed {
        return Err(CodecError::Truncated {
            field,
            needed,
            available: buf.remaining(),
        });
    }
    Ok(())
}

fn check_version(buf: &mut &[u8]) -> Result<(), CodecError> {
    require(buf, VERSION_LEN as u64, "version")?;
    let version = buf.get_u32_le();
    if version != TSF_VERSION_1 {
        return Err(CodecError::UnsupportedVersion { version });
    }
    Ok(())
}

impl Codec for TsfV1 {
    fn version(&self) -> u32 {
        TSF_VERSION_1
    }

    fn encode(&self, path: &Path) -> Result<Bytes, CodecError> {
        // Never write what this codec would refuse to read back.
        for axis in Axis::ALL {
            self.check_limit(axis, path.coords(axis).len() as u64)?;
        }
        let mut buf = BytesMut::with_capacity(encoded_len(path.x().len(), path.y().len()));
        buf.put_u32_le(TSF_VERSION_1);
        buf.put_u32_le(path.id());
        for axis in Axis::ALL {
            let values = path.coords(axis);
            buf.put_u64_le(values.len() as u64);
            for value in values {
                buf.put_u64_le(value.to_bits());
            }
        }
        Ok(buf.freeze())
    }

    fn decode(&self, bytes: &[u8]) -> Result<Path, CodecError> {
        let mut buf = bytes;
        check_version(&mut buf)?;
        require(buf, 4, "id")?;
        let id = buf.get_u32_le();

        let x = self.read_sequence(&mut buf, Axis::X)?;
        let y = self.read_sequence(&mut buf, Axis::Y)?;

        if buf.has_remaining() {
            return Err(CodecError::TrailingBytes {
                expected: bytes.len() - buf.remaining(),
                actual: bytes.len(),
            });
        }
        Ok(Path::with_coords(id, x, y))
    }

    fn header(&self, bytes: &[u8]) -> Result<Header, CodecError> {
        let mut buf = bytes;
        check_version(&mut buf)?;
        require(buf, 4, "id")?;
        let id = buf.get_u32_le();
        require(buf, COUNT_LEN as u64, "x_count")?;
        let x_count = buf.get_u64_le();
        Ok(Header {
            version: TSF_VERSION_1,
            id,
            x_count,
        })
    }
}
