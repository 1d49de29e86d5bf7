use byteorder::{LittleEndian, ReadBytesExt};
use std::io;
use uuid::Uuid;

use conduit_common::error::{ProtocolError, ProtocolResult};
use conduit_common::limits::HIGHER_LIMIT;
use conduit_common::types::{BlockPos, Vec3};

/// The buffer every packet is marshalled into and unmarshalled from. Writes
/// append to the end; reads advance a cursor from the front. Reads are
/// bounds-checked and never panic on malformed input, while writes into the
/// growable buffer cannot fail.
#[derive(Debug, Default)]
pub struct PacketBuffer {
    buffer: Vec<u8>,
    cursor: usize,
}

impl PacketBuffer {
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            cursor: 0,
        }
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            buffer: bytes,
            cursor: 0,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Number of unread bytes left in front of the cursor.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Takes exactly `n` bytes from the cursor, or fails without consuming
    /// anything.
    fn take(&mut self, n: usize, context: &'static str) -> ProtocolResult<&[u8]> {
        if self.remaining() < n {
            return Err(ProtocolError::eof(context, n, self.remaining()));
        }
        let slice = &self.buffer[self.cursor..self.cursor + n];
        self.cursor += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> ProtocolResult<u8> {
        Ok(self.take(1, "u8")?[0])
    }

    pub fn write_u8(&mut self, v: u8) {
        self.buffer.push(v);
    }

    pub fn read_i8(&mut self) -> ProtocolResult<i8> {
        Ok(self.read_u8()? as i8)
    }

    pub fn write_i8(&mut self, v: i8) {
        self.write_u8(v as u8);
    }

    pub fn read_u16(&mut self) -> ProtocolResult<u16> {
        let mut slice = self.take(2, "u16")?;
        Ok(slice.read_u16::<LittleEndian>()?)
    }

    pub fn write_u16(&mut self, v: u16) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    pub fn read_i16(&mut self) -> ProtocolResult<i16> {
        let mut slice = self.take(2, "i16")?;
        Ok(slice.read_i16::<LittleEndian>()?)
    }

    pub fn write_i16(&mut self, v: i16) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    pub fn read_u32(&mut self) -> ProtocolResult<u32> {
        let mut slice = self.take(4, "u32")?;
        Ok(slice.read_u32::<LittleEndian>()?)
    }

    pub fn write_u32(&mut self, v: u32) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    pub fn read_i32(&mut self) -> ProtocolResult<i32> {
        let mut slice = self.take(4, "i32")?;
        Ok(slice.read_i32::<LittleEndian>()?)
    }

    pub fn write_i32(&mut self, v: i32) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    pub fn read_u64(&mut self) -> ProtocolResult<u64> {
        let mut slice = self.take(8, "u64")?;
        Ok(slice.read_u64::<LittleEndian>()?)
    }

    pub fn write_u64(&mut self, v: u64) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    pub fn read_i64(&mut self) -> ProtocolResult<i64> {
        let mut slice = self.take(8, "i64")?;
        Ok(slice.read_i64::<LittleEndian>()?)
    }

    pub fn write_i64(&mut self, v: i64) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    pub fn read_f32(&mut self) -> ProtocolResult<f32> {
        let mut slice = self.take(4, "f32")?;
        Ok(slice.read_f32::<LittleEndian>()?)
    }

    pub fn write_f32(&mut self, v: f32) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    pub fn read_f64(&mut self) -> ProtocolResult<f64> {
        let mut slice = self.take(8, "f64")?;
        Ok(slice.read_f64::<LittleEndian>()?)
    }

    pub fn write_f64(&mut self, v: f64) {
        self.buffer.extend_from_slice(&v.to_le_bytes());
    }

    pub fn read_bool(&mut self) -> ProtocolResult<bool> {
        Ok(self.read_u8()? != 0)
    }

    pub fn write_bool(&mut self, v: bool) {
        self.write_u8(v as u8);
    }

    /// Reads an unsigned LEB128 varint of at most 5 bytes.
    pub fn read_varuint32(&mut self) -> ProtocolResult<u32> {
        let mut value = 0u32;
        for i in 0..5 {
            let byte = self.take(1, "varuint32")?[0];
            value |= u32::from(byte & 0x7F) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(ProtocolError::malformed(
            "varuint32",
            "did not terminate after 5 bytes",
        ))
    }

    pub fn write_varuint32(&mut self, mut value: u32) {
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.buffer.push(byte);
            if value == 0 {
                return;
            }
        }
    }

    /// Reads an unsigned LEB128 varint of at most 10 bytes.
    pub fn read_varuint64(&mut self) -> ProtocolResult<u64> {
        let mut value = 0u64;
        for i in 0..10 {
            let byte = self.take(1, "varuint64")?[0];
            value |= u64::from(byte & 0x7F) << (7 * i);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        Err(ProtocolError::malformed(
            "varuint64",
            "did not terminate after 10 bytes",
        ))
    }

    pub fn write_varuint64(&mut self, mut value: u64) {
        loop {
            let mut byte = (value & 0x7F) as u8;
            value >>= 7;
            if value != 0 {
                byte |= 0x80;
            }
            self.buffer.push(byte);
            if value == 0 {
                return;
            }
        }
    }

    /// Reads a zig-zag signed varint.
    pub fn read_varint32(&mut self) -> ProtocolResult<i32> {
        let ux = self.read_varuint32()?;
        let mut x = (ux >> 1) as i32;
        if ux & 1 != 0 {
            x = !x;
        }
        Ok(x)
    }

    pub fn write_varint32(&mut self, v: i32) {
        self.write_varuint32(((v << 1) ^ (v >> 31)) as u32);
    }

    pub fn read_varint64(&mut self) -> ProtocolResult<i64> {
        let ux = self.read_varuint64()?;
        let mut x = (ux >> 1) as i64;
        if ux & 1 != 0 {
            x = !x;
        }
        Ok(x)
    }

    pub fn write_varint64(&mut self, v: i64) {
        self.write_varuint64(((v << 1) ^ (v >> 63)) as u64);
    }

    /// Reads a varuint-prefixed UTF-8 string. The payload is copied out of
    /// the buffer, so the returned string owns its storage.
    pub fn read_string(&mut self) -> ProtocolResult<String> {
        let length = self.read_varuint32()?;
        if length > HIGHER_LIMIT {
            return Err(ProtocolError::limit("string", HIGHER_LIMIT, length));
        }
        let bytes = self.take(length as usize, "string")?;
        String::from_utf8(bytes.to_vec())
            .map_err(|e| ProtocolError::malformed("string", e.to_string()))
    }

    pub fn write_string(&mut self, value: &str) {
        self.write_varuint32(value.len() as u32);
        self.buffer.extend_from_slice(value.as_bytes());
    }

    /// Reads a varuint-prefixed byte slice. Bounded only by the bytes
    /// actually present, since skin buffers legitimately run large.
    pub fn read_byte_slice(&mut self) -> ProtocolResult<Vec<u8>> {
        let length = self.read_varuint32()?;
        Ok(self.take(length as usize, "byte slice")?.to_vec())
    }

    pub fn write_byte_slice(&mut self, value: &[u8]) {
        self.write_varuint32(value.len() as u32);
        self.buffer.extend_from_slice(value);
    }

    pub fn read_bytes_raw(&mut self, n: usize, context: &'static str) -> ProtocolResult<Vec<u8>> {
        Ok(self.take(n, context)?.to_vec())
    }

    pub fn write_bytes_raw(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    pub fn read_uuid(&mut self) -> ProtocolResult<Uuid> {
        let bytes = self.take(16, "uuid")?;
        let mut raw = [0u8; 16];
        raw.copy_from_slice(bytes);
        Ok(Uuid::from_bytes(raw))
    }

    pub fn write_uuid(&mut self, uuid: Uuid) {
        self.buffer.extend_from_slice(uuid.as_bytes());
    }

    /// Reads a block position with all three components signed.
    pub fn read_block_pos(&mut self) -> ProtocolResult<BlockPos> {
        Ok(BlockPos {
            x: self.read_varint32()?,
            y: self.read_varint32()?,
            z: self.read_varint32()?,
        })
    }

    pub fn write_block_pos(&mut self, pos: BlockPos) {
        self.write_varint32(pos.x);
        self.write_varint32(pos.y);
        self.write_varint32(pos.z);
    }

    /// Reads a block position whose y component is written unsigned, as used
    /// by fields that can never sit below the world.
    pub fn read_ublock_pos(&mut self) -> ProtocolResult<BlockPos> {
        Ok(BlockPos {
            x: self.read_varint32()?,
            y: self.read_varuint32()? as i32,
            z: self.read_varint32()?,
        })
    }

    pub fn write_ublock_pos(&mut self, pos: BlockPos) {
        self.write_varint32(pos.x);
        self.write_varuint32(pos.y as u32);
        self.write_varint32(pos.z);
    }

    pub fn read_vec3(&mut self) -> ProtocolResult<Vec3> {
        Ok(Vec3 {
            x: self.read_f32()?,
            y: self.read_f32()?,
            z: self.read_f32()?,
        })
    }

    pub fn write_vec3(&mut self, vec: Vec3) {
        self.write_f32(vec.x);
        self.write_f32(vec.y);
        self.write_f32(vec.z);
    }

    /// Reads a varuint length prefix and checks it against the ceiling for
    /// its collection before anything is allocated.
    pub fn read_varuint_len(&mut self, limit: u32, context: &'static str) -> ProtocolResult<usize> {
        let count = self.read_varuint32()?;
        if count > limit {
            return Err(ProtocolError::limit(context, limit, count));
        }
        Ok(count as usize)
    }

    /// Reads a signed varint length prefix, rejecting negative counts and
    /// counts above the ceiling.
    pub fn read_varint_len(&mut self, limit: u32, context: &'static str) -> ProtocolResult<usize> {
        let count = self.read_varint32()?;
        if count < 0 {
            return Err(ProtocolError::negative(context, count));
        }
        if count as u32 > limit {
            return Err(ProtocolError::limit(context, limit, count as u32));
        }
        Ok(count as usize)
    }
}

// The NBT codec consumes its subtree straight off the packet cursor through
// this impl, sharing cursor discipline with the rest of the packet.
impl io::Read for PacketBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let to_read = buf.len().min(self.remaining());
        buf[..to_read].copy_from_slice(&self.buffer[self.cursor..self.cursor + to_read]);
        self.cursor += to_read;
        Ok(to_read)
    }
}

impl io::Write for PacketBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
