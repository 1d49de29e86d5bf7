use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

/// The wire layout of an NBT stream. The three variants share one semantic
/// model and differ only in how integers and length prefixes are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Fixed-width big-endian integers. Used by world saves and most files
    /// on disk.
    BigEndian,
    /// Fixed-width little-endian integers. Used by item NBT inside packets.
    LittleEndian,
    /// Little-endian with variable-length integers: `Int` payloads, list
    /// and array lengths are zig-zag varints, string lengths are plain
    /// varuints. Used for NBT sent directly in packet fields.
    NetworkLittleEndian,
}

impl Encoding {
    pub(crate) fn read_i16<R: Read>(self, r: &mut R) -> io::Result<i16> {
        match self {
            Encoding::BigEndian => r.read_i16::<BigEndian>(),
            _ => r.read_i16::<LittleEndian>(),
        }
    }

    pub(crate) fn write_i16<W: Write>(self, w: &mut W, v: i16) -> io::Result<()> {
        match self {
            Encoding::BigEndian => w.write_i16::<BigEndian>(v),
            _ => w.write_i16::<LittleEndian>(v),
        }
    }

    pub(crate) fn read_i32<R: Read>(self, r: &mut R) -> io::Result<i32> {
        match self {
            Encoding::BigEndian => r.read_i32::<BigEndian>(),
            Encoding::LittleEndian => r.read_i32::<LittleEndian>(),
            Encoding::NetworkLittleEndian => read_varint32(r),
        }
    }

    pub(crate) fn write_i32<W: Write>(self, w: &mut W, v: i32) -> io::Result<()> {
        match self {
            Encoding::BigEndian => w.write_i32::<BigEndian>(v),
            Encoding::LittleEndian => w.write_i32::<LittleEndian>(v),
            Encoding::NetworkLittleEndian => write_varint32(w, v),
        }
    }

    pub(crate) fn read_i64<R: Read>(self, r: &mut R) -> io::Result<i64> {
        match self {
            Encoding::BigEndian => r.read_i64::<BigEndian>(),
            _ => r.read_i64::<LittleEndian>(),
        }
    }

    pub(crate) fn write_i64<W: Write>(self, w: &mut W, v: i64) -> io::Result<()> {
        match self {
            Encoding::BigEndian => w.write_i64::<BigEndian>(v),
            _ => w.write_i64::<LittleEndian>(v),
        }
    }

    pub(crate) fn read_f32<R: Read>(self, r: &mut R) -> io::Result<f32> {
        match self {
            Encoding::BigEndian => r.read_f32::<BigEndian>(),
            _ => r.read_f32::<LittleEndian>(),
        }
    }

    pub(crate) fn write_f32<W: Write>(self, w: &mut W, v: f32) -> io::Result<()> {
        match self {
            Encoding::BigEndian => w.write_f32::<BigEndian>(v),
            _ => w.write_f32::<LittleEndian>(v),
        }
    }

    pub(crate) fn read_f64<R: Read>(self, r: &mut R) -> io::Result<f64> {
        match self {
            Encoding::BigEndian => r.read_f64::<BigEndian>(),
            _ => r.read_f64::<LittleEndian>(),
        }
    }

    pub(crate) fn write_f64<W: Write>(self, w: &mut W, v: f64) -> io::Result<()> {
        match self {
            Encoding::BigEndian => w.write_f64::<BigEndian>(v),
            _ => w.write_f64::<LittleEndian>(v),
        }
    }

    /// Reads the byte count of a string. Strings are framed as a u16 in the
    /// fixed-width variants and as a plain varuint in the network variant.
    pub(crate) fn read_string_len<R: Read>(self, r: &mut R) -> io::Result<u32> {
        match self {
            Encoding::BigEndian => Ok(u32::from(r.read_u16::<BigEndian>()?)),
            Encoding::LittleEndian => Ok(u32::from(r.read_u16::<LittleEndian>()?)),
            Encoding::NetworkLittleEndian => read_varuint32(r),
        }
    }

    pub(crate) fn write_string_len<W: Write>(self, w: &mut W, len: usize) -> io::Result<()> {
        match self {
            Encoding::BigEndian => w.write_u16::<BigEndian>(len as u16),
            Encoding::LittleEndian => w.write_u16::<LittleEndian>(len as u16),
            Encoding::NetworkLittleEndian => write_varuint32(w, len as u32),
        }
    }

    /// Reads the element count of a list or array, an i32 in the fixed
    /// variants and a zig-zag varint in the network variant.
    pub(crate) fn read_seq_len<R: Read>(self, r: &mut R) -> io::Result<i32> {
        self.read_i32(r)
    }

    pub(crate) fn write_seq_len<W: Write>(self, w: &mut W, len: usize) -> io::Result<()> {
        self.write_i32(w, len as i32)
    }
}

fn read_varuint32<R: Read>(r: &mut R) -> io::Result<u32> {
    let mut value = 0u32;
    for i in 0..5 {
        let byte = r.read_u8()?;
        value |= u32::from(byte & 0x7F) << (7 * i);
        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(io::Error::new(
        io::ErrorKind::InvalidData,
        "varuint32 did not terminate after 5 bytes",
    ))
}

fn write_varuint32<W: Write>(w: &mut W, mut value: u32) -> io::Result<()> {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        w.write_u8(byte)?;
        if value == 0 {
            return Ok(());
        }
    }
}

fn read_varint32<R: Read>(r: &mut R) -> io::Result<i32> {
    let ux = read_varuint32(r)?;
    let mut x = (ux >> 1) as i32;
    if ux & 1 != 0 {
        x = !x;
    }
    Ok(x)
}

fn write_varint32<W: Write>(w: &mut W, v: i32) -> io::Result<()> {
    let ux = ((v << 1) ^ (v >> 31)) as u32;
    write_varuint32(w, ux)
}
