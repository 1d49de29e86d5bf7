use conduit_common::error::{ProtocolError, ProtocolResult};
use conduit_common::limits::LOWER_LIMIT;

use crate::buffer::PacketBuffer;

pub const SKIN_ANIMATION_HEAD: u32 = 1;
pub const SKIN_ANIMATION_BODY_32: u32 = 2;
pub const SKIN_ANIMATION_BODY_128: u32 = 3;

/// The skin of a player as sent over the network: a texture, a model, and
/// optional animations present for persona or marketplace skins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skin {
    /// Unique ID for the skin, such as 'c18e65aa-...-8ad63622ef01_Alex'.
    pub skin_id: String,
    /// JSON object pointing to the geometry the skin uses.
    pub skin_resource_patch: Vec<u8>,
    /// Dimensions of the skin image in pixels, not bytes.
    pub skin_image_width: u32,
    pub skin_image_height: u32,
    /// RGBA ordered pixel data of exactly width * height * 4 bytes.
    pub skin_data: Vec<u8>,
    pub animations: Vec<SkinAnimation>,
    pub cape_image_width: u32,
    pub cape_image_height: u32,
    /// RGBA ordered pixel data of the cape.
    pub cape_data: Vec<u8>,
    /// JSON encoded geometry data: bones, uv, pivot and so on.
    pub skin_geometry: Vec<u8>,
    /// Transported opaquely; its interpretation is undocumented upstream.
    pub animation_data: Vec<u8>,
    /// Whether the skin was purchased from the marketplace.
    pub premium_skin: bool,
    /// Whether the skin was created with the in-game skin creator.
    pub persona_skin: bool,
    /// Whether a persona cape was equipped on a classic skin.
    pub persona_cape_on_classic_skin: bool,
    /// Identifies the cape; usually holds a UUID.
    pub cape_id: String,
    /// Represents the skin in full; the client does not seem to send one.
    pub full_skin_id: String,
    /// Arm size of the model, either 'wide' or 'slim'.
    pub arm_size: String,
    /// Hex representation (including #) of the base colour, e.g. '#b37b62'.
    pub skin_colour: String,
    pub persona_pieces: Vec<PersonaPiece>,
    pub piece_tint_colours: Vec<PersonaPieceTintColour>,
    /// Whether the skin is 'trusted'. Not transmitted; any proxy or client
    /// can change it, so outer layers set it and nothing should rely on it.
    pub trusted: bool,
}

/// An animation the client plays on a skin by itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkinAnimation {
    /// Dimensions of the animation image in pixels.
    pub image_width: u32,
    pub image_height: u32,
    /// RGBA pixel data holding `frame_count` stacked frames.
    pub image_data: Vec<u8>,
    /// One of the animation type constants above, deciding which part of
    /// the skin the image holds.
    pub animation_type: u32,
    pub frame_count: f32,
}

/// A piece of a persona skin. Pieces are sent separately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonaPiece {
    /// UUID unique to this piece.
    pub piece_id: String,
    /// The kind of piece, such as 'persona_hair' or 'persona_eyes'.
    pub piece_type: String,
    /// UUID of the pack the piece belongs to.
    pub pack_id: String,
    /// Whether the piece is part of a default Steve or Alex skin.
    pub default: bool,
    /// UUID used for purchases; empty for default pieces.
    pub product_id: String,
}

/// Tint colours for one piece of a persona skin.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonaPieceTintColour {
    /// Piece type the colours apply to; always present in the pieces list.
    pub piece_type: String,
    /// ARGB hex colours, one per part of the piece.
    pub colours: Vec<String>,
}

impl Skin {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<Skin> {
        let mut skin = Skin {
            skin_id: buffer.read_string()?,
            skin_resource_patch: buffer.read_byte_slice()?,
            skin_image_width: buffer.read_u32()?,
            skin_image_height: buffer.read_u32()?,
            skin_data: buffer.read_byte_slice()?,
            ..Default::default()
        };
        let animation_count = read_u32_len(buffer, "skin animation")?;
        skin.animations = Vec::with_capacity(animation_count);
        for _ in 0..animation_count {
            skin.animations.push(SkinAnimation::read(buffer)?);
        }
        skin.cape_image_width = buffer.read_u32()?;
        skin.cape_image_height = buffer.read_u32()?;
        skin.cape_data = buffer.read_byte_slice()?;
        skin.skin_geometry = buffer.read_byte_slice()?;
        skin.animation_data = buffer.read_byte_slice()?;
        skin.premium_skin = buffer.read_bool()?;
        skin.persona_skin = buffer.read_bool()?;
        skin.persona_cape_on_classic_skin = buffer.read_bool()?;
        skin.cape_id = buffer.read_string()?;
        skin.full_skin_id = buffer.read_string()?;
        skin.arm_size = buffer.read_string()?;
        skin.skin_colour = buffer.read_string()?;

        let piece_count = read_u32_len(buffer, "persona piece")?;
        skin.persona_pieces = Vec::with_capacity(piece_count);
        for _ in 0..piece_count {
            skin.persona_pieces.push(PersonaPiece::read(buffer)?);
        }
        let tint_count = read_u32_len(buffer, "piece tint colour")?;
        skin.piece_tint_colours = Vec::with_capacity(tint_count);
        for _ in 0..tint_count {
            skin.piece_tint_colours.push(PersonaPieceTintColour::read(buffer)?);
        }

        skin.validate()
            .map_err(|reason| ProtocolError::invariant("skin", reason))?;
        Ok(skin)
    }

    /// Writes the skin. Panics if the image buffers do not match their
    /// declared dimensions, since that indicates a local bug rather than
    /// adversarial input.
    pub fn write(&self, buffer: &mut PacketBuffer) {
        if let Err(reason) = self.validate() {
            panic!("skin written with invalid fields: {}", reason);
        }
        buffer.write_string(&self.skin_id);
        buffer.write_byte_slice(&self.skin_resource_patch);
        buffer.write_u32(self.skin_image_width);
        buffer.write_u32(self.skin_image_height);
        buffer.write_byte_slice(&self.skin_data);
        buffer.write_u32(self.animations.len() as u32);
        for animation in &self.animations {
            animation.write(buffer);
        }
        buffer.write_u32(self.cape_image_width);
        buffer.write_u32(self.cape_image_height);
        buffer.write_byte_slice(&self.cape_data);
        buffer.write_byte_slice(&self.skin_geometry);
        buffer.write_byte_slice(&self.animation_data);
        buffer.write_bool(self.premium_skin);
        buffer.write_bool(self.persona_skin);
        buffer.write_bool(self.persona_cape_on_classic_skin);
        buffer.write_string(&self.cape_id);
        buffer.write_string(&self.full_skin_id);
        buffer.write_string(&self.arm_size);
        buffer.write_string(&self.skin_colour);
        buffer.write_u32(self.persona_pieces.len() as u32);
        for piece in &self.persona_pieces {
            piece.write(buffer);
        }
        buffer.write_u32(self.piece_tint_colours.len() as u32);
        for tint in &self.piece_tint_colours {
            tint.write(buffer);
        }
    }

    /// Checks that every image buffer matches the pixel dimensions declared
    /// next to it.
    fn validate(&self) -> Result<(), String> {
        if self.skin_image_width as usize * self.skin_image_height as usize * 4
            != self.skin_data.len()
        {
            return Err(format!(
                "expected skin of {}x{} ({} bytes total), got {} bytes",
                self.skin_image_width,
                self.skin_image_height,
                self.skin_image_width as usize * self.skin_image_height as usize * 4,
                self.skin_data.len()
            ));
        }
        if self.cape_image_width as usize * self.cape_image_height as usize * 4
            != self.cape_data.len()
        {
            return Err(format!(
                "expected cape of {}x{} ({} bytes total), got {} bytes",
                self.cape_image_width,
                self.cape_image_height,
                self.cape_image_width as usize * self.cape_image_height as usize * 4,
                self.cape_data.len()
            ));
        }
        for (i, animation) in self.animations.iter().enumerate() {
            if animation.image_width as usize * animation.image_height as usize * 4
                != animation.image_data.len()
            {
                return Err(format!(
                    "expected animation {} of {}x{} ({} bytes total), got {} bytes",
                    i,
                    animation.image_width,
                    animation.image_height,
                    animation.image_width as usize * animation.image_height as usize * 4,
                    animation.image_data.len()
                ));
            }
        }
        Ok(())
    }
}

impl SkinAnimation {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<SkinAnimation> {
        Ok(SkinAnimation {
            image_width: buffer.read_u32()?,
            image_height: buffer.read_u32()?,
            image_data: buffer.read_byte_slice()?,
            animation_type: buffer.read_u32()?,
            frame_count: buffer.read_f32()?,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_u32(self.image_width);
        buffer.write_u32(self.image_height);
        buffer.write_byte_slice(&self.image_data);
        buffer.write_u32(self.animation_type);
        buffer.write_f32(self.frame_count);
    }
}

impl PersonaPiece {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<PersonaPiece> {
        Ok(PersonaPiece {
            piece_id: buffer.read_string()?,
            piece_type: buffer.read_string()?,
            pack_id: buffer.read_string()?,
            default: buffer.read_bool()?,
            product_id: buffer.read_string()?,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_string(&self.piece_id);
        buffer.write_string(&self.piece_type);
        buffer.write_string(&self.pack_id);
        buffer.write_bool(self.default);
        buffer.write_string(&self.product_id);
    }
}

impl PersonaPieceTintColour {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<PersonaPieceTintColour> {
        let piece_type = buffer.read_string()?;
        let colour_count = read_u32_len(buffer, "piece tint colour list")?;
        let mut colours = Vec::with_capacity(colour_count);
        for _ in 0..colour_count {
            colours.push(buffer.read_string()?);
        }
        Ok(PersonaPieceTintColour {
            piece_type,
            colours,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_string(&self.piece_type);
        buffer.write_u32(self.colours.len() as u32);
        for colour in &self.colours {
            buffer.write_string(colour);
        }
    }
}

fn read_u32_len(
    buffer: &mut PacketBuffer,
    context: &'static str,
) -> ProtocolResult<usize> {
    let count = buffer.read_u32()?;
    if count > LOWER_LIMIT {
        return Err(ProtocolError::limit(context, LOWER_LIMIT, count));
    }
    Ok(count as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_skin() -> Skin {
        Skin {
            skin_id: "c18e65aa-7b21-4637-9b63-8ad63622ef01_Alex".to_string(),
            skin_resource_patch: br#"{"geometry":{"default":"geometry.humanoid.custom"}}"#.to_vec(),
            skin_image_width: 2,
            skin_image_height: 2,
            skin_data: vec![0xAB; 16],
            animations: vec![SkinAnimation {
                image_width: 1,
                image_height: 2,
                image_data: vec![0xCD; 8],
                animation_type: SKIN_ANIMATION_HEAD,
                frame_count: 2.0,
            }],
            cape_image_width: 1,
            cape_image_height: 1,
            cape_data: vec![0xEF; 4],
            skin_geometry: b"{}".to_vec(),
            animation_data: Vec::new(),
            premium_skin: false,
            persona_skin: true,
            persona_cape_on_classic_skin: false,
            cape_id: "cape".to_string(),
            full_skin_id: String::new(),
            arm_size: "slim".to_string(),
            skin_colour: "#b37b62".to_string(),
            persona_pieces: vec![PersonaPiece {
                piece_id: "piece".to_string(),
                piece_type: "persona_hair".to_string(),
                pack_id: "pack".to_string(),
                default: true,
                product_id: String::new(),
            }],
            piece_tint_colours: vec![PersonaPieceTintColour {
                piece_type: "persona_hair".to_string(),
                colours: vec!["#ffa12722".to_string(), "#0".to_string()],
            }],
            trusted: false,
        }
    }

    #[test]
    fn test_skin_roundtrip() {
        let skin = sample_skin();
        let mut buffer = PacketBuffer::new();
        skin.write(&mut buffer);
        let read = Skin::read(&mut buffer).unwrap();
        assert_eq!(read, skin);
        assert_eq!(buffer.remaining(), 0);
    }

    #[test]
    fn test_decode_size_mismatch_is_invariant_error() {
        let mut skin = sample_skin();
        skin.skin_data = vec![0xAB; 16];
        let mut buffer = PacketBuffer::new();
        skin.write(&mut buffer);

        // Corrupt the declared skin width without touching the data length.
        let mut bytes = buffer.into_bytes();
        let offset = 1 + skin.skin_id.len()
            + 1 + skin.skin_resource_patch.len();
        bytes[offset] = 3;
        let mut buffer = PacketBuffer::from_bytes(bytes);
        let err = Skin::read(&mut buffer).unwrap_err();
        assert!(matches!(err, ProtocolError::InvariantViolation { .. }));
    }

    #[test]
    #[should_panic(expected = "invalid fields")]
    fn test_encode_size_mismatch_panics() {
        let mut skin = sample_skin();
        skin.skin_data.pop();
        let mut buffer = PacketBuffer::new();
        skin.write(&mut buffer);
    }

    #[test]
    fn test_animation_count_limit() {
        let skin = sample_skin();
        let mut buffer = PacketBuffer::new();
        skin.write(&mut buffer);

        let mut bytes = buffer.into_bytes();
        let offset = 1 + skin.skin_id.len()
            + 1 + skin.skin_resource_patch.len()
            + 4 + 4
            + 1 + skin.skin_data.len();
        bytes[offset..offset + 4].copy_from_slice(&(LOWER_LIMIT + 1).to_le_bytes());
        let mut buffer = PacketBuffer::from_bytes(bytes);
        let err = Skin::read(&mut buffer).unwrap_err();
        assert!(matches!(err, ProtocolError::LimitExceeded { .. }));
    }
}
