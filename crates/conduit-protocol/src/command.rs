//! Structures of the command tree sent to clients. The field list and the
//! parameter type constants are pinned against the captured protocol
//! revision; they shift between revisions.

use conduit_common::error::ProtocolResult;
use conduit_common::limits::HIGHER_LIMIT;

use crate::buffer::PacketBuffer;

/// Set on a parameter type whose other flag bits are meaningful.
pub const ARG_FLAG_VALID: u32 = 0x100000;
/// The low bits of the type index into the enums table.
pub const ARG_FLAG_ENUM: u32 = 0x200000;
/// The low bits of the type index into the suffixes table.
pub const ARG_FLAG_SUFFIXED: u32 = 0x1000000;
/// The low bits of the type index into the dynamic enums table.
pub const ARG_FLAG_SOFT_ENUM: u32 = 0x4000000;

pub const ARG_TYPE_INT: u32 = 1;
pub const ARG_TYPE_FLOAT: u32 = 3;
pub const ARG_TYPE_VALUE: u32 = 4;
pub const ARG_TYPE_WILDCARD_INT: u32 = 5;
pub const ARG_TYPE_OPERATOR: u32 = 6;
pub const ARG_TYPE_TARGET: u32 = 7;
pub const ARG_TYPE_FILE_PATH: u32 = 16;
pub const ARG_TYPE_STRING: u32 = 32;
pub const ARG_TYPE_POSITION: u32 = 40;
pub const ARG_TYPE_MESSAGE: u32 = 44;
pub const ARG_TYPE_RAW_TEXT: u32 = 46;
pub const ARG_TYPE_JSON: u32 = 50;
pub const ARG_TYPE_COMMAND: u32 = 63;

/// Aliases offset value meaning a command has no aliases enum.
pub const NO_ALIASES: i32 = -1;

/// An enum over values in the shared value table. Indices are written with
/// the smallest fixed width that can address the whole value table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandEnum {
    pub name: String,
    pub value_indices: Vec<u32>,
}

/// An enum whose values are plain strings, used for values that may change
/// while the session runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicCommandEnum {
    pub name: String,
    pub values: Vec<String>,
}

/// A single executable command with its overloads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub description: String,
    pub flags: u16,
    pub permission_level: u8,
    /// Index into the enums table holding the command's aliases, or
    /// [`NO_ALIASES`].
    pub aliases_offset: i32,
    pub overloads: Vec<CommandOverload>,
}

/// One way a command may be called: an ordered parameter list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOverload {
    pub parameters: Vec<CommandParameter>,
}

/// A single parameter of a command overload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandParameter {
    pub name: String,
    /// A base type or an enum/suffix index, combined with the flag bits
    /// above.
    pub parameter_type: u32,
    pub optional: bool,
    pub options: u8,
}

/// A constraint attached to one value of one enum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandEnumConstraint {
    /// Index into the shared value table.
    pub value_index: i32,
    /// Index into the enums table.
    pub enum_index: i32,
    pub constraints: Vec<u8>,
}

impl CommandEnum {
    /// The index width adapts to the size of the shared value table, so the
    /// table length travels with the call.
    pub fn read(buffer: &mut PacketBuffer, value_table_len: usize) -> ProtocolResult<CommandEnum> {
        let name = buffer.read_string()?;
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "command enum value")?;
        let mut value_indices = Vec::with_capacity(count);
        for _ in 0..count {
            value_indices.push(read_enum_index(buffer, value_table_len)?);
        }
        Ok(CommandEnum {
            name,
            value_indices,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer, value_table_len: usize) {
        buffer.write_string(&self.name);
        buffer.write_varuint32(self.value_indices.len() as u32);
        for index in &self.value_indices {
            write_enum_index(buffer, *index, value_table_len);
        }
    }
}

fn read_enum_index(buffer: &mut PacketBuffer, value_table_len: usize) -> ProtocolResult<u32> {
    if value_table_len <= usize::from(u8::MAX) {
        Ok(u32::from(buffer.read_u8()?))
    } else if value_table_len <= usize::from(u16::MAX) {
        Ok(u32::from(buffer.read_u16()?))
    } else {
        buffer.read_u32()
    }
}

fn write_enum_index(buffer: &mut PacketBuffer, index: u32, value_table_len: usize) {
    if value_table_len <= usize::from(u8::MAX) {
        buffer.write_u8(index as u8);
    } else if value_table_len <= usize::from(u16::MAX) {
        buffer.write_u16(index as u16);
    } else {
        buffer.write_u32(index);
    }
}

impl DynamicCommandEnum {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<DynamicCommandEnum> {
        let name = buffer.read_string()?;
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "dynamic enum value")?;
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            values.push(buffer.read_string()?);
        }
        Ok(DynamicCommandEnum { name, values })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_string(&self.name);
        buffer.write_varuint32(self.values.len() as u32);
        for value in &self.values {
            buffer.write_string(value);
        }
    }
}

impl Command {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<Command> {
        let name = buffer.read_string()?;
        let description = buffer.read_string()?;
        let flags = buffer.read_u16()?;
        let permission_level = buffer.read_u8()?;
        let aliases_offset = buffer.read_i32()?;
        let overload_count = buffer.read_varuint_len(HIGHER_LIMIT, "command overload")?;
        let mut overloads = Vec::with_capacity(overload_count);
        for _ in 0..overload_count {
            overloads.push(CommandOverload::read(buffer)?);
        }
        Ok(Command {
            name,
            description,
            flags,
            permission_level,
            aliases_offset,
            overloads,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_string(&self.name);
        buffer.write_string(&self.description);
        buffer.write_u16(self.flags);
        buffer.write_u8(self.permission_level);
        buffer.write_i32(self.aliases_offset);
        buffer.write_varuint32(self.overloads.len() as u32);
        for overload in &self.overloads {
            overload.write(buffer);
        }
    }
}

impl CommandOverload {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<CommandOverload> {
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "command parameter")?;
        let mut parameters = Vec::with_capacity(count);
        for _ in 0..count {
            parameters.push(CommandParameter::read(buffer)?);
        }
        Ok(CommandOverload { parameters })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint32(self.parameters.len() as u32);
        for parameter in &self.parameters {
            parameter.write(buffer);
        }
    }
}

impl CommandParameter {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<CommandParameter> {
        Ok(CommandParameter {
            name: buffer.read_string()?,
            parameter_type: buffer.read_u32()?,
            optional: buffer.read_bool()?,
            options: buffer.read_u8()?,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_string(&self.name);
        buffer.write_u32(self.parameter_type);
        buffer.write_bool(self.optional);
        buffer.write_u8(self.options);
    }
}

impl CommandEnumConstraint {
    pub fn read(buffer: &mut PacketBuffer) -> ProtocolResult<CommandEnumConstraint> {
        let value_index = buffer.read_i32()?;
        let enum_index = buffer.read_i32()?;
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "enum constraint")?;
        let mut constraints = Vec::with_capacity(count);
        for _ in 0..count {
            constraints.push(buffer.read_u8()?);
        }
        Ok(CommandEnumConstraint {
            value_index,
            enum_index,
            constraints,
        })
    }

    pub fn write(&self, buffer: &mut PacketBuffer) {
        buffer.write_i32(self.value_index);
        buffer.write_i32(self.enum_index);
        buffer.write_varuint32(self.constraints.len() as u32);
        for constraint in &self.constraints {
            buffer.write_u8(*constraint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_index_width_follows_value_table() {
        let command_enum = CommandEnum {
            name: "GameMode".to_string(),
            value_indices: vec![0, 1, 2, 3],
        };

        let mut narrow = PacketBuffer::new();
        command_enum.write(&mut narrow, 200);
        let mut wide = PacketBuffer::new();
        command_enum.write(&mut wide, 70_000);
        assert_eq!(
            wide.as_bytes().len() - narrow.as_bytes().len(),
            command_enum.value_indices.len() * 3
        );

        assert_eq!(CommandEnum::read(&mut narrow, 200).unwrap(), command_enum);
        assert_eq!(CommandEnum::read(&mut wide, 70_000).unwrap(), command_enum);
    }

    #[test]
    fn test_command_roundtrip() {
        let command = Command {
            name: "gamemode".to_string(),
            description: "Sets a player's game mode.".to_string(),
            flags: 0,
            permission_level: 1,
            aliases_offset: NO_ALIASES,
            overloads: vec![CommandOverload {
                parameters: vec![
                    CommandParameter {
                        name: "mode".to_string(),
                        parameter_type: ARG_FLAG_VALID | ARG_FLAG_ENUM,
                        optional: false,
                        options: 0,
                    },
                    CommandParameter {
                        name: "target".to_string(),
                        parameter_type: ARG_FLAG_VALID | ARG_TYPE_TARGET,
                        optional: true,
                        options: 0,
                    },
                ],
            }],
        };
        let mut buffer = PacketBuffer::new();
        command.write(&mut buffer);
        assert_eq!(Command::read(&mut buffer).unwrap(), command);
        assert_eq!(buffer.remaining(), 0);
    }
}
