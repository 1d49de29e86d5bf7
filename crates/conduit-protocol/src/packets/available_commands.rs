use conduit_common::error::ProtocolResult;
use conduit_common::limits::HIGHER_LIMIT;

use crate::buffer::PacketBuffer;
use crate::command::{
    Command, CommandEnum, CommandEnumConstraint, DynamicCommandEnum,
};
use crate::id;
use crate::packet::Packet;

/// Sends the full command tree to the client: the shared value table, the
/// enums indexing into it, the commands themselves, and the dynamic enums
/// and constraints layered on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailableCommands {
    /// The value table every enum indexes into.
    pub enum_values: Vec<String>,
    /// Suffixes for suffixed parameter types.
    pub suffixes: Vec<String>,
    pub enums: Vec<CommandEnum>,
    pub commands: Vec<Command>,
    pub dynamic_enums: Vec<DynamicCommandEnum>,
    pub enum_constraints: Vec<CommandEnumConstraint>,
}

impl Packet for AvailableCommands {
    fn id(&self) -> u32 {
        id::AVAILABLE_COMMANDS
    }

    fn name(&self) -> &'static str {
        "AvailableCommands"
    }

    fn marshal(&self, buffer: &mut PacketBuffer) {
        buffer.write_varuint32(self.enum_values.len() as u32);
        for value in &self.enum_values {
            buffer.write_string(value);
        }
        buffer.write_varuint32(self.suffixes.len() as u32);
        for suffix in &self.suffixes {
            buffer.write_string(suffix);
        }
        buffer.write_varuint32(self.enums.len() as u32);
        for command_enum in &self.enums {
            command_enum.write(buffer, self.enum_values.len());
        }
        buffer.write_varuint32(self.commands.len() as u32);
        for command in &self.commands {
            command.write(buffer);
        }
        buffer.write_varuint32(self.dynamic_enums.len() as u32);
        for dynamic_enum in &self.dynamic_enums {
            dynamic_enum.write(buffer);
        }
        buffer.write_varuint32(self.enum_constraints.len() as u32);
        for constraint in &self.enum_constraints {
            constraint.write(buffer);
        }
    }

    fn unmarshal(&mut self, buffer: &mut PacketBuffer) -> ProtocolResult<()> {
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "command enum value")?;
        self.enum_values = Vec::with_capacity(count);
        for _ in 0..count {
            self.enum_values.push(buffer.read_string()?);
        }
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "command suffix")?;
        self.suffixes = Vec::with_capacity(count);
        for _ in 0..count {
            self.suffixes.push(buffer.read_string()?);
        }
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "command enum")?;
        self.enums = Vec::with_capacity(count);
        for _ in 0..count {
            self.enums
                .push(CommandEnum::read(buffer, self.enum_values.len())?);
        }
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "command")?;
        self.commands = Vec::with_capacity(count);
        for _ in 0..count {
            self.commands.push(Command::read(buffer)?);
        }
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "dynamic enum")?;
        self.dynamic_enums = Vec::with_capacity(count);
        for _ in 0..count {
            self.dynamic_enums.push(DynamicCommandEnum::read(buffer)?);
        }
        let count = buffer.read_varuint_len(HIGHER_LIMIT, "enum constraint")?;
        self.enum_constraints = Vec::with_capacity(count);
        for _ in 0..count {
            self.enum_constraints
                .push(CommandEnumConstraint::read(buffer)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandOverload, CommandParameter, ARG_FLAG_ENUM, ARG_FLAG_VALID, NO_ALIASES};

    #[test]
    fn test_full_tree_roundtrip() {
        let packet = AvailableCommands {
            enum_values: vec![
                "survival".to_string(),
                "creative".to_string(),
                "adventure".to_string(),
            ],
            suffixes: vec![],
            enums: vec![CommandEnum {
                name: "GameMode".to_string(),
                value_indices: vec![0, 1, 2],
            }],
            commands: vec![Command {
                name: "gamemode".to_string(),
                description: "Sets a player's game mode.".to_string(),
                flags: 0,
                permission_level: 1,
                aliases_offset: NO_ALIASES,
                overloads: vec![CommandOverload {
                    parameters: vec![CommandParameter {
                        name: "mode".to_string(),
                        parameter_type: ARG_FLAG_VALID | ARG_FLAG_ENUM,
                        optional: false,
                        options: 0,
                    }],
                }],
            }],
            dynamic_enums: vec![DynamicCommandEnum {
                name: "Objectives".to_string(),
                values: vec!["deaths".to_string()],
            }],
            enum_constraints: vec![CommandEnumConstraint {
                value_index: 1,
                enum_index: 0,
                constraints: vec![0],
            }],
        };
        let mut buffer = PacketBuffer::new();
        packet.marshal(&mut buffer);
        let mut read = AvailableCommands::default();
        read.unmarshal(&mut buffer).unwrap();
        assert_eq!(read, packet);
        assert_eq!(buffer.remaining(), 0);
    }
}
