use proptest::prelude::*;

use conduit_protocol::buffer::PacketBuffer;
use conduit_protocol::item::{ItemStack, ItemType};

proptest! {
    #[test]
    fn varuint32_roundtrip(value in any::<u32>()) {
        let mut buffer = PacketBuffer::new();
        buffer.write_varuint32(value);
        prop_assert_eq!(buffer.read_varuint32().unwrap(), value);
        prop_assert_eq!(buffer.remaining(), 0);
    }

    #[test]
    fn varint32_roundtrip(value in any::<i32>()) {
        let mut buffer = PacketBuffer::new();
        buffer.write_varint32(value);
        prop_assert_eq!(buffer.read_varint32().unwrap(), value);
        prop_assert_eq!(buffer.remaining(), 0);
    }

    #[test]
    fn varint64_roundtrip(value in any::<i64>()) {
        let mut buffer = PacketBuffer::new();
        buffer.write_varint64(value);
        prop_assert_eq!(buffer.read_varint64().unwrap(), value);
        prop_assert_eq!(buffer.remaining(), 0);
    }

    #[test]
    fn varuint64_roundtrip(value in any::<u64>()) {
        let mut buffer = PacketBuffer::new();
        buffer.write_varuint64(value);
        prop_assert_eq!(buffer.read_varuint64().unwrap(), value);
        prop_assert_eq!(buffer.remaining(), 0);
    }

    #[test]
    fn small_signed_values_stay_small_on_the_wire(value in -64i32..64i32) {
        // Zig-zag keeps small magnitudes in one byte.
        let mut buffer = PacketBuffer::new();
        buffer.write_varint32(value);
        prop_assert_eq!(buffer.as_bytes().len(), 1);
    }

    #[test]
    fn string_roundtrip(value in "[\\x20-\\x7E]{0,64}") {
        let mut buffer = PacketBuffer::new();
        buffer.write_string(&value);
        prop_assert_eq!(buffer.read_string().unwrap(), value);
    }

    #[test]
    fn item_stack_roundtrip(
        network_id in prop_oneof![Just(0i32), 1i32..2000, Just(513i32)],
        metadata in any::<i16>(),
        count in 0i16..64,
        blocking_tick in 0i64..10_000,
        place_on in proptest::collection::vec("[a-z:_]{1,24}", 0..4),
    ) {
        let stack = if network_id == 0 {
            ItemStack::default()
        } else {
            ItemStack {
                item_type: ItemType { network_id, metadata },
                count,
                nbt_data: None,
                can_be_placed_on: place_on,
                can_break: vec![],
                blocking_tick: if network_id == 513 { blocking_tick } else { 0 },
            }
        };
        let mut buffer = PacketBuffer::new();
        stack.write(&mut buffer);
        let encoded_len = buffer.as_bytes().len();
        let read = ItemStack::read(&mut buffer).unwrap();
        prop_assert_eq!(&read, &stack);
        // The cursor advanced by exactly the number of bytes written.
        prop_assert_eq!(buffer.cursor(), encoded_len);
    }
}
