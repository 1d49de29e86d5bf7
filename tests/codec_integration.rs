use conduit::protocol::{id, registry};
use conduit::{Compound, Encoding, ItemStack, PacketBuffer, ProtocolError, Tag};

#[test]
fn test_air_item_is_one_zero_byte_end_to_end() {
    let mut buffer = PacketBuffer::from_bytes(vec![0x00]);
    let stack = ItemStack::read(&mut buffer).unwrap();
    assert_eq!(stack, ItemStack::default());

    let mut out = PacketBuffer::new();
    stack.write(&mut out);
    assert_eq!(out.as_bytes(), [0x00]);
}

#[test]
fn test_varint_overflow_is_malformed() {
    let mut buffer = PacketBuffer::from_bytes(vec![0xFF; 11]);
    assert!(matches!(
        buffer.read_varuint32().unwrap_err(),
        ProtocolError::Malformed { .. }
    ));
}

#[test]
fn test_frame_dispatch_through_the_registry() {
    // A SetTime frame: id 10, payload holding time 6000 as a zig-zag varint.
    let mut payload = PacketBuffer::new();
    payload.write_varint32(6000);
    let payload = payload.into_bytes();

    let packet = registry::decode(id::SET_TIME, &payload).unwrap();
    assert_eq!(packet.name(), "SetTime");
    assert_eq!(registry::encode(packet.as_ref()), payload);
}

#[test]
fn test_unknown_frame_is_recoverable() {
    let err = registry::decode(9999, &[]).unwrap_err();
    assert!(matches!(err, ProtocolError::UnknownPacket { id: 9999 }));
}

#[test]
fn test_pool_is_fresh_per_call() {
    let a = registry::pool();
    let b = registry::pool();
    assert_eq!(a.len(), b.len());
    assert!(!a.is_empty());
}

#[test]
fn test_item_nbt_crosses_the_crate_boundary() {
    let mut nbt = Compound::new();
    nbt.insert(
        "display",
        Tag::Compound({
            let mut display = Compound::new();
            display.insert("Name", Tag::String("Pointy".to_string()));
            display
        }),
    );
    let stack = ItemStack {
        item_type: conduit::ItemType {
            network_id: 276,
            metadata: 0,
        },
        count: 1,
        nbt_data: Some(nbt),
        ..Default::default()
    };

    let mut buffer = PacketBuffer::new();
    stack.write(&mut buffer);
    let read = ItemStack::read(&mut buffer).unwrap();
    let name = read
        .nbt_data
        .unwrap()
        .get("display")
        .and_then(Tag::as_compound)
        .and_then(|display| display.get("Name"))
        .and_then(Tag::as_str)
        .map(str::to_owned);
    assert_eq!(name.as_deref(), Some("Pointy"));
}

#[test]
fn test_nbt_variants_differ_but_agree_semantically() {
    let mut compound = Compound::new();
    compound.insert("value", Tag::Int(70000));
    let tag = Tag::Compound(compound);

    let mut outputs = Vec::new();
    for encoding in [
        Encoding::BigEndian,
        Encoding::LittleEndian,
        Encoding::NetworkLittleEndian,
    ] {
        let mut bytes = Vec::new();
        tag.write_named(&mut bytes, encoding, "").unwrap();
        let mut cursor = std::io::Cursor::new(&bytes);
        let (_, read) = Tag::read_named(&mut cursor, encoding).unwrap();
        assert_eq!(read, tag);
        outputs.push(bytes);
    }
    assert_ne!(outputs[0], outputs[1]);
    assert_ne!(outputs[1], outputs[2]);
}
