use super::*;

fn parse(bytes: &[u8]) -> FrameRepr<'_> {
    FrameRepr::parse(&Frame::new(bytes).unwrap())
}

#[test]
fn parse_join_request() {
    let bytes = hex::decode(JOIN_REQUEST).unwrap();
    let frame = parse(&bytes);

    assert_eq!(frame.frame_type, FrameType::MacCommand);
    assert!(frame.ack_request);
    assert_eq!(frame.sequence_number, 123);
    assert_eq!(frame.addressing.dst_pan_id, Some(0x1a62));
    assert_eq!(frame.addressing.dst_address, Address::Short(0x0000));
    assert_eq!(frame.addressing.src_pan_id, Some(0xffff));
    assert_eq!(frame.addressing.src_address, EXTENDED_SRC);
    assert_eq!(frame.command, Some(CommandId::JoinRequest));
    assert_eq!(frame.payload.as_raw(), Some(&[0x80][..]));
}

#[test]
fn parse_ack() {
    let frame = parse(&[0x02, 0x00, 0x07]);

    assert_eq!(frame.frame_type, FrameType::Ack);
    assert!(!frame.ack_request);
    assert_eq!(frame.sequence_number, 7);
    assert_eq!(frame.addressing, AddressingFieldsRepr::default());
    assert_eq!(frame.command, None);
    assert_eq!(frame.payload.as_raw(), Some(&[][..]));
}

#[test]
fn elided_src_pan_reconstructed() {
    let bytes = hex::decode(JOIN_RESPONSE).unwrap();

    let reader = Frame::new(&bytes[..]).unwrap();
    assert!(reader.frame_control().pan_id_compression());

    let frame = FrameRepr::parse(&reader);
    assert_eq!(frame.addressing.dst_pan_id, Some(0x1a62));
    assert_eq!(frame.addressing.src_pan_id, Some(0x1a62));
    assert_eq!(frame.command, Some(CommandId::JoinResponse));
    assert_eq!(frame.payload.as_raw(), Some(&[0x3d, 0x33, 0x00][..]));
}

#[test]
fn round_trip() {
    for vector in [JOIN_REQUEST, JOIN_RESPONSE] {
        let bytes = hex::decode(vector).unwrap();
        let frame = parse(&bytes);

        assert_eq!(&frame.to_vec::<32>().unwrap()[..], bytes);
    }
}

#[test]
fn reserved_addressing_modes() {
    // Bits 10-11 hold the reserved destination mode.
    assert_eq!(
        Frame::new(&[0x01, 0x04, 0x00][..]).unwrap_err(),
        FormatError::ReservedAddressingMode
    );
    // Bits 14-15 hold the reserved source mode.
    assert_eq!(
        Frame::new(&[0x01, 0x40, 0x00][..]).unwrap_err(),
        FormatError::ReservedAddressingMode
    );
}

#[test]
fn unknown_frame_types() {
    for frame_type in 4..=7 {
        assert_eq!(
            Frame::new(&[frame_type, 0x00, 0x00][..]).unwrap_err(),
            FormatError::UnknownFrameType
        );
    }
}

#[test]
fn truncated() {
    assert_eq!(Frame::new(&[][..]).unwrap_err(), FormatError::Truncated);
    assert_eq!(Frame::new(&[0x23][..]).unwrap_err(), FormatError::Truncated);
    assert_eq!(
        Frame::new(&[0x23, 0xc8][..]).unwrap_err(),
        FormatError::Truncated
    );

    // Every prefix of a valid frame that cuts into a declared field.
    let bytes = hex::decode(JOIN_REQUEST).unwrap();
    for len in 3..bytes.len() - 1 {
        assert_eq!(
            Frame::new(&bytes[..len]).unwrap_err(),
            FormatError::Truncated,
            "prefix of {} bytes",
            len
        );
    }

    // A command frame whose command byte is cut off.
    assert_eq!(
        Frame::new(&[0x03, 0x00, 0x01][..]).unwrap_err(),
        FormatError::Truncated
    );
}

#[test]
fn payload_without_command_byte() {
    // A data frame has no command byte, so everything after the addressing
    // fields is payload.
    let frame = parse(&[0x01, 0x08, 0x2a, 0xcd, 0xab, 0x34, 0x12, 0xde, 0xad]);

    assert_eq!(frame.frame_type, FrameType::Data);
    assert_eq!(frame.command, None);
    assert_eq!(frame.payload.as_raw(), Some(&[0xde, 0xad][..]));
}
