use super::*;

mod parsing;

/// Command frame with a short destination, an extended source and a
/// distinct source PAN, taken from a join request capture.
const JOIN_REQUEST: &str = "23c87b621a0000ffff58df3efeff57b4140180";

/// Command frame answering a join request, extended addresses on both
/// sides, source PAN compressed away.
const JOIN_RESPONSE: &str = "63ccc3621a58df3efeff57b414b19de80b004b1200023d3300";

const EXTENDED_SRC: Address = Address::Extended([0x58, 0xdf, 0x3e, 0xfe, 0xff, 0x57, 0xb4, 0x14]);

fn join_request() -> FrameRepr<'static> {
    FrameBuilder::new_command(CommandId::JoinRequest)
        .set_sequence_number(123)
        .set_ack_request(true)
        .set_dst_pan_id(0x1a62)
        .set_dst_address(Address::Short(0x0000))
        .set_src_pan_id(0xffff)
        .set_src_address(EXTENDED_SRC)
        .set_payload(&[0x80])
        .finalize()
        .unwrap()
}

#[test]
fn emit_join_request() {
    let frame = join_request();
    assert_eq!(frame.buffer_len(), 19);
    assert_eq!(&frame.to_vec::<32>().unwrap()[..], hex::decode(JOIN_REQUEST).unwrap());
}

#[test]
fn emit_join_request_new_sequence_number() {
    let mut frame = join_request();
    frame.sequence_number = 218;

    assert_eq!(
        &frame.to_vec::<32>().unwrap()[..],
        hex::decode("23c8da621a0000ffff58df3efeff57b4140180").unwrap()
    );
}

#[test]
fn emit_join_response_with_pan_compression() {
    let frame = FrameBuilder::new_command(CommandId::JoinResponse)
        .set_sequence_number(195)
        .set_ack_request(true)
        .set_dst_pan_id(0x1a62)
        .set_dst_address(EXTENDED_SRC)
        .set_src_address(Address::Extended([
            0xb1, 0x9d, 0xe8, 0x0b, 0x00, 0x4b, 0x12, 0x00,
        ]))
        .set_payload(&[0x3d, 0x33, 0x00])
        .finalize()
        .unwrap();

    // No source PAN was given, so the compression bit is set and no source
    // PAN bytes make it onto the wire.
    assert_eq!(&frame.to_vec::<32>().unwrap()[..], hex::decode(JOIN_RESPONSE).unwrap());
}

#[test]
fn emit_equal_pans_compressed() {
    let frame = FrameBuilder::new_data(&[0x2b, 0x00, 0x00, 0x00])
        .set_sequence_number(1)
        .set_dst_pan_id(0xabcd)
        .set_dst_address(Address::BROADCAST)
        .set_src_pan_id(0xabcd)
        .set_src_address(Address::Extended([
            0xc7, 0xd9, 0xb5, 0x14, 0x00, 0x4b, 0x12, 0x00,
        ]))
        .finalize()
        .unwrap();

    assert_eq!(
        &frame.to_vec::<32>().unwrap()[..],
        [
            0x41, 0xc8, 0x01, 0xcd, 0xab, 0xff, 0xff, 0xc7, 0xd9, 0xb5, 0x14, 0x00, 0x4b, 0x12,
            0x00, 0x2b, 0x00, 0x00, 0x00,
        ]
    );
}

#[test]
fn emit_ack() {
    let frame = FrameBuilder::new_ack(7).finalize().unwrap();
    assert_eq!(&frame.to_vec::<8>().unwrap()[..], [0x02, 0x00, 0x07]);
}

#[test]
fn emit_nested_encodable_payload() {
    let ack = FrameBuilder::new_ack(9).finalize().unwrap();

    let frame = FrameBuilder::new_data(&[])
        .set_sequence_number(5)
        .set_dst_pan_id(0xabcd)
        .set_dst_address(Address::Short(0x1234))
        .set_encodable_payload(&ack)
        .finalize()
        .unwrap();

    assert_eq!(
        &frame.to_vec::<16>().unwrap()[..],
        [0x01, 0x08, 0x05, 0xcd, 0xab, 0x34, 0x12, 0x02, 0x00, 0x09]
    );
}

#[test]
fn command_frame_needs_command() {
    let frame = FrameRepr {
        frame_type: FrameType::MacCommand,
        ack_request: false,
        sequence_number: 1,
        addressing: AddressingFieldsRepr::default(),
        command: None,
        payload: Payload::Raw(&[]),
    };

    assert_eq!(frame.validate(), Err(ValidationError::MissingCommand));
}

#[test]
fn only_command_frames_carry_commands() {
    let frame = FrameRepr {
        frame_type: FrameType::Data,
        ack_request: false,
        sequence_number: 1,
        addressing: AddressingFieldsRepr::default(),
        command: Some(CommandId::DataRequest),
        payload: Payload::Raw(&[]),
    };

    assert_eq!(frame.validate(), Err(ValidationError::UnexpectedCommand));
}

#[test]
fn dst_address_without_pan_rejected() {
    let result = FrameBuilder::new_beacon()
        .set_dst_address(Address::Short(0x0001))
        .finalize();

    assert!(matches!(result, Err(ValidationError::MissingPanId)));
}

#[test]
fn emit_into_too_small_vec() {
    assert_eq!(
        join_request().to_vec::<4>(),
        Err(ValidationError::BufferTooSmall)
    );
}

#[test]
fn display() {
    assert_eq!(
        format!("{}", join_request()),
        "MacCommand seq=123 command=0x01 ack dst=0x0000 dst-pan=0x1a62 \
         src=58:df:3e:fe:ff:57:b4:14 src-pan=0xffff payload=[80]"
    );
}
