use super::{AddressingFieldsRepr, FrameRepr};
use crate::{Address, CommandId, FrameType, Payload, ValidationError};

/// Marker for beacon frame builders.
pub struct Beacon;
/// Marker for data frame builders.
pub struct Data;
/// Marker for acknowledgment frame builders.
pub struct Ack;
/// Marker for MAC command frame builders.
pub struct Command;

/// A helper for building IEEE 802.15.4 frames field by field.
pub struct FrameBuilder<'p, T> {
    frame: FrameRepr<'p>,
    r#type: core::marker::PhantomData<T>,
}

impl<'p, T> FrameBuilder<'p, T> {
    fn new(frame_type: FrameType) -> Self {
        Self {
            frame: FrameRepr {
                frame_type,
                ack_request: false,
                sequence_number: 0,
                addressing: AddressingFieldsRepr::default(),
                command: None,
                payload: Payload::Raw(&[]),
            },
            r#type: core::marker::PhantomData,
        }
    }
}

impl<'p> FrameBuilder<'p, Ack> {
    /// Create a new builder for an acknowledgment frame.
    pub fn new_ack(sequence_number: u8) -> Self {
        let mut builder = Self::new(FrameType::Ack);
        builder.frame.sequence_number = sequence_number;
        builder
    }
}

impl<'p> FrameBuilder<'p, Beacon> {
    /// Create a new builder for a beacon frame.
    pub fn new_beacon() -> Self {
        Self::new(FrameType::Beacon)
    }
}

impl<'p> FrameBuilder<'p, Data> {
    /// Create a new builder for a data frame.
    pub fn new_data(payload: &'p [u8]) -> Self {
        let mut builder = Self::new(FrameType::Data);
        builder.frame.payload = Payload::Raw(payload);
        builder
    }
}

impl<'p> FrameBuilder<'p, Command> {
    /// Create a new builder for a MAC command frame.
    pub fn new_command(command: CommandId) -> Self {
        let mut builder = Self::new(FrameType::MacCommand);
        builder.frame.command = Some(command);
        builder
    }
}

impl<'p, T> FrameBuilder<'p, T> {
    /// Set the frame sequence number.
    pub fn set_sequence_number(mut self, sequence_number: u8) -> Self {
        self.frame.sequence_number = sequence_number;
        self
    }

    /// Request an acknowledgment for the frame.
    pub fn set_ack_request(mut self, ack_request: bool) -> Self {
        self.frame.ack_request = ack_request;
        self
    }

    /// Set the destination PAN ID.
    pub fn set_dst_pan_id(mut self, pan_id: u16) -> Self {
        self.frame.addressing.dst_pan_id = Some(pan_id);
        self
    }

    /// Set the source PAN ID.
    ///
    /// Leaving the source PAN unset, or setting it equal to the destination
    /// PAN, elides it from the wire form.
    pub fn set_src_pan_id(mut self, pan_id: u16) -> Self {
        self.frame.addressing.src_pan_id = Some(pan_id);
        self
    }

    /// Set the destination address.
    pub fn set_dst_address(mut self, address: Address) -> Self {
        self.frame.addressing.dst_address = address;
        self
    }

    /// Set the source address.
    pub fn set_src_address(mut self, address: Address) -> Self {
        self.frame.addressing.src_address = address;
        self
    }

    /// Set the frame payload to a raw byte sequence.
    pub fn set_payload(mut self, payload: &'p [u8]) -> Self {
        self.frame.payload = Payload::Raw(payload);
        self
    }

    /// Set the frame payload to an object that encodes itself.
    pub fn set_encodable_payload(mut self, payload: &'p dyn crate::Encodable) -> Self {
        self.frame.payload = Payload::Encodable(payload);
        self
    }

    /// Finalize the frame builder, returning the frame representation.
    pub fn finalize(self) -> Result<FrameRepr<'p>, ValidationError> {
        self.frame.validate()?;
        Ok(self.frame)
    }
}
