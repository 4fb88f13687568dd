//! High-level representations of IEEE 802.15.4 frames.

use crate::{CommandId, Encodable, Frame, FrameType, Payload, ValidationError};

mod addressing;
pub use addressing::AddressingFieldsRepr;

mod builder;
pub use builder::FrameBuilder;

/// A high-level representation of an IEEE 802.15.4 frame.
///
/// Parsing a received buffer and emitting a representation are each a
/// single pass; the codec holds no state across calls.
#[derive(Debug)]
pub struct FrameRepr<'p> {
    /// The frame type.
    pub frame_type: FrameType,
    /// Whether an acknowledgment is requested.
    pub ack_request: bool,
    /// The sequence number.
    pub sequence_number: u8,
    /// The addressing fields.
    pub addressing: AddressingFieldsRepr,
    /// The command identifier of a command frame.
    pub command: Option<CommandId>,
    /// The payload.
    pub payload: Payload<'p>,
}

impl<'f> FrameRepr<'f> {
    /// Read a whole frame out of a validated [`Frame`] reader.
    pub fn parse(reader: &Frame<&'f [u8]>) -> Self {
        let fc = reader.frame_control();

        Self {
            frame_type: fc.frame_type(),
            ack_request: fc.ack_request(),
            sequence_number: reader.sequence_number(),
            addressing: AddressingFieldsRepr::parse(&reader.addressing(), &fc),
            command: reader.command(),
            payload: Payload::Raw(reader.payload()),
        }
    }

    /// Validate the frame.
    ///
    /// A command frame must carry a command identifier and no other frame
    /// type may carry one; any transmitted address needs its PAN ID.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.frame_type == FrameType::Unknown {
            return Err(ValidationError::UnknownFrameType);
        }

        match (self.frame_type, self.command) {
            (FrameType::MacCommand, None) => return Err(ValidationError::MissingCommand),
            (FrameType::MacCommand, Some(_)) => {}
            (_, Some(_)) => return Err(ValidationError::UnexpectedCommand),
            (_, None) => {}
        }

        self.addressing.validate()
    }

    /// Return the length of the frame when emitted into a buffer.
    pub fn buffer_len(&self) -> usize {
        3 + self.addressing.buffer_len()
            + (self.frame_type == FrameType::MacCommand) as usize
            + self.payload.len()
    }

    /// Emit the frame into a zero-filled buffer of at least
    /// [`buffer_len`](FrameRepr::buffer_len) bytes.
    ///
    /// The PAN ID compression bit and both addressing modes are derived
    /// from the addressing fields, never taken from stored state.
    pub fn emit(&self, frame: &mut Frame<&'_ mut [u8]>) {
        let mut fc = frame.frame_control_mut();
        fc.set_frame_type(self.frame_type);
        fc.set_ack_request(self.ack_request);
        fc.set_pan_id_compression(self.addressing.src_pan_elided());
        fc.set_dst_addressing_mode(self.addressing.dst_address.into());
        fc.set_src_addressing_mode(self.addressing.src_address.into());

        frame.set_sequence_number(self.sequence_number);
        frame.set_addressing_fields(&self.addressing);

        if let Some(command) = self.command {
            frame.set_command(command);
        }

        frame.set_payload(&self.payload);
    }

    /// Validate the frame and emit it into a fixed-capacity byte vector.
    pub fn to_vec<const N: usize>(&self) -> Result<heapless::Vec<u8, N>, ValidationError> {
        self.validate()?;

        let mut buffer = heapless::Vec::new();
        buffer
            .resize_default(self.buffer_len())
            .map_err(|()| ValidationError::BufferTooSmall)?;

        let mut frame = Frame::new_unchecked(&mut buffer[..]);
        self.emit(&mut frame);

        Ok(buffer)
    }
}

impl Encodable for FrameRepr<'_> {
    fn buffer_len(&self) -> usize {
        FrameRepr::buffer_len(self)
    }

    fn emit(&self, buffer: &mut [u8]) {
        let len = FrameRepr::buffer_len(self);
        let mut frame = Frame::new_unchecked(&mut buffer[..len]);
        FrameRepr::emit(self, &mut frame);
    }
}

impl core::fmt::Display for FrameRepr<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:?} seq={}", self.frame_type, self.sequence_number)?;

        if let Some(command) = self.command {
            write!(f, " command=0x{:02x}", u8::from(command))?;
        }

        if self.ack_request {
            write!(f, " ack")?;
        }

        if !self.addressing.dst_address.is_absent() {
            write!(f, " dst={}", self.addressing.dst_address)?;
        }

        if let Some(id) = self.addressing.dst_pan_id {
            write!(f, " dst-pan=0x{:04x}", id)?;
        }

        if !self.addressing.src_address.is_absent() {
            write!(f, " src={}", self.addressing.src_address)?;
        }

        if let Some(id) = self.addressing.src_pan_id {
            write!(f, " src-pan=0x{:04x}", id)?;
        }

        match self.payload {
            Payload::Raw(bytes) => write!(f, " payload={:x?}", bytes),
            Payload::Encodable(inner) => write!(f, " payload=({} bytes)", inner.buffer_len()),
        }
    }
}
