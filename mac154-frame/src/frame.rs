//! Whole-frame reader and writer.

use crate::repr::AddressingFieldsRepr;
use crate::{
    AddressingFields, AddressingMode, CommandId, FormatError, FrameControl, FrameType, Payload,
};

/// A reader/writer for an IEEE 802.15.4 MAC frame.
///
/// The wire layout is the Frame Control field, the sequence number, the
/// addressing fields, the command byte for command frames, and the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> Frame<T> {
    /// Create a new [`Frame`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short for the fields its
    /// header declares, if the frame type is unhandled, or if an addressing
    /// mode holds the reserved value.
    pub fn new(buffer: T) -> Result<Self, FormatError> {
        let frame = Self::new_unchecked(buffer);

        if frame.buffer.as_ref().len() < 3 {
            return Err(FormatError::Truncated);
        }

        let fc = frame.frame_control();

        if fc.frame_type() == FrameType::Unknown {
            return Err(FormatError::UnknownFrameType);
        }

        if fc.dst_addressing_mode() == AddressingMode::Reserved
            || fc.src_addressing_mode() == AddressingMode::Reserved
        {
            return Err(FormatError::ReservedAddressingMode);
        }

        if !frame.check_len() {
            return Err(FormatError::Truncated);
        }

        Ok(frame)
    }

    /// Returns `false` if the buffer is too short for the declared fields.
    ///
    /// Assumes the frame type and addressing modes were already checked.
    fn check_len(&self) -> bool {
        let buffer = self.buffer.as_ref();
        let fc = self.frame_control();

        let Ok(af) = AddressingFields::new(&buffer[3..], &fc) else {
            return false;
        };

        let mut len = 3 + af.len(&fc);

        if fc.frame_type() == FrameType::MacCommand {
            len += 1;
        }

        buffer.len() >= len
    }

    /// Create a new [`Frame`] reader/writer from a given buffer without
    /// validation.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return a [`FrameControl`] reader.
    pub fn frame_control(&self) -> FrameControl<&'_ [u8]> {
        FrameControl::new_unchecked(&self.buffer.as_ref()[..2])
    }

    /// Return the sequence number.
    pub fn sequence_number(&self) -> u8 {
        self.buffer.as_ref()[2]
    }

    /// Return an [`AddressingFields`] reader.
    pub fn addressing(&self) -> AddressingFields<&'_ [u8]> {
        AddressingFields::new_unchecked(&self.buffer.as_ref()[3..])
    }

    /// Return the command identifier of a command frame.
    pub fn command(&self) -> Option<CommandId> {
        let fc = self.frame_control();

        if fc.frame_type() != FrameType::MacCommand {
            return None;
        }

        let offset = 3 + self.addressing().len(&fc);
        Some(CommandId::from(self.buffer.as_ref()[offset]))
    }
}

impl<'f, T: AsRef<[u8]> + ?Sized> Frame<&'f T> {
    /// Return the payload of the frame.
    pub fn payload(&self) -> &'f [u8] {
        let buffer = self.buffer.as_ref();
        let fc = self.frame_control();

        let mut offset = 3 + self.addressing().len(&fc);

        if fc.frame_type() == FrameType::MacCommand {
            offset += 1;
        }

        &buffer[offset..]
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> Frame<T> {
    /// Get a mutable reference to the Frame Control field.
    pub fn frame_control_mut(&mut self) -> FrameControl<&'_ mut [u8]> {
        FrameControl::new_unchecked(&mut self.buffer.as_mut()[..2])
    }

    /// Set the Sequence Number field value in the buffer.
    pub fn set_sequence_number(&mut self, sequence_number: u8) {
        self.buffer.as_mut()[2] = sequence_number;
    }

    /// Set the Addressing field values in the buffer, based on the given
    /// [`AddressingFieldsRepr`].
    ///
    /// The addressing mode and compression bits must already be written.
    pub fn set_addressing_fields(&mut self, addressing_fields: &AddressingFieldsRepr) {
        let mut w = AddressingFields::new_unchecked(&mut self.buffer.as_mut()[3..]);
        w.write_fields(addressing_fields);
    }

    /// Set the command byte of a command frame.
    pub fn set_command(&mut self, command: CommandId) {
        let fc = self.frame_control();
        let offset = 3 + self.addressing().len(&fc);

        self.buffer.as_mut()[offset] = command.into();
    }

    /// Set the payload of the frame.
    pub fn set_payload(&mut self, payload: &Payload<'_>) {
        let fc = self.frame_control();
        let mut offset = 3 + self.addressing().len(&fc);

        if fc.frame_type() == FrameType::MacCommand {
            offset += 1;
        }

        payload.emit(&mut self.buffer.as_mut()[offset..]);
    }
}
