//! IEEE 802.15.4 Frame Control field readers and writers.

use super::AddressingMode;
use super::FormatError;

/// IEEE 802.15.4 frame type.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum FrameType {
    /// A beacon frame.
    Beacon = 0b000,
    /// A data frame.
    Data = 0b001,
    /// An acknowledgment frame.
    Ack = 0b010,
    /// A MAC command frame.
    MacCommand = 0b011,
    /// Any frame type this codec does not handle.
    Unknown,
}

impl From<u8> for FrameType {
    fn from(value: u8) -> Self {
        match value {
            0b000 => Self::Beacon,
            0b001 => Self::Data,
            0b010 => Self::Ack,
            0b011 => Self::MacCommand,
            _ => Self::Unknown,
        }
    }
}

/// A reader/writer for the IEEE 802.15.4 Frame Control field.
pub struct FrameControl<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> FrameControl<T> {
    /// Create a new [`FrameControl`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short.
    pub fn new(buffer: T) -> Result<Self, FormatError> {
        let fc = Self::new_unchecked(buffer);

        if !fc.check_len() {
            return Err(FormatError::Truncated);
        }

        Ok(fc)
    }

    /// Returns `false` if the buffer is too short to contain the Frame
    /// Control field.
    fn check_len(&self) -> bool {
        self.buffer.as_ref().len() >= 2
    }

    /// Create a new [`FrameControl`] reader/writer from a given buffer
    /// without length checking.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    fn raw(&self) -> u16 {
        let b = &self.buffer.as_ref()[..2];
        u16::from_le_bytes([b[0], b[1]])
    }

    /// Return the [`FrameType`] field.
    pub fn frame_type(&self) -> FrameType {
        FrameType::from((self.raw() & 0b111) as u8)
    }

    /// Returns `true` when the acknowledgment request field is set.
    pub fn ack_request(&self) -> bool {
        (self.raw() >> 5) & 0b1 == 1
    }

    /// Returns `true` when the PAN ID compression field is set.
    pub fn pan_id_compression(&self) -> bool {
        (self.raw() >> 6) & 0b1 == 1
    }

    /// Return the destination [`AddressingMode`].
    pub fn dst_addressing_mode(&self) -> AddressingMode {
        AddressingMode::from(((self.raw() >> 10) & 0b11) as u8)
    }

    /// Return the source [`AddressingMode`].
    pub fn src_addressing_mode(&self) -> AddressingMode {
        AddressingMode::from(((self.raw() >> 14) & 0b11) as u8)
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> FrameControl<T> {
    fn set_raw(&mut self, raw: u16) {
        self.buffer.as_mut()[..2].copy_from_slice(&raw.to_le_bytes());
    }

    /// Set the frame type field.
    pub fn set_frame_type(&mut self, frame_type: FrameType) {
        let raw = (self.raw() & !0b111) | ((frame_type as u8) as u16 & 0b111);
        self.set_raw(raw);
    }

    /// Set the acknowledgment request field.
    pub fn set_ack_request(&mut self, ack_request: bool) {
        let raw = (self.raw() & !(1 << 5)) | ((ack_request as u16) << 5);
        self.set_raw(raw);
    }

    /// Set the PAN ID compression field.
    pub fn set_pan_id_compression(&mut self, pan_id_compression: bool) {
        let raw = (self.raw() & !(1 << 6)) | ((pan_id_compression as u16) << 6);
        self.set_raw(raw);
    }

    /// Set the destination addressing mode field.
    pub fn set_dst_addressing_mode(&mut self, addressing_mode: AddressingMode) {
        let raw = (self.raw() & !(0b11 << 10)) | (((addressing_mode as u8) as u16 & 0b11) << 10);
        self.set_raw(raw);
    }

    /// Set the source addressing mode field.
    pub fn set_src_addressing_mode(&mut self, addressing_mode: AddressingMode) {
        let raw = (self.raw() & !(0b11 << 14)) | (((addressing_mode as u8) as u16 & 0b11) << 14);
        self.set_raw(raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_type_from_bits() {
        assert_eq!(FrameType::from(0b000), FrameType::Beacon);
        assert_eq!(FrameType::from(0b001), FrameType::Data);
        assert_eq!(FrameType::from(0b010), FrameType::Ack);
        assert_eq!(FrameType::from(0b011), FrameType::MacCommand);
        assert_eq!(FrameType::from(0b100), FrameType::Unknown);
        assert_eq!(FrameType::from(0b111), FrameType::Unknown);
    }

    #[test]
    fn read_fields() {
        // FCF of a captured join request.
        let fc = FrameControl::new(&[0x23, 0xc8][..]).unwrap();
        assert_eq!(fc.frame_type(), FrameType::MacCommand);
        assert!(fc.ack_request());
        assert!(!fc.pan_id_compression());
        assert_eq!(fc.dst_addressing_mode(), AddressingMode::Short);
        assert_eq!(fc.src_addressing_mode(), AddressingMode::Extended);
    }

    #[test]
    fn write_fields() {
        let mut buffer = [0u8; 2];
        let mut fc = FrameControl::new_unchecked(&mut buffer[..]);
        fc.set_frame_type(FrameType::MacCommand);
        fc.set_ack_request(true);
        fc.set_dst_addressing_mode(AddressingMode::Short);
        fc.set_src_addressing_mode(AddressingMode::Extended);
        assert_eq!(buffer, [0x23, 0xc8]);
    }

    #[test]
    fn too_short() {
        assert!(FrameControl::new(&[0x23][..]).is_err());
    }
}
