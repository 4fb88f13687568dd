//! Frame Check Sequence handling.

use crate::{FormatError, Frame};

// The FCS field contains a 16-bit ITU-T CRC, using the x^16 + x^12 + x^5 + 1
// polynomial. Unlike most CRCs, the initial and final values are both 0x0000,
// instead of 0xFFFF as defined by the ITU-T CRC-16 standard. The CRC is
// calculated over the entire frame, excluding the FCS field itself.
const CRC_16_IEEE802154: crc::Algorithm<u16> = crc::Algorithm {
    width: 16,
    poly: 0x1021,
    init: 0x0000,
    refin: true,
    refout: true,
    xorout: 0x0000,
    check: 0x2189,
    residue: 0x0000,
};

/// An IEEE 802.15.4 frame followed by its two-byte Frame Check Sequence.
pub struct FrameWithFcs<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> FrameWithFcs<T> {
    /// Create a new [`FrameWithFcs`] from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot hold an FCS or the FCS does
    /// not match the frame content.
    pub fn new(buffer: T) -> Result<Self, FormatError> {
        let frame = Self::new_unchecked(buffer);

        if !frame.check_len() {
            return Err(FormatError::Truncated);
        }

        if !frame.check_fcs() {
            return Err(FormatError::FcsMismatch);
        }

        Ok(frame)
    }

    /// Check the length of the frame.
    fn check_len(&self) -> bool {
        self.buffer.as_ref().len() >= 2
    }

    /// Create a new [`FrameWithFcs`] from a given buffer without checking
    /// the FCS.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Calculate the Frame Check Sequence over the frame content.
    #[inline]
    pub fn calculate_fcs(&self) -> u16 {
        crc::Crc::<u16>::new(&CRC_16_IEEE802154).checksum(self.content())
    }

    /// Check the Frame Check Sequence of the frame.
    #[inline]
    pub fn check_fcs(&self) -> bool {
        self.calculate_fcs() == self.fcs()
    }

    /// Return the content of the frame, excluding the FCS.
    pub fn content(&self) -> &[u8] {
        let buffer = self.buffer.as_ref();
        &buffer[..buffer.len() - 2]
    }

    /// Return the Frame Check Sequence of the frame.
    pub fn fcs(&self) -> u16 {
        let buffer = self.buffer.as_ref();
        u16::from_le_bytes([buffer[buffer.len() - 2], buffer[buffer.len() - 1]])
    }

    /// Return a [`Frame`] reader over the content, excluding the FCS.
    pub fn frame(&self) -> Result<Frame<&'_ [u8]>, FormatError> {
        Frame::new(self.content())
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> FrameWithFcs<T> {
    /// Compute the FCS over the content and write it into the trailing two
    /// bytes.
    pub fn write_fcs(&mut self) {
        let fcs = self.calculate_fcs();
        let buffer = self.buffer.as_mut();
        let len = buffer.len();
        buffer[len - 2..].copy_from_slice(&fcs.to_le_bytes());
    }
}
