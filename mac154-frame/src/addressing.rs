//! Addressing fields readers and writers.

use super::FrameControl;
use super::{FormatError, ValidationError};

/// An IEEE 802.15.4 address.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum Address {
    /// No address.
    Absent,
    /// A short address, valid within one PAN.
    Short(u16),
    /// An extended address, in transmission order.
    Extended([u8; 8]),
}

impl Address {
    /// The broadcast address.
    pub const BROADCAST: Address = Address::Short(0xffff);

    /// Query whether the address is a unicast address.
    pub fn is_unicast(&self) -> bool {
        !self.is_broadcast()
    }

    /// Query whether this address is the broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Construct an [`Address`] from its wire form.
    ///
    /// # Errors
    ///
    /// Returns an error for any length other than 0, 2 or 8 bytes.
    pub fn from_bytes(a: &[u8]) -> Result<Self, ValidationError> {
        match a.len() {
            0 => Ok(Address::Absent),
            2 => Ok(Address::Short(u16::from_le_bytes([a[0], a[1]]))),
            8 => {
                let mut b = [0u8; 8];
                b.copy_from_slice(a);
                Ok(Address::Extended(b))
            }
            _ => Err(ValidationError::InvalidAddressLength),
        }
    }

    /// Return the length of the address in octets.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            Address::Absent => 0,
            Address::Short(_) => 2,
            Address::Extended(_) => 8,
        }
    }

    /// Query whether the address is absent.
    pub fn is_absent(&self) -> bool {
        matches!(self, Address::Absent)
    }
}

impl From<Address> for AddressingMode {
    fn from(value: Address) -> Self {
        match value {
            Address::Absent => AddressingMode::Absent,
            Address::Short(_) => AddressingMode::Short,
            Address::Extended(_) => AddressingMode::Extended,
        }
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Address::Absent => write!(f, "absent"),
            Address::Short(value) => write!(f, "0x{:04x}", value),
            Address::Extended(value) => write!(
                f,
                "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
                value[0], value[1], value[2], value[3], value[4], value[5], value[6], value[7]
            ),
        }
    }
}

/// IEEE 802.15.4 addressing mode.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum AddressingMode {
    /// No address present.
    Absent = 0b00,
    /// The reserved mode, never legally produced.
    Reserved = 0b01,
    /// A 16-bit short address.
    Short = 0b10,
    /// A 64-bit extended address.
    Extended = 0b11,
}

impl AddressingMode {
    /// Return the size of the address in octets.
    pub fn size(&self) -> usize {
        match self {
            Self::Absent | Self::Reserved => 0,
            Self::Short => 2,
            Self::Extended => 8,
        }
    }
}

impl From<u8> for AddressingMode {
    fn from(value: u8) -> Self {
        match value {
            0b00 => Self::Absent,
            0b10 => Self::Short,
            0b11 => Self::Extended,
            _ => Self::Reserved,
        }
    }
}

/// A reader/writer for the IEEE 802.15.4 Addressing Fields.
///
/// The buffer starts right after the sequence number. Field offsets depend
/// on the Frame Control field, which is passed into each accessor.
pub struct AddressingFields<T: AsRef<[u8]>> {
    buffer: T,
}

impl<T: AsRef<[u8]>> AddressingFields<T> {
    /// Create a new [`AddressingFields`] reader/writer from a given buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if an addressing mode is reserved or the buffer is
    /// too small to contain the addressing fields.
    pub fn new<FC: AsRef<[u8]>>(buffer: T, fc: &FrameControl<FC>) -> Result<Self, FormatError> {
        let af = Self::new_unchecked(buffer);

        if fc.dst_addressing_mode() == AddressingMode::Reserved
            || fc.src_addressing_mode() == AddressingMode::Reserved
        {
            return Err(FormatError::ReservedAddressingMode);
        }

        if !af.check_len(fc) {
            return Err(FormatError::Truncated);
        }

        Ok(af)
    }

    /// Check if the buffer is large enough to contain the addressing fields.
    fn check_len<FC: AsRef<[u8]>>(&self, fc: &FrameControl<FC>) -> bool {
        self.buffer.as_ref().len() >= self.len(fc)
    }

    /// Create a new [`AddressingFields`] reader/writer from a given buffer
    /// without checking the length.
    pub fn new_unchecked(buffer: T) -> Self {
        Self { buffer }
    }

    /// Return the length of the Addressing Fields in octets.
    pub fn len<FC: AsRef<[u8]>>(&self, fc: &FrameControl<FC>) -> usize {
        let (dst_pan, dst, src_pan, src) = Self::field_layout(fc);

        (if dst_pan { 2 } else { 0 })
            + dst.size()
            + (if src_pan { 2 } else { 0 })
            + src.size()
    }

    /// Which fields are on the wire, in order: destination PAN, destination
    /// address, source PAN, source address.
    ///
    /// A destination PAN accompanies any destination address. The source PAN
    /// is elided when the PAN ID compression bit is set.
    fn field_layout<FC: AsRef<[u8]>>(
        fc: &FrameControl<FC>,
    ) -> (bool, AddressingMode, bool, AddressingMode) {
        let dst = fc.dst_addressing_mode();
        let src = fc.src_addressing_mode();

        (
            dst != AddressingMode::Absent,
            dst,
            src != AddressingMode::Absent && !fc.pan_id_compression(),
            src,
        )
    }

    /// Return the IEEE 802.15.4 destination PAN ID if not elided.
    pub fn dst_pan_id<FC: AsRef<[u8]>>(&self, fc: &FrameControl<FC>) -> Option<u16> {
        let (dst_pan, _, _, _) = Self::field_layout(fc);

        if dst_pan {
            let b = &self.buffer.as_ref()[..2];
            Some(u16::from_le_bytes([b[0], b[1]]))
        } else {
            None
        }
    }

    /// Return the IEEE 802.15.4 destination [`Address`].
    pub fn dst_address<FC: AsRef<[u8]>>(&self, fc: &FrameControl<FC>) -> Address {
        let (dst_pan, dst, _, _) = Self::field_layout(fc);
        let offset = if dst_pan { 2 } else { 0 };

        self.read_address(dst, offset)
    }

    /// Return the IEEE 802.15.4 source PAN ID.
    ///
    /// When the PAN ID compression bit is set, this is the destination PAN
    /// ID, or `None` if no destination PAN was transmitted.
    pub fn src_pan_id<FC: AsRef<[u8]>>(&self, fc: &FrameControl<FC>) -> Option<u16> {
        let (dst_pan, dst, src_pan, src) = Self::field_layout(fc);

        if src == AddressingMode::Absent {
            return None;
        }

        if fc.pan_id_compression() {
            return self.dst_pan_id(fc);
        }

        if src_pan {
            let offset = (if dst_pan { 2 } else { 0 }) + dst.size();
            let b = &self.buffer.as_ref()[offset..][..2];
            Some(u16::from_le_bytes([b[0], b[1]]))
        } else {
            None
        }
    }

    /// Return the IEEE 802.15.4 source [`Address`].
    pub fn src_address<FC: AsRef<[u8]>>(&self, fc: &FrameControl<FC>) -> Address {
        let (dst_pan, dst, src_pan, src) = Self::field_layout(fc);
        let offset = (if dst_pan { 2 } else { 0 }) + dst.size() + (if src_pan { 2 } else { 0 });

        self.read_address(src, offset)
    }

    fn read_address(&self, mode: AddressingMode, offset: usize) -> Address {
        match mode {
            AddressingMode::Absent | AddressingMode::Reserved => Address::Absent,
            AddressingMode::Short => {
                let b = &self.buffer.as_ref()[offset..][..2];
                Address::Short(u16::from_le_bytes([b[0], b[1]]))
            }
            AddressingMode::Extended => {
                let mut b = [0u8; 8];
                b.copy_from_slice(&self.buffer.as_ref()[offset..][..8]);
                Address::Extended(b)
            }
        }
    }
}

impl<T: AsRef<[u8]> + AsMut<[u8]>> AddressingFields<T> {
    /// Write the given addressing fields into the buffer.
    ///
    /// The source PAN is skipped when it is elided on the wire; the matching
    /// compression bit is the caller's responsibility.
    pub fn write_fields(&mut self, fields: &super::repr::AddressingFieldsRepr) {
        let mut offset = 0;

        if !fields.dst_address.is_absent() {
            if let Some(id) = fields.dst_pan_id {
                let b = &mut self.buffer.as_mut()[offset..][..2];
                b.copy_from_slice(&id.to_le_bytes());
                offset += 2;
            }

            offset += self.write_address(fields.dst_address, offset);
        }

        if !fields.src_address.is_absent() {
            if !fields.src_pan_elided() {
                if let Some(id) = fields.src_pan_id {
                    let b = &mut self.buffer.as_mut()[offset..][..2];
                    b.copy_from_slice(&id.to_le_bytes());
                    offset += 2;
                }
            }

            self.write_address(fields.src_address, offset);
        }
    }

    fn write_address(&mut self, address: Address, offset: usize) -> usize {
        let b = &mut self.buffer.as_mut()[offset..][..address.len()];
        match address {
            Address::Absent => {}
            Address::Short(value) => b.copy_from_slice(&value.to_le_bytes()),
            Address::Extended(value) => b.copy_from_slice(&value),
        }
        address.len()
    }
}
