use crate::{Address, AddressingFields, FrameControl, ValidationError};

/// A high-level representation of the IEEE 802.15.4 Addressing Fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub struct AddressingFieldsRepr {
    /// Destination PAN identifier.
    pub dst_pan_id: Option<u16>,
    /// Destination address.
    pub dst_address: Address,
    /// Source PAN identifier.
    pub src_pan_id: Option<u16>,
    /// Source address.
    pub src_address: Address,
}

impl Default for AddressingFieldsRepr {
    fn default() -> Self {
        Self {
            dst_pan_id: None,
            dst_address: Address::Absent,
            src_pan_id: None,
            src_address: Address::Absent,
        }
    }
}

impl AddressingFieldsRepr {
    /// Read the Addressing Fields out of a reader.
    ///
    /// An elided source PAN comes back as the destination PAN's value, the
    /// way the receiver is meant to interpret it.
    pub fn parse<T, FC>(addressing: &AddressingFields<T>, fc: &FrameControl<FC>) -> Self
    where
        T: AsRef<[u8]>,
        FC: AsRef<[u8]>,
    {
        Self {
            dst_pan_id: addressing.dst_pan_id(fc),
            dst_address: addressing.dst_address(fc),
            src_pan_id: addressing.src_pan_id(fc),
            src_address: addressing.src_address(fc),
        }
    }

    /// Whether the source PAN is left off the wire.
    ///
    /// That is the case when a source address travels with no PAN of its
    /// own, or with the same PAN as the destination.
    pub fn src_pan_elided(&self) -> bool {
        !self.src_address.is_absent()
            && (self.src_pan_id.is_none() || self.src_pan_id == self.dst_pan_id)
    }

    /// Validate the Addressing Fields.
    ///
    /// A destination address is always accompanied by a destination PAN on
    /// the wire. A source address without a source PAN is fine: its PAN is
    /// implied equal to the destination's.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.dst_address.is_absent() && self.dst_pan_id.is_none() {
            return Err(ValidationError::MissingPanId);
        }

        Ok(())
    }

    /// Return the length of the Addressing Fields on the wire in octets.
    pub fn buffer_len(&self) -> usize {
        let mut len = 0;

        if !self.dst_address.is_absent() {
            if self.dst_pan_id.is_some() {
                len += 2;
            }
            len += self.dst_address.len();
        }

        if !self.src_address.is_absent() {
            if !self.src_pan_elided() {
                len += 2;
            }
            len += self.src_address.len();
        }

        len
    }
}
