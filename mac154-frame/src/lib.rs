//! Zero-copy read and write structures for handling IEEE 802.15.4 MAC frames.
//!
//! The [`Frame`] reader wraps a received byte buffer. [`Frame::new`] checks
//! that the buffer is long enough for every field its Frame Control field
//! declares and that both addressing modes are legal; [`Frame::new_unchecked`]
//! skips the checks. The reader hands out a [`FrameControl`] reader, the
//! sequence number, an [`AddressingFields`] reader, the command byte of
//! command frames, and the payload.
//!
//! The [`FrameRepr`] structure is the owned, high-level form of a frame.
//! [`FrameRepr::parse`] turns a reader into a representation, and
//! [`FrameRepr::emit`] writes a representation back into a buffer of
//! [`FrameRepr::buffer_len`] bytes. Frames can also be put together
//! field-by-field with the [`FrameBuilder`].
//!
//! ## Reading a frame
//! ```
//! use mac154_frame::{Address, CommandId, Frame, FrameRepr, FrameType};
//!
//! let bytes = [
//!     0x23, 0xc8, 0x7b, 0x62, 0x1a, 0x00, 0x00, 0xff, 0xff, 0x58, 0xdf,
//!     0x3e, 0xfe, 0xff, 0x57, 0xb4, 0x14, 0x01, 0x80,
//! ];
//! let frame = FrameRepr::parse(&Frame::new(&bytes[..]).unwrap());
//!
//! assert_eq!(frame.frame_type, FrameType::MacCommand);
//! assert_eq!(frame.sequence_number, 123);
//! assert_eq!(frame.addressing.dst_address, Address::Short(0x0000));
//! assert_eq!(frame.addressing.dst_pan_id, Some(0x1a62));
//! assert_eq!(frame.command, Some(CommandId::JoinRequest));
//! ```
//!
//! ## Writing a frame
//! ```
//! use mac154_frame::{Address, CommandId, FrameBuilder};
//!
//! let frame = FrameBuilder::new_command(CommandId::BeaconRequest)
//!     .set_sequence_number(1)
//!     .set_dst_pan_id(0xffff)
//!     .set_dst_address(Address::BROADCAST)
//!     .finalize()
//!     .unwrap();
//!
//! let bytes = frame.to_vec::<16>().unwrap();
//! assert_eq!(&bytes[..], [0x03, 0x08, 0x01, 0xff, 0xff, 0xff, 0xff, 0x07]);
//! ```
#![no_std]
#![deny(unsafe_code)]

#[cfg(any(feature = "std", test))]
#[macro_use]
extern crate std;

#[cfg(test)]
mod tests;

mod frame;
pub use frame::Frame;

mod frame_control;
pub use frame_control::*;

mod addressing;
pub use addressing::*;

mod command;
pub use command::CommandId;

mod payload;
pub use payload::{Encodable, Payload};

mod fcs;
pub use fcs::FrameWithFcs;

mod repr;
pub use repr::*;

/// An error returned when a received byte sequence does not form a valid
/// frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The buffer is shorter than the fields its header declares.
    Truncated,
    /// The frame type field holds a value this codec does not handle.
    UnknownFrameType,
    /// An addressing mode field holds the reserved value 1.
    ReservedAddressingMode,
    /// The frame check sequence does not match the frame content.
    FcsMismatch,
}

impl core::fmt::Display for FormatError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Truncated => write!(f, "truncated frame"),
            Self::UnknownFrameType => write!(f, "unknown frame type"),
            Self::ReservedAddressingMode => write!(f, "reserved addressing mode"),
            Self::FcsMismatch => write!(f, "frame check sequence mismatch"),
        }
    }
}

/// An error returned when a frame representation cannot be emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The frame is a command frame but carries no command byte.
    MissingCommand,
    /// The frame carries a command byte but is not a command frame.
    UnexpectedCommand,
    /// An address is present without its PAN identifier.
    MissingPanId,
    /// An address is neither empty, 2 bytes, nor 8 bytes long.
    InvalidAddressLength,
    /// The destination buffer cannot hold the encoded frame.
    BufferTooSmall,
    /// The frame type is not one this codec can put on the wire.
    UnknownFrameType,
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingCommand => write!(f, "command frame without command byte"),
            Self::UnexpectedCommand => write!(f, "command byte on a non-command frame"),
            Self::MissingPanId => write!(f, "address present without PAN ID"),
            Self::InvalidAddressLength => write!(f, "invalid address length"),
            Self::BufferTooSmall => write!(f, "buffer too small"),
            Self::UnknownFrameType => write!(f, "unknown frame type"),
        }
    }
}
