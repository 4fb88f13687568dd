//! Frame payloads.

/// Anything that can produce its own byte sequence.
///
/// The encoder only ever relies on this capability, never on a concrete
/// payload type. [`FrameRepr`] implements it too, so a frame can carry
/// another frame-like object as its payload.
///
/// [`FrameRepr`]: crate::FrameRepr
pub trait Encodable {
    /// Return the length of the encoded form in octets.
    fn buffer_len(&self) -> usize;

    /// Write the encoded form into a buffer of at least
    /// [`buffer_len`](Encodable::buffer_len) bytes.
    fn emit(&self, buffer: &mut [u8]);
}

impl Encodable for [u8] {
    fn buffer_len(&self) -> usize {
        self.len()
    }

    fn emit(&self, buffer: &mut [u8]) {
        buffer[..self.len()].copy_from_slice(self);
    }
}

/// The payload of a frame, opaque to the codec.
///
/// A decoded frame always carries [`Payload::Raw`]; [`Payload::Encodable`]
/// lets a higher layer hand its own objects to the encoder.
#[derive(Clone, Copy)]
pub enum Payload<'p> {
    /// A raw byte sequence.
    Raw(&'p [u8]),
    /// An object that encodes itself.
    Encodable(&'p dyn Encodable),
}

impl<'p> Payload<'p> {
    /// Return the length of the payload on the wire.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            Payload::Raw(bytes) => bytes.len(),
            Payload::Encodable(inner) => inner.buffer_len(),
        }
    }

    /// Return the raw bytes, if this is a raw payload.
    pub fn as_raw(&self) -> Option<&'p [u8]> {
        match self {
            Payload::Raw(bytes) => Some(bytes),
            Payload::Encodable(_) => None,
        }
    }

    pub(crate) fn emit(&self, buffer: &mut [u8]) {
        match self {
            Payload::Raw(bytes) => buffer[..bytes.len()].copy_from_slice(bytes),
            Payload::Encodable(inner) => inner.emit(buffer),
        }
    }
}

impl Default for Payload<'_> {
    fn default() -> Self {
        Payload::Raw(&[])
    }
}

impl core::fmt::Debug for Payload<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Payload::Raw(bytes) => f.debug_tuple("Raw").field(bytes).finish(),
            Payload::Encodable(inner) => write!(f, "Encodable({} bytes)", inner.buffer_len()),
        }
    }
}
