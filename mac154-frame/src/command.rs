//! MAC command identifiers.

/// The command byte of an IEEE 802.15.4 MAC command frame.
///
/// Unhandled values are carried verbatim in [`CommandId::Unknown`], so a
/// command byte always round-trips exactly through its `u8` form.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "fuzz", derive(arbitrary::Arbitrary))]
pub enum CommandId {
    /// A device asks to join the network.
    JoinRequest,
    /// The network answers a join request.
    JoinResponse,
    /// A device polls for pending data.
    DataRequest,
    /// A device scans for networks.
    BeaconRequest,
    /// Any other command byte.
    Unknown(u8),
}

impl From<u8> for CommandId {
    fn from(value: u8) -> Self {
        match value {
            0x01 => Self::JoinRequest,
            0x02 => Self::JoinResponse,
            0x04 => Self::DataRequest,
            0x07 => Self::BeaconRequest,
            other => Self::Unknown(other),
        }
    }
}

impl From<CommandId> for u8 {
    fn from(value: CommandId) -> Self {
        match value {
            CommandId::JoinRequest => 0x01,
            CommandId::JoinResponse => 0x02,
            CommandId::DataRequest => 0x04,
            CommandId::BeaconRequest => 0x07,
            CommandId::Unknown(other) => other,
        }
    }
}

impl core::fmt::Display for CommandId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::JoinRequest => write!(f, "Join request"),
            Self::JoinResponse => write!(f, "Join response"),
            Self::DataRequest => write!(f, "Data request"),
            Self::BeaconRequest => write!(f, "Beacon request"),
            Self::Unknown(value) => write!(f, "Command 0x{:02x}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        for value in 0..=u8::MAX {
            assert_eq!(u8::from(CommandId::from(value)), value);
        }
    }

    #[test]
    fn labels() {
        assert_eq!(format!("{}", CommandId::DataRequest), "Data request");
        assert_eq!(format!("{}", CommandId::BeaconRequest), "Beacon request");
        assert_eq!(format!("{}", CommandId::from(0x2a)), "Command 0x2a");
    }
}
