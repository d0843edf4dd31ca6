//! Message catalog codes
//!
//! Destination, message type and command codes are assigned by the message
//! catalog, which grows independently of this crate. Every type here is
//! byte-backed with an `Unknown` fallback, so a frame carrying a code the
//! catalog has not published yet still decodes and re-encodes unchanged.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Defines a byte-backed catalog enum with an `Unknown(u8)` fallback.
///
/// Generates the lossless `From<u8>` / `From<Self> for u8` conversions.
/// Equality and hashing go by wire byte, so `Unknown(code)` of a listed
/// code equals the named variant.
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// Code not (yet) listed in the catalog
            Unknown(u8),
        }

        impl $name {
            /// Parse from its wire format byte
            pub const fn from_byte(byte: u8) -> Self {
                match byte {
                    $($code => $name::$variant,)+
                    other => $name::Unknown(other),
                }
            }

            /// Convert to wire format byte
            pub const fn to_byte(self) -> u8 {
                match self {
                    $($name::$variant => $code,)+
                    $name::Unknown(byte) => byte,
                }
            }

            /// Returns true if the catalog defines this code
            pub const fn is_known(self) -> bool {
                !matches!(Self::from_byte(self.to_byte()), $name::Unknown(_))
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.to_byte() == other.to_byte()
            }
        }

        impl Eq for $name {}

        impl core::hash::Hash for $name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                core::hash::Hash::hash(&self.to_byte(), state);
            }
        }

        impl From<u8> for $name {
            fn from(byte: u8) -> Self {
                Self::from_byte(byte)
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value.to_byte()
            }
        }
    };
}

catalog_enum! {
    /// Subsystem address, used for both the destination and source fields
    pub enum Destination {
        /// On-board computer
        Obc = 0x01,
        /// Payload subsystem
        Payload = 0x02,
    }
}

catalog_enum! {
    /// Message category
    pub enum MessageType {
        /// Command addressed to the destination subsystem
        Command = 0x01,
    }
}

catalog_enum! {
    /// Commands understood by the payload subsystem
    ///
    /// Command codes are scoped to a destination; the codec itself carries
    /// `command_id` as a raw byte and never consults this type.
    pub enum PayloadCommand {
        /// Start an image transfer
        TransferImage = 0x10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(Destination::from_byte(0x01), Destination::Obc);
        assert_eq!(Destination::from_byte(0x02), Destination::Payload);
        assert_eq!(MessageType::from_byte(0x01), MessageType::Command);
        assert_eq!(PayloadCommand::from_byte(0x10), PayloadCommand::TransferImage);
        assert_eq!(u8::from(PayloadCommand::TransferImage), 16);
    }

    #[test]
    fn test_unknown_code_is_preserved() {
        let dest = Destination::from(0xEE);
        assert_eq!(dest, Destination::Unknown(0xEE));
        assert!(!dest.is_known());
        assert_eq!(u8::from(dest), 0xEE);
    }

    #[test]
    fn test_is_known() {
        assert!(Destination::Obc.is_known());
        assert!(MessageType::Command.is_known());
        assert!(!MessageType::Unknown(0x7F).is_known());
    }

    #[test]
    fn test_unknown_wrapping_known_code_equals_named() {
        // Unknown(0x01) is not the canonical value but is the same wire byte
        let odd = Destination::Unknown(0x01);
        assert_eq!(odd.to_byte(), 0x01);
        assert!(odd.is_known());
        assert_eq!(odd, Destination::Obc);
        assert_eq!(MessageType::Unknown(0x01), MessageType::Command);
        assert_ne!(Destination::Unknown(0x03), Destination::Payload);
    }

    #[test]
    fn test_hash_follows_wire_byte() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of(value: Destination) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(hash_of(Destination::Unknown(0x02)), hash_of(Destination::Payload));
    }

    proptest! {
        #[test]
        fn byte_identity(byte in any::<u8>()) {
            prop_assert_eq!(Destination::from_byte(byte).to_byte(), byte);
            prop_assert_eq!(MessageType::from_byte(byte).to_byte(), byte);
            prop_assert_eq!(PayloadCommand::from_byte(byte).to_byte(), byte);
        }
    }
}
