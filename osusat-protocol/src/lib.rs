//! OSUSat/SCRT Messaging Standard
//!
//! This crate defines the fixed-layout binary frame exchanged between the
//! subsystems of the satellite (OBC, EPS, payload, ...). It provides the
//! CRC-16-CCITT checksum, the frame record, and the byte-exact encoder and
//! decoder. It never allocates and never blocks.
//!
//! # Frame Layout
//!
//! All multi-byte integers are big-endian:
//! ```text
//! ┌───────┬─────────┬──────┬────────┬──────────┬─────────┬──────────┬──────┬─────┬─────────┬────────┐
//! │ START │ VERSION │ DEST │ SOURCE │ MSG TYPE │ COMMAND │ SEQUENCE │ LAST │ LEN │ PAYLOAD │ CRC    │
//! │ 0x7E  │ 1B      │ 1B   │ 1B     │ 1B       │ 1B      │ 1B       │ 1B   │ 1B  │ 0–255B  │ 2B     │
//! └───────┴─────────┴──────┴────────┴──────────┴─────────┴──────────┴──────┴─────┴─────────┴────────┘
//! ```
//!
//! The CRC covers the eight header bytes and the payload; the start byte and
//! the CRC field itself are excluded.
//!
//! Transport (radio link, UART, socket), multi-frame reassembly and stream
//! resynchronization are left to the caller. The decoder works on one buffer
//! and either returns a complete, verified frame or an error.
//!
//! # Example
//! ```
//! use osusat_protocol::{Destination, Frame, MessageType, PayloadCommand};
//!
//! let frame = Frame::new(
//!     1,
//!     Destination::Payload,
//!     Destination::Obc,
//!     MessageType::Command,
//!     PayloadCommand::TransferImage.into(),
//!     &[0xDE, 0xAD, 0xBE, 0xEF],
//! )
//! .unwrap()
//! .with_sequence(42);
//!
//! let mut buffer = [0u8; 64];
//! let len = frame.encode(&mut buffer).unwrap();
//! assert_eq!(len, 15);
//!
//! let decoded = Frame::decode(&buffer[..len]).unwrap();
//! assert_eq!(decoded, frame);
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod crc;
pub mod frame;
pub mod owned;

pub use catalog::{Destination, MessageType, PayloadCommand};
pub use crc::{crc16_ccitt, Crc16};
pub use frame::{
    Frame, FrameError, CRC_SIZE, FRAME_OVERHEAD, FRAME_START, HEADER_SIZE, MAX_FRAME_SIZE,
    MAX_PAYLOAD_SIZE,
};
pub use owned::OwnedFrame;
