//! Frame encoding and decoding for the OSUSat messaging standard.
//!
//! Frame format:
//! - START (1 byte): 0x7E frame marker
//! - HEADER (8 bytes): version, destination, source, message type,
//!   command id, sequence, last-chunk flag, payload length
//! - PAYLOAD (0-255 bytes): command or telemetry data
//! - CRC (2 bytes): CRC-16-CCITT over HEADER and PAYLOAD, big-endian

use core::fmt;

use crate::catalog::{Destination, MessageType};
use crate::crc::crc16_ccitt;
use crate::owned::OwnedFrame;

/// Frame start marker
pub const FRAME_START: u8 = 0x7E;

/// Number of header bytes between START and PAYLOAD
pub const HEADER_SIZE: usize = 8;

/// Number of CRC bytes at the end of a frame
pub const CRC_SIZE: usize = 2;

/// Bytes in a frame besides the payload (START + HEADER + CRC)
pub const FRAME_OVERHEAD: usize = 1 + HEADER_SIZE + CRC_SIZE;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = u8::MAX as usize;

/// Maximum complete frame size
pub const MAX_FRAME_SIZE: usize = FRAME_OVERHEAD + MAX_PAYLOAD_SIZE;

// Byte offsets within a frame
const OFFSET_VERSION: usize = 1;
const OFFSET_DESTINATION: usize = 2;
const OFFSET_SOURCE: usize = 3;
const OFFSET_MESSAGE_TYPE: usize = 4;
const OFFSET_COMMAND_ID: usize = 5;
const OFFSET_SEQUENCE: usize = 6;
const OFFSET_LAST_CHUNK: usize = 7;
const OFFSET_LENGTH: usize = 8;
const OFFSET_PAYLOAD: usize = 1 + HEADER_SIZE;

/// Errors that can occur during frame construction, encoding or decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Buffer cannot hold the required or minimum frame size
    BufferTooSmall,
    /// First byte is not [`FRAME_START`]
    BadStartByte,
    /// Declared payload length runs past the end of the buffer
    BadLength,
    /// Checksum mismatch
    BadCrc {
        /// CRC carried by the frame
        received: u16,
        /// CRC computed over the received header and payload
        calculated: u16,
    },
    /// Payload exceeds [`MAX_PAYLOAD_SIZE`]
    PayloadTooLarge,
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::BufferTooSmall => f.write_str("buffer too small for frame"),
            FrameError::BadStartByte => write!(f, "missing start byte {FRAME_START:#04x}"),
            FrameError::BadLength => f.write_str("declared payload length exceeds buffer"),
            FrameError::BadCrc {
                received,
                calculated,
            } => write!(
                f,
                "crc mismatch: received {received:#06x}, calculated {calculated:#06x}"
            ),
            FrameError::PayloadTooLarge => {
                write!(f, "payload exceeds {MAX_PAYLOAD_SIZE} bytes")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {}

/// A single frame with a borrowed payload
///
/// Frames returned by [`Frame::decode`] point into the input buffer; nothing
/// is copied. Use [`OwnedFrame`] when the frame has to outlive the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame<'a> {
    /// Protocol version tag
    pub version: u8,
    /// Receiving subsystem
    pub destination: Destination,
    /// Sending subsystem
    pub source: Destination,
    /// Message category
    pub message_type: MessageType,
    /// Operation code within the message type
    pub command_id: u8,
    /// Fragment index for multi-frame transfers
    pub sequence: u8,
    /// True if this frame ends a fragmented transfer
    pub is_last_chunk: bool,
    payload: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Create a new single-chunk frame (`sequence` 0, last chunk)
    pub fn new(
        version: u8,
        destination: Destination,
        source: Destination,
        message_type: MessageType,
        command_id: u8,
        payload: &'a [u8],
    ) -> Result<Self, FrameError> {
        if payload.len() > MAX_PAYLOAD_SIZE {
            return Err(FrameError::PayloadTooLarge);
        }

        Ok(Self {
            version,
            destination,
            source,
            message_type,
            command_id,
            sequence: 0,
            is_last_chunk: true,
            payload,
        })
    }

    /// Wrap a payload whose length is already bounded by `MAX_PAYLOAD_SIZE`
    pub(crate) fn from_bounded_payload(payload: &'a [u8]) -> Self {
        debug_assert!(payload.len() <= MAX_PAYLOAD_SIZE);
        Self {
            version: 0,
            destination: Destination::Unknown(0),
            source: Destination::Unknown(0),
            message_type: MessageType::Unknown(0),
            command_id: 0,
            sequence: 0,
            is_last_chunk: true,
            payload,
        }
    }

    /// Set the fragment index
    pub fn with_sequence(mut self, sequence: u8) -> Self {
        self.sequence = sequence;
        self
    }

    /// Set whether this frame ends a fragmented transfer
    pub fn with_last_chunk(mut self, is_last_chunk: bool) -> Self {
        self.is_last_chunk = is_last_chunk;
        self
    }

    /// Payload bytes
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }

    /// Payload length as carried in the header
    pub fn payload_len(&self) -> u8 {
        // Bounded by MAX_PAYLOAD_SIZE at construction
        self.payload.len() as u8
    }

    /// Number of bytes this frame occupies on the wire
    pub fn wire_size(&self) -> usize {
        FRAME_OVERHEAD + self.payload.len()
    }

    /// Header bytes in wire order
    fn header(&self) -> [u8; HEADER_SIZE] {
        [
            self.version,
            self.destination.to_byte(),
            self.source.to_byte(),
            self.message_type.to_byte(),
            self.command_id,
            self.sequence,
            self.is_last_chunk as u8,
            self.payload_len(),
        ]
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written. Bytes past the frame are left
    /// untouched.
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = self.wire_size();
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        let crc_offset = OFFSET_PAYLOAD + self.payload.len();

        buffer[0] = FRAME_START;
        buffer[OFFSET_VERSION..OFFSET_PAYLOAD].copy_from_slice(&self.header());
        buffer[OFFSET_PAYLOAD..crc_offset].copy_from_slice(self.payload);

        let crc = crc16_ccitt(&buffer[OFFSET_VERSION..crc_offset]);
        buffer[crc_offset..frame_len].copy_from_slice(&crc.to_be_bytes());

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<heapless::Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = heapless::Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| FrameError::BufferTooSmall)?;
        Ok(vec)
    }

    /// Decode a frame from the start of a byte buffer
    ///
    /// Checks run in order and the first failure is returned: minimum size,
    /// start byte, declared length, CRC. Bytes after the frame are ignored;
    /// the next frame in a receive buffer starts at [`Frame::wire_size`].
    pub fn decode(buffer: &'a [u8]) -> Result<Self, FrameError> {
        if buffer.len() < FRAME_OVERHEAD {
            return Err(FrameError::BufferTooSmall);
        }

        if buffer[0] != FRAME_START {
            return Err(FrameError::BadStartByte);
        }

        let payload_len = buffer[OFFSET_LENGTH] as usize;
        let frame_len = FRAME_OVERHEAD + payload_len;
        if buffer.len() < frame_len {
            return Err(FrameError::BadLength);
        }

        let crc_offset = OFFSET_PAYLOAD + payload_len;
        let calculated = crc16_ccitt(&buffer[OFFSET_VERSION..crc_offset]);
        let received = u16::from_be_bytes([buffer[crc_offset], buffer[crc_offset + 1]]);
        if received != calculated {
            return Err(FrameError::BadCrc {
                received,
                calculated,
            });
        }

        Ok(Self {
            version: buffer[OFFSET_VERSION],
            destination: Destination::from_byte(buffer[OFFSET_DESTINATION]),
            source: Destination::from_byte(buffer[OFFSET_SOURCE]),
            message_type: MessageType::from_byte(buffer[OFFSET_MESSAGE_TYPE]),
            command_id: buffer[OFFSET_COMMAND_ID],
            sequence: buffer[OFFSET_SEQUENCE],
            is_last_chunk: buffer[OFFSET_LAST_CHUNK] != 0,
            payload: &buffer[OFFSET_PAYLOAD..crc_offset],
        })
    }

    /// Copy this frame into an [`OwnedFrame`]
    pub fn to_owned_frame(&self) -> OwnedFrame {
        OwnedFrame::from(*self)
    }
}
