//! Frames that own their payload
//!
//! [`Frame`] borrows its payload from the caller's buffer. When that buffer
//! is reused before the frame is handled (a DMA receive buffer, a UART ring),
//! copy the frame into an [`OwnedFrame`]. The payload is stored inline, so
//! this still needs no allocator.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::{Destination, MessageType};
use crate::frame::{Frame, FrameError, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};

/// A frame with an inline payload copy
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OwnedFrame {
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
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl OwnedFrame {
    /// Create a new single-chunk frame, copying the payload
    pub fn new(
        version: u8,
        destination: Destination,
        source: Destination,
        message_type: MessageType,
        command_id: u8,
        payload: &[u8],
    ) -> Result<Self, FrameError> {
        Frame::new(version, destination, source, message_type, command_id, payload).map(Self::from)
    }

    /// Decode a frame and copy it out of `buffer`
    pub fn decode(buffer: &[u8]) -> Result<Self, FrameError> {
        Frame::decode(buffer).map(Self::from)
    }

    /// Borrow this frame for encoding
    pub fn as_frame(&self) -> Frame<'_> {
        let mut frame = Frame::from_bounded_payload(&self.payload);
        frame.version = self.version;
        frame.destination = self.destination;
        frame.source = self.source;
        frame.message_type = self.message_type;
        frame.command_id = self.command_id;
        frame.sequence = self.sequence;
        frame.is_last_chunk = self.is_last_chunk;
        frame
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        self.as_frame().encode(buffer)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        self.as_frame().encode_to_vec()
    }
}

impl From<Frame<'_>> for OwnedFrame {
    fn from(frame: Frame<'_>) -> Self {
        let mut payload = Vec::new();
        // Frame payloads never exceed MAX_PAYLOAD_SIZE
        let _ = payload.extend_from_slice(frame.payload());

        Self {
            version: frame.version,
            destination: frame.destination,
            source: frame.source,
            message_type: frame.message_type,
            command_id: frame.command_id,
            sequence: frame.sequence,
            is_last_chunk: frame.is_last_chunk,
            payload,
        }
    }
}
