use clap::Args;
use osusat_protocol::{Destination, Frame, MessageType, MAX_FRAME_SIZE};

use super::parse_byte;
use crate::error::CliResult;
use crate::report::{hex_bytes, parse_hex};

#[derive(Args, Debug)]
pub struct PackArgs {
    /// Protocol version tag.
    #[arg(long, default_value = "1", value_parser = parse_byte)]
    pub protocol_version: u8,

    /// Destination subsystem code.
    #[arg(long, value_parser = parse_byte)]
    pub destination: u8,

    /// Source subsystem code.
    #[arg(long, value_parser = parse_byte)]
    pub source: u8,

    /// Message type code.
    #[arg(long, value_parser = parse_byte)]
    pub message_type: u8,

    /// Command id within the message type.
    #[arg(long, value_parser = parse_byte)]
    pub command_id: u8,

    /// Fragment index.
    #[arg(long, default_value = "0", value_parser = parse_byte)]
    pub sequence: u8,

    /// Mark the frame as a non-final chunk.
    #[arg(long)]
    pub not_last: bool,

    /// Payload bytes as hex (whitespace allowed).
    #[arg(long, default_value = "")]
    pub payload: String,
}

pub fn run(args: PackArgs) -> CliResult<()> {
    let payload = parse_hex(&args.payload)?;
    let encoded = encode(&args, &payload)?;
    println!("{}", hex_bytes(&encoded));
    Ok(())
}

fn encode(args: &PackArgs, payload: &[u8]) -> CliResult<Vec<u8>> {
    let frame = Frame::new(
        args.protocol_version,
        Destination::from(args.destination),
        Destination::from(args.source),
        MessageType::from(args.message_type),
        args.command_id,
        payload,
    )?
    .with_sequence(args.sequence)
    .with_last_chunk(!args.not_last);

    if has_uncataloged_code(&frame) {
        tracing::debug!(
            destination = args.destination,
            source = args.source,
            message_type = args.message_type,
            "code not in message catalog, packing verbatim"
        );
    }

    let mut buffer = [0u8; MAX_FRAME_SIZE];
    let len = frame.encode(&mut buffer)?;
    tracing::info!(bytes = len, payload_len = payload.len(), "packed frame");
    Ok(buffer[..len].to_vec())
}

/// True if any catalog-backed header field carries an unlisted code
fn has_uncataloged_code(frame: &Frame<'_>) -> bool {
    !frame.destination.is_known() || !frame.source.is_known() || !frame.message_type.is_known()
}
