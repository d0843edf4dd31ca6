use clap::Args;
use osusat_protocol::Frame;

use crate::error::CliResult;
use crate::report::{describe, parse_hex};

#[derive(Args, Debug)]
pub struct UnpackArgs {
    /// Frame bytes as hex (whitespace allowed). Bytes after the frame are ignored.
    pub hex: String,
}

pub fn run(args: UnpackArgs) -> CliResult<()> {
    let buffer = parse_hex(&args.hex)?;
    let frame = unpack(&buffer)?;
    println!("{}", describe(&frame));
    Ok(())
}

fn unpack(buffer: &[u8]) -> CliResult<Frame<'_>> {
    let frame = Frame::decode(buffer).map_err(|err| {
        tracing::warn!(bytes = buffer.len(), error = %err, "failed to unpack frame");
        err
    })?;

    let trailing = buffer.len() - frame.wire_size();
    if trailing > 0 {
        tracing::debug!(trailing, "ignoring bytes after frame");
    }
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CliError, FAILURE};
    use osusat_protocol::{Destination, FrameError, MessageType};

    const SCENARIO_HEX: &str = "7E 01 02 01 01 10 2A 01 04 DE AD BE EF 0B A4";

    #[test]
    fn unpacks_reference_frame() {
        let buffer = parse_hex(SCENARIO_HEX).unwrap();
        let frame = unpack(&buffer).unwrap();

        assert_eq!(frame.destination, Destination::Payload);
        assert_eq!(frame.source, Destination::Obc);
        assert_eq!(frame.message_type, MessageType::Command);
        assert_eq!(frame.command_id, 0x10);
        assert_eq!(frame.sequence, 42);
        assert!(frame.is_last_chunk);
        assert_eq!(frame.payload(), &[0xDEu8, 0xAD, 0xBE, 0xEF]);

        let text = describe(&frame);
        assert!(text.contains("Payload:     DE AD BE EF"));
    }

    #[test]
    fn ignores_trailing_bytes() {
        let buffer = parse_hex(&format!("{SCENARIO_HEX} FF 00 7E")).unwrap();
        let frame = unpack(&buffer).unwrap();
        assert_eq!(frame.wire_size(), 15);
        assert_eq!(frame.sequence, 42);
    }

    #[test]
    fn tampered_crc_fails_with_frame_error() {
        let buffer = parse_hex("7E 01 02 01 01 10 2A 01 04 DE AD BE EF 0B A5").unwrap();
        let err = unpack(&buffer).unwrap_err();

        assert!(matches!(
            err,
            CliError::Frame(FrameError::BadCrc {
                received: 0x0BA5,
                calculated: 0x0BA4,
            })
        ));
        assert_eq!(err.code(), FAILURE);
    }

    #[test]
    fn short_input_fails_with_frame_error() {
        let buffer = parse_hex("7E 01").unwrap();
        assert!(matches!(
            unpack(&buffer),
            Err(CliError::Frame(FrameError::BufferTooSmall))
        ));
    }
}
