//! Human-readable rendering of frames

use std::fmt::Write;

use osusat_protocol::Frame;

/// Space-separated upper-case hex, e.g. `7E 01 02`
pub fn hex_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{byte:02X}");
    }
    out
}

/// Decode hex input, ignoring whitespace between byte pairs
pub fn parse_hex(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(compact)
}

/// Field-by-field dump of a decoded frame
pub fn describe(frame: &Frame<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "--- Decoded Frame ---");
    let _ = writeln!(out, "  Version:     {}", frame.version);
    let _ = writeln!(
        out,
        "  Destination: 0x{:02X} ({:?})",
        frame.destination.to_byte(),
        frame.destination
    );
    let _ = writeln!(
        out,
        "  Source:      0x{:02X} ({:?})",
        frame.source.to_byte(),
        frame.source
    );
    let _ = writeln!(
        out,
        "  Msg Type:    0x{:02X} ({:?})",
        frame.message_type.to_byte(),
        frame.message_type
    );
    let _ = writeln!(out, "  Command ID:  0x{:02X}", frame.command_id);
    let _ = writeln!(out, "  Sequence:    {}", frame.sequence);
    let _ = writeln!(out, "  Last Chunk:  {}", frame.is_last_chunk);
    let _ = writeln!(out, "  Payload Len: {}", frame.payload_len());
    let _ = writeln!(out, "  Payload:     {}", hex_bytes(frame.payload()));
    out.push_str("---------------------");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use osusat_protocol::{Destination, MessageType};

    #[test]
    fn formats_hex_bytes() {
        assert_eq!(hex_bytes(&[0x7E, 0x01, 0xAB]), "7E 01 AB");
        assert_eq!(hex_bytes(&[]), "");
    }

    #[test]
    fn parses_spaced_hex() {
        assert_eq!(parse_hex("7e 01\tab\n").unwrap(), vec![0x7E, 0x01, 0xAB]);
        assert!(parse_hex("7e 0").is_err());
        assert!(parse_hex("zz").is_err());
    }

    #[test]
    fn describes_frame_fields() {
        let frame = Frame::new(
            1,
            Destination::Payload,
            Destination::Unknown(0x09),
            MessageType::Command,
            0x10,
            &[0xDE, 0xAD],
        )
        .unwrap()
        .with_sequence(42);

        let text = describe(&frame);
        assert!(text.contains("Destination: 0x02 (Payload)"));
        assert!(text.contains("Source:      0x09 (Unknown(9))"));
        assert!(text.contains("Command ID:  0x10"));
        assert!(text.contains("Sequence:    42"));
        assert!(text.contains("Payload:     DE AD"));
    }
}
