mod demo;
mod pack;
mod unpack;

use clap::Subcommand;

use crate::error::CliResult;

pub use pack::PackArgs;
pub use unpack::UnpackArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a frame and print it as hex
    Pack(PackArgs),
    /// Decode a hex frame and print its fields
    Unpack(UnpackArgs),
    /// Pack and unpack the reference TRANSFER_IMAGE command
    Demo,
}

pub fn run(command: Command) -> CliResult<()> {
    match command {
        Command::Pack(args) => pack::run(args),
        Command::Unpack(args) => unpack::run(args),
        Command::Demo => demo::run(),
    }
}

/// Parse a byte given in decimal or with a `0x` prefix
pub fn parse_byte(value: &str) -> Result<u8, String> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => value.parse::<u8>(),
    };
    parsed.map_err(|err| format!("invalid byte value {value:?}: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_and_hex_bytes() {
        assert_eq!(parse_byte("16"), Ok(16));
        assert_eq!(parse_byte("0x10"), Ok(16));
        assert_eq!(parse_byte("0XfF"), Ok(255));
        assert!(parse_byte("256").is_err());
        assert!(parse_byte("0x100").is_err());
        assert!(parse_byte("-1").is_err());
    }
}
