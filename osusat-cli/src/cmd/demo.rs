use osusat_protocol::{Destination, Frame, MessageType, PayloadCommand};

use crate::error::{CliError, CliResult};
use crate::report::{describe, hex_bytes};

const DEMO_PAYLOAD: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];
const TX_BUFFER_SIZE: usize = 256;

pub fn run() -> CliResult<()> {
    let mut tx_buffer = [0u8; TX_BUFFER_SIZE];
    let len = pack_demo(&mut tx_buffer)?;
    println!("Transmitting data: {}", hex_bytes(&tx_buffer[..len]));

    let received = unpack_demo(&tx_buffer[..len])?;
    println!("{}", describe(&received));
    Ok(())
}

fn demo_frame() -> CliResult<Frame<'static>> {
    let frame = Frame::new(
        1,
        Destination::Payload,
        Destination::Obc,
        MessageType::Command,
        PayloadCommand::TransferImage.into(),
        &DEMO_PAYLOAD,
    )?
    .with_sequence(42)
    .with_last_chunk(true);
    Ok(frame)
}

fn pack_demo(tx_buffer: &mut [u8]) -> CliResult<usize> {
    let len = demo_frame()?.encode(tx_buffer)?;
    tracing::info!(bytes = len, "packed demo frame");
    Ok(len)
}

fn unpack_demo(buffer: &[u8]) -> CliResult<Frame<'_>> {
    let frame = Frame::decode(buffer)?;
    tracing::info!("unpacked demo frame");

    if PayloadCommand::from(frame.command_id) != PayloadCommand::TransferImage {
        return Err(CliError::Mismatch("command id"));
    }
    if frame != demo_frame()? {
        return Err(CliError::Mismatch("frame fields"));
    }
    Ok(frame)
}
