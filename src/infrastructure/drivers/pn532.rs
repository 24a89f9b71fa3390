//! PN532 NFC controller over I2C
//!
//! Every exchange is: write a normal information frame, wait for the ready
//! bit, read the ACK frame, wait for the ready bit again, read the response
//! frame. Each I2C read starts with one status byte.

use embassy_time::{Duration, Instant, Timer};
use embedded_hal_async::i2c::I2c;
use heapless::Vec;

use crate::domain::entity::TagId;
use crate::domain::ports::{TagReader, TagReaderError};

pub const PN532_ADDRESS: u8 = 0x24;

const HOST_TO_PN532: u8 = 0xD4;
const PN532_TO_HOST: u8 = 0xD5;

const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
const CMD_SAM_CONFIGURATION: u8 = 0x14;
const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;

/// Normal mode, 1s virtual card timeout, use IRQ
const SAM_NORMAL_MODE: [u8; 3] = [0x01, 0x14, 0x01];
/// One target, 106 kbps type A
const PASSIVE_TARGET_ISO14443A: [u8; 2] = [0x01, 0x00];

const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];
const STATUS_READY: u8 = 0x01;

const MAX_FRAME_LEN: usize = 64;
const COMMAND_TIMEOUT: Duration = Duration::from_millis(1000);
const READY_POLL: Duration = Duration::from_millis(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    pub ic: u8,
    pub version: u8,
    pub revision: u8,
    pub support: u8,
}

pub struct Pn532<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> Pn532<I> {
    pub const fn new(i2c: I) -> Self {
        Self {
            i2c,
            address: PN532_ADDRESS,
        }
    }

    pub async fn firmware_version(&mut self) -> Result<FirmwareVersion, TagReaderError> {
        let mut data = [0u8; 4];
        let len = self
            .exchange(CMD_GET_FIRMWARE_VERSION, &[], &mut data, COMMAND_TIMEOUT)
            .await?
            .ok_or(TagReaderError::HardwareFault)?;
        if len < data.len() {
            return Err(TagReaderError::Protocol);
        }
        Ok(FirmwareVersion {
            ic: data[0],
            version: data[1],
            revision: data[2],
            support: data[3],
        })
    }

    /// Configure the secure access module for normal reader mode
    pub async fn sam_configuration(&mut self) -> Result<(), TagReaderError> {
        let mut data = [0u8; 0];
        self.exchange(CMD_SAM_CONFIGURATION, &SAM_NORMAL_MODE, &mut data, COMMAND_TIMEOUT)
            .await?
            .ok_or(TagReaderError::HardwareFault)?;
        Ok(())
    }

    /// Wait up to `timeout` for one ISO14443A card and return its UID
    pub async fn read_passive_target(
        &mut self,
        timeout: Duration,
    ) -> Result<Option<TagId>, TagReaderError> {
        let mut data = [0u8; MAX_FRAME_LEN];
        let Some(len) = self
            .exchange(CMD_IN_LIST_PASSIVE_TARGET, &PASSIVE_TARGET_ISO14443A, &mut data, timeout)
            .await?
        else {
            return Ok(None);
        };
        parse_passive_target(&data[..len])
    }

    /// Send a command and read its response data into `out`
    ///
    /// `Ok(None)` means the response was not ready within `timeout`.
    async fn exchange(
        &mut self,
        command: u8,
        params: &[u8],
        out: &mut [u8],
        timeout: Duration,
    ) -> Result<Option<usize>, TagReaderError> {
        let frame = build_frame(command, params)?;
        self.i2c
            .write(self.address, &frame)
            .await
            .map_err(|_| TagReaderError::Bus)?;

        if !self.wait_ready(COMMAND_TIMEOUT).await? {
            return Err(TagReaderError::HardwareFault);
        }
        let mut ack = [0u8; ACK_FRAME.len() + 1];
        self.read(&mut ack).await?;
        if ack[1..] != ACK_FRAME {
            return Err(TagReaderError::Protocol);
        }

        if !self.wait_ready(timeout).await? {
            return Ok(None);
        }
        let mut raw = [0u8; MAX_FRAME_LEN + 1];
        self.read(&mut raw).await?;
        let data = parse_frame(&raw[1..], command + 1)?;
        let len = data.len().min(out.len());
        out[..len].copy_from_slice(&data[..len]);
        Ok(Some(len))
    }

    async fn read(&mut self, buf: &mut [u8]) -> Result<(), TagReaderError> {
        self.i2c
            .read(self.address, buf)
            .await
            .map_err(|_| TagReaderError::Bus)
    }

    async fn wait_ready(&mut self, timeout: Duration) -> Result<bool, TagReaderError> {
        let deadline = Instant::now() + timeout;
        loop {
            let mut status = [0u8; 1];
            self.read(&mut status).await?;
            if status[0] & STATUS_READY != 0 {
                return Ok(true);
            }
            if Instant::now() >= deadline {
                return Ok(false);
            }
            Timer::after(READY_POLL).await;
        }
    }
}

impl<I: I2c> TagReader for Pn532<I> {
    async fn init(&mut self) -> Result<(), TagReaderError> {
        let firmware = self.firmware_version().await?;
        log::info!(
            "pn532: found PN5{:02x}, firmware {}.{}",
            firmware.ic,
            firmware.version,
            firmware.revision
        );
        self.sam_configuration().await
    }

    async fn poll_once(&mut self, timeout: Duration) -> Result<Option<TagId>, TagReaderError> {
        self.read_passive_target(timeout).await
    }
}

/// `00 00 FF LEN LCS D4 CMD PARAMS.. DCS 00`
fn build_frame(command: u8, params: &[u8]) -> Result<Vec<u8, MAX_FRAME_LEN>, TagReaderError> {
    let len = u8::try_from(params.len() + 2).map_err(|_| TagReaderError::Protocol)?;
    let mut frame = Vec::new();
    let mut checksum = HOST_TO_PN532.wrapping_add(command);
    for byte in params {
        checksum = checksum.wrapping_add(*byte);
    }

    let header = [0x00, 0x00, 0xFF, len, len.wrapping_neg(), HOST_TO_PN532, command];
    let trailer = [checksum.wrapping_neg(), 0x00];
    for part in [&header[..], params, &trailer[..]] {
        frame
            .extend_from_slice(part)
            .map_err(|()| TagReaderError::Protocol)?;
    }
    Ok(frame)
}

/// Validate a response frame and return the bytes after `D5 CMD+1`
fn parse_frame(raw: &[u8], response_code: u8) -> Result<&[u8], TagReaderError> {
    let start = raw
        .windows(2)
        .position(|w| w == [0x00, 0xFF])
        .ok_or(TagReaderError::Protocol)?;
    let header = raw.get(start + 2..start + 4).ok_or(TagReaderError::Protocol)?;
    let (len, lcs) = (header[0], header[1]);
    if len.wrapping_add(lcs) != 0 || len < 2 {
        return Err(TagReaderError::Protocol);
    }

    let body_start = start + 4;
    let body = raw
        .get(body_start..body_start + usize::from(len))
        .ok_or(TagReaderError::Protocol)?;
    let dcs = *raw
        .get(body_start + usize::from(len))
        .ok_or(TagReaderError::Protocol)?;
    let sum = body.iter().fold(dcs, |acc, byte| acc.wrapping_add(*byte));
    if sum != 0 || body[0] != PN532_TO_HOST || body[1] != response_code {
        return Err(TagReaderError::Protocol);
    }
    Ok(&body[2..])
}

/// `NbTg Tg SENS_RES(2) SEL_RES NFCIDLength NFCID..`
fn parse_passive_target(data: &[u8]) -> Result<Option<TagId>, TagReaderError> {
    match data.first() {
        None | Some(0) => return Ok(None),
        Some(_) => {}
    }
    let uid_len = usize::from(*data.get(5).ok_or(TagReaderError::Protocol)?);
    let uid = data.get(6..6 + uid_len).ok_or(TagReaderError::Protocol)?;
    Ok(Some(TagId::from_bytes(uid)))
}
