#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::net::Ipv4Addr;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use embassy_time::{Duration, Timer};
use embedded_hal_async::i2c::{ErrorKind, ErrorType, I2c, Operation};
use tapring::core::net::{Transport, TransportError};
use tapring::domain::dto::ServerDecision;
use tapring::domain::entity::{BatteryReading, TagId};
use tapring::domain::ports::{
    BatteryGauge, BatteryReporter, Beeper, ConnectivityProbe, Hotspot, NetworkError,
    SensorError, TagReader, TagReaderError, TapAuthorizer, VoltageSensor,
};
use tapring_light_composer::color::is_off;
use tapring_light_composer::{AnimationTimings, LedDriver, LedOwnership, Rgb};

pub const RING: usize = 24;

pub type Lights = LedOwnership<RecordingDriver, RING>;

/// Driver that keeps a copy of every presented frame
#[derive(Clone, Default)]
pub struct RecordingDriver {
    frames: Arc<Mutex<Vec<Vec<Rgb>>>>,
}

impl RecordingDriver {
    pub fn frames(&self) -> Vec<Vec<Rgb>> {
        self.frames.lock().unwrap().clone()
    }

    pub fn reset(&self) {
        self.frames.lock().unwrap().clear();
    }
}

impl LedDriver for RecordingDriver {
    fn write<const N: usize>(&mut self, colors: &[Rgb; N]) {
        self.frames.lock().unwrap().push(colors.to_vec());
    }
}

pub fn lights() -> (Lights, RecordingDriver) {
    let driver = RecordingDriver::default();
    (LedOwnership::new(driver.clone(), AnimationTimings::DEFAULT), driver)
}

pub fn is_dark(frame: &[Rgb]) -> bool {
    frame.iter().all(|pixel| is_off(*pixel))
}

/// Frames with at least one lit pixel
pub fn lit_frames(frames: &[Vec<Rgb>]) -> Vec<Vec<Rgb>> {
    frames.iter().filter(|frame| !is_dark(frame)).cloned().collect()
}

/// Distinct non-black colors across all frames, in order of appearance
pub fn colors_shown(frames: &[Vec<Rgb>]) -> Vec<Rgb> {
    let mut colors: Vec<Rgb> = Vec::new();
    for pixel in frames.iter().flatten() {
        if !is_off(*pixel) && !colors.contains(pixel) {
            colors.push(*pixel);
        }
    }
    colors
}

/// Authorization server with scripted answers
#[derive(Default)]
pub struct FakeServer {
    answers: RefCell<VecDeque<Result<ServerDecision, NetworkError>>>,
    pub cards: RefCell<Vec<String>>,
    pub reports: RefCell<Vec<u8>>,
    pub report_error: Cell<Option<NetworkError>>,
    /// Reports failing with `Unreachable` before the network is up
    pub report_failures: Cell<u8>,
}

impl FakeServer {
    pub fn answer(&self, answer: Result<ServerDecision, NetworkError>) {
        self.answers.borrow_mut().push_back(answer);
    }
}

impl TapAuthorizer for FakeServer {
    async fn authorize(&self, card: &TagId) -> Result<ServerDecision, NetworkError> {
        self.cards.borrow_mut().push(card.as_str().to_owned());
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(NetworkError::Unreachable))
    }
}

impl BatteryReporter for FakeServer {
    async fn report_battery(&self, percentage: u8) -> Result<(), NetworkError> {
        self.reports.borrow_mut().push(percentage);
        if self.report_failures.get() > 0 {
            self.report_failures.set(self.report_failures.get() - 1);
            return Err(NetworkError::Unreachable);
        }
        match self.report_error.get() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[derive(Default)]
pub struct FakeGauge {
    pub reading: Cell<Option<BatteryReading>>,
    pub reads: Cell<u32>,
}

impl FakeGauge {
    pub fn with_percentage(percentage: u8) -> Self {
        let gauge = Self::default();
        gauge.reading.set(Some(BatteryReading {
            volts: 3.9,
            percentage,
        }));
        gauge
    }
}

impl BatteryGauge for FakeGauge {
    async fn read_battery(&self) -> Option<BatteryReading> {
        self.reads.set(self.reads.get() + 1);
        self.reading.get()
    }
}

#[derive(Default)]
pub struct FakeProbe {
    pub online: Cell<bool>,
    pub probes: Cell<u32>,
}

impl ConnectivityProbe for FakeProbe {
    async fn is_online(&self) -> bool {
        self.probes.set(self.probes.get() + 1);
        self.online.get()
    }
}

pub struct FakeHotspot {
    pub works: Cell<bool>,
    pub starts: Cell<u32>,
    pub stops: Cell<u32>,
}

impl Default for FakeHotspot {
    fn default() -> Self {
        Self {
            works: Cell::new(true),
            starts: Cell::new(0),
            stops: Cell::new(0),
        }
    }
}

impl Hotspot for FakeHotspot {
    async fn start_hotspot(&self) -> bool {
        self.starts.set(self.starts.get() + 1);
        self.works.get()
    }

    async fn stop_hotspot(&self) -> bool {
        self.stops.set(self.stops.get() + 1);
        self.works.get()
    }
}

#[derive(Clone, Default)]
pub struct FakeBeeper {
    pub beeps: Rc<Cell<u32>>,
}

impl Beeper for FakeBeeper {
    async fn beep(&mut self) {
        self.beeps.set(self.beeps.get() + 1);
    }
}

/// Tag reader replaying a list of poll results, then reporting no tag
#[derive(Clone, Default)]
pub struct FakeReader {
    pub polls: Rc<RefCell<VecDeque<Result<Option<TagId>, TagReaderError>>>>,
    pub init_failures: Rc<Cell<u8>>,
    pub init_calls: Rc<Cell<u32>>,
}

impl FakeReader {
    pub fn tap(&self, uid: &[u8]) {
        self.polls
            .borrow_mut()
            .push_back(Ok(Some(TagId::from_bytes(uid))));
    }
}

impl TagReader for FakeReader {
    async fn init(&mut self) -> Result<(), TagReaderError> {
        self.init_calls.set(self.init_calls.get() + 1);
        if self.init_failures.get() > 0 {
            self.init_failures.set(self.init_failures.get() - 1);
            return Err(TagReaderError::HardwareFault);
        }
        Ok(())
    }

    async fn poll_once(&mut self, _timeout: Duration) -> Result<Option<TagId>, TagReaderError> {
        let next = self.polls.borrow_mut().pop_front();
        match next {
            Some(result) => result,
            None => {
                Timer::after(Duration::from_millis(1)).await;
                Ok(None)
            }
        }
    }
}

/// Voltage sensor with a settable reading
#[derive(Clone)]
pub struct FakeSensor {
    pub volts: Rc<Cell<f32>>,
    pub fail_reads: Rc<Cell<bool>>,
    pub probe_failures: Rc<Cell<u8>>,
    pub reads: Rc<Cell<u32>>,
}

impl FakeSensor {
    pub fn new(volts: f32) -> Self {
        Self {
            volts: Rc::new(Cell::new(volts)),
            fail_reads: Rc::new(Cell::new(false)),
            probe_failures: Rc::new(Cell::new(0)),
            reads: Rc::new(Cell::new(0)),
        }
    }
}

impl VoltageSensor for FakeSensor {
    async fn probe(&mut self) -> Result<(), SensorError> {
        if self.probe_failures.get() > 0 {
            self.probe_failures.set(self.probe_failures.get() - 1);
            return Err(SensorError::Unavailable);
        }
        Ok(())
    }

    async fn read_voltage(&mut self) -> Result<f32, SensorError> {
        self.reads.set(self.reads.get() + 1);
        if self.fail_reads.get() {
            return Err(SensorError::Bus);
        }
        Ok(self.volts.get())
    }
}

/// I2C bus that records writes and answers reads from a script
#[derive(Default)]
pub struct ScriptedI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    reads: VecDeque<Vec<u8>>,
    /// Answer for reads once the script is exhausted
    pub idle_read: Option<Vec<u8>>,
}

impl ScriptedI2c {
    pub fn respond(&mut self, bytes: &[u8]) {
        self.reads.push_back(bytes.to_vec());
    }
}

impl ErrorType for ScriptedI2c {
    type Error = ErrorKind;
}

impl I2c for ScriptedI2c {
    async fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for operation in operations {
            match operation {
                Operation::Write(bytes) => self.writes.push((address, bytes.to_vec())),
                Operation::Read(buf) => {
                    let reply = self
                        .reads
                        .pop_front()
                        .or_else(|| self.idle_read.clone())
                        .ok_or(ErrorKind::Other)?;
                    buf.fill(0);
                    let len = reply.len().min(buf.len());
                    buf[..len].copy_from_slice(&reply[..len]);
                }
            }
        }
        Ok(())
    }
}

/// Transport answering every exchange with the same canned bytes
#[derive(Default)]
pub struct FakeTransport {
    pub response: RefCell<Vec<u8>>,
    pub error: Cell<Option<TransportError>>,
    pub requests: RefCell<Vec<(String, u16, String)>>,
    pub reached: RefCell<Vec<(Ipv4Addr, u16)>>,
    /// Delay before answering
    pub latency: Cell<Duration>,
}

impl FakeTransport {
    pub fn replying(response: &str) -> Self {
        let transport = Self::default();
        *transport.response.borrow_mut() = response.as_bytes().to_vec();
        transport
    }

    pub fn last_request(&self) -> String {
        self.requests
            .borrow()
            .last()
            .map(|(_, _, request)| request.clone())
            .unwrap_or_default()
    }
}

impl Transport for FakeTransport {
    async fn exchange(
        &self,
        host: &str,
        port: u16,
        request: &[u8],
        response: &mut [u8],
    ) -> Result<usize, TransportError> {
        self.requests.borrow_mut().push((
            host.to_owned(),
            port,
            String::from_utf8_lossy(request).into_owned(),
        ));
        Timer::after(self.latency.get()).await;
        if let Some(e) = self.error.get() {
            return Err(e);
        }
        let reply = self.response.borrow();
        let len = reply.len().min(response.len());
        response[..len].copy_from_slice(&reply[..len]);
        Ok(len)
    }

    async fn reach(&self, address: Ipv4Addr, port: u16) -> Result<(), TransportError> {
        self.reached.borrow_mut().push((address, port));
        Timer::after(self.latency.get()).await;
        match self.error.get() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

pub fn http_ok(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\r\n{}",
        body.len(),
        body
    )
}
