//! Line protocol spoken with the task-tracking board.
//!
//! device → host: `TASK_COMPLETED`
//! host → device: `NOTIFICATION`
//!
//! Ports are opened 8N1 at `device.baud`. A regular file given as the port
//! is read or appended to as-is, which is how captured sessions are replayed.

use crate::config::DeviceConfig;
use crate::errors::{AppError, AppResult};
use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, Read, Write};
use std::time::Duration;

pub const TASK_COMPLETED: &str = "TASK_COMPLETED";
pub const NOTIFICATION: &str = "NOTIFICATION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    TaskCompleted,
    Unknown(String),
}

/// Decode one received line. Blank lines give `None`; `\r\n` is accepted.
pub fn parse_line(line: &str) -> Option<DeviceEvent> {
    let token = line.trim_end_matches(['\r', '\n']).trim();
    if token.is_empty() {
        return None;
    }
    if token == TASK_COMPLETED {
        Some(DeviceEvent::TaskCompleted)
    } else {
        Some(DeviceEvent::Unknown(token.to_string()))
    }
}

/// Write one `NOTIFICATION` line.
pub fn notify<W: Write>(out: &mut W) -> AppResult<()> {
    out.write_all(NOTIFICATION.as_bytes())
        .and_then(|_| out.write_all(b"\n"))
        .and_then(|_| out.flush())
        .map_err(|e| AppError::Device(format!("write failed: {e}")))
}

/// Read lines until `TASK_COMPLETED` or end of input.
///
/// Unknown lines are passed to `on_unknown` and otherwise ignored. Returns
/// whether the completion token was seen.
pub fn wait_for_completion<R, F>(reader: R, mut on_unknown: F) -> AppResult<bool>
where
    R: BufRead,
    F: FnMut(&str),
{
    for line in reader.lines() {
        let line = line.map_err(|e| AppError::Device(format!("read failed: {e}")))?;
        match parse_line(&line) {
            Some(DeviceEvent::TaskCompleted) => return Ok(true),
            Some(DeviceEvent::Unknown(other)) => on_unknown(&other),
            None => {}
        }
    }
    Ok(false)
}

/// `--port` wins over `device.port`.
pub fn resolve_port(cli_port: Option<&str>, cfg: &DeviceConfig) -> AppResult<String> {
    cli_port
        .or(cfg.port.as_deref())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Device("no device port: use --port or set device.port".into()))
}

/// Poll interval of a blocking read on the serial line.
const READ_POLL: Duration = Duration::from_millis(500);

/// Line settings used to open a serial port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSettings {
    pub baud: u32,
    pub timeout: Duration,
}

impl LineSettings {
    pub fn from_config(cfg: &DeviceConfig) -> AppResult<Self> {
        if cfg.baud == 0 {
            return Err(AppError::Device("device.baud must be greater than 0".into()));
        }
        Ok(Self {
            baud: cfg.baud,
            timeout: READ_POLL,
        })
    }
}

/// Open the port for reading. Serial read timeouts are retried, so the
/// reader only ends at EOF or on a real error.
pub fn open_for_reading(port: &str, line: LineSettings) -> AppResult<Box<dyn Read + Send>> {
    if is_capture_file(port) {
        let f = File::open(port).map_err(|e| AppError::Device(format!("cannot open {port}: {e}")))?;
        return Ok(Box::new(f));
    }
    Ok(Box::new(Patient(open_serial(port, line)?)))
}

pub fn open_for_writing(port: &str, line: LineSettings) -> AppResult<Box<dyn Write + Send>> {
    if is_capture_file(port) {
        let f = OpenOptions::new()
            .append(true)
            .open(port)
            .map_err(|e| AppError::Device(format!("cannot open {port}: {e}")))?;
        return Ok(Box::new(f));
    }
    Ok(Box::new(open_serial(port, line)?))
}

fn is_capture_file(port: &str) -> bool {
    fs::metadata(port).map(|m| m.is_file()).unwrap_or(false)
}

fn open_serial(port: &str, line: LineSettings) -> AppResult<Box<dyn SerialPort>> {
    serialport::new(port, line.baud)
        .data_bits(DataBits::Eight)
        .parity(Parity::None)
        .stop_bits(StopBits::One)
        .flow_control(FlowControl::None)
        .timeout(line.timeout)
        .open()
        .map_err(|e| AppError::Device(format!("cannot open {port} at {} baud: {e}", line.baud)))
}

/// Turns read timeouts into another wait.
struct Patient<R>(R);

impl<R: Read> Read for Patient<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.0.read(buf) {
                Err(e) if e.kind() == io::ErrorKind::TimedOut => continue,
                other => return other,
            }
        }
    }
}

/// Send a `NOTIFICATION` to the configured device, if any.
///
/// Returns `Ok(false)` when no port is configured.
pub fn notify_configured(cfg: &DeviceConfig) -> AppResult<bool> {
    let Some(port) = cfg.port.as_deref().filter(|p| !p.trim().is_empty()) else {
        return Ok(false);
    };
    let mut out = open_for_writing(port, LineSettings::from_config(cfg)?)?;
    notify(&mut out)?;
    Ok(true)
}
