use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::constants::defaults;

#[derive(Error, Debug)]
pub enum PushError {
    #[error("TLS setup failed: {0}")]
    Tls(#[from] native_tls::Error),
    #[error("push to influxdb failed: {status} - {body}")]
    Rejected { status: u16, body: String },
    #[error("write to influxdb at {host} timed out; is influxdb running?")]
    Timeout { host: String },
    #[error("connection to influxdb at {host} was refused; is influxdb running?")]
    ConnectionRefused { host: String },
    #[error("transport error pushing to influxdb: {0}")]
    Transport(String),
}

/// Accumulates rendered line-protocol points and flushes them to the
/// InfluxDB v1 write endpoint in bounded batches.
///
/// Certificate verification is disabled: the expected destinations are
/// self-hosted instances on private networks, often with self-signed
/// certificates.
pub struct InfluxSink {
    agent: ureq::Agent,
    write_url: String,
    host: String,
    buffer: String,
    buffered_lines: usize,
}

impl InfluxSink {
    pub fn new(host: &str, database: &str) -> Result<Self, PushError> {
        Self::with_timeout(host, database, defaults::WRITE_TIMEOUT)
    }

    pub fn with_timeout(
        host: &str,
        database: &str,
        timeout: Duration,
    ) -> Result<Self, PushError> {
        let tls = native_tls::TlsConnector::builder()
            .danger_accept_invalid_certs(true)
            .build()?;
        let agent = ureq::AgentBuilder::new()
            .tls_connector(Arc::new(tls))
            .timeout(timeout)
            .build();

        Ok(InfluxSink {
            agent,
            write_url: format!("{host}/write?db={database}&precision=s"),
            host: host.to_string(),
            buffer: String::new(),
            buffered_lines: 0,
        })
    }

    /// Buffer one rendered line (already newline-terminated).
    pub fn append(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffered_lines += 1;
    }

    pub fn buffered_lines(&self) -> usize {
        self.buffered_lines
    }

    /// POST the buffered points and clear the buffer. A no-op on an empty
    /// buffer. Success is exactly HTTP 204; anything else is fatal.
    pub fn flush(&mut self) -> Result<usize, PushError> {
        if self.buffer.is_empty() {
            return Ok(0);
        }

        let result = self.agent.post(&self.write_url).send_string(&self.buffer);
        match result {
            Ok(resp) if resp.status() == 204 => {
                let flushed = self.buffered_lines;
                self.buffer.clear();
                self.buffered_lines = 0;
                Ok(flushed)
            }
            Ok(resp) => Err(PushError::Rejected {
                status: resp.status(),
                body: resp.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Status(status, resp)) => Err(PushError::Rejected {
                status,
                body: resp.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(transport)) => Err(self.classify_transport(transport)),
        }
    }

    fn classify_transport(&self, transport: ureq::Transport) -> PushError {
        match transport.kind() {
            ureq::ErrorKind::ConnectionFailed => PushError::ConnectionRefused {
                host: self.host.clone(),
            },
            ureq::ErrorKind::Io => PushError::Timeout {
                host: self.host.clone(),
            },
            _ => PushError::Transport(transport.to_string()),
        }
    }
}
