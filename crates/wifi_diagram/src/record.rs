//! Network record parsing and validation
//!
//! Records arrive as text. Unparsable or missing numeric fields fall back
//! to defaults (signal 0, channel 0, bandwidth 20 MHz) unless strict
//! parsing is requested, so the geometry core only ever sees numbers.

use crate::error::{DiagramError, Result};
use crate::model::{NetworkRecord, RadioBand};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const DEFAULT_CHANNEL: i32 = 0;
const DEFAULT_SIGNAL_DBM: f64 = 0.0;

/// A record with its numeric fields still as text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawNetworkRecord {
    pub ssid: String,
    pub channel: String,
    pub signal: String,
    #[serde(default)]
    pub bandwidth: Option<String>,
}

impl RawNetworkRecord {
    pub fn new(
        ssid: impl Into<String>,
        channel: impl Into<String>,
        signal: impl Into<String>,
    ) -> Self {
        Self {
            ssid: ssid.into(),
            channel: channel.into(),
            signal: signal.into(),
            bandwidth: None,
        }
    }

    pub fn with_bandwidth(mut self, bandwidth: impl Into<String>) -> Self {
        self.bandwidth = Some(bandwidth.into());
        self
    }

    pub fn channel(&self) -> Option<i32> {
        parse_field(&self.channel)
    }

    pub fn signal_dbm(&self) -> Option<f64> {
        parse_field::<f64>(&self.signal).filter(|v| v.is_finite())
    }

    /// None when missing or unparsable
    pub fn bandwidth_mhz(&self) -> Option<f64> {
        self.bandwidth
            .as_deref()
            .and_then(parse_field::<f64>)
            .filter(|v| v.is_finite())
    }

    /// Convert, substituting defaults for fields that do not parse
    pub fn to_record(&self) -> NetworkRecord {
        let channel = self.channel().unwrap_or_else(|| {
            tracing::warn!(
                ssid = %self.ssid,
                value = %self.channel,
                "unparsable channel, using {}",
                DEFAULT_CHANNEL
            );
            DEFAULT_CHANNEL
        });
        let signal_dbm = self.signal_dbm().unwrap_or_else(|| {
            tracing::warn!(
                ssid = %self.ssid,
                value = %self.signal,
                "unparsable signal, using {}",
                DEFAULT_SIGNAL_DBM
            );
            DEFAULT_SIGNAL_DBM
        });
        let bandwidth_mhz = match (&self.bandwidth, self.bandwidth_mhz()) {
            (_, Some(bandwidth)) => bandwidth,
            (None, None) => NetworkRecord::DEFAULT_BANDWIDTH_MHZ,
            (Some(value), None) => {
                tracing::warn!(
                    ssid = %self.ssid,
                    value = %value,
                    "unparsable bandwidth, using {}",
                    NetworkRecord::DEFAULT_BANDWIDTH_MHZ
                );
                NetworkRecord::DEFAULT_BANDWIDTH_MHZ
            }
        };

        NetworkRecord::new(self.ssid.clone(), channel, signal_dbm, bandwidth_mhz)
    }

    /// Convert, failing on the first field that does not parse
    pub fn try_to_record(&self) -> std::result::Result<NetworkRecord, String> {
        let channel = self
            .channel()
            .ok_or_else(|| format!("invalid channel {:?}", self.channel))?;
        let signal_dbm = self
            .signal_dbm()
            .ok_or_else(|| format!("invalid signal {:?}", self.signal))?;
        let bandwidth_mhz = match &self.bandwidth {
            None => NetworkRecord::DEFAULT_BANDWIDTH_MHZ,
            Some(value) => self
                .bandwidth_mhz()
                .ok_or_else(|| format!("invalid bandwidth {:?}", value))?,
        };
        Ok(NetworkRecord::new(self.ssid.clone(), channel, signal_dbm, bandwidth_mhz))
    }
}

fn parse_field<T: FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

impl NetworkRecord {
    /// Check the channel against the band's valid channel set
    pub fn validate(&self, band: RadioBand) -> Result<()> {
        if band.is_valid_channel(self.channel) {
            Ok(())
        } else {
            Err(DiagramError::InvalidChannel {
                channel: self.channel,
                band,
            })
        }
    }
}

/// Split one `ssid,channel,signal[,bandwidth]` line into raw fields.
///
/// Missing trailing fields come back empty.
fn split_line(line: &str) -> RawNetworkRecord {
    let mut fields = line.split(',').map(str::trim);
    let ssid = fields.next().unwrap_or_default();
    let channel = fields.next().unwrap_or_default();
    let signal = fields.next().unwrap_or_default();
    let bandwidth = fields.next().filter(|f| !f.is_empty());

    RawNetworkRecord {
        ssid: ssid.to_string(),
        channel: channel.to_string(),
        signal: signal.to_string(),
        bandwidth: bandwidth.map(str::to_string),
    }
}

/// `#` followed by whitespace or nothing; `#office` is an SSID
fn is_comment(line: &str) -> bool {
    line.strip_prefix('#')
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(char::is_whitespace))
}

fn record_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !is_comment(line))
}

/// Parse records one per line, substituting defaults for bad fields.
///
/// Blank lines and `# ` comment lines are skipped.
pub fn parse_records(text: &str) -> Vec<NetworkRecord> {
    record_lines(text)
        .map(|(_, line)| split_line(line).to_record())
        .collect()
}

/// Parse records one per line, failing on the first bad field
pub fn parse_records_strict(text: &str) -> Result<Vec<NetworkRecord>> {
    record_lines(text)
        .map(|(line_number, line)| {
            split_line(line)
                .try_to_record()
                .map_err(|reason| DiagramError::RecordParse {
                    line: line_number,
                    reason,
                })
        })
        .collect()
}

/// Keep records whose channel is valid for `band`, logging the rest
pub fn retain_valid(records: Vec<NetworkRecord>, band: RadioBand) -> Vec<NetworkRecord> {
    records
        .into_iter()
        .filter(|record| match record.validate(band) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(ssid = %record.ssid, "dropping record: {}", e);
                false
            }
        })
        .collect()
}
