//! SSH port value object

/// Port used when the config has no usable `ssh-port`
pub const DEFAULT_SSH_PORT: u16 = 22;

/// Where the effective SSH port came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortSource {
    /// Taken from `ssh-port` in the config file
    Configured,
    /// `ssh-port` was absent or not a valid port number
    Defaulted,
}

/// Resolve the effective port from the raw `ssh-port` value.
///
/// Only whole JSON numbers in `1..=65535` are accepted (`2222` and `2222.0`
/// alike); anything else (fractions, numeric strings) falls back to
/// [`DEFAULT_SSH_PORT`].
pub fn resolve_port(raw: Option<&serde_json::Value>) -> (u16, PortSource) {
    raw.and_then(whole_number)
        .and_then(|n| u16::try_from(n).ok())
        .filter(|&port| port != 0)
        .map(|port| (port, PortSource::Configured))
        .unwrap_or((DEFAULT_SSH_PORT, PortSource::Defaulted))
}

fn whole_number(value: &serde_json::Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && (1.0..=65535.0).contains(f))
            .map(|f| f as u64)
    })
}
