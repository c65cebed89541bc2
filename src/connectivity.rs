//! Connectivity probe behind the status light.
//!
//! Desktop stand-in for the browser's online/offline events: a periodic TCP
//! dial against a public resolver. An unreachable probe is the OFFLINE
//! state, not an error; nothing is reported beyond the indicator.

use std::time::Duration;

use termfolio_ui::LinkState;

/// Well-connected public resolver; any TCP answer counts as reachable.
const PROBE_ADDR: &str = "1.1.1.1:53";

const PROBE_TIMEOUT: Duration = Duration::from_secs(2);

/// Map a probe outcome onto the indicator state.
pub fn classify(reachable: bool) -> LinkState {
    if reachable {
        LinkState::Online
    } else {
        LinkState::Offline
    }
}

/// Dial the probe target once, bounded by [`PROBE_TIMEOUT`].
pub async fn probe_once() -> LinkState {
    let attempt = tokio::time::timeout(PROBE_TIMEOUT, tokio::net::TcpStream::connect(PROBE_ADDR)).await;
    classify(matches!(attempt, Ok(Ok(_))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_probe_reads_online() {
        assert_eq!(classify(true), LinkState::Online);
        assert_eq!(classify(true).label(), "ONLINE");
    }

    #[test]
    fn unreachable_probe_reads_offline() {
        assert_eq!(classify(false), LinkState::Offline);
        assert_eq!(classify(false).label(), "OFFLINE");
    }
}
