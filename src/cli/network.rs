//! Network command implementation

use crate::cli::output::format_network_table;
use crate::cli::NetworkArgs;
use crate::config::PeerwatchConfig;
use crate::peers::PeerPoller;

/// Handle `peerwatch network`: poll every configured peer once.
pub async fn handle_network(
    args: &NetworkArgs,
    config: &PeerwatchConfig,
) -> Result<String, Box<dyn std::error::Error>> {
    let poller = PeerPoller::new(config.peers.clone(), config.poller.clone())?;
    let report = poller.poll_all().await;

    if args.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(format_network_table(&report))
    }
}
