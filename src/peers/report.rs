//! Per-peer results and the aggregated network report.

use super::PeerError;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Keys owned by the status entry itself; peer payload fields never override them.
const RESERVED_KEYS: [&str; 4] = ["peerName", "status", "remoteStatus", "error"];

/// Reachability of a peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PeerState {
    Online,
    Offline,
}

/// Outcome of polling one peer.
///
/// Serializes flat: `peerName`, `status`, the peer's own `status` as
/// `remoteStatus`, the remaining payload fields, then `error` when offline.
#[derive(Debug, Clone, PartialEq)]
pub struct PeerStatus {
    pub peer_name: String,
    pub state: PeerState,
    pub remote_status: Option<Value>,
    pub payload: Map<String, Value>,
    pub error: Option<String>,
}

impl PeerStatus {
    /// Online entry with the peer's payload merged in.
    pub fn online(peer_name: impl Into<String>, mut payload: Map<String, Value>) -> Self {
        let remote_status = payload.remove("status");
        payload.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));

        Self {
            peer_name: peer_name.into(),
            state: PeerState::Online,
            remote_status,
            payload,
            error: None,
        }
    }

    pub fn offline(peer_name: impl Into<String>, error: &PeerError) -> Self {
        Self {
            peer_name: peer_name.into(),
            state: PeerState::Offline,
            remote_status: None,
            payload: Map::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn is_online(&self) -> bool {
        self.state == PeerState::Online
    }

    /// Look up a merged payload field, e.g. `version`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.payload.get(key)
    }
}

impl Serialize for PeerStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("peerName", &self.peer_name)?;
        map.serialize_entry("status", &self.state)?;
        if let Some(remote) = &self.remote_status {
            map.serialize_entry("remoteStatus", remote)?;
        }
        for (key, value) in &self.payload {
            map.serialize_entry(key, value)?;
        }
        if let Some(error) = &self.error {
            map.serialize_entry("error", error)?;
        }
        map.end()
    }
}

/// One entry per configured peer, in configured order.
///
/// Serializes as a JSON object keyed by peer name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NetworkStatusReport {
    peers: Vec<PeerStatus>,
}

impl NetworkStatusReport {
    pub fn new(peers: Vec<PeerStatus>) -> Self {
        Self { peers }
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PeerStatus> {
        self.peers.iter()
    }

    pub fn online_count(&self) -> usize {
        self.peers.iter().filter(|p| p.is_online()).count()
    }
}

impl Serialize for NetworkStatusReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.peers.len()))?;
        for peer in &self.peers {
            map.serialize_entry(&peer.peer_name, peer)?;
        }
        map.end()
    }
}
