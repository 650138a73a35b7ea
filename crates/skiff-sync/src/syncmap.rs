//! The sync map: which local source files feed which container paths.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// One resolved source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncEntry {
    /// Destination paths inside the container, in wire order. Opaque
    /// strings; validating them belongs to the sync engine that consumes
    /// the map.
    pub dest: Vec<String>,
    /// Source modification time captured at extraction. Later changes to
    /// the file are not reflected; the copy step owns that window.
    pub file_time: SystemTime,
    /// Verbatim copy (`direct`) vs build-produced artifact whose staleness
    /// still tracks the original source (`generated`).
    pub is_direct: bool,
}

/// Mapping from local source path to [`SyncEntry`].
///
/// Built fresh on every extraction and owned by the caller once returned;
/// there is no incremental-update protocol.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncMap {
    entries: BTreeMap<String, SyncEntry>,
}

/// Wire shape of the payload line as Jib emits it. Not retained past
/// decoding.
#[derive(Debug, Deserialize)]
struct WirePayload {
    direct: Vec<WireEntry>,
    generated: Vec<WireEntry>,
}

#[derive(Debug, Deserialize)]
struct WireEntry {
    src: String,
    dest: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SyncMapError {
    #[error("malformed sync-map payload")]
    MalformedPayload { source: serde_json::Error },

    #[error("could not obtain file modification time for {path}")]
    FileStat {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl SyncMap {
    /// Decodes a normalized payload line and resolves every entry against
    /// the local filesystem.
    ///
    /// Direct entries are processed before generated ones, and a later
    /// `src` overwrites an earlier one, so a source present in both
    /// collections comes out flagged as generated.
    ///
    /// # Errors
    ///
    /// - [`SyncMapError::MalformedPayload`] if the payload is not the
    ///   expected JSON object; no partial map is returned.
    /// - [`SyncMapError::FileStat`] as soon as one `src` cannot be
    ///   stat'ed, naming that path; entries after it are not processed.
    pub fn from_payload(payload: &[u8]) -> Result<Self, SyncMapError> {
        let wire: WirePayload = serde_json::from_slice(payload)
            .map_err(|e| SyncMapError::MalformedPayload { source: e })?;

        let mut map = Self::default();
        map.add_entries(wire.direct, true)?;
        map.add_entries(wire.generated, false)?;
        Ok(map)
    }

    fn add_entries(&mut self, entries: Vec<WireEntry>, direct: bool) -> Result<(), SyncMapError> {
        for entry in entries {
            let file_time = mod_time(&entry.src)?;
            self.entries.insert(
                entry.src,
                SyncEntry {
                    dest: vec![entry.dest],
                    file_time,
                    is_direct: direct,
                },
            );
        }
        Ok(())
    }

    pub fn get(&self, src: &str) -> Option<&SyncEntry> {
        self.entries.get(src)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &SyncEntry)> {
        self.entries.iter()
    }
}

fn mod_time(src: &str) -> Result<SystemTime, SyncMapError> {
    fs::metadata(src)
        .and_then(|meta| meta.modified())
        .map_err(|e| SyncMapError::FileStat {
            path: PathBuf::from(src),
            source: e,
        })
}
