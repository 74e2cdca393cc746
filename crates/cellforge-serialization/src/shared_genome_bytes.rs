// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

use crate::codec::{decode, encode};
use crate::error::DecodeResult;
use cellforge_genome::GenomeDescription;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use std::sync::Arc;
use tracing::debug;

/// Copy-on-write hand-off of encoded genome bytes between an editor and its readers.
///
/// Readers take a [`snapshot`](Self::snapshot) and keep using it for as long as they like.
/// Writers never touch a published buffer; they build a new one and swap it in, so a reader
/// never observes a partially written genome.
#[derive(Debug, Default)]
pub struct SharedGenomeBytes {
    current: RwLock<Arc<Vec<u8>>>,
}

impl SharedGenomeBytes {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            current: RwLock::new(Arc::new(bytes)),
        }
    }

    pub fn from_description(genome: &GenomeDescription) -> Self {
        Self::new(encode(genome))
    }

    /// The buffer published most recently.
    pub fn snapshot(&self) -> Arc<Vec<u8>> {
        self.current.read().clone()
    }

    /// Publishes `bytes` as-is and returns the buffer it replaced.
    pub fn replace(&self, bytes: Vec<u8>) -> Arc<Vec<u8>> {
        std::mem::replace(&mut *self.current.write(), Arc::new(bytes))
    }

    /// Decodes the current buffer, applies `edit`, normalizes, re-encodes and publishes the
    /// result, which is also returned.
    ///
    /// Concurrent edits are serialized; readers are only blocked for the final swap. If the
    /// current buffer does not decode, nothing is published and the error is returned.
    pub fn edit<F>(&self, edit: F) -> DecodeResult<Arc<Vec<u8>>>
    where
        F: FnOnce(&mut GenomeDescription),
    {
        let guard = self.current.upgradable_read();
        let mut genome = decode(&guard)?;
        edit(&mut genome);
        genome.normalize();
        let updated = Arc::new(encode(&genome));

        let mut guard = RwLockUpgradableReadGuard::upgrade(guard);
        debug!(
            old_bytes = guard.len(),
            new_bytes = updated.len(),
            nodes = genome.num_nodes(),
            "Published edited genome"
        );
        *guard = Arc::clone(&updated);
        Ok(updated)
    }
}
