use async_trait::async_trait;
use tracing::debug;
use wren_consensus::{
    attestation::Attestation,
    primitives::{CommitteeIndex, Slot},
};

use crate::error::ProviderError;

/// Owner of attestation construction.
///
/// Implementations are shared immutably across concurrent requests and must
/// not block the calling task.
#[async_trait]
pub trait AttestationProvider: Send + Sync {
    /// Builds an unsigned attestation for the given slot and committee, or
    /// `None` when no attestation can be constructed for the slot. Absence
    /// is not an error.
    async fn create_unsigned_attestation(
        &self,
        slot: Slot,
        committee_index: CommitteeIndex,
    ) -> Result<Option<Attestation>, ProviderError>;
}

/// Provider for a node without a usable beacon state: every lookup reports
/// absence.
pub struct UnavailableStateProvider;

#[async_trait]
impl AttestationProvider for UnavailableStateProvider {
    async fn create_unsigned_attestation(
        &self,
        slot: Slot,
        committee_index: CommitteeIndex,
    ) -> Result<Option<Attestation>, ProviderError> {
        debug!(slot, committee_index, "no beacon state to attest from");
        Ok(None)
    }
}
