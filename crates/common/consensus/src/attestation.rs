use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{typenum, BitList};
use tree_hash_derive::TreeHash;

use crate::{attestation_data::AttestationData, signature::BlsSignature};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct Attestation {
    pub aggregation_bits: BitList<typenum::U2048>,
    pub data: AttestationData,
    pub signature: BlsSignature,
}

impl Attestation {
    /// Builds an attestation with no aggregation bits set and a blank
    /// signature. The signature must be replaced before the attestation is
    /// broadcast.
    pub fn unsigned(
        data: AttestationData,
        committee_size: usize,
    ) -> Result<Self, ssz_types::Error> {
        Ok(Self {
            aggregation_bits: BitList::with_capacity(committee_size)?,
            data,
            signature: BlsSignature::empty(),
        })
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::B256;
    use serde_json::json;

    use super::*;
    use crate::checkpoint::Checkpoint;

    fn attestation_data(slot: u64, index: u64) -> AttestationData {
        AttestationData {
            slot,
            index,
            beacon_block_root: B256::ZERO,
            source: Checkpoint {
                epoch: 2,
                root: B256::ZERO,
            },
            target: Checkpoint {
                epoch: 3,
                root: B256::ZERO,
            },
        }
    }

    #[test]
    fn test_unsigned_attestation_is_blank() {
        let attestation = Attestation::unsigned(attestation_data(100, 0), 128).unwrap();

        assert!(attestation.aggregation_bits.is_zero());
        assert!(attestation.signature.is_empty());
    }

    #[test]
    fn test_unsigned_attestation_json_shape() {
        let attestation = Attestation::unsigned(attestation_data(100, 4), 8).unwrap();
        let value = serde_json::to_value(&attestation).unwrap();

        assert_eq!(value["data"]["slot"], json!("100"));
        assert_eq!(value["data"]["index"], json!("4"));
        assert_eq!(value["data"]["source"]["epoch"], json!("2"));
        assert_eq!(value["signature"], json!(format!("0x{}", "00".repeat(96))));
    }
}
