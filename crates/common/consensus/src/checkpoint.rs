use alloy_primitives::B256;
use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

use crate::primitives::Epoch;

#[derive(
    Debug, Eq, Hash, PartialEq, Clone, Copy, Serialize, Deserialize, Encode, Decode, TreeHash,
)]
pub struct Checkpoint {
    #[serde(with = "serde_utils::quoted_u64")]
    pub epoch: Epoch,
    pub root: B256,
}
