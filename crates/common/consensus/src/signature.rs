use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use ssz_types::{typenum, FixedVector};
use tree_hash_derive::TreeHash;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize, Encode, Decode, TreeHash)]
pub struct BlsSignature {
    #[serde(with = "ssz_types::serde_utils::hex_fixed_vec")]
    pub signature: FixedVector<u8, typenum::U96>,
}

impl BlsSignature {
    /// The all-zero placeholder used where a real signature has not been
    /// produced yet
    pub fn empty() -> Self {
        Self {
            signature: FixedVector::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.signature.iter().all(|byte| *byte == 0)
    }
}
