pub type CommitteeIndex = u64; // committee index at a slot
pub type Epoch = u64; // epoch number
pub type Slot = u64; // slot number
