pub mod attestation;
pub mod attestation_data;
pub mod checkpoint;
pub mod primitives;
pub mod signature;
