//! Data models representing database entities and request payloads.

/// Credit record entity and response types
pub mod credito;
/// Raw JSON / form payload decoding
pub mod payload;
