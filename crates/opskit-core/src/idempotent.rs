//! Idempotency marker capability

/// Capability for messages that carry an idempotency identifier
///
/// Consumers deduplicate on the identifier; two deliveries with the same id
/// must be processed at most once.
pub trait Idempotent {
    fn idempotency_id(&self) -> &str;
}
