//! Error taxonomy. Nearly everything in this pipeline degrades in place:
//! a failed provider becomes an empty section, a malformed artifact becomes
//! a neutral analyzer report, an inapplicable rewrite is a no-op. The only
//! error callers ever see is `InsufficientContext`.

/// Result alias used across the atelier crates.
pub type AtelierResult<T> = Result<T, AtelierError>;

/// Pipeline errors.
#[derive(Debug, thiserror::Error)]
pub enum AtelierError {
    /// A single external provider call failed. Recovered locally by the
    /// context synthesizer, which substitutes an empty section; never
    /// propagated on its own.
    #[error("provider unavailable: {provider}: {reason}")]
    ProviderUnavailable { provider: String, reason: String },

    /// Every provider failed and the request carries no fallback. Callers
    /// should proceed with reduced-context generation or retry.
    #[error("insufficient context: all providers failed")]
    InsufficientContext,
}
