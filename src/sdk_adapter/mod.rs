//! SDK adapter layer for supporting multiple Solana SDK versions
//!
//! Everything else in the crate imports Solana types from here, so switching
//! between SDK v2 and v3 is a feature flag rather than a code change.

#[cfg(feature = "sdk-v2")]
mod v2;
#[cfg(feature = "sdk-v3")]
mod v3;

// Re-export the appropriate version based on feature flags
#[cfg(feature = "sdk-v2")]
pub use v2::*;

#[cfg(feature = "sdk-v3")]
pub use v3::*;

/// The System Program address (32 zero bytes).
pub fn system_program_id() -> Pubkey {
    Pubkey::new_from_array([0u8; 32])
}

// Compile-time check to ensure exactly one SDK version is enabled
#[cfg(all(feature = "sdk-v2", feature = "sdk-v3"))]
compile_error!("Cannot enable both sdk-v2 and sdk-v3 features. Choose one.");

#[cfg(not(any(feature = "sdk-v2", feature = "sdk-v3")))]
compile_error!("Must enable either sdk-v2 or sdk-v3 feature.");
