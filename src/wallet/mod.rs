//! Wallet connection state consumed by the workflows
//!
//! The wallet provider owns connect/disconnect and key custody. Workflows only
//! read a [`WalletConnection`]: an optional address plus an optional signing
//! capability.

pub mod memory;
pub mod traits;

use std::sync::Arc;

use crate::sdk_adapter::Pubkey;

pub use memory::MemorySigner;
pub use traits::{SignedTransaction, SolanaSigner};

/// Read-only view of the external wallet's connection state
#[derive(Clone, Default)]
pub struct WalletConnection {
    address: Option<Pubkey>,
    signer: Option<Arc<dyn SolanaSigner>>,
}

impl std::fmt::Debug for WalletConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletConnection")
            .field("address", &self.address)
            .field("can_sign", &self.signer.is_some())
            .finish()
    }
}

impl WalletConnection {
    /// No wallet connected
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// A wallet that can sign; its address is the signer's public key
    pub fn connected(signer: Arc<dyn SolanaSigner>) -> Self {
        Self {
            address: Some(signer.pubkey()),
            signer: Some(signer),
        }
    }

    /// A known address without signing capability
    pub fn watch_only(address: Pubkey) -> Self {
        Self {
            address: Some(address),
            signer: None,
        }
    }

    pub fn address(&self) -> Option<Pubkey> {
        self.address
    }

    pub fn signer(&self) -> Option<&dyn SolanaSigner> {
        self.signer.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }
}
