use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::RpcError;
use crate::rpc::{CommitmentLevel, Confirmation, RpcClient};
use crate::sdk_adapter::{Hash, Message, Pubkey, Signature, Transaction};
use crate::wallet::{MemorySigner, SolanaSigner};
use crate::workflow::build_transfer_instruction;

pub const TEST_KEYPAIR_BYTES: &str = "[41,99,180,88,51,57,48,80,61,63,219,75,176,49,116,254,227,176,196,204,122,47,166,133,155,252,217,0,253,17,49,143,47,94,121,167,195,136,72,22,157,48,77,88,63,96,57,122,181,243,236,188,241,134,174,224,100,246,17,170,104,17,151,48]";
pub const TEST_KEYPAIR_BASE58: &str =
    "pzjkwgQ5shhq3Awijz6CjDjZrXPX7YKKgkTipBK7JAq8XW5GbDynBFChESMBrz4SvFiZ8qJAtUB6sL3PpVCnbR1";
pub const TEST_PUBKEY: &str = "4BuiY9QUUfPoAGNJBja3JapAuVWMc9c7in6UCgyC2zPR";
pub const TEST_RECIPIENT: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

pub fn test_signer() -> MemorySigner {
    MemorySigner::from_private_key_string(TEST_KEYPAIR_BYTES).expect("test keypair")
}

pub fn mock_signature() -> Signature {
    Signature::from([42u8; 64])
}

pub fn create_test_transaction(payer: &Pubkey) -> Transaction {
    let to = Pubkey::new_unique();
    let instruction = build_transfer_instruction(payer, &to, 1_000_000);
    let message = Message::new(&[instruction], Some(payer));
    let mut tx = Transaction::new_unsigned(message);
    tx.message.recent_blockhash = Hash::default();
    tx
}

/// Scripted reply for one mock RPC method
#[derive(Clone)]
pub enum Reply<T> {
    Ok(T),
    Fail(String),
}

impl<T: Clone> Reply<T> {
    fn get(&self) -> Result<T, RpcError> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Fail(message) => Err(RpcError::Http(message.clone())),
        }
    }
}

/// In-process [`RpcClient`] that records every call
pub struct MockRpc {
    pub balance: Reply<u64>,
    pub airdrop: Reply<Signature>,
    pub confirmation: Reply<Confirmation>,
    pub send: Reply<Signature>,
    calls: AtomicUsize,
    pub balance_commitments: Mutex<Vec<CommitmentLevel>>,
    pub airdrops: Mutex<Vec<(Pubkey, u64)>>,
    pub sent: Mutex<Vec<Transaction>>,
}

impl Default for MockRpc {
    fn default() -> Self {
        Self {
            balance: Reply::Ok(0),
            airdrop: Reply::Ok(mock_signature()),
            confirmation: Reply::Ok(Confirmation::succeeded()),
            send: Reply::Ok(mock_signature()),
            calls: AtomicUsize::new(0),
            balance_commitments: Mutex::new(Vec::new()),
            airdrops: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }
}

impl MockRpc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, reply: Reply<u64>) -> Self {
        self.balance = reply;
        self
    }

    pub fn with_airdrop(mut self, reply: Reply<Signature>) -> Self {
        self.airdrop = reply;
        self
    }

    pub fn with_confirmation(mut self, reply: Reply<Confirmation>) -> Self {
        self.confirmation = reply;
        self
    }

    pub fn with_send(mut self, reply: Reply<Signature>) -> Self {
        self.send = reply;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl RpcClient for MockRpc {
    async fn get_balance(
        &self,
        _address: &Pubkey,
        commitment: CommitmentLevel,
    ) -> Result<u64, RpcError> {
        self.record();
        self.balance_commitments.lock().unwrap().push(commitment);
        self.balance.get()
    }

    async fn request_airdrop(
        &self,
        address: &Pubkey,
        lamports: u64,
    ) -> Result<Signature, RpcError> {
        self.record();
        self.airdrops.lock().unwrap().push((*address, lamports));
        self.airdrop.get()
    }

    async fn confirm_transaction(&self, _signature: &Signature) -> Result<Confirmation, RpcError> {
        self.record();
        self.confirmation.get()
    }

    async fn send_transaction(
        &self,
        mut transaction: Transaction,
        signer: &dyn SolanaSigner,
    ) -> Result<Signature, RpcError> {
        self.record();
        signer.sign_transaction(&mut transaction).await?;
        self.sent.lock().unwrap().push(transaction);
        self.send.get()
    }
}
