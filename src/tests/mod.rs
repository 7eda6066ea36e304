//! Tests against a live cluster (`SOLANA_RPC_URL`, devnet by default)
