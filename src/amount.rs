//! SOL / lamport conversion
//!
//! Amounts cross the API boundary as SOL and are converted to whole lamports
//! before reaching the network. A lamport is indivisible: inputs that resolve
//! to a fraction of one are rejected rather than rounded away silently.

use crate::error::ClientError;

/// Number of lamports in one SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Decimal places of one SOL expressed in lamports
pub const SOL_DECIMALS: u32 = 9;

fn invalid(reason: impl Into<String>) -> ClientError {
    ClientError::InvalidInput(reason.into())
}

/// Convert a SOL quantity to lamports, rounding to the nearest lamport.
///
/// Fails for non-finite or negative input, for amounts smaller than half a
/// lamport, and for amounts that do not fit in a `u64`.
pub fn sol_to_lamports(sol: f64) -> Result<u64, ClientError> {
    if !sol.is_finite() || sol < 0.0 {
        return Err(invalid("invalid amount"));
    }

    let lamports = (sol * LAMPORTS_PER_SOL as f64).round();
    if lamports < 1.0 {
        return Err(invalid("amount is smaller than 1 lamport"));
    }
    if lamports >= u64::MAX as f64 {
        return Err(invalid("amount is too large"));
    }

    Ok(lamports as u64)
}

/// Convert lamports to SOL for display
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Parse a user-entered decimal SOL string into lamports using integer
/// arithmetic only.
///
/// Accepts `"1"`, `"0.5"`, `".25"`, `"2."`; rejects signs, exponents, and
/// more than nine fractional digits.
pub fn parse_sol(input: &str) -> Result<u64, ClientError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(invalid("amount is required"));
    }

    let (whole, frac) = match trimmed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (trimmed, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return Err(invalid(format!("invalid amount: {trimmed}")));
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(format!("invalid amount: {trimmed}")));
    }
    if frac.len() > SOL_DECIMALS as usize {
        return Err(invalid(
            "amount has more than 9 decimal places (fractional lamports)",
        ));
    }

    let whole_lamports = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<u64>()
            .ok()
            .and_then(|w| w.checked_mul(LAMPORTS_PER_SOL))
            .ok_or_else(|| invalid("amount is too large"))?
    };

    let frac_lamports = if frac.is_empty() {
        0
    } else {
        let padded = format!("{frac:0<width$}", width = SOL_DECIMALS as usize);
        padded
            .parse::<u64>()
            .map_err(|e| invalid(format!("invalid amount: {e}")))?
    };

    whole_lamports
        .checked_add(frac_lamports)
        .ok_or_else(|| invalid("amount is too large"))
}

/// Render lamports as SOL with a fixed number of decimals, rounding half up.
pub fn format_sol(lamports: u64, decimals: u32) -> String {
    let per_sol = LAMPORTS_PER_SOL as u128;
    let lamports = lamports as u128;

    if decimals >= SOL_DECIMALS {
        let whole = lamports / per_sol;
        let frac = lamports % per_sol;
        let pad = (decimals - SOL_DECIMALS) as usize;
        return format!("{whole}.{frac:09}{}", "0".repeat(pad));
    }

    let scale = 10u128.pow(SOL_DECIMALS - decimals);
    let scaled = (lamports + scale / 2) / scale;
    let unit = 10u128.pow(decimals);
    let whole = scaled / unit;
    if decimals == 0 {
        return whole.to_string();
    }
    let frac = scaled % unit;
    format!("{whole}.{frac:0width$}", width = decimals as usize)
}
