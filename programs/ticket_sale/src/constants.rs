use anchor_lang::prelude::*;

/// Seed for the registry PDA, followed by the administrator key.
#[constant]
pub const REGISTRY_SEED: &[u8] = b"registry";

/// Largest supply whose registry account still fits the 10 KiB creation limit.
#[constant]
pub const MAX_TICKETS: u32 = 120;
