/// Acceptance magic a bound receiver must return for a safe transfer to
/// commit. The value is the well-known 4-byte `onERC721Received` selector.
pub const TRANSFER_ACCEPTED: [u8; 4] = [0x15, 0x0b, 0x7a, 0x02];

pub const MAX_URI_LEN: usize = 2048;
pub const MAX_BATCH_MINT: u32 = 10;
pub const MAX_SALE_TIERS: usize = 16;

pub const BASIS_POINTS: u16 = 10_000; // 100%
pub const MAX_COMMISSION_BPS: u16 = 1_000; // 10%
pub const DEFAULT_COMMISSION_BPS: u16 = 200;

pub const DEFAULT_PAGE_LIMIT: u64 = 50;
pub const MAX_PAGE_LIMIT: u64 = 100;
