mod referral;
mod types;
mod views;

pub(crate) use types::ReferralLedger;
