//! Simulated payments.
//!
//! There is no real gateway: each biller succeeds or fails on a random draw.
//! FASTag and DTH recharges are paid from the wallet balance and refunded on
//! failure; every other biller only records the attempt.

mod biller;
mod error;
mod outcome;
mod service;

pub use biller::Biller;
pub use error::PaymentError;
pub use outcome::{OutcomeSource, RandomOutcome};
pub use service::{PaymentReceipt, PaymentRequest, PaymentService};
