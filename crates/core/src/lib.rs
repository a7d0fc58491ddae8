//! Core wallet logic for PocketPay.
//!
//! This crate holds everything behind the screens, with no UI dependencies.
//! Platform services (storage, biometrics, screen capture, clock, randomness)
//! are injected through traits.
//!
//! # Modules
//!
//! - `validation` - Payment form validators (Luhn, IFSC, amounts, ...)
//! - `ledger` - Wallet balance and transaction history
//! - `payment` - Simulated gateway payments and wallet top-ups
//! - `session` - Login state, session timeout and biometric unlock
//! - `security` - Root/jailbreak checks and screenshot prevention
//! - `preferences` - Language and theme
//! - `profile` - User profile details
//! - `storage` - On-device key-value persistence

pub mod ledger;
pub mod payment;
pub mod preferences;
pub mod profile;
pub mod security;
pub mod session;
pub mod storage;
pub mod validation;
