//! Payment destinations and their simulated gateway behaviour.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ledger::TransactionKind;

/// Where a payment goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Biller {
    /// Transfer to a bank account.
    BankTransfer,
    /// Prepaid mobile recharge.
    MobileRecharge,
    /// FASTag toll wallet recharge.
    Fastag,
    /// DTH television recharge.
    Dth,
    /// Electricity bill.
    Electricity,
    /// Insurance premium.
    Insurance,
    /// Gold loan repayment.
    GoldLoan,
    /// Personal loan application.
    PersonalLoan,
    /// Digital fixed deposit.
    DigitalFd,
    /// Credit card bill.
    CreditCard,
}

impl Biller {
    /// Every biller, in menu order.
    pub const ALL: [Self; 10] = [
        Self::BankTransfer,
        Self::MobileRecharge,
        Self::Fastag,
        Self::Dth,
        Self::Electricity,
        Self::Insurance,
        Self::GoldLoan,
        Self::PersonalLoan,
        Self::DigitalFd,
        Self::CreditCard,
    ];

    /// Short identifier used on the command line and in logs.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::BankTransfer => "bank_transfer",
            Self::MobileRecharge => "mobile_recharge",
            Self::Fastag => "fastag",
            Self::Dth => "dth",
            Self::Electricity => "electricity",
            Self::Insurance => "insurance",
            Self::GoldLoan => "gold_loan",
            Self::PersonalLoan => "personal_loan",
            Self::DigitalFd => "digital_fd",
            Self::CreditCard => "credit_card",
        }
    }

    /// How the payment shows up in the history.
    #[must_use]
    pub fn transaction_kind(self) -> TransactionKind {
        match self {
            Self::BankTransfer => TransactionKind::Transfer,
            Self::MobileRecharge | Self::Fastag | Self::Dth => TransactionKind::Recharge,
            Self::Electricity
            | Self::Insurance
            | Self::GoldLoan
            | Self::PersonalLoan
            | Self::DigitalFd
            | Self::CreditCard => TransactionKind::Payment,
        }
    }

    /// The gateway succeeds when a uniform sample in `[0, 1)` exceeds this.
    ///
    /// `None` means the gateway never fails.
    #[must_use]
    pub fn success_threshold(self) -> Option<f64> {
        match self {
            Self::Electricity | Self::DigitalFd => Some(0.3),
            Self::MobileRecharge => Some(0.4),
            Self::BankTransfer | Self::Dth | Self::PersonalLoan => Some(0.5),
            Self::Fastag | Self::Insurance => Some(0.6),
            Self::GoldLoan => Some(0.7),
            Self::CreditCard => None,
        }
    }

    /// Whether a gateway draw of `sample` is a success.
    #[must_use]
    pub fn succeeds(self, sample: f64) -> bool {
        self.success_threshold()
            .is_none_or(|threshold| sample > threshold)
    }

    /// Message shown when the gateway fails.
    #[must_use]
    pub fn failure_reason(self) -> &'static str {
        match self {
            Self::BankTransfer => "Bank server unresponsive",
            Self::MobileRecharge => "Operator server error",
            Self::Fastag => "FASTag service unavailable",
            Self::Dth => "DTH operator error",
            Self::Electricity => "Payment gateway error",
            Self::Insurance => "Insurance payment failed",
            Self::GoldLoan => "Gold loan processing failed",
            Self::PersonalLoan => "Eligibility criteria not met",
            Self::DigitalFd => "Investment processing failed",
            Self::CreditCard => "Card payment declined",
        }
    }

    /// Whether the amount is paid out of the wallet balance.
    #[must_use]
    pub fn debits_wallet(self) -> bool {
        matches!(self, Self::Fastag | Self::Dth)
    }

    /// Default memo for the history entry.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::BankTransfer => "Bank transfer",
            Self::MobileRecharge => "Mobile recharge",
            Self::Fastag => "FASTag recharge",
            Self::Dth => "DTH recharge",
            Self::Electricity => "Electricity bill payment",
            Self::Insurance => "Insurance premium",
            Self::GoldLoan => "Gold loan payment",
            Self::PersonalLoan => "Personal loan application",
            Self::DigitalFd => "Digital FD investment",
            Self::CreditCard => "Credit card payment",
        }
    }
}

impl fmt::Display for Biller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Biller {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|biller| biller.code() == wanted)
            .ok_or_else(|| format!("unknown biller: {s}"))
    }
}
