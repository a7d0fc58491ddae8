use clap::{Parser, Subcommand};
use pocketpay_core::payment::Biller;

#[derive(Parser, Debug)]
#[command(author, version, about = "PocketPay wallet - balance, payments and history")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the wallet balance
    Balance,

    /// Add money to the wallet
    Add {
        /// Amount in rupees
        amount: String,
    },

    /// Pay a biller through its simulated gateway
    ///
    /// FASTag and DTH recharges are paid from the wallet balance.
    Pay {
        /// Biller: bank_transfer, mobile_recharge, fastag, dth, electricity,
        /// insurance, gold_loan, personal_loan, digital_fd, credit_card
        biller: Biller,

        /// Amount in rupees
        amount: String,

        /// Recipient, account or service identifier
        counterparty: String,

        /// Note for the history entry
        #[arg(short, long)]
        memo: Option<String>,
    },

    /// List recent transactions of this run, newest first
    ///
    /// History is kept in memory, so use `shell` to see payments listed.
    History {
        /// How many to show (defaults to the configured limit)
        limit: Option<usize>,
    },

    /// Check card payment details without paying
    ValidateCard {
        /// Card number, spaces allowed
        number: String,

        /// Expiry as MM/YY
        expiry: String,

        /// Card verification value
        cvv: String,

        /// Amount in rupees
        amount: String,
    },

    /// Read commands from stdin against one wallet until `exit`
    Shell,
}
