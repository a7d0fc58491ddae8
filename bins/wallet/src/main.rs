//! PocketPay wallet
//!
//! Command-line driver for the wallet core.

mod args;

use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rust_decimal::Decimal;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pocketpay_core::ledger::LedgerStore;
use pocketpay_core::payment::{OutcomeSource, PaymentRequest, PaymentService, RandomOutcome};
use pocketpay_core::storage::{KeyValueStore, KvStore, StorageProvider};
use pocketpay_core::validation::{parse_amount, validate_amount, validate_card};
use pocketpay_shared::types::Money;
use pocketpay_shared::{AppConfig, AppError, AppResult};

use crate::args::{Args, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pocketpay=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Open on-device storage
    let provider = StorageProvider::from(&config.storage);
    if provider == StorageProvider::Memory {
        warn!("Using in-memory storage; the balance will not survive this run");
    }
    let store = Arc::new(KvStore::new(provider)?);
    info!(provider = store.provider_name(), "Storage ready");

    let mut wallet = Wallet {
        ledger: LedgerStore::load(store, config.ledger.recent_limit).await,
        payments: PaymentService::new(RandomOutcome),
        recent_limit: config.ledger.recent_limit,
    };

    match args.command {
        Commands::Shell => wallet.shell().await?,
        command => {
            let output = wallet.execute(command).await?;
            println!("{output}");
        }
    }

    Ok(())
}

/// One ledger and payment service shared by every command of a run.
struct Wallet<S: KeyValueStore, O: OutcomeSource> {
    ledger: LedgerStore<S>,
    payments: PaymentService<O>,
    recent_limit: usize,
}

impl<S: KeyValueStore, O: OutcomeSource> Wallet<S, O> {
    /// Runs one command and returns what to print.
    async fn execute(&mut self, command: Commands) -> AppResult<String> {
        match command {
            Commands::Balance => Ok(format!("Balance: {}", Money::inr(self.ledger.current_balance()))),
            Commands::Add { amount } => {
                let amount = checked_amount(&amount)?;
                let balance = self.payments.add_money(&mut self.ledger, amount).await?;
                Ok(format!("Added {}. Balance: {}", Money::inr(amount), Money::inr(balance)))
            }
            Commands::Pay {
                biller,
                amount,
                counterparty,
                memo,
            } => {
                let amount = checked_amount(&amount)?;
                let mut request = PaymentRequest::new(biller, amount, counterparty);
                if let Some(memo) = memo {
                    request = request.with_memo(memo);
                }

                let receipt = self.payments.pay(&mut self.ledger, request).await?;
                let summary = match receipt.failure_reason {
                    None => format!(
                        "Paid {} to {} ({})",
                        Money::inr(amount),
                        receipt.transaction.counterparty(),
                        receipt.transaction.id()
                    ),
                    Some(reason) => format!("Payment failed: {reason}"),
                };
                Ok(format!("{summary}\nBalance: {}", Money::inr(receipt.balance)))
            }
            Commands::History { limit } => Ok(self.history(limit.unwrap_or(self.recent_limit))),
            Commands::ValidateCard {
                number,
                expiry,
                cvv,
                amount,
            } => {
                let result = validate_card(&number, &expiry, &cvv, &amount);
                let json = serde_json::to_string_pretty(&result)
                    .map_err(|e| AppError::Internal(e.to_string()))?;
                if result.is_valid() {
                    Ok(json)
                } else {
                    Err(AppError::Validation(format!("Card details are invalid\n{json}")))
                }
            }
            Commands::Shell => Err(AppError::Unsupported("Already in the wallet shell".to_string())),
        }
    }

    fn history(&self, limit: usize) -> String {
        if self.ledger.is_empty() {
            return "No transactions yet".to_string();
        }
        let mut out = String::new();
        for tx in self.ledger.recent_transactions(limit) {
            let _ = writeln!(
                out,
                "{}  {:?}  {}  {:?}  {}  {}",
                tx.created_at().format("%Y-%m-%d %H:%M"),
                tx.kind(),
                Money::inr(tx.amount()),
                tx.outcome(),
                tx.counterparty(),
                tx.memo()
            );
        }
        out.trim_end().to_string()
    }

    /// Reads commands from stdin until `exit`, `quit` or end of input.
    ///
    /// History only lives as long as the process, so this is the way to
    /// pay and then list the payments.
    async fn shell(&mut self) -> anyhow::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        loop {
            stdout.write_all(b"wallet> ").await?;
            stdout.flush().await?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if matches!(line, "exit" | "quit") {
                break;
            }

            let output = match Args::try_parse_from(std::iter::once("wallet").chain(line.split_whitespace())) {
                Ok(args) => self.shell_output(args.command).await,
                Err(e) => e.to_string(),
            };
            stdout.write_all(output.trim_end().as_bytes()).await?;
            stdout.write_all(b"\n").await?;
        }

        Ok(())
    }

    async fn shell_output(&mut self, command: Commands) -> String {
        match self.execute(command).await {
            Ok(output) => output,
            Err(e) if e.is_user_facing() => e.to_string(),
            Err(e) => {
                error!(code = e.error_code(), error = %e, "Wallet command failed");
                "Something went wrong".to_string()
            }
        }
    }
}

/// Runs the amount validator and returns the parsed value.
fn checked_amount(input: &str) -> AppResult<Decimal> {
    if let Some(message) = validate_amount(input).error() {
        return Err(AppError::Validation(message.to_string()));
    }
    parse_amount(input).ok_or_else(|| AppError::Validation("Invalid amount".to_string()))
}
