//! Derived figures for the account dashboard.
//!
//! Pure computations over the demo dataset: balance aggregation,
//! transaction filtering, the monthly summary card, and en-ZA currency
//! formatting. No state and no I/O.

use serde::{Deserialize, Serialize};

use crate::models::{Account, AccountKind, Transaction, TransactionKind};

/// How many transactions the recent-activity card shows.
pub const RECENT_TRANSACTION_LIMIT: usize = 8;

/// Which account's transactions to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountFilter {
    /// All accounts combined.
    All,
    /// A single account by ID.
    Account(String),
}

/// The "This Month" summary card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Total of credit transactions.
    pub income: f64,
    /// Total of debit transactions, as a positive figure.
    pub expenses: f64,
    /// Income minus expenses.
    pub net: f64,
}

/// Total balance across accounts. Credit-card debt is excluded from the
/// headline figure, matching the dashboard's total-balance card.
pub fn total_balance(accounts: &[Account]) -> f64 {
    accounts
        .iter()
        .filter(|a| a.kind != AccountKind::Credit)
        .map(|a| a.balance)
        .sum()
}

/// Transactions visible under the given filter, in dataset order.
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &AccountFilter,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|t| match filter {
            AccountFilter::All => true,
            AccountFilter::Account(id) => t.account_id == *id,
        })
        .collect()
}

/// The recent-activity window: the first [`RECENT_TRANSACTION_LIMIT`]
/// transactions under the filter.
pub fn recent_transactions<'a>(
    transactions: &'a [Transaction],
    filter: &AccountFilter,
) -> Vec<&'a Transaction> {
    let mut visible = filter_transactions(transactions, filter);
    visible.truncate(RECENT_TRANSACTION_LIMIT);
    visible
}

/// Income, expenses and net over the given transactions.
///
/// Internal transfers are movements between own accounts, not income, so
/// credits in the "Transfer" category are left out of the summary.
pub fn monthly_summary(transactions: &[Transaction]) -> MonthlySummary {
    let income: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Credit && t.category != "Transfer")
        .map(|t| t.amount)
        .sum();
    let expenses: f64 = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Debit)
        .map(|t| t.amount.abs())
        .sum();
    MonthlySummary {
        income,
        expenses,
        net: income - expenses,
    }
}

/// Formats an amount the way the dashboard displays rand: absolute value,
/// "R" prefix, space-grouped thousands and a decimal comma (en-ZA), e.g.
/// `R15 750,50`.
pub fn format_zar(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    format!("R{grouped},{fraction:02}")
}
