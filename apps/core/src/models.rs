use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents the demo customer shown across the banking pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// The unique identifier for the user.
    pub id: String,
    /// The customer's full name.
    pub name: String,
    /// The customer's email address.
    pub email: String,
    /// The customer's phone number.
    pub phone: String,
    /// The customer's primary account number.
    pub account_number: String,
    /// Optional URL of the profile picture.
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// The kind of bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Savings,
    Current,
    Credit,
}

/// Represents a single bank account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// The unique identifier for the account.
    pub id: String,
    /// The display name of the account (e.g., "Savings Account").
    pub name: String,
    /// The kind of account.
    #[serde(rename = "type")]
    pub kind: AccountKind,
    /// The current balance. Negative for credit accounts carrying debt.
    pub balance: f64,
    /// The credit limit, present only on credit accounts.
    #[serde(default)]
    pub credit_limit: Option<f64>,
    /// ISO 4217 currency code (ZAR for the demo).
    pub currency: String,
    /// The account number as displayed to the customer.
    pub account_number: String,
    /// Whether the account is active.
    pub is_active: bool,
}

/// Direction of a transaction from the account holder's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Credit,
    Debit,
}

/// Represents a single transaction on an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// The unique identifier for the transaction.
    pub id: String,
    /// The posting date.
    pub date: NaiveDate,
    /// Merchant or counterparty description.
    pub description: String,
    /// Signed amount: positive for credits, negative for debits.
    pub amount: f64,
    /// The transaction direction.
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    /// Spending category (e.g., "Groceries").
    pub category: String,
    /// The ID of the account this transaction belongs to.
    pub account_id: String,
}

/// Represents one product on the services page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankingService {
    /// The unique identifier for the service.
    pub id: String,
    /// The product title.
    pub title: String,
    /// Short marketing description.
    pub description: String,
    /// Bullet-point feature list.
    pub features: Vec<String>,
}

/// Represents a physical branch on the branch locator page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    /// The unique identifier for the branch.
    pub id: String,
    /// The branch name (e.g., "Cape Town CBD").
    pub name: String,
    /// The street address.
    pub address: String,
    /// The branch phone number.
    pub phone: String,
    /// Opening hours as displayed.
    pub hours: String,
    /// Services offered at this branch.
    pub services: Vec<String>,
}

/// Sign-in form input for the demo login.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Credentials {
    /// The account number entered by the visitor.
    #[validate(length(min = 1, message = "account number is required"))]
    pub account_number: String,
    /// The password entered by the visitor.
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}
