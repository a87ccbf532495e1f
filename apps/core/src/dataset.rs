//! Static demo dataset for the Peoples Bank front-end.
//!
//! All figures are hard-coded demo data: one customer, three accounts,
//! five transactions, the services catalogue and the branch list. The
//! dataset is built once at process start and is immutable thereafter.

use std::sync::LazyLock;

use chrono::NaiveDate;

use crate::models::{Account, AccountKind, BankingService, Branch, Transaction, TransactionKind, User};

/// The process-wide demo dataset.
static DEMO: LazyLock<DemoDataset> = LazyLock::new(DemoDataset::build);

/// Returns the shared demo dataset.
pub fn demo() -> &'static DemoDataset {
    &DEMO
}

/// The complete in-memory dataset backing the demo pages.
#[derive(Debug, Clone)]
pub struct DemoDataset {
    pub user: User,
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub services: Vec<BankingService>,
    pub branches: Vec<Branch>,
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}

impl DemoDataset {
    fn build() -> Self {
        Self {
            user: User {
                id: "user_001".into(),
                name: "Thandiwe Mthembu".into(),
                email: "thandiwe.mthembu@email.co.za".into(),
                phone: "+27 82 123 4567".into(),
                account_number: "62134567890".into(),
                profile_image: Some(
                    "https://images.unsplash.com/photo-1494790108755-2616b612b47c?w=150&h=150&fit=crop&crop=face"
                        .into(),
                ),
            },
            accounts: vec![
                Account {
                    id: "acc_001".into(),
                    name: "Savings Account".into(),
                    kind: AccountKind::Savings,
                    balance: 15750.50,
                    credit_limit: None,
                    currency: "ZAR".into(),
                    account_number: "62134567890".into(),
                    is_active: true,
                },
                Account {
                    id: "acc_002".into(),
                    name: "Current Account".into(),
                    kind: AccountKind::Current,
                    balance: 3420.75,
                    credit_limit: None,
                    currency: "ZAR".into(),
                    account_number: "62134567891".into(),
                    is_active: true,
                },
                Account {
                    id: "acc_003".into(),
                    name: "Credit Card".into(),
                    kind: AccountKind::Credit,
                    balance: -2150.00,
                    credit_limit: Some(15000.0),
                    currency: "ZAR".into(),
                    account_number: "4532 1234 5678 9012".into(),
                    is_active: true,
                },
            ],
            transactions: vec![
                Transaction {
                    id: "txn_001".into(),
                    date: date(2025, 1, 15),
                    description: "Woolworths Cape Town".into(),
                    amount: -450.50,
                    kind: TransactionKind::Debit,
                    category: "Groceries".into(),
                    account_id: "acc_002".into(),
                },
                Transaction {
                    id: "txn_002".into(),
                    date: date(2025, 1, 14),
                    description: "Salary Deposit - ABC Corp".into(),
                    amount: 12500.00,
                    kind: TransactionKind::Credit,
                    category: "Income".into(),
                    account_id: "acc_001".into(),
                },
                Transaction {
                    id: "txn_003".into(),
                    date: date(2025, 1, 13),
                    description: "Uber South Africa".into(),
                    amount: -85.00,
                    kind: TransactionKind::Debit,
                    category: "Transport".into(),
                    account_id: "acc_002".into(),
                },
                Transaction {
                    id: "txn_004".into(),
                    date: date(2025, 1, 12),
                    description: "Netflix".into(),
                    amount: -159.00,
                    kind: TransactionKind::Debit,
                    category: "Entertainment".into(),
                    account_id: "acc_002".into(),
                },
                Transaction {
                    id: "txn_005".into(),
                    date: date(2025, 1, 11),
                    description: "Transfer from Savings".into(),
                    amount: 2000.00,
                    kind: TransactionKind::Credit,
                    category: "Transfer".into(),
                    account_id: "acc_002".into(),
                },
            ],
            services: vec![
                BankingService {
                    id: "service_001".into(),
                    title: "Current Accounts".into(),
                    description: "Manage your everyday banking with our flexible current accounts".into(),
                    features: vec![
                        "No monthly fees".into(),
                        "Free ATM withdrawals".into(),
                        "Online banking".into(),
                        "Mobile app".into(),
                    ],
                },
                BankingService {
                    id: "service_002".into(),
                    title: "Savings Accounts".into(),
                    description: "Grow your money with competitive interest rates".into(),
                    features: vec![
                        "High interest rates".into(),
                        "No minimum balance".into(),
                        "Goal tracking".into(),
                        "Auto-save options".into(),
                    ],
                },
                BankingService {
                    id: "service_003".into(),
                    title: "Home Loans".into(),
                    description: "Make your dream home a reality with affordable home loans".into(),
                    features: vec![
                        "Competitive rates".into(),
                        "Quick approval".into(),
                        "Flexible terms".into(),
                        "First-time buyer support".into(),
                    ],
                },
                BankingService {
                    id: "service_004".into(),
                    title: "Personal Loans".into(),
                    description: "Personal loans for all your needs".into(),
                    features: vec![
                        "Quick approval".into(),
                        "Flexible repayment".into(),
                        "No hidden fees".into(),
                        "Online application".into(),
                    ],
                },
            ],
            branches: vec![
                Branch {
                    id: "branch_001".into(),
                    name: "Cape Town CBD".into(),
                    address: "123 Long Street, Cape Town, 8001".into(),
                    phone: "+27 21 123 4567".into(),
                    hours: "Mon-Fri: 8:00-16:30, Sat: 8:00-12:00".into(),
                    services: vec![
                        "Full Banking".into(),
                        "Foreign Exchange".into(),
                        "Safe Deposit".into(),
                    ],
                },
                Branch {
                    id: "branch_002".into(),
                    name: "Johannesburg Sandton".into(),
                    address: "456 Rivonia Road, Sandton, 2196".into(),
                    phone: "+27 11 234 5678".into(),
                    hours: "Mon-Fri: 8:00-16:30, Sat: 8:00-12:00".into(),
                    services: vec![
                        "Full Banking".into(),
                        "Business Banking".into(),
                        "Investment Services".into(),
                    ],
                },
                Branch {
                    id: "branch_003".into(),
                    name: "Durban CBD".into(),
                    address: "789 Smith Street, Durban, 4001".into(),
                    phone: "+27 31 345 6789".into(),
                    hours: "Mon-Fri: 8:00-16:30, Sat: 8:00-12:00".into(),
                    services: vec![
                        "Full Banking".into(),
                        "Foreign Exchange".into(),
                        "Loans".into(),
                    ],
                },
            ],
        }
    }

    /// Looks up an account by its ID.
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Branch locator search: case-insensitive substring match on the
    /// branch name or address. An empty term matches every branch.
    pub fn search_branches(&self, term: &str) -> Vec<&Branch> {
        let needle = term.trim().to_lowercase();
        self.branches
            .iter()
            .filter(|b| {
                needle.is_empty()
                    || b.name.to_lowercase().contains(&needle)
                    || b.address.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let data = demo();
        assert_eq!(data.accounts.len(), 3);
        assert_eq!(data.transactions.len(), 5);
        assert_eq!(data.services.len(), 4);
        assert_eq!(data.branches.len(), 3);
        assert_eq!(data.user.name, "Thandiwe Mthembu");
    }

    #[test]
    fn test_account_lookup() {
        let data = demo();
        assert_eq!(data.account("acc_001").map(|a| a.kind), Some(AccountKind::Savings));
        assert!(data.account("acc_999").is_none());
    }

    #[test]
    fn test_branch_search_by_name_and_address() {
        let data = demo();
        assert_eq!(data.search_branches("sandton").len(), 1);
        assert_eq!(data.search_branches("Smith Street")[0].id, "branch_003");
        assert_eq!(data.search_branches("").len(), 3);
        assert!(data.search_branches("polokwane").is_empty());
    }
}
