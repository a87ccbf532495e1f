//! Canned response pools for the chat widget.
//!
//! Each intent category owns an ordered, non-empty pool of reply strings.
//! Pools are static configuration: built once at startup from the demo
//! dataset and immutable thereafter. Selection is a uniform-random draw,
//! independently re-sampled on every call.

use std::collections::HashMap;

use rand::Rng;

use crate::dataset;
use crate::error::AppError;

use super::intent::Intent;

/// Immutable mapping from intent category to its reply pool.
#[derive(Debug, Clone)]
pub struct ResponsePool {
    pools: HashMap<Intent, Vec<String>>,
}

impl ResponsePool {
    /// Builds a pool from explicit per-category replies.
    ///
    /// Every category in [`Intent::ALL`] must be present with at least one
    /// reply, so a draw can never fail at runtime.
    pub fn new(pools: HashMap<Intent, Vec<String>>) -> Result<Self, AppError> {
        for intent in Intent::ALL {
            match pools.get(&intent) {
                Some(replies) if !replies.is_empty() => {}
                _ => {
                    return Err(AppError::Config(format!(
                        "response pool for '{}' is missing or empty",
                        intent
                    )))
                }
            }
        }
        Ok(Self { pools })
    }

    /// The built-in Krotoa replies for the Peoples Bank demo.
    ///
    /// The balance replies interpolate the hard-coded demo balances, the
    /// same figures the dashboard shows.
    pub fn builtin() -> Self {
        let data = dataset::demo();
        let current = data.accounts[1].balance;
        let savings = data.accounts[0].balance;

        let mut pools: HashMap<Intent, Vec<String>> = HashMap::new();
        pools.insert(
            Intent::Greeting,
            vec![
                "Gâi tsēs! I'm Krotoa, your friendly banking assistant. How can I help you today?".into(),
                "Gâi tsēs! I'm Krotoa, here to assist with your banking needs. What would you like to know?".into(),
                "Sanibonani! I'm Krotoa, ready to help you with your Peoples Bank account. How can I assist you?".into(),
                "Hello and gâi tsēs! Welcome to Peoples Bank. I'm Krotoa, your personal banking assistant.".into(),
            ],
        );
        pools.insert(
            Intent::Balance,
            vec![
                format!(
                    "Your current account balance is R{current:.2} and your savings balance is R{savings:.2}. Looking good!"
                ),
                "I can see your accounts are doing well! Your current balance across all accounts looks healthy. Anything specific you'd like to know?".into(),
            ],
        );
        pools.insert(
            Intent::Transactions,
            vec![
                "Your recent transactions include purchases at Woolworths, Uber rides, and your salary deposit. Would you like me to show you more details?".into(),
                "I can see your latest transactions. You've been quite active with everyday purchases and your salary came through recently. Need any details?".into(),
            ],
        );
        pools.insert(
            Intent::Help,
            vec![
                "Gâi tsēs! I can help you with: checking balances, reviewing transactions, finding branches, customer support, and general banking questions. What interests you?".into(),
                "I'm here to assist with your banking needs! I can check balances, explain transactions, locate branches, or connect you with customer support. How can I help?".into(),
            ],
        );
        pools.insert(
            Intent::Branches,
            vec![
                "Peoples Bank has branches across South Africa! Our main branches are in Cape Town, Johannesburg, Durban, and Pretoria. Would you like specific branch details or directions?".into(),
                "We have over 200 branches nationwide, plus ATMs at major shopping centers. Where are you located so I can find the nearest one for you?".into(),
            ],
        );
        pools.insert(
            Intent::Support,
            vec![
                "For additional support, you can call us at 0860 PEOPLES (0860 736 7537) or visit any branch. Our call center is available 24/7 with friendly staff ready to help!".into(),
                "Our customer support team is available 24/7 at 0860 PEOPLES. You can also visit our branches or continue chatting with me for quick questions. I'm here to help!".into(),
            ],
        );
        pools.insert(
            Intent::Fallback,
            vec![
                "Gâi tsēs! I'm not sure about that specific question, but I'd love to help! Try asking about your balance, recent transactions, or finding a branch.".into(),
                "That's a great question! I specialize in banking queries like balances, transactions, and branch locations. What banking topic can I help you with?".into(),
                "I'm still learning, but I can definitely help with banking basics! Ask me about your accounts, transactions, or how to contact our support team.".into(),
            ],
        );

        Self { pools }
    }

    /// The replies for one category, in pool order.
    pub fn replies(&self, intent: Intent) -> &[String] {
        // Both constructors guarantee every category is present and non-empty.
        self.pools.get(&intent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Draws one reply for the category, uniformly at random.
    pub fn draw<R: Rng + ?Sized>(&self, intent: Intent, rng: &mut R) -> &str {
        let replies = self.replies(intent);
        &replies[rng.gen_range(0..replies.len())]
    }
}

impl Default for ResponsePool {
    fn default() -> Self {
        Self::builtin()
    }
}
