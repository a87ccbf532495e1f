//! Intent classification for the chat widget.
//!
//! Pure keyword-substring matching against a fixed, ordered rule list.
//! No ML model required - the widget only has to route a handful of
//! banking questions to canned reply pools.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Detected intent category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Greeting (hello, hi, hey, sawubona)
    Greeting,
    /// Balance enquiry (balance, money, account)
    Balance,
    /// Transaction history (transaction, payment, history)
    Transactions,
    /// General help (help, support, assist)
    Help,
    /// Branch locator (branch, location, atm, office)
    Branches,
    /// Contact/customer service (contact, phone, call, customer service)
    Support,
    /// No keyword matched; answered from the default pool.
    Fallback,
}

impl Intent {
    /// Returns the wire label for the intent.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Balance => "balance",
            Intent::Transactions => "transactions",
            Intent::Help => "help",
            Intent::Branches => "branches",
            Intent::Support => "support",
            Intent::Fallback => "default",
        }
    }

    /// All categories, in classification priority order. `Fallback` is last
    /// and never matched directly.
    pub const ALL: [Intent; 7] = [
        Intent::Greeting,
        Intent::Balance,
        Intent::Transactions,
        Intent::Help,
        Intent::Branches,
        Intent::Support,
        Intent::Fallback,
    ];
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The ordered rule list. Evaluated top to bottom; the first category with a
/// matching keyword wins, so "Hi, what's my balance?" resolves to Greeting.
/// Matching is on raw substrings (not word boundaries), which is what the
/// widget's behavior relies on: "branchoffice123" still matches Branches.
const RULES: &[(Intent, &[&str])] = &[
    (Intent::Greeting, &["hello", "hi", "hey", "sawubona"]),
    (Intent::Balance, &["balance", "money", "account"]),
    (Intent::Transactions, &["transaction", "payment", "history"]),
    (Intent::Help, &["help", "support", "assist"]),
    (Intent::Branches, &["branch", "location", "atm", "office"]),
    (Intent::Support, &["contact", "phone", "call", "customer service"]),
];

/// Result of classifying one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentMatch {
    /// The matched category, or `Fallback` if no keyword was found.
    pub intent: Intent,
    /// The keyword that triggered the match, for logging.
    pub keyword: Option<&'static str>,
}

/// Keyword-based intent classifier.
///
/// Stateless and cheap to construct; the rule table itself is compiled in.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntentClassifier;

impl IntentClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify a message. Case-insensitive: input is lowercased before
    /// matching. Every input, including the empty string, classifies; an
    /// unmatched message falls through to `Fallback`.
    pub fn classify(&self, text: &str) -> IntentMatch {
        let normalized = text.to_lowercase();

        for (intent, keywords) in RULES {
            if let Some(keyword) = keywords.iter().copied().find(|k| normalized.contains(k)) {
                return IntentMatch {
                    intent: *intent,
                    keyword: Some(keyword),
                };
            }
        }

        IntentMatch {
            intent: Intent::Fallback,
            keyword: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_category_matches_its_keywords() {
        let classifier = IntentClassifier::new();

        let cases = [
            ("sawubona friend", Intent::Greeting),
            ("how much money do I have", Intent::Balance),
            ("did my payment go through", Intent::Transactions),
            ("please assist me", Intent::Help),
            ("nearest atm please", Intent::Branches),
            ("customer service number", Intent::Support),
        ];

        for (input, expected) in cases {
            assert_eq!(classifier.classify(input).intent, expected, "input: {input:?}");
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let classifier = IntentClassifier::new();
        for input in ["HELLO", "Hello", "hello"] {
            assert_eq!(classifier.classify(input).intent, Intent::Greeting);
        }
    }

    #[test]
    fn test_priority_order_breaks_ties() {
        let classifier = IntentClassifier::new();

        // Greeting is checked before Balance regardless of keyword position.
        let result = classifier.classify("What's my balance? Oh, hi!");
        assert_eq!(result.intent, Intent::Greeting);
        assert_eq!(result.keyword, Some("hi"));

        // Help beats Branches for the same reason.
        assert_eq!(
            classifier.classify("assist me at a branch").intent,
            Intent::Help
        );
    }

    #[test]
    fn test_substring_semantics() {
        let classifier = IntentClassifier::new();
        // Deliberately not word-boundary matching.
        assert_eq!(classifier.classify("branchoffice123").intent, Intent::Branches);
        // "hi" inside "this" also counts.
        assert_eq!(classifier.classify("this way").intent, Intent::Greeting);
        // "history" embeds "hi", so greeting outranks the transactions
        // keyword no matter how the question is phrased.
        assert_eq!(classifier.classify("payment history").intent, Intent::Greeting);
        assert_eq!(classifier.classify("which branch").intent, Intent::Greeting);
    }

    #[test]
    fn test_unmatched_and_empty_fall_through() {
        let classifier = IntentClassifier::new();

        let result = classifier.classify("asdkjasd");
        assert_eq!(result.intent, Intent::Fallback);
        assert!(result.keyword.is_none());

        assert_eq!(classifier.classify("").intent, Intent::Fallback);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Intent::Greeting.label(), "greeting");
        assert_eq!(Intent::Fallback.label(), "default");
        assert_eq!(Intent::Support.to_string(), "support");
    }
}
