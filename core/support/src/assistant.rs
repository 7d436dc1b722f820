// core/support/src/assistant.rs

use serde::{Deserialize, Serialize};
use tracing::debug;

/// One rule of the decision list. Keywords are matched as
/// case-insensitive substrings of the visitor's message; any hit fires
/// the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantRule {
    pub topic: String,
    keywords: Vec<String>,
    pub response: String,
}

impl AssistantRule {
    pub fn new(topic: &str, keywords: &[&str], response: &str) -> Self {
        Self {
            topic: topic.to_string(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            response: response.to_string(),
        }
    }

    fn fires_on(&self, message_lower: &str) -> bool {
        self.keywords.iter().any(|k| message_lower.contains(k.as_str()))
    }
}

/// The support page's scripted assistant: an ordered rule list evaluated
/// top-down with a mandatory fallback. First matching rule wins; there
/// is no dialogue state and no language model behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantScript {
    rules: Vec<AssistantRule>,
    fallback: String,
}

impl AssistantScript {
    pub fn new(rules: Vec<AssistantRule>, fallback: &str) -> Self {
        Self {
            rules,
            fallback: fallback.to_string(),
        }
    }

    /// The canned support script the marketing site ships with
    pub fn support_default() -> Self {
        Self::new(
            vec![
                AssistantRule::new(
                    "pricing",
                    &["price", "cost", "how much", "fee"],
                    "Every listing offers three packages: basic, standard, and \
                     premium. The price and delivery window for each tier are \
                     shown on the listing page.",
                ),
                AssistantRule::new(
                    "shipping",
                    &["shipping", "delivery", "ship", "arrive"],
                    "Delivery time depends on the package tier you pick; each \
                     quote on the listing page shows its delivery window in \
                     days. Artisans ship directly, so check their location for \
                     an estimate.",
                ),
                AssistantRule::new(
                    "returns",
                    &["refund", "return", "cancel"],
                    "Orders can be cancelled before the artisan starts work. \
                     For finished pieces, returns are arranged with the \
                     artisan directly within 14 days of delivery.",
                ),
                AssistantRule::new(
                    "custom orders",
                    &["custom", "commission", "personalize"],
                    "Most artisans take commissions. Open the listing and use \
                     the contact button to describe what you have in mind \
                     before ordering.",
                ),
                AssistantRule::new(
                    "favorites",
                    &["favorite", "favourite", "save", "bookmark"],
                    "Tap the heart on any listing card to bookmark it. \
                     Favorites live in your current browsing session only.",
                ),
                AssistantRule::new(
                    "human support",
                    &["human", "agent", "person", "someone"],
                    "I can connect you with our support team. Reach them at \
                     support@artisan.market and they will reply within one \
                     business day.",
                ),
            ],
            "I can help with pricing, shipping, returns, custom orders, and \
             favorites. What would you like to know?",
        )
    }

    /// Evaluate the decision list top-down; the first matching rule
    /// answers, otherwise the fallback does.
    pub fn reply(&self, message: &str) -> &str {
        let message = message.to_lowercase();

        for rule in &self.rules {
            if rule.fires_on(&message) {
                debug!(topic = %rule.topic, "Assistant rule matched");
                return &rule.response;
            }
        }

        debug!("Assistant fallback reply");
        &self.fallback
    }

    pub fn rules(&self) -> &[AssistantRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}
