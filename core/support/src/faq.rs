// core/support/src/faq.rs

use serde::{Deserialize, Serialize};

/// Accordion grouping on the support page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaqTopic {
    Orders,
    Shipping,
    Payments,
    Account,
}

impl FaqTopic {
    pub fn label(&self) -> &'static str {
        match self {
            FaqTopic::Orders => "Orders",
            FaqTopic::Shipping => "Shipping",
            FaqTopic::Payments => "Payments",
            FaqTopic::Account => "Account",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub topic: FaqTopic,
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    fn new(topic: FaqTopic, question: &str, answer: &str) -> Self {
        Self {
            topic,
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// The static FAQ table the support page renders
pub fn default_faq() -> Vec<FaqEntry> {
    vec![
        FaqEntry::new(
            FaqTopic::Orders,
            "How do I place an order?",
            "Open a listing, pick a package tier, and follow the checkout \
             steps. The artisan confirms the order before starting work.",
        ),
        FaqEntry::new(
            FaqTopic::Orders,
            "Can I request changes to a listed piece?",
            "Yes. Most artisans accept commissions; message them from the \
             listing page before ordering to agree on the details.",
        ),
        FaqEntry::new(
            FaqTopic::Shipping,
            "How long does delivery take?",
            "Each package tier shows its delivery window in days. Custom \
             work at the premium tier usually takes the longest.",
        ),
        FaqEntry::new(
            FaqTopic::Shipping,
            "Do artisans ship internationally?",
            "Many do. Check the artisan's location on the listing card and \
             ask them directly about international rates.",
        ),
        FaqEntry::new(
            FaqTopic::Payments,
            "Which package tier should I choose?",
            "Basic covers the standard piece, standard adds options or \
             materials, and premium is the full custom treatment. Prices \
             are listed per tier on every listing.",
        ),
        FaqEntry::new(
            FaqTopic::Account,
            "Where did my favorites go?",
            "Favorites are kept for your current browsing session only; \
             closing the page clears them.",
        ),
    ]
}

/// Case-insensitive search over questions and answers. An empty or
/// whitespace term returns every entry.
pub fn search_faq<'a>(entries: &'a [FaqEntry], term: &str) -> Vec<&'a FaqEntry> {
    let needle = term.trim().to_lowercase();
    entries
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.question.to_lowercase().contains(&needle)
                || entry.answer.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Entries for one accordion section, table order preserved
pub fn by_topic(entries: &[FaqEntry], topic: FaqTopic) -> Vec<&FaqEntry> {
    entries.iter().filter(|entry| entry.topic == topic).collect()
}
