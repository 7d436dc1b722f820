pub mod assistant;
pub mod faq;

pub use assistant::{AssistantRule, AssistantScript};
pub use faq::{by_topic, default_faq, search_faq, FaqEntry, FaqTopic};
