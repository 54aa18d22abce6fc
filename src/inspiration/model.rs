use serde::Deserialize;

/// One row of the quote file, in column order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuoteRecord {
    pub quote: String,
    pub attribution: String,
    /// Optional qualifier such as the work the quote comes from. May be blank.
    pub context: String,
    pub emoji: String,
}

impl QuoteRecord {
    pub fn new(
        quote: impl Into<String>,
        attribution: impl Into<String>,
        context: impl Into<String>,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            quote: quote.into(),
            attribution: attribution.into(),
            context: context.into(),
            emoji: emoji.into(),
        }
    }

    /// The trimmed context, or `None` when it is blank.
    pub fn context(&self) -> Option<&str> {
        let context = self.context.trim();
        if context.is_empty() {
            None
        } else {
            Some(context)
        }
    }

    /// Attribution followed by the parenthesized context, when there is one.
    pub fn attribution_line(&self) -> String {
        match self.context() {
            Some(context) => format!("{} ({})", self.attribution, context),
            None => self.attribution.clone(),
        }
    }
}
