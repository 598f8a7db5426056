// Keyword responder behind the dashboard assistant
use super::analytics::{Product, PRODUCTS};
use serde::Serialize;

pub const GREETING: &str =
    "Hello! I'm your e-commerce assistant. How can I help you analyze your business today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Topic {
    BestProduct,
    Sentiment,
    Forecast,
    Platforms,
    General,
}

impl Topic {
    /// First matching topic wins; matching ignores case.
    pub fn classify(message: &str) -> Topic {
        let message = message.to_lowercase();
        let mentions = |words: &[&str]| words.iter().any(|w| message.contains(w));

        if mentions(&["best performing product"]) {
            Topic::BestProduct
        } else if mentions(&["sentiment"]) {
            Topic::Sentiment
        } else if mentions(&["forecast", "predict"]) {
            Topic::Forecast
        } else if mentions(&["platform", "marketplace"]) {
            Topic::Platforms
        } else {
            Topic::General
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub topic: Topic,
    pub reply: String,
}

/// Answer a user message. Blank messages get no reply.
pub fn respond(message: &str) -> Option<Reply> {
    if message.trim().is_empty() {
        return None;
    }

    let topic = Topic::classify(message);
    let reply = match topic {
        Topic::BestProduct => best_product_reply(),
        Topic::Sentiment => "The overall sentiment for your products is positive (65%). \
            However, there's a negative sentiment trend for your Premium Headphones on Amazon. \
            Customers are mentioning issues with battery life and comfort during extended use."
            .to_string(),
        Topic::Forecast => "Based on historical data and current trends, I predict your sales \
            will increase by approximately 12% next month. Your Smart Watch and Premium \
            Headphones are likely to see the highest growth."
            .to_string(),
        Topic::Platforms => "Amazon is currently your best-performing platform with 55% of \
            total sales. AliExpress shows promising growth rate at 25% month-over-month."
            .to_string(),
        Topic::General => "I understand you're asking about your e-commerce performance. \
            Could you be more specific about what information you need? I can help with \
            product performance, platform comparison, sentiment analysis, or sales forecasting."
            .to_string(),
    };

    Some(Reply { topic, reply })
}

fn best_product_reply() -> String {
    let best = PRODUCTS
        .iter()
        .max_by(|a, b| a.monthly_revenue.total_cmp(&b.monthly_revenue));

    match best {
        Some(Product {
            name,
            monthly_revenue,
            ..
        }) => format!(
            "Based on your current sales data, the {} is your best performing product with ${} \
             in revenue this month. Would you like to see a detailed analysis?",
            name,
            group_thousands(monthly_revenue.round() as i64)
        ),
        None => "I don't have any product sales to compare yet.".to_string(),
    }
}

/// 18500 -> "18,500"
fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
