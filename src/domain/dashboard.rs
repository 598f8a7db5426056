// Dashboard view model
use super::analytics::{
    ChartData, PlatformComparison, ProductPerformance, SentimentBreakdown, Trend,
};
use super::layout::ChartPreferences;
use super::widget::{CardId, SectionId};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub title: String,
    pub generated_at: DateTime<Utc>,
    pub chart_preferences: ChartPreferences,
    pub cards: Vec<CardView>,
    pub sections: Vec<SectionView>,
}

impl Dashboard {
    pub fn new(
        title: String,
        generated_at: DateTime<Utc>,
        chart_preferences: ChartPreferences,
        cards: Vec<CardView>,
        sections: Vec<SectionView>,
    ) -> Self {
        Self {
            title,
            generated_at,
            chart_preferences,
            cards,
            sections,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: CardId,
    pub title: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub caption: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionView {
    pub id: SectionId,
    pub title: String,
    pub description: String,
    pub content: SectionContent,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SectionContent {
    Overview {
        chart: ChartData,
        notifications: Vec<NoticeView>,
    },
    Products { performance: ProductPerformance },
    Sentiment { breakdown: SentimentBreakdown },
    Platforms { comparison: PlatformComparison },
    Chart { chart: ChartData },
    Alerts { alerts: Vec<NoticeView> },
}

#[derive(Debug, Clone, Serialize)]
pub struct NoticeView {
    pub title: String,
    pub description: String,
    pub time: String,
}
