// Repository trait for dashboard analytics data
use crate::domain::analytics::{
    CardMetric, ChartData, Notification, PlatformComparison, ProductPerformance,
    SentimentBreakdown,
};
use crate::domain::layout::ChartPreferences;
use crate::domain::widget::{CardId, TimeRange};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Headline figure for a summary card
    async fn card_metric(&self, card: CardId) -> anyhow::Result<CardMetric>;

    /// Per-platform sales series shaped by the chart preferences
    async fn sales_chart(&self, preferences: ChartPreferences) -> anyhow::Result<ChartData>;

    /// Revenue and units per product over the time range, all platforms
    async fn product_performance(&self, time_range: TimeRange) -> anyhow::Result<ProductPerformance>;

    async fn sentiment_breakdown(&self, time_range: TimeRange) -> anyhow::Result<SentimentBreakdown>;

    /// Per-platform scores (0..=100) for each comparison metric
    async fn platform_comparison(&self, time_range: TimeRange) -> anyhow::Result<PlatformComparison>;

    /// Latest alerts and updates as of `as_of`, newest first
    async fn recent_notifications(&self, as_of: DateTime<Utc>) -> anyhow::Result<Vec<Notification>>;

    /// Notifications requiring attention as of `as_of`
    async fn critical_alerts(&self, as_of: DateTime<Utc>) -> anyhow::Result<Vec<Notification>>;
}
