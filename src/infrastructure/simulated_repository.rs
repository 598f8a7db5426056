// Simulated analytics repository - fixed headline figures and synthetic sales series
use crate::application::analytics_repository::AnalyticsRepository;
use crate::domain::analytics::{
    jitter_score, CardMetric, ChartData, Notification, NotificationKind, Platform,
    PlatformComparison, PlatformScores, ProductPerformance, SentimentBreakdown, SeriesData,
    COMPARISON_METRICS,
};
use crate::domain::layout::ChartPreferences;
use crate::domain::widget::{CardId, ChartType, TimeRange};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, MutexGuard};

/// Daily sales level of a platform and how far a single point may stray from it.
struct SalesProfile {
    platform: Platform,
    base: f64,
    variance: f64,
}

const SALES_PROFILES: [SalesProfile; 3] = [
    SalesProfile {
        platform: Platform::Amazon,
        base: 2000.0,
        variance: 300.0,
    },
    SalesProfile {
        platform: Platform::AliExpress,
        base: 1500.0,
        variance: 200.0,
    },
    SalesProfile {
        platform: Platform::Daraz,
        base: 1000.0,
        variance: 150.0,
    },
];

const SENTIMENT: SentimentBreakdown = SentimentBreakdown {
    positive: 65,
    neutral: 25,
    negative: 10,
};

pub struct SimulatedAnalytics {
    rng: Mutex<StdRng>,
}

impl SimulatedAnalytics {
    /// A fixed seed makes every generated series reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn rng(&self) -> anyhow::Result<MutexGuard<'_, StdRng>> {
        self.rng
            .lock()
            .map_err(|_| anyhow::anyhow!("simulation rng lock poisoned"))
    }

    fn generate(&self, profile: &SalesProfile, count: usize, multiplier: f64) -> anyhow::Result<Vec<i64>> {
        let mut rng = self.rng()?;

        Ok((0..count)
            .map(|_| {
                let jitter = rng.gen_range(-profile.variance..profile.variance);
                ((profile.base + jitter) * multiplier).floor() as i64
            })
            .collect())
    }

    /// Notification raised `age` before `as_of`.
    fn notification(
        id: u32,
        kind: NotificationKind,
        title: &str,
        description: &str,
        as_of: DateTime<Utc>,
        age: Duration,
    ) -> Notification {
        Notification {
            id,
            kind,
            title: title.to_string(),
            description: description.to_string(),
            raised_at: as_of - age,
        }
    }
}

#[async_trait]
impl AnalyticsRepository for SimulatedAnalytics {
    async fn card_metric(&self, card: CardId) -> anyhow::Result<CardMetric> {
        let metric = match card {
            CardId::Revenue => CardMetric::new("$45,231.89", 20.1),
            CardId::Orders => CardMetric::new("2,345", 12.4),
            CardId::Customers => CardMetric::new("1,895", 8.2),
            CardId::Conversion => CardMetric::new("3.85%", -1.2),
        };
        Ok(metric)
    }

    async fn sales_chart(&self, preferences: ChartPreferences) -> anyhow::Result<ChartData> {
        let labels = preferences.time_range.axis_labels();
        let multiplier = preferences.time_range.volume_multiplier();
        let fill = preferences.chart_type == ChartType::Line;

        let mut series = Vec::with_capacity(SALES_PROFILES.len());
        for profile in &SALES_PROFILES {
            let values = self.generate(profile, labels.len(), multiplier)?;
            let platform = profile.platform;
            series.push(SeriesData::new(
                platform.key().to_string(),
                platform.name().to_string(),
                platform.color().to_string(),
                fill,
                values,
            ));
        }

        tracing::debug!(
            time_range = preferences.time_range.label(),
            points = labels.len(),
            "generated sales chart"
        );

        Ok(ChartData {
            id: "sales".to_string(),
            title: "Sales Overview".to_string(),
            chart_type: preferences.chart_type,
            time_range: preferences.time_range,
            x_axis: "Time Period".to_string(),
            y_axis: "Revenue ($)".to_string(),
            labels,
            series,
        })
    }

    async fn product_performance(&self, time_range: TimeRange) -> anyhow::Result<ProductPerformance> {
        Ok(ProductPerformance::build(time_range, &[]))
    }

    async fn sentiment_breakdown(&self, _time_range: TimeRange) -> anyhow::Result<SentimentBreakdown> {
        Ok(SENTIMENT)
    }

    async fn platform_comparison(&self, time_range: TimeRange) -> anyhow::Result<PlatformComparison> {
        let volatility = time_range.volatility();
        let mut rng = self.rng()?;

        let platforms = Platform::ALL
            .iter()
            .map(|&platform| PlatformScores {
                platform,
                name: platform.name().to_string(),
                color: platform.color().to_string(),
                scores: platform
                    .baseline_scores()
                    .iter()
                    .map(|&base| jitter_score(base, rng.gen_range(-volatility..volatility)))
                    .collect(),
            })
            .collect();

        Ok(PlatformComparison {
            time_range,
            metrics: COMPARISON_METRICS.iter().map(|m| m.to_string()).collect(),
            platforms,
        })
    }

    async fn recent_notifications(&self, as_of: DateTime<Utc>) -> anyhow::Result<Vec<Notification>> {
        Ok(vec![
            Self::notification(
                1,
                NotificationKind::Sentiment,
                "Negative Sentiment Alert",
                "Premium Headphones receiving negative reviews on Amazon",
                as_of,
                Duration::hours(2),
            ),
            Self::notification(
                2,
                NotificationKind::Sales,
                "Sales Increase",
                "Smart Watch sales up by 15% on all platforms",
                as_of,
                Duration::hours(5),
            ),
            Self::notification(
                3,
                NotificationKind::Sales,
                "Sales Drop Alert",
                "Phone Case sales down by 8% on AliExpress",
                as_of,
                Duration::hours(12),
            ),
            Self::notification(
                4,
                NotificationKind::Email,
                "Weekly Report Sent",
                "Sales and performance report sent to john@example.com",
                as_of,
                Duration::days(1),
            ),
        ])
    }

    async fn critical_alerts(&self, as_of: DateTime<Utc>) -> anyhow::Result<Vec<Notification>> {
        Ok(vec![
            Self::notification(
                101,
                NotificationKind::Sentiment,
                "Negative Sentiment Alert",
                "Your \"Premium Headphones\" product is receiving negative reviews on Amazon.",
                as_of,
                Duration::hours(2),
            ),
            Self::notification(
                102,
                NotificationKind::Sales,
                "Sales Drop Alert",
                "Your \"Smart Watch\" sales have dropped by 15% on AliExpress in the last week.",
                as_of,
                Duration::days(1),
            ),
        ])
    }
}
