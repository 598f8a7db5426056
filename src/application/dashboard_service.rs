// Dashboard service - Projects the layout configuration into a dashboard view
use crate::application::analytics_repository::AnalyticsRepository;
use crate::domain::analytics::Notification;
use crate::domain::dashboard::{CardView, Dashboard, NoticeView, SectionContent, SectionView};
use crate::domain::layout::Configuration;
use crate::domain::widget::{CardId, SectionId, WidgetId};
use chrono::{DateTime, Utc};
use std::sync::Arc;

const DASHBOARD_TITLE: &str = "Your e-commerce performance at a glance";
const CARD_CAPTION: &str = "Compared to last month";

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn AnalyticsRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn AnalyticsRepository>) -> Self {
        Self { repository }
    }

    /// Render the visible cards and sections in configured order.
    pub async fn render(&self, config: &Configuration) -> anyhow::Result<Dashboard> {
        self.render_at(config, Utc::now()).await
    }

    /// Render as of `now`; notification ages are measured against it.
    pub async fn render_at(
        &self,
        config: &Configuration,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Dashboard> {
        let cards = self.fetch_cards(config).await;
        let sections = self.build_sections(config, now).await?;

        Ok(Dashboard::new(
            DASHBOARD_TITLE.to_string(),
            now,
            config.chart_preferences(),
            cards,
            sections,
        ))
    }

    async fn fetch_cards(&self, config: &Configuration) -> Vec<CardView> {
        let mut cards = Vec::new();

        for card in config.visible_ordered::<CardId>() {
            match self.repository.card_metric(card).await {
                Ok(metric) => cards.push(CardView {
                    id: card,
                    title: card.label().to_string(),
                    change: metric.formatted_change(),
                    trend: metric.trend(),
                    value: metric.value,
                    caption: CARD_CAPTION.to_string(),
                }),
                Err(e) => {
                    tracing::warn!(card = card.key(), "Error fetching card metric: {}", e);
                }
            }
        }

        cards
    }

    async fn build_sections(
        &self,
        config: &Configuration,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Vec<SectionView>> {
        let preferences = config.chart_preferences();
        let time_range = preferences.time_range;
        let mut sections = Vec::new();

        for section in config.visible_ordered::<SectionId>() {
            let content = match section {
                SectionId::Overview => SectionContent::Overview {
                    chart: self.repository.sales_chart(preferences).await?,
                    notifications: notices(self.repository.recent_notifications(now).await?, now),
                },
                SectionId::Sales => SectionContent::Products {
                    performance: self.repository.product_performance(time_range).await?,
                },
                SectionId::Sentiment => SectionContent::Sentiment {
                    breakdown: self.repository.sentiment_breakdown(time_range).await?,
                },
                SectionId::Platforms => SectionContent::Platforms {
                    comparison: self.repository.platform_comparison(time_range).await?,
                },
                SectionId::Forecast => SectionContent::Chart {
                    chart: self.repository.sales_chart(preferences).await?,
                },
                SectionId::Alerts => SectionContent::Alerts {
                    alerts: notices(self.repository.critical_alerts(now).await?, now),
                },
            };

            sections.push(SectionView {
                id: section,
                title: section.label().to_string(),
                description: section.description().to_string(),
                content,
            });
        }

        Ok(sections)
    }
}

fn notices(notifications: Vec<Notification>, now: DateTime<Utc>) -> Vec<NoticeView> {
    notifications
        .into_iter()
        .map(|n| NoticeView {
            time: n.age_label(now),
            title: n.title,
            description: n.description,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::{
        CardMetric, ChartData, NotificationKind, PlatformComparison, ProductPerformance,
        SentimentBreakdown,
    };
    use crate::domain::layout::{ChartPreferences, Direction};
    use crate::domain::widget::TimeRange;
    use async_trait::async_trait;
    use chrono::Duration;

    struct FixedAnalytics;

    #[async_trait]
    impl AnalyticsRepository for FixedAnalytics {
        async fn card_metric(&self, card: CardId) -> anyhow::Result<CardMetric> {
            match card {
                CardId::Conversion => anyhow::bail!("conversion feed offline"),
                _ => Ok(CardMetric::new(card.key(), 1.5)),
            }
        }

        async fn sales_chart(&self, preferences: ChartPreferences) -> anyhow::Result<ChartData> {
            Ok(ChartData {
                id: "sales".to_string(),
                title: "Sales".to_string(),
                chart_type: preferences.chart_type,
                time_range: preferences.time_range,
                x_axis: String::new(),
                y_axis: String::new(),
                labels: preferences.time_range.axis_labels(),
                series: Vec::new(),
            })
        }

        async fn product_performance(&self, time_range: TimeRange) -> anyhow::Result<ProductPerformance> {
            Ok(ProductPerformance::build(time_range, &[]))
        }

        async fn sentiment_breakdown(&self, _time_range: TimeRange) -> anyhow::Result<SentimentBreakdown> {
            Ok(SentimentBreakdown {
                positive: 50,
                neutral: 30,
                negative: 20,
            })
        }

        async fn platform_comparison(&self, time_range: TimeRange) -> anyhow::Result<PlatformComparison> {
            Ok(PlatformComparison {
                time_range,
                metrics: vec!["Revenue".to_string()],
                platforms: Vec::new(),
            })
        }

        async fn recent_notifications(&self, as_of: DateTime<Utc>) -> anyhow::Result<Vec<Notification>> {
            Ok(vec![Notification {
                id: 1,
                kind: NotificationKind::Sales,
                title: "Sales Increase".to_string(),
                description: "up".to_string(),
                raised_at: as_of - Duration::hours(5),
            }])
        }

        async fn critical_alerts(&self, _as_of: DateTime<Utc>) -> anyhow::Result<Vec<Notification>> {
            Ok(vec![Notification {
                id: 2,
                kind: NotificationKind::Sentiment,
                title: "Negative Sentiment Alert".to_string(),
                description: "reviews".to_string(),
                raised_at: fixed_instant() - Duration::minutes(90),
            }])
        }
    }

    fn fixed_instant() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-02T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn service() -> DashboardService {
        DashboardService::new(Arc::new(FixedAnalytics))
    }

    #[tokio::test]
    async fn test_render_follows_configured_order() {
        let mut config = Configuration::default();
        config.group_mut::<CardId>().swap_order(CardId::Orders, Direction::Up);
        config.group_mut::<SectionId>().swap_order(SectionId::Alerts, Direction::Up);
        config.group_mut::<SectionId>().toggle_visible(SectionId::Sales);

        let dashboard = service().render(&config).await.unwrap();

        let card_ids: Vec<CardId> = dashboard.cards.iter().map(|c| c.id).collect();
        assert_eq!(card_ids, vec![CardId::Orders, CardId::Revenue, CardId::Customers]);

        let section_ids: Vec<SectionId> = dashboard.sections.iter().map(|s| s.id).collect();
        assert_eq!(
            section_ids,
            vec![
                SectionId::Overview,
                SectionId::Sentiment,
                SectionId::Platforms,
                SectionId::Alerts,
                SectionId::Forecast,
            ]
        );
    }

    #[tokio::test]
    async fn test_render_empty_layout() {
        let mut config = Configuration::default();
        for card in CardId::ALL {
            config.group_mut::<CardId>().toggle_visible(*card);
        }
        for section in SectionId::ALL {
            config.group_mut::<SectionId>().toggle_visible(*section);
        }

        let dashboard = service().render(&config).await.unwrap();
        assert!(dashboard.cards.is_empty());
        assert!(dashboard.sections.is_empty());
    }

    #[tokio::test]
    async fn test_overview_content() {
        let config = Configuration::default();
        let dashboard = service().render_at(&config, fixed_instant()).await.unwrap();
        assert_eq!(dashboard.generated_at, fixed_instant());

        let overview = &dashboard.sections[0];
        assert_eq!(overview.title, "Overview");
        match &overview.content {
            SectionContent::Overview {
                chart,
                notifications,
            } => {
                assert_eq!(chart.labels.len(), 30);
                assert_eq!(notifications[0].time, "5 hours ago");
            }
            other => panic!("unexpected overview content: {:?}", other),
        }

        let revenue = &dashboard.cards[0];
        assert_eq!(revenue.title, "Total Revenue");
        assert_eq!(revenue.change, "+1.5%");
        assert_eq!(revenue.caption, "Compared to last month");
    }

    #[tokio::test]
    async fn test_alert_ages_measured_from_render_time() {
        let config = Configuration::default();
        let now = fixed_instant() + Duration::hours(1);
        let dashboard = service().render_at(&config, now).await.unwrap();

        let alerts = dashboard.sections.iter().find(|s| s.id == SectionId::Alerts).unwrap();
        match &alerts.content {
            SectionContent::Alerts { alerts } => assert_eq!(alerts[0].time, "2 hours ago"),
            other => panic!("unexpected alerts content: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_data_sections_follow_time_range() {
        let mut config = Configuration::default();
        config.set_time_range(TimeRange::Year);
        let dashboard = service().render_at(&config, fixed_instant()).await.unwrap();

        for section in &dashboard.sections {
            match (&section.id, &section.content) {
                (SectionId::Sales, SectionContent::Products { performance }) => {
                    assert_eq!(performance.time_range, TimeRange::Year);
                    assert_eq!(performance.products[0].revenue, 222000);
                }
                (SectionId::Sentiment, SectionContent::Sentiment { breakdown }) => {
                    assert_eq!(breakdown.positive, 50);
                }
                (SectionId::Platforms, SectionContent::Platforms { comparison }) => {
                    assert_eq!(comparison.time_range, TimeRange::Year);
                }
                (SectionId::Overview, SectionContent::Overview { .. })
                | (SectionId::Forecast, SectionContent::Chart { .. })
                | (SectionId::Alerts, SectionContent::Alerts { .. }) => {}
                (id, content) => panic!("{:?} rendered as {:?}", id, content),
            }
        }

        let json = serde_json::to_value(&dashboard.sections[1]).unwrap();
        assert_eq!(json["content"]["kind"], "products");
        assert_eq!(json["content"]["performance"]["timeRange"], "1y");
    }
}
