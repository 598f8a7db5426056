// Analytics data domain models
use super::widget::{ChartType, TimeRange};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Headline figure behind a summary card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMetric {
    pub value: String,
    /// Change against the previous period, in percent.
    pub change_percent: f64,
}

impl CardMetric {
    pub fn new(value: impl Into<String>, change_percent: f64) -> Self {
        Self {
            value: value.into(),
            change_percent,
        }
    }

    pub fn trend(&self) -> Trend {
        if self.change_percent < 0.0 {
            Trend::Down
        } else {
            Trend::Up
        }
    }

    /// "+20.1%" / "-1.2%"
    pub fn formatted_change(&self) -> String {
        format!("{:+.1}%", self.change_percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub color: String,
    pub fill: bool,
    pub values: Vec<i64>,
}

impl SeriesData {
    pub fn new(id: String, name: String, color: String, fill: bool, values: Vec<i64>) -> Self {
        Self {
            id,
            name,
            color,
            fill,
            values,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub chart_type: ChartType,
    pub time_range: TimeRange,
    pub x_axis: String,
    pub y_axis: String,
    pub labels: Vec<String>,
    pub series: Vec<SeriesData>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Sentiment,
    Sales,
    Email,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub raised_at: DateTime<Utc>,
}

impl Notification {
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        format_age(now.signed_duration_since(self.raised_at))
    }
}

/// Render an elapsed duration the way the notification feed does.
pub fn format_age(elapsed: chrono::Duration) -> String {
    let plural = |n: i64, unit: &str| {
        if n == 1 {
            format!("1 {} ago", unit)
        } else {
            format!("{} {}s ago", n, unit)
        }
    };

    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        plural(elapsed.num_minutes(), "minute")
    } else if elapsed.num_days() < 1 {
        plural(elapsed.num_hours(), "hour")
    } else {
        plural(elapsed.num_days(), "day")
    }
}

/// Marketplaces the dashboard compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Amazon,
    AliExpress,
    Daraz,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Amazon, Platform::AliExpress, Platform::Daraz];

    pub fn key(self) -> &'static str {
        match self {
            Platform::Amazon => "amazon",
            Platform::AliExpress => "aliexpress",
            Platform::Daraz => "daraz",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Platform::Amazon => "Amazon",
            Platform::AliExpress => "AliExpress",
            Platform::Daraz => "Daraz",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Platform::Amazon => "#3b82f6",
            Platform::AliExpress => "#f59e0b",
            Platform::Daraz => "#10b981",
        }
    }

    /// (revenue, units) weighting of product figures sold through this platform.
    pub fn sales_weight(self) -> (f64, f64) {
        match self {
            Platform::Amazon => (1.2, 1.1),
            Platform::AliExpress => (0.8, 1.3),
            Platform::Daraz => (0.6, 0.9),
        }
    }

    /// Baseline scores, in [`COMPARISON_METRICS`] order.
    pub fn baseline_scores(self) -> [u8; 6] {
        match self {
            Platform::Amazon => [85, 80, 90, 75, 85, 90],
            Platform::AliExpress => [65, 70, 60, 85, 60, 75],
            Platform::Daraz => [55, 65, 70, 90, 50, 65],
        }
    }
}

pub const COMPARISON_METRICS: [&str; 6] = [
    "Revenue",
    "Orders",
    "Customer Satisfaction",
    "Growth Rate",
    "Conversion Rate",
    "Return Rate",
];

/// Catalogue entry with its monthly revenue and units.
#[derive(Debug, Clone, Copy)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub monthly_revenue: f64,
    pub monthly_units: f64,
}

pub const PRODUCTS: [Product; 5] = [
    Product { id: "smart-watch", name: "Smart Watch", monthly_revenue: 18500.0, monthly_units: 850.0 },
    Product { id: "headphones", name: "Premium Headphones", monthly_revenue: 12300.0, monthly_units: 380.0 },
    Product { id: "phone-case", name: "Phone Case", monthly_revenue: 8500.0, monthly_units: 1250.0 },
    Product { id: "wireless-charger", name: "Wireless Charger", monthly_revenue: 5200.0, monthly_units: 420.0 },
    Product { id: "laptop-stand", name: "Laptop Stand", monthly_revenue: 4100.0, monthly_units: 280.0 },
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductFigures {
    pub id: String,
    pub name: String,
    pub revenue: i64,
    pub units: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPerformance {
    pub time_range: TimeRange,
    pub products: Vec<ProductFigures>,
}

impl ProductPerformance {
    /// Scale the catalogue to `time_range`, averaging the sales weights of
    /// `platforms`. An empty platform list means every platform, unweighted.
    pub fn build(time_range: TimeRange, platforms: &[Platform]) -> Self {
        let (revenue_weight, units_weight) = if platforms.is_empty() {
            (1.0, 1.0)
        } else {
            let (revenue, units) = platforms
                .iter()
                .map(|p| p.sales_weight())
                .fold((0.0, 0.0), |(r, u), (pr, pu)| (r + pr, u + pu));
            let count = platforms.len() as f64;
            (revenue / count, units / count)
        };
        let scale = time_range.product_multiplier();

        let products = PRODUCTS
            .iter()
            .map(|p| ProductFigures {
                id: p.id.to_string(),
                name: p.name.to_string(),
                revenue: (p.monthly_revenue * revenue_weight * scale).round() as i64,
                units: (p.monthly_units * units_weight * scale).round() as i64,
            })
            .collect();

        Self {
            time_range,
            products,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentBreakdown {
    pub positive: u8,
    pub neutral: u8,
    pub negative: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformScores {
    pub platform: Platform,
    pub name: String,
    pub color: String,
    pub scores: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformComparison {
    pub time_range: TimeRange,
    pub metrics: Vec<String>,
    pub platforms: Vec<PlatformScores>,
}

/// Shift a 0..=100 score by `jitter`, staying within 0..=100.
pub fn jitter_score(base: u8, jitter: i32) -> u8 {
    (i32::from(base) + jitter).clamp(0, 100) as u8
}
