// Widget identifiers and chart preference enums
use super::layout::{Configuration, Group, LayoutError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

/// A closed set of dashboard widgets that share one ordering group.
pub trait WidgetId:
    Copy + Ord + Hash + fmt::Debug + Serialize + Send + Sync + 'static
{
    /// Every member, in default display order.
    const ALL: &'static [Self];

    /// Stable key used on the wire and in configuration files.
    fn key(self) -> &'static str;

    /// Human readable name shown in the customizer.
    fn label(self) -> &'static str;

    fn group(config: &Configuration) -> &Group<Self>;

    fn group_mut(config: &mut Configuration) -> &mut Group<Self>;

    fn parse_key(key: &str) -> Result<Self, LayoutError> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.key() == key)
            .ok_or_else(|| LayoutError::UnknownWidget(key.to_string()))
    }
}

/// Summary cards shown above the section tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardId {
    Revenue,
    Orders,
    Customers,
    Conversion,
}

impl WidgetId for CardId {
    const ALL: &'static [Self] = &[
        CardId::Revenue,
        CardId::Orders,
        CardId::Customers,
        CardId::Conversion,
    ];

    fn key(self) -> &'static str {
        match self {
            CardId::Revenue => "revenue",
            CardId::Orders => "orders",
            CardId::Customers => "customers",
            CardId::Conversion => "conversion",
        }
    }

    fn label(self) -> &'static str {
        match self {
            CardId::Revenue => "Total Revenue",
            CardId::Orders => "Total Orders",
            CardId::Customers => "Active Customers",
            CardId::Conversion => "Conversion Rate",
        }
    }

    fn group(config: &Configuration) -> &Group<Self> {
        &config.cards
    }

    fn group_mut(config: &mut Configuration) -> &mut Group<Self> {
        &mut config.cards
    }
}

/// Page sections below the summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Overview,
    Sales,
    Sentiment,
    Platforms,
    Forecast,
    Alerts,
}

impl SectionId {
    pub fn description(self) -> &'static str {
        match self {
            SectionId::Overview => "Monthly sales performance across all platforms",
            SectionId::Sales => "Detailed analysis of sales across products and platforms",
            SectionId::Sentiment => "Customer sentiment for your products across platforms",
            SectionId::Platforms => "Performance comparison across e-commerce platforms",
            SectionId::Forecast => "Projected sales for the next 30 days",
            SectionId::Alerts => "Important notifications requiring attention",
        }
    }
}

impl WidgetId for SectionId {
    const ALL: &'static [Self] = &[
        SectionId::Overview,
        SectionId::Sales,
        SectionId::Sentiment,
        SectionId::Platforms,
        SectionId::Forecast,
        SectionId::Alerts,
    ];

    fn key(self) -> &'static str {
        match self {
            SectionId::Overview => "overview",
            SectionId::Sales => "sales",
            SectionId::Sentiment => "sentiment",
            SectionId::Platforms => "platforms",
            SectionId::Forecast => "forecast",
            SectionId::Alerts => "alerts",
        }
    }

    fn label(self) -> &'static str {
        match self {
            SectionId::Overview => "Overview",
            SectionId::Sales => "Sales Performance",
            SectionId::Sentiment => "Sentiment Analysis",
            SectionId::Platforms => "Platform Comparison",
            SectionId::Forecast => "Forecasted Sales",
            SectionId::Alerts => "Critical Alerts",
        }
    }

    fn group(config: &Configuration) -> &Group<Self> {
        &config.sections
    }

    fn group_mut(config: &mut Configuration) -> &mut Group<Self> {
        &mut config.sections
    }
}

impl FromStr for CardId {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_key(s)
    }
}

impl FromStr for SectionId {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_key(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Pie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[serde(rename = "1h")]
    Hour,
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
    #[serde(rename = "14d")]
    Fortnight,
    #[default]
    #[serde(rename = "30d")]
    Month,
    #[serde(rename = "90d")]
    Quarter,
    #[serde(rename = "1y")]
    Year,
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

impl TimeRange {
    pub fn label(self) -> &'static str {
        match self {
            TimeRange::Hour => "Hourly",
            TimeRange::Day => "Last 24 Hours",
            TimeRange::Week => "Last 7 Days",
            TimeRange::Fortnight => "Last 14 Days",
            TimeRange::Month => "Monthly",
            TimeRange::Quarter => "Quarterly",
            TimeRange::Year => "Yearly",
        }
    }

    /// X-axis labels for a sales chart covering this range.
    pub fn axis_labels(self) -> Vec<String> {
        match self {
            TimeRange::Hour => (0..60).map(|i| format!("{}:{:02}", i / 60, i % 60)).collect(),
            TimeRange::Day => (0..24).map(|i| format!("{}:00", i)).collect(),
            TimeRange::Week => ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            TimeRange::Fortnight => (1..=14).map(|i| format!("Day {}", i)).collect(),
            TimeRange::Month => (1..=30).map(|i| format!("Day {}", i)).collect(),
            TimeRange::Quarter => MONTHS[..3].iter().map(|m| m.to_string()).collect(),
            TimeRange::Year => MONTHS.iter().map(|m| m.to_string()).collect(),
        }
    }

    /// Scale applied to synthetic sales figures so short ranges read smaller.
    pub fn volume_multiplier(self) -> f64 {
        match self {
            TimeRange::Hour => 0.05,
            TimeRange::Day => 0.2,
            TimeRange::Week => 0.5,
            TimeRange::Fortnight => 0.7,
            TimeRange::Month => 0.8,
            TimeRange::Quarter => 1.0,
            TimeRange::Year => 1.2,
        }
    }

    /// Scale applied to monthly product revenue and unit figures.
    pub fn product_multiplier(self) -> f64 {
        match self {
            TimeRange::Hour => 0.01,
            TimeRange::Day => 0.03,
            TimeRange::Week => 0.2,
            TimeRange::Fortnight => 0.4,
            TimeRange::Month => 1.0,
            TimeRange::Quarter => 3.0,
            TimeRange::Year => 12.0,
        }
    }

    /// Maximum swing, in score points, of platform comparison metrics.
    /// Shorter ranges are noisier.
    pub fn volatility(self) -> i32 {
        match self {
            TimeRange::Hour => 20,
            TimeRange::Day => 15,
            TimeRange::Week => 10,
            TimeRange::Fortnight => 7,
            TimeRange::Month => 5,
            TimeRange::Quarter => 3,
            TimeRange::Year => 2,
        }
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
