use crate::domain::layout::{ChartPreferences, Configuration, Group, ItemState, LayoutError};
use crate::domain::widget::{CardId, ChartType, SectionId, TimeRange, WidgetId};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub simulation: SimulationSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SimulationSettings {
    pub seed: Option<u64>,
}

/// Initial dashboard layout. Absent groups fall back to the default order.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct LayoutSettings {
    #[serde(default)]
    pub cards: HashMap<String, ItemSettings>,
    #[serde(default)]
    pub sections: HashMap<String, ItemSettings>,
    #[serde(default)]
    pub charts: ChartSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ItemSettings {
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub order: u32,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ChartSettings {
    #[serde(default, rename = "type")]
    pub chart_type: ChartType,
    #[serde(default)]
    pub time_range: TimeRange,
}

impl LayoutSettings {
    pub fn into_configuration(self) -> Result<Configuration, LayoutError> {
        Ok(Configuration::new(
            build_group::<CardId>(self.cards)?,
            build_group::<SectionId>(self.sections)?,
            ChartPreferences {
                chart_type: self.charts.chart_type,
                time_range: self.charts.time_range,
            },
        ))
    }
}

fn build_group<K: WidgetId>(items: HashMap<String, ItemSettings>) -> Result<Group<K>, LayoutError> {
    if items.is_empty() {
        return Ok(Group::default());
    }

    let mut entries = Vec::with_capacity(items.len());
    for (key, item) in items {
        entries.push((
            K::parse_key(&key)?,
            ItemState {
                visible: item.visible,
                order: item.order,
            },
        ));
    }
    Group::new(entries)
}

/// Load `config/dashboard.*` (optional) with `CLICKANALYST__` environment overrides.
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(
            config::Environment::with_prefix("CLICKANALYST")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn parse(toml: &str) -> AppConfig {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let app = parse("");
        assert_eq!(app.server.bind, "0.0.0.0:8080");
        assert_eq!(app.simulation.seed, None);
        assert_eq!(app.layout.into_configuration().unwrap(), Configuration::default());
    }

    #[test]
    fn test_layout_tables() {
        let app = parse(
            r#"
            [server]
            bind = "127.0.0.1:9000"

            [simulation]
            seed = 11

            [layout.cards]
            revenue = { order = 4 }
            orders = { order = 1 }
            customers = { order = 2, visible = false }
            conversion = { order = 3 }

            [layout.charts]
            type = "bar"
            time_range = "7d"
            "#,
        );
        assert_eq!(app.server.bind, "127.0.0.1:9000");
        assert_eq!(app.simulation.seed, Some(11));

        let config = app.layout.into_configuration().unwrap();
        assert_eq!(
            config.visible_ordered::<CardId>(),
            vec![CardId::Orders, CardId::Conversion, CardId::Revenue]
        );
        assert_eq!(config.group::<SectionId>(), &Group::<SectionId>::default());
        assert_eq!(config.chart_preferences().chart_type, ChartType::Bar);
        assert_eq!(config.chart_preferences().time_range, TimeRange::Week);
    }

    #[test]
    fn test_invalid_layouts_are_rejected() {
        let unknown = parse(
            r#"
            [layout.cards]
            profit = { order = 1 }
            "#,
        );
        assert_eq!(
            unknown.layout.into_configuration().unwrap_err(),
            LayoutError::UnknownWidget("profit".to_string())
        );

        let gap = parse(
            r#"
            [layout.sections]
            overview = { order = 1 }
            sales = { order = 2 }
            sentiment = { order = 3 }
            platforms = { order = 4 }
            forecast = { order = 5 }
            alerts = { order = 7 }
            "#,
        );
        assert!(matches!(
            gap.layout.into_configuration(),
            Err(LayoutError::InvalidOrdering { expected: 6, .. })
        ));
    }
}
