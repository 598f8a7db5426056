// Dashboard layout configuration and ordering rules
use super::widget::{CardId, ChartType, SectionId, TimeRange, WidgetId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("unknown widget '{0}'")]
    UnknownWidget(String),
    #[error("widget '{0}' is missing from its group")]
    MissingWidget(&'static str),
    #[error("widget '{0}' appears more than once")]
    DuplicateWidget(&'static str),
    #[error("orders {found:?} are not a permutation of 1..={expected}")]
    InvalidOrdering { found: Vec<u32>, expected: usize },
    #[error("the layout editor is not open")]
    EditorClosed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemState {
    pub visible: bool,
    pub order: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

/// Outcome of an edit. Moves past either end of a group are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Applied,
    Ignored,
}

impl Change {
    pub fn applied(self) -> bool {
        self == Change::Applied
    }
}

/// One orderable group of widgets.
///
/// Every member of `K` is present exactly once and the `order` values form
/// the permutation `1..=N`. Construction checks this; the only mutations
/// are transpositions and visibility flips, which preserve it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Group<K: WidgetId> {
    items: BTreeMap<K, ItemState>,
}

impl<K: WidgetId> Group<K> {
    pub fn new(entries: impl IntoIterator<Item = (K, ItemState)>) -> Result<Self, LayoutError> {
        let mut items = BTreeMap::new();
        for (id, state) in entries {
            if items.insert(id, state).is_some() {
                return Err(LayoutError::DuplicateWidget(id.key()));
            }
        }

        if let Some(missing) = K::ALL.iter().find(|id| !items.contains_key(id)) {
            return Err(LayoutError::MissingWidget(missing.key()));
        }

        let mut orders: Vec<u32> = items.values().map(|s| s.order).collect();
        orders.sort_unstable();
        let contiguous = orders
            .iter()
            .enumerate()
            .all(|(index, order)| *order as usize == index + 1);
        if !contiguous {
            return Err(LayoutError::InvalidOrdering {
                found: orders,
                expected: K::ALL.len(),
            });
        }

        Ok(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: K) -> Option<ItemState> {
        self.items.get(&id).copied()
    }

    /// All members ascending by order, hidden ones included.
    pub fn ordered(&self) -> Vec<(K, ItemState)> {
        let mut entries: Vec<(K, ItemState)> = self.items.iter().map(|(k, s)| (*k, *s)).collect();
        entries.sort_by_key(|(_, state)| state.order);
        entries
    }

    /// Visible members ascending by order.
    pub fn visible_ordered(&self) -> Vec<K> {
        self.ordered()
            .into_iter()
            .filter(|(_, state)| state.visible)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn can_move(&self, id: K, direction: Direction) -> bool {
        match (self.get(id), direction) {
            (Some(state), Direction::Up) => state.order > 1,
            (Some(state), Direction::Down) => (state.order as usize) < self.len(),
            (None, _) => false,
        }
    }

    /// Exchange `id`'s order with its neighbour in `direction`.
    pub fn swap_order(&mut self, id: K, direction: Direction) -> Change {
        if !self.can_move(id, direction) {
            return Change::Ignored;
        }
        let Some(current) = self.get(id).map(|s| s.order) else {
            return Change::Ignored;
        };
        let target = match direction {
            Direction::Up => current - 1,
            Direction::Down => current + 1,
        };

        let sibling = self
            .items
            .iter()
            .find(|(other, state)| **other != id && state.order == target)
            .map(|(other, _)| *other);

        let Some(sibling) = sibling else {
            tracing::warn!(
                widget = id.key(),
                order = target,
                "no sibling holds the adjacent order, move ignored"
            );
            return Change::Ignored;
        };

        if let Some(state) = self.items.get_mut(&id) {
            state.order = target;
        }
        if let Some(state) = self.items.get_mut(&sibling) {
            state.order = current;
        }
        Change::Applied
    }

    /// Flip visibility. Order is left untouched so the item reappears in place.
    pub fn toggle_visible(&mut self, id: K) -> Change {
        match self.items.get_mut(&id) {
            Some(state) => {
                state.visible = !state.visible;
                Change::Applied
            }
            None => Change::Ignored,
        }
    }
}

impl<K: WidgetId> Default for Group<K> {
    fn default() -> Self {
        let items = K::ALL
            .iter()
            .enumerate()
            .map(|(index, id)| {
                (
                    *id,
                    ItemState {
                        visible: true,
                        order: index as u32 + 1,
                    },
                )
            })
            .collect();
        Self { items }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPreferences {
    #[serde(rename = "type")]
    pub chart_type: ChartType,
    pub time_range: TimeRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Configuration {
    pub(super) cards: Group<CardId>,
    pub(super) sections: Group<SectionId>,
    pub(super) chart_preferences: ChartPreferences,
}

impl Configuration {
    pub fn new(
        cards: Group<CardId>,
        sections: Group<SectionId>,
        chart_preferences: ChartPreferences,
    ) -> Self {
        Self {
            cards,
            sections,
            chart_preferences,
        }
    }

    pub fn chart_preferences(&self) -> ChartPreferences {
        self.chart_preferences
    }

    pub fn group<K: WidgetId>(&self) -> &Group<K> {
        K::group(self)
    }

    pub fn group_mut<K: WidgetId>(&mut self) -> &mut Group<K> {
        K::group_mut(self)
    }

    pub fn visible_ordered<K: WidgetId>(&self) -> Vec<K> {
        self.group::<K>().visible_ordered()
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) -> Change {
        if self.chart_preferences.chart_type == chart_type {
            return Change::Ignored;
        }
        self.chart_preferences.chart_type = chart_type;
        Change::Applied
    }

    pub fn set_time_range(&mut self, time_range: TimeRange) -> Change {
        if self.chart_preferences.time_range == time_range {
            return Change::Ignored;
        }
        self.chart_preferences.time_range = time_range;
        Change::Applied
    }
}
