// Staged layout editing
use crate::domain::layout::{ChartPreferences, Change, Configuration, Direction};
use crate::domain::widget::{CardId, ChartType, SectionId, TimeRange, WidgetId};
use serde::{Deserialize, Serialize};

/// A single edit as sent by the customizer dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum EditAction {
    ToggleCard { id: CardId },
    MoveCard { id: CardId, direction: Direction },
    ToggleSection { id: SectionId },
    MoveSection { id: SectionId, direction: Direction },
    SetChartType { chart_type: ChartType },
    SetTimeRange { time_range: TimeRange },
}

/// Working copy of the layout. Nothing here is visible on the dashboard
/// until the editor is handed back to [`LayoutStore::commit`].
///
/// [`LayoutStore::commit`]: crate::application::layout_store::LayoutStore::commit
#[derive(Debug, Clone)]
pub struct LayoutEditor {
    staged: Configuration,
}

impl LayoutEditor {
    pub fn new(live: &Configuration) -> Self {
        Self {
            staged: live.clone(),
        }
    }

    pub fn staged(&self) -> &Configuration {
        &self.staged
    }

    pub fn swap_order<K: WidgetId>(&mut self, id: K, direction: Direction) -> Change {
        self.staged.group_mut::<K>().swap_order(id, direction)
    }

    pub fn toggle_visible<K: WidgetId>(&mut self, id: K) -> Change {
        self.staged.group_mut::<K>().toggle_visible(id)
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) -> Change {
        self.staged.set_chart_type(chart_type)
    }

    pub fn set_time_range(&mut self, time_range: TimeRange) -> Change {
        self.staged.set_time_range(time_range)
    }

    pub fn apply(&mut self, action: EditAction) -> Change {
        match action {
            EditAction::ToggleCard { id } => self.toggle_visible(id),
            EditAction::MoveCard { id, direction } => self.swap_order(id, direction),
            EditAction::ToggleSection { id } => self.toggle_visible(id),
            EditAction::MoveSection { id, direction } => self.swap_order(id, direction),
            EditAction::SetChartType { chart_type } => self.set_chart_type(chart_type),
            EditAction::SetTimeRange { time_range } => self.set_time_range(time_range),
        }
    }

    pub fn view(&self) -> EditorView {
        EditorView {
            cards: controls::<CardId>(&self.staged),
            sections: controls::<SectionId>(&self.staged),
            chart_preferences: self.staged.chart_preferences(),
        }
    }

    pub fn finish(self) -> Configuration {
        self.staged
    }
}

/// The staged layout as the customizer lists it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorView {
    pub cards: Vec<ItemControl>,
    pub sections: Vec<ItemControl>,
    pub chart_preferences: ChartPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemControl {
    pub id: &'static str,
    pub label: &'static str,
    pub visible: bool,
    pub order: u32,
    pub can_move_up: bool,
    pub can_move_down: bool,
}

fn controls<K: WidgetId>(config: &Configuration) -> Vec<ItemControl> {
    let group = config.group::<K>();
    group
        .ordered()
        .into_iter()
        .map(|(id, state)| ItemControl {
            id: id.key(),
            label: id.label(),
            visible: state.visible,
            order: state.order,
            can_move_up: group.can_move(id, Direction::Up),
            can_move_down: group.can_move(id, Direction::Down),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::layout_store::LayoutStore;
    use proptest::prelude::*;

    #[test]
    fn test_edit_action_wire_format() {
        let action: EditAction =
            serde_json::from_str(r#"{"action":"moveCard","id":"orders","direction":"up"}"#).unwrap();
        assert_eq!(
            action,
            EditAction::MoveCard {
                id: CardId::Orders,
                direction: Direction::Up
            }
        );

        let action: EditAction =
            serde_json::from_str(r#"{"action":"setTimeRange","timeRange":"7d"}"#).unwrap();
        assert_eq!(
            action,
            EditAction::SetTimeRange {
                time_range: TimeRange::Week
            }
        );

        let unknown = serde_json::from_str::<EditAction>(r#"{"action":"toggleCard","id":"profit"}"#);
        assert!(unknown.is_err());
    }

    #[test]
    fn test_view_disables_edge_moves() {
        let editor = LayoutStore::default().begin_edit();
        let view = editor.view();

        let first = &view.cards[0];
        assert_eq!(first.id, "revenue");
        assert_eq!(first.label, "Total Revenue");
        assert!(!first.can_move_up);
        assert!(first.can_move_down);

        let last = view.sections.last().unwrap();
        assert_eq!(last.id, "alerts");
        assert!(last.can_move_up);
        assert!(!last.can_move_down);
    }

    #[test]
    fn test_view_lists_hidden_items_in_place() {
        let mut editor = LayoutStore::default().begin_edit();
        editor.apply(EditAction::ToggleSection {
            id: SectionId::Sentiment,
        });
        let view = editor.view();
        assert_eq!(view.sections[2].id, "sentiment");
        assert!(!view.sections[2].visible);
    }

    #[test]
    fn test_confirm_replaces_live_with_staged() {
        let mut store = LayoutStore::default();
        let mut editor = store.begin_edit();
        editor.apply(EditAction::MoveCard {
            id: CardId::Orders,
            direction: Direction::Up,
        });
        editor.apply(EditAction::ToggleCard {
            id: CardId::Customers,
        });
        editor.apply(EditAction::SetChartType {
            chart_type: ChartType::Bar,
        });
        let staged = editor.staged().clone();

        let committed = store.commit(editor).clone();
        assert_eq!(committed, staged);
        assert_eq!(store.current(), &staged);
        assert_eq!(
            store.visible_ordered::<CardId>(),
            vec![CardId::Orders, CardId::Revenue, CardId::Conversion]
        );
        assert_eq!(store.current().group::<CardId>().get(CardId::Customers).unwrap().order, 3);
    }

    fn direction() -> impl Strategy<Value = Direction> {
        prop_oneof![Just(Direction::Up), Just(Direction::Down)]
    }

    fn action_strategy() -> impl Strategy<Value = EditAction> {
        prop_oneof![
            prop::sample::select(CardId::ALL).prop_map(|id| EditAction::ToggleCard { id }),
            (prop::sample::select(CardId::ALL), direction())
                .prop_map(|(id, direction)| EditAction::MoveCard { id, direction }),
            prop::sample::select(SectionId::ALL).prop_map(|id| EditAction::ToggleSection { id }),
            (prop::sample::select(SectionId::ALL), direction())
                .prop_map(|(id, direction)| EditAction::MoveSection { id, direction }),
            prop_oneof![Just(ChartType::Line), Just(ChartType::Bar), Just(ChartType::Pie)]
                .prop_map(|chart_type| EditAction::SetChartType { chart_type }),
        ]
    }

    proptest! {
        #[test]
        fn prop_dropping_editor_leaves_live_untouched(
            actions in prop::collection::vec(action_strategy(), 0..32)
        ) {
            let store = LayoutStore::default();
            let before = store.current().clone();
            let mut editor = store.begin_edit();
            for action in actions {
                editor.apply(action);
            }
            drop(editor);
            prop_assert_eq!(store.current(), &before);
        }
    }
}
