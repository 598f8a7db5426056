// Live layout configuration store
use crate::application::layout_editor::LayoutEditor;
use crate::domain::layout::Configuration;
use crate::domain::widget::WidgetId;

/// Owns the committed configuration. Readers get shared references; the
/// only way to change it is a whole-object replace or committing an editor.
#[derive(Debug, Clone, Default)]
pub struct LayoutStore {
    live: Configuration,
}

impl LayoutStore {
    pub fn new(initial: Configuration) -> Self {
        Self { live: initial }
    }

    pub fn current(&self) -> &Configuration {
        &self.live
    }

    pub fn visible_ordered<K: WidgetId>(&self) -> Vec<K> {
        self.live.visible_ordered::<K>()
    }

    /// Swap in a new configuration, returning the previous one.
    pub fn replace(&mut self, next: Configuration) -> Configuration {
        std::mem::replace(&mut self.live, next)
    }

    pub fn begin_edit(&self) -> LayoutEditor {
        LayoutEditor::new(&self.live)
    }

    pub fn commit(&mut self, editor: LayoutEditor) -> &Configuration {
        self.replace(editor.finish());
        &self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::layout::Direction;
    use crate::domain::widget::{CardId, SectionId};

    #[test]
    fn test_visible_ordered_reads_live_state() {
        let store = LayoutStore::default();
        assert_eq!(store.visible_ordered::<CardId>(), CardId::ALL.to_vec());
        assert_eq!(store.visible_ordered::<SectionId>().len(), 6);
    }

    #[test]
    fn test_replace_is_whole_object() {
        let mut store = LayoutStore::default();
        let mut next = Configuration::default();
        next.group_mut::<SectionId>().toggle_visible(SectionId::Sales);
        next.group_mut::<CardId>().swap_order(CardId::Conversion, Direction::Up);

        let previous = store.replace(next.clone());
        assert_eq!(previous, Configuration::default());
        assert_eq!(store.current(), &next);
    }

    #[test]
    fn test_editing_does_not_touch_live_until_commit() {
        let mut store = LayoutStore::default();
        let mut editor = store.begin_edit();
        editor.toggle_visible(CardId::Revenue);

        assert_eq!(store.visible_ordered::<CardId>().len(), 4);
        store.commit(editor);
        assert_eq!(
            store.visible_ordered::<CardId>(),
            vec![CardId::Orders, CardId::Customers, CardId::Conversion]
        );
    }
}
