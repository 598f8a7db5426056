// Dashboard session - live layout plus the customizer's open/closed state
use crate::application::layout_editor::{EditAction, LayoutEditor};
use crate::application::layout_store::LayoutStore;
use crate::domain::layout::{Change, Configuration, LayoutError};
use crate::domain::widget::{CardId, SectionId};

/// One user's dashboard: the committed layout and, while the customizer is
/// open, its staged copy.
#[derive(Debug, Clone, Default)]
pub struct DashboardSession {
    store: LayoutStore,
    /// `Some` while the customizer is open.
    editor: Option<LayoutEditor>,
}

impl DashboardSession {
    pub fn new(initial: Configuration) -> Self {
        Self {
            store: LayoutStore::new(initial),
            editor: None,
        }
    }

    pub fn live(&self) -> &Configuration {
        self.store.current()
    }

    pub fn editor(&self) -> Option<&LayoutEditor> {
        self.editor.as_ref()
    }

    /// Open the customizer. Reopening discards any staged edits and starts
    /// again from the live layout.
    pub fn open(&mut self) -> &LayoutEditor {
        if self.editor.is_some() {
            tracing::debug!("customizer reopened, restarting from live layout");
        }
        self.editor.insert(self.store.begin_edit())
    }

    pub fn apply(&mut self, action: EditAction) -> Result<(Change, &LayoutEditor), LayoutError> {
        let editor = self.editor.as_mut().ok_or(LayoutError::EditorClosed)?;
        let change = editor.apply(action);
        tracing::debug!(?action, ?change, "staged edit");
        Ok((change, &*editor))
    }

    pub fn confirm(&mut self) -> Result<&Configuration, LayoutError> {
        let editor = self.editor.take().ok_or(LayoutError::EditorClosed)?;
        self.store.commit(editor);
        tracing::info!(
            cards = ?self.store.visible_ordered::<CardId>(),
            sections = ?self.store.visible_ordered::<SectionId>(),
            "dashboard layout committed"
        );
        Ok(self.store.current())
    }

    /// Close the customizer without committing. Closing an already closed
    /// customizer does nothing.
    pub fn cancel(&mut self) -> &Configuration {
        if self.editor.take().is_some() {
            tracing::debug!("customizer cancelled, staged edits discarded");
        }
        self.store.current()
    }
}
