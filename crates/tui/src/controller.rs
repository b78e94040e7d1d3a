// crates/tui/src/controller.rs
//! Gesture handling: turns user actions into library changes
//!
//! Every handled gesture that can change the library ends with a fresh
//! [`project`] call, so [`Controller::view`] always matches the library.

use crate::form::{BookForm, FormIssue};
use crate::view::{project, ActionKind, CardAction, LibraryView};
use log::{debug, info};
use shelfmark_core::{Book, BookId};
use shelfmark_library::Library;

/// Visibility of the add-book panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Closed,
    Open,
}

/// Result of a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A book was added and the panel closed
    Added(BookId),
    /// Nothing was added; the panel stays open
    Rejected(Vec<FormIssue>),
    /// The panel was closed, so there was nothing to submit
    Ignored,
}

/// Result of activating a card action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Toggled { id: BookId, read: bool },
    Removed(Book),
    /// The id did not match any book
    Missing(BookId),
    /// The raw action could not be understood
    Ignored,
}

/// Owns the session's library and the add-book panel
#[derive(Debug)]
pub struct Controller {
    library: Library,
    panel: Panel,
    form: BookForm,
    view: LibraryView,
}

impl Controller {
    /// Starts a session with an empty library and a closed panel
    pub fn new() -> Self {
        Self::with_library(Library::new())
    }

    /// Starts a session around an existing library
    pub fn with_library(library: Library) -> Self {
        let view = project(&library);
        Self {
            library,
            panel: Panel::Closed,
            form: BookForm::new(),
            view,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// The projection of the library after the last gesture
    pub fn view(&self) -> &LibraryView {
        &self.view
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel == Panel::Open
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    /// Mutable access to the form while the panel is open
    pub fn form_mut(&mut self) -> Option<&mut BookForm> {
        match self.panel {
            Panel::Open => Some(&mut self.form),
            Panel::Closed => None,
        }
    }

    /// Shows the panel with focus on the title; existing input is kept
    pub fn open_panel(&mut self) {
        self.panel = Panel::Open;
        self.form.set_focus(Default::default());
    }

    /// Hides the panel and clears its input
    pub fn close_panel(&mut self) {
        self.panel = Panel::Closed;
        self.form.reset();
    }

    /// Submits the form
    ///
    /// Invalid input creates nothing and leaves the panel open with the
    /// input intact.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.panel == Panel::Closed {
            return SubmitOutcome::Ignored;
        }

        let draft = match self.form.validate() {
            Ok(draft) => draft,
            Err(issues) => {
                debug!("Rejected submission: {:?}", issues);
                return SubmitOutcome::Rejected(issues);
            }
        };

        let id = self
            .library
            .add(draft.title, draft.author, draft.pages, draft.read);
        info!("Added book {}", id);
        self.refresh();
        self.close_panel();
        SubmitOutcome::Added(id)
    }

    /// Dispatches a card action and re-projects
    pub fn activate(&mut self, action: CardAction) -> ActionOutcome {
        let outcome = match action.kind {
            ActionKind::Toggle => match self.library.toggle_read(action.id) {
                Some(read) => ActionOutcome::Toggled {
                    id: action.id,
                    read,
                },
                None => ActionOutcome::Missing(action.id),
            },
            ActionKind::Remove => match self.library.remove_by_id(action.id) {
                Some(book) => ActionOutcome::Removed(book),
                None => ActionOutcome::Missing(action.id),
            },
        };

        if let ActionOutcome::Missing(id) = outcome {
            debug!("{} on unknown book {}", action.kind, id);
        }

        self.refresh();
        outcome
    }

    /// Dispatches an action given as text tokens
    ///
    /// Unknown kinds and malformed ids are ignored.
    pub fn activate_raw(&mut self, kind: &str, id: &str) -> ActionOutcome {
        let kind = match kind.parse::<ActionKind>() {
            Ok(kind) => kind,
            Err(()) => {
                debug!("Ignoring unknown action '{}'", kind);
                return ActionOutcome::Ignored;
            }
        };

        match BookId::parse(id) {
            Ok(id) => self.activate(CardAction { kind, id }),
            Err(e) => {
                debug!("Ignoring {} action: {}", kind, e);
                ActionOutcome::Ignored
            }
        }
    }

    fn refresh(&mut self) {
        self.view = project(&self.library);
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormField;

    fn fill(controller: &mut Controller, title: &str, author: &str, pages: &str, read: bool) {
        let form = controller.form_mut().expect("panel should be open");
        form.set_title(title);
        form.set_author(author);
        form.set_pages(pages);
        form.set_read(read);
    }

    #[test]
    fn test_starts_closed_and_empty() {
        let controller = Controller::new();
        assert_eq!(controller.panel(), Panel::Closed);
        assert!(controller.view().is_empty_state());
        assert!(controller.library().is_empty());
    }

    #[test]
    fn test_form_is_locked_while_closed() {
        let mut controller = Controller::new();
        assert!(controller.form_mut().is_none());
        assert_eq!(controller.submit(), SubmitOutcome::Ignored);
    }

    #[test]
    fn test_submit_adds_and_closes() {
        let mut controller = Controller::new();
        controller.open_panel();
        fill(&mut controller, "Dune", "Frank Herbert", "412", false);

        let id = match controller.submit() {
            SubmitOutcome::Added(id) => id,
            other => panic!("unexpected outcome {:?}", other),
        };

        assert_eq!(controller.panel(), Panel::Closed);
        assert_eq!(controller.form(), &BookForm::new());
        assert_eq!(controller.view().card_count(), 1);
        assert_eq!(controller.view().cards()[0].id, id);
    }

    #[test]
    fn test_rejected_submit_keeps_panel_and_input() {
        let mut controller = Controller::new();
        controller.open_panel();
        fill(&mut controller, "Dune", "Frank Herbert", "0", false);

        assert_eq!(
            controller.submit(),
            SubmitOutcome::Rejected(vec![FormIssue::InvalidPages])
        );
        assert!(controller.is_panel_open());
        assert_eq!(controller.form().title(), "Dune");
        assert!(controller.library().is_empty());
        assert!(controller.view().is_empty_state());
    }

    #[test]
    fn test_close_resets_and_reopen_shows_nothing_stale() {
        let mut controller = Controller::new();
        controller.open_panel();
        fill(&mut controller, "Dune", "", "", true);
        controller.close_panel();
        controller.open_panel();

        assert_eq!(controller.form(), &BookForm::new());
    }

    #[test]
    fn test_open_keeps_input_and_focuses_title() {
        let mut controller = Controller::new();
        controller.open_panel();
        fill(&mut controller, "Dune", "", "", false);
        controller.form_mut().unwrap().set_focus(FormField::Pages);

        controller.open_panel();
        assert_eq!(controller.form().title(), "Dune");
        assert_eq!(controller.form().focus(), FormField::Title);
    }

    #[test]
    fn test_activate_toggle_and_remove() {
        let mut library = Library::new();
        let id = library.add("Dune", "Frank Herbert", 412, false);
        let mut controller = Controller::with_library(library);

        assert_eq!(
            controller.activate(CardAction::toggle(id)),
            ActionOutcome::Toggled { id, read: true }
        );
        assert_eq!(controller.view().cards()[0].status_label(), "Read");

        match controller.activate(CardAction::remove(id)) {
            ActionOutcome::Removed(book) => assert_eq!(book.id(), id),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert!(controller.view().is_empty_state());
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let mut library = Library::new();
        library.add("Dune", "Frank Herbert", 412, false);
        let mut controller = Controller::with_library(library);
        let before = controller.view().clone();

        let stranger = BookId::new();
        assert_eq!(
            controller.activate(CardAction::remove(stranger)),
            ActionOutcome::Missing(stranger)
        );
        assert_eq!(controller.view(), &before);
    }

    #[test]
    fn test_activate_raw() {
        let mut library = Library::new();
        let id = library.add("Dune", "Frank Herbert", 412, false);
        let mut controller = Controller::with_library(library);

        assert_eq!(
            controller.activate_raw("toggle", &id.to_string()),
            ActionOutcome::Toggled { id, read: true }
        );
        assert_eq!(controller.activate_raw("explode", &id.to_string()), ActionOutcome::Ignored);
        assert_eq!(controller.activate_raw("remove", "not-an-id"), ActionOutcome::Ignored);
        assert_eq!(controller.activate_raw("remove", ""), ActionOutcome::Ignored);
        assert_eq!(controller.library().len(), 1);
    }
}
