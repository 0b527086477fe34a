use crate::entries::{Entry, Logbook};
use time::OffsetDateTime;
use uuid::Uuid;

pub const SAVE_LABEL: &str = "Save Entry";
pub const UPDATE_LABEL: &str = "Update Entry";

/// What a submit does with the drafts: append a new entry, or rewrite the
/// one being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Creating,
    Editing(Uuid),
}

/// Outcome of a submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    Created(Uuid),
    Updated(Uuid),
    /// Title or content was blank after trimming; nothing changed.
    Ignored,
}

/// The entry form: draft title and content plus the mode deciding how they
/// are applied on submit.
pub struct Form {
    pub title: String,
    pub content: String,
    mode: FormMode,
}

impl Form {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            mode: FormMode::Creating,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Creating => SAVE_LABEL,
            FormMode::Editing(_) => UPDATE_LABEL,
        }
    }

    /// Copy an entry's title and content into the drafts and switch to
    /// editing it. Returns false when the id is unknown; the form is left
    /// untouched.
    pub fn begin_edit(&mut self, logbook: &Logbook, id: Uuid) -> bool {
        match logbook.get(id) {
            Some(entry) => {
                self.title = entry.title.clone();
                self.content = entry.content.clone();
                self.mode = FormMode::Editing(id);
                true
            }
            None => false,
        }
    }

    /// Clear the drafts and drop any editing state without submitting.
    pub fn reset(&mut self) {
        self.title.clear();
        self.content.clear();
        self.mode = FormMode::Creating;
    }

    /// Trim the drafts and apply them to the collection. A blank title or
    /// content is a no-op that leaves the drafts and mode as they were, as is
    /// an edit whose entry is gone from the collection. Otherwise the form
    /// resets back to creating mode.
    pub fn submit(&mut self, logbook: &mut Logbook, now: OffsetDateTime) -> Submit {
        let title = self.title.trim();
        let content = self.content.trim();

        if title.is_empty() || content.is_empty() {
            return Submit::Ignored;
        }

        let outcome = match self.mode {
            FormMode::Creating => {
                let entry = Entry::new(title, content, now);
                let id = entry.id;
                logbook.add(entry);
                Submit::Created(id)
            }
            FormMode::Editing(id) => {
                if !logbook.update(id, title, content, now) {
                    return Submit::Ignored;
                }
                Submit::Updated(id)
            }
        };

        self.reset();
        outcome
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}
