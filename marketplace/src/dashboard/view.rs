use crate::data::{
    application::{ApplicationDraft, ApplicationEntry, DraftField},
    project::Project,
};

/// Lists the freelancer dashboard can display
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub enum Tab {
    #[default]
    Projects,
    Applications,
}

impl Tab {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Projects => "Projets disponibles",
            Self::Applications => "Mes candidatures",
        }
    }
}

/// Application modal. The draft only exists while the modal is open so closing it always
/// discards what was typed.
#[derive(Clone, Default, PartialEq, Debug)]
pub enum Modal {
    #[default]
    Closed,
    Open {
        project: Project,
        draft: ApplicationDraft,
    },
}

/// Local UI state of the freelancer dashboard. Never persisted.
#[derive(Clone, Default, PartialEq, Debug)]
pub struct DashboardView {
    pub active_tab: Tab,
    pub modal: Modal,
    pub submitting: bool,
}

impl DashboardView {
    pub fn select_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    /// Open the modal for `project` with an empty draft
    pub fn open_modal(&mut self, project: Project) {
        self.modal = Modal::Open {
            project,
            draft: ApplicationDraft::default(),
        };
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Write `value` into the draft. Ignored while the modal is closed.
    pub fn edit_draft(&mut self, field: DraftField, value: String) {
        if let Modal::Open { draft, .. } = &mut self.modal {
            draft.set(field, value);
        }
    }

    pub const fn selected_project(&self) -> Option<&Project> {
        match &self.modal {
            Modal::Open { project, .. } => Some(project),
            Modal::Closed => None,
        }
    }

    pub const fn draft(&self) -> Option<&ApplicationDraft> {
        match &self.modal {
            Modal::Open { draft, .. } => Some(draft),
            Modal::Closed => None,
        }
    }
}

/// Open projects shown on the projects tab
#[derive(Clone, PartialEq, Debug)]
pub struct ProjectList {
    pub projects: Vec<Project>,
    pub loading: bool,
}

impl Default for ProjectList {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            loading: true,
        }
    }
}

/// Applications shown on the applications tab
#[derive(Clone, Default, PartialEq, Debug)]
pub struct ApplicationList {
    pub entries: Vec<ApplicationEntry>,
}
