use std::{cell::Cell, rc::Rc, time::Duration};

use crate::store::Store;

/// How long a transient notice stays on screen
pub const NOTICE_DURATION: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    /// CSS classes of the alert box
    pub const fn alert_class(&self) -> &'static str {
        match self {
            Self::Success => "alert alert-success",
            Self::Error => "alert alert-danger",
        }
    }
}

/// Transient message shown to the user
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

/// Queue of notices currently displayed. Shared by every page so a notice raised right before a
/// navigation stays visible on the next page.
#[derive(Clone, Default)]
pub struct Notices {
    store: Store<Vec<Notice>>,
    next_id: Rc<Cell<u64>>,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn store(&self) -> &Store<Vec<Notice>> {
        &self.store
    }

    /// Display `message`, returning the id needed to dismiss it
    pub fn push<S: Into<String>>(&self, kind: NoticeKind, message: S) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let notice = Notice {
            id,
            kind,
            message: message.into(),
        };
        self.store.update(|notices| notices.push(notice));
        id
    }

    pub fn success<S: Into<String>>(&self, message: S) -> u64 {
        self.push(NoticeKind::Success, message)
    }

    pub fn error<S: Into<String>>(&self, message: S) -> u64 {
        self.push(NoticeKind::Error, message)
    }

    pub fn dismiss(&self, id: u64) {
        self.store
            .update(|notices| notices.retain(|notice| notice.id != id));
    }

    pub fn current(&self) -> Vec<Notice> {
        self.store.get()
    }
}
