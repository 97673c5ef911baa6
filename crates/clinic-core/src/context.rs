//! Handles every controller is built from

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::api::ClinicApi;
use crate::dom::{Document, Spawner};
use crate::notify::{Notice, Notifier};
use crate::session::SessionStore;

/// Collaborators shared by the controllers of one page
///
/// Cheap to clone: every field is a reference-counted handle.
#[derive(Clone)]
pub struct Context {
    pub api: ClinicApi,
    pub session: SessionStore,
    pub document: Rc<dyn Document>,
    pub notifier: Rc<dyn Notifier>,
    pub spawner: Rc<dyn Spawner>,
}

impl Context {
    pub fn new(
        api: ClinicApi,
        session: SessionStore,
        document: Rc<dyn Document>,
        notifier: Rc<dyn Notifier>,
        spawner: Rc<dyn Spawner>,
    ) -> Self {
        Self {
            api,
            session,
            document,
            notifier,
            spawner,
        }
    }

    pub fn notify(&self, notice: Notice) {
        self.notifier.notify(notice);
    }

    pub fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        self.spawner.spawn(task);
    }
}
