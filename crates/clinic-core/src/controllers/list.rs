//! Resource list controller (patients, appointments)
//!
//! `load` always re-renders the whole table body from a fresh GET; there is
//! no diffing and nothing is cached between calls. Deletes go through a
//! confirmation prompt and finish with a full reload.

use std::marker::PhantomData;
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::ClinicApi;
use crate::context::Context;
use crate::dom::{Region, RowAction};
use crate::error::Result;
use crate::models::{Appointment, Patient, StatusReply};
use crate::notify::Notice;
use crate::render;
use crate::router::Page;

use super::Reload;

/// Terminal state of one `load`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// Rendered this many rows
    Loaded(usize),
    /// Rendered the single error row
    LoadError,
}

/// A backend collection shown as a table with per-row actions
#[async_trait(?Send)]
pub trait ListResource: 'static {
    type Item;

    const TABLE: Region;
    const COLUMNS: usize;
    /// Lower-case name used in messages, e.g. "patient"
    const NOUN: &'static str;
    /// Page opened by a row's view button, if the rows have one
    const DETAIL_PAGE: Option<Page>;

    async fn fetch(api: &ClinicApi) -> Result<Vec<Self::Item>>;
    async fn remove(api: &ClinicApi, id: &str) -> Result<StatusReply>;
    fn render_row(item: &Self::Item) -> String;
    fn confirm_prompt(id: &str) -> String;
}

/// Patients table on `patients.html`
pub struct Patients;

#[async_trait(?Send)]
impl ListResource for Patients {
    type Item = Patient;

    const TABLE: Region = Region::PatientTable;
    const COLUMNS: usize = render::PATIENT_COLUMNS;
    const NOUN: &'static str = "patient";
    const DETAIL_PAGE: Option<Page> = Some(Page::PatientDetails);

    async fn fetch(api: &ClinicApi) -> Result<Vec<Patient>> {
        api.patients().await
    }

    async fn remove(api: &ClinicApi, id: &str) -> Result<StatusReply> {
        api.delete_patient(id).await
    }

    fn render_row(item: &Patient) -> String {
        render::patient_row(item)
    }

    // Deleting a patient cascades server-side.
    fn confirm_prompt(id: &str) -> String {
        format!(
            "Are you sure you want to delete Patient ID {}? This will also remove all their history and appointments.",
            id
        )
    }
}

/// Appointments table on `appointments.html`
pub struct Appointments;

#[async_trait(?Send)]
impl ListResource for Appointments {
    type Item = Appointment;

    const TABLE: Region = Region::AppointmentTable;
    const COLUMNS: usize = render::APPOINTMENT_COLUMNS;
    const NOUN: &'static str = "appointment";
    const DETAIL_PAGE: Option<Page> = None;

    async fn fetch(api: &ClinicApi) -> Result<Vec<Appointment>> {
        api.appointments().await
    }

    async fn remove(api: &ClinicApi, id: &str) -> Result<StatusReply> {
        api.delete_appointment(id).await
    }

    fn render_row(item: &Appointment) -> String {
        render::appointment_row(item)
    }

    fn confirm_prompt(id: &str) -> String {
        format!("Are you sure you want to delete Appointment ID {}?", id)
    }
}

pub struct ListController<R: ListResource> {
    ctx: Context,
    resource: PhantomData<R>,
}

impl<R: ListResource> ListController<R> {
    pub fn new(ctx: Context) -> Rc<Self> {
        Rc::new(Self {
            ctx,
            resource: PhantomData,
        })
    }

    /// Route row button clicks in this controller's table to `view`/`delete`
    pub fn bind(self: &Rc<Self>) {
        let this = Rc::clone(self);
        self.ctx
            .document
            .on_row_action(R::TABLE, Box::new(move |action| this.handle(action)));
    }

    fn handle(self: &Rc<Self>, action: RowAction) {
        match action {
            RowAction::View(id) => self.view(&id),
            RowAction::Delete(id) => {
                let this = Rc::clone(self);
                self.ctx.spawn(Box::pin(async move { this.delete(&id).await }));
            }
        }
    }

    /// Fetch the collection and replace every row
    pub async fn load(&self) -> LoadState {
        match R::fetch(&self.ctx.api).await {
            Ok(items) => {
                let body = render::rows(&items, R::render_row);
                self.ctx.document.set_html(R::TABLE, &body);
                LoadState::Loaded(items.len())
            }
            Err(err) => {
                log::error!("Error fetching {}s: {}", R::NOUN, err);
                let message = format!("Error loading {} data.", R::NOUN);
                self.ctx
                    .document
                    .set_html(R::TABLE, &render::message_row(&message, R::COLUMNS));
                LoadState::LoadError
            }
        }
    }

    /// Confirm, delete, and reload on success. Declining sends nothing.
    pub async fn delete(&self, id: &str) {
        if !self.ctx.document.confirm(&R::confirm_prompt(id)) {
            log::debug!("delete of {} {} cancelled", R::NOUN, id);
            return;
        }

        match R::remove(&self.ctx.api, id).await {
            Ok(reply) if reply.is_success() => {
                log::info!("deleted {} {}", R::NOUN, id);
                let message = reply
                    .message
                    .unwrap_or_else(|| format!("Deleted {} {}.", R::NOUN, id));
                self.ctx.notify(Notice::success(message));
                self.load().await;
            }
            Ok(reply) => {
                let message = reply
                    .message
                    .unwrap_or_else(|| format!("Could not delete {}.", R::NOUN));
                self.ctx.notify(Notice::error(message));
            }
            Err(err) => {
                log::error!("Error deleting {} {}: {}", R::NOUN, id, err);
                self.ctx.notify(Notice::error(format!(
                    "Server error: Could not delete {}.",
                    R::NOUN
                )));
            }
        }
    }

    /// Remember the selection and open the detail page
    pub fn view(&self, id: &str) {
        match R::DETAIL_PAGE {
            Some(page) => {
                self.ctx.session.set_current_patient(id);
                self.ctx.document.navigate(page);
            }
            None => log::warn!("{} rows have no detail page", R::NOUN),
        }
    }
}

#[async_trait(?Send)]
impl<R: ListResource> Reload for ListController<R> {
    async fn reload(&self) {
        self.load().await;
    }
}
