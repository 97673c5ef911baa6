//! Patient details page
//!
//! Composes three pieces around the patient id stored in the session:
//! the patient panel, the history table, and the add-record form. The two
//! reads run concurrently and write disjoint regions, so either may land
//! first. Without a stored id only the guidance message is shown and the
//! add-record form is hidden and never bound.

use std::rc::Rc;

use async_trait::async_trait;

use crate::context::Context;
use crate::dom::{Field, Region};
use crate::models::PatientDetails;
use crate::render;

use super::form::{AddMedicalRecord, FormController};
use super::Reload;

pub const NO_PATIENT_SELECTED: &str = "No patient ID selected. Please go back to All Patients.";
pub const PATIENT_LOAD_ERROR: &str = "Error loading patient details.";
pub const NO_HISTORY: &str = "No medical history found.";
pub const HISTORY_LOAD_ERROR: &str = "Error loading medical history.";

/// Terminal state of one panel's fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelState {
    Loaded,
    LoadError,
}

/// Where the page ended up after `start`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailState {
    NoPatientSelected,
    Selected {
        patient: PanelState,
        history: PanelState,
    },
}

/// History table for one patient
pub struct HistoryPanel {
    ctx: Context,
    patient_id: String,
}

impl HistoryPanel {
    pub fn new(ctx: Context, patient_id: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            ctx,
            patient_id: patient_id.into(),
        })
    }

    pub async fn load(&self) -> PanelState {
        let doc = &self.ctx.document;
        match self.ctx.api.patient_history(&self.patient_id).await {
            Ok(records) if records.is_empty() => {
                doc.set_html(
                    Region::HistoryTable,
                    &render::message_row(NO_HISTORY, render::HISTORY_COLUMNS),
                );
                PanelState::Loaded
            }
            Ok(records) => {
                doc.set_html(Region::HistoryTable, &render::rows(&records, render::history_row));
                PanelState::Loaded
            }
            Err(err) => {
                log::error!("Error fetching medical history: {}", err);
                doc.set_html(
                    Region::HistoryTable,
                    &render::message_row(HISTORY_LOAD_ERROR, render::HISTORY_COLUMNS),
                );
                PanelState::LoadError
            }
        }
    }
}

#[async_trait(?Send)]
impl Reload for HistoryPanel {
    async fn reload(&self) {
        self.load().await;
    }
}

pub struct DetailController {
    ctx: Context,
}

impl DetailController {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub async fn start(&self) -> DetailState {
        let doc = &self.ctx.document;

        let Some(patient_id) = self.ctx.session.current_patient() else {
            doc.set_html(Region::PatientInfo, &render::paragraph(NO_PATIENT_SELECTED));
            doc.hide(Region::RecordFormSection);
            return DetailState::NoPatientSelected;
        };

        let history = HistoryPanel::new(self.ctx.clone(), patient_id.clone());
        let reload: Rc<dyn Reload> = history.clone();
        FormController::<AddMedicalRecord>::new(self.ctx.clone(), Some(reload)).bind();

        let (patient, history) = futures::join!(self.load_patient(&patient_id), history.load());
        DetailState::Selected { patient, history }
    }

    /// Fill the patient panel and headings
    pub async fn load_patient(&self, patient_id: &str) -> PanelState {
        let doc = &self.ctx.document;
        match self.ctx.api.patient_details(patient_id).await {
            Ok(PatientDetails::Found(patient)) => {
                doc.set_text(Region::Heading, &format!("Patient Details - {}", patient.name));
                doc.set_text(Region::Subheading, "Patient Information");
                doc.set_html(Region::PatientInfo, &render::patient_info(&patient));
                doc.set_field_value(Field::RecordPatientId, &patient.id);
                PanelState::Loaded
            }
            Ok(PatientDetails::Error(message)) => {
                doc.set_html(Region::PatientInfo, &render::paragraph(&message));
                PanelState::LoadError
            }
            Err(err) => {
                log::error!("Error fetching patient details: {}", err);
                doc.set_html(Region::PatientInfo, &render::paragraph(PATIENT_LOAD_ERROR));
                PanelState::LoadError
            }
        }
    }
}
