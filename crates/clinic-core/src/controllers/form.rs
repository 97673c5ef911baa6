//! Resource form controller (add patient, add appointment, add medical record)
//!
//! Add endpoints signal success with a 2xx status only. On success the form is
//! cleared, a toast is shown and the dependent list, if any, is refetched.

use std::marker::PhantomData;
use std::rc::Rc;

use async_trait::async_trait;

use crate::api::ClinicApi;
use crate::context::Context;
use crate::dom::{Field, FormId};
use crate::error::Result;
use crate::models::{NewAppointment, NewMedicalRecord, NewPatient};
use crate::notify::Notice;

use super::Reload;

/// Terminal state of one submission
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// The backend answered with a non-2xx status
    Rejected,
    /// No usable response
    Failed,
}

/// A form whose fields become one POSTed payload
#[async_trait(?Send)]
pub trait FormResource: 'static {
    type Payload;

    const FORM: FormId;
    /// Lower-case name used in messages, e.g. "medical record"
    const NOUN: &'static str;
    /// Capitalized name used in the success message
    const LABEL: &'static str;

    /// Read the payload from the page at submit time
    fn payload(ctx: &Context) -> Self::Payload;
    async fn send(api: &ClinicApi, payload: &Self::Payload) -> Result<bool>;
}

pub struct AddPatient;

#[async_trait(?Send)]
impl FormResource for AddPatient {
    type Payload = NewPatient;

    const FORM: FormId = FormId::AddPatient;
    const NOUN: &'static str = "patient";
    const LABEL: &'static str = "Patient";

    fn payload(ctx: &Context) -> NewPatient {
        let doc = &ctx.document;
        NewPatient {
            name: doc.field_value(Field::PatientName),
            age: doc.field_value(Field::PatientAge),
            gender: doc.field_value(Field::PatientGender),
            contact: doc.field_value(Field::PatientContact),
            address: doc.field_value(Field::PatientAddress),
            disease: doc.field_value(Field::PatientDisease),
        }
    }

    async fn send(api: &ClinicApi, payload: &NewPatient) -> Result<bool> {
        api.add_patient(payload).await
    }
}

pub struct AddAppointment;

#[async_trait(?Send)]
impl FormResource for AddAppointment {
    type Payload = NewAppointment;

    const FORM: FormId = FormId::AddAppointment;
    const NOUN: &'static str = "appointment";
    const LABEL: &'static str = "Appointment";

    fn payload(ctx: &Context) -> NewAppointment {
        let doc = &ctx.document;
        NewAppointment {
            patient: doc.field_value(Field::AppointmentPatient),
            doctor: doc.field_value(Field::AppointmentDoctor),
            date: doc.field_value(Field::AppointmentDate),
            time: doc.field_value(Field::AppointmentTime),
        }
    }

    async fn send(api: &ClinicApi, payload: &NewAppointment) -> Result<bool> {
        api.add_appointment(payload).await
    }
}

/// Adds to the history of the patient selected in the session
pub struct AddMedicalRecord;

#[async_trait(?Send)]
impl FormResource for AddMedicalRecord {
    type Payload = NewMedicalRecord;

    const FORM: FormId = FormId::AddMedicalRecord;
    const NOUN: &'static str = "medical record";
    const LABEL: &'static str = "Medical record";

    fn payload(ctx: &Context) -> NewMedicalRecord {
        let doc = &ctx.document;
        NewMedicalRecord {
            patient_id: ctx.session.current_patient().unwrap_or_default(),
            date: doc.field_value(Field::RecordDate),
            doctor: doc.field_value(Field::RecordDoctor),
            diagnosis: doc.field_value(Field::RecordDiagnosis),
            prescription: doc.field_value(Field::RecordPrescription),
        }
    }

    async fn send(api: &ClinicApi, payload: &NewMedicalRecord) -> Result<bool> {
        api.add_medical_record(payload).await
    }
}

pub struct FormController<F: FormResource> {
    ctx: Context,
    reload: Option<Rc<dyn Reload>>,
    form: PhantomData<F>,
}

impl<F: FormResource> FormController<F> {
    /// `reload` is refetched after every accepted submission
    pub fn new(ctx: Context, reload: Option<Rc<dyn Reload>>) -> Rc<Self> {
        Rc::new(Self {
            ctx,
            reload,
            form: PhantomData,
        })
    }

    /// Take over the form's submit event
    pub fn bind(self: &Rc<Self>) {
        let this = Rc::clone(self);
        self.ctx.document.on_submit(
            F::FORM,
            Box::new(move || {
                let task = Rc::clone(&this);
                this.ctx.spawn(Box::pin(async move {
                    task.submit().await;
                }));
            }),
        );
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let payload = F::payload(&self.ctx);

        match F::send(&self.ctx.api, &payload).await {
            Ok(true) => {
                log::info!("{} added", F::NOUN);
                self.ctx.document.reset_form(F::FORM);
                self.ctx
                    .notify(Notice::success(format!("{} added successfully!", F::LABEL)));
                if let Some(list) = &self.reload {
                    list.reload().await;
                }
                SubmitOutcome::Accepted
            }
            Ok(false) => {
                self.ctx
                    .notify(Notice::error(format!("Failed to add {}.", F::NOUN)));
                SubmitOutcome::Rejected
            }
            Err(err) => {
                log::error!("Error adding {}: {}", F::NOUN, err);
                self.ctx.notify(Notice::error(format!(
                    "Server error: Could not add {}.",
                    F::NOUN
                )));
                SubmitOutcome::Failed
            }
        }
    }
}
