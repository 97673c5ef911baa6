//! The document surface controllers write to
//!
//! Controllers never touch the DOM directly. They address fixed anchors
//! ([`Region`], [`Field`], [`FormId`], [`Control`]) through the [`Document`]
//! trait, which the browser binding implements with `web-sys` and the tests
//! implement with a recorder.

use futures::future::LocalBoxFuture;

use crate::router::Page;

/// Element whose content a controller replaces
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    PatientTable,
    AppointmentTable,
    HistoryTable,
    PatientInfo,
    RecordFormSection,
    LoginError,
    WelcomeMessage,
    TotalPatients,
    AppointmentsToday,
    Heading,
    Subheading,
}

impl Region {
    /// CSS selector of the anchor in the served pages
    pub fn selector(&self) -> &'static str {
        match self {
            Region::PatientTable => "#patientTable",
            Region::AppointmentTable => "#appointmentTable",
            Region::HistoryTable => "#historyTable",
            Region::PatientInfo => ".patient-info",
            Region::RecordFormSection => ".medical-record-form-section",
            Region::LoginError => "#error-msg",
            Region::WelcomeMessage => "#welcome-msg",
            Region::TotalPatients => ".card:nth-child(1) p",
            Region::AppointmentsToday => ".card:nth-child(2) p",
            Region::Heading => "h1",
            Region::Subheading => "h2",
        }
    }
}

/// Form input read (or written) by id
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    LoginUserId,
    LoginPassword,
    LoginRole,
    PatientName,
    PatientAge,
    PatientGender,
    PatientContact,
    PatientAddress,
    PatientDisease,
    AppointmentPatient,
    AppointmentDoctor,
    AppointmentDate,
    AppointmentTime,
    RecordPatientId,
    RecordDate,
    RecordDoctor,
    RecordDiagnosis,
    RecordPrescription,
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::LoginUserId => "userId",
            Field::LoginPassword => "password",
            Field::LoginRole => "role",
            Field::PatientName => "pname",
            Field::PatientAge => "age",
            Field::PatientGender => "gender",
            Field::PatientContact => "contact",
            Field::PatientAddress => "address",
            Field::PatientDisease => "disease",
            Field::AppointmentPatient => "ap-patient",
            Field::AppointmentDoctor => "ap-doctor",
            Field::AppointmentDate => "ap-date",
            Field::AppointmentTime => "ap-time",
            Field::RecordPatientId => "patientIdInput",
            Field::RecordDate => "histDate",
            Field::RecordDoctor => "histDoctor",
            Field::RecordDiagnosis => "histDiagnosis",
            Field::RecordPrescription => "histPrescription",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormId {
    Login,
    AddPatient,
    AddAppointment,
    AddMedicalRecord,
}

impl FormId {
    pub fn id(&self) -> &'static str {
        match self {
            FormId::Login => "loginForm",
            FormId::AddPatient => "patientForm",
            FormId::AddAppointment => "appointmentForm",
            FormId::AddMedicalRecord => "addHistoryForm",
        }
    }
}

/// Clickable control outside any form or table
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Control {
    Logout,
}

impl Control {
    pub fn id(&self) -> &'static str {
        match self {
            Control::Logout => "logout",
        }
    }
}

/// A click on one of the buttons rendered into a table row
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowAction {
    View(String),
    Delete(String),
}

impl RowAction {
    pub const VIEW: &'static str = "view";
    pub const DELETE: &'static str = "delete";

    /// Decode the `data-action` / `data-id` pair carried by a row button
    pub fn parse(action: &str, id: &str) -> Option<Self> {
        if id.is_empty() {
            return None;
        }
        match action {
            Self::VIEW => Some(RowAction::View(id.to_string())),
            Self::DELETE => Some(RowAction::Delete(id.to_string())),
            _ => None,
        }
    }
}

pub type SubmitHandler = Box<dyn Fn()>;
pub type RowHandler = Box<dyn Fn(RowAction)>;

/// DOM operations a page controller needs
///
/// Implementations skip anchors missing from the current page.
pub trait Document {
    /// Replace the inner markup of a region
    fn set_html(&self, region: Region, html: &str);
    fn set_text(&self, region: Region, text: &str);
    fn hide(&self, region: Region);

    fn field_value(&self, field: Field) -> String;
    fn set_field_value(&self, field: Field, value: &str);
    fn reset_form(&self, form: FormId);

    /// Blocking yes/no prompt
    fn confirm(&self, prompt: &str) -> bool;
    /// Full page navigation
    fn navigate(&self, page: Page);

    /// Run `handler` on submit, after suppressing native submission
    fn on_submit(&self, form: FormId, handler: SubmitHandler);
    fn on_click(&self, control: Control, handler: SubmitHandler);
    /// Delegate clicks on row buttons inside `table`
    fn on_row_action(&self, table: Region, handler: RowHandler);
}

/// Schedules detached work on the event loop
pub trait Spawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}
