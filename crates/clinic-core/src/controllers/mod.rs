//! Page controllers
//!
//! Each controller owns one region of the page and talks to the backend
//! through [`crate::api::ClinicApi`]. Controllers that show a collection
//! implement [`Reload`] so a form on the same page can ask for a full
//! refetch after a mutation.

use async_trait::async_trait;

pub mod dashboard;
pub mod detail;
pub mod form;
pub mod list;
pub mod login;
pub mod logout;

pub use dashboard::DashboardController;
pub use detail::{DetailController, DetailState, HistoryPanel, PanelState};
pub use form::{AddAppointment, AddMedicalRecord, AddPatient, FormController, FormResource, SubmitOutcome};
pub use list::{Appointments, ListController, ListResource, LoadState, Patients};
pub use login::{LoginController, LoginOutcome};
pub use logout::bind_logout;

/// A view that can refetch and re-render its whole collection
#[async_trait(?Send)]
pub trait Reload {
    async fn reload(&self);
}
