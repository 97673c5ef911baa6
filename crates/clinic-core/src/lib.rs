//! Clinic Portal Core
//!
//! Browser-independent half of the clinic management portal:
//! - Transport records for patients, medical history and appointments
//! - The HTTP-JSON convention shared by every backend call
//! - Pure record-to-markup rendering
//! - Page controllers (lists, forms, login, patient details, dashboard)
//! - The page registry that mounts exactly one controller set per page
//!
//! The platform is reached only through small traits ([`api::HttpClient`],
//! [`session::SessionStorage`], [`dom::Document`], [`notify::Notifier`],
//! [`dom::Spawner`]), so every controller runs unchanged on the host.

pub mod api;
pub mod config;
pub mod context;
pub mod controllers;
pub mod dom;
pub mod error;
pub mod models;
pub mod notify;
pub mod render;
pub mod router;
pub mod session;

// Re-export commonly used types for convenience
pub use api::{ClinicApi, HttpClient, HttpRequest, HttpResponse, Method};
pub use config::ClientConfig;
pub use context::Context;
pub use dom::{Control, Document, Field, FormId, Region, RowAction, Spawner};
pub use error::{ClientError, Result};
pub use models::{
    Appointment, DashboardStats, LoginRequest, MedicalRecord, NewAppointment, NewMedicalRecord,
    NewPatient, Patient, PatientDetails, ReplyStatus, StatusReply,
};
pub use notify::{Notice, NoticeKind, Notifier};
pub use router::{Page, Router};
pub use session::{MemoryStorage, SessionStorage, SessionStore};
