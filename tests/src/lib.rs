//! Clinic Portal Test Suite
//!
//! Page-level behavior tests. Each module mounts one page through the
//! portal's router against in-memory fakes and checks what the user would
//! see and which requests reached the backend:
//! - Login and logout
//! - Dashboard greeting and counters
//! - Patients list (load, view, delete) and add-patient form
//! - Appointments list and add-appointment form
//! - Patient details (panel, history, add-record form)


pub mod login;
pub mod dashboard;
pub mod patients;
