//! Record to markup
//!
//! Pure functions: each takes one record (or a message) and returns the
//! HTML fragment for it. Every interpolated value is escaped.

use std::fmt::Write;

use crate::dom::RowAction;
use crate::models::{Appointment, MedicalRecord, Patient};

/// Columns of the patients table (id, name, age, gender, contact, actions)
pub const PATIENT_COLUMNS: usize = 6;
/// Columns of the appointments table (id, patient, doctor, date, time, actions)
pub const APPOINTMENT_COLUMNS: usize = 6;
/// Columns of the history table (date, doctor, diagnosis, prescription)
pub const HISTORY_COLUMNS: usize = 4;

pub const NO_PRESCRIPTION: &str = "N/A";

/// Escape text for element content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn cell(out: &mut String, value: &str) {
    let _ = write!(out, "<td>{}</td>", escape(value));
}

fn action_button(out: &mut String, class: &str, action: &str, id: &str, label: &str) {
    let _ = write!(
        out,
        r#"<button class="{}" data-action="{}" data-id="{}">{}</button>"#,
        class,
        action,
        escape(id),
        label
    );
}

/// One row spanning the whole table, used for errors and empty states
pub fn message_row(message: &str, colspan: usize) -> String {
    format!(
        r#"<tr><td colspan="{}">{}</td></tr>"#,
        colspan,
        escape(message)
    )
}

pub fn patient_row(patient: &Patient) -> String {
    let mut out = String::from("<tr>");
    for value in [
        &patient.id,
        &patient.name,
        &patient.age,
        &patient.gender,
        &patient.contact,
    ] {
        cell(&mut out, value);
    }
    out.push_str("<td>");
    action_button(&mut out, "view-btn", RowAction::VIEW, &patient.id, "View");
    action_button(&mut out, "delete-btn", RowAction::DELETE, &patient.id, "Delete");
    out.push_str("</td></tr>");
    out
}

pub fn appointment_row(appointment: &Appointment) -> String {
    let mut out = String::from("<tr>");
    for value in [
        &appointment.id,
        &appointment.patient_name,
        &appointment.doctor,
        &appointment.date,
        &appointment.time,
    ] {
        cell(&mut out, value);
    }
    out.push_str("<td>");
    action_button(&mut out, "delete-btn", RowAction::DELETE, &appointment.id, "Delete");
    out.push_str("</td></tr>");
    out
}

pub fn history_row(record: &MedicalRecord) -> String {
    let mut out = String::from("<tr>");
    cell(&mut out, &record.date);
    cell(&mut out, &record.doctor);
    cell(&mut out, &record.diagnosis);
    cell(&mut out, record.prescription().unwrap_or(NO_PRESCRIPTION));
    out.push_str("</tr>");
    out
}

/// Concatenate rows; an empty slice yields an empty body
pub fn rows<T>(items: &[T], render: impl Fn(&T) -> String) -> String {
    items.iter().map(render).collect()
}

/// Labeled fields of the patient information panel
pub fn patient_info(patient: &Patient) -> String {
    let fields: [(&str, &str); 7] = [
        ("ID", patient.id.as_str()),
        ("Full Name", patient.name.as_str()),
        ("Age", patient.age.as_str()),
        ("Gender", patient.gender.as_str()),
        ("Contact", patient.contact.as_str()),
        ("Address", patient.address.as_str()),
        ("Disease/Problem", patient.disease.as_str()),
    ];
    let mut out = String::new();
    for (label, value) in fields {
        let _ = write!(out, "<p><strong>{}:</strong> {}</p>", label, escape(value));
    }
    out
}

/// A single paragraph, used for panel-level messages
pub fn paragraph(text: &str) -> String {
    format!("<p>{}</p>", escape(text))
}
