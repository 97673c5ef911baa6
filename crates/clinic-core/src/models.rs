//! Transport records exchanged with the clinic backend
//!
//! These mirror the backend's JSON one-to-one and are held only for the
//! duration of a render. Display fields are kept as strings: the backend
//! emits numeric ids and ages while the forms submit everything as text.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Patient as returned by `/patients` and `/patient_details/{id}`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub age: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub gender: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub contact: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub address: String,
    /// Presenting disease or problem
    #[serde(default, deserialize_with = "lenient_string")]
    pub disease: String,
}

/// Payload for `/add_patient` (a patient without id)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub age: String,
    pub gender: String,
    pub contact: String,
    pub address: String,
    pub disease: String,
}

/// One entry of a patient's medical history
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub doctor: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub diagnosis: String,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub prescription: Option<String>,
}

impl MedicalRecord {
    /// Prescription text, `None` when missing or blank
    pub fn prescription(&self) -> Option<&str> {
        self.prescription.as_deref().filter(|p| !p.trim().is_empty())
    }
}

/// Payload for `/add_medical_record`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMedicalRecord {
    pub patient_id: String,
    pub date: String,
    pub doctor: String,
    pub diagnosis: String,
    pub prescription: String,
}

/// Appointment as returned by `/appointments`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    /// Denormalized display name of the patient
    #[serde(default, deserialize_with = "lenient_string")]
    pub patient_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub doctor: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub time: String,
}

/// Payload for `/add_appointment`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub patient: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
}

/// Payload for `/login`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub password: String,
    pub role: String,
}

/// Counters shown on the dashboard cards
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    #[serde(default, deserialize_with = "lenient_string")]
    pub total_patients: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub appointments_today: String,
}

/// Outcome flag of a structured reply
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyStatus {
    Success,
    Error,
    #[serde(other)]
    Unknown,
}

/// Structured reply used by login and the delete endpoints
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReply {
    pub status: ReplyStatus,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub message: Option<String>,
    /// Present on a successful login
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub role: Option<String>,
}

impl StatusReply {
    pub fn is_success(&self) -> bool {
        self.status == ReplyStatus::Success
    }
}

/// `/patient_details/{id}` answers with either a patient or an error body
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatientDetails {
    Found(Patient),
    Error(String),
}

impl PatientDetails {
    /// Interpret a details body. An object carrying `status: "error"` is the
    /// application-level failure shape; anything else must be a patient.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if value.get("status").and_then(Value::as_str) == Some("error") {
            let message = value
                .get("message")
                .map(value_to_string)
                .unwrap_or_default();
            return Ok(PatientDetails::Error(message));
        }
        serde_json::from_value(value).map(PatientDetails::Found)
    }
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Accept a string, number or bool; `null` becomes the empty string
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Array(_) | Value::Object(_) => Err(serde::de::Error::custom(
            "expected a scalar value",
        )),
        other => Ok(value_to_string(&other)),
    }
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(None),
        Value::Array(_) | Value::Object(_) => Err(serde::de::Error::custom(
            "expected a scalar value",
        )),
        other => Ok(Some(value_to_string(&other))),
    }
}
