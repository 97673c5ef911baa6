//! HTTP-JSON convention shared by every controller
//!
//! [`HttpClient`] is the transport seam (browser `fetch` in production, a
//! scripted fake in tests). [`ClinicApi`] layers the backend's endpoints on
//! top of it and decides which failures are transport errors and which are
//! application answers.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::models::{
    Appointment, DashboardStats, LoginRequest, MedicalRecord, NewAppointment, NewMedicalRecord,
    NewPatient, Patient, PatientDetails, StatusReply,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// JSON body; sent with `Content-Type: application/json`
    pub body: Option<String>,
}

/// Status and raw body of a response that arrived
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// Transport seam. Futures are `!Send`: everything runs on one event loop.
#[async_trait(?Send)]
pub trait HttpClient {
    /// Resolve with the response, or fail when no usable response arrived
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Typed access to the clinic backend
#[derive(Clone)]
pub struct ClinicApi {
    config: ClientConfig,
    client: Rc<dyn HttpClient>,
}

impl ClinicApi {
    pub fn new(config: ClientConfig, client: Rc<dyn HttpClient>) -> Self {
        Self { config, client }
    }

    async fn request(&self, method: Method, path: &str, body: Option<String>) -> Result<HttpResponse> {
        let request = HttpRequest {
            method,
            url: self.config.endpoint(path),
            body,
        };
        log::debug!("{} {}", request.method, request.url);
        self.client.send(request).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.request(Method::Get, path, None).await?.json()
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<HttpResponse> {
        let body = serde_json::to_string(body).map_err(|e| ClientError::Encode(e.to_string()))?;
        self.request(Method::Post, path, Some(body)).await
    }

    /// Add endpoints report success through the HTTP status alone
    async fn post_accepted<B: Serialize>(&self, path: &str, body: &B) -> Result<bool> {
        Ok(self.post_json(path, body).await?.is_ok())
    }

    /// Delete endpoints answer with a structured body whatever the status
    async fn delete_reply(&self, path: &str) -> Result<StatusReply> {
        self.request(Method::Delete, path, None).await?.json()
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<StatusReply> {
        self.post_json("login", request).await?.json()
    }

    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.get_json("dashboard_stats").await
    }

    pub async fn patients(&self) -> Result<Vec<Patient>> {
        self.get_json("patients").await
    }

    /// `Ok(true)` when the backend answered 2xx
    pub async fn add_patient(&self, patient: &NewPatient) -> Result<bool> {
        self.post_accepted("add_patient", patient).await
    }

    pub async fn delete_patient(&self, id: &str) -> Result<StatusReply> {
        self.delete_reply(&format!("delete_patient/{}", id)).await
    }

    pub async fn patient_details(&self, id: &str) -> Result<PatientDetails> {
        let value = self.get_json(&format!("patient_details/{}", id)).await?;
        Ok(PatientDetails::from_value(value)?)
    }

    pub async fn patient_history(&self, id: &str) -> Result<Vec<MedicalRecord>> {
        self.get_json(&format!("patient_history/{}", id)).await
    }

    pub async fn add_medical_record(&self, record: &NewMedicalRecord) -> Result<bool> {
        self.post_accepted("add_medical_record", record).await
    }

    pub async fn appointments(&self) -> Result<Vec<Appointment>> {
        self.get_json("appointments").await
    }

    pub async fn add_appointment(&self, appointment: &NewAppointment) -> Result<bool> {
        self.post_accepted("add_appointment", appointment).await
    }

    pub async fn delete_appointment(&self, id: &str) -> Result<StatusReply> {
        self.delete_reply(&format!("delete_appointment/{}", id)).await
    }
}
