//! Page registry
//!
//! Each served document declares which page it is (`<body data-page="...">`,
//! or failing that its file name). The router maps that identity to exactly
//! one initializer; the logout control is bound on every page.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use futures::future::LocalBoxFuture;
use thiserror::Error;

use crate::context::Context;
use crate::controllers::{
    bind_logout, AddAppointment, AddPatient, Appointments, DashboardController, DetailController,
    FormController, ListController, LoginController, Patients, Reload,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Page {
    Login,
    Dashboard,
    AddPatient,
    Patients,
    PatientDetails,
    Appointments,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Login,
        Page::Dashboard,
        Page::AddPatient,
        Page::Patients,
        Page::PatientDetails,
        Page::Appointments,
    ];

    /// Document the page is served as
    pub fn file(&self) -> &'static str {
        match self {
            Page::Login => "index.html",
            Page::Dashboard => "dashboard.html",
            Page::AddPatient => "add_patient.html",
            Page::Patients => "patients.html",
            Page::PatientDetails => "patient_details.html",
            Page::Appointments => "appointments.html",
        }
    }

    /// Value of the `data-page` attribute
    pub fn key(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Dashboard => "dashboard",
            Page::AddPatient => "add_patient",
            Page::Patients => "patients",
            Page::PatientDetails => "patient_details",
            Page::Appointments => "appointments",
        }
    }

    /// Resolve from a location path; the site root is the login page
    pub fn from_path(path: &str) -> Option<Page> {
        let file = path.rsplit('/').next().unwrap_or_default();
        if file.is_empty() {
            return Some(Page::Login);
        }
        Page::ALL.into_iter().find(|page| page.file() == file)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A `data-page` value no page answers to
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown page: {0}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Page::ALL
            .into_iter()
            .find(|page| page.key() == key)
            .ok_or_else(|| UnknownPage(key.to_string()))
    }
}

/// Binds a page's handlers and returns its initial loading work
pub type PageInit = fn(Context) -> LocalBoxFuture<'static, ()>;

#[derive(Default)]
pub struct Router {
    routes: BTreeMap<Page, PageInit>,
}

impl Router {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry for every page of the portal
    pub fn clinic() -> Self {
        Self::new()
            .register(Page::Login, init_login)
            .register(Page::Dashboard, init_dashboard)
            .register(Page::AddPatient, init_add_patient)
            .register(Page::Patients, init_patients)
            .register(Page::PatientDetails, init_patient_details)
            .register(Page::Appointments, init_appointments)
    }

    pub fn register(mut self, page: Page, init: PageInit) -> Self {
        self.routes.insert(page, init);
        self
    }

    pub fn is_registered(&self, page: Page) -> bool {
        self.routes.contains_key(&page)
    }

    /// Bind logout and spawn the page's initializer.
    /// Returns `false` when no initializer is registered for `page`.
    pub fn mount(&self, page: Page, ctx: &Context) -> bool {
        bind_logout(ctx);
        match self.routes.get(&page) {
            Some(init) => {
                log::info!("mounting {} page", page);
                ctx.spawn(init(ctx.clone()));
                true
            }
            None => {
                log::warn!("no initializer registered for {} page", page);
                false
            }
        }
    }
}

fn init_login(ctx: Context) -> LocalBoxFuture<'static, ()> {
    LoginController::new(ctx).bind();
    Box::pin(async {})
}

fn init_dashboard(ctx: Context) -> LocalBoxFuture<'static, ()> {
    Box::pin(async move { DashboardController::new(ctx).load().await })
}

fn init_add_patient(ctx: Context) -> LocalBoxFuture<'static, ()> {
    FormController::<AddPatient>::new(ctx, None).bind();
    Box::pin(async {})
}

fn init_patients(ctx: Context) -> LocalBoxFuture<'static, ()> {
    let list = ListController::<Patients>::new(ctx);
    list.bind();
    Box::pin(async move {
        list.load().await;
    })
}

fn init_patient_details(ctx: Context) -> LocalBoxFuture<'static, ()> {
    Box::pin(async move {
        DetailController::new(ctx).start().await;
    })
}

fn init_appointments(ctx: Context) -> LocalBoxFuture<'static, ()> {
    let list = ListController::<Appointments>::new(ctx.clone());
    list.bind();
    let reload: Rc<dyn Reload> = list.clone();
    FormController::<AddAppointment>::new(ctx, Some(reload)).bind();
    Box::pin(async move {
        list.load().await;
    })
}
