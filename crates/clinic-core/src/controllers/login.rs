//! Login form
//!
//! Unlike the add forms, login reports failures inline in `#error-msg` and
//! reads its outcome from the reply body rather than the HTTP status.

use std::rc::Rc;

use crate::context::Context;
use crate::dom::{Field, FormId, Region};
use crate::models::LoginRequest;
use crate::router::Page;

pub const INVALID_LOGIN: &str = "Invalid Login! Please check User ID, Password, and Role.";
pub const LOGIN_UNREACHABLE: &str = "Login failed. Could not connect to the server.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn,
    InvalidCredentials,
    Unreachable,
}

pub struct LoginController {
    ctx: Context,
}

impl LoginController {
    pub fn new(ctx: Context) -> Rc<Self> {
        Rc::new(Self { ctx })
    }

    pub fn bind(self: &Rc<Self>) {
        let this = Rc::clone(self);
        self.ctx.document.on_submit(
            FormId::Login,
            Box::new(move || {
                let task = Rc::clone(&this);
                this.ctx.spawn(Box::pin(async move {
                    task.submit().await;
                }));
            }),
        );
    }

    fn credentials(&self) -> LoginRequest {
        let doc = &self.ctx.document;
        LoginRequest {
            user_id: doc.field_value(Field::LoginUserId),
            password: doc.field_value(Field::LoginPassword),
            role: doc.field_value(Field::LoginRole),
        }
    }

    /// Persist the session and go to the dashboard, or explain the failure
    pub async fn submit(&self) -> LoginOutcome {
        let request = self.credentials();

        match self.ctx.api.login(&request).await {
            Ok(reply) if reply.is_success() => {
                let role = reply.role.as_deref().unwrap_or(&request.role);
                self.ctx.session.set_user_role(role);
                self.ctx.session.set_current_user(&request.user_id);
                log::info!("{} logged in as {}", request.user_id, role);
                self.ctx.document.navigate(Page::Dashboard);
                LoginOutcome::LoggedIn
            }
            Ok(_) => {
                self.ctx.document.set_text(Region::LoginError, INVALID_LOGIN);
                LoginOutcome::InvalidCredentials
            }
            Err(err) => {
                log::error!("Login error: {}", err);
                self.ctx.document.set_text(Region::LoginError, LOGIN_UNREACHABLE);
                LoginOutcome::Unreachable
            }
        }
    }
}
