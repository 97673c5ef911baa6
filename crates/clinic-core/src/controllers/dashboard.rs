//! Dashboard greeting and counters

use crate::context::Context;
use crate::dom::Region;

/// Greeting used when nobody is stored in the session
pub const ANONYMOUS_USER: &str = "User";

pub struct DashboardController {
    ctx: Context,
}

impl DashboardController {
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    pub fn greeting(&self) -> String {
        let user = self
            .ctx
            .session
            .current_user()
            .unwrap_or_else(|| ANONYMOUS_USER.to_string());
        format!("Hello, {}!", user)
    }

    /// Greet, then fill the stat cards. A failed fetch is only logged.
    pub async fn load(&self) {
        let doc = &self.ctx.document;
        doc.set_text(Region::WelcomeMessage, &self.greeting());

        match self.ctx.api.dashboard_stats().await {
            Ok(stats) => {
                doc.set_text(Region::TotalPatients, &stats.total_patients);
                doc.set_text(Region::AppointmentsToday, &stats.appointments_today);
            }
            Err(err) => log::error!("Error fetching dashboard stats: {}", err),
        }
    }
}
