//! Dashboard Tests

#[cfg(test)]
mod tests {
    use crate::fakes::Harness;
    use clinic_core::{Method, Page, Region};
    use serde_json::json;

    #[test]
    fn test_greets_stored_user_and_fills_counters() {
        let mut h = Harness::new();
        h.session().set_current_user("nurse.joy");
        h.backend.respond_json(
            Method::Get,
            "dashboard_stats",
            json!({"total_patients": 128, "appointments_today": 9}),
        );

        h.mount(Page::Dashboard);

        assert_eq!(h.document.text(Region::WelcomeMessage).as_deref(), Some("Hello, nurse.joy!"));
        assert_eq!(h.document.text(Region::TotalPatients).as_deref(), Some("128"));
        assert_eq!(h.document.text(Region::AppointmentsToday).as_deref(), Some("9"));
    }

    #[test]
    fn test_anonymous_greeting() {
        let mut h = Harness::new();
        h.backend.respond_json(
            Method::Get,
            "dashboard_stats",
            json!({"total_patients": 0, "appointments_today": 0}),
        );

        h.mount(Page::Dashboard);

        assert_eq!(h.document.text(Region::WelcomeMessage).as_deref(), Some("Hello, User!"));
    }

    #[test]
    fn test_stats_failure_is_silent() {
        let mut h = Harness::new();
        h.backend.unreachable(Method::Get, "dashboard_stats");

        h.mount(Page::Dashboard);

        assert_eq!(h.document.text(Region::TotalPatients), None);
        assert!(h.notifier.notices().is_empty());
        assert_eq!(h.backend.count(Method::Get, "dashboard_stats"), 1);
    }
}
