//! Login Page Tests
//!
//! Login reads its outcome from the reply body, reports failures inline
//! and only touches the session on success.

#[cfg(test)]
mod tests {
    use crate::fakes::Harness;
    use clinic_core::controllers::login::{INVALID_LOGIN, LOGIN_UNREACHABLE};
    use clinic_core::{Field, FormId, Method, Page, Region};
    use serde_json::json;

    fn login_page() -> Harness {
        let mut h = Harness::new();
        assert!(h.mount(Page::Login));
        h.document.fill(Field::LoginUserId, "dr.kim");
        h.document.fill(Field::LoginPassword, "hunter2");
        h.document.fill(Field::LoginRole, "doctor");
        h
    }

    #[test]
    fn test_successful_login_stores_session_and_navigates() {
        let mut h = login_page();
        h.backend.respond_json(
            Method::Post,
            "login",
            json!({"status": "success", "role": "doctor"}),
        );

        assert!(h.document.submit(FormId::Login));
        h.settle();

        assert_eq!(
            h.backend.last_body("login"),
            Some(json!({"userId": "dr.kim", "password": "hunter2", "role": "doctor"}))
        );
        assert_eq!(h.session().current_user().as_deref(), Some("dr.kim"));
        assert_eq!(h.session().user_role().as_deref(), Some("doctor"));
        assert_eq!(h.document.navigations(), vec![Page::Dashboard]);
        assert_eq!(h.document.text(Region::LoginError), None);
    }

    #[test]
    fn test_rejected_login_shows_inline_message() {
        let mut h = login_page();
        h.backend.respond_json(
            Method::Post,
            "login",
            json!({"status": "error", "message": "bad password"}),
        );

        h.document.submit(FormId::Login);
        h.settle();

        assert_eq!(h.document.text(Region::LoginError).as_deref(), Some(INVALID_LOGIN));
        assert!(h.document.navigations().is_empty());
        assert!(h.storage.is_empty());
        assert!(h.notifier.notices().is_empty());
    }

    #[test]
    fn test_unreachable_server_has_its_own_message() {
        let mut h = login_page();
        h.backend.unreachable(Method::Post, "login");

        h.document.submit(FormId::Login);
        h.settle();

        assert_eq!(h.document.text(Region::LoginError).as_deref(), Some(LOGIN_UNREACHABLE));
        assert!(h.document.navigations().is_empty());
        assert!(h.storage.is_empty());
    }

    #[test]
    fn test_garbled_reply_counts_as_unreachable() {
        let mut h = login_page();
        h.backend.respond(Method::Post, "login", 502, "<html>Bad Gateway</html>");

        h.document.submit(FormId::Login);
        h.settle();

        assert_eq!(h.document.text(Region::LoginError).as_deref(), Some(LOGIN_UNREACHABLE));
    }

    #[test]
    fn test_login_does_not_reset_form() {
        let mut h = login_page();
        h.backend.respond_json(Method::Post, "login", json!({"status": "error"}));

        h.document.submit(FormId::Login);
        h.settle();

        assert!(h.document.resets().is_empty());
        assert_eq!(h.document.field(Field::LoginUserId).as_deref(), Some("dr.kim"));
    }
}
