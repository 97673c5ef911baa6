//! Patients List and Add-Patient Form Tests
//!
//! The list always re-renders from a fresh GET: after a delete the test
//! counts GET requests rather than inspecting any cached rows.

#[cfg(test)]
mod tests {
    use crate::fakes::Harness;
    use clinic_core::controllers::{ListController, LoadState, Patients};
    use clinic_core::{Field, FormId, Method, NoticeKind, Page, Region, RowAction};
    use serde_json::json;

    fn two_patients() -> serde_json::Value {
        json!([
            {"id": 1, "name": "Ada Obi", "age": 34, "gender": "F", "contact": "555-0101"},
            {"id": 2, "name": "Ben <Bo> Li", "age": "61", "gender": "M", "contact": null}
        ])
    }

    fn patients_page() -> Harness {
        let mut h = Harness::new();
        h.backend.respond_json(Method::Get, "patients", two_patients());
        assert!(h.mount(Page::Patients));
        h
    }

    // =========================================================================
    // Load
    // =========================================================================

    #[test]
    fn test_load_renders_one_row_per_patient() {
        let h = patients_page();
        let body = h.document.html(Region::PatientTable).unwrap();

        assert_eq!(body.matches("<tr>").count(), 2);
        assert!(body.contains("<td>Ada Obi</td><td>34</td>"));
        assert!(body.contains(r#"data-action="view" data-id="1""#));
        assert!(body.contains(r#"data-action="delete" data-id="2""#));
        assert!(body.contains("Ben &lt;Bo&gt; Li"));
    }

    #[test]
    fn test_empty_list_renders_empty_body() {
        let mut h = Harness::new();
        h.backend.respond_json(Method::Get, "patients", json!([]));

        h.mount(Page::Patients);

        assert_eq!(h.document.html(Region::PatientTable).as_deref(), Some(""));
    }

    #[test]
    fn test_load_failure_renders_single_error_row() {
        let mut h = Harness::new();
        h.backend.unreachable(Method::Get, "patients");

        h.mount(Page::Patients);

        assert_eq!(
            h.document.html(Region::PatientTable).as_deref(),
            Some(r#"<tr><td colspan="6">Error loading patient data.</td></tr>"#)
        );
        assert!(h.notifier.notices().is_empty());
    }

    #[test]
    fn test_load_reports_row_count() {
        let mut h = Harness::new();
        h.backend.respond_json(Method::Get, "patients", two_patients());
        let list = ListController::<Patients>::new(h.ctx.clone());

        assert_eq!(h.run(list.load()), LoadState::Loaded(2));

        h.backend.respond_json(Method::Get, "patients", json!([]));
        assert_eq!(h.run(list.load()), LoadState::Loaded(0));
    }

    #[test]
    fn test_load_reports_failure() {
        let mut h = Harness::new();
        h.backend.respond(Method::Get, "patients", 200, "not json");
        let list = ListController::<Patients>::new(h.ctx.clone());

        assert_eq!(h.run(list.load()), LoadState::LoadError);
    }

    // =========================================================================
    // Delete
    // =========================================================================

    #[test]
    fn test_declined_confirm_sends_nothing() {
        let mut h = patients_page();
        h.document.answer_confirm(false);

        assert!(h.document.click_row(Region::PatientTable, RowAction::Delete("2".into())));
        h.settle();

        assert_eq!(h.document.prompts().len(), 1);
        assert!(h.document.prompts()[0].contains("Patient ID 2"));
        assert_eq!(h.backend.count(Method::Delete, "delete_patient/2"), 0);
        assert_eq!(h.backend.count(Method::Get, "patients"), 1);
        assert!(h.notifier.notices().is_empty());
    }

    #[test]
    fn test_confirmed_delete_notifies_and_refetches() {
        let mut h = patients_page();
        h.backend.respond_json(
            Method::Delete,
            "delete_patient/2",
            json!({"status": "success", "message": "Patient 2 deleted."}),
        );
        h.backend.respond_json(Method::Get, "patients", json!([{"id": 1, "name": "Ada Obi"}]));

        h.document.click_row(Region::PatientTable, RowAction::Delete("2".into()));
        h.settle();

        assert_eq!(h.backend.count(Method::Delete, "delete_patient/2"), 1);
        assert_eq!(h.backend.count(Method::Get, "patients"), 2);
        let notice = h.notifier.last().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, "Patient 2 deleted.");
        let body = h.document.html(Region::PatientTable).unwrap();
        assert_eq!(body.matches("<tr>").count(), 1);
    }

    #[test]
    fn test_rejected_delete_shows_server_message() {
        let mut h = patients_page();
        h.backend.respond(
            Method::Delete,
            "delete_patient/2",
            404,
            r#"{"status": "error", "message": "Patient not found."}"#,
        );

        h.document.click_row(Region::PatientTable, RowAction::Delete("2".into()));
        h.settle();

        let notice = h.notifier.last().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Patient not found.");
        assert_eq!(h.backend.count(Method::Get, "patients"), 1);
    }

    #[test]
    fn test_delete_transport_failure_shows_generic_message() {
        let mut h = patients_page();
        h.backend.unreachable(Method::Delete, "delete_patient/1");

        h.document.click_row(Region::PatientTable, RowAction::Delete("1".into()));
        h.settle();

        assert_eq!(
            h.notifier.last().unwrap().message,
            "Server error: Could not delete patient."
        );
        assert_eq!(h.backend.count(Method::Get, "patients"), 1);
    }

    // =========================================================================
    // View
    // =========================================================================

    #[test]
    fn test_view_remembers_patient_and_opens_details() {
        let h = patients_page();

        h.document.click_row(Region::PatientTable, RowAction::View("2".into()));

        assert_eq!(h.session().current_patient().as_deref(), Some("2"));
        assert_eq!(h.document.navigations(), vec![Page::PatientDetails]);
        assert!(h.backend.calls().iter().all(|c| c.method == Method::Get));
    }

    // =========================================================================
    // Add patient page
    // =========================================================================

    fn add_patient_page() -> Harness {
        let mut h = Harness::new();
        assert!(h.mount(Page::AddPatient));
        h.document.fill(Field::PatientName, "Cleo Park");
        h.document.fill(Field::PatientAge, "29");
        h.document.fill(Field::PatientGender, "F");
        h.document.fill(Field::PatientContact, "555-0199");
        h.document.fill(Field::PatientAddress, "12 Elm St");
        h.document.fill(Field::PatientDisease, "Migraine");
        h
    }

    #[test]
    fn test_add_patient_posts_form_fields() {
        let mut h = add_patient_page();
        h.backend.respond(Method::Post, "add_patient", 201, "");

        assert!(h.document.submit(FormId::AddPatient));
        h.settle();

        assert_eq!(
            h.backend.last_body("add_patient"),
            Some(json!({
                "name": "Cleo Park",
                "age": "29",
                "gender": "F",
                "contact": "555-0199",
                "address": "12 Elm St",
                "disease": "Migraine"
            }))
        );
        assert_eq!(h.document.resets(), vec![FormId::AddPatient]);
        assert_eq!(
            h.notifier.last().unwrap().message,
            "Patient added successfully!"
        );
        // no list on this page
        assert_eq!(h.backend.count(Method::Get, "patients"), 0);
    }

    #[test]
    fn test_add_patient_non_success_status() {
        let mut h = add_patient_page();
        h.backend.respond(Method::Post, "add_patient", 400, r#"{"status": "success"}"#);

        h.document.submit(FormId::AddPatient);
        h.settle();

        let notice = h.notifier.last().unwrap();
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Failed to add patient.");
        assert!(h.document.resets().is_empty());
    }

    #[test]
    fn test_add_patient_unreachable() {
        let mut h = add_patient_page();
        h.backend.unreachable(Method::Post, "add_patient");

        h.document.submit(FormId::AddPatient);
        h.settle();

        assert_eq!(
            h.notifier.last().unwrap().message,
            "Server error: Could not add patient."
        );
        assert!(h.document.resets().is_empty());
    }
}
