use super::super::state::App;
use super::Effect;
use crate::contact::{Field, Service};
use std::time::Instant;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_contact_field_changed(&mut self, field: Field, value: String) {
        let contact = &mut self.contact;
        if !contact.form.edit(field, value, &mut contact.errors) {
            debug!(?field, "Rejected contact input");
        }
    }

    pub(super) fn handle_contact_service_selected(&mut self, service: Service) {
        let contact = &mut self.contact;
        contact.form.select_service(service, &mut contact.errors);
    }

    pub(super) fn handle_submit_contact(&mut self, effects: &mut Vec<Effect>) {
        if self.contact.status.is_sending() {
            debug!("Submission already in flight; ignoring submit");
            return;
        }
        let errors = self.contact.form.validate();
        if !errors.is_empty() {
            info!(
                count = errors.len(),
                invalid = ?errors.fields().collect::<Vec<_>>(),
                "Contact form failed validation"
            );
            self.contact.errors = errors;
            return;
        }
        self.contact.errors = errors;
        if self.contact.status.begin() {
            effects.push(Effect::SendContact(
                self.email.request_for(&self.contact.form),
            ));
        }
    }

    pub(super) fn handle_contact_sent(&mut self, result: Result<(), String>, now: Instant) {
        let delivered = match &result {
            Ok(()) => true,
            Err(err) => {
                debug!("Contact message was not delivered: {err}");
                false
            }
        };
        if self.contact.status.resolve(delivered, now) && delivered {
            self.contact.form.reset();
            self.contact.errors = Default::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::*;
    use crate::config::AppConfig;
    use crate::contact::{ContactForm, SubmissionStatus};
    use std::time::Duration;

    fn build_test_app() -> App {
        let mut config = AppConfig::default();
        config.intro_enabled = false;
        config.contact.service_id = "svc".into();
        config.contact.template_id = "tpl".into();
        config.contact.public_key = "pk".into();
        let (app, _task) = App::bootstrap(config);
        app
    }

    fn fill(app: &mut App, service: Service, budget: &str) {
        app.reduce(Message::ContactFieldChanged(Field::Name, "Ada".into()));
        app.reduce(Message::ContactFieldChanged(
            Field::Email,
            "ada@example.com".into(),
        ));
        app.reduce(Message::ContactServiceSelected(service));
        app.reduce(Message::ContactFieldChanged(Field::Budget, budget.into()));
        app.reduce(Message::ContactFieldChanged(Field::Idea, "A shop".into()));
    }

    fn settle_window(app: &App) -> Duration {
        app.config.contact.status_display()
    }

    #[test]
    fn empty_submit_reports_four_errors_and_sends_nothing() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::SubmitContact);
        assert!(effects.is_empty());
        assert_eq!(app.contact.errors.len(), 4);
        for field in Field::REQUIRED {
            assert!(app.contact.errors.get(field).is_some(), "{field:?}");
        }
        assert_eq!(app.contact.status, SubmissionStatus::Idle);
    }

    #[test]
    fn paid_service_without_budget_reports_only_budget() {
        let mut app = build_test_app();
        fill(&mut app, Service::WebDevelopment, "");
        let effects = app.reduce(Message::SubmitContact);
        assert!(effects.is_empty());
        assert_eq!(app.contact.errors.len(), 1);
        assert!(app.contact.errors.get(Field::Budget).is_some());
    }

    #[test]
    fn non_digit_budget_keystrokes_are_dropped() {
        let mut app = build_test_app();
        app.reduce(Message::ContactServiceSelected(Service::WebDevelopment));
        app.reduce(Message::ContactFieldChanged(Field::Budget, "4".into()));
        app.reduce(Message::ContactFieldChanged(Field::Budget, "4k".into()));
        assert_eq!(app.contact.form.budget, "4");
        app.reduce(Message::ContactFieldChanged(Field::Budget, "40".into()));
        assert_eq!(app.contact.form.budget, "40");
    }

    #[test]
    fn valid_submit_sends_exactly_once() {
        let mut app = build_test_app();
        fill(&mut app, Service::WebDevelopment, "900");
        let effects = app.reduce(Message::SubmitContact);
        assert!(matches!(
            effects.as_slice(),
            [Effect::SendContact(request)] if request.template_params.budget == "900"
        ));
        assert!(app.contact.status.is_sending());
        assert!(app.contact.errors.is_empty());

        let again = app.reduce(Message::SubmitContact);
        assert!(again.is_empty());
    }

    #[test]
    fn success_clears_form_then_returns_to_idle() {
        let mut app = build_test_app();
        fill(&mut app, Service::Other, "");
        app.reduce(Message::SubmitContact);
        app.reduce(Message::ContactSent(Ok(())));

        assert!(matches!(
            app.contact.status,
            SubmissionStatus::Succeeded { .. }
        ));
        assert_eq!(app.contact.form, ContactForm::default());

        let later = Instant::now() + settle_window(&app) + Duration::from_millis(10);
        app.reduce(Message::Tick(later));
        assert_eq!(app.contact.status, SubmissionStatus::Idle);
    }

    #[test]
    fn failure_keeps_fields_then_returns_to_idle() {
        let mut app = build_test_app();
        fill(&mut app, Service::WebDevelopment, "250");
        let before = app.contact.form.clone();
        app.reduce(Message::SubmitContact);
        app.reduce(Message::ContactSent(Err("HTTP 500".into())));

        assert!(matches!(app.contact.status, SubmissionStatus::Failed { .. }));
        assert_eq!(app.contact.form, before);

        app.reduce(Message::Tick(Instant::now()));
        assert!(app.contact.status.is_settling());
        let later = Instant::now() + settle_window(&app) + Duration::from_millis(10);
        app.reduce(Message::Tick(later));
        assert_eq!(app.contact.status, SubmissionStatus::Idle);
        assert_eq!(app.contact.form, before);
    }

    #[test]
    fn corrected_form_can_be_resubmitted() {
        let mut app = build_test_app();
        fill(&mut app, Service::WebDevelopment, "");
        assert!(app.reduce(Message::SubmitContact).is_empty());
        app.reduce(Message::ContactFieldChanged(Field::Budget, "75".into()));
        assert!(app.contact.errors.is_empty());
        assert_eq!(app.reduce(Message::SubmitContact).len(), 1);
    }
}
