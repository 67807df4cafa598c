use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static BUDGET_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid regex"));

pub const REQUIRED_MESSAGE: &str = "This field is required.";
pub const BUDGET_MESSAGE: &str = "Please provide a budget estimate.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Service,
    Budget,
    Idea,
}

impl Field {
    pub const REQUIRED: [Field; 4] = [Field::Name, Field::Email, Field::Service, Field::Idea];
}

/// Services offered in the form's picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    WebDevelopment,
    Other,
}

impl Service {
    pub const ALL: [Service; 2] = [Service::WebDevelopment, Service::Other];

    /// Value sent to the email template.
    pub fn wire_value(self) -> &'static str {
        match self {
            Service::WebDevelopment => "Web Development",
            Service::Other => "other",
        }
    }

    /// Paid services need a budget estimate.
    pub fn needs_budget(self) -> bool {
        !matches!(self, Service::Other)
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Service::WebDevelopment => "Web Development",
            Service::Other => "Others",
        };
        write!(f, "{}", label)
    }
}

/// Per-field validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Values typed into the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub service: Option<Service>,
    pub budget: String,
    pub idea: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Service => self.service.map(Service::wire_value).unwrap_or(""),
            Field::Budget => &self.budget,
            Field::Idea => &self.idea,
        }
    }

    /// Whether the budget field is shown and required.
    pub fn budget_required(&self) -> bool {
        self.service.is_some_and(Service::needs_budget)
    }

    /// Apply a text edit. Budget input that is not all digits is rejected and
    /// leaves the stored value untouched. An accepted edit clears the field's
    /// error.
    pub fn edit(&mut self, field: Field, value: String, errors: &mut FieldErrors) -> bool {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Budget => {
                if !value.is_empty() && !BUDGET_PATTERN.is_match(&value) {
                    return false;
                }
                &mut self.budget
            }
            Field::Idea => &mut self.idea,
            Field::Service => return false,
        };
        *slot = value;
        errors.clear(field);
        true
    }

    pub fn select_service(&mut self, service: Service, errors: &mut FieldErrors) {
        self.service = Some(service);
        errors.clear(Field::Service);
        if !service.needs_budget() {
            errors.clear(Field::Budget);
        }
    }

    /// Collect every validation failure; empty when the form can be sent.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::default();
        for field in Field::REQUIRED {
            if self.value(field).trim().is_empty() {
                errors.insert(field, REQUIRED_MESSAGE);
            }
        }
        if self.budget_required() && self.budget.trim().is_empty() {
            errors.insert(Field::Budget, BUDGET_MESSAGE);
        }
        errors
    }

    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            service: Some(Service::Other),
            budget: String::new(),
            idea: "A landing page".into(),
        }
    }

    #[test]
    fn empty_form_reports_four_required_fields() {
        let errors = ContactForm::default().validate();
        assert_eq!(errors.len(), 4);
        let fields: Vec<Field> = errors.fields().collect();
        assert_eq!(fields, Field::REQUIRED.to_vec());
        assert!(errors.fields().all(|f| errors.get(f) == Some(REQUIRED_MESSAGE)));
    }

    #[test]
    fn paid_service_without_budget_reports_only_budget() {
        let mut form = filled_form();
        form.service = Some(Service::WebDevelopment);
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Budget), Some(BUDGET_MESSAGE));
    }

    #[test]
    fn other_service_needs_no_budget() {
        assert!(filled_form().validate().is_empty());
    }

    #[test]
    fn whitespace_only_values_are_missing() {
        let mut form = filled_form();
        form.name = "   ".into();
        let errors = form.validate();
        assert_eq!(errors.get(Field::Name), Some(REQUIRED_MESSAGE));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn budget_rejects_non_digit_input() {
        let mut form = filled_form();
        let mut errors = FieldErrors::default();
        assert!(form.edit(Field::Budget, "12".into(), &mut errors));
        assert!(!form.edit(Field::Budget, "12a".into(), &mut errors));
        assert!(!form.edit(Field::Budget, "1.5".into(), &mut errors));
        assert!(!form.edit(Field::Budget, "١٢".into(), &mut errors));
        assert_eq!(form.budget, "12");
        assert!(form.edit(Field::Budget, String::new(), &mut errors));
        assert_eq!(form.budget, "");
    }

    #[test]
    fn accepted_edit_clears_that_fields_error() {
        let mut form = ContactForm::default();
        let mut errors = form.validate();
        form.edit(Field::Name, "Ada".into(), &mut errors);
        assert_eq!(errors.get(Field::Name), None);
        assert_eq!(errors.get(Field::Email), Some(REQUIRED_MESSAGE));

        form.select_service(Service::WebDevelopment, &mut errors);
        assert_eq!(errors.get(Field::Service), None);
    }

    #[test]
    fn reset_empties_every_field() {
        let mut form = filled_form();
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}
