//! Contact form fields

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Shape accepted by `<input type="email">`: something@something, no whitespace
#[allow(clippy::expect_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+$").expect("email pattern is valid"));

/// Address of one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Company,
    Message,
    /// Hidden spam trap, never shown to people
    Honeypot,
}

impl FormField {
    /// Fields a visitor can reach, in tab order
    pub fn visible() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Email,
            FormField::Company,
            FormField::Message,
        ]
    }

    /// Whether the field must be filled in before the browser lets the form submit
    pub fn is_required(self) -> bool {
        matches!(self, FormField::Name | FormField::Email | FormField::Message)
    }
}

/// Values of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub honeypot: String,
}

impl ContactForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::Message => &self.message,
            FormField::Honeypot => &self.honeypot,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Company => &mut self.company,
            FormField::Message => &mut self.message,
            FormField::Honeypot => &mut self.honeypot,
        }
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn push_char(&mut self, field: FormField, ch: char) {
        self.get_mut(field).push(ch);
    }

    pub fn pop_char(&mut self, field: FormField) {
        self.get_mut(field).pop();
    }

    /// Reset every field, honeypot included, to an empty string
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the hidden spam trap was filled in
    pub fn is_spam(&self) -> bool {
        !self.honeypot.is_empty()
    }

    /// First field failing the native constraints (`required`, `type=email`)
    pub fn first_invalid_field(&self) -> Option<FormField> {
        FormField::visible()
            .iter()
            .copied()
            .find(|&field| self.field_issue(field).is_some())
    }

    /// Constraint violated by `field`, if any
    pub fn field_issue(&self, field: FormField) -> Option<FieldIssue> {
        let value = self.get(field).trim();
        if field.is_required() && value.is_empty() {
            return Some(FieldIssue::Required);
        }
        if field == FormField::Email && !value.is_empty() && !is_email(value) {
            return Some(FieldIssue::InvalidEmail);
        }
        None
    }

    /// Data sent to the submission endpoint; the honeypot never leaves the form
    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            message: self.message.clone(),
        }
    }
}

/// Native constraint violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Required,
    InvalidEmail,
}

/// Body of a submission request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_all_five_fields() {
        let mut form = ContactForm {
            name: "Ada".into(),
            email: "ada@x.com".into(),
            company: "Engines AB".into(),
            message: "Hello".into(),
            honeypot: "bot".into(),
        };
        form.clear();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn payload_skips_honeypot() {
        let mut form = ContactForm::default();
        form.set(FormField::Name, "Ada");
        form.set(FormField::Honeypot, "http://spam");

        let json = serde_json::to_value(form.payload()).unwrap();
        assert_eq!(json["name"], "Ada");
        assert!(json.get("honeypot").is_none());
    }

    #[test]
    fn required_fields_checked_in_tab_order() {
        let mut form = ContactForm::default();
        assert_eq!(form.first_invalid_field(), Some(FormField::Name));

        form.set(FormField::Name, "Ada");
        form.set(FormField::Email, "not-an-address");
        assert_eq!(form.first_invalid_field(), Some(FormField::Email));
        assert_eq!(
            form.field_issue(FormField::Email),
            Some(FieldIssue::InvalidEmail)
        );

        form.set(FormField::Email, "ada@x.com");
        assert_eq!(form.first_invalid_field(), Some(FormField::Message));

        form.set(FormField::Message, "Hello");
        assert_eq!(form.first_invalid_field(), None);
    }

    #[test]
    fn email_shape_follows_browser_check() {
        for ok in ["ada@x.com", "a@b", "first.last+tag@example.co.uk"] {
            assert!(is_email(ok), "{ok} rejected");
        }
        for bad in ["ada", "@x.com", "ada@", "ada @x.com", "ada@x@y"] {
            assert!(!is_email(bad), "{bad} accepted");
        }
    }

    #[test]
    fn company_is_optional() {
        let form = ContactForm::default();
        assert_eq!(form.field_issue(FormField::Company), None);
    }

    #[test]
    fn typing_edits_the_addressed_field() {
        let mut form = ContactForm::default();
        for ch in "Adx".chars() {
            form.push_char(FormField::Name, ch);
        }
        form.pop_char(FormField::Name);
        form.push_char(FormField::Name, 'a');

        assert_eq!(form.get(FormField::Name), "Ada");
        assert!(form.email.is_empty());
        assert!(!form.is_spam());
    }
}
