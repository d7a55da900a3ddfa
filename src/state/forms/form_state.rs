//! Registration form state: role selection, conditional fields and submission

use super::field::FormField;
use super::validation::{is_valid_email, ValidationError};
use serde::Serialize;

/// The visitor's self-declared relationship to the course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Unselected,
    Parent,
    Teacher,
    Educator,
    Other,
}

impl Role {
    /// Options in the order the selector presents them
    pub const OPTIONS: [Role; 5] = [
        Role::Unselected,
        Role::Parent,
        Role::Teacher,
        Role::Educator,
        Role::Other,
    ];

    fn position(self) -> usize {
        Self::OPTIONS
            .iter()
            .position(|r| *r == self)
            .unwrap_or_default()
    }

    pub fn next(self) -> Self {
        Self::OPTIONS[(self.position() + 1) % Self::OPTIONS.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::OPTIONS.len();
        Self::OPTIONS[(self.position() + len - 1) % len]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Unselected => "Selecciona una opción",
            Self::Parent => "Padre / Madre",
            Self::Teacher => "Maestro/a",
            Self::Educator => "Educador/a",
            Self::Other => "Otro",
        }
    }

    /// Value transmitted as `rol`; `None` for the unselected sentinel
    pub fn form_value(self) -> Option<&'static str> {
        match self {
            Self::Unselected => None,
            Self::Parent => Some("padre"),
            Self::Teacher => Some("maestro"),
            Self::Educator => Some("educador"),
            Self::Other => Some("otro"),
        }
    }

    /// Extra field revealed by this role
    pub fn conditional_field(self) -> Option<ConditionalField> {
        match self {
            Self::Parent => Some(ConditionalField::ChildrenAge),
            Self::Other => Some(ConditionalField::OtherRole),
            Self::Unselected | Self::Teacher | Self::Educator => None,
        }
    }
}

/// Role-dependent optional field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionalField {
    /// "Age of children", shown to parents
    ChildrenAge,
    /// "Please specify", shown for other roles
    OtherRole,
}

impl ConditionalField {
    pub fn name(self) -> &'static str {
        match self {
            Self::ChildrenAge => "edad_hijos",
            Self::OtherRole => "rol_otro",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ChildrenAge => "Edad de los hijos (opcional)",
            Self::OtherRole => "Especifica (opcional)",
        }
    }

    fn new_field(self) -> FormField {
        FormField::text(self.name(), self.label())
    }
}

/// Whether the visitor has sent the form during this page run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    NotSubmitted,
    Submitted,
}

impl SubmissionState {
    pub fn is_submitted(self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// One-way transition; there is no way back to `NotSubmitted`
    fn mark_submitted(&mut self) {
        *self = Self::Submitted;
    }
}

/// Focusable positions of the form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Name,
    Email,
    Phone,
    ParticipantAge,
    Attendance,
    Role,
    Conditional,
    Consent,
    Submit,
}

/// Flat key/value set handed to the form endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload {
    fields: Vec<(&'static str, String)>,
}

impl FormPayload {
    fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.fields.push((name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Field names in transmission order
    pub fn names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(n, _)| *n).collect()
    }
}

/// Value sent for a checked, named checkbox
const CHECKBOX_ON: &str = "on";
const CONSENT_NAME: &str = "consentimiento";

/// The registration form hosted by the page
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    /// Only rendered when the page edition asks for it
    pub participant_age: Option<FormField>,
    pub attendance: FormField,
    pub consent: bool,
    role: Role,
    conditional: Option<FormField>,
    submission: SubmissionState,
    focus: FormFocus,
    invalid: Option<ValidationError>,
}

impl RegistrationForm {
    pub fn new(show_participant_age: bool) -> Self {
        Self {
            name: FormField::text("nombre", "Nombre y apellidos").required(),
            email: FormField::email("email", "Correo electrónico").required(),
            phone: FormField::tel("telefono", "Teléfono"),
            participant_age: show_participant_age.then(|| {
                FormField::text("edad_participante", "Edad del participante (opcional)")
            }),
            attendance: FormField::text("asistencia", "Primer martes previsto (opcional)"),
            consent: false,
            role: Role::default(),
            conditional: None,
            submission: SubmissionState::default(),
            focus: FormFocus::Name,
            invalid: None,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_submitted(&self) -> bool {
        self.submission().is_submitted()
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Error that blocked the last submit attempt, if any
    pub fn invalid(&self) -> Option<ValidationError> {
        self.invalid
    }

    /// Currently visible role-dependent field
    pub fn conditional(&self) -> Option<&FormField> {
        self.conditional.as_ref()
    }

    #[cfg(test)]
    pub fn conditional_mut(&mut self) -> Option<&mut FormField> {
        self.conditional.as_mut()
    }

    /// Replace the selected role. Returns whether anything changed.
    ///
    /// A different role swaps the conditional field for a fresh one, so a
    /// value typed into a field that gets hidden is dropped.
    pub fn select_role(&mut self, role: Role) -> bool {
        if role == self.role {
            return false;
        }
        self.role = role;
        self.conditional = role.conditional_field().map(ConditionalField::new_field);

        if self.focus == FormFocus::Conditional && self.conditional.is_none() {
            self.focus = FormFocus::Role;
        }
        if self.invalid == Some(ValidationError::RoleRequired) && role != Role::Unselected {
            self.invalid = None;
        }
        true
    }

    pub fn select_next_role(&mut self) {
        self.select_role(self.role.next());
    }

    pub fn select_prev_role(&mut self) {
        self.select_role(self.role.prev());
    }

    pub fn toggle_consent(&mut self) {
        self.consent = !self.consent;
        if self.consent && self.invalid == Some(ValidationError::ConsentRequired) {
            self.invalid = None;
        }
    }

    /// Tab order of the fields currently rendered
    pub fn focus_order(&self) -> Vec<FormFocus> {
        let mut order = vec![FormFocus::Name, FormFocus::Email, FormFocus::Phone];
        if self.participant_age.is_some() {
            order.push(FormFocus::ParticipantAge);
        }
        order.push(FormFocus::Attendance);
        order.push(FormFocus::Role);
        if self.conditional.is_some() {
            order.push(FormFocus::Conditional);
        }
        order.push(FormFocus::Consent);
        order.push(FormFocus::Submit);
        order
    }

    fn focus_index(&self, order: &[FormFocus]) -> usize {
        order
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or_default()
    }

    pub fn next_field(&mut self) {
        let order = self.focus_order();
        let current = self.focus_index(&order);
        self.focus = order[(current + 1) % order.len()];
    }

    pub fn prev_field(&mut self) {
        let order = self.focus_order();
        let current = self.focus_index(&order);
        self.focus = if current == 0 {
            order[order.len() - 1]
        } else {
            order[current - 1]
        };
    }

    /// Move focus to a field; ignored when the field is not rendered
    #[cfg(test)]
    pub fn set_focus(&mut self, focus: FormFocus) {
        if self.focus_order().contains(&focus) {
            self.focus = focus;
        }
    }

    /// Text field under focus, if focus is on a text input
    pub fn active_text_field_mut(&mut self) -> Option<&mut FormField> {
        match self.focus {
            FormFocus::Name => Some(&mut self.name),
            FormFocus::Email => Some(&mut self.email),
            FormFocus::Phone => Some(&mut self.phone),
            FormFocus::ParticipantAge => self.participant_age.as_mut(),
            FormFocus::Attendance => Some(&mut self.attendance),
            FormFocus::Conditional => self.conditional.as_mut(),
            FormFocus::Role | FormFocus::Consent | FormFocus::Submit => None,
        }
    }

    /// Route a typed character to the focused control
    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormFocus::Role if c == ' ' => self.select_next_role(),
            FormFocus::Consent if c == ' ' => self.toggle_consent(),
            _ => {
                if let Some(field) = self.active_text_field_mut() {
                    field.push_char(c);
                }
            }
        }
    }

    /// Empty the focused text field
    pub fn clear_field(&mut self) {
        if let Some(field) = self.active_text_field_mut() {
            field.clear();
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_text_field_mut() {
            field.pop_char();
        }
    }

    /// Run the required-field checks in render order
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_blank() {
            return Err(ValidationError::NameRequired);
        }
        if self.email.is_blank() {
            return Err(ValidationError::EmailRequired);
        }
        if !is_valid_email(self.email.as_text().trim()) {
            return Err(ValidationError::EmailInvalid);
        }
        if self.role == Role::Unselected {
            return Err(ValidationError::RoleRequired);
        }
        if !self.consent {
            return Err(ValidationError::ConsentRequired);
        }
        Ok(())
    }

    /// Field set of the rendered controls, in render order
    pub fn payload(&self) -> FormPayload {
        let mut payload = FormPayload::default();
        payload.push(self.name.name, self.name.as_text());
        payload.push(self.email.name, self.email.as_text().trim());
        payload.push(self.phone.name, self.phone.as_text());
        if let Some(age) = &self.participant_age {
            payload.push(age.name, age.as_text());
        }
        payload.push(self.attendance.name, self.attendance.as_text());
        if let Some(role) = self.role.form_value() {
            payload.push("rol", role);
        }
        if let Some(field) = &self.conditional {
            payload.push(field.name, field.as_text());
        }
        if self.consent {
            payload.push(CONSENT_NAME, CHECKBOX_ON);
        }
        payload
    }

    /// Submit the form.
    ///
    /// When the checks pass the state becomes `Submitted` right away and the
    /// payload is returned for delivery; the outcome of that delivery never
    /// feeds back into the form. When a check fails nothing is sent and focus
    /// moves to the offending field.
    pub fn submit(&mut self) -> Result<FormPayload, ValidationError> {
        if let Err(err) = self.validate() {
            self.invalid = Some(err);
            self.focus = err.focus();
            return Err(err);
        }
        self.invalid = None;
        let payload = self.payload();
        self.submission.mark_submitted();
        Ok(payload)
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(field: &mut FormField, text: &str) {
        for c in text.chars() {
            field.push_char(c);
        }
    }

    fn filled_form() -> RegistrationForm {
        let mut form = RegistrationForm::new(false);
        type_into(&mut form.name, "Ana Pérez");
        type_into(&mut form.email, "ana@example.com");
        form.select_role(Role::Teacher);
        form.toggle_consent();
        form
    }

    mod role {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_unselected() {
            assert_eq!(Role::default(), Role::Unselected);
        }

        #[test]
        fn test_next_cycles_through_all_options() {
            let mut role = Role::Unselected;
            let mut seen = vec![role];
            for _ in 0..4 {
                role = role.next();
                seen.push(role);
            }
            assert_eq!(seen, Role::OPTIONS.to_vec());
            assert_eq!(role.next(), Role::Unselected);
        }

        #[test]
        fn test_prev_wraps() {
            assert_eq!(Role::Unselected.prev(), Role::Other);
            assert_eq!(Role::Parent.prev(), Role::Unselected);
        }

        #[test]
        fn test_form_values() {
            assert_eq!(Role::Unselected.form_value(), None);
            assert_eq!(Role::Parent.form_value(), Some("padre"));
            assert_eq!(Role::Teacher.form_value(), Some("maestro"));
            assert_eq!(Role::Educator.form_value(), Some("educador"));
            assert_eq!(Role::Other.form_value(), Some("otro"));
        }

        #[test]
        fn test_conditional_field_policy() {
            assert_eq!(Role::Unselected.conditional_field(), None);
            assert_eq!(
                Role::Parent.conditional_field(),
                Some(ConditionalField::ChildrenAge)
            );
            assert_eq!(Role::Teacher.conditional_field(), None);
            assert_eq!(Role::Educator.conditional_field(), None);
            assert_eq!(
                Role::Other.conditional_field(),
                Some(ConditionalField::OtherRole)
            );
        }
    }

    mod conditional_fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_initially_hidden() {
            let form = RegistrationForm::new(false);
            assert!(form.conditional().is_none());
        }

        #[test]
        fn test_visible_field_follows_latest_role() {
            let mut form = RegistrationForm::new(false);
            let sequence = [
                Role::Parent,
                Role::Other,
                Role::Teacher,
                Role::Parent,
                Role::Educator,
                Role::Unselected,
                Role::Other,
                Role::Other,
            ];
            for role in sequence {
                form.select_role(role);
                let visible = form.conditional().map(|f| f.name);
                let expected = role.conditional_field().map(ConditionalField::name);
                assert_eq!(visible, expected, "after selecting {role:?}");
            }
        }

        #[test]
        fn test_parent_then_teacher_drops_children_age() {
            let mut form = filled_form();
            form.select_role(Role::Parent);
            type_into(form.conditional_mut().unwrap(), "8");
            form.select_role(Role::Teacher);

            assert!(form.conditional().is_none());
            let payload = form.submit().unwrap();
            assert!(!payload.contains("edad_hijos"));
            assert_eq!(payload.get("rol"), Some("maestro"));
        }

        #[test]
        fn test_switching_back_does_not_restore_value() {
            let mut form = RegistrationForm::new(false);
            form.select_role(Role::Parent);
            type_into(form.conditional_mut().unwrap(), "5 y 9");
            form.select_role(Role::Other);
            form.select_role(Role::Parent);
            assert_eq!(form.conditional().unwrap().as_text(), "");
        }

        #[test]
        fn test_reselecting_same_role_is_idempotent() {
            let mut form = RegistrationForm::new(false);
            assert!(form.select_role(Role::Other));
            type_into(form.conditional_mut().unwrap(), "abuela");
            assert!(!form.select_role(Role::Other));
            assert_eq!(form.conditional().unwrap().as_text(), "abuela");
            assert_eq!(form.role(), Role::Other);
        }

        #[test]
        fn test_focus_leaves_hidden_field() {
            let mut form = RegistrationForm::new(false);
            form.select_role(Role::Parent);
            form.set_focus(FormFocus::Conditional);
            form.select_role(Role::Educator);
            assert_eq!(form.focus(), FormFocus::Role);
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_order_without_optional_controls() {
            let form = RegistrationForm::new(false);
            assert_eq!(
                form.focus_order(),
                vec![
                    FormFocus::Name,
                    FormFocus::Email,
                    FormFocus::Phone,
                    FormFocus::Attendance,
                    FormFocus::Role,
                    FormFocus::Consent,
                    FormFocus::Submit,
                ]
            );
        }

        #[test]
        fn test_order_includes_participant_age_and_conditional() {
            let mut form = RegistrationForm::new(true);
            form.select_role(Role::Parent);
            let order = form.focus_order();
            assert_eq!(order.len(), 9);
            assert_eq!(order[3], FormFocus::ParticipantAge);
            assert_eq!(order[6], FormFocus::Conditional);
        }

        #[test]
        fn test_next_and_prev_wrap() {
            let mut form = RegistrationForm::new(false);
            form.prev_field();
            assert_eq!(form.focus(), FormFocus::Submit);
            form.next_field();
            assert_eq!(form.focus(), FormFocus::Name);
        }

        #[test]
        fn test_set_focus_ignores_hidden_fields() {
            let mut form = RegistrationForm::new(false);
            form.set_focus(FormFocus::ParticipantAge);
            assert_eq!(form.focus(), FormFocus::Name);
            form.set_focus(FormFocus::Conditional);
            assert_eq!(form.focus(), FormFocus::Name);
        }

        #[test]
        fn test_space_on_role_cycles_and_on_consent_toggles() {
            let mut form = RegistrationForm::new(false);
            form.set_focus(FormFocus::Role);
            form.input_char(' ');
            assert_eq!(form.role(), Role::Parent);

            form.set_focus(FormFocus::Consent);
            form.input_char(' ');
            assert!(form.consent);
            form.input_char(' ');
            assert!(!form.consent);
        }

        #[test]
        fn test_typing_goes_to_focused_field() {
            let mut form = RegistrationForm::new(false);
            form.input_char('A');
            form.next_field();
            form.input_char('a');
            form.input_char('@');
            form.backspace();
            assert_eq!(form.name.as_text(), "A");
            assert_eq!(form.email.as_text(), "a");
        }

        #[test]
        fn test_clear_field_empties_only_focused_field() {
            let mut form = RegistrationForm::new(false);
            type_into(&mut form.name, "Ana");
            type_into(&mut form.email, "ana@example.com");
            form.next_field();
            form.clear_field();
            assert_eq!(form.email.as_text(), "");
            assert_eq!(form.name.as_text(), "Ana");

            form.set_focus(FormFocus::Role);
            form.clear_field();
            assert_eq!(form.name.as_text(), "Ana");
        }

        #[test]
        fn test_typing_on_submit_is_ignored() {
            let mut form = RegistrationForm::new(false);
            form.set_focus(FormFocus::Submit);
            form.input_char('x');
            assert_eq!(form.payload().get("nombre"), Some(""));
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_not_submitted() {
            let form = RegistrationForm::new(false);
            assert_eq!(form.submission(), SubmissionState::NotSubmitted);
            assert!(!form.is_submitted());
        }

        #[test]
        fn test_submit_marks_submitted() {
            let mut form = filled_form();
            assert!(form.submit().is_ok());
            assert_eq!(form.submission(), SubmissionState::Submitted);
        }

        #[test]
        fn test_submitted_is_terminal() {
            let mut form = filled_form();
            form.submit().unwrap();
            form.select_role(Role::Other);
            form.name.clear();
            assert!(form.submit().is_err());
            assert!(form.is_submitted());
        }

        #[test]
        fn test_ana_perez_scenario() {
            let mut form = RegistrationForm::new(false);
            type_into(&mut form.name, "Ana Pérez");
            type_into(&mut form.email, "ana@example.com");
            form.select_role(Role::Parent);
            type_into(form.conditional_mut().unwrap(), "8");
            form.toggle_consent();

            let payload = form.submit().unwrap();
            assert_eq!(payload.get("nombre"), Some("Ana Pérez"));
            assert_eq!(payload.get("email"), Some("ana@example.com"));
            assert_eq!(payload.get("rol"), Some("padre"));
            assert_eq!(payload.get("edad_hijos"), Some("8"));
            assert_eq!(payload.get("consentimiento"), Some("on"));
            assert!(form.is_submitted());
        }

        #[test]
        fn test_other_without_specify_submits() {
            let mut form = filled_form();
            form.select_role(Role::Other);
            let payload = form.submit().unwrap();
            assert_eq!(payload.get("rol"), Some("otro"));
            assert_eq!(payload.get("rol_otro"), Some(""));
        }

        #[test]
        fn test_payload_order_and_names() {
            let mut form = RegistrationForm::new(true);
            type_into(&mut form.name, "Luis");
            type_into(&mut form.email, "luis@example.com");
            form.select_role(Role::Other);
            form.toggle_consent();
            assert_eq!(
                form.payload().names(),
                vec![
                    "nombre",
                    "email",
                    "telefono",
                    "edad_participante",
                    "asistencia",
                    "rol",
                    "rol_otro",
                    "consentimiento",
                ]
            );
        }

        #[test]
        fn test_email_is_trimmed() {
            let mut form = filled_form();
            form.email.set_text("  ana@example.com ");
            let payload = form.submit().unwrap();
            assert_eq!(payload.get("email"), Some("ana@example.com"));
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_missing_name_blocks_and_focuses() {
            let mut form = filled_form();
            form.name.clear();
            form.set_focus(FormFocus::Submit);
            assert_eq!(form.submit(), Err(ValidationError::NameRequired));
            assert_eq!(form.focus(), FormFocus::Name);
            assert_eq!(form.invalid(), Some(ValidationError::NameRequired));
            assert!(!form.is_submitted());
        }

        #[test]
        fn test_malformed_email_blocks() {
            let mut form = filled_form();
            form.email.set_text("ana@");
            assert_eq!(form.submit(), Err(ValidationError::EmailInvalid));
            assert_eq!(form.focus(), FormFocus::Email);
        }

        #[test]
        fn test_empty_email_blocks() {
            let mut form = filled_form();
            form.email.clear();
            assert_eq!(form.validate(), Err(ValidationError::EmailRequired));
        }

        #[test]
        fn test_unselected_role_blocks() {
            let mut form = filled_form();
            form.select_role(Role::Unselected);
            assert_eq!(form.submit(), Err(ValidationError::RoleRequired));
            assert_eq!(form.focus(), FormFocus::Role);
        }

        #[test]
        fn test_unchecked_consent_blocks() {
            let mut form = filled_form();
            form.toggle_consent();
            assert_eq!(form.submit(), Err(ValidationError::ConsentRequired));
            assert!(!form.payload().contains("consentimiento"));
        }

        #[test]
        fn test_fixing_error_clears_inline_message() {
            let mut form = filled_form();
            form.toggle_consent();
            let _ = form.submit();
            form.toggle_consent();
            assert_eq!(form.invalid(), None);

            form.select_role(Role::Unselected);
            let _ = form.submit();
            form.select_role(Role::Educator);
            assert_eq!(form.invalid(), None);
        }

        #[test]
        fn test_optional_fields_never_block() {
            let form = filled_form();
            assert!(form.phone.is_blank());
            assert!(form.attendance.is_blank());
            assert_eq!(form.validate(), Ok(()));
        }
    }
}
