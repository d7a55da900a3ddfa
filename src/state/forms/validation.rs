//! Required-field checks performed by the input surface before submission

use super::form_state::FormFocus;
use thiserror::Error;

/// Reason the form refused to submit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Completa este campo: nombre y apellidos.")]
    NameRequired,
    #[error("Completa este campo: correo electrónico.")]
    EmailRequired,
    #[error("Introduce una dirección de correo electrónico válida.")]
    EmailInvalid,
    #[error("Selecciona un perfil de la lista.")]
    RoleRequired,
    #[error("Marca esta casilla si deseas continuar.")]
    ConsentRequired,
}

impl ValidationError {
    /// Field that receives focus when this error blocks submission
    pub fn focus(self) -> FormFocus {
        match self {
            Self::NameRequired => FormFocus::Name,
            Self::EmailRequired | Self::EmailInvalid => FormFocus::Email,
            Self::RoleRequired => FormFocus::Role,
            Self::ConsentRequired => FormFocus::Consent,
        }
    }
}

/// Basic email shape check, equivalent to the native `type="email"` input:
/// a non-empty local part of permitted characters, `@`, and a domain made of
/// alphanumeric labels (hyphens allowed inside a label) separated by dots.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    const LOCAL_SPECIALS: &str = ".!#$%&'*+/=?^_`{|}~-";
    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_SPECIALS.contains(c));

    local_ok && !domain.is_empty() && domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
