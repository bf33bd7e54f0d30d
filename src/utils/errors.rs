use std::fmt::Display;

/// Build the message shown in the page's error region
///
/// Includes the low-level error text verbatim so the user can forward it:
/// "Algo ha salido mal al inicializar. Entregale este mensaje a @soporte: Not Found: ..."
pub fn user_error_message(error: &dyn Display, action: &str, contact: &str) -> String {
    format!(
        "Algo ha salido mal al {}. Entregale este mensaje a {}: {}",
        action, contact, error
    )
}
