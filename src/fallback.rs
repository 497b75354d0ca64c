use serde::Serialize;

use crate::matcher::Dispatch;
use crate::method::MethodSet;

/// Standardized response for a dispatch miss, ready for the serving layer
/// to render. Neither outcome is logged as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackResponse {
    pub status: u16,
    pub reason: &'static str,
    /// `Allow` header value, present only for method-not-allowed.
    pub allow: Option<String>,
}

impl FallbackResponse {
    pub fn not_found() -> Self {
        Self {
            status: 404,
            reason: "not found",
            allow: None,
        }
    }

    pub fn method_not_allowed(allowed: MethodSet) -> Self {
        Self {
            status: 405,
            reason: "method not allowed",
            allow: Some(allowed.to_string()),
        }
    }
}

impl<H> Dispatch<'_, H> {
    /// The fallback for this outcome, or `None` when a handler matched.
    pub fn fallback(&self) -> Option<FallbackResponse> {
        match self {
            Dispatch::Match { .. } => None,
            Dispatch::NotFound => Some(FallbackResponse::not_found()),
            Dispatch::MethodNotAllowed { allowed } => {
                Some(FallbackResponse::method_not_allowed(*allowed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::method::Method;

    #[test]
    fn method_not_allowed_carries_allow_header_value() {
        let allowed = MethodSet::from(Method::Get) | MethodSet::from(Method::Delete);
        let response = FallbackResponse::method_not_allowed(allowed);
        assert_eq!(response.status, 405);
        assert_eq!(response.allow.as_deref(), Some("GET, DELETE"));
    }
}
