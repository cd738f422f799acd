use serde::Serialize;

/// Where unauthenticated viewers are sent when the store gives no redirect
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// ToggleOutcome - result of a save toggle as seen by the card
///
/// `RolledBack` and `RedirectRequired` mean the local flag was restored to its
/// pre-toggle value; `InFlight` means it was never touched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ToggleOutcome {
    Saved,
    Unsaved,
    /// The store failed or refused; an error notification was shown
    RolledBack { message: String },
    /// The viewer must sign in first
    #[serde(rename_all = "camelCase")]
    RedirectRequired { redirect_to: String },
    /// An earlier toggle for the same vendor has not settled yet
    InFlight,
}

impl ToggleOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ToggleOutcome::Saved | ToggleOutcome::Unsaved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmed_outcomes() {
        assert!(ToggleOutcome::Saved.is_confirmed());
        assert!(ToggleOutcome::Unsaved.is_confirmed());
        assert!(!ToggleOutcome::RolledBack {
            message: "nope".to_string()
        }
        .is_confirmed());
        assert!(!ToggleOutcome::RedirectRequired {
            redirect_to: DEFAULT_LOGIN_PATH.to_string()
        }
        .is_confirmed());
        assert!(!ToggleOutcome::InFlight.is_confirmed());
    }

    #[test]
    fn test_redirect_serializes_camel_case() {
        let json = serde_json::to_value(ToggleOutcome::RedirectRequired {
            redirect_to: "/login?next=/vendors".to_string(),
        })
        .unwrap();
        assert_eq!(json["outcome"], "redirectRequired");
        assert_eq!(json["redirectTo"], "/login?next=/vendors");
    }

    #[test]
    fn test_in_flight_serializes_as_tag_only() {
        let json = serde_json::to_value(ToggleOutcome::InFlight).unwrap();
        assert_eq!(json, serde_json::json!({ "outcome": "inFlight" }));
    }
}
