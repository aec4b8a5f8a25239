use serde::{Deserialize, Serialize};

/// The signed-in user, as persisted in the browser session.
///
/// The backend historically served this in two shapes (a bare object or a
/// one-element array); [`Actor::from_session_json`] accepts both and always
/// yields the single well-typed record used everywhere else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    /// Class/cohort label, e.g. "SE1704". Absent for staff accounts.
    #[serde(rename = "className", default)]
    pub class_name: Option<String>,
}

impl Actor {
    /// Parses the persisted `user` value, tolerating the legacy array wrapper.
    pub fn from_session_json(raw: &str) -> Option<Actor> {
        if let Ok(actor) = serde_json::from_str::<Actor>(raw) {
            return Some(actor);
        }
        serde_json::from_str::<Vec<Actor>>(raw)
            .ok()
            .and_then(|mut v| if v.is_empty() { None } else { Some(v.remove(0)) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_object() {
        let actor = Actor::from_session_json(r#"{"name":"An Nguyen","className":"SE1704"}"#)
            .expect("object shape");
        assert_eq!(actor.name, "An Nguyen");
        assert_eq!(actor.class_name.as_deref(), Some("SE1704"));
    }

    #[test]
    fn parses_legacy_array_wrapper() {
        let actor =
            Actor::from_session_json(r#"[{"name":"An Nguyen"}]"#).expect("array shape");
        assert_eq!(actor.name, "An Nguyen");
        assert_eq!(actor.class_name, None);
    }

    #[test]
    fn rejects_garbage() {
        assert!(Actor::from_session_json("not json").is_none());
        assert!(Actor::from_session_json("[]").is_none());
    }
}
