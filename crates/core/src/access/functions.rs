use super::Viewer;
use crate::calendar::{TemplateEvent, Visibility};

/// Whether `viewer` may see `event`.
///
/// True when the event is public, the viewer owns it, the viewer is listed
/// as a person on it, or the viewer holds one of the roles it is shared with.
pub fn can_view(event: &TemplateEvent, viewer: &Viewer) -> bool {
    event.visibility == Visibility::Public
        || event.owner == viewer.user_id
        || event.shares.persons.iter().any(|p| *p == viewer.user_id)
        || event.shares.roles.iter().any(|role| viewer.has_role(role))
}

/// Whether `viewer` may update or delete `event`. Only owners may.
pub fn can_modify(event: &TemplateEvent, viewer: &Viewer) -> bool {
    event.owner == viewer.user_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::User;
    use chrono::NaiveDate;

    fn private_event() -> TemplateEvent {
        let starts_on = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        TemplateEvent::new("alice", "1:1", starts_on)
    }

    #[test]
    fn test_public_event_visible_to_anyone() {
        let event = private_event().public();
        assert!(can_view(&event, &Viewer::new("stranger")));
    }

    #[test]
    fn test_private_event_visible_to_owner_only() {
        let event = private_event();
        assert!(can_view(&event, &Viewer::new("alice")));
        assert!(!can_view(&event, &Viewer::new("bob")));
    }

    #[test]
    fn test_shared_with_person() {
        let event = private_event().shared_with_person("bob");
        assert!(can_view(&event, &Viewer::new("bob")));
        assert!(!can_view(&event, &Viewer::new("carol")));
    }

    #[test]
    fn test_shared_with_role() {
        let event = private_event().shared_with_role("Sales Manager");

        let manager = Viewer::new("carol").with_roles(["Employee", "Sales Manager"]);
        let employee = Viewer::new("dave").with_roles(["Employee"]);

        assert!(can_view(&event, &manager));
        assert!(!can_view(&event, &employee));
    }

    #[test]
    fn test_viewer_from_user_carries_roles() {
        let user = User::new("carol", "carol@example.com").with_role("Sales Manager");
        let event = private_event().shared_with_role("Sales Manager");

        assert!(can_view(&event, &Viewer::from(&user)));
    }

    #[test]
    fn test_only_owner_can_modify() {
        let event = private_event().public().shared_with_person("bob");
        assert!(can_modify(&event, &Viewer::new("alice")));
        assert!(!can_modify(&event, &Viewer::new("bob")));
    }
}
