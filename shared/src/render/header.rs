use serde::{Deserialize, Serialize};

use crate::dashboard::{QuickAction, UserIntent};
use crate::models::UserProfile;
use crate::view_state::ViewState;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserMenuView {
    pub display_name: String,
    pub tier: String,
    pub log_out: UserIntent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderView {
    pub greeting: String,
    /// Present only while the user menu is open
    pub user_menu: Option<UserMenuView>,
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        0..=11 => "Good morning",
        12..=17 => "Good afternoon",
        _ => "Good evening",
    }
}

pub fn render_header(user: &UserProfile, view_state: &ViewState, hour: u32) -> HeaderView {
    HeaderView {
        greeting: format!("{}, {}", greeting_for_hour(hour), user.first_name()),
        user_menu: view_state.user_menu_open.then(|| UserMenuView {
            display_name: user.display_name.clone(),
            tier: user.tier.clone(),
            log_out: UserIntent::QuickAction(QuickAction::LogOut),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good afternoon");
        assert_eq!(greeting_for_hour(18), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
    }

    #[test]
    fn test_header_uses_first_name() {
        let header = render_header(&UserProfile::default(), &ViewState::new(), 9);
        assert_eq!(header.greeting, "Good morning, Julie");
        assert!(header.user_menu.is_none());
    }

    #[test]
    fn test_user_menu_shows_profile() {
        let mut view_state = ViewState::new();
        view_state.toggle_user_menu();

        let header = render_header(&UserProfile::default(), &view_state, 20);
        let menu = header.user_menu.unwrap();

        assert_eq!(menu.display_name, "Julie Bailey");
        assert_eq!(menu.tier, "Premier Banking");
        assert_eq!(menu.log_out, UserIntent::QuickAction(QuickAction::LogOut));
    }
}
