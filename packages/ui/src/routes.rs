//! Where each top-level page sends the admin, given the session state.
//!
//! The launchers own the `Route` enum; they map [`Landing`] onto it.

use crate::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Root,
    Login,
    Dashboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Landing {
    Login,
    Dashboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gate {
    /// The stored session has not been read yet.
    Loading,
    Redirect(Landing),
    Show,
}

pub fn gate(auth: &AuthState, page: Page) -> Gate {
    match page {
        Page::Root if auth.loading => Gate::Loading,
        Page::Root if auth.is_authenticated() => Gate::Redirect(Landing::Dashboard),
        Page::Root => Gate::Redirect(Landing::Login),
        Page::Login if !auth.loading && auth.is_authenticated() => {
            Gate::Redirect(Landing::Dashboard)
        }
        Page::Login => Gate::Show,
        Page::Dashboard if auth.loading => Gate::Loading,
        Page::Dashboard if !auth.is_authenticated() => Gate::Redirect(Landing::Login),
        Page::Dashboard => Gate::Show,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Admin, AdminSession};

    fn signed_in() -> AuthState {
        let admin: Admin = serde_json::from_value(serde_json::json!({
            "id": "a1",
            "fullName": "Asha Rao",
            "email": "admin@dolet.com",
            "role": "admin",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();
        AuthState {
            session: Some(AdminSession {
                token: "jwt".into(),
                admin,
            }),
            loading: false,
        }
    }

    #[test]
    fn test_pages_wait_for_stored_session() {
        let loading = AuthState::default();
        assert!(loading.loading);
        assert_eq!(gate(&loading, Page::Root), Gate::Loading);
        assert_eq!(gate(&loading, Page::Dashboard), Gate::Loading);
        assert_eq!(gate(&loading, Page::Login), Gate::Show);
    }

    #[test]
    fn test_signed_out_admin_lands_on_login() {
        let out = AuthState::signed_out();
        assert_eq!(gate(&out, Page::Root), Gate::Redirect(Landing::Login));
        assert_eq!(gate(&out, Page::Dashboard), Gate::Redirect(Landing::Login));
        assert_eq!(gate(&out, Page::Login), Gate::Show);
    }

    #[test]
    fn test_signed_in_admin_lands_on_dashboard() {
        let state = signed_in();
        assert_eq!(gate(&state, Page::Root), Gate::Redirect(Landing::Dashboard));
        assert_eq!(gate(&state, Page::Login), Gate::Redirect(Landing::Dashboard));
        assert_eq!(gate(&state, Page::Dashboard), Gate::Show);
    }
}
