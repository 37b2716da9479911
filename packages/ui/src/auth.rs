//! Authentication context and hooks for the UI.

use api::{Admin, AdminSession, ApiClient};
use dioxus::prelude::*;

use crate::session::{make_session_manager, ConsoleSettings};
use crate::Icon;
use crate::icons::FaRightFromBracket;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<AdminSession>,
    /// True until the stored session has been read.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            session: None,
            loading: true,
        }
    }
}

impl AuthState {
    pub fn signed_out() -> Self {
        Self {
            session: None,
            loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn admin(&self) -> Option<&Admin> {
        self.session.as_ref().map(|s| &s.admin)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the admin signs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_settings() -> Signal<ConsoleSettings> {
    use_context::<Signal<ConsoleSettings>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let mut auth_state = use_signal(AuthState::default);
    use_context_provider(|| Signal::new(ConsoleSettings::load()));

    // Restore the stored session on mount
    let _ = use_resource(move || async move {
        let stored = make_session_manager().load::<Admin>().await;
        if let Some(ref stored) = stored {
            tracing::info!("Restored session for {}", stored.admin.email);
        }
        auth_state.set(AuthState {
            session: stored.map(|s| AdminSession {
                token: s.token,
                admin: s.admin,
            }),
            loading: false,
        });
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Persist a fresh login and publish it to the app.
pub async fn sign_in(mut auth: Signal<AuthState>, session: AdminSession) {
    make_session_manager()
        .save(&session.token, &session.admin)
        .await;
    tracing::info!("Signed in as {}", session.admin.email);
    auth.set(AuthState {
        session: Some(session),
        loading: false,
    });
}

/// Forget the stored session. Route guards send the admin to the login page.
pub async fn sign_out(mut auth: Signal<AuthState>) {
    make_session_manager().clear().await;
    tracing::info!("Signed out");
    auth.set(AuthState::signed_out());
}

/// Builds [`ApiClient`]s for the configured backend and the current token.
#[derive(Clone, Copy, PartialEq)]
pub struct ApiHandle {
    auth: Signal<AuthState>,
    settings: Signal<ConsoleSettings>,
}

impl ApiHandle {
    pub fn client(&self) -> ApiClient {
        let client = ApiClient::from_config(&self.settings.read().api);
        match self.auth.read().token() {
            Some(token) => client.with_token(token),
            None => client,
        }
    }
}

pub fn use_api() -> ApiHandle {
    ApiHandle {
        auth: use_auth(),
        settings: use_settings(),
    }
}

/// Button to sign the admin out.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_signed_out: EventHandler<()>,
) -> Element {
    let auth_state = use_auth();

    let onclick = move |_| async move {
        sign_out(auth_state).await;
        on_signed_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}
