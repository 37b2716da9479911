use api::{ApiError, forms};
use dioxus::prelude::*;

use crate::auth::{sign_in, use_api, use_auth};
use crate::Icon;
use crate::icons::{FaEnvelope, FaEye, FaEyeSlash, FaLock};

const INVALID_CREDENTIALS: &str = "Invalid email or password";
const LOGIN_FAILED: &str = "An error occurred. Please try again.";

/// Inline error shown under the login header.
fn login_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Rejected { .. } | ApiError::Unauthorized { .. } => err
            .server_message()
            .unwrap_or(INVALID_CREDENTIALS)
            .to_string(),
        _ => LOGIN_FAILED.to_string(),
    }
}

/// Email and password sign-in.
#[component]
pub fn LoginView(on_signed_in: EventHandler<()>) -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        error.set(None);
        let credentials = match forms::login(&email(), &password()) {
            Ok(credentials) => credentials,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        loading.set(true);
        spawn(async move {
            match api.client().login(&credentials).await {
                Ok(session) => {
                    sign_in(auth, session).await;
                    on_signed_in.call(());
                }
                Err(e) => {
                    tracing::error!("Login error: {e}");
                    error.set(Some(login_failure_message(&e)));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div {
            class: "login-page",
            div {
                class: "login-card",
                div {
                    class: "login-header",
                    div { class: "login-icon", Icon { icon: FaLock, width: 32, height: 32 } }
                    h1 { "Welcome Back" }
                    p { "Sign in to your admin account" }
                }

                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }

                form {
                    class: "login-form",
                    onsubmit: onsubmit,
                    div {
                        class: "form-group",
                        label { r#for: "email", "Email Address" }
                        div {
                            class: "input-with-icon",
                            Icon { icon: FaEnvelope, width: 16, height: 16 }
                            input {
                                id: "email",
                                r#type: "email",
                                placeholder: "admin@dolet.com",
                                required: true,
                                value: "{email}",
                                oninput: move |evt| email.set(evt.value()),
                            }
                        }
                    }
                    div {
                        class: "form-group",
                        label { r#for: "password", "Password" }
                        div {
                            class: "input-with-icon",
                            Icon { icon: FaLock, width: 16, height: 16 }
                            input {
                                id: "password",
                                r#type: if show_password() { "text" } else { "password" },
                                placeholder: "Enter your password",
                                required: true,
                                value: "{password}",
                                oninput: move |evt| password.set(evt.value()),
                            }
                            button {
                                r#type: "button",
                                class: "password-toggle",
                                title: if show_password() { "Hide password" } else { "Show password" },
                                onclick: move |_| show_password.toggle(),
                                if show_password() {
                                    Icon { icon: FaEyeSlash, width: 18, height: 18 }
                                } else {
                                    Icon { icon: FaEye, width: 18, height: 18 }
                                }
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: loading(),
                        if loading() {
                            span { class: "spinner" }
                            "Signing in..."
                        } else {
                            "Sign In"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_failure_messages() {
        let rejected = ApiError::Rejected {
            message: Some("Account disabled".into()),
        };
        assert_eq!(login_failure_message(&rejected), "Account disabled");
        assert_eq!(
            login_failure_message(&ApiError::Rejected { message: None }),
            INVALID_CREDENTIALS
        );
        assert_eq!(
            login_failure_message(&ApiError::Unauthorized { message: None }),
            INVALID_CREDENTIALS
        );
        let deactivated = ApiError::Unauthorized {
            message: Some("Account is deactivated".into()),
        };
        assert_eq!(login_failure_message(&deactivated), "Account is deactivated");
        assert_eq!(
            login_failure_message(&ApiError::Network("offline".into())),
            LOGIN_FAILED
        );
        assert_eq!(
            login_failure_message(&ApiError::Status { status: 500 }),
            LOGIN_FAILED
        );
    }
}
