use std::time::Duration;

use api::forms::{BlockForm, MAX_BLOCK_HOURS};
use api::{search, BlockType, UserSummary, UserType};
use dioxus::prelude::*;

use crate::auth::{use_api, use_settings};
use crate::feedback::use_feedback;
use crate::timer::{sleep, Debounce};
use crate::Icon;
use crate::icons::{FaBan, FaClock, FaTriangleExclamation, FaXmark};

use super::ModalOverlay;

#[component]
pub fn BlockUserModal(on_close: EventHandler<()>, on_blocked: EventHandler<()>) -> Element {
    let api = use_api();
    let settings = use_settings();
    let feedback = use_feedback();
    let mut form = use_signal(BlockForm::default);
    let mut search_term = use_signal(String::new);
    let mut results = use_signal(Vec::<UserSummary>::new);
    let mut searching = use_signal(|| false);
    let mut pending_search = use_signal(Debounce::default);
    let mut submitting = use_signal(|| false);

    let debounce = Duration::from_millis(u64::from(
        settings.read().preferences.lists.search_debounce_ms,
    ));

    // Only the latest keystroke's search runs once the debounce window passes.
    let mut schedule_search = move || {
        let ticket = pending_search.write().schedule();
        spawn(async move {
            sleep(debounce).await;
            if !pending_search.read().is_current(ticket) {
                return;
            }
            let term = search_term();
            if term.trim().is_empty() || form.read().user_id.is_some() {
                return;
            }
            searching.set(true);
            let user_type = form.read().user_type.clone();
            match api.client().block_candidates(&user_type).await {
                Ok(candidates) => {
                    if pending_search.read().is_current(ticket) {
                        results.set(search::filter(&candidates, &term));
                    }
                }
                Err(e) => feedback.quiet_failure(&e, "Error searching users"),
            }
            searching.set(false);
        });
    };

    let mut select_user = move |user: UserSummary| {
        search_term.set(user.display_text());
        form.write().user_id = Some(user.id);
        results.set(Vec::new());
    };

    let mut clear_selection = move || {
        form.write().user_id = None;
        search_term.set(String::new());
        results.set(Vec::new());
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = match form.read().validate() {
            Ok(request) => request,
            Err(e) => {
                feedback.invalid(&e);
                return;
            }
        };
        submitting.set(true);
        spawn(async move {
            match api.client().block_user(&request).await {
                Ok(()) => {
                    feedback.success("User blocked successfully");
                    on_blocked.call(());
                    on_close.call(());
                }
                Err(e) => feedback.failure(&e, "Failed to block user"),
            }
            submitting.set(false);
        });
    };

    let current = form();
    let selected = current.user_id.is_some();
    let is_temporary = current.block_type == BlockType::Temporary;
    let term = search_term();
    let no_matches = !term.is_empty() && results.read().is_empty() && !searching() && !selected;

    rsx! {
        ModalOverlay {
            title: "Block User",
            on_close: move |_| on_close.call(()),
            form {
                class: "block-form",
                onsubmit: submit,

                div {
                    class: "form-group",
                    label { r#for: "block-user-type", "User Type *" }
                    select {
                        id: "block-user-type",
                        value: current.user_type.as_str(),
                        onchange: move |evt| {
                            form.write().user_type = UserType::from(evt.value());
                            clear_selection();
                        },
                        for user_type in UserType::all() {
                            option {
                                value: user_type.as_str(),
                                selected: user_type == current.user_type,
                                "{user_type.label()}"
                            }
                        }
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "block-user-search", "Search User *" }
                    div {
                        class: "search-with-clear",
                        input {
                            id: "block-user-search",
                            r#type: "text",
                            placeholder: "Search by name, email, or phone...",
                            value: "{term}",
                            disabled: selected,
                            oninput: move |evt| {
                                search_term.set(evt.value());
                                schedule_search();
                            },
                        }
                        if selected {
                            button {
                                r#type: "button",
                                class: "btn btn-icon",
                                title: "Change user",
                                onclick: move |_| clear_selection(),
                                Icon { icon: FaXmark, width: 14, height: 14 }
                            }
                        }
                    }
                    if searching() {
                        p { class: "search-info", "Searching..." }
                    }
                    if !results.read().is_empty() {
                        div {
                            class: "search-results",
                            for user in results() {
                                div {
                                    key: "{user.id}",
                                    class: "search-result-item",
                                    onclick: {
                                        let user = user.clone();
                                        move |_| select_user(user.clone())
                                    },
                                    div {
                                        strong { {user.full_name.clone().unwrap_or_default()} }
                                        p { {user.email.clone().unwrap_or_default()} }
                                    }
                                    span { class: "user-phone", {user.phone.clone().unwrap_or_default()} }
                                }
                            }
                        }
                    }
                    if no_matches {
                        p { class: "search-info", "No users found" }
                    }
                }

                div {
                    class: "form-group",
                    label { "Block Type *" }
                    div {
                        class: "radio-group",
                        label {
                            class: "radio-label",
                            input {
                                r#type: "radio",
                                name: "blockType",
                                value: "temporary",
                                checked: is_temporary,
                                onchange: move |_| form.write().block_type = BlockType::Temporary,
                            }
                            Icon { icon: FaClock, width: 18, height: 18 }
                            span { "Temporary" }
                        }
                        label {
                            class: "radio-label",
                            input {
                                r#type: "radio",
                                name: "blockType",
                                value: "permanent",
                                checked: !is_temporary,
                                onchange: move |_| form.write().block_type = BlockType::Permanent,
                            }
                            Icon { icon: FaBan, width: 18, height: 18 }
                            span { "Permanent" }
                        }
                    }
                }

                if is_temporary {
                    div {
                        class: "form-group",
                        label { r#for: "block-duration", "Duration (Hours) *" }
                        input {
                            id: "block-duration",
                            r#type: "number",
                            min: "1",
                            max: "{MAX_BLOCK_HOURS}",
                            placeholder: "Enter duration in hours (max {MAX_BLOCK_HOURS} = 1 year)",
                            value: "{current.duration_hours}",
                            oninput: move |evt| form.write().duration_hours = evt.value(),
                        }
                        p {
                            class: "field-hint",
                            "Quick options: 24 hours (1 day), 168 hours (1 week), 720 hours (30 days)"
                        }
                    }
                }

                div {
                    class: "form-group",
                    label { r#for: "block-reason", "Reason for Blocking *" }
                    textarea {
                        id: "block-reason",
                        rows: "4",
                        placeholder: "Enter the reason for blocking this user...",
                        value: "{current.reason}",
                        oninput: move |evt| form.write().reason = evt.value(),
                    }
                }

                div {
                    class: "notice notice-warning",
                    Icon { icon: FaTriangleExclamation, width: 20, height: 20 }
                    p { "{current.warning()}" }
                }

                div {
                    class: "modal-actions",
                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-danger",
                        disabled: submitting(),
                        if submitting() { "Blocking..." } else { "Block User" }
                    }
                }
            }
        }
    }
}
