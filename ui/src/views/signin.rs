//! Sign-in view with email/password form.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, Input};
use crate::{use_auth, AuthState};

use super::is_valid_email;

#[component]
pub fn Signin(on_success: EventHandler<()>, on_navigate_signup: EventHandler<()>) -> Element {
    let client = crate::use_api();
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: straight to the dashboard.
    if !auth().loading && auth().user.is_some() {
        on_success.call(());
    }

    let handle_signin = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if !is_valid_email(&e) {
                email_error.set("Please enter a valid email address".to_string());
                return;
            }
            email_error.set(String::new());

            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            match api::auth::sign_in(&client, &e, &p).await {
                Ok(response) => {
                    // Decode failure leaves the auth state untouched; the
                    // dashboard guard bounces back to sign-in in that case.
                    if let Some(user) = api::session::decode_token(&response.token) {
                        auth.set(AuthState {
                            user: Some(user),
                            loading: false,
                        });
                    }
                    on_success.call(());
                }
                Err(err) => {
                    tracing::error!("sign-in failed: {err}");
                    loading.set(false);
                    error.set(Some(err.to_string()));
                }
            }
        });
    };

    rsx! {
        div {
            class: "flex flex-col items-center justify-center min-h-screen p-8 bg-white dark:bg-slate-900",

            h1 {
                class: "mb-2 text-slate-900 dark:text-slate-50 font-bold text-[1.75rem]",
                "Welcome back"
            }

            p {
                class: "mb-8 text-slate-600 dark:text-slate-400 text-[0.9375rem]",
                "Sign in to your account"
            }

            form {
                onsubmit: handle_signin,
                class: "flex flex-col gap-4 w-full max-w-[340px]",

                if let Some(err) = error() {
                    div {
                        class: "px-3 py-2.5 bg-red-50 dark:bg-red-900/30 border border-red-200 dark:border-red-800 rounded-xl text-red-600 dark:text-red-300 text-[0.8125rem]",
                        "{err}"
                    }
                }

                Input {
                    id: "signin-email",
                    r#type: "email",
                    label: "Email",
                    placeholder: "you@example.com",
                    autocomplete: "email",
                    value: email(),
                    error: email_error(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                    onblur: move |_| {
                        if !email().is_empty() && !is_valid_email(email().trim()) {
                            email_error.set("Please enter a valid email address".to_string());
                        } else {
                            email_error.set(String::new());
                        }
                    },
                }

                Input {
                    id: "signin-password",
                    r#type: "password",
                    label: "Password",
                    placeholder: "Your password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full",
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }

            p {
                class: "mt-6 text-sm text-slate-600 dark:text-slate-400",
                "Don't have an account? "
                button {
                    class: "text-emerald-600 dark:text-emerald-400 font-medium",
                    onclick: move |_| on_navigate_signup.call(()),
                    "Sign up"
                }
            }
        }
    }
}
