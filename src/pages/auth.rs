//! Authentication page with login and registration sub-forms.
//!
//! The two sub-modes are toggled purely by user action, independent of
//! network state. Neither form mutates the session on failure; the server's
//! `detail` message is shown when present, a generic one otherwise.

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::state::session::{Session, SessionStore};
use crate::state::view::{AuthMode, ShellState};

const CONNECTIVITY_MESSAGE: &str = "Could not reach the server";

#[component]
pub fn AuthPage() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    // Registration success leaves a notice for the login form.
    let notice = RwSignal::new(None::<String>);

    view! {
        <div class="auth-wrapper">
            <div class="auth">
                {move || match shell.get().auth_mode {
                    AuthMode::Login => view! { <LoginForm notice=notice/> }.into_any(),
                    AuthMode::Register => view! { <RegisterForm notice=notice/> }.into_any(),
                }}
            </div>
        </div>
    }
}

#[component]
fn LoginForm(notice: RwSignal<Option<String>>) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = expect_context::<RwSignal<Session>>();
    let shell = expect_context::<RwSignal<ShellState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        leptos::task::spawn_local(async move {
            match api::login(&email, &password).await {
                Ok(token) => {
                    store.set(&token);
                    session.set(Session::authenticated(token));
                    shell.update(ShellState::after_login);
                }
                Err(ApiError::Rejected(message)) => error.set(Some(message)),
                Err(_) => error.set(Some(CONNECTIVITY_MESSAGE.to_owned())),
            }
        });
    };

    view! {
        <h2>"Sign in"</h2>
        {move || notice.get().map(|message| view! { <p class="notice">{message}</p> })}
        <form on:submit=submit>
            <input
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button type="submit">"Sign in"</button>
        </form>
        {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
        <p class="auth-toggle">
            "No account? "
            <span
                class="link"
                on:click=move |_| shell.update(|s| s.set_auth_mode(AuthMode::Register))
            >
                "Register"
            </span>
        </p>
    }
}

#[component]
fn RegisterForm(notice: RwSignal<Option<String>>) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (username, email, password) = (
            username.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
        );
        leptos::task::spawn_local(async move {
            match api::register(&username, &email, &password).await {
                Ok(()) => {
                    notice.set(Some("Registration successful, please sign in.".to_owned()));
                    shell.update(ShellState::after_register);
                }
                Err(ApiError::Rejected(message)) => error.set(Some(message)),
                Err(_) => error.set(Some(CONNECTIVITY_MESSAGE.to_owned())),
            }
        });
    };

    view! {
        <h2>"Register"</h2>
        <form on:submit=submit>
            <input
                placeholder="Username"
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
            <input
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                type="password"
                placeholder="Password"
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
            <button type="submit">"Register"</button>
        </form>
        {move || error.get().map(|message| view! { <p class="error">{message}</p> })}
        <p class="auth-toggle">
            "Already have an account? "
            <span
                class="link"
                on:click=move |_| shell.update(|s| s.set_auth_mode(AuthMode::Login))
            >
                "Sign in"
            </span>
        </p>
    }
}
