use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::users::SignupRequest;

use crate::users::api;

/// Signup form page.
///
/// Submission never navigates: the native submit is suppressed and the
/// payload goes out as an async POST instead. A rejected signup surfaces
/// the server's message in the error banner; once shown, the banner stays
/// visible for the life of the page, with later failures overwriting the
/// text. The handler keeps no per-submission state, so repeated submits
/// simply issue overlapping requests.
#[component]
pub fn SignupPage() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (surname, set_surname) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    // None until the first failure, never reset back to None.
    let (error_message, set_error_message) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        // Suppress the native submission on every attempt, whether or not
        // the request itself goes anywhere.
        ev.prevent_default();

        let request = SignupRequest {
            name: name.get(),
            surname: surname.get(),
            email: email.get(),
            password: password.get(),
        };

        spawn_local(async move {
            match api::signup(&request).await {
                Ok(response) => {
                    log::info!("signup accepted: {:?}", response);
                }
                Err(message) => {
                    set_error_message.set(Some(message));
                }
            }
        });
    };

    view! {
        <div class="signup-container">
            <div class="signup-box">
                <h1>"Hotels"</h1>
                <h2>"Create an account"</h2>

                <div
                    class="error"
                    class=("error--hidden", move || error_message.get().is_none())
                >
                    {move || error_message.get().unwrap_or_default()}
                </div>

                <form name="signup_form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="name">"First name"</label>
                        <input
                            type="text"
                            id="name"
                            name="name"
                            value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="surname">"Last name"</label>
                        <input
                            type="text"
                            id="surname"
                            name="surname"
                            value=move || surname.get()
                            on:input=move |ev| set_surname.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="you@example.com"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                        />
                    </div>

                    <button type="submit" class="btn-primary">
                        "Sign up"
                    </button>
                </form>
            </div>
        </div>
    }
}
