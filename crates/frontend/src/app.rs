use leptos::prelude::*;

use crate::users::ui::signup::SignupPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SignupPage />
    }
}
