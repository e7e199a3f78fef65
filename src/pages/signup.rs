use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::bind_input;
use crate::validate::{password_error, required};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct SignupPageProps {
    /// Called with a notice to show on the login screen.
    pub on_registered: Callback<String>,
    pub on_navigate: Callback<Route>,
}

#[function_component(SignupPage)]
pub fn signup_page(props: &SignupPageProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let age = use_state(String::new);
    let password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let name = name.clone();
        let email = email.clone();
        let age = age.clone();
        let password = password.clone();
        let confirm_password = confirm_password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_registered = props.on_registered.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name_val = name.trim().to_string();
            let email_val = email.trim().to_string();
            let password_val = (*password).clone();

            if !required(&name_val) || !required(&email_val) {
                error.set(Some("Name and email are required.".to_string()));
                return;
            }
            let age_val = match age.trim().parse::<u32>() {
                Ok(value) if value > 0 => value,
                _ => {
                    error.set(Some("Age must be a positive number.".to_string()));
                    return;
                }
            };
            if let Some(msg) = password_error(&password_val) {
                error.set(Some(msg.to_string()));
                return;
            }
            if password_val != *confirm_password {
                error.set(Some("Passwords do not match.".to_string()));
                return;
            }

            error.set(None);
            loading.set(true);

            let error = error.clone();
            let loading = loading.clone();
            let on_registered = on_registered.clone();
            spawn_local(async move {
                let result = ApiClient::anonymous()
                    .register(&name_val, &email_val, age_val, &password_val)
                    .await;
                match result {
                    Ok(_) => {
                        on_registered.emit("Signup successful! Please log in.".to_string());
                    }
                    Err(err) => {
                        error.set(Some(format!("Sign up failed: {}", err)));
                    }
                }
                loading.set(false);
            });
        })
    };

    let to_login = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Route::Login))
    };

    html! {
        <div class="relative w-full h-screen bg-blue-900/90">
            <div class="flex justify-center items-center h-full">
                <form class="max-w-[400px] w-full mx-auto bg-white p-12 rounded-lg" onsubmit={on_submit}>
                    <h2 class="text-4xl font-bold text-center py-5">{"Sign Up"}</h2>
                    <div class="flex flex-col py-2">
                        <label>{"Name"}</label>
                        <input
                            class="border p-2"
                            type="text"
                            value={(*name).clone()}
                            oninput={bind_input(&name)}
                        />
                    </div>
                    <div class="flex flex-col py-2">
                        <label>{"Email"}</label>
                        <input
                            class="border p-2"
                            type="email"
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                        />
                    </div>
                    <div class="flex flex-col py-2">
                        <label>{"Age"}</label>
                        <input
                            class="border p-2"
                            type="number"
                            value={(*age).clone()}
                            oninput={bind_input(&age)}
                        />
                    </div>
                    <div class="flex flex-col py-2">
                        <label>{"Password"}</label>
                        <input
                            class="border p-2"
                            type="password"
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                        />
                    </div>
                    <div class="flex flex-col py-2">
                        <label>{"Confirm Password"}</label>
                        <input
                            class="border p-2"
                            type="password"
                            value={(*confirm_password).clone()}
                            oninput={bind_input(&confirm_password)}
                        />
                    </div>

                    if let Some(msg) = &*error {
                        <p class="text-sm text-red-600 py-2">{ msg.clone() }</p>
                    }

                    <button
                        class="border w-full my-5 py-2 bg-indigo-600 hover:bg-indigo-500 text-white"
                        type="submit"
                        disabled={*loading}
                    >
                        { if *loading { "Creating account..." } else { "Sign Up" } }
                    </button>
                    <div class="flex justify-center">
                        <p>{"Already have an account?"}</p>
                        <button type="button" class="text-blue-500 ml-2" onclick={to_login}>
                            {"Log in"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
