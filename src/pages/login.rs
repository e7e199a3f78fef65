use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::bind_input;
use crate::session::Session;
use crate::validate::required;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub on_login: Callback<Session>,
    pub on_navigate: Callback<Route>,
    /// One-shot notice carried over from signup.
    #[prop_or_default]
    pub notice: Option<AttrValue>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let email_val = email.trim().to_string();
            let password_val = (*password).clone();

            if !required(&email_val) || !required(&password_val) {
                error.set(Some("Email and password are required.".to_string()));
                return;
            }

            error.set(None);
            loading.set(true);

            let error = error.clone();
            let loading = loading.clone();
            let on_login = on_login.clone();
            spawn_local(async move {
                match ApiClient::anonymous().login(&email_val, &password_val).await {
                    Ok(resp) => {
                        let session = Session::new(resp.access_token, resp.user_id);
                        session.store();
                        on_login.emit(session);
                    }
                    Err(err) => {
                        error.set(Some(format!("Login failed: {}", err)));
                    }
                }
                loading.set(false);
            });
        })
    };

    let to_signup = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_| on_navigate.emit(Route::Signup))
    };

    html! {
        <div class="relative w-full h-screen bg-blue-900/90">
            <div class="flex justify-center items-center h-full">
                <form class="max-w-[400px] w-full mx-auto bg-white p-12 rounded-lg" onsubmit={on_submit}>
                    <h2 class="text-4xl font-bold text-center py-5">{"Log in"}</h2>

                    if let Some(notice) = &props.notice {
                        <div class="bg-green-100 text-green-700 p-3 mb-4 rounded text-center">
                            { notice.clone() }
                        </div>
                    }

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
                        <label>{"Password"}</label>
                        <input
                            class="border p-2"
                            type="password"
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
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
                        { if *loading { "Signing in..." } else { "Sign In" } }
                    </button>
                    <div class="flex justify-center">
                        <p>{"No account?"}</p>
                        <button type="button" class="text-blue-500 ml-2" onclick={to_signup}>
                            {"Create an account"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
