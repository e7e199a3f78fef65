use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::{bind_input, NavBar};
use crate::models::{User, UserDraft};
use crate::pages::{flash, use_session};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct ProfilePageProps {
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(ProfilePage)]
pub fn profile_page(props: &ProfilePageProps) -> Html {
    let session = use_session();

    let user = use_state(|| None::<User>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let editing = use_state(|| false);
    let name = use_state(String::new);
    let email = use_state(String::new);
    let age = use_state(String::new);

    {
        let session = session.clone();
        let user = user.clone();
        let loading = loading.clone();
        let error = error.clone();
        let name = name.clone();
        let email = email.clone();
        let age = age.clone();
        let on_navigate = props.on_navigate.clone();
        use_effect_with_deps(
            move |_| {
                match session {
                    Some(session) => spawn_local(async move {
                        match ApiClient::new(&session).fetch_user(session.user_id).await {
                            Ok(fetched) => {
                                name.set(fetched.name.clone());
                                email.set(fetched.email.clone());
                                age.set(fetched.age.to_string());
                                user.set(Some(fetched));
                            }
                            Err(err) => {
                                error.set(Some(format!("Failed to load profile: {}", err)));
                            }
                        }
                        loading.set(false);
                    }),
                    None => on_navigate.emit(Route::Login),
                }
                || ()
            },
            (),
        );
    }

    let on_submit = {
        let session = session.clone();
        let user = user.clone();
        let editing = editing.clone();
        let error = error.clone();
        let success = success.clone();
        let name = name.clone();
        let email = email.clone();
        let age = age.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(session) = session.clone() else {
                return;
            };
            let age_val = match age.trim().parse::<u32>() {
                Ok(value) => value,
                Err(_) => {
                    error.set(Some("Age must be a number.".to_string()));
                    return;
                }
            };
            if name.trim().is_empty() || email.trim().is_empty() {
                error.set(Some("Name and email are required.".to_string()));
                return;
            }
            let draft = UserDraft {
                name: name.trim().to_string(),
                email: email.trim().to_string(),
                age: age_val,
            };

            let user = user.clone();
            let editing = editing.clone();
            let error = error.clone();
            let success = success.clone();
            spawn_local(async move {
                match ApiClient::new(&session)
                    .update_user(session.user_id, &draft)
                    .await
                {
                    Ok(updated) => {
                        user.set(Some(updated));
                        editing.set(false);
                        error.set(None);
                        flash(&success, "Profile updated successfully!");
                    }
                    Err(err) => {
                        error.set(Some(format!("Error updating profile: {}", err)));
                    }
                }
            });
        })
    };

    let on_cancel = {
        let editing = editing.clone();
        let user = user.clone();
        let name = name.clone();
        let email = email.clone();
        let age = age.clone();
        Callback::from(move |_| {
            if let Some(current) = &*user {
                name.set(current.name.clone());
                email.set(current.email.clone());
                age.set(current.age.to_string());
            }
            editing.set(false);
        })
    };

    let start_editing = {
        let editing = editing.clone();
        Callback::from(move |_| editing.set(true))
    };

    html! {
        <div class="min-h-screen bg-gray-100">
            <NavBar active={Route::Profile} on_navigate={props.on_navigate.clone()} on_logout={props.on_logout.clone()} />
            <div class="flex flex-col items-center p-6">
                <div class="w-full md:w-1/2 bg-white p-6 rounded-lg shadow-md">
                    <h2 class="text-2xl font-semibold text-gray-700 mb-4">{"Profile"}</h2>

                    if let Some(msg) = &*success {
                        <div class="bg-green-100 text-green-700 p-4 mb-4 rounded-lg text-center">
                            { msg.clone() }
                        </div>
                    }
                    if let Some(msg) = &*error {
                        <div class="bg-red-100 text-red-700 p-4 mb-4 rounded-lg text-center">
                            { msg.clone() }
                        </div>
                    }

                    if *loading {
                        <p class="text-gray-500">{"Loading..."}</p>
                    } else {
                        <form onsubmit={on_submit} class="space-y-4">
                            <div class="flex flex-col">
                                <label class="mb-1 font-medium text-gray-700">{"Name"}</label>
                                <input
                                    type="text"
                                    value={(*name).clone()}
                                    oninput={bind_input(&name)}
                                    class="border p-2 bg-gray-50 text-gray-700 rounded"
                                    disabled={!*editing}
                                />
                            </div>
                            <div class="flex flex-col">
                                <label class="mb-1 font-medium text-gray-700">{"Email"}</label>
                                <input
                                    type="email"
                                    value={(*email).clone()}
                                    oninput={bind_input(&email)}
                                    class="border p-2 bg-gray-50 text-gray-700 rounded"
                                    disabled={!*editing}
                                />
                            </div>
                            <div class="flex flex-col">
                                <label class="mb-1 font-medium text-gray-700">{"Age"}</label>
                                <input
                                    type="number"
                                    value={(*age).clone()}
                                    oninput={bind_input(&age)}
                                    class="border p-2 bg-gray-50 text-gray-700 rounded"
                                    disabled={!*editing}
                                />
                            </div>

                            <div class="flex justify-between">
                                if *editing {
                                    <button
                                        type="button"
                                        class="bg-red-500 text-white py-2 px-4 rounded hover:bg-red-400"
                                        onclick={on_cancel}
                                    >
                                        {"Cancel"}
                                    </button>
                                    <button
                                        type="submit"
                                        class="bg-blue-600 text-white py-2 px-4 rounded hover:bg-blue-500"
                                    >
                                        {"Save Changes"}
                                    </button>
                                } else {
                                    <button
                                        type="button"
                                        class="bg-blue-600 text-white py-2 px-4 rounded hover:bg-blue-500"
                                        onclick={start_editing}
                                    >
                                        {"Edit"}
                                    </button>
                                }
                            </div>
                        </form>
                    }
                </div>
            </div>
        </div>
    }
}
