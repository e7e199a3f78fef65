use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::{BankAccountForm, ConfirmDialog, NavBar};
use crate::format::{format_amount, mask_account_number};
use crate::models::{BankAccount, BankAccountDraft};
use crate::pages::{flash, use_session};
use crate::query::remove;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct BankAccountsPageProps {
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(BankAccountsPage)]
pub fn bank_accounts_page(props: &BankAccountsPageProps) -> Html {
    let session = use_session();

    let accounts = use_state(Vec::<BankAccount>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let show_add = use_state(|| false);
    let editing = use_state(|| None::<BankAccount>);
    let confirm_delete = use_state(|| None::<i64>);

    {
        let session = session.clone();
        let accounts = accounts.clone();
        let loading = loading.clone();
        let error = error.clone();
        let on_navigate = props.on_navigate.clone();
        use_effect_with_deps(
            move |_| {
                match session {
                    Some(session) => spawn_local(async move {
                        match ApiClient::new(&session)
                            .list_bank_accounts(session.user_id)
                            .await
                        {
                            Ok(list) => {
                                accounts.set(list);
                                error.set(None);
                            }
                            Err(err) => {
                                error.set(Some(format!("Failed to fetch bank accounts: {}", err)));
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

    let on_add_submit = {
        let session = session.clone();
        let accounts = accounts.clone();
        let show_add = show_add.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |draft: BankAccountDraft| {
            let Some(session) = session.clone() else {
                return;
            };
            let accounts = accounts.clone();
            let show_add = show_add.clone();
            let error = error.clone();
            let success = success.clone();
            spawn_local(async move {
                match ApiClient::new(&session)
                    .create_bank_account(session.user_id, &draft)
                    .await
                {
                    Ok(created) => {
                        let mut next = (*accounts).clone();
                        next.push(created);
                        accounts.set(next);
                        show_add.set(false);
                        flash(&success, "Bank account added successfully!");
                    }
                    Err(err) => {
                        error.set(Some(format!("Error adding bank account: {}", err)));
                    }
                }
            });
        })
    };

    let on_delete_confirmed = {
        let session = session.clone();
        let accounts = accounts.clone();
        let confirm_delete = confirm_delete.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |_| {
            let Some(session) = session.clone() else {
                return;
            };
            let Some(id) = *confirm_delete else {
                return;
            };
            let accounts = accounts.clone();
            let confirm_delete = confirm_delete.clone();
            let error = error.clone();
            let success = success.clone();
            spawn_local(async move {
                match ApiClient::new(&session).delete_bank_account(id).await {
                    Ok(()) => {
                        let mut next = (*accounts).clone();
                        remove(&mut next, id);
                        accounts.set(next);
                        confirm_delete.set(None);
                        flash(&success, "Bank account deleted successfully!");
                    }
                    Err(err) => {
                        confirm_delete.set(None);
                        error.set(Some(format!("Error deleting bank account: {}", err)));
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-100">
            <NavBar active={Route::BankAccounts} on_navigate={props.on_navigate.clone()} on_logout={props.on_logout.clone()} />
            <div class="flex flex-col items-center p-6">
                <div class="w-full md:w-3/4 bg-white p-6 rounded-lg shadow-md">
                    <h2 class="text-2xl font-semibold text-gray-700 mb-4">{"Bank Accounts"}</h2>

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

                    <table class="w-full border-collapse border border-gray-300">
                        <thead>
                            <tr class="bg-gray-200">
                                <th class="border border-gray-300 px-4 py-2">{"Account"}</th>
                                <th class="border border-gray-300 px-4 py-2">{"Account Number"}</th>
                                <th class="border border-gray-300 px-4 py-2">{"Bank Name"}</th>
                                <th class="border border-gray-300 px-4 py-2">{"Type"}</th>
                                <th class="border border-gray-300 px-4 py-2">{"Balance"}</th>
                                <th class="border border-gray-300 px-4 py-2">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            if *loading {
                                <tr><td colspan="6" class="text-center py-4 text-gray-500">{"Loading..."}</td></tr>
                            } else if accounts.is_empty() {
                                <tr><td colspan="6" class="text-center py-4 text-gray-500">{"No bank accounts yet."}</td></tr>
                            } else {
                                { for accounts.iter().map(|account| {
                                    let edit_target = account.clone();
                                    let on_edit = {
                                        let editing = editing.clone();
                                        Callback::from(move |_| editing.set(Some(edit_target.clone())))
                                    };
                                    let account_id = account.id;
                                    let on_delete = {
                                        let confirm_delete = confirm_delete.clone();
                                        Callback::from(move |_| confirm_delete.set(Some(account_id)))
                                    };
                                    html! {
                                        <tr key={account.id}>
                                            <td class="border border-gray-300 px-4 py-2">{ account.label() }</td>
                                            <td class="border border-gray-300 px-4 py-2">{ mask_account_number(&account.account_number) }</td>
                                            <td class="border border-gray-300 px-4 py-2">{ account.bank_name.clone() }</td>
                                            <td class="border border-gray-300 px-4 py-2">{ account.account_type.clone() }</td>
                                            <td class="border border-gray-300 px-4 py-2">{ format_amount(account.balance) }</td>
                                            <td class="border border-gray-300 px-4 py-2">
                                                <button onclick={on_edit} class="bg-blue-600 text-white px-4 py-2 rounded hover:bg-blue-500 mr-2">
                                                    {"Edit"}
                                                </button>
                                                <button onclick={on_delete} class="bg-red-600 text-white px-4 py-2 rounded hover:bg-red-500">
                                                    {"Delete"}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }) }
                            }
                        </tbody>
                    </table>
                </div>
            </div>

            <button
                onclick={{
                    let show_add = show_add.clone();
                    Callback::from(move |_| show_add.set(true))
                }}
                class="fixed bottom-6 right-6 bg-blue-600 text-white text-3xl w-14 h-14 rounded-full shadow-lg flex items-center justify-center hover:bg-blue-500"
                title="Add Bank Account"
            >
                {"+"}
            </button>

            if *show_add {
                <BankAccountForm
                    on_submit={on_add_submit}
                    on_close={{
                        let show_add = show_add.clone();
                        Callback::from(move |_| show_add.set(false))
                    }}
                />
            }

            if let Some(account) = &*editing {
                <BankAccountForm
                    initial={Some(account.clone())}
                    on_submit={{
                        let session = session.clone();
                        let accounts = accounts.clone();
                        let editing = editing.clone();
                        let error = error.clone();
                        let success = success.clone();
                        let account_id = account.id;
                        Callback::from(move |draft: BankAccountDraft| {
                            let Some(session) = session.clone() else {
                                return;
                            };
                            let accounts = accounts.clone();
                            let editing = editing.clone();
                            let error = error.clone();
                            let success = success.clone();
                            spawn_local(async move {
                                match ApiClient::new(&session)
                                    .update_bank_account(account_id, &draft)
                                    .await
                                {
                                    Ok(updated) => {
                                        let mut next = (*accounts).clone();
                                        if let Some(slot) = next.iter_mut().find(|a| a.id == updated.id) {
                                            *slot = updated;
                                        }
                                        accounts.set(next);
                                        editing.set(None);
                                        flash(&success, "Bank account updated successfully!");
                                    }
                                    Err(err) => {
                                        error.set(Some(format!("Error updating bank account: {}", err)));
                                    }
                                }
                            });
                        })
                    }}
                    on_close={{
                        let editing = editing.clone();
                        Callback::from(move |_| editing.set(None))
                    }}
                />
            }

            if confirm_delete.is_some() {
                <ConfirmDialog
                    message="Do you really want to delete this bank account? This action cannot be undone."
                    on_confirm={on_delete_confirmed}
                    on_cancel={{
                        let confirm_delete = confirm_delete.clone();
                        Callback::from(move |_| confirm_delete.set(None))
                    }}
                />
            }
        </div>
    }
}
