use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::ApiClient;
use crate::components::{bind_input, bind_select, ConfirmDialog, IncomeForm, NavBar};
use crate::format::format_amount;
use crate::models::{BankAccount, Income, IncomeDraft};
use crate::pages::{flash, use_session};
use crate::query::{remove, sort_recent_first, upsert, ListFilter};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct IncomePageProps {
    pub on_navigate: Callback<Route>,
    pub on_logout: Callback<()>,
}

#[function_component(IncomePage)]
pub fn income_page(props: &IncomePageProps) -> Html {
    let session = use_session();

    let incomes = use_state(Vec::<Income>::new);
    let accounts = use_state(Vec::<BankAccount>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);

    let search = use_state(String::new);
    let from = use_state(String::new);
    let to = use_state(String::new);
    let account_filter = use_state(String::new);

    let show_add = use_state(|| false);
    let editing = use_state(|| None::<Income>);
    let confirm_delete = use_state(|| None::<i64>);

    {
        let session = session.clone();
        let incomes = incomes.clone();
        let accounts = accounts.clone();
        let loading = loading.clone();
        let error = error.clone();
        let on_navigate = props.on_navigate.clone();
        use_effect_with_deps(
            move |_| {
                match session {
                    Some(session) => spawn_local(async move {
                        let api = ApiClient::new(&session);

                        match api.list_incomes(session.user_id).await {
                            Ok(mut list) => {
                                sort_recent_first(&mut list);
                                incomes.set(list);
                            }
                            Err(err) => {
                                error.set(Some(format!("Failed to fetch income: {}", err)));
                            }
                        }

                        // Accounts feed the form select and the bank column.
                        match api.list_bank_accounts(session.user_id).await {
                            Ok(list) => accounts.set(list),
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

    let account_label = |account_id: i64| -> String {
        accounts
            .iter()
            .find(|account| account.id == account_id)
            .map(|account| account.label().to_string())
            .unwrap_or_default()
    };

    let on_add_submit = {
        let session = session.clone();
        let incomes = incomes.clone();
        let show_add = show_add.clone();
        let error = error.clone();
        let success = success.clone();
        Callback::from(move |draft: IncomeDraft| {
            let Some(session) = session.clone() else {
                return;
            };
            let incomes = incomes.clone();
            let show_add = show_add.clone();
            let error = error.clone();
            let success = success.clone();
            spawn_local(async move {
                match ApiClient::new(&session).create_income(&draft).await {
                    Ok(created) => {
                        let mut next = (*incomes).clone();
                        upsert(&mut next, created);
                        incomes.set(next);
                        show_add.set(false);
                        flash(&success, "Income added successfully!");
                    }
                    Err(err) => {
                        error.set(Some(format!("Error adding income: {}", err)));
                    }
                }
            });
        })
    };

    let on_delete_confirmed = {
        let session = session.clone();
        let incomes = incomes.clone();
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
            let incomes = incomes.clone();
            let confirm_delete = confirm_delete.clone();
            let error = error.clone();
            let success = success.clone();
            spawn_local(async move {
                match ApiClient::new(&session).delete_income(id).await {
                    Ok(()) => {
                        let mut next = (*incomes).clone();
                        remove(&mut next, id);
                        incomes.set(next);
                        confirm_delete.set(None);
                        flash(&success, "Income deleted successfully!");
                    }
                    Err(err) => {
                        confirm_delete.set(None);
                        error.set(Some(format!("Error deleting income: {}", err)));
                    }
                }
            });
        })
    };

    let filter = ListFilter {
        search: (*search).clone(),
        from: (*from).clone(),
        to: (*to).clone(),
        category: String::new(),
        account_id: account_filter.parse::<i64>().ok(),
    };

    let visible: Vec<Income> = incomes
        .iter()
        .filter(|income| filter.matches(*income))
        .cloned()
        .collect();

    html! {
        <div class="min-h-screen bg-gray-100">
            <NavBar active={Route::Income} on_navigate={props.on_navigate.clone()} on_logout={props.on_logout.clone()} />
            <div class="flex flex-col items-center p-6">
                <div class="w-full md:w-3/4 bg-white p-6 rounded-lg shadow-md">
                    <h2 class="text-2xl font-semibold text-gray-700 mb-4">{"Income"}</h2>

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

                    <div class="flex flex-wrap gap-3 mb-4">
                        <input
                            type="text"
                            placeholder="Search source or notes"
                            value={(*search).clone()}
                            oninput={bind_input(&search)}
                            class="flex-1 p-2 border rounded"
                        />
                        <input type="date" value={(*from).clone()} oninput={bind_input(&from)} class="p-2 border rounded" />
                        <input type="date" value={(*to).clone()} oninput={bind_input(&to)} class="p-2 border rounded" />
                        <select value={(*account_filter).clone()} onchange={bind_select(&account_filter)} class="p-2 border rounded">
                            <option value="" selected={account_filter.is_empty()}>{"All Accounts"}</option>
                            { for accounts.iter().map(|account| {
                                let value = account.id.to_string();
                                html! {
                                    <option value={value.clone()} selected={value == *account_filter.as_str()}>
                                        { account.label() }
                                    </option>
                                }
                            }) }
                        </select>
                    </div>

                    <table class="w-full text-left table-auto min-w-max">
                        <thead>
                            <tr>
                                <th class="p-4 border-b border-slate-300 bg-slate-50">{"Source"}</th>
                                <th class="p-4 border-b border-slate-300 bg-slate-50">{"Amount"}</th>
                                <th class="p-4 border-b border-slate-300 bg-slate-50">{"Date Received"}</th>
                                <th class="p-4 border-b border-slate-300 bg-slate-50">{"Bank Account"}</th>
                                <th class="p-4 border-b border-slate-300 bg-slate-50">{"Notes"}</th>
                                <th class="p-4 border-b border-slate-300 bg-slate-50">{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            if *loading {
                                <tr><td colspan="6" class="text-center py-4 text-gray-500">{"Loading..."}</td></tr>
                            } else if visible.is_empty() {
                                <tr><td colspan="6" class="text-center py-4 text-gray-500">{"No income records found."}</td></tr>
                            } else {
                                { for visible.iter().map(|income| {
                                    let edit_target = income.clone();
                                    let on_edit = {
                                        let editing = editing.clone();
                                        Callback::from(move |_| editing.set(Some(edit_target.clone())))
                                    };
                                    let income_id = income.id;
                                    let on_delete = {
                                        let confirm_delete = confirm_delete.clone();
                                        Callback::from(move |_| confirm_delete.set(Some(income_id)))
                                    };
                                    html! {
                                        <tr key={income.id} class="hover:bg-slate-50">
                                            <td class="p-4 border-b border-slate-200">{ income.source.clone() }</td>
                                            <td class="p-4 border-b border-slate-200">{ format_amount(income.amount) }</td>
                                            <td class="p-4 border-b border-slate-200">{ income.date.clone() }</td>
                                            <td class="p-4 border-b border-slate-200">{ account_label(income.bank_account_id) }</td>
                                            <td class="p-4 border-b border-slate-200">{ income.notes.clone() }</td>
                                            <td class="p-4 border-b border-slate-200">
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
                title="Add Income"
            >
                {"+"}
            </button>

            if *show_add {
                <IncomeForm
                    accounts={(*accounts).clone()}
                    on_submit={on_add_submit}
                    on_close={{
                        let show_add = show_add.clone();
                        Callback::from(move |_| show_add.set(false))
                    }}
                />
            }

            if let Some(income) = &*editing {
                <IncomeForm
                    initial={Some(income.clone())}
                    accounts={(*accounts).clone()}
                    on_submit={{
                        let session = session.clone();
                        let incomes = incomes.clone();
                        let editing = editing.clone();
                        let error = error.clone();
                        let success = success.clone();
                        let income_id = income.id;
                        Callback::from(move |draft: IncomeDraft| {
                            let Some(session) = session.clone() else {
                                return;
                            };
                            let incomes = incomes.clone();
                            let editing = editing.clone();
                            let error = error.clone();
                            let success = success.clone();
                            spawn_local(async move {
                                match ApiClient::new(&session).update_income(income_id, &draft).await {
                                    Ok(updated) => {
                                        let mut next = (*incomes).clone();
                                        upsert(&mut next, updated);
                                        incomes.set(next);
                                        editing.set(None);
                                        flash(&success, "Income updated successfully!");
                                    }
                                    Err(err) => {
                                        error.set(Some(format!("Error updating income: {}", err)));
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
                    message="Do you really want to delete this income record? This action cannot be undone."
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
