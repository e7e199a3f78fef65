use yew::prelude::*;

use crate::components::{bind_input, bind_select, bind_textarea};
use crate::format::today;
use crate::models::{BankAccount, Income, IncomeDraft};
use crate::validate::{parse_amount, required};

#[derive(Properties, PartialEq)]
pub struct IncomeFormProps {
    #[prop_or_default]
    pub initial: Option<Income>,
    /// The user's accounts, for the destination select.
    pub accounts: Vec<BankAccount>,
    pub on_submit: Callback<IncomeDraft>,
    pub on_close: Callback<()>,
}

#[function_component(IncomeForm)]
pub fn income_form(props: &IncomeFormProps) -> Html {
    let source = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|i| i.source.clone())
            .unwrap_or_default()
    });
    let amount = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|i| i.amount.to_string())
            .unwrap_or_default()
    });
    let date = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|i| i.date.clone())
            .unwrap_or_else(today)
    });
    let account_id = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|i| i.bank_account_id.to_string())
            .unwrap_or_default()
    });
    let notes = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|i| i.notes.clone())
            .unwrap_or_default()
    });
    let error = use_state(|| None::<String>);

    let editing = props.initial.is_some();

    let on_submit = {
        let source = source.clone();
        let amount = amount.clone();
        let date = date.clone();
        let account_id = account_id.clone();
        let notes = notes.clone();
        let error = error.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |_| {
            if !required(&source) || !required(&date) {
                error.set(Some("Please fill out all required fields.".to_string()));
                return;
            }
            let parsed = match parse_amount(&amount) {
                Ok(value) => value,
                Err(msg) => {
                    error.set(Some(msg.to_string()));
                    return;
                }
            };
            let bank_account_id = match account_id.parse::<i64>() {
                Ok(id) => id,
                Err(_) => {
                    error.set(Some("Please select a bank account.".to_string()));
                    return;
                }
            };
            error.set(None);
            submit.emit(IncomeDraft {
                source: source.trim().to_string(),
                amount: parsed,
                date: (*date).clone(),
                bank_account_id,
                notes: notes.trim().to_string(),
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div class="fixed inset-0 backdrop-blur-sm flex items-center justify-center">
            <div class="bg-white p-6 rounded-lg shadow-lg w-3/4 md:w-1/3">
                <h2 class="text-lg font-semibold text-gray-700 mb-4">
                    { if editing { "Edit Income" } else { "Add Income" } }
                </h2>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Income Source"}</label>
                    <input
                        type="text"
                        value={(*source).clone()}
                        oninput={bind_input(&source)}
                        class="w-full p-2 border rounded"
                        placeholder="e.g., Salary"
                    />
                </div>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Amount"}</label>
                    <input
                        type="text"
                        value={(*amount).clone()}
                        oninput={bind_input(&amount)}
                        class="w-full p-2 border rounded"
                        placeholder="Enter amount"
                    />
                </div>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Date Received"}</label>
                    <input
                        type="date"
                        value={(*date).clone()}
                        oninput={bind_input(&date)}
                        class="w-full p-2 border rounded"
                    />
                </div>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Bank Account"}</label>
                    <select
                        value={(*account_id).clone()}
                        onchange={bind_select(&account_id)}
                        class="w-full p-2 border rounded"
                    >
                        <option value="" selected={account_id.is_empty()}>{"Select Account"}</option>
                        { for props.accounts.iter().map(|account| {
                            let value = account.id.to_string();
                            html! {
                                <option value={value.clone()} selected={value == *account_id.as_str()}>
                                    { account.label() }
                                </option>
                            }
                        }) }
                    </select>
                </div>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Notes (Optional)"}</label>
                    <textarea
                        value={(*notes).clone()}
                        oninput={bind_textarea(&notes)}
                        class="w-full p-2 border rounded"
                        placeholder="Add any notes..."
                    />
                </div>

                if let Some(msg) = &*error {
                    <p class="text-sm text-red-600 mb-3">{ msg.clone() }</p>
                }

                <div class="flex justify-end">
                    <button onclick={on_close} class="bg-gray-300 text-gray-700 px-4 py-2 rounded mr-2">
                        {"Cancel"}
                    </button>
                    <button onclick={on_submit} class="bg-blue-600 text-white px-4 py-2 rounded">
                        { if editing { "Save Changes" } else { "Add Income" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
