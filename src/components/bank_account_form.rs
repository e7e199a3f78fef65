use yew::prelude::*;

use crate::components::{bind_input, bind_select};
use crate::models::{BankAccount, BankAccountDraft};
use crate::validate::{account_number_error, required, routing_number_error};

#[derive(Properties, PartialEq)]
pub struct BankAccountFormProps {
    #[prop_or_default]
    pub initial: Option<BankAccount>,
    pub on_submit: Callback<BankAccountDraft>,
    pub on_close: Callback<()>,
}

#[function_component(BankAccountForm)]
pub fn bank_account_form(props: &BankAccountFormProps) -> Html {
    let bank_name = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|a| a.bank_name.clone())
            .unwrap_or_default()
    });
    let routing_number = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|a| a.routing_number.clone())
            .unwrap_or_default()
    });
    let account_number = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|a| a.account_number.clone())
            .unwrap_or_default()
    });
    let account_type = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|a| a.account_type.clone())
            .unwrap_or_else(|| "checking".to_string())
    });
    let alias = use_state(|| {
        props
            .initial
            .as_ref()
            .map(|a| a.alias.clone())
            .unwrap_or_default()
    });
    let routing_error = use_state(|| None::<&'static str>);
    let account_error = use_state(|| None::<&'static str>);
    let name_error = use_state(|| None::<&'static str>);

    let editing = props.initial.is_some();

    let on_submit = {
        let bank_name = bank_name.clone();
        let routing_number = routing_number.clone();
        let account_number = account_number.clone();
        let account_type = account_type.clone();
        let alias = alias.clone();
        let routing_error = routing_error.clone();
        let account_error = account_error.clone();
        let name_error = name_error.clone();
        let submit = props.on_submit.clone();
        Callback::from(move |_| {
            let name_err = if required(&bank_name) {
                None
            } else {
                Some("Bank name is required.")
            };
            let routing_err = routing_number_error(&routing_number);
            let account_err = account_number_error(&account_number);

            name_error.set(name_err);
            routing_error.set(routing_err);
            account_error.set(account_err);

            if name_err.is_some() || routing_err.is_some() || account_err.is_some() {
                return;
            }

            submit.emit(BankAccountDraft {
                bank_name: bank_name.trim().to_string(),
                routing_number: (*routing_number).clone(),
                account_number: (*account_number).clone(),
                account_type: (*account_type).clone(),
                alias: alias.trim().to_string(),
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
                    { if editing { "Edit Bank Account" } else { "Add New Bank Account" } }
                </h2>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Bank Name"}</label>
                    <input
                        type="text"
                        value={(*bank_name).clone()}
                        oninput={bind_input(&bank_name)}
                        class={if name_error.is_some() { "w-full p-2 border rounded border-red-500" } else { "w-full p-2 border rounded" }}
                        placeholder="Enter bank name"
                    />
                    if let Some(msg) = *name_error {
                        <p class="mt-1 text-sm text-red-600">{ msg }</p>
                    }
                </div>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Routing Number"}</label>
                    <input
                        type="text"
                        value={(*routing_number).clone()}
                        oninput={bind_input(&routing_number)}
                        class={if routing_error.is_some() { "w-full p-2 border rounded border-red-500" } else { "w-full p-2 border rounded" }}
                        placeholder="Enter routing number"
                    />
                    if let Some(msg) = *routing_error {
                        <p class="mt-1 text-sm text-red-600">{ msg }</p>
                    }
                </div>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Account Number"}</label>
                    <input
                        type="text"
                        value={(*account_number).clone()}
                        oninput={bind_input(&account_number)}
                        class={if account_error.is_some() { "w-full p-2 border rounded border-red-500" } else { "w-full p-2 border rounded" }}
                        placeholder="Enter account number"
                    />
                    if let Some(msg) = *account_error {
                        <p class="mt-1 text-sm text-red-600">{ msg }</p>
                    }
                </div>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Account Type"}</label>
                    <select
                        value={(*account_type).clone()}
                        onchange={bind_select(&account_type)}
                        class="w-full p-2 border rounded"
                    >
                        <option value="checking" selected={*account_type == "checking"}>{"Checking"}</option>
                        <option value="savings" selected={*account_type == "savings"}>{"Savings"}</option>
                    </select>
                </div>

                <div class="mb-4">
                    <label class="block text-gray-700">{"Alias (Optional)"}</label>
                    <input
                        type="text"
                        value={(*alias).clone()}
                        oninput={bind_input(&alias)}
                        class="w-full p-2 border rounded"
                        placeholder="Enter an alias for the account (optional)"
                    />
                </div>

                <div class="flex justify-end">
                    <button onclick={on_close} class="bg-gray-300 text-gray-700 px-4 py-2 rounded mr-2">
                        {"Cancel"}
                    </button>
                    <button onclick={on_submit} class="bg-blue-600 text-white px-4 py-2 rounded">
                        { if editing { "Save Changes" } else { "Add Account" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
