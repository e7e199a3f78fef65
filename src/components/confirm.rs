use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ConfirmDialogProps {
    pub message: AttrValue,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Modal "Are you sure?" step shown before any delete goes out.
#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_| on_confirm.emit(()))
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_| on_cancel.emit(()))
    };

    html! {
        <div class="fixed inset-0 backdrop-blur-sm flex items-center justify-center">
            <div class="bg-white p-6 rounded-lg shadow-lg text-center">
                <h3 class="text-lg font-semibold mb-4">{"Are you sure?"}</h3>
                <p class="mb-6">{ props.message.clone() }</p>
                <div class="flex justify-center">
                    <button
                        onclick={on_confirm}
                        class="bg-red-600 text-white px-4 py-2 rounded hover:bg-red-500 mr-2"
                    >
                        {"Yes, Delete"}
                    </button>
                    <button
                        onclick={on_cancel}
                        class="bg-transparent text-gray-700 px-4 py-2 rounded hover:bg-gray-100"
                    >
                        {"Cancel"}
                    </button>
                </div>
            </div>
        </div>
    }
}
