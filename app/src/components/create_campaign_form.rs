use dioxus::prelude::*;
use fundraiser_api::prelude::*;

use crate::components::{TxOutcome, TxStatus};
use crate::hooks::use_wallet;

#[component]
pub fn CreateCampaignForm(on_created: EventHandler<TxHash>) -> Element {
    let wallet = use_wallet();
    let mut form = use_signal(|| CampaignForm::for_account(wallet.peek().account));
    let mut errors = use_signal(ValidationErrors::default);
    let mut submitting = use_signal(|| false);
    let mut outcome = use_signal(|| None as TxOutcome);

    // Beneficiary follows the connected account until the user types one.
    use_effect(move || {
        if let Some(account) = wallet.read().account {
            if form.peek().beneficiary.is_empty() {
                form.write().beneficiary = account.to_checksum(None);
            }
        }
    });

    let mut update = move |field: Field, value: String| {
        form.write().set(field, value);
        errors.write().clear(field);
    };

    let submit = move |_| {
        let snapshot = form.read().clone();
        let contract = wallet.peek().contract.clone();
        submitting.set(true);
        outcome.set(None);

        spawn(async move {
            match create_campaign(contract.as_ref(), &snapshot).await {
                Ok(tx) => {
                    form.set(CampaignForm::for_account(wallet.peek().account));
                    errors.set(ValidationErrors::default());
                    outcome.set(Some(Ok(tx)));
                    on_created.call(tx);
                }
                Err(e) => {
                    if let Some(field_errors) = e.field_errors() {
                        errors.set(field_errors.clone());
                    } else {
                        tracing::error!("Error creating campaign: {}", e);
                        outcome.set(Some(Err(e.user_message())));
                    }
                }
            }
            submitting.set(false);
        });
    };

    let current = form.read().clone();
    let field_errors = errors.read().clone();
    let busy = *submitting.read();

    rsx! {
        div { class: "space-y-4",
            FormField {
                label: "Campaign Title",
                value: current.title.clone(),
                placeholder: "e.g. Robotics Team Competition Fund",
                error: field_errors.get(Field::Title),
                oninput: move |value| update(Field::Title, value),
            }

            div {
                label { class: "block text-sm text-low mb-1", "Description" }
                textarea {
                    class: "input w-full h-32",
                    placeholder: "What will the funds be used for?",
                    value: "{current.description}",
                    oninput: move |evt| update(Field::Description, evt.value()),
                }
                if let Some(message) = field_errors.get(Field::Description) {
                    p { class: "text-red-400 text-xs mt-1", "{message}" }
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                FormField {
                    label: "Target Amount (ETH)",
                    value: current.target.clone(),
                    kind: "number",
                    placeholder: "0.00",
                    error: field_errors.get(Field::Target),
                    oninput: move |value| update(Field::Target, value),
                }
                FormField {
                    label: "Duration (days)",
                    value: current.duration_days.clone(),
                    kind: "number",
                    placeholder: "30",
                    error: field_errors.get(Field::Duration),
                    oninput: move |value| update(Field::Duration, value),
                }
            }

            FormField {
                label: "Beneficiary Address",
                value: current.beneficiary.clone(),
                placeholder: "0x...",
                error: field_errors.get(Field::Beneficiary),
                oninput: move |value| update(Field::Beneficiary, value),
            }

            FormField {
                label: "Image URL",
                value: current.image.clone(),
                kind: "url",
                placeholder: "https://...",
                error: field_errors.get(Field::Image),
                oninput: move |value| update(Field::Image, value),
            }

            button {
                class: "btn btn-primary w-full",
                disabled: busy,
                onclick: submit,
                if busy { "Creating Campaign..." } else { "Create Campaign" }
            }

            TxStatus {
                outcome: outcome.read().clone(),
                success: "University campaign created successfully!",
            }
        }
    }
}

#[component]
fn FormField(
    label: &'static str,
    value: String,
    #[props(default = "text")] kind: &'static str,
    placeholder: &'static str,
    error: Option<&'static str>,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            label { class: "block text-sm text-low mb-1", "{label}" }
            input {
                class: "input w-full",
                r#type: "{kind}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| oninput.call(evt.value()),
            }
            if let Some(message) = error {
                p { class: "text-red-400 text-xs mt-1", "{message}" }
            }
        }
    }
}
