use dioxus::prelude::*;
use shared_types::{parse_parental_income, RegistrationRecord, EDUCATIONAL_LEVELS};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle, FormSelect, Input};

use crate::api::{self, RegistrationError};
use crate::dates::today_iso_date;
use crate::dialog;

/// Participant registration page.
///
/// All eleven intake fields live in component signals; a submission reads
/// them verbatim, posts the assembled record, and reports the outcome
/// through a blocking dialog. Nothing is retained between submissions, and
/// nothing stops a second submission while the first is still in flight —
/// each runs to completion independently.
#[component]
pub fn Register() -> Element {
    let mut birth_date = use_signal(String::new);
    let mut birth_location = use_signal(String::new);
    let mut primary_residence = use_signal(String::new);
    let mut current_location = use_signal(String::new);
    let mut college = use_signal(String::new);
    let mut educational_level = use_signal(String::new);
    let mut parental_income = use_signal(String::new);
    let mut primary_interest = use_signal(String::new);
    let mut profession = use_signal(String::new);
    let mut religion = use_signal(String::new);
    let mut race = use_signal(String::new);

    // Cap the selectable birth date at the date the page mounted. Computed
    // once; a session that survives midnight keeps the mount-time cap.
    let max_birth_date = use_hook(today_iso_date);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();

        let record = RegistrationRecord {
            birth_date: birth_date(),
            birth_location: birth_location(),
            primary_residence: primary_residence(),
            current_location: current_location(),
            college: college(),
            educational_level: educational_level(),
            parental_income: parse_parental_income(&parental_income()),
            primary_interest: primary_interest(),
            profession: profession(),
            religion: religion(),
            race: race(),
        };

        match api::submit_registration(&record).await {
            Ok(()) => {
                dialog::alert(dialog::REGISTRATION_SUCCESS).await;
                birth_date.set(String::new());
                birth_location.set(String::new());
                primary_residence.set(String::new());
                current_location.set(String::new());
                college.set(String::new());
                educational_level.set(String::new());
                parental_income.set(String::new());
                primary_interest.set(String::new());
                profession.set(String::new());
                religion.set(String::new());
                race.set(String::new());
            }
            Err(RegistrationError::Rejected { message }) => {
                dialog::alert(&dialog::registration_failed(&message)).await;
            }
            Err(RegistrationError::Transport(detail)) => {
                tracing::error!("registration request failed: {detail}");
                dialog::alert(dialog::REGISTRATION_ERROR_GENERIC).await;
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./register.css") }

        div { class: "register-page",
            Card { class: "register-card",
                CardHeader {
                    CardTitle { "Participant Registration" }
                    CardDescription {
                        "Tell us a little about your background to join the study."
                    }
                }

                CardContent {
                    form { id: "registration-form", onsubmit: handle_submit,
                        Input {
                            id: "birth_date",
                            label: "Birth Date",
                            input_type: "date",
                            max: max_birth_date.clone(),
                            value: birth_date(),
                            on_input: move |e: FormEvent| birth_date.set(e.value()),
                        }
                        Input {
                            id: "birth_location",
                            label: "Birth Location",
                            placeholder: "City, country",
                            value: birth_location(),
                            on_input: move |e: FormEvent| birth_location.set(e.value()),
                        }
                        Input {
                            id: "primary_residence",
                            label: "Primary Residence",
                            placeholder: "Where you grew up",
                            value: primary_residence(),
                            on_input: move |e: FormEvent| primary_residence.set(e.value()),
                        }
                        Input {
                            id: "current_location",
                            label: "Current Location",
                            placeholder: "Where you live now",
                            value: current_location(),
                            on_input: move |e: FormEvent| current_location.set(e.value()),
                        }
                        Input {
                            id: "college",
                            label: "College",
                            value: college(),
                            on_input: move |e: FormEvent| college.set(e.value()),
                        }
                        FormSelect {
                            id: "educational_level",
                            label: "Educational Level",
                            value: educational_level(),
                            onchange: move |e: Event<FormData>| educational_level.set(e.value()),
                            option { value: "", "-- Select --" }
                            for level in EDUCATIONAL_LEVELS.iter() {
                                option { value: *level, "{level}" }
                            }
                        }
                        Input {
                            id: "parental_income",
                            label: "Parental Income",
                            placeholder: "Annual, in whole dollars",
                            value: parental_income(),
                            on_input: move |e: FormEvent| parental_income.set(e.value()),
                        }
                        Input {
                            id: "primary_interest",
                            label: "Primary Interest",
                            value: primary_interest(),
                            on_input: move |e: FormEvent| primary_interest.set(e.value()),
                        }
                        Input {
                            id: "profession",
                            label: "Profession",
                            value: profession(),
                            on_input: move |e: FormEvent| profession.set(e.value()),
                        }
                        Input {
                            id: "religion",
                            label: "Religion",
                            value: religion(),
                            on_input: move |e: FormEvent| religion.set(e.value()),
                        }
                        Input {
                            id: "race",
                            label: "Race",
                            value: race(),
                            on_input: move |e: FormEvent| race.set(e.value()),
                        }

                        button {
                            r#type: "submit",
                            class: "register-submit button",
                            "Register"
                        }
                    }
                }
            }
        }
    }
}
