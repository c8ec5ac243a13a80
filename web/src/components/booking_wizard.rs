use chrono::NaiveDate;
use leptos::prelude::*;
use shared_types::catalog::{ARTISTS, SERVICES, TIME_SLOTS};
use shared_types::intake::MAX_REFERENCE_IMAGES;
use shared_types::{
    BookingDraft, BookingSubmission, BookingWizard, Field, FieldError, IntakeReply, Step,
    SubmissionStatus, WizardError,
};
use thaw::*;
use web_sys::HtmlInputElement;

use crate::components::loading::LoadingView;
use crate::server::submit_booking_request;
use crate::utils::files::{format_size, selected_images};

const NETWORK_FAILURE: &str =
    "We couldn't reach the studio. Please check your connection and try again.";

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Applies an edit to the draft. A successful edit clears the errors shown
/// for `field`.
fn edit_field(
    wizard: RwSignal<BookingWizard>,
    errors: RwSignal<Vec<FieldError>>,
    field: Field,
    f: impl FnOnce(&mut BookingDraft),
) {
    let mut result = Ok(());
    wizard.update(|w| result = w.edit(f));
    if result.is_ok() {
        errors.update(|errs| errs.retain(|e| e.field != field));
    }
}

/// Runs a wizard operation that can be rejected, showing its field errors.
fn apply(
    wizard: RwSignal<BookingWizard>,
    errors: RwSignal<Vec<FieldError>>,
    field: Field,
    op: impl FnOnce(&mut BookingWizard) -> Result<(), WizardError>,
) {
    let mut result = Ok(());
    wizard.update(|w| result = op(w));
    match result {
        Ok(()) => errors.update(|errs| errs.retain(|e| e.field != field)),
        Err(e) => errors.update(|errs| {
            errs.retain(|existing| existing.field != field);
            errs.extend(e.field_errors().iter().cloned());
        }),
    }
}

#[component]
fn FieldMessage(field: Field, errors: RwSignal<Vec<FieldError>>) -> impl IntoView {
    move || {
        errors.with(|errs| {
            errs.iter()
                .find(|e| e.field == field)
                .map(|e| view! { <p class="field-error" role="alert">{e.to_string()}</p> })
        })
    }
}

#[component]
fn TextField(
    label: &'static str,
    field: Field,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    on_input: impl Fn(String) + 'static + Send + Sync,
    errors: RwSignal<Vec<FieldError>>,
) -> impl IntoView {
    let has_error = move || errors.with(|errs| errs.iter().any(|e| e.field == field));

    view! {
        <label class="form-field">
            <span class="form-field__label">{label}</span>
            <input
                class="form-field__input"
                class=("form-field__input--invalid", has_error)
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
            />
            <FieldMessage field=field errors=errors/>
        </label>
    }
}

/// Four-step appointment request: contact details, service and artist,
/// date and time, then the tattoo description with optional reference images.
#[component]
pub fn BookingWizardForm() -> impl IntoView {
    let wizard = RwSignal::new(BookingWizard::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let step = Memo::new(move |_| wizard.with(|w| w.step()));
    let is_submitting = Memo::new(move |_| wizard.with(|w| w.status().is_submitting()));
    let submitted_reference = Memo::new(move |_| {
        wizard.with(|w| match w.status() {
            SubmissionStatus::Submitted { reference } => Some(reference.clone()),
            _ => None,
        })
    });
    let failure = Memo::new(move |_| {
        wizard.with(|w| match w.status() {
            SubmissionStatus::Failed(rejection) => Some(rejection.message.clone()),
            _ => None,
        })
    });

    let submit_booking = Action::new(move |submission: &BookingSubmission| {
        let submission = submission.clone();
        async move { submit_booking_request(submission).await }
    });

    // Handle submission result
    Effect::new(move |_| {
        if let Some(result) = submit_booking.value().get() {
            match result {
                Ok(reply) => {
                    if let IntakeReply::Rejected(rejection) = &reply {
                        errors.set(rejection.field_errors.clone());
                    }
                    wizard.update(|w| w.finish_submit(reply));
                }
                Err(e) => {
                    leptos::logging::error!("booking request failed: {e}");
                    wizard.update(|w| w.fail_submit(NETWORK_FAILURE));
                }
            }
        }
    });

    let handle_next = move || {
        let mut result = Ok(Step::default());
        wizard.update(|w| result = w.next(today()));
        match result {
            Ok(_) => errors.set(Vec::new()),
            Err(e) => errors.set(e.field_errors().to_vec()),
        }
    };

    let handle_previous = move || {
        wizard.update(|w| {
            w.previous();
        });
        errors.set(Vec::new());
    };

    let handle_submit = move || {
        let mut result = Err(WizardError::SubmissionInFlight);
        wizard.update(|w| result = w.begin_submit(today()));
        match result {
            Ok(submission) => {
                errors.set(Vec::new());
                submit_booking.dispatch(submission);
            }
            Err(e) => errors.set(e.field_errors().to_vec()),
        }
    };

    let progress_percentage = Memo::new(move |_| {
        (step.get().number() as f64 / Step::ALL.len() as f64) * 100.0
    });

    let form = move || {
        view! {
            <form
                class="booking-wizard__form"
                novalidate=true
                on:submit=move |ev| {
                    ev.prevent_default();
                    if step.get_untracked().is_last() {
                        handle_submit();
                    } else {
                        handle_next();
                    }
                }
            >
                <div class="progress-container">
                    <p class="progress-text">
                        {move || format!("Step {} of {}", step.get().number(), Step::ALL.len())}
                        " - "
                        {move || step.get().title()}
                    </p>
                    <div class="progress-bar">
                        <div
                            class="progress-fill"
                            style:width=move || format!("{}%", progress_percentage.get())
                        ></div>
                    </div>
                </div>

                {move || failure.get().map(|message| view! {
                    <div class="form-status">
                        <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
                        // Rejected fields move the wizard back; retry once they are fixed.
                        <Show when=move || step.get().is_last()>
                            <Button
                                button_type=ButtonType::Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| handle_submit()
                            >
                                "Try again"
                            </Button>
                        </Show>
                        <button
                            type="button"
                            class="form-status__dismiss"
                            aria-label="Dismiss"
                            on:click=move |_| wizard.update(|w| w.dismiss_status())
                        >
                            "✕"
                        </button>
                    </div>
                })}

                <div class="booking-step">
                    {move || match step.get() {
                        Step::Identity => view! { <IdentityStep wizard=wizard errors=errors/> }.into_any(),
                        Step::ServiceArtist => view! { <ServiceArtistStep wizard=wizard errors=errors/> }.into_any(),
                        Step::Schedule => view! { <ScheduleStep wizard=wizard errors=errors/> }.into_any(),
                        Step::Details => view! { <DetailsStep wizard=wizard errors=errors/> }.into_any(),
                    }}
                </div>

                <div class="navigation-controls">
                    <Button
                        button_type=ButtonType::Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || step.get() == Step::Identity || is_submitting.get())
                        on_click=move |_| handle_previous()
                    >
                        "Previous"
                    </Button>
                    {move || if step.get().is_last() {
                        view! {
                            <Button
                                button_type=ButtonType::Submit
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::from(is_submitting)
                                loading=Signal::from(is_submitting)
                            >
                                {move || if is_submitting.get() { "Submitting..." } else { "Submit Booking Request" }}
                            </Button>
                        }.into_any()
                    } else {
                        view! {
                            <Button
                                button_type=ButtonType::Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| handle_next()
                            >
                                "Next"
                            </Button>
                        }.into_any()
                    }}
                </div>

                <Show when=move || is_submitting.get()>
                    <LoadingView message="Sending your request to the studio...".to_string()/>
                </Show>
            </form>
        }
    };

    view! {
        <div class="booking-wizard">
            {move || match submitted_reference.get() {
                Some(reference) => view! {
                    <div class="booking-confirmation">
                        <MessageBar intent=MessageBarIntent::Success>
                            "Booking request submitted!"
                        </MessageBar>
                        <h3>"Thanks! Your request is with the studio."</h3>
                        <p>"We'll contact you within 24 hours to confirm your appointment."</p>
                        <p class="booking-confirmation__reference">
                            "Reference: " <code>{reference}</code>
                        </p>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                wizard.update(|w| w.dismiss_status());
                                errors.set(Vec::new());
                            }
                        >
                            "Book another appointment"
                        </Button>
                    </div>
                }.into_any(),
                None => form().into_any(),
            }}
        </div>
    }
}

#[component]
fn IdentityStep(wizard: RwSignal<BookingWizard>, errors: RwSignal<Vec<FieldError>>) -> impl IntoView {
    let draft_value = move |get: fn(&BookingDraft) -> &String| {
        Signal::derive(move || wizard.with(|w| get(w.draft()).clone()))
    };

    view! {
        <h3 class="booking-step__title">{Step::Identity.title()}</h3>
        <div class="form-row">
            <TextField
                label="First Name *"
                field=Field::FirstName
                placeholder="Enter your first name"
                value=draft_value(|d| &d.first_name)
                on_input=move |v| edit_field(wizard, errors, Field::FirstName, |d| d.first_name = v)
                errors=errors
            />
            <TextField
                label="Last Name *"
                field=Field::LastName
                placeholder="Enter your last name"
                value=draft_value(|d| &d.last_name)
                on_input=move |v| edit_field(wizard, errors, Field::LastName, |d| d.last_name = v)
                errors=errors
            />
        </div>
        <TextField
            label="Email *"
            field=Field::Email
            input_type="email"
            placeholder="your.email@example.com"
            value=draft_value(|d| &d.email)
            on_input=move |v| edit_field(wizard, errors, Field::Email, |d| d.email = v)
            errors=errors
        />
        <TextField
            label="Phone *"
            field=Field::Phone
            input_type="tel"
            placeholder="(416) 555-0123"
            value=draft_value(|d| &d.phone)
            on_input=move |v| edit_field(wizard, errors, Field::Phone, |d| d.phone = v)
            errors=errors
        />
        <label class="form-checkbox">
            <input
                type="checkbox"
                prop:checked=move || wizard.with(|w| w.draft().is_first_tattoo)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    let _ = wizard.try_update(|w| w.edit(|d| d.is_first_tattoo = checked));
                }
            />
            "This is my first tattoo"
        </label>
    }
}

#[component]
fn ServiceArtistStep(
    wizard: RwSignal<BookingWizard>,
    errors: RwSignal<Vec<FieldError>>,
) -> impl IntoView {
    view! {
        <h3 class="booking-step__title">{Step::ServiceArtist.title()}</h3>

        <fieldset class="choice-group">
            <legend>"Service Type *"</legend>
            <div class="choice-grid">
                {SERVICES
                    .iter()
                    .map(|service| {
                        let id = service.id;
                        view! {
                            <button
                                type="button"
                                class="choice-card"
                                class=("choice-card--selected", move || wizard.with(|w| w.draft().service == Some(id)))
                                on:click=move |_| apply(wizard, errors, Field::Service, |w| w.select_service(id))
                            >
                                <span class="choice-card__title">{service.name}</span>
                                <span class="choice-card__meta">{service.duration} " • " {service.price}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <FieldMessage field=Field::Service errors=errors/>
        </fieldset>

        <fieldset class="choice-group">
            <legend>"Preferred Artist"</legend>
            <div class="choice-grid">
                {ARTISTS
                    .iter()
                    .map(|artist| {
                        let id = artist.id;
                        view! {
                            <button
                                type="button"
                                class="choice-card"
                                class=("choice-card--selected", move || wizard.with(|w| w.draft().artist == Some(id)))
                                on:click=move |_| apply(wizard, errors, Field::Artist, |w| w.select_artist(id))
                            >
                                <span class="choice-card__title">{artist.name}</span>
                                <span class="choice-card__meta">{artist.specialty}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="form-hint">"Leave this blank and we'll match you with any available artist."</p>
        </fieldset>
    }
}

#[component]
fn ScheduleStep(wizard: RwSignal<BookingWizard>, errors: RwSignal<Vec<FieldError>>) -> impl IntoView {
    let min_date = today().to_string();
    let chosen_date = Memo::new(move |_| wizard.with(|w| w.draft().preferred_date));

    let on_date_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if value.is_empty() {
            edit_field(wizard, errors, Field::PreferredDate, |d| d.preferred_date = None);
            return;
        }
        match NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
            Ok(date) => apply(wizard, errors, Field::PreferredDate, |w| {
                w.set_preferred_date(date, today())
            }),
            Err(_) => errors.update(|errs| {
                errs.retain(|e| e.field != Field::PreferredDate);
                errs.push(FieldError::required(Field::PreferredDate));
            }),
        }
    };

    view! {
        <h3 class="booking-step__title">{Step::Schedule.title()}</h3>

        <label class="form-field">
            <span class="form-field__label">"Preferred Date *"</span>
            <input
                class="form-field__input"
                type="date"
                min=min_date
                prop:value=move || chosen_date.get().map(|d| d.to_string()).unwrap_or_default()
                on:change=on_date_change
            />
            <FieldMessage field=Field::PreferredDate errors=errors/>
        </label>

        <fieldset class="choice-group">
            <legend>"Preferred Time *"</legend>
            <div class="time-grid">
                {TIME_SLOTS
                    .iter()
                    .copied()
                    .map(|slot| {
                        let closed = move || chosen_date.get().is_some_and(|d| !slot.is_open_on(d));
                        view! {
                            <button
                                type="button"
                                class="time-slot"
                                class=("time-slot--selected", move || wizard.with(|w| w.draft().preferred_time == Some(slot)))
                                disabled=closed
                                on:click=move |_| apply(wizard, errors, Field::PreferredTime, |w| w.select_time(slot))
                            >
                                {slot.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <FieldMessage field=Field::PreferredTime errors=errors/>
            <p class="form-hint">"Mon - Sat 10:00 AM - 8:00 PM, Sun 12:00 PM - 6:00 PM"</p>
        </fieldset>
    }
}

#[component]
fn DetailsStep(wizard: RwSignal<BookingWizard>, errors: RwSignal<Vec<FieldError>>) -> impl IntoView {
    let has_allergies = Memo::new(move |_| wizard.with(|w| w.draft().has_allergies));
    let images = Memo::new(move |_| wizard.with(|w| w.draft().reference_images.clone()));

    let on_files = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        for image in selected_images(&input) {
            let mut result = Ok(());
            wizard.update(|w| result = w.attach_image(image));
            if let Err(e) = result {
                errors.update(|errs| {
                    errs.retain(|existing| existing.field != Field::ReferenceImages);
                    errs.extend(e.field_errors().iter().cloned());
                });
                break;
            }
        }
        // Let the same file be picked again after removal
        input.set_value("");
    };

    view! {
        <h3 class="booking-step__title">{Step::Details.title()}</h3>

        <label class="form-field">
            <span class="form-field__label">"Tattoo Description *"</span>
            <textarea
                class="form-field__input form-field__textarea"
                rows=5
                placeholder="Describe your tattoo idea: size, placement, style, colors..."
                prop:value=move || wizard.with(|w| w.draft().description.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    edit_field(wizard, errors, Field::Description, |d| d.description = value);
                }
            ></textarea>
            <FieldMessage field=Field::Description errors=errors/>
        </label>

        <div class="form-field">
            <span class="form-field__label">"Reference Images"</span>
            <input
                class="form-field__file"
                type="file"
                accept="image/*"
                multiple=true
                on:change=on_files
            />
            <p class="form-hint">{format!("Up to {MAX_REFERENCE_IMAGES} images.")}</p>
            <FieldMessage field=Field::ReferenceImages errors=errors/>
            <ul class="attachment-list">
                {move || {
                    images
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, image)| {
                            view! {
                                <li class="attachment-list__item">
                                    <span>{image.file_name}</span>
                                    <span class="attachment-list__size">{format_size(image.size_bytes)}</span>
                                    <button
                                        type="button"
                                        class="attachment-list__remove"
                                        aria-label="Remove image"
                                        on:click=move |_| apply(wizard, errors, Field::ReferenceImages, |w| w.remove_image(index))
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>

        <label class="form-checkbox">
            <input
                type="checkbox"
                prop:checked=move || has_allergies.get()
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    edit_field(wizard, errors, Field::AllergyDetails, |d| d.has_allergies = checked);
                }
            />
            "I have allergies or medical conditions we should know about"
        </label>

        <Show when=move || has_allergies.get()>
            <label class="form-field">
                <span class="form-field__label">"Allergy / Medical Details *"</span>
                <textarea
                    class="form-field__input form-field__textarea"
                    rows=3
                    placeholder="Please list any allergies or medical conditions"
                    prop:value=move || wizard.with(|w| w.draft().allergy_details.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        edit_field(wizard, errors, Field::AllergyDetails, |d| d.allergy_details = value);
                    }
                ></textarea>
                <FieldMessage field=Field::AllergyDetails errors=errors/>
            </label>
        </Show>
    }
}
