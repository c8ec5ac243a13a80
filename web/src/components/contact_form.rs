use leptos::prelude::*;
use shared_types::catalog::INQUIRY_TYPES;
use shared_types::{
    ContactDraft, ContactForm, ContactSubmission, Field, FieldError, IntakeReply, SubmissionStatus,
    WizardError,
};
use thaw::*;

use crate::server::submit_contact_inquiry;

fn edit(
    form: RwSignal<ContactForm>,
    errors: RwSignal<Vec<FieldError>>,
    field: Field,
    f: impl FnOnce(&mut ContactDraft),
) {
    let mut result = Ok(());
    form.update(|c| result = c.edit(f));
    if result.is_ok() {
        errors.update(|errs| errs.retain(|e| e.field != field));
    }
}

fn error_for(errors: RwSignal<Vec<FieldError>>, field: Field) -> impl Fn() -> Option<String> + Copy {
    move || {
        errors.with(|errs| {
            errs.iter()
                .find(|e| e.field == field)
                .map(ToString::to_string)
        })
    }
}

#[component]
pub fn ContactInquiryForm() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());

    let is_submitting = Memo::new(move |_| form.with(|c| c.status().is_submitting()));
    let status = Memo::new(move |_| form.with(|c| c.status().clone()));

    let send_inquiry = Action::new(move |submission: &ContactSubmission| {
        let submission = submission.clone();
        async move { submit_contact_inquiry(submission).await }
    });

    Effect::new(move |_| {
        if let Some(result) = send_inquiry.value().get() {
            match result {
                Ok(reply) => {
                    if let IntakeReply::Rejected(rejection) = &reply {
                        errors.set(rejection.field_errors.clone());
                    }
                    form.update(|c| c.finish_submit(reply));
                }
                Err(e) => {
                    leptos::logging::error!("contact inquiry failed: {e}");
                    form.update(|c| {
                        c.fail_submit("We couldn't send your message. Please try again or call the studio.")
                    });
                }
            }
        }
    });

    let handle_submit = move || {
        let mut result = Err(WizardError::SubmissionInFlight);
        form.update(|c| result = c.begin_submit());
        match result {
            Ok(submission) => {
                errors.set(Vec::new());
                send_inquiry.dispatch(submission);
            }
            Err(e) => errors.set(e.field_errors().to_vec()),
        }
    };

    let draft = move |get: fn(&ContactDraft) -> &String| move || form.with(|c| get(c.draft()).clone());

    view! {
        <form
            class="contact-form"
            novalidate=true
            on:submit=move |ev| {
                ev.prevent_default();
                handle_submit();
            }
        >
            <h2 class="contact-form__title">"Send Us a Message"</h2>

            {move || {
                let banner = match status.get() {
                    SubmissionStatus::Submitted { .. } => view! {
                        <MessageBar intent=MessageBarIntent::Success>
                            "Thanks for reaching out! We'll get back to you within 24 hours."
                        </MessageBar>
                    }.into_any(),
                    SubmissionStatus::Failed(rejection) => view! {
                        <MessageBar intent=MessageBarIntent::Error>{rejection.message}</MessageBar>
                    }.into_any(),
                    _ => return None,
                };
                Some(view! {
                    <div class="form-status">
                        {banner}
                        <button
                            type="button"
                            class="form-status__dismiss"
                            aria-label="Dismiss"
                            on:click=move |_| form.update(|c| c.dismiss_status())
                        >
                            "✕"
                        </button>
                    </div>
                })
            }}

            <div class="form-row">
                <label class="form-field">
                    <span class="form-field__label">"Full Name *"</span>
                    <input
                        class="form-field__input"
                        placeholder="Your full name"
                        prop:value=draft(|d| &d.name)
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            edit(form, errors, Field::Name, |d| d.name = v);
                        }
                    />
                    {move || error_for(errors, Field::Name)().map(|e| view! { <p class="field-error">{e}</p> })}
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Email Address *"</span>
                    <input
                        class="form-field__input"
                        type="email"
                        placeholder="your.email@example.com"
                        prop:value=draft(|d| &d.email)
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            edit(form, errors, Field::Email, |d| d.email = v);
                        }
                    />
                    {move || error_for(errors, Field::Email)().map(|e| view! { <p class="field-error">{e}</p> })}
                </label>
            </div>

            <div class="form-row">
                <label class="form-field">
                    <span class="form-field__label">"Phone Number"</span>
                    <input
                        class="form-field__input"
                        type="tel"
                        placeholder="(416) 555-0123"
                        prop:value=draft(|d| &d.phone)
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            edit(form, errors, Field::Phone, |d| d.phone = v);
                        }
                    />
                </label>
                <label class="form-field">
                    <span class="form-field__label">"Inquiry Type"</span>
                    <select
                        class="form-field__input"
                        prop:value=move || {
                            form.with(|c| {
                                c.draft()
                                    .inquiry_type
                                    .and_then(|t| INQUIRY_TYPES.iter().position(|i| *i == t))
                                    .map(|i| i.to_string())
                                    .unwrap_or_default()
                            })
                        }
                        on:change=move |ev| {
                            let selected = event_target_value(&ev)
                                .parse::<usize>()
                                .ok()
                                .and_then(|i| INQUIRY_TYPES.get(i).copied());
                            let _ = form.try_update(|c| c.edit(|d| d.inquiry_type = selected));
                        }
                    >
                        <option value="">"Select inquiry type"</option>
                        {INQUIRY_TYPES
                            .iter()
                            .enumerate()
                            .map(|(i, t)| view! { <option value=i.to_string()>{t.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>

            <label class="form-field">
                <span class="form-field__label">"Subject *"</span>
                <input
                    class="form-field__input"
                    placeholder="Brief subject of your inquiry"
                    prop:value=draft(|d| &d.subject)
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        edit(form, errors, Field::Subject, |d| d.subject = v);
                    }
                />
                {move || error_for(errors, Field::Subject)().map(|e| view! { <p class="field-error">{e}</p> })}
            </label>

            <label class="form-field">
                <span class="form-field__label">"Message *"</span>
                <textarea
                    class="form-field__input form-field__textarea"
                    rows=6
                    placeholder="Tell us about your tattoo idea, questions, or how we can help you..."
                    prop:value=draft(|d| &d.message)
                    on:input=move |ev| {
                        let v = event_target_value(&ev);
                        edit(form, errors, Field::Message, |d| d.message = v);
                    }
                ></textarea>
                {move || error_for(errors, Field::Message)().map(|e| view! { <p class="field-error">{e}</p> })}
            </label>

            <Button
                button_type=ButtonType::Submit
                appearance=ButtonAppearance::Primary
                disabled=Signal::from(is_submitting)
                loading=Signal::from(is_submitting)
            >
                {move || if is_submitting.get() { "Sending..." } else { "Send Message" }}
            </Button>
        </form>
    }
}
