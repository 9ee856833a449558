use leptos::{
    either::Either,
    ev::{MouseEvent, SubmitEvent},
    prelude::*,
};

use super::icon::IconSvg;
use super::reveal::use_reveal_on_view;
use crate::config::RelayConfig;
use crate::content::{Icon, CONTACT_EMAIL, GITHUB_URL, LINKEDIN_URL};
use crate::motion::Reveal;
use crate::relay::{ContactPayload, EmailJsRelay, FormVariant};
use crate::reveal::DEFAULT_THRESHOLD;
use crate::submission::{SubmissionFlow, SubmissionState};

const FIELD_CLASS: &str = "w-full px-4 py-2 bg-gray-50 rounded-lg border border-gray-200 focus:outline-none focus:ring-2 focus:ring-black";

#[component]
pub fn Contact(
    #[prop(into)] is_loaded: Signal<bool>,
    #[prop(optional)] variant: FormVariant,
) -> impl IntoView {
    let (target, revealed) = use_reveal_on_view(DEFAULT_THRESHOLD);
    let shown = Signal::derive(move || is_loaded.get() && revealed.get());
    let motion = Reveal::SECTION;

    view! {
        <section id="contact" class="py-20 bg-white">
            <div node_ref=target class="container mx-auto px-4">
                <h2
                    class="text-3xl md:text-4xl font-bold text-center mb-16 text-black"
                    style=move || motion.style(0, shown.get())
                >
                    "Get In Touch"
                </h2>
                <div class="max-w-4xl mx-auto grid md:grid-cols-2 gap-8">
                    <div style=move || motion.style(1, shown.get())>
                        <ConnectLinks />
                    </div>
                    <div style=move || motion.style(2, shown.get())>
                        <ContactForm variant />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ConnectLinks() -> impl IntoView {
    let link_class = "flex items-center gap-3 text-gray-600 hover:text-black transition-colors";
    view! {
        <h3 class="text-2xl font-semibold mb-4 text-black">"Let's Connect"</h3>
        <p class="text-gray-600 mb-6">
            "I'm always open to new opportunities and interesting projects. Feel free to reach out!"
        </p>
        <div class="space-y-4">
            <a href=format!("mailto:{CONTACT_EMAIL}") class=link_class>
                <IconSvg icon=Icon::Mail />
                {CONTACT_EMAIL}
            </a>
            <a href=GITHUB_URL class=link_class>
                <IconSvg icon=Icon::Github />
                "Github"
            </a>
            <a href=LINKEDIN_URL class=link_class>
                <IconSvg icon=Icon::Linkedin />
                "LinkedIn"
            </a>
        </div>
    }
}

#[component]
fn ContactForm(variant: FormVariant) -> impl IntoView {
    let config = use_context::<RelayConfig>().unwrap_or_default();
    let state = RwSignal::new(SubmissionState::Idle);
    let flow = StoredValue::new_local(
        SubmissionFlow::new(EmailJsRelay::new(config))
            .with_listener(move |s| state.set(s.clone())),
    );
    let with_subject = variant == FormVariant::WithSubject;
    let draft = RwSignal::new(ContactPayload {
        subject: with_subject.then(String::new),
        ..Default::default()
    });
    let (missing, set_missing) = signal(Vec::<&'static str>::new());
    let is_sending = move || state.with(SubmissionState::is_sending);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let payload = draft.get_untracked();
        let missing_fields = payload.missing_fields(variant);
        if !missing_fields.is_empty() {
            set_missing(missing_fields);
            return;
        }
        set_missing(Vec::new());
        let flow = flow.get_value();
        leptos::task::spawn_local(async move {
            let outcome = flow.submit(&payload).await;
            // the section may have unmounted while the relay answered
            draft.try_update(|d| outcome.apply_to(d));
        });
    };

    let reset = move |_: MouseEvent| {
        flow.with_value(|f| {
            f.reset();
        });
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <input
                type="text"
                name="name"
                placeholder="Name"
                class=FIELD_CLASS
                required
                prop:value=move || draft.with(|d| d.name.clone())
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
            <input
                type="email"
                name="email"
                placeholder="Email"
                class=FIELD_CLASS
                required
                prop:value=move || draft.with(|d| d.email.clone())
                on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
            />
            {with_subject
                .then(|| {
                    view! {
                        <input
                            type="text"
                            name="subject"
                            placeholder="Subject"
                            class=FIELD_CLASS
                            required
                            prop:value=move || draft.with(|d| d.subject.clone().unwrap_or_default())
                            on:input=move |ev| {
                                draft.update(|d| d.subject = Some(event_target_value(&ev)))
                            }
                        />
                    }
                })}
            <textarea
                name="message"
                placeholder="Message"
                rows="4"
                class=FIELD_CLASS
                required
                prop:value=move || draft.with(|d| d.message.clone())
                on:input=move |ev| draft.update(|d| d.message = event_target_value(&ev))
            ></textarea>
            {move || {
                let fields = missing.get();
                (!fields.is_empty())
                    .then(|| {
                        view! {
                            <p class="text-sm text-red-600">
                                "Please fill in: " {fields.join(", ")}
                            </p>
                        }
                    })
            }}
            <button
                type="submit"
                class="w-full px-8 py-3 bg-black rounded-lg text-white font-medium hover:bg-gray-900 transition-colors flex items-center justify-center gap-2 disabled:opacity-60"
                disabled=is_sending
            >
                {move || {
                    if is_sending() {
                        Either::Left(
                            view! {
                                <IconSvg icon=Icon::Loader class="w-4 h-4 animate-spin" />
                                "Sending..."
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                "Send Message"
                                <IconSvg icon=Icon::Send class="w-4 h-4" />
                            },
                        )
                    }
                }}
            </button>
            {move || {
                let current = state.get();
                let failed = matches!(current, SubmissionState::Failed(_));
                let tone = if failed {
                    "bg-red-50 text-red-700"
                } else {
                    "bg-green-50 text-green-700"
                };
                current
                    .notice()
                    .map(str::to_string)
                    .map(|notice| {
                        view! {
                            <div
                                class=format!(
                                    "flex items-center justify-between p-3 rounded-lg text-sm {tone}",
                                )
                                role="status"
                            >
                                <span>{notice}</span>
                                <button type="button" class="underline" on:click=reset>
                                    {if failed { "Dismiss" } else { "Send another" }}
                                </button>
                            </div>
                        }
                    })
            }}
        </form>
    }
}
