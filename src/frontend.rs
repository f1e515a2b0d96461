//! Frontend components for the contact page.

use crate::form::{ContactForm, Field};
use crate::submit::Submitter;
use leptos::prelude::*;

const FIELD_CLASS: &str = "w-full px-3 py-2 border rounded-md dark:bg-gray-700";

/// The whole contact section: static info panel on one side, the message
/// form on the other.
#[component]
pub fn Contact(
    form: RwSignal<ContactForm>,
    status: RwSignal<String>,
    submitter: Submitter,
) -> impl IntoView {
    view! {
        <section id="contact" class="py-20">
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold mb-8 text-center">"Contact Me"</h2>
                <div class="flex flex-col md:flex-row gap-8">
                    <InfoPanel />
                    <MessageForm form status submitter />
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoPanel() -> impl IntoView {
    view! {
        <div class="md:w-1/2">
            <h3 class="text-xl font-semibold mb-4">"Get in Touch"</h3>
            <p class="mb-4">"Feel free to reach out to me for any inquiries or opportunities."</p>
            <div class="flex items-center mb-2">
                <span class="mr-2" aria-hidden="true">"📧"</span>
                <p>"puneetchandna7@gmail.com"</p>
            </div>
            <div class="flex items-center mb-4">
                <span class="mr-2" aria-hidden="true">"📧"</span>
                <p>"puneet.chandna2022@vitstudent.ac.in"</p>
            </div>
            <div class="flex space-x-4">
                <SocialLink href="https://linkedin.com/in/puneet-chandna2004" label="LinkedIn" />
                <SocialLink href="https://github.com/puneet-chandna" label="GitHub" />
                <SocialLink href="https://x.com/puneet_chandna_" label="X" />
            </div>
        </div>
    }
}

#[component]
fn SocialLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class="text-blue-500 hover:text-blue-600"
        >
            {label}
        </a>
    }
}

/// The bound form. Field widgets carry the `required` marking; the status
/// line below the button only renders once a submission set it.
#[component]
fn MessageForm(
    form: RwSignal<ContactForm>,
    status: RwSignal<String>,
    submitter: Submitter,
) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submitter.submit();
    };

    view! {
        <form on:submit=on_submit class="md:w-1/2 space-y-4">
            <div>
                <label class="block mb-2">"Name"</label>
                <input
                    type="text"
                    id="name"
                    required
                    class=FIELD_CLASS
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| {
                        form.update(|f| *f = f.with_field(Field::Name, event_target_value(&ev)))
                    }
                />
            </div>
            <div>
                <label class="block mb-2">"Email"</label>
                <input
                    type="email"
                    id="email"
                    required
                    class=FIELD_CLASS
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| {
                        form.update(|f| *f = f.with_field(Field::Email, event_target_value(&ev)))
                    }
                />
            </div>
            <div>
                <label class="block mb-2">"Message"</label>
                <textarea
                    id="message"
                    required
                    rows="4"
                    class=FIELD_CLASS
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| {
                        form.update(|f| *f = f.with_field(Field::Message, event_target_value(&ev)))
                    }
                ></textarea>
            </div>
            <button
                type="submit"
                class="w-full bg-blue-500 text-white px-4 py-2 rounded-md hover:bg-blue-600 transition-colors"
            >
                "Send Message"
            </button>
            <Show when=move || status.with(|s| !s.is_empty())>
                <p class="text-center mt-4">{move || status.get()}</p>
            </Show>
        </form>
    }
}
