use leptos::prelude::*;

pub mod form;
mod frontend;
pub mod submit;

use form::ContactForm;
use submit::Submitter;

/// Hold logical items of our website
#[derive(Debug, Clone, Copy)]
pub struct Website {
    // Signals bound directly to the form widgets
    pub form: RwSignal<ContactForm>,
    // Outcome line of the last submission attempt, empty while idle
    pub status: RwSignal<String>,
}

impl Default for Website {
    fn default() -> Self {
        Website {
            form: RwSignal::new(ContactForm::default()),
            status: RwSignal::new(String::new()),
        }
    }
}

impl Website {
    pub fn app() -> impl IntoView {
        let website = Website::default();
        let submitter = Submitter::new(website.form, website.status);

        view! { <frontend::Contact form=website.form status=website.status submitter /> }
    }
}
