//! Browser side of the portfolio: Yew components that render the content
//! and drive the effect state machines from timers, frames and listeners.

mod context;
mod dom;
mod effects;
mod scheduler;
mod sections;
mod theme;

use yew::prelude::*;

use crate::config::EffectSettings;
use context::{LanguageProvider, ThemeProvider};
use dom::{document, prefers_reduced_motion};
use effects::{AuroraBackground, CustomCursor, ScrollToTop};
use sections::{About, Contact, Footer, Hero, Navbar, Projects, Skills, WhatsAppButton};

#[function_component(App)]
fn app() -> Html {
    let settings = use_memo((), |_| {
        EffectSettings::default().with_reduced_motion(prefers_reduced_motion())
    });

    html! {
        <ContextProvider<EffectSettings> context={*settings}>
            <ThemeProvider>
                <LanguageProvider>
                    <a class="skip-link" href="#content">{"Skip to main content"}</a>
                    <AuroraBackground />
                    <CustomCursor />
                    <Navbar />
                    <main id="content">
                        <Hero />
                        <About />
                        <Skills />
                        <Projects />
                        <Contact />
                    </main>
                    <Footer />
                    <WhatsAppButton />
                    <ScrollToTop />
                </LanguageProvider>
            </ThemeProvider>
        </ContextProvider<EffectSettings>>
    }
}

fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    console_log::init_with_level(level).ok();
}

pub fn run() {
    init_logging();
    log::info!("starting portfolio v{}", env!("CARGO_PKG_VERSION"));

    yew::Renderer::<App>::with_root(
        document()
            .ok()
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
