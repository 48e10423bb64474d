use web_sys::{Event, HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

use super::context::{use_language, use_settings, use_theme};
use super::dom::{current_year, open_in_new_tab, scroll_to_section};
use super::effects::{use_scroll_metrics, Counter, TypewriterText};
use super::scheduler::{use_in_view, TimerChain};
use crate::config::IN_VIEW_ROOT_MARGIN;
use crate::contact::{
    whatsapp_url, ContactField, ContactForm, SendStatus, CONTACT_EMAIL, CONTACT_LOCATION,
    CONTACT_PHONE_DISPLAY, WHATSAPP_GREETING, WHATSAPP_PHONE,
};
use crate::content::{
    roles, Project, Testimonial, APPROACH_KEYS, BRAND, CODE_LISTING, IS_AVAILABLE, NAV_ITEMS,
    OWNER_NAME, PROFILE_IMAGE, PROJECTS, PROJECT_FILTERS, RESUME_URL, SKILL_CATEGORIES,
    SOCIAL_LINKS, STATS, TESTIMONIALS,
};
use crate::effects::code_typer::CodeTyper;
use crate::effects::selector::{filter_by_category, Selector, ALL_CATEGORIES};

fn go_to(anchor: &str) {
    if let Err(err) = scroll_to_section(anchor) {
        log::error!("navigation to #{anchor} failed: {err:#}");
    }
}

fn broken_image(kind: &'static str, name: &'static str) -> Callback<Event> {
    Callback::from(move |_| log::warn!("failed to load {kind} image for {name}"))
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Html,
}

/// Fades its children in the first time they enter the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), IN_VIEW_ROOT_MARGIN);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), visible.then_some("is-visible"))}
        >
            {props.children.clone()}
        </div>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let lang = use_language();
    let theme = use_theme();
    let scrolled = use_scroll_metrics().navbar_scrolled();
    let menu_open = use_state(|| false);

    let on_theme = {
        let theme = theme.clone();
        Callback::from(move |_| theme.toggle())
    };
    let on_language = {
        let lang = lang.clone();
        Callback::from(move |_| lang.toggle())
    };
    let on_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let links = NAV_ITEMS.iter().map(|item| {
        let anchor = item.anchor;
        let menu_open = menu_open.clone();
        let onclick = Callback::from(move |_| {
            go_to(anchor);
            menu_open.set(false);
        });
        html! {
            <li key={anchor}>
                <button class="nav-link" type="button" {onclick}>{lang.t(item.key)}</button>
            </li>
        }
    });

    html! {
        <header class={classes!("navbar", scrolled.then_some("is-scrolled"))}>
            <nav class="navbar-inner">
                <button class="brand" type="button" onclick={Callback::from(|_| go_to("home"))}>
                    {BRAND}
                </button>
                <ul class={classes!("nav-links", menu_open.then_some("is-open"))}>
                    {for links}
                </ul>
                <div class="nav-actions">
                    <button
                        class="theme-toggle"
                        type="button"
                        aria-label={lang.t("nav.toggleTheme")}
                        aria-pressed={theme.theme.pressed().to_string()}
                        onclick={on_theme}
                    >
                        <span aria-hidden="true">{theme.theme.icon()}</span>
                    </button>
                    <button
                        class="language-toggle"
                        type="button"
                        aria-label={lang.t("nav.toggleLanguage")}
                        onclick={on_language}
                    >
                        <img src={lang.language.flag_src()} alt={lang.language.flag_alt()} width="20" height="14" />
                        <span>{lang.language.code()}</span>
                    </button>
                    <button
                        class="menu-toggle"
                        type="button"
                        aria-label={lang.t("nav.menu")}
                        aria-expanded={menu_open.to_string()}
                        onclick={on_menu}
                    >
                        {if *menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
        </header>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let lang = use_language();
    let words: Vec<AttrValue> = roles(lang.language)
        .iter()
        .map(|role| AttrValue::from(*role))
        .collect();

    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <p class="hero-greeting">{lang.t("hero.greeting")}</p>
                <h1 class="hero-name gradient-text">{OWNER_NAME}</h1>
                <h2 class="hero-role">
                    <TypewriterText {words} />
                </h2>
                <p class="hero-description">{lang.t("hero.description")}</p>
                <div class="hero-actions">
                    {for SOCIAL_LINKS.iter().map(|link| html! {
                        <a
                            key={link.label}
                            class="social-link"
                            href={link.href}
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            {link.label}
                        </a>
                    })}
                    <a class="button button-primary" href={RESUME_URL} download="">
                        {lang.t("hero.downloadCV")}
                    </a>
                </div>
                <ul class="stats">
                    {for STATS.iter().map(|stat| html! {
                        <li key={stat.key} class="stat">
                            <Counter target={stat.value} suffix={stat.suffix} />
                            <span class="stat-label">{lang.t(stat.key)}</span>
                        </li>
                    })}
                </ul>
            </div>
        </section>
    }
}

#[function_component(Skills)]
pub fn skills() -> Html {
    let lang = use_language();
    let selected = use_state(|| Selector::new(SKILL_CATEGORIES.len()));

    let tabs = SKILL_CATEGORIES.iter().enumerate().map(|(index, category)| {
        let selected = selected.clone();
        let is_active = selected.is_selected(index);
        let onclick = Callback::from(move |_| match selected.select(index) {
            Ok(next) => selected.set(next),
            Err(err) => log::debug!("ignoring skill tab: {err}"),
        });
        html! {
            <button
                key={category.key}
                class={classes!("tab", is_active.then_some("is-active"))}
                type="button"
                role="tab"
                aria-selected={is_active.to_string()}
                {onclick}
            >
                {lang.t(category.title_key)}
            </button>
        }
    });

    let active = &SKILL_CATEGORIES[selected.index()];

    html! {
        <section id="skills" class="section">
            <Reveal class="section-header">
                <h2 class="section-title">{lang.t("skills.title")}</h2>
                <blockquote class="section-quote">{lang.t("skills.quote")}</blockquote>
            </Reveal>
            <div class="tabs" role="tablist">{for tabs}</div>
            <ul key={active.key} class="skill-grid fade-in">
                {for active.skills.iter().map(|skill| html! {
                    <li key={skill.name} class="skill-chip" style={format!("--skill-color: {};", skill.color)}>
                        <span class="skill-dot" aria-hidden="true"></span>
                        {skill.name}
                    </li>
                })}
            </ul>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let lang = use_language();
    let project = &props.project;

    html! {
        <article class="project-card" data-cursor-hover="">
            <div class="project-media">
                <img
                    src={project.image}
                    alt={project.title}
                    loading="lazy"
                    onerror={broken_image("project", project.title)}
                />
                if project.featured {
                    <span class="badge">{lang.t("projects.featured")}</span>
                }
            </div>
            <div class="project-body">
                <h3>{project.title}</h3>
                <p class="muted">{project.description}</p>
                <ul class="tech-list">
                    {for project.technologies.iter().map(|tech| html! { <li key={*tech}>{*tech}</li> })}
                </ul>
                <div class="project-links">
                    <a href={project.github} target="_blank" rel="noopener noreferrer">{"GitHub"}</a>
                    if let Some(demo) = project.demo_url() {
                        <a href={demo} target="_blank" rel="noopener noreferrer">{"Demo"}</a>
                    }
                </div>
            </div>
        </article>
    }
}

#[function_component(Projects)]
pub fn projects() -> Html {
    let lang = use_language();
    let filter = use_state(|| ALL_CATEGORIES);
    let visible = filter_by_category(&PROJECTS, &filter);

    let buttons = PROJECT_FILTERS.iter().map(|option| {
        let filter = filter.clone();
        let key = option.key;
        let is_active = *filter == key;
        let onclick = Callback::from(move |_| filter.set(key));
        html! {
            <button
                key={key}
                class={classes!("filter", is_active.then_some("is-active"))}
                type="button"
                aria-pressed={is_active.to_string()}
                {onclick}
            >
                {lang.t(option.label_key)}
            </button>
        }
    });

    html! {
        <section id="projects" class="section">
            <Reveal class="section-header">
                <h2 class="section-title">{lang.t("projects.title")}</h2>
                <blockquote class="section-quote">{lang.t("projects.quote")}</blockquote>
            </Reveal>
            <div class="filters">{for buttons}</div>
            if visible.is_empty() {
                <p class="muted">{lang.t("projects.empty")}</p>
            } else {
                <div class="project-grid">
                    {for visible.into_iter().map(|project| html! {
                        <ProjectCard key={project.id} project={*project} />
                    })}
                </div>
            }
            <div class="section-footer">
                <a class="button" href={SOCIAL_LINKS[0].href} target="_blank" rel="noopener noreferrer">
                    {lang.t("projects.viewAll")}
                </a>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct TestimonialCardProps {
    testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let testimonial = &props.testimonial;
    let stars = "★".repeat(usize::from(testimonial.rating));

    html! {
        <figure class="testimonial fade-in">
            <blockquote>{testimonial.content}</blockquote>
            <figcaption>
                <img
                    class="avatar"
                    src={testimonial.avatar}
                    alt={testimonial.name}
                    loading="lazy"
                    onerror={broken_image("testimonial", testimonial.name)}
                />
                <span class="testimonial-name">{testimonial.name}</span>
                <span class="muted">{testimonial.position}</span>
                <span class="rating" aria-label={format!("{}/5", testimonial.rating)}>{stars}</span>
            </figcaption>
        </figure>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let lang = use_language();
    let carousel = use_state(|| Selector::new(TESTIMONIALS.len()));

    let on_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_| carousel.set(carousel.prev()))
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_| carousel.set(carousel.next()))
    };
    let dots = (0..carousel.count()).map(|index| {
        let carousel = carousel.clone();
        let is_active = carousel.is_selected(index);
        let onclick = Callback::from(move |_| {
            if let Ok(next) = carousel.select(index) {
                carousel.set(next);
            }
        });
        html! {
            <button
                key={index}
                class={classes!("dot", is_active.then_some("is-active"))}
                type="button"
                aria-label={format!("{}", index + 1)}
                aria-current={is_active.to_string()}
                {onclick}
            ></button>
        }
    });

    html! {
        <section id="about" class="section">
            <Reveal class="section-header">
                <h2 class="section-title">{lang.t("about.title")}</h2>
            </Reveal>
            <div class="about-grid">
                <div class="about-profile">
                    <img
                        class="profile-image"
                        src={PROFILE_IMAGE}
                        alt={OWNER_NAME}
                        loading="lazy"
                        onerror={broken_image("profile", OWNER_NAME)}
                    />
                    <div class="about-badges">
                        <span class="badge">{"5+ "}{lang.t("about.experience")}</span>
                        <span class="badge">
                            {lang.t("about.availability")}{": "}
                            {if IS_AVAILABLE { lang.t("footer.available") } else { lang.t("footer.busy") }}
                        </span>
                    </div>
                </div>
                <div class="about-copy">
                    <p>
                        {lang.t("about.intro1")}{" "}
                        <strong class="gradient-text">{OWNER_NAME}</strong>
                        {lang.t("about.intro2")}
                    </p>
                    <p>
                        {lang.t("about.journey1")}
                        <strong>{" GolfitoShop"}</strong>
                        {lang.t("about.journey2")}
                    </p>
                    <h3>{lang.t("about.approach")}</h3>
                    <ul class="approach-list">
                        {for APPROACH_KEYS.iter().map(|key| html! { <li key={*key}>{lang.t(key)}</li> })}
                    </ul>
                </div>
            </div>
            <div class="testimonials">
                <h3 class="section-subtitle">{lang.t("about.clientsSays")}</h3>
                <div class="carousel">
                    <button class="carousel-arrow" type="button" aria-label={lang.t("about.previous")} onclick={on_prev}>
                        {"‹"}
                    </button>
                    <TestimonialCard
                        key={carousel.index()}
                        testimonial={TESTIMONIALS[carousel.index()]}
                    />
                    <button class="carousel-arrow" type="button" aria-label={lang.t("about.next")} onclick={on_next}>
                        {"›"}
                    </button>
                </div>
                <div class="carousel-dots">{for dots}</div>
            </div>
        </section>
    }
}

/// Terminal window that types out a code listing once scrolled into view.
#[function_component(CodeTerminal)]
fn code_terminal() -> Html {
    let settings = use_settings();
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), IN_VIEW_ROOT_MARGIN);
    let typed = use_state(String::new);

    {
        let typed = typed.clone();
        use_effect_with(
            (visible, settings.code_interval_ms),
            move |&(visible, interval_ms)| {
                let chain = visible.then(|| {
                    let mut typer = CodeTyper::new(&CODE_LISTING);
                    TimerChain::start(interval_ms, move || {
                        typer.tick();
                        typed.set(typer.text().to_string());
                        (!typer.is_done()).then_some(interval_ms)
                    })
                });
                move || drop(chain)
            },
        );
    }

    html! {
        <div ref={node} class="terminal" aria-hidden="true">
            <div class="terminal-bar">
                <span class="terminal-light red"></span>
                <span class="terminal-light yellow"></span>
                <span class="terminal-light green"></span>
                <span class="terminal-title">{"developer.js"}</span>
            </div>
            <pre class="terminal-body"><code>{(*typed).clone()}<span class="terminal-caret">{"▋"}</span></code></pre>
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let lang = use_language();
    let form = use_state(ContactForm::default);
    let status = use_state(SendStatus::default);

    let on_field = |field: ContactField| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = match field {
                ContactField::Message => event
                    .target_dyn_into::<HtmlTextAreaElement>()
                    .map(|area| area.value()),
                ContactField::Name | ContactField::Email => event
                    .target_dyn_into::<HtmlInputElement>()
                    .map(|input| input.value()),
            };
            if let Some(value) = value {
                form.set(form.with_field(field, value));
            }
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            log::info!("opening WhatsApp chat at wa.me");
            let opened = match open_in_new_tab(&form.whatsapp_url()) {
                Ok(()) => true,
                Err(err) => {
                    log::warn!("could not open WhatsApp: {err:#}");
                    false
                }
            };
            let mut next = (*form).clone();
            status.set(next.settle(opened));
            form.set(next);
        })
    };

    html! {
        <section id="contact" class="section">
            <Reveal class="section-header">
                <h2 class="section-title">{lang.t("contact.title")}</h2>
                <p class="muted">{lang.t("contact.subtitle")}</p>
            </Reveal>
            <div class="contact-grid">
                <div class="contact-side">
                    <CodeTerminal />
                    <ul class="contact-cards">
                        <li class="contact-card">
                            <span class="muted">{lang.t("contact.email")}</span>
                            <a href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
                        </li>
                        <li class="contact-card">
                            <span class="muted">{"WhatsApp"}</span>
                            <a href={whatsapp_url(WHATSAPP_PHONE, WHATSAPP_GREETING)} target="_blank" rel="noopener noreferrer">
                                {CONTACT_PHONE_DISPLAY}
                            </a>
                        </li>
                        <li class="contact-card">
                            <span class="muted">{lang.t("contact.location")}</span>
                            <span>{CONTACT_LOCATION}</span>
                        </li>
                    </ul>
                </div>
                <form class="contact-form" {onsubmit}>
                    <label>
                        <span>{lang.t("contact.name")}</span>
                        <input
                            type="text"
                            required=true
                            placeholder={lang.t("contact.namePlaceholder")}
                            value={form.name.clone()}
                            oninput={on_field(ContactField::Name)}
                        />
                    </label>
                    <label>
                        <span>{lang.t("contact.email")}</span>
                        <input
                            type="email"
                            required=true
                            placeholder={lang.t("contact.emailPlaceholder")}
                            value={form.email.clone()}
                            oninput={on_field(ContactField::Email)}
                        />
                    </label>
                    <label>
                        <span>{lang.t("contact.message")}</span>
                        <textarea
                            rows="5"
                            required=true
                            placeholder={lang.t("contact.messagePlaceholder")}
                            value={form.message.clone()}
                            oninput={on_field(ContactField::Message)}
                        />
                    </label>
                    <button class="button button-primary" type="submit">{lang.t("contact.send")}</button>
                    {match *status {
                        SendStatus::Idle => Html::default(),
                        SendStatus::Opened => html! {
                            <p class="form-status" role="status">{lang.t("contact.sent")}</p>
                        },
                        SendStatus::Blocked => html! {
                            <p class="form-status is-blocked" role="status">
                                {lang.t("contact.blocked")}{" "}
                                <a href={form.whatsapp_url()} target="_blank" rel="noopener noreferrer">
                                    {"wa.me"}
                                </a>
                            </p>
                        },
                    }}
                </form>
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let lang = use_language();
    let status = if IS_AVAILABLE {
        lang.t("footer.available")
    } else {
        lang.t("footer.busy")
    };

    html! {
        <footer class="footer">
            <div class="footer-brand">
                <span class="brand gradient-text">{BRAND}</span>
                <p class="muted">{lang.t("footer.tagline")}</p>
                <span class={classes!("status", IS_AVAILABLE.then_some("is-available"))}>
                    <span class="status-dot" aria-hidden="true"></span>
                    {status}
                </span>
            </div>
            <div class="footer-links">
                <h3>{lang.t("footer.connect")}</h3>
                <ul>
                    {for SOCIAL_LINKS.iter().map(|link| html! {
                        <li key={link.label}>
                            <a href={link.href} target="_blank" rel="noopener noreferrer">{link.label}</a>
                        </li>
                    })}
                </ul>
            </div>
            <p class="footer-rights">
                {format!("© {} {}. ", current_year(), OWNER_NAME)}{lang.t("footer.rights")}
            </p>
        </footer>
    }
}

#[function_component(WhatsAppButton)]
pub fn whatsapp_button() -> Html {
    let lang = use_language();
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_| hovered.set(false))
    };

    html! {
        <div class="whatsapp-float">
            if *hovered {
                <div class="whatsapp-tooltip" role="tooltip">
                    <strong>{lang.t("whatsapp.title")}</strong>
                    <span>{lang.t("whatsapp.subtitle")}</span>
                </div>
            }
            <a
                class="whatsapp-button"
                href={whatsapp_url(WHATSAPP_PHONE, WHATSAPP_GREETING)}
                target="_blank"
                rel="noopener noreferrer"
                aria-label={lang.t("whatsapp.title")}
                {onmouseenter}
                {onmouseleave}
            >
                <span aria-hidden="true">{"💬"}</span>
            </a>
        </div>
    }
}
