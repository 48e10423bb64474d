use std::rc::Rc;

use yew::prelude::*;

use super::dom::document;
use super::theme::{apply_theme, apply_theme_with_transition, Theme};
use crate::config::EffectSettings;
use crate::i18n::{Language, Translations};

#[derive(Clone, PartialEq)]
pub struct LanguageContext {
    pub language: Language,
    translations: Rc<Translations>,
    set_language: Callback<Language>,
}

impl LanguageContext {
    pub fn t(&self, key: &str) -> AttrValue {
        AttrValue::from(self.translations.lookup(self.language, key).to_string())
    }

    pub fn toggle(&self) {
        self.set_language.emit(self.language.toggled());
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    set_theme: Callback<Theme>,
}

impl ThemeContext {
    pub fn toggle(&self) {
        self.set_theme.emit(self.theme.toggled());
    }
}

fn load_translations() -> Translations {
    Translations::embedded().unwrap_or_else(|err| {
        log::error!("locale catalog is malformed, showing raw keys: {err}");
        Translations::default()
    })
}

#[derive(Properties, PartialEq)]
pub struct ProviderProps {
    #[prop_or_default]
    pub children: Html,
}

#[function_component(LanguageProvider)]
pub fn language_provider(props: &ProviderProps) -> Html {
    let language = use_state(Language::default);
    let translations = use_memo((), |_| load_translations());

    {
        let current = *language;
        use_effect_with(current, move |language| {
            if let Some(root) = document().ok().and_then(|d| d.document_element()) {
                let _ = root.set_attribute("lang", language.as_str());
            }
            || ()
        });
    }

    let set_language = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            log::info!("language changed to {}", next.as_str());
            language.set(next);
        })
    };

    let context = LanguageContext {
        language: *language,
        translations,
        set_language,
    };

    html! {
        <ContextProvider<LanguageContext> context={context}>
            {props.children.clone()}
        </ContextProvider<LanguageContext>>
    }
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ProviderProps) -> Html {
    let theme = use_state(Theme::from_system);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| {
            log::info!("theme changed to {}", next.as_str());
            apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    let context = ThemeContext {
        theme: *theme,
        set_theme,
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_language() -> LanguageContext {
    use_context::<LanguageContext>().expect("use_language must be used within a LanguageProvider")
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}

#[hook]
pub fn use_settings() -> EffectSettings {
    use_context::<EffectSettings>().unwrap_or_default()
}
