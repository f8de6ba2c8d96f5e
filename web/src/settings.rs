use crate::theme::Theme;
use crate::utils::*;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

/// Presentation preferences, persisted per browser.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct Settings {
    /// Outline the odd swatch once the clock runs out.
    pub reveal_target: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reveal_target: true,
        }
    }
}

impl StorageKey for Settings {
    const KEY: &'static str = "oddtint:settings";
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsProps {
    #[prop_or_default]
    pub open: bool,
    pub settings: Settings,
    pub on_change: Callback<Settings>,
}

#[function_component]
pub(crate) fn SettingsView(props: &SettingsProps) -> Html {
    let settings = props.settings;

    let on_reveal_toggle = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: Event| {
            on_change.emit(Settings {
                reveal_target: !settings.reveal_target,
            });
        })
    };

    let theme_link = |label: &'static str, theme: Theme| {
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            Theme::apply(theme);
        });
        html! {
            <li><a href="#" {onclick}>{label}</a></li>
        }
    };

    html! {
        <dialog id="settings" open={props.open}>
            <article>
                <h2>{"Settings"}</h2>
                <ul>
                    { theme_link("Auto", Theme::Auto) }
                    { theme_link("Light", Theme::Light) }
                    { theme_link("Dark", Theme::Dark) }
                </ul>
                <label>
                    <input type="checkbox" checked={settings.reveal_target} onchange={on_reveal_toggle}/>
                    {"Reveal the odd swatch when time runs out"}
                </label>
            </article>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_defaults_on() {
        assert!(Settings::default().reveal_target);
    }

    #[test]
    fn storage_key_is_namespaced() {
        assert_eq!(<Settings as StorageKey>::KEY, "oddtint:settings");
    }
}
