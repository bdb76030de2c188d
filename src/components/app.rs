use super::{
    event_panel::{EventLog, EventLogAction, EventPanel},
    playfield_view::PlayfieldView,
    settings_panel::SettingsPanel,
};
use ring_touch::model::{GestureSettings, JudgeEvent};
use yew::prelude::*;

const SETTINGS_KEY: &str = "rt_gesture_settings";

fn load_settings() -> Option<GestureSettings> {
    let store = web_sys::window()?.local_storage().ok()??;
    let raw = store.get_item(SETTINGS_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(s) => Some(s),
        Err(err) => {
            log::warn!("ignoring stored gesture settings: {err}");
            None
        }
    }
}

fn save_settings(settings: &GestureSettings) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            match serde_json::to_string(settings) {
                Ok(s) => {
                    let _ = store.set_item(SETTINGS_KEY, &s);
                }
                Err(err) => log::warn!("could not serialize gesture settings: {err}"),
            }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_state(GestureSettings::default);
    let events = use_reducer(EventLog::default);

    // Load persisted settings
    {
        let settings = settings.clone();
        use_effect_with((), move |_| {
            if let Some(s) = load_settings() {
                settings.set(s);
            }
            || ()
        });
    }
    // Persist + apply log level
    {
        let current = (*settings).clone();
        use_effect_with(current, move |s| {
            log::set_max_level(s.level_filter());
            save_settings(s);
            || ()
        });
    }

    let on_judge = {
        let events = events.clone();
        Callback::from(move |ev: JudgeEvent| events.dispatch(EventLogAction::Push(ev)))
    };
    let on_clear = {
        let events = events.clone();
        Callback::from(move |_| events.dispatch(EventLogAction::Clear))
    };
    let on_settings = {
        let settings = settings.clone();
        Callback::from(move |s: GestureSettings| settings.set(s))
    };

    html! {
        <div id="root" style="position:relative; width:100vw; height:100vh; overflow:hidden; background:#0e1116; color:#c9d1d9;">
            <PlayfieldView on_judge={on_judge} />
            <EventPanel log={(*events).clone()} on_clear={on_clear} />
            <SettingsPanel settings={(*settings).clone()} on_change={on_settings} />
        </div>
    }
}
