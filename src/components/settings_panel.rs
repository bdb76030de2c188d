use ring_touch::model::{FLICK_MIN_DISTANCE, GestureSettings, HISTORY_CAPACITY};
use yew::prelude::*;

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsPanelProps {
    pub settings: GestureSettings,
    pub on_change: Callback<GestureSettings>,
}

#[function_component]
pub fn SettingsPanel(props: &SettingsPanelProps) -> Html {
    let adjust = |f: fn(&mut GestureSettings)| {
        let cb = props.on_change.clone();
        let current = props.settings.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = current.clone();
            f(&mut next);
            cb.emit(next);
        })
    };
    let cycle_level = adjust(|s| {
        let i = LOG_LEVELS.iter().position(|l| *l == s.log_level).unwrap_or(2);
        s.log_level = LOG_LEVELS[(i + 1) % LOG_LEVELS.len()].to_string();
    });
    let reset = {
        let cb = props.on_change.clone();
        Callback::from(move |_: MouseEvent| cb.emit(GestureSettings::default()))
    };

    let row_style = "display:flex; align-items:center; gap:6px;";
    let label_style = "flex:1;";
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:200px; display:flex; flex-direction:column; gap:6px; font-size:12px;">
        <div style="opacity:0.7;">{ format!("Flick ≥ {:.0}px · {} samples", FLICK_MIN_DISTANCE, HISTORY_CAPACITY) }</div>
        <div style={row_style}>
            <span style={label_style}>{ format!("Log {}", props.settings.log_level) }</span>
            <button onclick={cycle_level}>{"Cycle"}</button>
        </div>
        <button onclick={reset}>{"Reset"}</button>
    </div>}
}
