use std::collections::VecDeque;
use std::rc::Rc;

use ring_touch::model::{FlickDirection, JudgeEvent, Phase};
use ring_touch::util::format_millis;
use yew::prelude::*;

const MAX_ROWS: usize = 12;

/// Most recent judge events, newest first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventLog {
    pub rows: VecDeque<JudgeEvent>,
    pub total: u64,
}

pub enum EventLogAction {
    Push(JudgeEvent),
    Clear,
}

impl Reducible for EventLog {
    type Action = EventLogAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            EventLogAction::Push(ev) => {
                next.rows.push_front(ev);
                next.rows.truncate(MAX_ROWS);
                next.total += 1;
            }
            EventLogAction::Clear => {
                next.rows.clear();
            }
        }
        Rc::new(next)
    }
}

fn phase_label(p: Phase) -> &'static str {
    match p {
        Phase::Start => "start",
        Phase::Move => "move",
        Phase::End => "end",
    }
}

fn flick_label(f: Option<FlickDirection>) -> &'static str {
    match f {
        Some(FlickDirection::Up) => "↑",
        Some(FlickDirection::Down) => "↓",
        Some(FlickDirection::Left) => "←",
        Some(FlickDirection::Right) => "→",
        None => "",
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct EventPanelProps {
    pub log: EventLog,
    pub on_clear: Callback<()>,
}

#[function_component]
pub fn EventPanel(props: &EventPanelProps) -> Html {
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let cell = "padding:1px 6px; font-variant-numeric:tabular-nums; text-align:right;";
    html! {<div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px 12px; min-width:260px; font-size:12px; pointer-events:auto;">
        <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:6px;">
            <span style="font-weight:600;">{ format!("Judge events ({})", props.log.total) }</span>
            <button onclick={clear_cb} style="padding:2px 8px; font-size:11px;">{"Clear"}</button>
        </div>
        <table style="border-collapse:collapse;">
            <tr style="opacity:0.6;">
                <th style={cell}>{"id"}</th>
                <th style={cell}>{"phase"}</th>
                <th style={cell}>{"lane"}</th>
                <th style={cell}>{"dist"}</th>
                <th style={cell}>{"flick"}</th>
                <th style={cell}>{"down at"}</th>
            </tr>
            { for props.log.rows.iter().map(|e| {
                html! {<tr>
                    <td style={cell}>{ e.id }</td>
                    <td style={cell}>{ phase_label(e.phase) }</td>
                    <td style={cell}>{ e.lane }</td>
                    <td style={cell}>{ format!("{:.0}", e.distance) }</td>
                    <td style={cell}>{ flick_label(e.flick_direction) }</td>
                    <td style={cell}>{ format_millis(e.start_time) }</td>
                </tr>}
            }) }
        </table>
    </div>}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(id: i32) -> JudgeEvent {
        JudgeEvent {
            id,
            lane: 0,
            distance: 0.0,
            phase: Phase::Start,
            flick_direction: None,
            start_time: 0.0,
        }
    }

    #[test]
    fn log_keeps_newest_rows_and_counts_all() {
        let mut log = Rc::new(EventLog::default());
        for id in 0..20 {
            log = log.reduce(EventLogAction::Push(ev(id)));
        }
        assert_eq!(log.rows.len(), MAX_ROWS);
        assert_eq!(log.rows.front().map(|e| e.id), Some(19));
        assert_eq!(log.total, 20);
        let log = log.reduce(EventLogAction::Clear);
        assert!(log.rows.is_empty());
        assert_eq!(log.total, 20);
    }
}
