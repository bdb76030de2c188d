use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use ring_touch::input::{TouchBindings, playfield_of};
use ring_touch::model::{JudgeEvent, Playfield};
use ring_touch::state::TouchTracker;
use ring_touch::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct PlayfieldViewProps {
    pub on_judge: Callback<JudgeEvent>,
}

#[function_component(PlayfieldView)]
pub fn playfield_view(props: &PlayfieldViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let tracker = use_mut_ref(|| TouchTracker::new(Playfield::new(0.0, 0.0)));

    {
        let canvas_ref = canvas_ref.clone();
        let tracker = tracker.clone();
        let on_judge = props.on_judge.clone();

        use_effect_with((), move |_| {
            let window = web_sys::window();
            let canvas = canvas_ref.cast::<HtmlCanvasElement>();

            let compute_and_apply_canvas_size = {
                let canvas = canvas.clone();
                let window = window.clone();
                let tracker = tracker.clone();
                move || {
                    let (Some(canvas), Some(window)) = (&canvas, &window) else {
                        return;
                    };
                    let width = window
                        .inner_width()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(800.0);
                    let height = window
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(600.0);
                    canvas.set_width(width.max(0.0) as u32);
                    canvas.set_height(height.max(0.0) as u32);
                    tracker.borrow_mut().resize(playfield_of(canvas));
                }
            };
            compute_and_apply_canvas_size();

            tracker
                .borrow_mut()
                .register_judge(move |ev: &JudgeEvent| on_judge.emit(ev.clone()));

            let bindings = match &canvas {
                Some(canvas) => match TouchBindings::attach(canvas, tracker.clone()) {
                    Ok(b) => Some(b),
                    Err(err) => {
                        log::error!("failed to attach touch listeners: {err:?}");
                        None
                    }
                },
                None => {
                    clog("playfield canvas not mounted");
                    None
                }
            };

            let resize_cb = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                compute_and_apply_canvas_size();
            }) as Box<dyn FnMut(_)>);
            if let Some(window) = &window {
                if let Err(err) = window
                    .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                {
                    log::warn!("resize listener not attached: {err:?}");
                }
            }

            // Cleanup
            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        resize_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(bindings);
                tracker.borrow_mut().clear_judge();
            }
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            style="display:block; touch-action:none; background:radial-gradient(circle, #161b22 0%, #0e1116 70%);"
        />
    }
}
