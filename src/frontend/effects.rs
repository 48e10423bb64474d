use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use anyhow::{anyhow, Result};
use gloo::events::EventListener;
use rand::{rngs::StdRng, SeedableRng};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Event, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use super::context::{use_language, use_settings};
use super::dom::{canvas_context, js_error, query_all, scroll_metrics, scroll_to_top, viewport_size, window};
use super::scheduler::{use_in_view, FrameLoop, TimerChain};
use crate::config::COUNTER_ROOT_MARGIN;
use crate::effects::counter::CountUp;
use crate::effects::cursor::{marker_classes, marker_style, CursorPosition, TrailBuffer, INTERACTIVE_SELECTOR};
use crate::effects::particles::ParticleField;
use crate::effects::scroll::{ring_dash_offset, ScrollMetrics, RING_CIRCUMFERENCE};
use crate::effects::typewriter::{Phase, Typewriter};

struct ParticleAnimation {
    _frames: FrameLoop,
    _resize: EventListener,
}

fn size_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

fn draw_field(context: &CanvasRenderingContext2d, field: &ParticleField) -> Result<()> {
    let (width, height) = field.size();
    context.clear_rect(0.0, 0.0, width, height);

    for dot in field.dots() {
        context.begin_path();
        context
            .arc(dot.x, dot.y, dot.radius, 0.0, TAU)
            .map_err(js_error)?;
        context.set_global_alpha(dot.alpha);
        context.set_fill_style_str(dot.color);
        context.fill();
    }

    context.set_global_alpha(1.0);
    Ok(())
}

fn start_particles(canvas_ref: &NodeRef, count: usize) -> Result<ParticleAnimation> {
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| anyhow!("particle canvas is not mounted"))?;
    let context = canvas_context(&canvas)?;

    let (width, height) = viewport_size();
    size_canvas(&canvas, width, height);
    let mut rng = StdRng::from_entropy();
    let field = Rc::new(RefCell::new(ParticleField::new(&mut rng, count, width, height)));

    let resize = {
        let field = field.clone();
        EventListener::new(&window()?, "resize", move |_| {
            let (width, height) = viewport_size();
            size_canvas(&canvas, width, height);
            field.borrow_mut().resize(width, height);
        })
    };

    let frames = FrameLoop::start(move |_| {
        let mut field = field.borrow_mut();
        field.step();
        match draw_field(&context, &field) {
            Ok(()) => true,
            Err(err) => {
                log::error!("stopping particle field: {err:#}");
                false
            }
        }
    });

    Ok(ParticleAnimation {
        _frames: frames,
        _resize: resize,
    })
}

/// Full-page aurora gradients with the particle canvas on top.
#[function_component(AuroraBackground)]
pub fn aurora_background() -> Html {
    let canvas_ref = use_node_ref();
    let settings = use_settings();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(settings.particle_count, move |&count| {
            let animation = start_particles(&canvas_ref, count);
            if let Err(err) = &animation {
                log::error!("particle field disabled: {err:#}");
            }
            move || drop(animation)
        });
    }

    html! {
        <div class="aurora" aria-hidden="true">
            <div class="aurora-layer aurora-layer-1"></div>
            <div class="aurora-layer aurora-layer-2"></div>
            <div class="aurora-layer aurora-layer-3"></div>
            <canvas ref={canvas_ref} class="particle-canvas"></canvas>
        </div>
    }
}

fn hover_listeners(hovering: &UseStateHandle<bool>) -> Vec<EventListener> {
    let elements = match query_all(INTERACTIVE_SELECTOR) {
        Ok(elements) => elements,
        Err(err) => {
            log::error!("cursor hover targets unavailable: {err:#}");
            return Vec::new();
        }
    };

    let mut listeners = Vec::with_capacity(elements.len() * 2);
    for element in elements {
        let enter = hovering.clone();
        listeners.push(EventListener::new(&element, "mouseenter", move |_| {
            enter.set(true)
        }));
        let leave = hovering.clone();
        listeners.push(EventListener::new(&element, "mouseleave", move |_| {
            leave.set(false)
        }));
    }
    listeners
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let settings = use_settings();
    let position = use_state(|| None::<CursorPosition>);
    let trail = use_state(|| None::<CursorPosition>);
    let hovering = use_state(|| false);

    {
        let position = position.clone();
        let trail = trail.clone();
        let hovering = hovering.clone();
        use_effect_with(settings.trail_delay_ms, move |&delay_ms| {
            let buffer = Rc::new(RefCell::new(TrailBuffer::new(delay_ms)));

            let mut listeners = hover_listeners(&hovering);
            match window() {
                Ok(win) => {
                    let buffer = buffer.clone();
                    listeners.push(EventListener::new(&win, "mousemove", move |event: &Event| {
                        let Some(event) = event.dyn_ref::<MouseEvent>() else {
                            return;
                        };
                        let at = CursorPosition::new(
                            f64::from(event.client_x()),
                            f64::from(event.client_y()),
                        );
                        buffer.borrow_mut().record(event.time_stamp(), at);
                        position.set(Some(at));
                    }));
                }
                Err(err) => log::error!("cursor tracking disabled: {err:#}"),
            }

            let frames = FrameLoop::start(move |now| {
                if let Some(next) = buffer.borrow_mut().due(now) {
                    trail.set(Some(next));
                }
                true
            });

            move || {
                drop(frames);
                drop(listeners);
            }
        });
    }

    let Some(current) = *position else {
        return Html::default();
    };
    let classes = marker_classes(*hovering);
    let trail_at = (*trail).unwrap_or(current);

    html! {
        <>
            <div
                class={classes!("cursor-dot", classes.primary.to_vec())}
                style={marker_style(current)}
                aria-hidden="true"
            ></div>
            <div
                class={classes!("cursor-trail", classes.trail.to_vec())}
                style={marker_style(trail_at)}
                aria-hidden="true"
            ></div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct TypewriterTextProps {
    pub words: Vec<AttrValue>,
}

#[derive(Clone, PartialEq, Default)]
struct TypedWord {
    text: String,
    color: &'static str,
    paused: bool,
}

impl TypedWord {
    fn of(machine: &Typewriter) -> Self {
        Self {
            text: machine.text(),
            color: machine.color_class(),
            paused: machine.phase() == Phase::Paused,
        }
    }
}

#[function_component(TypewriterText)]
pub fn typewriter_text(props: &TypewriterTextProps) -> Html {
    let settings = use_settings();
    let typed = use_state(TypedWord::default);

    {
        let typed = typed.clone();
        use_effect_with(
            (props.words.clone(), settings.typewriter),
            move |(words, timing)| {
                let words: Vec<&str> = words.iter().map(|word| word.as_str()).collect();
                let chain = Typewriter::new(&words, *timing).map(|mut machine| {
                    typed.set(TypedWord::of(&machine));
                    TimerChain::start(machine.first_delay_ms(), move || {
                        let delay = machine.tick();
                        typed.set(TypedWord::of(&machine));
                        Some(delay)
                    })
                });
                move || drop(chain)
            },
        );
    }

    html! {
        <span class={classes!("typewriter", typed.color)}>
            {typed.text.clone()}
            <span
                class={classes!("typewriter-caret", typed.paused.then_some("is-blinking"))}
                aria-hidden="true"
            >
                {"|"}
            </span>
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u32,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Number that counts up from zero once it scrolls into view.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let settings = use_settings();
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), COUNTER_ROOT_MARGIN);
    let value = use_state(|| 0_u32);

    {
        let value = value.clone();
        use_effect_with(
            (visible, props.target, settings.counter_duration_ms),
            move |&(visible, target, duration_ms)| {
                let frames = visible.then(|| {
                    let mut count = CountUp::new(target, duration_ms);
                    FrameLoop::start(move |now| {
                        count.start(now);
                        value.set(count.sample(now));
                        !count.is_finished()
                    })
                });
                move || drop(frames)
            },
        );
    }

    html! {
        <span ref={node} class="counter">
            {*value}{props.suffix.clone()}
        </span>
    }
}

/// Latest scroll position of the page, refreshed on every scroll event.
#[hook]
pub fn use_scroll_metrics() -> ScrollMetrics {
    let metrics = use_state(ScrollMetrics::default);

    {
        let metrics = metrics.clone();
        use_effect_with((), move |_| {
            let refresh = move || match scroll_metrics() {
                Ok(next) => metrics.set(next),
                Err(err) => log::error!("scroll metrics unavailable: {err:#}"),
            };
            refresh();

            let listener = match window() {
                Ok(win) => Some(EventListener::new(&win, "scroll", move |_| refresh())),
                Err(err) => {
                    log::error!("scroll tracking disabled: {err:#}");
                    None
                }
            };
            move || drop(listener)
        });
    }

    *metrics
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top_button() -> Html {
    let lang = use_language();
    let metrics = use_scroll_metrics();
    let progress = metrics.progress();

    let onclick = Callback::from(|_| {
        if let Err(err) = scroll_to_top() {
            log::error!("scroll to top failed: {err:#}");
        }
    });

    html! {
        <div class={classes!("scroll-top", metrics.shows_scroll_top().then_some("is-visible"))}>
            <span class="scroll-top-tooltip">
                {format!("{}: {:.0}%", lang.t("scroll.progress"), progress)}
            </span>
            <button
                class="scroll-top-button"
                type="button"
                aria-label={lang.t("scroll.backToTop")}
                {onclick}
            >
                <svg class="scroll-top-ring" viewBox="0 0 60 60" aria-hidden="true">
                    <circle class="ring-track" cx="30" cy="30" r="26" />
                    <circle
                        class="ring-progress"
                        cx="30"
                        cy="30"
                        r="26"
                        stroke-dasharray={RING_CIRCUMFERENCE.to_string()}
                        stroke-dashoffset={format!("{:.2}", ring_dash_offset(progress))}
                    />
                </svg>
                <span aria-hidden="true">{"↑"}</span>
            </button>
        </div>
    }
}
