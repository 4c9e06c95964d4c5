use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::config::CursorConfig;
use crate::dom::effects::EffectLayer;
use crate::dom::listener::EventListener;
use crate::dom::native_pointer::NativePointerGuard;
use crate::dom::runtime::{self, CursorRuntime, Overlay, SharedRuntime};
use crate::dom::timer::FrameLoop;
use crate::error::{CursorError, Result};
use crate::model::CursorLook;
use crate::state::PointerController;

#[derive(Properties, PartialEq, Clone)]
pub struct CustomCursorProps {
    #[prop_or_default]
    pub config: CursorConfig,
}

#[function_component(CustomCursor)]
pub fn custom_cursor(props: &CustomCursorProps) -> Html {
    let cursor_ref = use_node_ref();
    let particles_ref = use_node_ref();
    let config = use_memo(props.config.clone(), |c| c.clone().or_default_if_invalid());
    let trail_count = config.trail_count;
    let trail_refs = use_memo(trail_count, |n| {
        (0..*n).map(|_| NodeRef::default()).collect::<Vec<_>>()
    });
    let look = use_state(CursorLook::default);
    let coarse = use_memo((), |_| {
        crate::dom::window()
            .map(|w| crate::dom::prefers_coarse_pointer(&w))
            .unwrap_or(true)
    });

    {
        let cursor_ref = cursor_ref.clone();
        let particles_ref = particles_ref.clone();
        let trail_refs = trail_refs.clone();
        let look = look.clone();
        let coarse = *coarse;
        use_effect_with((*config).clone(), move |config| {
            let on_look = Callback::from(move |l: CursorLook| look.set(l));
            let refs = MountRefs {
                cursor: &cursor_ref,
                particles: &particles_ref,
                trail: &trail_refs,
            };
            let session = match Session::mount(config.clone(), coarse, refs, on_look) {
                Ok(s) => Some(s),
                Err(e) => {
                    tracing::warn!(error = %e, "custom cursor disabled");
                    None
                }
            };
            move || drop(session)
        });
    }

    if *coarse {
        return html! { <div ref={particles_ref} class="cursor-particles" /> };
    }

    let trail_visible = if look.visible { " active" } else { "" };
    html! {
        <>
            <div ref={cursor_ref} class={look.classes()} />
            <div ref={particles_ref} class="cursor-particles" />
            { for trail_refs.iter().enumerate().map(|(i, r)| {
                let opacity = (1.0 - i as f64 * 0.08).max(0.05);
                let size = (18.0 - i as f64).max(2.0);
                html! {
                    <div
                        ref={r.clone()}
                        class={format!("cursor-trail{trail_visible}")}
                        style={format!("opacity:{opacity}; width:{size}px; height:{size}px;")}
                    />
                }
            }) }
        </>
    }
}

struct MountRefs<'a> {
    cursor: &'a NodeRef,
    particles: &'a NodeRef,
    trail: &'a [NodeRef],
}

/// Everything one mount owns. Field order is drop order for the parts that
/// matter: listeners go first so no event reaches a half torn down runtime.
struct Session {
    listeners: Vec<EventListener>,
    frame: Rc<RefCell<Option<FrameLoop>>>,
    runtime: SharedRuntime,
    _pointer: Option<NativePointerGuard>,
}

impl Session {
    fn mount(
        config: CursorConfig,
        coarse: bool,
        refs: MountRefs<'_>,
        on_look: Callback<CursorLook>,
    ) -> Result<Self> {
        let window = crate::dom::window()?;
        let document = crate::dom::document()?;
        let body = crate::dom::body(&document)?;

        let layer = match refs.particles.cast::<HtmlElement>() {
            Some(container) => Some(EffectLayer::new(document.clone(), container)),
            None => {
                tracing::warn!("particle container missing; effects disabled");
                None
            }
        };
        let overlay = if coarse {
            None
        } else {
            let cursor = refs
                .cursor
                .cast::<HtmlElement>()
                .ok_or(CursorError::NotMounted("cursor"))?;
            let trail = refs
                .trail
                .iter()
                .filter_map(NodeRef::cast::<HtmlElement>)
                .collect();
            Some(Overlay { cursor, trail })
        };

        let runtime = CursorRuntime::new(
            PointerController::new(config),
            window.clone(),
            document.clone(),
            layer,
            overlay,
            on_look,
        );
        let frame: Rc<RefCell<Option<FrameLoop>>> = Rc::new(RefCell::new(None));
        let target: &web_sys::EventTarget = &document;
        let mut listeners = Vec::new();

        // Touch listeners run on both paths: taps drive the effect spawner.
        {
            let rt = runtime.clone();
            listeners.push(EventListener::new(target, "touchstart", move |e: TouchEvent| {
                rt.borrow_mut().touch_started(&e);
            })?);
        }
        {
            let rt = runtime.clone();
            listeners.push(EventListener::new(target, "touchmove", move |e: TouchEvent| {
                rt.borrow_mut().touch_moved(&e);
            })?);
        }
        {
            let rt = runtime.clone();
            listeners.push(EventListener::new(target, "touchend", move |e: TouchEvent| {
                rt.borrow_mut().touch_ended(&e);
                runtime::publish(&rt);
            })?);
        }
        {
            let rt = runtime.clone();
            listeners.push(EventListener::new(target, "touchcancel", move |_e: TouchEvent| {
                rt.borrow_mut().touch_cancelled();
            })?);
        }

        if coarse {
            tracing::info!("coarse pointer: tap effects only");
            return Ok(Self {
                listeners,
                frame,
                runtime,
                _pointer: None,
            });
        }

        let pointer = NativePointerGuard::hide(&body)?;
        {
            let rt = runtime.clone();
            let frame = frame.clone();
            let window = window.clone();
            listeners.push(EventListener::new(target, "mousemove", move |e: MouseEvent| {
                let first = rt.borrow_mut().mouse_moved(&e);
                if first && frame.borrow().is_none() {
                    let rt_frame = rt.clone();
                    match FrameLoop::start(&window, move || rt_frame.borrow_mut().frame()) {
                        Ok(l) => *frame.borrow_mut() = Some(l),
                        Err(e) => tracing::warn!(error = %e, "animation frame loop not started"),
                    }
                }
                runtime::publish(&rt);
            })?);
        }
        {
            let rt = runtime.clone();
            listeners.push(EventListener::new(target, "mouseover", move |e: MouseEvent| {
                rt.borrow_mut().mouse_over(&e);
                runtime::publish(&rt);
            })?);
        }
        {
            let rt = runtime.clone();
            listeners.push(EventListener::new(target, "mousedown", move |e: MouseEvent| {
                rt.borrow_mut().mouse_down(&e);
                runtime::publish(&rt);
            })?);
        }
        {
            let rt = runtime.clone();
            listeners.push(EventListener::new(target, "mouseup", move |_e: MouseEvent| {
                rt.borrow_mut().mouse_up();
                runtime::publish(&rt);
            })?);
        }
        if let Some(root) = document.document_element() {
            let root: &web_sys::EventTarget = &root;
            {
                let rt = runtime.clone();
                listeners.push(EventListener::new(root, "mouseleave", move |_e: MouseEvent| {
                    rt.borrow_mut().left_document();
                    runtime::publish(&rt);
                })?);
            }
            {
                let rt = runtime.clone();
                listeners.push(EventListener::new(root, "mouseenter", move |_e: MouseEvent| {
                    rt.borrow_mut().entered_document();
                    runtime::publish(&rt);
                })?);
            }
        }

        tracing::info!("fine pointer: custom cursor mounted");
        Ok(Self {
            listeners,
            frame,
            runtime,
            _pointer: Some(pointer),
        })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.listeners.clear();
        self.frame.borrow_mut().take();
        self.runtime.borrow_mut().teardown();
    }
}
