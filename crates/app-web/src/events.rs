use std::cell::{Cell, RefCell};
use std::rc::Rc;

use app_core::{GestureEvent, Scene};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;
use crate::gesture::{normalize_wheel, pinch_distance, PointerTrack};

/// A DOM listener with scoped release: dropping the hook detaches the
/// callback, so scene teardown cannot leave listeners behind.
pub struct ListenerHook {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl ListenerHook {
    pub fn attach(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            closure,
        }
    }
}

impl Drop for ListenerHook {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
}

/// Wire pointer, touch and wheel input into scene gestures.
///
/// One-finger / mouse drag orbits, two-finger pinch and wheel dolly; there is
/// no pan gesture.
pub fn wire_input_handlers(w: &InputWiring) -> Vec<ListenerHook> {
    let track = Rc::new(RefCell::new(PointerTrack::default()));
    let pinch: Rc<Cell<Option<f32>>> = Rc::new(Cell::new(None));
    let mut hooks = Vec::new();

    {
        let scene = w.scene.clone();
        let track = track.clone();
        let canvas = w.canvas.clone();
        hooks.push(ListenerHook::attach(&w.canvas, "pointerdown", move |ev| {
            let ev: web::PointerEvent = ev.unchecked_into();
            track
                .borrow_mut()
                .begin(ev.client_x() as f32, ev.client_y() as f32);
            scene.borrow_mut().gesture(GestureEvent::Start);
            let _ = canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }));
    }

    {
        let scene = w.scene.clone();
        let track = track.clone();
        hooks.push(ListenerHook::attach(&w.canvas, "pointermove", move |ev| {
            let ev: web::PointerEvent = ev.unchecked_into();
            let mut track = track.borrow_mut();
            if track.down {
                let (dx, dy) = track.delta_to(ev.client_x() as f32, ev.client_y() as f32);
                scene.borrow_mut().gesture(GestureEvent::Move { dx, dy });
            }
        }));
    }

    {
        let scene = w.scene.clone();
        let track = track.clone();
        hooks.push(ListenerHook::attach(&w.canvas, "pointerup", move |ev| {
            let ev: web::PointerEvent = ev.unchecked_into();
            let mut track = track.borrow_mut();
            if track.down {
                track.finish();
                scene.borrow_mut().gesture(GestureEvent::End);
            }
            ev.prevent_default();
        }));
    }

    {
        let scene = w.scene.clone();
        hooks.push(ListenerHook::attach(&w.canvas, "wheel", move |ev| {
            let ev: web::WheelEvent = ev.unchecked_into();
            let delta = normalize_wheel(ev.delta_y(), ev.delta_mode());
            scene.borrow_mut().gesture(GestureEvent::Dolly { delta });
            ev.prevent_default();
        }));
    }

    {
        let scene = w.scene.clone();
        let track = track.clone();
        let pinch = pinch.clone();
        hooks.push(ListenerHook::attach(&w.canvas, "touchstart", move |ev| {
            let ev: web::TouchEvent = ev.unchecked_into();
            let touches = ev.touches();
            match touches.length() {
                1 => {
                    if let Some(t) = touches.get(0) {
                        track
                            .borrow_mut()
                            .begin(t.client_x() as f32, t.client_y() as f32);
                        scene.borrow_mut().gesture(GestureEvent::Start);
                    }
                }
                2 => {
                    // a second finger turns the drag into a pinch
                    let mut track = track.borrow_mut();
                    if track.down {
                        track.finish();
                        scene.borrow_mut().gesture(GestureEvent::End);
                    }
                    if let (Some(a), Some(b)) = (touches.get(0), touches.get(1)) {
                        pinch.set(Some(pinch_distance(
                            a.client_x() as f32,
                            a.client_y() as f32,
                            b.client_x() as f32,
                            b.client_y() as f32,
                        )));
                    }
                }
                _ => {}
            }
            ev.prevent_default();
        }));
    }

    {
        let scene = w.scene.clone();
        let track = track.clone();
        let pinch = pinch.clone();
        hooks.push(ListenerHook::attach(&w.canvas, "touchmove", move |ev| {
            let ev: web::TouchEvent = ev.unchecked_into();
            let touches = ev.touches();
            if touches.length() == 2 {
                if let (Some(a), Some(b)) = (touches.get(0), touches.get(1)) {
                    let d = pinch_distance(
                        a.client_x() as f32,
                        a.client_y() as f32,
                        b.client_x() as f32,
                        b.client_y() as f32,
                    );
                    if let Some(prev) = pinch.get() {
                        scene
                            .borrow_mut()
                            .gesture(GestureEvent::Dolly { delta: prev - d });
                    }
                    pinch.set(Some(d));
                }
            } else if touches.length() == 1 {
                let mut track = track.borrow_mut();
                if track.down {
                    if let Some(t) = touches.get(0) {
                        let (dx, dy) = track.delta_to(t.client_x() as f32, t.client_y() as f32);
                        scene.borrow_mut().gesture(GestureEvent::Move { dx, dy });
                    }
                }
            }
            ev.prevent_default();
        }));
    }

    {
        let scene = w.scene.clone();
        let track = track.clone();
        let pinch = pinch.clone();
        hooks.push(ListenerHook::attach(&w.canvas, "touchend", move |ev| {
            let ev: web::TouchEvent = ev.unchecked_into();
            let touches = ev.touches();
            match touches.length() {
                0 => {
                    pinch.set(None);
                    let mut track = track.borrow_mut();
                    if track.down {
                        track.finish();
                        scene.borrow_mut().gesture(GestureEvent::End);
                    }
                }
                1 => {
                    // pinch collapsed back to a single finger: resume dragging
                    pinch.set(None);
                    if let Some(t) = touches.get(0) {
                        let mut track = track.borrow_mut();
                        let was_down = track.down;
                        track.begin(t.client_x() as f32, t.client_y() as f32);
                        if !was_down {
                            scene.borrow_mut().gesture(GestureEvent::Start);
                        }
                    }
                }
                _ => {}
            }
        }));
    }

    hooks
}

/// Keep the canvas backing store and the device classifier in sync with the
/// viewport.
pub fn wire_viewport_resize(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
) -> ListenerHook {
    ListenerHook::attach(window, "resize", move |_ev| {
        dom::sync_canvas_backing_size(&canvas);
        if let Some(w) = web::window() {
            if let Some(width) = dom::viewport_width(&w) {
                scene.borrow_mut().submit_viewport_width(width);
            }
        }
    })
}

/// Tear the scene down when the page goes away: stop the frame loop, silence
/// the scene, and detach every scene-scoped listener.
pub fn wire_teardown(
    window: &web::Window,
    scene: Rc<RefCell<Scene>>,
    active: Rc<Cell<bool>>,
    hooks: Rc<RefCell<Vec<ListenerHook>>>,
) {
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        active.set(false);
        scene.borrow_mut().teardown();
        hooks.borrow_mut().clear();
    }) as Box<dyn FnMut(_)>);
    let _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    // page-lifetime listener, never detached
    closure.forget();
}
