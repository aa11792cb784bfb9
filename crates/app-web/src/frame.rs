use std::cell::{Cell, RefCell};
use std::rc::Rc;

use app_core::Scene;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::{hud, render};

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: render::GpuState,
    pub last_instant: Instant,
    // last (balance, pnl) pushed into the HUD labels
    pub shown: Option<(f64, f64)>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let scene = &mut *self.scene.borrow_mut();
        scene.tick(dt);

        let snapshot = *scene.snapshot();
        if self.shown != Some((snapshot.balance, snapshot.pnl)) {
            hud::update(&self.document, &snapshot);
            self.shown = Some((snapshot.balance, snapshot.pnl));
        }

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        if let Err(e) = self.gpu.render(scene) {
            // skip this frame; the surface reconfigures on the next resize
            log::error!("render error: {:?}", e);
        }
    }
}

/// Drive the frame loop from requestAnimationFrame until `active` clears.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, active: Rc<Cell<bool>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    let active_tick = active.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !active_tick.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            let _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        let _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
