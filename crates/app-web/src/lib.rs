#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use app_core::{FinancialSnapshot, PositionSide, Scene};
use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod feed;
mod frame;
mod gesture;
mod hud;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("app-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// The snapshot the mocked feed reports at startup.
fn bootstrap_snapshot() -> FinancialSnapshot {
    FinancialSnapshot {
        balance: 4992.76,
        pnl: 0.65,
        position_side: PositionSide::Long,
        position_size: 0.01,
        entry_price: 43250.0,
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("scene-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #scene-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let scene = Rc::new(RefCell::new(Scene::new(js_sys::Date::now() as u64)));
    {
        let mut scene = scene.borrow_mut();
        // measure before the first layout decision; Desktop until then
        if let Some(width) = dom::viewport_width(&window) {
            scene.submit_viewport_width(width);
        }
        let _ = scene.submit_snapshot(bootstrap_snapshot());
    }

    feed::render_widgets(&document);

    // WebGPU init failure is fatal; the shell shows the console error
    let gpu = render::GpuState::new(&canvas).await?;

    let active = Rc::new(Cell::new(true));
    let hooks = Rc::new(RefCell::new(Vec::new()));
    hooks
        .borrow_mut()
        .extend(events::wire_input_handlers(&events::InputWiring {
            canvas: canvas.clone(),
            scene: scene.clone(),
        }));
    hooks.borrow_mut().push(events::wire_viewport_resize(
        &window,
        canvas.clone(),
        scene.clone(),
    ));
    events::wire_teardown(&window, scene.clone(), active.clone(), hooks.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        document,
        gpu,
        last_instant: Instant::now(),
        shown: None,
    }));
    frame::start_loop(frame_ctx, active);

    Ok(())
}
