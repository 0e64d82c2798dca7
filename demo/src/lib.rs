use engine::{App, RenderContext};
use std::{cell::RefCell, rc::Rc};
use wasm_bindgen::prelude::*;

mod gui;
mod shaders;
mod stats;
use stats::Stats;

pub(crate) type AppRef = Rc<RefCell<App<glow::Context>>>;

#[wasm_bindgen]
extern "C" {
    fn alert(s: &str);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        alert(&format!("cannot initialize logging: {}", e));
    }

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let performance = window.performance().ok_or("no performance timer")?;

    let mut stats = Stats::new(&document, performance)?;

    let canvas = document
        .get_element_by_id("canvas")
        .ok_or("missing #canvas element")?
        .dyn_into::<web_sys::HtmlCanvasElement>()?;

    let (width, height) = window_size(&window)?;
    canvas.set_width(width);
    canvas.set_height(height);

    let webgl2_context = match canvas.get_context("webgl2")? {
        Some(context) => context.dyn_into::<web_sys::WebGl2RenderingContext>()?,
        None => {
            alert("WebGL 2 not supported!");
            return Ok(());
        }
    };

    let ctx = RenderContext::new(glow::Context::from_webgl2_context(webgl2_context));
    let shaders = shaders::load_all(&ctx).map_err(to_js)?;
    let app: AppRef = Rc::new(RefCell::new(
        App::new(ctx, shaders, width, height).map_err(to_js)?,
    ));

    gui::build(&document, &app)?;

    let main_loop = Rc::new(RefCell::new(None));

    // --- main loop ---
    {
        let app_clone = app.clone();
        let main_loop_clone = main_loop.clone();
        *main_loop.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Err(e) = app_clone.borrow_mut().frame() {
                log::error!("frame failed: {}", e);
            }
            stats.end_frame();

            if let Some(main_loop) = main_loop_clone.borrow().as_ref() {
                request_animation_frame(main_loop);
            }
        }) as Box<dyn FnMut()>));
    }

    macro_rules! add_event_listener {
        ($target:expr, $event:literal, $evt_type:ty, $f:expr) => {
            let app_clone = app.clone();
            let on_event = Closure::<dyn FnMut(_)>::new(move |e: $evt_type| {
                $f(&app_clone, e);
            });

            $target.add_event_listener_with_callback($event, on_event.as_ref().unchecked_ref())?;

            on_event.forget();
        };
    }

    // --- resize ---
    let canvas_clone = canvas.clone();
    let window_clone = window.clone();
    add_event_listener!(window, "resize", web_sys::Event, |app: &AppRef, _| {
        match window_size(&window_clone) {
            Ok((width, height)) => {
                canvas_clone.set_width(width);
                canvas_clone.set_height(height);
                app.borrow_mut().resize(width, height);
            }
            Err(e) => log::warn!("cannot read window size: {:?}", e),
        }
    });

    // --- camera ---
    add_event_listener!(
        canvas,
        "mousemove",
        web_sys::MouseEvent,
        |app: &AppRef, e: web_sys::MouseEvent| {
            if e.buttons() & 1 != 0 {
                app.borrow_mut()
                    .camera_mut()
                    .orbit(e.movement_x() as f32 * 0.5, e.movement_y() as f32 * 0.5);
            }
        }
    );
    add_event_listener!(
        canvas,
        "wheel",
        web_sys::WheelEvent,
        |app: &AppRef, e: web_sys::WheelEvent| {
            e.prevent_default();
            let factor = (1.0 + e.delta_y() * 0.001).clamp(0.5, 2.0);
            app.borrow_mut().camera_mut().zoom(factor as f32);
        }
    );

    if let Some(main_loop) = main_loop.borrow().as_ref() {
        request_animation_frame(main_loop);
    }

    Ok(())
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn window_size(window: &web_sys::Window) -> Result<(u32, u32), JsValue> {
    let width = window.inner_width()?.as_f64().ok_or("innerWidth is not a number")?;
    let height = window.inner_height()?.as_f64().ok_or("innerHeight is not a number")?;
    Ok((width as u32, height.max(1.0) as u32))
}

fn request_animation_frame(f: &Closure<dyn FnMut()>) {
    let requested = web_sys::window()
        .map(|window| window.request_animation_frame(f.as_ref().unchecked_ref()));
    if !matches!(requested, Some(Ok(_))) {
        log::error!("cannot request animation frame");
    }
}
