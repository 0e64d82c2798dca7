use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Performance};

const UPDATE_INTERVAL_MS: f64 = 1000.0;

/// Frame rate overlay in the top-left corner.
#[derive(Debug)]
pub struct Stats {
    element: HtmlElement,
    performance: Performance,

    frames: u32,
    window_start: f64,
    min_fps: f64,
    max_fps: f64,
}

impl Stats {
    pub fn new(document: &Document, performance: Performance) -> Result<Self, JsValue> {
        let element = document.create_element("div")?;
        element.set_id("stats");
        element.set_attribute(
            "style",
            "position: absolute; left: 0px; top: 0px; padding: 2px 6px; \
             font: bold 11px monospace; color: #0ff; background: #002;",
        )?;
        element.set_text_content(Some("-- FPS"));

        let body = document.body().ok_or("document has no body")?;
        body.append_child(&element)?;

        let now = performance.now();
        Ok(Self {
            element: element.dyn_into::<HtmlElement>()?,
            performance,
            frames: 0,
            window_start: now,
            min_fps: f64::INFINITY,
            max_fps: 0.0,
        })
    }

    /// Counts a rendered frame and refreshes the readout once per interval.
    pub fn end_frame(&mut self) {
        self.frames += 1;

        let now = self.performance.now();
        let elapsed = now - self.window_start;
        if elapsed < UPDATE_INTERVAL_MS {
            return;
        }

        let fps = (self.frames as f64 * 1000.0 / elapsed).round();
        self.min_fps = self.min_fps.min(fps);
        self.max_fps = self.max_fps.max(fps);
        self.element.set_text_content(Some(&format!(
            "{} FPS ({}-{})",
            fps, self.min_fps, self.max_fps
        )));

        self.frames = 0;
        self.window_start = now;
    }
}
