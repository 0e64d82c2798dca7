use crate::AppRef;
use engine::controls::{Controls, MAX_TESSELATIONS, SHADER_COUNT};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Document, Element, HtmlInputElement};

const PANEL_STYLE: &str = "position: absolute; right: 0px; top: 0px; width: 260px; \
    padding: 6px; font: 11px sans-serif; color: #eee; background: #1a1a1a; \
    display: flex; flex-direction: column; gap: 4px;";

/// Builds the debug panel. Every widget writes straight into the app's
/// [`Controls`]; the frame loop picks the values up on its next tick.
pub fn build(document: &Document, app: &AppRef) -> Result<(), JsValue> {
    let panel = document.create_element("div")?;
    panel.set_id("gui");
    panel.set_attribute("style", PANEL_STYLE)?;
    document
        .body()
        .ok_or("document has no body")?
        .append_child(&panel)?;

    let defaults = Controls::default();

    let app_clone = app.clone();
    slider(
        document,
        &panel,
        "tesselations",
        (0.0, MAX_TESSELATIONS as f64, 1.0),
        defaults.tesselations as f64,
        move |v| app_clone.borrow_mut().controls_mut().tesselations = v as u32,
    )?;

    let app_clone = app.clone();
    button(document, &panel, "Load Scene", move || {
        if let Err(e) = app_clone.borrow_mut().load_scene() {
            log::error!("failed to load scene: {}", e);
        }
    })?;

    let app_clone = app.clone();
    color_picker(document, &panel, "Color", &defaults.color_hex(), move |hex| {
        if !app_clone.borrow_mut().controls_mut().set_color_hex(&hex) {
            log::warn!("ignoring malformed color '{}'", hex);
        }
    })?;

    let app_clone = app.clone();
    slider(
        document,
        &panel,
        "Shader",
        (0.0, SHADER_COUNT as f64, 1.0),
        defaults.shader as f64,
        move |v| app_clone.borrow_mut().controls_mut().shader = v as u32,
    )?;

    let app_clone = app.clone();
    slider(
        document,
        &panel,
        "noise input",
        (0.0, 10.0, 0.1),
        defaults.noise_input as f64,
        move |v| app_clone.borrow_mut().controls_mut().noise_input = v as f32,
    )?;

    let app_clone = app.clone();
    slider(
        document,
        &panel,
        "animation speed",
        (0.0, 5.0, 0.1),
        defaults.animation_speed as f64,
        move |v| app_clone.borrow_mut().controls_mut().animation_speed = v as f32,
    )?;

    for axis in 0..3 {
        let app_clone = app.clone();
        slider(
            document,
            &panel,
            ["rotation x", "rotation y", "rotation z"][axis],
            (0.0, 360.0, 1.0),
            defaults.rotation[axis] as f64,
            move |v| app_clone.borrow_mut().controls_mut().rotation[axis] = v as f32,
        )?;
    }

    Ok(())
}

fn row(document: &Document, panel: &Element, label: &str) -> Result<Element, JsValue> {
    let row = document.create_element("label")?;
    row.set_attribute("style", "display: flex; gap: 6px; align-items: center;")?;

    let text = document.create_element("span")?;
    text.set_attribute("style", "flex: 0 0 100px;")?;
    text.set_text_content(Some(label));
    row.append_child(&text)?;

    panel.append_child(&row)?;
    Ok(row)
}

fn input(document: &Document, kind: &str) -> Result<HtmlInputElement, JsValue> {
    let input = document
        .create_element("input")?
        .dyn_into::<HtmlInputElement>()?;
    input.set_type(kind);
    Ok(input)
}

fn on_input(
    input: &HtmlInputElement,
    mut f: impl FnMut(&HtmlInputElement) + 'static,
) -> Result<(), JsValue> {
    let input_clone = input.clone();
    let on_event = Closure::<dyn FnMut(_)>::new(move |_: web_sys::Event| f(&input_clone));
    input.add_event_listener_with_callback("input", on_event.as_ref().unchecked_ref())?;
    on_event.forget();
    Ok(())
}

fn slider(
    document: &Document,
    panel: &Element,
    label: &str,
    (min, max, step): (f64, f64, f64),
    value: f64,
    mut on_change: impl FnMut(f64) + 'static,
) -> Result<(), JsValue> {
    let row = row(document, panel, label)?;

    let input = input(document, "range")?;
    input.set_min(&min.to_string());
    input.set_max(&max.to_string());
    input.set_step(&step.to_string());
    input.set_value(&value.to_string());
    row.append_child(&input)?;

    let readout = document.create_element("span")?;
    readout.set_text_content(Some(&value.to_string()));
    row.append_child(&readout)?;

    on_input(&input, move |input| {
        let v = input.value_as_number();
        readout.set_text_content(Some(&v.to_string()));
        on_change(v);
    })
}

fn color_picker(
    document: &Document,
    panel: &Element,
    label: &str,
    value: &str,
    mut on_change: impl FnMut(String) + 'static,
) -> Result<(), JsValue> {
    let row = row(document, panel, label)?;

    let input = input(document, "color")?;
    input.set_value(value);
    row.append_child(&input)?;

    on_input(&input, move |input| on_change(input.value()))
}

fn button(
    document: &Document,
    panel: &Element,
    label: &str,
    mut on_click: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let button = document.create_element("button")?;
    button.set_text_content(Some(label));
    panel.append_child(&button)?;

    let on_event = Closure::<dyn FnMut(_)>::new(move |_: web_sys::Event| on_click());
    button.add_event_listener_with_callback("click", on_event.as_ref().unchecked_ref())?;
    on_event.forget();
    Ok(())
}
