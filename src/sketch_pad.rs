use yew::prelude::*;
use gloo::dialogs::alert;
use gloo::events::EventListener;
use web_sys::{Event, HtmlCanvasElement, HtmlInputElement, MouseEvent};

use crate::assist;
use crate::bitmap;
use crate::config;
use crate::inference::{self, InferenceError};
use crate::output_panel::OutputPanel;
use crate::stroke::StrokeTracker;
use crate::submission::Submission;
use crate::surface::DrawingSurface;
use crate::tool_panel::ToolPanel;
use crate::types::{BrushSize, IterationCount};
use crate::utils::client_to_canvas_coords;

const CANVAS_WIDTH: u32 = 512;
const CANVAS_HEIGHT: u32 = 512;
const DEFAULT_COLOR: &str = "#000000";

#[function_component(SketchPad)]
pub fn sketch_pad() -> Html {
    // State
    let canvas_ref = use_node_ref();
    let file_input_ref = use_node_ref();
    let surface = use_state(|| None::<DrawingSurface>);
    let stroke = use_mut_ref(StrokeTracker::new);
    let color = use_state(|| DEFAULT_COLOR.to_string());
    let brush = use_state(BrushSize::default);
    let prompt = use_state(String::new);
    let iterations = use_state(IterationCount::default);
    let uploaded = use_state(|| None::<web_sys::HtmlImageElement>);
    let submission = use_state(Submission::new);
    let assisting = use_state(|| false);

    // Attach the drawing surface once the canvas is mounted and blank it
    {
        let canvas_ref = canvas_ref.clone();
        let surface = surface.clone();
        use_effect_with((), move |_| {
            let canvas = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas not mounted");
            let attached = DrawingSurface::attach(canvas).expect("no 2d canvas context");
            attached.fill_blank();
            surface.set(Some(attached));
            || ()
        });
    }

    // End strokes even when the mouse is released outside the canvas
    {
        let stroke = stroke.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no window");
            let listener = EventListener::new(&window, "mouseup", move |_event| {
                stroke.borrow_mut().end();
            });
            move || drop(listener)
        });
    }

    // Freehand drawing
    let on_canvas_mousedown = {
        let canvas_ref = canvas_ref.clone();
        let stroke = stroke.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                let point = client_to_canvas_coords(&e, &canvas);
                stroke.borrow_mut().begin(point);
            }
        })
    };

    let on_canvas_mousemove = {
        let canvas_ref = canvas_ref.clone();
        let stroke = stroke.clone();
        let surface = surface.clone();
        let color = color.clone();
        let brush = brush.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let point = client_to_canvas_coords(&e, &canvas);
            if let Some(segment) = stroke.borrow_mut().extend(point) {
                if let Some(surface) = (*surface).as_ref() {
                    surface.stroke_segment(&segment, color.as_str(), brush.width());
                }
            }
        })
    };

    let on_canvas_mouseup = {
        let stroke = stroke.clone();
        Callback::from(move |_: MouseEvent| {
            stroke.borrow_mut().end();
        })
    };

    let on_canvas_mouseleave = {
        let stroke = stroke.clone();
        Callback::from(move |_: MouseEvent| {
            stroke.borrow_mut().end();
        })
    };

    // Image upload: decode the picked file, render it scaled, retain it
    let on_upload = {
        let surface = surface.clone();
        let uploaded = uploaded.clone();
        Callback::from(move |e: Event| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let Some(surface) = (*surface).clone() else {
                return;
            };

            let uploaded = uploaded.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let url = match bitmap::object_url_from_blob(&file) {
                    Ok(url) => url,
                    Err(err) => {
                        log::error!("upload failed: {err}");
                        return;
                    }
                };

                match bitmap::load_bitmap(&url).await {
                    Ok(image) => {
                        if let Err(err) = surface.render_bitmap(&image) {
                            log::error!("upload render failed: {err}");
                        } else {
                            log::info!(
                                "uploaded image rendered ({}x{})",
                                image.natural_width(),
                                image.natural_height()
                            );
                            uploaded.set(Some(image));
                        }
                    }
                    Err(err) => {
                        log::error!("upload decode failed: {err}");
                        alert("Failed to load the selected image.");
                    }
                }
                bitmap::revoke_object_url(&url);
            });
        })
    };

    // Blank the buffer, keeping a retained upload as the base layer
    let on_clear = {
        let surface = surface.clone();
        let uploaded = uploaded.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(surface) = (*surface).as_ref() {
                if let Err(err) = surface.clear((*uploaded).as_ref(), true) {
                    log::error!("clear failed: {err}");
                }
            }
        })
    };

    // Drop the retained upload, reset the picker, blank the buffer
    let on_clear_upload = {
        let surface = surface.clone();
        let uploaded = uploaded.clone();
        let file_input_ref = file_input_ref.clone();
        Callback::from(move |_: MouseEvent| {
            uploaded.set(None);
            if let Some(input) = file_input_ref.cast::<HtmlInputElement>() {
                input.set_value("");
            }
            if let Some(surface) = (*surface).as_ref() {
                if let Err(err) = surface.clear(None, false) {
                    log::error!("clear failed: {err}");
                }
            }
        })
    };

    // Submit the buffer: one request in flight, guarded by the flow state
    let on_submit = {
        let surface = surface.clone();
        let prompt = prompt.clone();
        let iterations = iterations.clone();
        let submission = submission.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(surface) = (*surface).clone() else {
                return;
            };

            let mut flow = (*submission).clone();
            if !flow.try_begin(&prompt) {
                return;
            }
            submission.set(flow.clone());

            let prompt_text = (*prompt).clone();
            let passes = *iterations;
            let submission = submission.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = async {
                    let png = surface.to_png().await.map_err(InferenceError::Network)?;
                    let bytes = inference::generate_image(&png, &prompt_text, passes).await?;
                    bitmap::object_url_from_bytes(&bytes, "image/png")
                        .map_err(InferenceError::Network)
                }
                .await;

                match result {
                    Ok(url) => {
                        if let Some(stale) = flow.succeed(url) {
                            bitmap::revoke_object_url(&stale);
                        }
                        log::info!("generated image ready");
                    }
                    Err(err) => {
                        flow.fail();
                        log::error!("generation failed: {err}");
                        alert("Failed to generate image. Please try again.");
                    }
                }
                submission.set(flow);
            });
        })
    };

    // Replace the prompt with an extended version from the completion service
    let on_assist = {
        let prompt = prompt.clone();
        let assisting = assisting.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(credential) = config::assist_credential() else {
                return;
            };
            if *assisting {
                return;
            }
            assisting.set(true);

            let text = (*prompt).clone();
            let prompt = prompt.clone();
            let assisting = assisting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match assist::autocomplete(&text, credential).await {
                    Ok(extended) => {
                        prompt.set(extended);
                    }
                    Err(err) => {
                        log::error!("prompt assist failed: {err}");
                        alert("Failed to extend the prompt. Please try again.");
                    }
                }
                assisting.set(false);
            });
        })
    };

    let on_color_change = {
        let color = color.clone();
        Callback::from(move |value: String| color.set(value))
    };

    let on_brush_change = {
        let brush = brush.clone();
        Callback::from(move |size: BrushSize| brush.set(size))
    };

    let on_prompt_change = {
        let prompt = prompt.clone();
        Callback::from(move |value: String| prompt.set(value))
    };

    let on_iterations_change = {
        let iterations = iterations.clone();
        Callback::from(move |count: IterationCount| iterations.set(count))
    };

    html! {
        <div class="flex flex-col items-center p-4">
            <canvas
                ref={canvas_ref}
                width={CANVAS_WIDTH.to_string()}
                height={CANVAS_HEIGHT.to_string()}
                onmousedown={on_canvas_mousedown}
                onmousemove={on_canvas_mousemove}
                onmouseup={on_canvas_mouseup}
                onmouseleave={on_canvas_mouseleave}
                class="border border-gray-300 bg-white"
                style="cursor: crosshair;"
            />

            <ToolPanel
                color={(*color).clone()}
                brush={*brush}
                prompt={(*prompt).clone()}
                iterations={*iterations}
                submitting={submission.is_submitting()}
                assisting={*assisting}
                assist_available={config::assist_credential().is_some()}
                file_input_ref={file_input_ref.clone()}
                {on_upload}
                {on_color_change}
                {on_brush_change}
                {on_prompt_change}
                {on_iterations_change}
                {on_clear}
                {on_clear_upload}
                {on_assist}
                {on_submit}
            />

            <OutputPanel generated_url={submission.generated_url().map(String::from)} />
        </div>
    }
}
