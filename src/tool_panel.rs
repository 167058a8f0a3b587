use yew::prelude::*;
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, MouseEvent};

use crate::types::{BrushSize, IterationCount};

#[derive(Properties, PartialEq)]
pub struct ToolPanelProps {
    pub color: String,
    pub brush: BrushSize,
    pub prompt: String,
    pub iterations: IterationCount,
    pub submitting: bool,
    pub assisting: bool,
    pub assist_available: bool,
    pub file_input_ref: NodeRef,
    pub on_upload: Callback<Event>,
    pub on_color_change: Callback<String>,
    pub on_brush_change: Callback<BrushSize>,
    pub on_prompt_change: Callback<String>,
    pub on_iterations_change: Callback<IterationCount>,
    pub on_clear: Callback<MouseEvent>,
    pub on_clear_upload: Callback<MouseEvent>,
    pub on_assist: Callback<MouseEvent>,
    pub on_submit: Callback<MouseEvent>,
}

#[function_component(ToolPanel)]
pub fn tool_panel(props: &ToolPanelProps) -> Html {
    let on_color_input = {
        let on_change = props.on_color_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    let on_brush_select = {
        let on_change = props.on_brush_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(size) = BrushSize::from_value(&select.value()) {
                    on_change.emit(size);
                }
            }
        })
    };

    let on_prompt_input = {
        let on_change = props.on_prompt_change.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.value());
            }
        })
    };

    let on_iterations_select = {
        let on_change = props.on_iterations_change.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                if let Some(count) = IterationCount::from_value(&select.value()) {
                    on_change.emit(count);
                }
            }
        })
    };

    let submit_blocked = props.submitting || props.prompt.trim().is_empty();
    let assist_blocked = !props.assist_available || props.assisting || props.submitting;

    html! {
        <div class="mt-4 space-y-2 w-full max-w-md">
            <input
                ref={props.file_input_ref.clone()}
                type="file"
                accept="image/*"
                onchange={props.on_upload.clone()}
                class="w-full border rounded px-2 py-1"
            />
            <input
                type="color"
                value={props.color.clone()}
                oninput={on_color_input}
                class="w-full border rounded px-2 py-1 cursor-pointer"
            />
            <select
                value={props.brush.value()}
                onchange={on_brush_select}
                class="w-full border rounded px-2 py-1"
            >
                {
                    BrushSize::ALL.iter().map(|size| {
                        html! {
                            <option
                                value={size.value()}
                                selected={*size == props.brush}
                            >
                                {size.label()}
                            </option>
                        }
                    }).collect::<Html>()
                }
            </select>
            <input
                type="text"
                placeholder="Enter prompt"
                value={props.prompt.clone()}
                oninput={on_prompt_input}
                class="w-full border rounded px-2 py-1"
            />
            <select
                value={props.iterations.as_field()}
                onchange={on_iterations_select}
                class="w-full border rounded px-2 py-1"
            >
                {
                    IterationCount::ALL.iter().map(|count| {
                        html! {
                            <option
                                value={count.as_field()}
                                selected={*count == props.iterations}
                            >
                                {count.label()}
                            </option>
                        }
                    }).collect::<Html>()
                }
            </select>
            <button
                onclick={props.on_clear.clone()}
                class="w-full px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600"
            >
                {"Clear Canvas"}
            </button>
            <button
                onclick={props.on_clear_upload.clone()}
                class="w-full px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600"
            >
                {"Clear Uploaded Image"}
            </button>
            <button
                onclick={props.on_assist.clone()}
                disabled={assist_blocked}
                title={
                    if props.assist_available {
                        "Extend the prompt with the completion service"
                    } else {
                        "Set a completion-service credential to enable"
                    }
                }
                class={classes!(
                    "w-full",
                    "px-4",
                    "py-2",
                    "rounded",
                    "text-white",
                    if assist_blocked {
                        "bg-gray-400 cursor-not-allowed"
                    } else {
                        "bg-purple-500 hover:bg-purple-600"
                    }
                )}
            >
                {if props.assisting { "Extending..." } else { "Extend Prompt" }}
            </button>
            <button
                onclick={props.on_submit.clone()}
                disabled={submit_blocked}
                class={classes!(
                    "w-full",
                    "px-4",
                    "py-2",
                    "rounded",
                    "text-white",
                    if submit_blocked {
                        "bg-gray-400 cursor-not-allowed"
                    } else {
                        "bg-blue-500 hover:bg-blue-600"
                    }
                )}
            >
                {if props.submitting { "Generating..." } else { "Send to Server" }}
            </button>
        </div>
    }
}
