use yew::prelude::*;

use crate::sketch_pad::SketchPad;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SketchPad />
    }
}
