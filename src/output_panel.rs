use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OutputPanelProps {
    /// Object URL of the last successful generation
    pub generated_url: Option<String>,
}

#[function_component(OutputPanel)]
pub fn output_panel(props: &OutputPanelProps) -> Html {
    let Some(url) = props.generated_url.clone() else {
        return html! {};
    };

    html! {
        <div class="mt-4">
            <h2 class="text-lg font-bold mb-2">{"Generated Image:"}</h2>
            <img
                src={url}
                alt="Generated"
                class="max-w-full h-auto border border-gray-300 rounded"
            />
        </div>
    }
}
