use crate::components::imports::*;

use super::login::form::Feedback;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub feedback: Feedback,
}

#[styled_component]
pub fn StatusMessage(props: &Props) -> Html {
    let error_css = css! {"
        color: rgb(248 83 20);
    "};

    let success_css = css! {"
        color: rgb(36 161 72);
    "};

    match &props.feedback {
        Feedback::None => html! {},
        Feedback::Error(message) => html! {<p class={error_css}>{ message }</p>},
        Feedback::Success(message) => html! {<p class={success_css}>{ message }</p>},
    }
}
