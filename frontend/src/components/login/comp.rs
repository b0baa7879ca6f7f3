use crate::components::imports::*;
use crate::components::StatusMessage;
use interfacing::{ErrorResponse, LoginRequest};

use super::form::{self, FormState, SubmitOutcome};

// the form is served separately from the API during development
const BACKEND_URL: &str = "http://127.0.0.1:5000";

pub struct Login {
    form: FormState,
}

pub enum Msg {
    UsernameInput(String),
    PasswordInput(String),
    Submit,
    Resolved(SubmitOutcome),
}

impl Component for Login {
    type Message = Msg;
    type Properties = ();

    #[allow(unused_variables)]
    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: FormState::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|event: SubmitEvent| {
            event.prevent_default();
            Msg::Submit
        });

        let on_username_input = ctx.link().callback(|event: InputEvent| {
            Msg::UsernameInput(event.target_unchecked_into::<HtmlInputElement>().value())
        });

        let on_password_input = ctx.link().callback(|event: InputEvent| {
            Msg::PasswordInput(event.target_unchecked_into::<HtmlInputElement>().value())
        });

        let form_style = css!(
            "
                display: flex;
                flex-direction: column;
                gap: 12px;
                max-width: 320px;
                margin: 80px auto;

                label {
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                }
            "
        );

        html! {
            <form {onsubmit} method="post" class={form_style}>
                <label>{ "Username" }
                    <input
                        value={self.form.username.clone()}
                        oninput={on_username_input}
                        type="text" placeholder="Enter Username" name="username"/>
                </label>
                <label>{ "Password" }
                    <input
                        value={self.form.password.clone()}
                        oninput={on_password_input}
                        type="password" placeholder="Enter Password" name="password"/>
                </label>
                <button type="submit" disabled={self.form.is_loading()}>
                    { if self.form.is_loading() { "Signing in..." } else { "Login" } }
                </button>
                <StatusMessage feedback={self.form.feedback().clone()}/>
            </form>
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::UsernameInput(value) => {
                self.form.username = value;
                true
            }
            Self::Message::PasswordInput(value) => {
                self.form.password = value;
                true
            }
            Self::Message::Submit => {
                match self.form.begin_submit() {
                    None => {}
                    Some(login_request) => {
                        console::log!(format!("submitting: {:?}", login_request));
                        ctx.link().send_future(async move {
                            Self::Message::Resolved(request_login(login_request).await)
                        });
                    }
                }
                true
            }
            Self::Message::Resolved(outcome) => {
                self.form.resolve(outcome);
                true
            }
        }
    }
}

#[derive(thiserror::Error, Debug)]
enum SubmitError {
    #[error("Request error")]
    Request(#[source] gloo_net::Error),

    #[error("Parse error")]
    Parse(#[source] gloo_net::Error),
}

/// Total over the error paths. The caller always gets an outcome back,
/// which is what keeps the loading flag honest.
async fn request_login(login_request: LoginRequest) -> SubmitOutcome {
    let exchange = try_request_login(&login_request).await;

    if let Err(e) = &exchange {
        // diagnostic only, the user sees the fixed connectivity message
        console::log!(format!("login transport failure: {:?}", e));
    }

    SubmitOutcome::classify(exchange)
}

/// One POST, resolved to the status and the parsed failure reason.
async fn try_request_login(
    login_request: &LoginRequest,
) -> Result<(u16, Option<String>), SubmitError> {
    let response = Request::static_post_with_base(routes().api.auth.login, BACKEND_URL)
        .json(login_request)
        .map_err(SubmitError::Request)?
        .send()
        .await
        .map_err(SubmitError::Request)?;

    response.log_status();

    let reason = if form::success_range(response.status()) {
        // a session token will hang off this body later,
        // for now it only has to be valid JSON
        let _body: serde_json::Value = response.json().await.map_err(SubmitError::Parse)?;
        None
    } else {
        let body: ErrorResponse = response.json().await.map_err(SubmitError::Parse)?;
        body.message
    };

    Ok((response.status(), reason))
}
