use crate::config::AppConfig;
use crate::error::CrowdfundResult;
use crate::factory::FactoryHandle;
use crate::submission::{self, CreateCampaignForm};
use crate::utils::alert;
use alloy_primitives::Address;
use std::rc::Rc;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

pub struct CreateCampaignModal {
    form: CreateCampaignForm,
}

pub enum Msg {
    UpdateName(String),
    UpdateDescription(String),
    UpdateGoal(String),
    UpdateLength(String),
    Submit,
    Deployed(CrowdfundResult<Address>),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub config: Rc<AppConfig>,
    pub factory: FactoryHandle,
    pub on_close: Callback<()>,
    pub on_deployed: Callback<CrowdfundResult<Address>>,
}

impl Component for CreateCampaignModal {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: CreateCampaignForm::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateName(name) => {
                self.form.draft.name = name;
                true
            }
            Msg::UpdateDescription(description) => {
                self.form.draft.description = description;
                true
            }
            Msg::UpdateGoal(goal) => {
                // Re-render either way so a rejected keystroke is undone in the input.
                self.form.draft.set_goal(&goal);
                true
            }
            Msg::UpdateLength(days) => {
                self.form.draft.set_deadline_input(&days);
                true
            }
            Msg::Submit => {
                let props = ctx.props();
                let request = match self.form.begin(chrono::Utc::now(), &props.config) {
                    Ok(request) => request,
                    Err(e) => {
                        log::debug!("Submission rejected: {}", e);
                        alert(&e.user_message());
                        return false;
                    }
                };

                let link = ctx.link().clone();
                let factory = props.factory.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = submission::deploy(&*factory, &request).await;
                    link.send_message(Msg::Deployed(result));
                });
                true
            }
            Msg::Deployed(result) => {
                alert(&self.form.finish(&result));
                ctx.props().on_deployed.emit(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let draft = &self.form.draft;
        let in_flight = self.form.is_in_flight();

        let on_name = link.callback(|e: InputEvent| {
            Msg::UpdateName(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let on_description = link.callback(|e: InputEvent| {
            Msg::UpdateDescription(e.target_unchecked_into::<HtmlTextAreaElement>().value())
        });
        let on_goal = link.callback(|e: InputEvent| {
            Msg::UpdateGoal(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let on_length = link.callback(|e: InputEvent| {
            Msg::UpdateLength(e.target_unchecked_into::<HtmlInputElement>().value())
        });
        let on_submit = link.callback(|_: MouseEvent| Msg::Submit);
        let on_close = ctx.props().on_close.reform(|_: MouseEvent| ());

        html! {
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <p class="modal-title">{"Create a Campaign"}</p>
                        <button class="close-button" onclick={on_close}>{"Close"}</button>
                    </div>
                    <div class="modal-body">
                        <div class="input-group">
                            <label for="campaign-name">{"Campaign Name:"}</label>
                            <input
                                type="text"
                                id="campaign-name"
                                value={draft.name.clone()}
                                oninput={on_name}
                                placeholder="Enter campaign name"
                            />
                        </div>
                        <div class="input-group">
                            <label for="campaign-description">{"Campaign Description:"}</label>
                            <textarea
                                id="campaign-description"
                                value={draft.description.clone()}
                                oninput={on_description}
                                placeholder="Enter campaign description"
                                rows="4"
                            />
                        </div>
                        <div class="input-group">
                            <label for="campaign-goal">{"Campaign Goal (ETH):"}</label>
                            <input
                                type="text"
                                id="campaign-goal"
                                value={draft.goal.clone()}
                                oninput={on_goal}
                                placeholder="Enter goal amount in ETH"
                            />
                        </div>
                        <div class="input-group">
                            <label for="campaign-length">{"Campaign Length (Days):"}</label>
                            <input
                                type="number"
                                id="campaign-length"
                                min="1"
                                value={draft.deadline_days.to_string()}
                                oninput={on_length}
                            />
                        </div>
                        <button class="submit-button" onclick={on_submit} disabled={in_flight}>
                            {self.form.submit_label()}
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}
