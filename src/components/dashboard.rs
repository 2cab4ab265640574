use crate::campaign::Campaign;
use crate::components::{campaign_card::CampaignCard, create_campaign::CreateCampaignModal};
use crate::config::AppConfig;
use crate::dashboard::{Command, DashboardState, ListView};
use crate::error::CrowdfundResult;
use crate::factory::FactoryHandle;
use alloy_primitives::Address;
use std::rc::Rc;
use yew::prelude::*;

pub struct Dashboard {
    state: DashboardState,
}

pub enum Msg {
    Load,
    Loaded(u64, CrowdfundResult<Vec<Campaign>>),
    OpenModal,
    CloseModal,
    Deployed(CrowdfundResult<Address>),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub config: Rc<AppConfig>,
    pub factory: FactoryHandle,
    pub account: Address,
}

impl Dashboard {
    fn run(&self, ctx: &Context<Self>, command: Command) {
        match command {
            Command::ReloadCampaigns => ctx.link().send_message(Msg::Load),
        }
    }
}

impl Component for Dashboard {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        Self {
            state: DashboardState::new(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Load => {
                let generation = self.state.begin_load();
                let link = ctx.link().clone();
                let factory = ctx.props().factory.clone();
                let owner = ctx.props().account;
                wasm_bindgen_futures::spawn_local(async move {
                    link.send_message(Msg::Loaded(generation, factory.user_campaigns(owner).await));
                });
                false
            }
            Msg::Loaded(generation, result) => self.state.campaigns_loaded(generation, result),
            Msg::OpenModal => {
                self.state.open_modal();
                true
            }
            Msg::CloseModal => {
                self.state.close_modal();
                true
            }
            Msg::Deployed(result) => {
                if let Some(command) = self.state.deploy_finished(&result) {
                    self.run(ctx, command);
                }
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().account != old_props.account {
            self.state.reset();
            ctx.link().send_message(Msg::Load);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();

        let campaigns = match self.state.view() {
            ListView::Loading => html! { <p class="muted">{"Loading campaigns..."}</p> },
            ListView::Empty => html! { <p class="muted">{"No campaigns found"}</p> },
            ListView::Unavailable(reason) => html! { <p class="status-message">{reason}</p> },
            ListView::Populated(list) => list
                .iter()
                .map(|campaign| {
                    html! {
                        <CampaignCard
                            key={campaign.campaign_address.to_string()}
                            campaign={campaign.clone()}
                        />
                    }
                })
                .collect::<Html>(),
        };

        html! {
            <div class="dashboard">
                <div class="dashboard-header">
                    <p class="dashboard-title">{"Dashboard"}</p>
                    <button class="create-button" onclick={link.callback(|_| Msg::OpenModal)}>
                        {"Create Campaign"}
                    </button>
                </div>
                <p class="section-title">{"My Campaigns:"}</p>
                <div class="campaign-grid">
                    {campaigns}
                </div>
                if self.state.is_modal_open() {
                    <CreateCampaignModal
                        config={props.config.clone()}
                        factory={props.factory.clone()}
                        on_close={link.callback(|_| Msg::CloseModal)}
                        on_deployed={link.callback(Msg::Deployed)}
                    />
                }
            </div>
        }
    }
}
