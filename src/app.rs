use crate::components::{dashboard::Dashboard, wallet::WalletConnect};
use crate::config::AppConfig;
use crate::factory::{FactoryHandle, ThirdwebFactory};
use alloy_primitives::Address;
use std::rc::Rc;
use yew::prelude::*;

pub struct App {
    config: Result<Rc<AppConfig>, String>,
    factory: Option<FactoryHandle>,
    account: Option<Address>,
}

pub enum Msg {
    WalletConnected(Address),
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = AppConfig::from_window().map(Rc::new).map_err(|e| {
            log::error!("{}", e);
            e.to_string()
        });
        let factory = config
            .as_ref()
            .ok()
            .map(|config| FactoryHandle::new(ThirdwebFactory::new(config.clone())));

        Self {
            config,
            factory,
            account: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::WalletConnected(account) => {
                self.account = Some(account);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let config = match &self.config {
            Ok(config) => config,
            Err(error) => {
                return html! {
                    <div class="container">
                        <h1>{"Crowdfund"}</h1>
                        <div class="status-message">{error}</div>
                    </div>
                }
            }
        };
        let wallet_callback = ctx.link().callback(Msg::WalletConnected);

        html! {
            <div class="container">
                <h1>{"Crowdfund"}</h1>
                <WalletConnect config={config.clone()} on_connect={wallet_callback} />
                if let (Some(account), Some(factory)) = (self.account, &self.factory) {
                    <Dashboard config={config.clone()} factory={factory.clone()} {account} />
                }
            </div>
        }
    }
}
