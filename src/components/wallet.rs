use crate::bridge;
use crate::config::AppConfig;
use crate::error::CrowdfundError;
use crate::utils::short_address;
use alloy_primitives::Address;
use std::rc::Rc;
use yew::prelude::*;

pub struct WalletConnect {
    connecting: bool,
    account: Option<Address>,
    error: Option<String>,
}

pub enum Msg {
    Connect,
    Connected(Address),
    Error(CrowdfundError),
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub config: Rc<AppConfig>,
    pub on_connect: Callback<Address>,
}

impl Component for WalletConnect {
    type Message = Msg;
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            connecting: false,
            account: None,
            error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Connect => {
                self.connecting = true;
                self.error = None;
                let link = ctx.link().clone();
                let config = ctx.props().config.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = bridge::connect_wallet(&config.client_id, config.chain_id)
                        .await
                        .and_then(|address| {
                            address.parse::<Address>().map_err(|e| {
                                CrowdfundError::WalletConnection(format!("{}: {}", address, e))
                            })
                        });
                    match result {
                        Ok(address) => link.send_message(Msg::Connected(address)),
                        Err(e) => link.send_message(Msg::Error(e)),
                    }
                });
                true
            }
            Msg::Connected(address) => {
                log::info!("Wallet connected: {}", address);
                self.connecting = false;
                self.account = Some(address);
                ctx.props().on_connect.emit(address);
                true
            }
            Msg::Error(e) => {
                log::error!("{}", e);
                self.connecting = false;
                self.error = Some(e.user_message());
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(|_| Msg::Connect);

        html! {
            <div class="wallet-section">
                if let Some(account) = &self.account {
                    <div class="connected-status">
                        {"Wallet Connected"}
                        <div class="wallet-address">
                            {format!("Address: {}", short_address(account))}
                        </div>
                    </div>
                } else {
                    <button class="connect-button" {onclick} disabled={self.connecting}>
                        if self.connecting {
                            {"Connecting..."}
                        } else {
                            {"Connect Wallet"}
                        }
                    </button>
                    if let Some(error) = &self.error {
                        <div class="status-message">{error}</div>
                    }
                }
            </div>
        }
    }
}
