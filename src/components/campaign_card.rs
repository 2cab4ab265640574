use crate::campaign::Campaign;
use crate::utils::{format_date, short_address};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub campaign: Campaign,
}

#[function_component(CampaignCard)]
pub fn campaign_card(props: &Props) -> Html {
    let campaign = &props.campaign;
    let href = format!("/campaign/{}", campaign.campaign_address);

    html! {
        <div class="campaign-card">
            <p class="campaign-name">{&campaign.name}</p>
            <p class="campaign-address" title={campaign.campaign_address.to_string()}>
                {short_address(&campaign.campaign_address)}
            </p>
            <p class="campaign-created">
                {format!("Created {}", format_date(campaign.created_at()))}
            </p>
            <a class="campaign-link" {href}>{"View Campaign"}</a>
        </div>
    }
}
