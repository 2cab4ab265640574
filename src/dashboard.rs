use crate::campaign::Campaign;
use crate::error::CrowdfundResult;
use alloy_primitives::Address;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CampaignList {
    Loading,
    Loaded(Vec<Campaign>),
    Unavailable(String),
}

/// What the campaign grid renders.
#[derive(Debug, PartialEq, Eq)]
pub enum ListView<'a> {
    Loading,
    Empty,
    Populated(&'a [Campaign]),
    Unavailable(&'a str),
}

/// Follow-up the view must perform after a state change.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ReloadCampaigns,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    campaigns: CampaignList,
    modal_open: bool,
    /// Tag of the most recent campaign load; results from older loads are stale.
    generation: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            campaigns: CampaignList::Loading,
            modal_open: false,
            generation: 0,
        }
    }
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ListView<'_> {
        match &self.campaigns {
            CampaignList::Loading => ListView::Loading,
            CampaignList::Loaded(list) if list.is_empty() => ListView::Empty,
            CampaignList::Loaded(list) => ListView::Populated(list),
            CampaignList::Unavailable(reason) => ListView::Unavailable(reason),
        }
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
    }

    pub fn close_modal(&mut self) {
        self.modal_open = false;
    }

    /// Back to the initial loading view for another account. The generation keeps
    /// counting so loads issued for the previous account stay stale.
    pub fn reset(&mut self) {
        self.campaigns = CampaignList::Loading;
        self.modal_open = false;
    }

    /// Start a campaign load and return its tag.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Apply the result of load `generation`. Returns false and keeps the current
    /// list when a newer load has been started since.
    pub fn campaigns_loaded(&mut self, generation: u64, result: CrowdfundResult<Vec<Campaign>>) -> bool {
        if generation != self.generation {
            log::debug!("Dropping stale campaign load {} (current {})", generation, self.generation);
            return false;
        }
        self.campaigns = match result {
            Ok(list) => CampaignList::Loaded(list),
            Err(e) => {
                log::error!("Error loading campaigns: {}", e);
                CampaignList::Unavailable(e.user_message())
            }
        };
        true
    }

    /// A new campaign was deployed: close the modal and refetch once. The current
    /// list stays on screen until the refetch lands.
    pub fn campaign_created(&mut self, address: Address) -> Command {
        log::info!("Campaign {} created, refreshing list", address);
        self.modal_open = false;
        Command::ReloadCampaigns
    }

    /// Outcome of a deploy from the modal. A failure leaves the modal open with
    /// its values so the user can retry.
    pub fn deploy_finished(&mut self, result: &CrowdfundResult<Address>) -> Option<Command> {
        match result {
            Ok(address) => Some(self.campaign_created(*address)),
            Err(_) => None,
        }
    }
}
