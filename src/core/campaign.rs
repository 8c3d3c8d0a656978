//! Campaign model and the sample catalog behind the explore pages.
//!
//! There is no backend behind the listing yet: the catalog ships the same
//! sample campaigns the explore page renders, behind lookup and search
//! operations a real data source would slot into later.

use std::fmt;

use super::coin::CoinType;
use super::sui_amount::{AmountError, SuiAmount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CampaignId(pub u64);

impl fmt::Display for CampaignId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    pub creator: String,
    pub description: String,
    /// Image URL or CID.
    pub image_ref: String,
    pub coin: CoinType,
    pub target: SuiAmount,
    pub raised: SuiAmount,
}

impl Campaign {
    /// Integer funding progress in percent, saturated at 100.
    ///
    /// A zero target reports 0 rather than dividing by zero.
    pub fn progress_percent(&self) -> u8 {
        if self.target.is_zero() {
            return 0;
        }
        let percent = self.raised.mist.saturating_mul(100) / self.target.mist;
        percent.min(100) as u8
    }

    /// Adds a (simulated) contribution to the raised total.
    pub fn apply_contribution(&mut self, amount: SuiAmount) -> Result<(), AmountError> {
        self.raised = self.raised.try_add(&amount)?;
        Ok(())
    }
}

/// The campaign listing. Currently sample data only.
#[derive(Debug, Clone, Default)]
pub struct CampaignCatalog {
    campaigns: Vec<Campaign>,
}

impl CampaignCatalog {
    pub fn new(campaigns: Vec<Campaign>) -> Self {
        Self { campaigns }
    }

    /// The nine sample campaigns the explore page ships with.
    pub fn sample() -> Self {
        let entries: [(u64, &str, &str, &str, u64, u64); 9] = [
            (
                1,
                "Green Energy Project",
                "EcoWorld Foundation",
                "Empowering sustainable future through clean energy.",
                80,
                52,
            ),
            (
                2,
                "Tech for Education",
                "Digital Learn Initiative",
                "Bringing blockchain into learning environments.",
                50,
                20,
            ),
            (
                3,
                "Water for All",
                "BlueLife Org",
                "Crowdfunding water access for rural communities.",
                40,
                36,
            ),
            (
                4,
                "Art on Chain",
                "Chain Arts Collective",
                "Support digital artists through NFT crowdfunding.",
                25,
                5,
            ),
            (
                5,
                "Food for Future",
                "AgriNext",
                "Sustainable agriculture for the next generation.",
                60,
                33,
            ),
            (
                6,
                "Women in Tech",
                "SheBuilds",
                "Empowering women through digital innovation.",
                30,
                12,
            ),
            (
                7,
                "Blockchain for Health",
                "OpenMed Labs",
                "Decentralized medical data and donation transparency.",
                90,
                45,
            ),
            (
                8,
                "Crypto for Charity",
                "GiveChain",
                "Connecting donors and causes through blockchain.",
                20,
                14,
            ),
            (
                9,
                "Smart City Vision",
                "UrbanDAO",
                "Funding projects that build intelligent urban spaces.",
                100,
                41,
            ),
        ];

        let campaigns = entries
            .into_iter()
            .map(|(id, title, creator, desc, target_sui, raised_sui)| Campaign {
                id: CampaignId(id),
                title: title.to_string(),
                creator: creator.to_string(),
                description: desc.to_string(),
                image_ref: "/images/donation.jpg".to_string(),
                coin: CoinType::sui(),
                target: SuiAmount::from_sui(target_sui),
                raised: SuiAmount::from_sui(raised_sui),
            })
            .collect();

        Self { campaigns }
    }

    pub fn all(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    pub fn get(&self, id: CampaignId) -> Option<&Campaign> {
        self.campaigns.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: CampaignId) -> Option<&mut Campaign> {
        self.campaigns.iter_mut().find(|c| c.id == id)
    }

    /// Case-insensitive title substring search, as the explore search bar
    /// filters.
    pub fn search(&self, query: &str) -> Vec<&Campaign> {
        let needle = query.to_lowercase();
        self.campaigns
            .iter()
            .filter(|c| c.title.to_lowercase().contains(&needle))
            .collect()
    }
}
