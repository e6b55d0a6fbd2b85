use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use alloy_primitives::Address;

use crate::state::Campaign;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CampaignFilter {
    #[default]
    All,
    /// Neither closed nor past the deadline.
    Active,
    Urgent,
    Funded,
    /// Past the deadline or closed.
    Expired,
    /// Created by the connected account.
    Mine,
}

impl CampaignFilter {
    pub const ALL: [CampaignFilter; 6] = [
        CampaignFilter::All,
        CampaignFilter::Active,
        CampaignFilter::Urgent,
        CampaignFilter::Funded,
        CampaignFilter::Expired,
        CampaignFilter::Mine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignFilter::All => "all",
            CampaignFilter::Active => "active",
            CampaignFilter::Urgent => "urgent",
            CampaignFilter::Funded => "funded",
            CampaignFilter::Expired => "expired",
            CampaignFilter::Mine => "my-campaigns",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CampaignFilter::All => "All Campaigns",
            CampaignFilter::Active => "Active",
            CampaignFilter::Urgent => "Urgent",
            CampaignFilter::Funded => "Fully Funded",
            CampaignFilter::Expired => "Ended",
            CampaignFilter::Mine => "My Campaigns",
        }
    }

    fn matches(&self, campaign: &Campaign, viewer: Option<&Address>) -> bool {
        match self {
            CampaignFilter::All => true,
            CampaignFilter::Active => !campaign.has_ended(),
            CampaignFilter::Urgent => campaign.is_urgent,
            CampaignFilter::Funded => campaign.is_fully_funded,
            CampaignFilter::Expired => campaign.has_ended(),
            CampaignFilter::Mine => viewer.is_some_and(|viewer| campaign.is_created_by(viewer)),
        }
    }
}

impl fmt::Display for CampaignFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(CampaignFilter::All),
            "active" => Ok(CampaignFilter::Active),
            "urgent" => Ok(CampaignFilter::Urgent),
            "funded" => Ok(CampaignFilter::Funded),
            "expired" | "ended" => Ok(CampaignFilter::Expired),
            "mine" | "my-campaigns" => Ok(CampaignFilter::Mine),
            other => Err(format!("unknown filter: {other}")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CampaignSort {
    #[default]
    Newest,
    Oldest,
    MostFunded,
    EndingSoon,
}

impl CampaignSort {
    pub const ALL: [CampaignSort; 4] = [
        CampaignSort::Newest,
        CampaignSort::Oldest,
        CampaignSort::MostFunded,
        CampaignSort::EndingSoon,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignSort::Newest => "newest",
            CampaignSort::Oldest => "oldest",
            CampaignSort::MostFunded => "most-funded",
            CampaignSort::EndingSoon => "ending-soon",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CampaignSort::Newest => "Newest",
            CampaignSort::Oldest => "Oldest",
            CampaignSort::MostFunded => "Most Funded",
            CampaignSort::EndingSoon => "Ending Soon",
        }
    }

    fn compare(&self, a: &Campaign, b: &Campaign) -> Ordering {
        match self {
            CampaignSort::Newest => b.created_at.cmp(&a.created_at),
            CampaignSort::Oldest => a.created_at.cmp(&b.created_at),
            CampaignSort::MostFunded => b.record.raised.cmp(&a.record.raised),
            CampaignSort::EndingSoon => a
                .is_expired
                .cmp(&b.is_expired)
                .then(a.record.deadline.cmp(&b.record.deadline)),
        }
    }
}

impl fmt::Display for CampaignSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampaignSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" => Ok(CampaignSort::Newest),
            "oldest" => Ok(CampaignSort::Oldest),
            "most-funded" => Ok(CampaignSort::MostFunded),
            "ending-soon" => Ok(CampaignSort::EndingSoon),
            other => Err(format!("unknown sort: {other}")),
        }
    }
}

/// Search, filter and sort selections of the list view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignQuery {
    pub filter: CampaignFilter,
    pub sort: CampaignSort,
    pub search: String,
    /// Connected account, used by the "mine" filter.
    pub viewer: Option<Address>,
}

impl CampaignQuery {
    /// Applies search, then filter, then a stable sort.
    pub fn apply(&self, campaigns: &[Campaign]) -> Vec<Campaign> {
        let needle = self.search.trim().to_lowercase();
        let mut matched: Vec<Campaign> = campaigns
            .iter()
            .filter(|campaign| {
                needle.is_empty()
                    || campaign.record.title.to_lowercase().contains(&needle)
                    || campaign.record.description.to_lowercase().contains(&needle)
            })
            .filter(|campaign| self.filter.matches(campaign, self.viewer.as_ref()))
            .cloned()
            .collect();
        matched.sort_by(|a, b| self.sort.compare(a, b));
        matched
    }

    pub fn is_filtered(&self) -> bool {
        self.filter != CampaignFilter::All || !self.search.trim().is_empty()
    }

    /// Resets search and filter, keeping the sort order.
    pub fn clear(&mut self) {
        self.filter = CampaignFilter::All;
        self.search.clear();
    }

    /// "Showing 2 of 5 campaigns (filtered by: my campaigns)".
    pub fn summary(&self, shown: usize, total: usize) -> String {
        let mut summary = format!("Showing {shown} of {total} campaigns");
        if self.filter != CampaignFilter::All {
            summary.push_str(&format!(
                " (filtered by: {})",
                self.filter.as_str().replace('-', " ")
            ));
        }
        summary
    }
}
