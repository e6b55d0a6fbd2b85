use alloy_primitives::{Address, U256};

use crate::abi::getCampaignDetailsReturn;
use crate::consts::{ASSUMED_CAMPAIGN_DAYS, ONE_DAY, URGENT_WINDOW};
use crate::units::{format_date, format_eth, short_address};

/// Campaign as stored by the contract.
#[derive(Clone, Debug, PartialEq)]
pub struct CampaignRecord {
    /// Sequential id, starting at 1.
    pub id: u64,

    pub title: String,

    pub description: String,

    /// Funding target in wei.
    pub goal: U256,

    /// Amount donated so far in wei.
    pub raised: U256,

    /// Unix timestamp (seconds) after which donations stop.
    pub deadline: u64,

    pub image_url: String,

    pub creator: Address,

    /// Set by the contract once funds have been withdrawn.
    pub is_closed: bool,
}

impl CampaignRecord {
    pub fn from_details(id: u64, details: getCampaignDetailsReturn) -> Self {
        Self {
            id,
            title: details.title,
            description: details.description,
            goal: details.goal,
            raised: details.raised,
            deadline: u64::try_from(details.deadline).unwrap_or(u64::MAX),
            image_url: details.imageURL,
            creator: details.creator,
            is_closed: details.isClosed,
        }
    }
}

/// Badge shown on a campaign card, highest precedence first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CampaignStatus {
    Closed,
    Expired,
    FullyFunded,
    Urgent,
    Active,
}

impl CampaignStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CampaignStatus::Closed => "Closed",
            CampaignStatus::Expired => "Expired",
            CampaignStatus::FullyFunded => "Fully Funded",
            CampaignStatus::Urgent => "Urgent",
            CampaignStatus::Active => "Active",
        }
    }

    /// CSS modifier for the card and badge.
    pub fn class(&self) -> &'static str {
        match self {
            CampaignStatus::Closed => "closed",
            CampaignStatus::Expired => "expired",
            CampaignStatus::FullyFunded => "funded",
            CampaignStatus::Urgent => "urgent",
            CampaignStatus::Active => "",
        }
    }
}

/// A campaign with the fields the UI derives at fetch time.
///
/// Derived values depend on the clock and on the connected account, so
/// they are recomputed on every refresh and never cached across them.
#[derive(Clone, Debug, PartialEq)]
pub struct Campaign {
    pub record: CampaignRecord,

    pub is_expired: bool,

    pub is_fully_funded: bool,

    pub is_urgent: bool,

    pub can_withdraw: bool,

    /// Progress toward the goal in tenths of a percent (1000 = 100%).
    pub progress_permille: u64,

    /// Whole days until the deadline, 0 once it has passed.
    pub days_remaining: u64,

    /// Estimated creation time, assuming a fixed campaign length.
    pub created_at: u64,

    pub deadline_label: String,

    pub raised_label: String,

    pub goal_label: String,

    pub creator_label: String,
}

impl Campaign {
    pub fn derive(record: CampaignRecord, viewer: Option<Address>, now: u64) -> Self {
        let remaining = record.deadline.saturating_sub(now);
        let is_expired = record.deadline < now;
        let is_fully_funded = record.raised >= record.goal;
        let is_urgent = remaining > 0 && remaining <= URGENT_WINDOW;
        let is_creator = viewer.is_some_and(|viewer| viewer == record.creator);
        let can_withdraw = is_creator && (is_expired || is_fully_funded) && !record.is_closed;

        let progress_permille = if record.goal.is_zero() {
            0
        } else {
            let permille = record.raised.saturating_mul(U256::from(1000u64)) / record.goal;
            u64::try_from(permille).unwrap_or(u64::MAX)
        };

        Self {
            is_expired,
            is_fully_funded,
            is_urgent,
            can_withdraw,
            progress_permille,
            days_remaining: remaining / ONE_DAY,
            created_at: record
                .deadline
                .saturating_sub(ASSUMED_CAMPAIGN_DAYS * ONE_DAY),
            deadline_label: format_date(record.deadline),
            raised_label: format_eth(record.raised),
            goal_label: format_eth(record.goal),
            creator_label: short_address(&record.creator),
            record,
        }
    }

    pub fn id(&self) -> u64 {
        self.record.id
    }

    /// Closed or past its deadline.
    pub fn has_ended(&self) -> bool {
        self.record.is_closed || self.is_expired
    }

    pub fn accepts_donations(&self) -> bool {
        !self.has_ended()
    }

    pub fn status(&self) -> CampaignStatus {
        if self.record.is_closed {
            CampaignStatus::Closed
        } else if self.is_expired {
            CampaignStatus::Expired
        } else if self.is_fully_funded {
            CampaignStatus::FullyFunded
        } else if self.is_urgent {
            CampaignStatus::Urgent
        } else {
            CampaignStatus::Active
        }
    }

    /// Progress as a percentage, e.g. `42.5`.
    pub fn progress_percent(&self) -> f64 {
        self.progress_permille as f64 / 10.0
    }

    /// Progress clamped to 100 for drawing a bar.
    pub fn progress_bar_width(&self) -> f64 {
        self.progress_percent().min(100.0)
    }

    pub fn is_created_by(&self, account: &Address) -> bool {
        self.record.creator == *account
    }

    /// Image to display, falling back once the URL is empty or failed to load.
    pub fn image_src<'a>(&'a self, load_failed: bool, placeholder: &'a str) -> &'a str {
        if load_failed || self.record.image_url.is_empty() {
            placeholder
        } else {
            &self.record.image_url
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_image_falls_back_to_placeholder() {
        let mut record = record(1, "Lab", eth(5), eth(0), NOW + ONE_DAY);
        let campaign = Campaign::derive(record.clone(), None, NOW);
        assert_eq!(campaign.image_src(false, "p.png"), "https://example.com/1.png");
        assert_eq!(campaign.image_src(true, "p.png"), "p.png");

        record.image_url = String::new();
        let campaign = Campaign::derive(record, None, NOW);
        assert_eq!(campaign.image_src(false, "p.png"), "p.png");
    }

    #[test]
    fn test_fully_funded_ignores_deadline() {
        let mut record = record(1, "Lab", eth(5), eth(5), NOW - ONE_DAY);
        let campaign = Campaign::derive(record.clone(), None, NOW);
        assert!(campaign.is_fully_funded);
        assert!(campaign.is_expired);

        record.deadline = NOW + 10 * ONE_DAY;
        record.raised = eth(7);
        let campaign = Campaign::derive(record, None, NOW);
        assert!(campaign.is_fully_funded);
        assert!(!campaign.is_expired);
        assert_eq!(campaign.status(), CampaignStatus::FullyFunded);
    }

    #[test]
    fn test_zero_goal_counts_as_funded() {
        let campaign = Campaign::derive(record(1, "Free", U256::ZERO, U256::ZERO, NOW + ONE_DAY), None, NOW);
        assert!(campaign.is_fully_funded);
        assert_eq!(campaign.progress_permille, 0);
    }

    #[test]
    fn test_expired_when_deadline_passed() {
        let campaign = Campaign::derive(record(1, "Old", eth(10), eth(1), NOW - 1), None, NOW);
        assert!(campaign.is_expired);
        assert!(!campaign.is_urgent);
        assert_eq!(campaign.days_remaining, 0);
        assert!(campaign.has_ended());
        assert!(!campaign.accepts_donations());
        assert_eq!(campaign.status(), CampaignStatus::Expired);
    }

    #[test]
    fn test_deadline_equal_to_now_is_not_expired() {
        let campaign = Campaign::derive(record(1, "Edge", eth(10), eth(1), NOW), None, NOW);
        assert!(!campaign.is_expired);
        assert!(!campaign.is_urgent);
    }

    #[test]
    fn test_urgency_window() {
        let urgent = Campaign::derive(record(1, "Soon", eth(10), eth(1), NOW + URGENT_WINDOW), None, NOW);
        assert!(urgent.is_urgent);
        assert_eq!(urgent.days_remaining, 3);
        assert_eq!(urgent.status(), CampaignStatus::Urgent);

        let later = Campaign::derive(record(2, "Later", eth(10), eth(1), NOW + URGENT_WINDOW + 1), None, NOW);
        assert!(!later.is_urgent);
        assert_eq!(later.status(), CampaignStatus::Active);
    }

    #[test]
    fn test_progress_uses_exact_integers() {
        let campaign = Campaign::derive(record(1, "Half", eth(8), eth(3), NOW + ONE_DAY), None, NOW);
        assert_eq!(campaign.progress_permille, 375);
        assert_eq!(campaign.progress_percent(), 37.5);

        let over = Campaign::derive(record(2, "Over", eth(1), eth(3), NOW + ONE_DAY), None, NOW);
        assert_eq!(over.progress_permille, 3000);
        assert_eq!(over.progress_bar_width(), 100.0);
    }

    #[test]
    fn test_labels() {
        let campaign = Campaign::derive(record(1, "Labels", eth(2), U256::ZERO, 1_792_108_800), None, NOW);
        assert_eq!(campaign.goal_label, "2.0");
        assert_eq!(campaign.raised_label, "0.0");
        assert_eq!(campaign.deadline_label, "Oct 16, 2026");
        assert_eq!(campaign.created_at, 1_792_108_800 - 30 * ONE_DAY);
    }

    #[test]
    fn test_closed_status_wins() {
        let mut record = record(1, "Done", eth(1), eth(2), NOW - ONE_DAY);
        record.is_closed = true;
        let campaign = Campaign::derive(record, None, NOW);
        assert_eq!(campaign.status(), CampaignStatus::Closed);
        assert_eq!(campaign.status().label(), "Closed");
    }

    #[test]
    fn test_can_withdraw_truth_table() {
        let creator = alice();
        for viewer_is_creator in [false, true] {
            for expired in [false, true] {
                for funded in [false, true] {
                    for closed in [false, true] {
                        let deadline = if expired { NOW - ONE_DAY } else { NOW + 10 * ONE_DAY };
                        let raised = if funded { eth(10) } else { eth(1) };
                        let mut record = record(1, "T", eth(10), raised, deadline);
                        record.creator = creator;
                        record.is_closed = closed;
                        let viewer = if viewer_is_creator { creator } else { bob() };

                        let campaign = Campaign::derive(record, Some(viewer), NOW);
                        let expected = viewer_is_creator && (expired || funded) && !closed;
                        assert_eq!(
                            campaign.can_withdraw, expected,
                            "creator={viewer_is_creator} expired={expired} funded={funded} closed={closed}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_can_withdraw_needs_viewer() {
        let campaign = Campaign::derive(record(1, "T", eth(1), eth(1), NOW - ONE_DAY), None, NOW);
        assert!(!campaign.can_withdraw);
    }

    #[test]
    fn test_creator_match_is_case_insensitive() {
        let lower: Address = "0xb2eac72bbdfc5493c37b5e7e39f7c501562d25b5".parse().unwrap();
        let upper: Address = "0xB2EAC72BBDFC5493C37B5E7E39F7C501562D25B5".parse().unwrap();
        let mut record = record(1, "T", eth(1), eth(1), NOW - ONE_DAY);
        record.creator = upper;
        let campaign = Campaign::derive(record, Some(lower), NOW);
        assert!(campaign.can_withdraw);
        assert!(campaign.is_created_by(&lower));
    }
}
