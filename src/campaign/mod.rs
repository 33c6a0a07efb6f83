//! Campaigns: one player fighting through a sequence of encounters.
//!
//! ## Key Types
//!
//! - `Campaign`: owns the player, the encounter plan and the monster factory
//! - `CampaignStatus`: InProgress / Won / Lost
//! - `CampaignSnapshot`: serializable save of a campaign between encounters
//! - `PlanError`: strict plan validation failure

pub mod progress;

pub use progress::{validate_plan, Campaign, CampaignSnapshot, CampaignStatus, PlanError};
