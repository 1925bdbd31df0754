//! Reward-box models for the userBoxConnection query and the
//! openUserBox mutation

use crate::errors::{Error, Result};
use crate::types::{ActionKey, UserBoxId};
use serde::{Deserialize, Serialize};

/// Generic edge/node wrapper used by the connection-style queries
#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Connection<T> {
    /// Flatten the edge/node wrapper into plain records
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

/// `data` payload of the GetUserBoxes query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBoxConnectionData {
    pub user_box_connection: Connection<UserBox>,
}

/// One box granted to the current user
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBox {
    pub user_box_id: UserBoxId,
    pub status: BoxStatus,
    #[serde(rename = "box")]
    pub box_info: BoxInfo,
}

/// Lifecycle status of a granted box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoxStatus {
    Active,
    Opened,
    Expired,
    #[serde(other)]
    Other,
}

/// Box definition shared by all grants of the same campaign
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxInfo {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub box_type: BoxType,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content_id: Option<String>,
    #[serde(default)]
    pub rewards: Vec<RewardOption>,
}

/// Widget family a box belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoxType {
    WheelOfFortune,
    LootBox,
    MysteryBox,
    #[serde(other)]
    Other,
}

/// One declared reward option of a box, in server order.
/// The order is authoritative for winner determination.
#[derive(Debug, Clone, Deserialize)]
pub struct RewardOption {
    #[serde(default = "Vec::new")]
    pub action: Vec<RewardAction>,
    #[serde(default)]
    pub probability: Option<f64>,
}

impl RewardOption {
    /// Identifying key of this option (taken from its first action)
    pub fn key(&self) -> Option<ActionKey> {
        self.action.first().map(RewardAction::key)
    }
}

/// Tagged rendition of the GraphQL reward-action union.
///
/// `Bonus` covers GiveBonusAction, GiveAndActivateBonusAction and
/// ActivateDepositBonusAction: they all identify by `bonusId` and are
/// indistinguishable on the wire once selected this way.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RewardAction {
    Bonus {
        #[serde(rename = "bonusId")]
        bonus_id: String,
        #[serde(default)]
        bonus: Option<RewardContent>,
    },
    GiveBox {
        #[serde(rename = "boxId")]
        box_id: String,
        #[serde(rename = "box", default)]
        box_content: Option<RewardContent>,
    },
    LoyaltyPoints {
        amount: i64,
        #[serde(rename = "currencyCode", default)]
        currency_code: Option<String>,
    },
}

impl RewardAction {
    /// Identifying key used for client-side correlation
    pub fn key(&self) -> ActionKey {
        match self {
            RewardAction::Bonus { bonus_id, .. } => ActionKey::new(bonus_id.clone()),
            RewardAction::GiveBox { box_id, .. } => ActionKey::new(box_id.clone()),
            RewardAction::LoyaltyPoints { amount, .. } => ActionKey::new(amount.to_string()),
        }
    }
}

/// Display metadata attached to bonus/box grants
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardContent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content_id: Option<String>,
}

/// `data` payload of the OpenUserBox mutation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenUserBoxData {
    #[serde(default)]
    pub open_user_box: Option<OpenUserBoxPayload>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenUserBoxPayload {
    pub user_box: OpenedUserBox,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenedUserBox {
    pub reward: GrantedReward,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GrantedReward {
    #[serde(default = "Vec::new")]
    pub action: Vec<RewardAction>,
}

/// Ordered action keys granted by one resolved box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionResult {
    pub action_keys: Vec<ActionKey>,
    /// The raw granted actions, kept for display mapping
    pub actions: Vec<RewardAction>,
}

impl ResolutionResult {
    /// Extract the granted action keys from an OpenUserBox payload.
    /// A payload with no `openUserBox` entry is an invalid response;
    /// callers must not assume partial success.
    pub fn from_open_data(data: OpenUserBoxData) -> Result<Self> {
        let payload = data.open_user_box.ok_or_else(|| {
            Error::InvalidResponse("openUserBox missing from mutation response".to_string())
        })?;
        let actions = payload.user_box.reward.action;
        let action_keys = actions.iter().map(RewardAction::key).collect();
        Ok(ResolutionResult {
            action_keys,
            actions,
        })
    }

    pub fn contains(&self, key: &ActionKey) -> bool {
        self.action_keys.contains(key)
    }
}

impl PartialEq for RewardAction {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RewardAction {}
