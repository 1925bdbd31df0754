//! Maps reward actions onto the strings and style hooks the widgets
//! render. Nothing here talks to the network.

use ambet_core::{RewardAction, RewardOption};

/// Loyalty currency granted by point rewards
pub const LOYALTY_CURRENCY: &str = "LPABFE";
const LOYALTY_NAME: &str = "Bat Coin";
const LOYALTY_SHORT: &str = "BC";
const DEFAULT_CONTENT_CLASS: &str = "default-reward";
const MYSTERY_DESCRIPTION: &str = "Mystery Reward";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardKind {
    Bonus,
    Box,
    LoyaltyPoints,
}

/// Render-ready view of a single reward action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardDisplay {
    pub kind: RewardKind,
    /// Short label shown on the segment or reel cell
    pub name: String,
    pub description: String,
    /// CSS class hook derived from the reward's content id
    pub content_class: String,
}

pub fn display_for_action(action: &RewardAction) -> RewardDisplay {
    match action {
        RewardAction::Bonus { bonus, .. } => {
            let name = bonus
                .as_ref()
                .and_then(|b| b.name.clone())
                .unwrap_or_else(|| MYSTERY_DESCRIPTION.to_string());
            let description = bonus
                .as_ref()
                .and_then(|b| b.description.clone())
                .unwrap_or_else(|| name.clone());
            let content_class = bonus
                .as_ref()
                .and_then(|b| b.content_id.clone())
                .unwrap_or_else(|| DEFAULT_CONTENT_CLASS.to_string());
            RewardDisplay {
                kind: RewardKind::Bonus,
                name,
                description,
                content_class,
            }
        }
        RewardAction::GiveBox { box_content, .. } => {
            let name = box_content
                .as_ref()
                .and_then(|b| b.name.clone())
                .unwrap_or_else(|| MYSTERY_DESCRIPTION.to_string());
            let description = box_content
                .as_ref()
                .and_then(|b| b.description.clone())
                .unwrap_or_else(|| name.clone());
            let content_class = box_content
                .as_ref()
                .and_then(|b| b.content_id.clone())
                .unwrap_or_else(|| DEFAULT_CONTENT_CLASS.to_string());
            RewardDisplay {
                kind: RewardKind::Box,
                name,
                description,
                content_class,
            }
        }
        RewardAction::LoyaltyPoints {
            amount,
            currency_code,
        } => {
            let short = match currency_code.as_deref() {
                Some(LOYALTY_CURRENCY) | None => LOYALTY_SHORT,
                Some(other) => other,
            };
            let long = match currency_code.as_deref() {
                Some(LOYALTY_CURRENCY) | None => LOYALTY_NAME,
                Some(other) => other,
            };
            RewardDisplay {
                kind: RewardKind::LoyaltyPoints,
                name: format!("{} {}", amount, short),
                description: format!("{} {}", amount, long),
                content_class: "loyalty-points".to_string(),
            }
        }
    }
}

/// Text shown for a whole option. Falls back to a generic label when
/// the option carries no actions.
pub fn description_text(option: &RewardOption) -> String {
    option
        .action
        .first()
        .map(|action| display_for_action(action).description)
        .unwrap_or_else(|| MYSTERY_DESCRIPTION.to_string())
}

/// CSS class for a whole option.
pub fn content_class(option: &RewardOption) -> String {
    option
        .action
        .first()
        .map(|action| display_for_action(action).content_class)
        .unwrap_or_else(|| DEFAULT_CONTENT_CLASS.to_string())
}

/// Obscure another player's username in shared feeds: first and last
/// character kept, middle replaced. The current user sees their own
/// name unmasked.
pub fn mask_username(username: &str, current_user_id: &str, user_id: Option<&str>) -> String {
    if user_id == Some(current_user_id) {
        return username.to_string();
    }
    let chars: Vec<char> = username.chars().collect();
    if chars.len() <= 2 {
        return username.to_string();
    }
    let first = chars[0];
    let last = chars[chars.len() - 1];
    format!("{}*****{}", first, last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambet_core::RewardContent;

    fn bonus_action(name: Option<&str>, content_id: Option<&str>) -> RewardAction {
        RewardAction::Bonus {
            bonus_id: "b-1".to_string(),
            bonus: Some(RewardContent {
                name: name.map(str::to_string),
                description: name.map(|n| format!("{} description", n)),
                content_id: content_id.map(str::to_string),
            }),
        }
    }

    #[test]
    fn test_bonus_display_uses_content_fields() {
        let display = display_for_action(&bonus_action(Some("Free Spins"), Some("free-spins")));
        assert_eq!(display.kind, RewardKind::Bonus);
        assert_eq!(display.name, "Free Spins");
        assert_eq!(display.description, "Free Spins description");
        assert_eq!(display.content_class, "free-spins");
    }

    #[test]
    fn test_bonus_display_falls_back_when_unnamed() {
        let display = display_for_action(&RewardAction::Bonus {
            bonus_id: "b-2".to_string(),
            bonus: None,
        });
        assert_eq!(display.name, "Mystery Reward");
        assert_eq!(display.content_class, "default-reward");
    }

    #[test]
    fn test_loyalty_display_maps_currency() {
        let display = display_for_action(&RewardAction::LoyaltyPoints {
            amount: 150,
            currency_code: Some("LPABFE".to_string()),
        });
        assert_eq!(display.kind, RewardKind::LoyaltyPoints);
        assert_eq!(display.name, "150 BC");
        assert_eq!(display.description, "150 Bat Coin");
    }

    #[test]
    fn test_description_text_of_empty_option() {
        let option = RewardOption {
            action: vec![],
            probability: None,
        };
        assert_eq!(description_text(&option), "Mystery Reward");
        assert_eq!(content_class(&option), "default-reward");
    }

    #[test]
    fn test_mask_username() {
        assert_eq!(mask_username("GiorgiB", "u-1", Some("u-2")), "G*****B");
        assert_eq!(mask_username("GiorgiB", "u-1", Some("u-1")), "GiorgiB");
        assert_eq!(mask_username("ab", "u-1", Some("u-2")), "ab");
        assert_eq!(mask_username("x", "u-1", None), "x");
    }
}
