//! Reward-box listing, selection, and resolution
//!
//! One `RewardWidget` backs one wheel/slot/loot widget instance. All
//! instances that show the same listing share one [`ResolvedRegistry`]
//! so a box resolved by any of them is never re-offered.

use crate::registry::ResolvedRegistry;
use ambet_core::{
    BoxStatus, BoxType, Error, ResolutionResult, Result, RewardOption, UserBox, UserBoxId,
};
use ambet_networking::{api, AmbetClient};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Resolution state of the widget's current attempt.
///
/// `Idle → Resolving → {Won | NoMatch | NetworkFailed}`; the terminal
/// states all allow a new selection/attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinState {
    Idle,
    /// Mutation in flight; the triggering affordance stays disabled
    Resolving,
    /// Index into the reward options captured at selection time
    Won(usize),
    NoMatch,
    NetworkFailed,
}

/// The winning option, correlated client-side from the listing snapshot
#[derive(Debug, Clone)]
pub struct WonReward {
    pub user_box_id: UserBoxId,
    /// Position of the winning option in the box's declared order
    pub index: usize,
    pub option: RewardOption,
}

/// Snapshot taken when a box is selected, before resolution.
/// Winner determination runs against this, not against a re-fetch.
#[derive(Debug, Clone)]
struct Selection {
    user_box_id: UserBoxId,
    options: Vec<RewardOption>,
}

/// One widget instance: filtered listing + selection + spin state
pub struct RewardWidget {
    box_types: HashSet<BoxType>,
    content_id: Option<String>,
    registry: ResolvedRegistry,
    boxes: Vec<UserBox>,
    selection: Option<Selection>,
    state: SpinState,
}

impl RewardWidget {
    pub fn new(box_types: impl IntoIterator<Item = BoxType>, registry: ResolvedRegistry) -> Self {
        Self {
            box_types: box_types.into_iter().collect(),
            content_id: None,
            registry,
            boxes: Vec::new(),
            selection: None,
            state: SpinState::Idle,
        }
    }

    /// Wheel-of-fortune widget
    pub fn wheel(registry: ResolvedRegistry) -> Self {
        Self::new([BoxType::WheelOfFortune], registry)
    }

    /// Loot/mystery box widget
    pub fn loot(registry: ResolvedRegistry) -> Self {
        Self::new([BoxType::LootBox, BoxType::MysteryBox], registry)
    }

    /// Restrict the listing to one campaign's content id (the slot
    /// machine embeds one widget per campaign)
    pub fn with_content_filter(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = Some(content_id.into());
        self
    }

    /// Replace the listing with a fresh fetch result, applying the
    /// status/type/registry filters. An empty outcome is valid and
    /// distinct from a fetch failure (which never reaches this point).
    pub fn ingest(&mut self, boxes: Vec<UserBox>) {
        self.boxes = boxes
            .into_iter()
            .filter(|b| b.status == BoxStatus::Active)
            .filter(|b| self.box_types.contains(&b.box_info.box_type))
            .filter(|b| match &self.content_id {
                Some(id) => b.box_info.content_id.as_deref() == Some(id.as_str()),
                None => true,
            })
            .filter(|b| !self.registry.is_resolved(&b.user_box_id))
            .collect();

        // Drop a selection whose box is no longer offered
        if let Some(selection) = &self.selection {
            if !self
                .boxes
                .iter()
                .any(|b| b.user_box_id == selection.user_box_id)
            {
                self.selection = None;
            }
        }
        debug!("Listing now offers {} boxes", self.boxes.len());
    }

    pub fn boxes(&self) -> &[UserBox] {
        &self.boxes
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn state(&self) -> &SpinState {
        &self.state
    }

    pub fn registry(&self) -> &ResolvedRegistry {
        &self.registry
    }

    /// Select one listed box. Pure local transition; snapshots the
    /// reward options for later winner determination.
    pub fn select(&mut self, index: usize) -> Result<&UserBox> {
        if self.state == SpinState::Resolving {
            return Err(Error::InvalidState(
                "cannot change selection while a resolution is in flight".to_string(),
            ));
        }
        let chosen = self.boxes.get(index).ok_or_else(|| {
            Error::InvalidState(format!(
                "selection index {} out of range ({} boxes listed)",
                index,
                self.boxes.len()
            ))
        })?;
        self.selection = Some(Selection {
            user_box_id: chosen.user_box_id.clone(),
            options: chosen.box_info.rewards.clone(),
        });
        self.state = SpinState::Idle;
        Ok(chosen)
    }

    /// Select the first listed box, if any (slot-machine behaviour)
    pub fn select_first(&mut self) -> Option<&UserBox> {
        if self.boxes.is_empty() || self.state == SpinState::Resolving {
            return None;
        }
        self.select(0).ok()
    }

    pub fn selected_box_id(&self) -> Option<&UserBoxId> {
        self.selection.as_ref().map(|s| &s.user_box_id)
    }

    /// Enter the `Resolving` state and hand back the id to resolve.
    ///
    /// Rejected while another resolution for this widget is in flight;
    /// this is the disabled-affordance rule, not a queue.
    pub fn begin(&mut self) -> Result<UserBoxId> {
        if self.state == SpinState::Resolving {
            return Err(Error::InvalidState(
                "a resolution is already in flight".to_string(),
            ));
        }
        let selection = self.selection.as_ref().ok_or_else(|| {
            Error::InvalidState("no box selected".to_string())
        })?;
        self.state = SpinState::Resolving;
        Ok(selection.user_box_id.clone())
    }

    /// Settle the in-flight resolution with the mutation outcome.
    ///
    /// On a structural match the box id enters the registry and leaves
    /// the listing exactly once. On `NoMatch` or a failed call the box
    /// stays listed and selectable so a retry can attempt it again.
    pub fn settle(&mut self, result: Result<ResolutionResult>) -> Result<WonReward> {
        if self.state != SpinState::Resolving {
            return Err(Error::InvalidState(
                "settle called with no resolution in flight".to_string(),
            ));
        }

        let granted = match result {
            Ok(granted) => granted,
            Err(err) => {
                warn!("Resolution failed: {}", err);
                self.state = SpinState::NetworkFailed;
                return Err(err);
            }
        };

        // The selection is only taken once the call has come back, so
        // a failure path above leaves it intact for a retry.
        let selection = self.selection.take().ok_or_else(|| {
            Error::InvalidState("resolution settled without a selection".to_string())
        })?;

        // First structural match in the original option order wins
        let winner = selection.options.iter().position(|option| {
            option
                .key()
                .map(|key| granted.contains(&key))
                .unwrap_or(false)
        });

        let Some(index) = winner else {
            warn!(
                "No matching reward found for awarded actions: {:?}",
                granted.action_keys
            );
            self.state = SpinState::NoMatch;
            return Err(Error::NoMatchingReward(granted.action_keys));
        };

        // Check-then-mark stays adjacent: no await between the registry
        // write and the listing removal.
        self.registry.mark_resolved(&selection.user_box_id);
        self.boxes
            .retain(|b| b.user_box_id != selection.user_box_id);
        self.state = SpinState::Won(index);

        debug!(
            "Box {} resolved to option {}",
            selection.user_box_id, index
        );
        Ok(WonReward {
            user_box_id: selection.user_box_id,
            index,
            option: selection.options[index].clone(),
        })
    }

    /// Refresh the listing from the API
    pub async fn refresh(&mut self, client: &AmbetClient) -> Result<()> {
        let boxes = api::fetch_user_boxes(client).await?;
        self.ingest(boxes);
        Ok(())
    }

    /// Full resolution round-trip for the current selection
    pub async fn resolve_selected(&mut self, client: &AmbetClient) -> Result<WonReward> {
        let user_box_id = self.begin()?;
        let result = api::open_box(client, &user_box_id).await;
        self.settle(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambet_core::{
        ActionKey, OpenUserBoxData, RewardAction, UserBoxConnectionData,
    };

    fn bonus_option(bonus_id: &str) -> RewardOption {
        RewardOption {
            action: vec![RewardAction::Bonus {
                bonus_id: bonus_id.to_string(),
                bonus: None,
            }],
            probability: None,
        }
    }

    fn wheel_box(user_box_id: &str, rewards: Vec<RewardOption>) -> UserBox {
        serde_json::from_value(serde_json::json!({
            "userBoxId": user_box_id,
            "status": "ACTIVE",
            "box": { "type": "WHEEL_OF_FORTUNE" }
        }))
        .map(|mut b: UserBox| {
            b.box_info.rewards = rewards;
            b
        })
        .unwrap()
    }

    fn granted(keys: &[&str]) -> ResolutionResult {
        ResolutionResult {
            action_keys: keys.iter().map(|k| ActionKey::new(*k)).collect(),
            actions: Vec::new(),
        }
    }

    #[test]
    fn test_ingest_filters_status_type_and_registry() {
        let registry = ResolvedRegistry::new();
        registry.mark_resolved(&UserBoxId::new("ub-resolved"));
        let mut widget = RewardWidget::wheel(registry);

        let boxes: Vec<UserBox> = vec![
            wheel_box("ub-1", vec![bonus_option("b-1")]),
            serde_json::from_value(serde_json::json!({
                "userBoxId": "ub-2",
                "status": "OPENED",
                "box": { "type": "WHEEL_OF_FORTUNE" }
            }))
            .unwrap(),
            serde_json::from_value(serde_json::json!({
                "userBoxId": "ub-3",
                "status": "ACTIVE",
                "box": { "type": "LOOT_BOX" }
            }))
            .unwrap(),
            wheel_box("ub-resolved", vec![bonus_option("b-2")]),
        ];
        widget.ingest(boxes);

        let listed: Vec<&str> = widget
            .boxes()
            .iter()
            .map(|b| b.user_box_id.as_str())
            .collect();
        assert_eq!(listed, vec!["ub-1"]);
    }

    #[test]
    fn test_winner_is_first_structural_match_in_option_order() {
        let mut widget = RewardWidget::wheel(ResolvedRegistry::new());
        widget.ingest(vec![wheel_box(
            "ub-1",
            vec![bonus_option("1"), bonus_option("2"), bonus_option("3")],
        )]);
        widget.select(0).unwrap();
        widget.begin().unwrap();

        let won = widget.settle(Ok(granted(&["2"]))).unwrap();
        assert_eq!(won.index, 1);
        assert_eq!(widget.state(), &SpinState::Won(1));
    }

    #[test]
    fn test_won_marks_registry_and_removes_listing_exactly_once() {
        let registry = ResolvedRegistry::new();
        let mut widget = RewardWidget::wheel(registry.clone());
        widget.ingest(vec![
            wheel_box("ub-1", vec![bonus_option("bonus-7")]),
            wheel_box("ub-2", vec![bonus_option("bonus-8")]),
        ]);
        widget.select(0).unwrap();
        widget.begin().unwrap();
        let won = widget.settle(Ok(granted(&["bonus-7"]))).unwrap();

        assert_eq!(won.user_box_id, UserBoxId::new("ub-1"));
        assert!(registry.is_resolved(&UserBoxId::new("ub-1")));
        assert_eq!(widget.boxes().len(), 1);
        assert_eq!(registry.len(), 1);

        // The resolved box has no affordance left: no selection points
        // at it, and a second attempt cannot be started for it.
        assert!(widget.selected_box_id().is_none());
        assert!(widget.begin().is_err());

        // Re-ingesting the stale listing does not resurrect it
        widget.ingest(vec![
            wheel_box("ub-1", vec![bonus_option("bonus-7")]),
            wheel_box("ub-2", vec![bonus_option("bonus-8")]),
        ]);
        assert_eq!(widget.boxes().len(), 1);
        assert_eq!(widget.boxes()[0].user_box_id, UserBoxId::new("ub-2"));
    }

    #[test]
    fn test_no_match_keeps_box_listed_and_registry_unchanged() {
        let registry = ResolvedRegistry::new();
        let mut widget = RewardWidget::wheel(registry.clone());
        widget.ingest(vec![wheel_box("ub-1", vec![bonus_option("bonus-7")])]);
        widget.select(0).unwrap();
        widget.begin().unwrap();

        let result = widget.settle(Ok(granted(&["unrelated-key"])));
        assert!(matches!(result, Err(Error::NoMatchingReward(_))));
        assert_eq!(widget.state(), &SpinState::NoMatch);
        assert_eq!(widget.boxes().len(), 1);
        assert!(registry.is_empty());
        // Selection was reset; a fresh select is required
        assert!(widget.selected_box_id().is_none());
        assert!(widget.select(0).is_ok());
    }

    #[test]
    fn test_network_failure_keeps_selection_for_retry() {
        let mut widget = RewardWidget::wheel(ResolvedRegistry::new());
        widget.ingest(vec![wheel_box("ub-1", vec![bonus_option("bonus-7")])]);
        widget.select(0).unwrap();
        widget.begin().unwrap();

        let result = widget.settle(Err(Error::NetworkError("boom".to_string())));
        assert!(matches!(result, Err(Error::NetworkError(_))));
        assert_eq!(widget.state(), &SpinState::NetworkFailed);
        assert_eq!(widget.boxes().len(), 1);

        // Same selection can be retried immediately
        let id = widget.begin().unwrap();
        assert_eq!(id, UserBoxId::new("ub-1"));
        let won = widget.settle(Ok(granted(&["bonus-7"]))).unwrap();
        assert_eq!(won.index, 0);
    }

    #[test]
    fn test_begin_rejected_while_resolving() {
        let mut widget = RewardWidget::wheel(ResolvedRegistry::new());
        widget.ingest(vec![wheel_box("ub-1", vec![bonus_option("bonus-7")])]);
        widget.select(0).unwrap();
        widget.begin().unwrap();

        assert!(matches!(widget.begin(), Err(Error::InvalidState(_))));
        assert!(matches!(widget.select(0), Err(Error::InvalidState(_))));
    }

    #[test]
    fn test_loot_widget_accepts_both_loot_and_mystery() {
        let mut widget = RewardWidget::loot(ResolvedRegistry::new());
        let boxes: Vec<UserBox> = serde_json::from_value(serde_json::json!([
            {"userBoxId": "ub-l", "status": "ACTIVE", "box": {"type": "LOOT_BOX"}},
            {"userBoxId": "ub-m", "status": "ACTIVE", "box": {"type": "MYSTERY_BOX"}},
            {"userBoxId": "ub-w", "status": "ACTIVE", "box": {"type": "WHEEL_OF_FORTUNE"}}
        ]))
        .unwrap();
        widget.ingest(boxes);
        assert_eq!(widget.boxes().len(), 2);
    }

    #[test]
    fn test_content_filter() {
        let mut widget =
            RewardWidget::wheel(ResolvedRegistry::new()).with_content_filter("summer-campaign");
        let boxes: Vec<UserBox> = serde_json::from_value(serde_json::json!([
            {"userBoxId": "ub-1", "status": "ACTIVE",
             "box": {"type": "WHEEL_OF_FORTUNE", "contentId": "summer-campaign"}},
            {"userBoxId": "ub-2", "status": "ACTIVE",
             "box": {"type": "WHEEL_OF_FORTUNE", "contentId": "winter-campaign"}}
        ]))
        .unwrap();
        widget.ingest(boxes);
        assert_eq!(widget.boxes().len(), 1);
        assert_eq!(widget.boxes()[0].user_box_id, UserBoxId::new("ub-1"));
    }

    // End-to-end over synthetic envelopes: list, select, resolve,
    // verify the registry filters the next listing.
    #[test]
    fn test_full_round_trip_from_envelopes() {
        let listing: UserBoxConnectionData = serde_json::from_str(
            r#"{
                "userBoxConnection": {
                    "edges": [{
                        "node": {
                            "userBoxId": "b1",
                            "status": "ACTIVE",
                            "box": {
                                "type": "WHEEL_OF_FORTUNE",
                                "rewards": [{"action": [{"bonusId": "bonus-7"}]}]
                            }
                        }
                    }]
                }
            }"#,
        )
        .unwrap();

        let registry = ResolvedRegistry::new();
        let mut widget = RewardWidget::wheel(registry.clone());
        widget.ingest(listing.user_box_connection.into_nodes());
        assert_eq!(widget.boxes().len(), 1);

        widget.select(0).unwrap();
        assert_eq!(widget.begin().unwrap(), UserBoxId::new("b1"));

        let open_data: OpenUserBoxData = serde_json::from_str(
            r#"{
                "openUserBox": {
                    "userBox": {"reward": {"action": [{"bonusId": "bonus-7"}]}}
                }
            }"#,
        )
        .unwrap();
        let result = ResolutionResult::from_open_data(open_data).unwrap();
        let won = widget.settle(Ok(result)).unwrap();

        assert_eq!(won.index, 0);
        assert!(registry.is_resolved(&UserBoxId::new("b1")));

        // A subsequent listing fetch still contains b1 server-side;
        // the widget must omit it.
        let stale: UserBoxConnectionData = serde_json::from_str(
            r#"{
                "userBoxConnection": {
                    "edges": [{
                        "node": {
                            "userBoxId": "b1",
                            "status": "ACTIVE",
                            "box": {
                                "type": "WHEEL_OF_FORTUNE",
                                "rewards": [{"action": [{"bonusId": "bonus-7"}]}]
                            }
                        }
                    }]
                }
            }"#,
        )
        .unwrap();
        widget.ingest(stale.user_box_connection.into_nodes());
        assert!(widget.is_empty());
    }
}
