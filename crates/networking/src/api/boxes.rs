//! Reward-box operations: list active boxes, open one

use crate::AmbetClient;
use ambet_core::{
    OpenUserBoxData, ResolutionResult, Result, UserBox, UserBoxConnectionData, UserBoxId,
};
use tracing::debug;

/// Listing query. The reward selection spells out every union variant
/// so that each option carries both its identifying key and its
/// display metadata.
const USER_BOXES_QUERY: &str = r#"
    query GetUserBoxes($userId: ID) {
      userBoxConnection(userId: $userId, status: ACTIVE, last: 60) {
        edges {
          node {
            box {
              id
              type
              name
              description
              contentId
              rewards {
                action {
                  ... on GiveAndActivateBonusAction {
                    bonusId
                    bonus {
                      description
                      contentId
                    }
                  }
                  ... on GiveBonusAction {
                    bonusId
                    bonus {
                      description
                      contentId
                    }
                  }
                  ... on ActivateDepositBonusAction {
                    bonusId
                    bonus {
                      description
                      contentId
                    }
                  }
                  ... on GiveBoxAction {
                    boxId
                    box {
                      description
                      contentId
                    }
                  }
                  ... on GiveLoyaltyPointsAction {
                    amount
                    currencyCode
                  }
                }
                probability
              }
            }
            status
            userBoxId
          }
        }
      }
    }
"#;

/// Resolution mutation. Only the identifying keys are selected; the
/// winning option's display data comes from the listing snapshot.
const OPEN_USER_BOX_MUTATION: &str = r#"
    mutation OpenUserBox($input: OpenUserBoxInput!) {
      openUserBox(input: $input) {
        userBox {
          reward {
            action {
              ... on GiveBonusAction {
                bonusId
              }
              ... on GiveAndActivateBonusAction {
                bonusId
              }
              ... on ActivateDepositBonusAction {
                bonusId
              }
              ... on GiveBoxAction {
                boxId
              }
              ... on GiveLoyaltyPointsAction {
                amount
              }
            }
          }
        }
      }
    }
"#;

/// Fetch the raw box listing for the cookie-declared user.
///
/// No filtering happens here; status/type/registry filters belong to
/// the widget layer so an empty result stays distinguishable from a
/// fetch failure.
pub async fn fetch_user_boxes(client: &AmbetClient) -> Result<Vec<UserBox>> {
    let user_id = client.user_id()?;
    let envelope = client
        .execute(USER_BOXES_QUERY, serde_json::json!({ "userId": user_id }))
        .await?;
    let data: UserBoxConnectionData = envelope.data_as()?;
    let boxes = data.user_box_connection.into_nodes();
    debug!("Fetched {} user boxes", boxes.len());
    Ok(boxes)
}

/// Open one box and extract the ordered granted action keys
pub async fn open_box(client: &AmbetClient, user_box_id: &UserBoxId) -> Result<ResolutionResult> {
    debug!("Opening user box {}", user_box_id);
    let envelope = client
        .execute(
            OPEN_USER_BOX_MUTATION,
            serde_json::json!({ "input": { "userBoxId": user_box_id.as_str() } }),
        )
        .await?;
    let data: OpenUserBoxData = envelope.data_as()?;
    let result = ResolutionResult::from_open_data(data)?;
    debug!("Box {} granted keys {:?}", user_box_id, result.action_keys);
    Ok(result)
}
