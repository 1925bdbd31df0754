//! Shop operations: list items, purchase

use crate::AmbetClient;
use ambet_core::{
    Error, PurchaseShopItemsData, Result, ShopItem, ShopItemConnectionData, ShopTransaction,
};
use tracing::debug;

/// Category shown by the store widget
pub const SHOP_CATEGORY_ID: &str = "ycGrHNho6Y4cSh60pN3O";

/// Error message the backend uses for an insufficient balance
const NOT_ENOUGH_MONEY: &str = "NOT_ENOUGH_MONEY";

const SHOP_ITEMS_QUERY: &str = r#"
    query ShopItemConnection($shopItemCategoryId: ID!) {
      shopItemConnection(
        shopItemCategoryId: $shopItemCategoryId,
        orderBy: [
          {
            field: order,
            direction: ASCENDING
          }
        ]
      ) {
        edges {
          node {
            price {
              value
            }
            description
            id
            contentId
          }
        }
      }
    }
"#;

const PURCHASE_ITEMS_MUTATION: &str = r#"
    mutation PurchaseShopItems($input: PurchaseShopItemsInput!) {
      purchaseShopItems(input: $input) {
        shopTransaction {
          userId
          shopItems {
            id
          }
        }
      }
    }
"#;

/// Fetch the store items for the fixed widget category, server order
pub async fn fetch_shop_items(client: &AmbetClient) -> Result<Vec<ShopItem>> {
    let envelope = client
        .execute(
            SHOP_ITEMS_QUERY,
            serde_json::json!({ "shopItemCategoryId": SHOP_CATEGORY_ID }),
        )
        .await?;
    if envelope.has_errors() {
        return Err(Error::InvalidResponse(envelope.error_messages()));
    }
    let data: ShopItemConnectionData = envelope.data_as()?;
    let items = data.shop_item_connection.into_nodes();
    debug!("Fetched {} shop items", items.len());
    Ok(items)
}

/// Purchase one or more items by id.
///
/// The backend reports business failures through envelope errors;
/// `NOT_ENOUGH_MONEY` gets its own variant so the widget can style it
/// differently from other failures.
pub async fn purchase_items(
    client: &AmbetClient,
    shop_item_ids: &[String],
) -> Result<ShopTransaction> {
    let envelope = client
        .execute(
            PURCHASE_ITEMS_MUTATION,
            serde_json::json!({ "input": { "shopItemIds": shop_item_ids } }),
        )
        .await?;

    if let Some(first) = envelope.errors.first() {
        if first.message == NOT_ENOUGH_MONEY {
            return Err(Error::InsufficientFunds);
        }
        return Err(Error::PurchaseError(first.message.clone()));
    }

    let data: PurchaseShopItemsData = envelope.data_as()?;
    let payload = data.purchase_shop_items.ok_or_else(|| {
        Error::InvalidResponse("purchaseShopItems missing from mutation response".to_string())
    })?;
    debug!(
        "Purchased {} items for user {}",
        payload.shop_transaction.shop_items.len(),
        payload.shop_transaction.user_id
    );
    Ok(payload.shop_transaction)
}
