//! Shop/store models for the shopItemConnection query and the
//! purchaseShopItems mutation

use super::boxes::Connection;
use serde::Deserialize;

/// `data` payload of the ShopItemConnection query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItemConnectionData {
    pub shop_item_connection: Connection<ShopItem>,
}

/// One purchasable item, priced in loyalty points
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopItem {
    pub id: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content_id: Option<String>,
    pub price: ShopPrice,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShopPrice {
    pub value: f64,
}

/// `data` payload of the PurchaseShopItems mutation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseShopItemsData {
    #[serde(default)]
    pub purchase_shop_items: Option<PurchasePayload>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePayload {
    pub shop_transaction: ShopTransaction,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopTransaction {
    pub user_id: String,
    #[serde(default = "Vec::new")]
    pub shop_items: Vec<PurchasedItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PurchasedItem {
    pub id: String,
}
