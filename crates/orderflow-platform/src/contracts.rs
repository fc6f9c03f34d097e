//! Message bodies exchanged between order callers and downstream consumers.
//!
//! Absent keys decode to zero values and unknown keys are ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateOrderRequest {
    pub user_id: String,
    pub item: String,
    pub quantity: i64,
    /// Smallest currency unit.
    pub total_price: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateOrderResponse {
    pub user_id: String,
    pub order_id: String,
    pub total_price: i64,
    pub create_order: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateOrderEvent {
    pub order_id: String,
    pub total_price: i64,
}

/// Payment update for an order. `status` is free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessPaymentData {
    pub order_id: String,
    pub status: String,
}
