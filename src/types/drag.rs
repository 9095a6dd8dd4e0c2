use serde::{Deserialize, Serialize, de::IgnoredAny};

use crate::model::OrderUpdate;

/// One entry of a reorder payload as produced by the drag-and-drop editor.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DragItem {
    pub id: String,
    #[serde(default)]
    pub order: Option<i32>,
}

/// Entry of a payload whose sequence alone decides the stored order. Any
/// `order` value is accepted and discarded, whatever its JSON type.
#[derive(Debug, Clone, Deserialize, utoipa::ToSchema)]
pub struct PositionedItem {
    pub id: String,
    #[serde(default)]
    #[schema(value_type = Option<f64>)]
    pub order: Option<IgnoredAny>,
}

/// Keeps each item's own `order`. `None` if any item has no `order`.
pub fn verbatim_orders(items: Vec<DragItem>) -> Option<Vec<OrderUpdate>> {
    items
        .into_iter()
        .map(|item| item.order.map(|order| OrderUpdate::new(item.id, order)))
        .collect()
}

/// Position in the payload wins: first item gets order 1.
pub fn positional_orders(items: Vec<PositionedItem>) -> Vec<OrderUpdate> {
    items
        .into_iter()
        .zip(1..)
        .map(|(item, order)| OrderUpdate::new(item.id, order))
        .collect()
}
