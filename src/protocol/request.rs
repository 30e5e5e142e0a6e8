use serde::{Deserialize, Serialize};

use crate::inventory::{ComputerPayload, Inventory};
use crate::protocol::Response;

/// One remote-callable operation, tagged by its wire name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Request {
    GetComputers,
    GetComputer { id: String },
    AddComputer { payload: ComputerPayload },
    UpdateComputer { id: String, payload: ComputerPayload },
    DeleteComputer { id: String },
    SellComputer { id: String, quantity: i64 },
    ResupplyComputer { id: String, quantity: i64 },
    SearchComputers { query: String },
    GetComputersByPriceRange { min: f64, max: f64 },
    GetTotalInventoryValue,
    CheckLowStock,
    ClearLowStockNotifications,
    GetComputerDescription { id: String },
    SetComputerPrice { id: String, price: f64 },
    GetComputerQuantity { id: String },
    ListComputerBrands,
}

impl Request {
    /// Execute the operation against the inventory and wrap the outcome
    pub fn dispatch(self, inventory: &Inventory) -> Response {
        match self {
            Request::GetComputers => Response::from_result(inventory.list()),
            Request::GetComputer { id } => Response::from_result(inventory.get(&id)),
            Request::AddComputer { payload } => Response::from_result(inventory.add(payload)),
            Request::UpdateComputer { id, payload } => {
                Response::from_result(inventory.update(&id, payload))
            }
            Request::DeleteComputer { id } => Response::from_result(inventory.delete(&id)),
            Request::SellComputer { id, quantity } => {
                Response::from_result(inventory.sell(&id, quantity))
            }
            Request::ResupplyComputer { id, quantity } => {
                Response::from_result(inventory.resupply(&id, quantity))
            }
            Request::SearchComputers { query } => Response::from_result(inventory.search(&query)),
            Request::GetComputersByPriceRange { min, max } => {
                Response::from_result(inventory.by_price_range(min, max))
            }
            Request::GetTotalInventoryValue => Response::from_result(inventory.total_value()),
            Request::CheckLowStock => Response::from_result(inventory.check_low_stock()),
            Request::ClearLowStockNotifications => {
                Response::from_result(inventory.clear_low_stock_notifications())
            }
            Request::GetComputerDescription { id } => {
                Response::from_result(inventory.description(&id))
            }
            Request::SetComputerPrice { id, price } => {
                Response::from_result(inventory.set_price(&id, price))
            }
            Request::GetComputerQuantity { id } => Response::from_result(inventory.quantity(&id)),
            Request::ListComputerBrands => Response::from_result(inventory.brands()),
        }
    }
}
