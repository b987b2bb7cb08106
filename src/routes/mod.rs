// Routes module - route records, IPv4 ordering and the sortable table

pub mod compare;
pub mod sort;
pub mod table;
pub mod view;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry of the IPv4 routing table as shown in the UI.
///
/// Addresses are kept as the strings they were supplied as; nothing is
/// validated before display, so malformed values must survive sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    /// Stable row key, unchanged by re-sorting
    #[serde(default = "new_route_id")]
    pub id: String,
    /// Network portion of the destination, dotted-quad
    pub address: String,
    /// CIDR prefix length
    pub mask_length: u8,
    /// Next hop, `0.0.0.0` for directly connected networks
    pub gateway: String,
    pub interface: String,
}

fn new_route_id() -> String {
    Uuid::new_v4().to_string()
}

impl Route {
    pub fn new(
        id: impl Into<String>,
        address: impl Into<String>,
        mask_length: u8,
        gateway: impl Into<String>,
        interface: impl Into<String>,
    ) -> Self {
        Route {
            id: id.into(),
            address: address.into(),
            mask_length,
            gateway: gateway.into(),
            interface: interface.into(),
        }
    }

    /// Destination in CIDR notation, e.g. `10.0.0.0/8`
    pub fn destination(&self) -> String {
        format!("{}/{}", self.address, self.mask_length)
    }

    pub fn is_directly_connected(&self) -> bool {
        self.gateway == "0.0.0.0"
    }
}

/// Built-in seed data used when the configuration supplies no routes.
pub fn sample_routes() -> Vec<Route> {
    vec![
        Route::new("1", "0.0.0.0", 0, "193.0.174.1", "Подключение Ethernet"),
        Route::new("2", "10.1.30.0", 24, "0.0.0.0", "Гостовая сеть"),
        Route::new("3", "192.168.1.0", 24, "0.0.0.0", "Домашняя сеть"),
        Route::new("4", "193.0.174.0", 24, "0.0.0.0", "Подключение Ethernet"),
        Route::new("5", "193.0.175.0", 25, "193.0.174.10", "Подключение Ethernet"),
        Route::new("6", "193.0.175.2", 32, "193.0.174.1", "Подключение Ethernet"),
        Route::new("7", "172.16.0.0", 16, "0.0.0.0", "Рабочая сеть"),
        Route::new("8", "10.0.0.0", 8, "10.0.0.1", "Корпоративная сеть"),
    ]
}
