// Display model of the route table sent to the browser

use serde::Serialize;

use super::Route;
use super::sort::{SortDirective, SortField};
use super::table::RouteTable;

pub const TABLE_TITLE: &str = "Действующие маршруты IPv4";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnHeader {
    pub field: SortField,
    pub label: &'static str,
    /// `↑`/`↓` on the active column, absent otherwise
    pub indicator: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub id: String,
    pub destination: String,
    pub gateway: String,
    pub interface: String,
    pub directly_connected: bool,
}

impl From<&Route> for RowView {
    fn from(route: &Route) -> Self {
        RowView {
            id: route.id.clone(),
            destination: route.destination(),
            gateway: route.gateway.clone(),
            interface: route.interface.clone(),
            directly_connected: route.is_directly_connected(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub title: &'static str,
    pub sort: SortDirective,
    pub columns: Vec<ColumnHeader>,
    pub rows: Vec<RowView>,
}

impl TableView {
    pub fn render(table: &RouteTable) -> Self {
        let sort = table.directive();

        let columns = SortField::ALL
            .iter()
            .map(|&field| ColumnHeader {
                field,
                label: column_label(field),
                indicator: sort.direction_of(field).map(|d| d.indicator()),
            })
            .collect();

        TableView {
            title: TABLE_TITLE,
            sort,
            columns,
            rows: table.projection().iter().map(RowView::from).collect(),
        }
    }
}

pub fn column_label(field: SortField) -> &'static str {
    match field {
        SortField::Address => "Адрес назначения",
        SortField::Gateway => "Шлюз",
        SortField::Interface => "Интерфейс",
    }
}
