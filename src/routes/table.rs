// Sortable route table: owns the routes, the directive and the projection

use std::sync::Arc;

use super::Route;
use super::sort::{SortDirective, SortField, sorted_projection};

/// State behind one rendered table.
///
/// The projection is rebuilt eagerly on every change to either input, so a
/// read after any mutation always reflects the latest routes and directive.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Arc<Vec<Route>>,
    directive: SortDirective,
    projection: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Arc<Vec<Route>>) -> Self {
        Self::with_directive(routes, SortDirective::default())
    }

    pub fn with_directive(routes: Arc<Vec<Route>>, directive: SortDirective) -> Self {
        let projection = sorted_projection(&routes, &directive);
        RouteTable {
            routes,
            directive,
            projection,
        }
    }

    #[cfg(test)]
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn directive(&self) -> SortDirective {
        self.directive
    }

    /// Rows in display order
    pub fn projection(&self) -> &[Route] {
        &self.projection
    }

    /// Column header activated
    pub fn toggle_sort(&mut self, field: SortField) -> SortDirective {
        let mut directive = self.directive;
        directive.toggle(field);
        tracing::debug!(
            "Sort {:?} -> {} {:?}",
            self.directive.field,
            field,
            directive.direction
        );
        self.set_directive(directive);
        directive
    }

    pub fn set_directive(&mut self, directive: SortDirective) {
        self.directive = directive;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.projection = sorted_projection(&self.routes, &self.directive);
    }
}
