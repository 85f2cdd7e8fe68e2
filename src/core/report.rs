use crate::domain::RecordStore;

/// Read-only profitability totals over the whole store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfitabilityReport {
    /// Sum of inventory movement totals; returns contribute negatively.
    pub total_inventory_cost: i64,
    /// Sum of sale record totals; returns contribute negatively.
    pub total_sales_revenue: i64,
    pub profit: i64,
}

impl ProfitabilityReport {
    pub fn compute(store: &RecordStore) -> Self {
        let total_inventory_cost: i64 = store.inventory.iter().map(|m| m.total).sum();
        let total_sales_revenue: i64 = store.sales.iter().map(|s| s.total).sum();
        Self {
            total_inventory_cost,
            total_sales_revenue,
            profit: total_sales_revenue - total_inventory_cost,
        }
    }
}
