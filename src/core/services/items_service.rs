use crate::domain::{Item, ItemKind, ItemTotals};

/// Values owned items into assets, liabilities and net worth.
pub struct ItemsService;

impl ItemsService {
    pub fn totals(items: &[Item]) -> ItemTotals {
        let (total_assets, total_liabilities) =
            items
                .iter()
                .fold((0.0, 0.0), |(assets, liabilities), item| match item.kind {
                    ItemKind::Asset => (assets + item.current_value, liabilities),
                    ItemKind::Liability => (assets, liabilities + item.current_value),
                    ItemKind::Neutral => (assets, liabilities),
                });
        tracing::debug!(
            count = items.len(),
            total_assets,
            total_liabilities,
            "valued owned items"
        );
        ItemTotals {
            total_assets,
            total_liabilities,
            net_worth: total_assets - total_liabilities,
        }
    }
}
