//! Inventory profit and liquidity aggregations

use chrono::NaiveDate;
use mindstock_domain::constants::{LOW_LIQUIDITY_THRESHOLD_DAYS, PERFORMER_LIMIT};
use mindstock_domain::{
    AgingItem, CashFlowPoint, InventoryItem, InventorySummary, ItemPerformance, ItemStatus,
    SeriesRevenue, SeriesRoi,
};

/// Headline metrics over the whole collection
///
/// The total percent gain includes unrealized gains:
/// (sales + unrealized sales - expenses) / expenses, guarded to 0.0 when
/// nothing has been spent.
pub fn inventory_summary(items: &[&InventoryItem]) -> InventorySummary {
    let total_expenses: f64 = items.iter().map(|i| i.purchase_price).sum();
    let total_sales: f64 = sold(items).map(|i| i.resale_price).sum();
    let unrealized_sales: f64 = available(items).map(|i| i.resale_price).sum();
    let unrealized_cost: f64 = available(items).map(|i| i.purchase_price).sum();

    let total_percent_gain = if total_expenses > 0.0 {
        (total_sales + unrealized_sales - total_expenses) / total_expenses * 100.0
    } else {
        0.0
    };

    InventorySummary {
        total_sales,
        total_expenses,
        unrealized_sales,
        unrealized_profit: unrealized_sales - unrealized_cost,
        total_percent_gain,
    }
}

/// ROI per series over sold items, best gain first
///
/// A series whose sold items cost nothing has an undefined ratio and
/// reports 0.0 rather than poisoning the ordering.
pub fn roi_by_series(items: &[&InventoryItem]) -> Vec<SeriesRoi> {
    let mut rows: Vec<SeriesRoi> = Vec::new();

    for item in sold(items) {
        match rows.iter_mut().find(|row| row.series == item.series) {
            Some(row) => {
                row.total_cost += item.purchase_price;
                row.total_profit += item.profit();
            }
            None => rows.push(SeriesRoi {
                series: item.series.clone(),
                total_cost: item.purchase_price,
                total_profit: item.profit(),
                percent_gain: 0.0,
            }),
        }
    }

    for row in &mut rows {
        row.percent_gain = if row.total_cost > 0.0 {
            row.total_profit / row.total_cost * 100.0
        } else {
            0.0
        };
    }

    rows.sort_by(|a, b| b.percent_gain.total_cmp(&a.percent_gain));
    rows
}

/// The ten best-performing sold items by percent gain
pub fn top_performers(items: &[&InventoryItem]) -> Vec<ItemPerformance> {
    let mut rows = performance_rows(items);
    rows.sort_by(|a, b| b.percent_gain.total_cmp(&a.percent_gain));
    rows.truncate(PERFORMER_LIMIT);
    rows
}

/// The ten worst-performing sold items by percent gain
pub fn worst_performers(items: &[&InventoryItem]) -> Vec<ItemPerformance> {
    let mut rows = performance_rows(items);
    rows.sort_by(|a, b| a.percent_gain.total_cmp(&b.percent_gain));
    rows.truncate(PERFORMER_LIMIT);
    rows
}

/// Signed cash events over time with a running cumulative sum
///
/// Every purchase is an outflow at its purchase date; every sale with a
/// recorded selling date is an inflow. The date sort is stable so events
/// on the same day keep their input order, which makes re-running the
/// aggregation over the same collection deterministic.
pub fn cash_flow(items: &[&InventoryItem]) -> Vec<CashFlowPoint> {
    let mut events: Vec<(NaiveDate, f64)> = Vec::new();

    for item in items {
        events.push((item.purchase_date, -item.purchase_price));
    }
    for item in sold(items) {
        if let Some(date) = item.selling_date {
            events.push((date, item.resale_price));
        }
    }

    events.sort_by_key(|(date, _)| *date);

    let mut cumulative = 0.0;
    events
        .into_iter()
        .map(|(date, amount)| {
            cumulative += amount;
            CashFlowPoint { date, amount, cumulative }
        })
        .collect()
}

/// Revenue of sold items attributed per series
pub fn sales_by_series(items: &[&InventoryItem]) -> Vec<SeriesRevenue> {
    series_totals(sold(items).map(|item| (item.series.as_str(), item.resale_price)))
}

/// Resale value still held per series; empty exposure groups are dropped
pub fn unsold_exposure_by_series(items: &[&InventoryItem]) -> Vec<SeriesRevenue> {
    let mut rows = series_totals(available(items).map(|item| (item.series.as_str(), item.resale_price)));
    rows.retain(|row| row.amount > 0.0);
    rows
}

/// Available items held longer than the liquidity threshold, longest first
pub fn low_liquidity(items: &[&InventoryItem], today: NaiveDate) -> Vec<AgingItem> {
    let mut rows: Vec<AgingItem> = available(items)
        .filter_map(|item| {
            let days = item.days_in_inventory(today);
            (days > LOW_LIQUIDITY_THRESHOLD_DAYS).then(|| AgingItem {
                name: item.name.clone(),
                series: item.series.clone(),
                purchase_date: item.purchase_date,
                purchase_price: item.purchase_price,
                days_in_inventory: days,
            })
        })
        .collect();

    rows.sort_by_key(|row| std::cmp::Reverse(row.days_in_inventory));
    rows
}

/// Sold items as ranking rows; zero-cost items have no defined gain and
/// are left out rather than ranked at an arbitrary extreme
fn performance_rows(items: &[&InventoryItem]) -> Vec<ItemPerformance> {
    sold(items)
        .filter_map(|item| {
            item.percent_gain().map(|percent_gain| ItemPerformance {
                name: item.name.clone(),
                series: item.series.clone(),
                purchase_price: item.purchase_price,
                resale_price: item.resale_price,
                percent_gain,
            })
        })
        .collect()
}

fn series_totals<'a>(pairs: impl Iterator<Item = (&'a str, f64)>) -> Vec<SeriesRevenue> {
    let mut rows: Vec<SeriesRevenue> = Vec::new();
    for (series, amount) in pairs {
        match rows.iter_mut().find(|row| row.series == series) {
            Some(row) => row.amount += amount,
            None => rows.push(SeriesRevenue { series: series.to_string(), amount }),
        }
    }
    rows
}

fn sold<'a>(items: &'a [&'a InventoryItem]) -> impl Iterator<Item = &'a InventoryItem> {
    items.iter().copied().filter(|item| item.status == ItemStatus::Sold)
}

fn available<'a>(items: &'a [&'a InventoryItem]) -> impl Iterator<Item = &'a InventoryItem> {
    items.iter().copied().filter(|item| item.status == ItemStatus::Available)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn item(
        id: u32,
        series: &str,
        purchase: f64,
        resale: f64,
        status: ItemStatus,
        purchase_date: &str,
        selling_date: Option<&str>,
    ) -> InventoryItem {
        InventoryItem {
            id,
            name: format!("Fig {id}"),
            series: series.to_string(),
            purchase_date: date(purchase_date),
            purchase_price: purchase,
            resale_price: resale,
            status,
            image: None,
            selling_date: selling_date.map(date),
        }
    }

    #[test]
    fn summary_includes_unrealized_gains() {
        let sold = item(1, "A", 100.0, 150.0, ItemStatus::Sold, "2024-01-01", Some("2024-02-01"));
        let held = item(2, "A", 50.0, 80.0, ItemStatus::Available, "2024-01-15", None);

        let summary = inventory_summary(&[&sold, &held]);
        assert_eq!(summary.total_sales, 150.0);
        assert_eq!(summary.total_expenses, 150.0);
        assert_eq!(summary.unrealized_sales, 80.0);
        assert_eq!(summary.unrealized_profit, 30.0);
        // (150 + 80 - 150) / 150
        assert!((summary.total_percent_gain - 53.333_333_333_333_336).abs() < 1e-9);
    }

    #[test]
    fn summary_guards_zero_expenses() {
        assert_eq!(inventory_summary(&[]).total_percent_gain, 0.0);
    }

    #[test]
    fn series_roi_sums_cost_and_profit() {
        let a = item(1, "X", 100.0, 150.0, ItemStatus::Sold, "2024-01-01", Some("2024-02-01"));
        let b = item(2, "X", 200.0, 180.0, ItemStatus::Sold, "2024-01-02", Some("2024-02-02"));
        let held = item(3, "X", 999.0, 999.0, ItemStatus::Available, "2024-01-03", None);

        let rows = roi_by_series(&[&a, &b, &held]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].series, "X");
        assert_eq!(rows[0].total_cost, 300.0);
        assert_eq!(rows[0].total_profit, 30.0);
        assert!((rows[0].percent_gain - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_cost_series_reports_zero_gain() {
        let free = item(1, "Promo", 0.0, 40.0, ItemStatus::Sold, "2024-01-01", Some("2024-02-01"));
        let rows = roi_by_series(&[&free]);
        assert_eq!(rows[0].percent_gain, 0.0);
    }

    #[test]
    fn performer_rankings_skip_zero_cost_items_and_cap_at_ten() {
        let mut items = Vec::new();
        for id in 1..=12 {
            items.push(item(
                id,
                "S",
                100.0,
                100.0 + f64::from(id),
                ItemStatus::Sold,
                "2024-01-01",
                Some("2024-02-01"),
            ));
        }
        items.push(item(13, "S", 0.0, 50.0, ItemStatus::Sold, "2024-01-01", Some("2024-02-01")));
        let refs: Vec<&InventoryItem> = items.iter().collect();

        let top = top_performers(&refs);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].name, "Fig 12");
        assert!(top.iter().all(|row| row.purchase_price > 0.0));

        let worst = worst_performers(&refs);
        assert_eq!(worst.len(), 10);
        assert_eq!(worst[0].name, "Fig 1");
    }

    #[test]
    fn cash_flow_is_date_sorted_stable_and_cumulative() {
        let a = item(1, "A", 100.0, 150.0, ItemStatus::Sold, "2024-01-01", Some("2024-01-10"));
        let b = item(2, "A", 30.0, 60.0, ItemStatus::Available, "2024-01-10", None);

        let points = cash_flow(&[&a, &b]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].date, date("2024-01-01"));
        assert_eq!(points[0].amount, -100.0);
        // equal dates keep input order: all purchases precede the sale
        assert_eq!(points[1].date, date("2024-01-10"));
        assert_eq!(points[1].amount, -30.0);
        assert_eq!(points[2].amount, 150.0);
        assert_eq!(points[2].cumulative, 20.0);

        // re-running over the same collection yields the same series
        assert_eq!(cash_flow(&[&a, &b]), points);
    }

    #[test]
    fn exposure_drops_empty_groups_and_liquidity_uses_the_year_threshold() {
        let aged = item(1, "Old", 10.0, 0.0, ItemStatus::Available, "2023-01-01", None);
        let fresh = item(2, "New", 10.0, 25.0, ItemStatus::Available, "2024-06-01", None);

        let exposure = unsold_exposure_by_series(&[&aged, &fresh]);
        assert_eq!(exposure.len(), 1);
        assert_eq!(exposure[0].series, "New");

        let today = date("2024-07-01");
        let aging = low_liquidity(&[&aged, &fresh], today);
        assert_eq!(aging.len(), 1);
        assert_eq!(aging[0].name, "Fig 1");
        assert_eq!(aging[0].days_in_inventory, 547);
    }
}
