//! Aggregation over the normalized item set: summary counts, category
//! groups, and the two priority lists.

use std::collections::BTreeMap;

use crate::types::{InProgressItem, InventoryItem, OrderListItem, StatusKind, Summary};

/// Count items per status. The three kinds partition the set, so
/// `total_items` always equals the sum of the other three counts.
pub fn summarize(items: &[InventoryItem]) -> Summary {
    let mut summary = Summary {
        total_items: items.len(),
        needs_order: 0,
        in_progress: 0,
        completed: 0,
    };
    for item in items {
        match item.status_kind {
            StatusKind::Pending => summary.needs_order += 1,
            StatusKind::InProgress => summary.in_progress += 1,
            StatusKind::Completed => summary.completed += 1,
        }
    }
    summary
}

/// Partition items by category and order each group by urgency: pending
/// first, then in-progress, then completed, with ascending stock ratio
/// breaking ties.
pub fn group_by_category(items: &[InventoryItem]) -> BTreeMap<String, Vec<InventoryItem>> {
    let mut groups: BTreeMap<String, Vec<InventoryItem>> = BTreeMap::new();
    for item in items {
        groups
            .entry(item.category.clone())
            .or_default()
            .push(item.clone());
    }
    for group in groups.values_mut() {
        // sort_by is stable: items with identical keys keep sheet order.
        group.sort_by(|a, b| {
            a.status_kind
                .urgency_rank()
                .cmp(&b.status_kind.urgency_rank())
                .then(a.stock_ratio.cmp(&b.stock_ratio))
        });
    }
    groups
}

/// Build the pending-order and in-progress lists in their reduced shapes.
pub fn build_priority_lists(items: &[InventoryItem]) -> (Vec<OrderListItem>, Vec<InProgressItem>) {
    let order_list = items
        .iter()
        .filter(|item| item.status_kind == StatusKind::Pending)
        .map(|item| OrderListItem {
            name: item.name.clone(),
            category: item.category.clone(),
            remaining: item.remaining,
            order_line: item.order_line,
            // Raw gap, negative when overstocked. The consumer decides how
            // to present it.
            shortage: item.ideal - item.remaining,
            unit: item.unit.clone(),
        })
        .collect();

    let in_progress_list = items
        .iter()
        .filter(|item| item.status_kind == StatusKind::InProgress)
        .map(|item| InProgressItem {
            name: item.name.clone(),
            category: item.category.clone(),
            remaining: item.remaining,
            order_line: item.order_line,
            unit: item.unit.clone(),
        })
        .collect();

    (order_list, in_progress_list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, status: StatusKind, remaining: f64, ideal: f64) -> InventoryItem {
        let stock_ratio = if ideal > 0.0 {
            (remaining / ideal * 100.0).round() as i64
        } else {
            100
        };
        InventoryItem {
            name: name.to_string(),
            category: "その他".to_string(),
            remaining,
            ideal,
            initial: 0.0,
            order_line: 0.0,
            purchase_status: String::new(),
            status_kind: status,
            stock_ratio,
            unit: "個".to_string(),
        }
    }

    #[test]
    fn summary_is_a_closed_partition() {
        let items = vec![
            item("a", StatusKind::Pending, 1.0, 10.0),
            item("b", StatusKind::InProgress, 2.0, 10.0),
            item("c", StatusKind::Completed, 9.0, 10.0),
            item("d", StatusKind::Completed, 5.0, 10.0),
        ];
        let summary = summarize(&items);
        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.needs_order, 1);
        assert_eq!(summary.in_progress, 1);
        assert_eq!(summary.completed, 2);
        assert_eq!(
            summary.total_items,
            summary.needs_order + summary.in_progress + summary.completed
        );
    }

    #[test]
    fn summary_of_empty_set() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_items, 0);
        assert_eq!(
            summary.total_items,
            summary.needs_order + summary.in_progress + summary.completed
        );
    }

    #[test]
    fn group_ordering_status_beats_ratio() {
        let items = vec![
            item("done-high", StatusKind::Completed, 8.0, 10.0), // ratio 80
            item("pending-high", StatusKind::Pending, 9.0, 10.0), // ratio 90
            item("progress-low", StatusKind::InProgress, 1.0, 10.0), // ratio 10
        ];
        let groups = group_by_category(&items);
        let group = &groups["その他"];
        let names: Vec<&str> = group.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["pending-high", "progress-low", "done-high"]);
    }

    #[test]
    fn group_ordering_ratio_breaks_status_ties() {
        let items = vec![
            item("p-90", StatusKind::Pending, 9.0, 10.0),
            item("p-10", StatusKind::Pending, 1.0, 10.0),
            item("p-50", StatusKind::Pending, 5.0, 10.0),
        ];
        let groups = group_by_category(&items);
        let names: Vec<&str> = groups["その他"].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["p-10", "p-50", "p-90"]);
    }

    #[test]
    fn group_sort_is_stable_for_equal_keys() {
        let items = vec![
            item("first", StatusKind::Completed, 5.0, 10.0),
            item("second", StatusKind::Completed, 5.0, 10.0),
            item("third", StatusKind::Completed, 5.0, 10.0),
        ];
        let groups = group_by_category(&items);
        let names: Vec<&str> = groups["その他"].iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn shortage_is_never_clamped() {
        let items = vec![
            item("short", StatusKind::Pending, 3.0, 10.0),
            item("overstocked", StatusKind::Pending, 8.0, 5.0),
            item("in-flight", StatusKind::InProgress, 1.0, 4.0),
        ];
        let (order_list, in_progress_list) = build_priority_lists(&items);
        assert_eq!(order_list.len(), 2);
        assert_eq!(order_list[0].shortage, 7.0);
        assert_eq!(order_list[1].shortage, -3.0);
        assert_eq!(in_progress_list.len(), 1);
        assert_eq!(in_progress_list[0].name, "in-flight");
    }
}
