use crate::orders::OrderRecord;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Агрегаты дашборда по отфильтрованному набору заказов.
///
/// Сгруппированные ряды отдаются как упорядоченные пары (метка, значение) —
/// слой отображения не привязан ни к какой конкретной библиотеке графиков.
///
/// Политика пустого знаменателя: и `avg_order_value`, и `repeat_customer_pct`
/// при пустом наборе равны `None` (карточка показывает «—»). В исходной
/// версии средний чек был не определён, а процент повторных покупателей —
/// явный ноль; здесь обе метрики осознанно приведены к одному сентинелу.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Число заказов в отфильтрованном наборе
    pub order_count: usize,
    /// Σ total_amount; 0.0 для пустого набора
    pub total_revenue: f64,
    /// Число уникальных customer_id
    pub distinct_customers: usize,
    /// total_revenue / order_count; None при order_count == 0
    pub avg_order_value: Option<f64>,
    /// Доля покупателей с более чем одним заказом, в процентах;
    /// None при distinct_customers == 0
    pub repeat_customer_pct: Option<f64>,
    /// Выручка по категориям, по убыванию; не более 5 позиций.
    /// Равные суммы упорядочены по коду категории — результат детерминирован.
    pub top_categories: Vec<(String, f64)>,
    /// Выручка по месяцам, по возрастанию ключа "YYYY-MM"
    pub monthly_revenue: Vec<(String, f64)>,
    /// Число заказов по регионам, по убыванию; равные счётчики — по коду региона
    pub region_distribution: Vec<(String, usize)>,
}

/// Полный пересчёт агрегатов по отфильтрованному набору. Чистая функция:
/// вызывается заново при каждом изменении селекторов, никакого
/// инкрементального состояния.
pub fn summarize(filtered: &[&OrderRecord]) -> DashboardSummary {
    let order_count = filtered.len();
    let total_revenue: f64 = filtered.iter().map(|o| o.total_amount).sum();

    let mut per_customer: HashMap<&str, usize> = HashMap::new();
    for order in filtered {
        *per_customer.entry(order.customer_id.as_str()).or_insert(0) += 1;
    }
    let distinct_customers = per_customer.len();
    let repeat_customers = per_customer.values().filter(|n| **n > 1).count();

    let avg_order_value = if order_count > 0 {
        Some(total_revenue / order_count as f64)
    } else {
        None
    };
    let repeat_customer_pct = if distinct_customers > 0 {
        Some(repeat_customers as f64 / distinct_customers as f64 * 100.0)
    } else {
        None
    };

    // BTreeMap даёт обход ключей по алфавиту; стабильная сортировка по
    // убыванию выручки сохраняет этот порядок для равных сумм
    let mut by_category: BTreeMap<&'static str, f64> = BTreeMap::new();
    for order in filtered {
        *by_category.entry(order.category.code()).or_insert(0.0) += order.total_amount;
    }
    let mut top_categories: Vec<(String, f64)> = by_category
        .into_iter()
        .map(|(code, revenue)| (code.to_string(), revenue))
        .collect();
    top_categories.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    top_categories.truncate(5);

    let mut by_month: BTreeMap<&str, f64> = BTreeMap::new();
    for order in filtered {
        *by_month.entry(order.month_bucket.as_str()).or_insert(0.0) += order.total_amount;
    }
    let monthly_revenue: Vec<(String, f64)> = by_month
        .into_iter()
        .map(|(bucket, revenue)| (bucket.to_string(), revenue))
        .collect();

    let mut by_region: BTreeMap<&'static str, usize> = BTreeMap::new();
    for order in filtered {
        *by_region.entry(order.region.code()).or_insert(0) += 1;
    }
    let mut region_distribution: Vec<(String, usize)> = by_region
        .into_iter()
        .map(|(code, count)| (code.to_string(), count))
        .collect();
    region_distribution.sort_by(|a, b| b.1.cmp(&a.1));

    DashboardSummary {
        order_count,
        total_revenue,
        distinct_customers,
        avg_order_value,
        repeat_customer_pct,
        top_categories,
        monthly_revenue,
        region_distribution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::filter::{filter_orders, FilterState};
    use crate::enums::{Gender, Region};
    use crate::orders::dataset;
    use std::collections::HashSet;

    fn full_summary() -> DashboardSummary {
        let filtered = filter_orders(dataset(), &FilterState::all_selected());
        summarize(&filtered)
    }

    #[test]
    fn golden_values_for_full_dataset() {
        let summary = full_summary();
        assert_eq!(summary.order_count, 15);
        assert_eq!(summary.total_revenue, 3090.0);
        assert_eq!(summary.distinct_customers, 13);
        assert_eq!(summary.avg_order_value, Some(206.0));
        // 2 повторных покупателя из 13 (C001, C002)
        let pct = summary.repeat_customer_pct.unwrap();
        assert!((pct - 2.0 / 13.0 * 100.0).abs() < 1e-9);
        assert!((pct - 15.38).abs() < 0.01);
    }

    #[test]
    fn top_categories_sorted_descending_by_revenue() {
        let summary = full_summary();
        assert_eq!(
            summary.top_categories,
            vec![
                ("Electronics".to_string(), 1850.0),
                ("Fashion".to_string(), 970.0),
                ("Groceries".to_string(), 270.0),
            ]
        );
    }

    #[test]
    fn monthly_revenue_is_chronological_and_complete() {
        let summary = full_summary();
        assert_eq!(
            summary.monthly_revenue,
            vec![
                ("2024-01".to_string(), 450.0),
                ("2024-02".to_string(), 330.0),
                ("2024-03".to_string(), 660.0),
                ("2024-04".to_string(), 170.0),
                ("2024-05".to_string(), 700.0),
                ("2024-06".to_string(), 780.0),
            ]
        );
    }

    #[test]
    fn region_distribution_counts_records_not_revenue() {
        let summary = full_summary();
        // North/South/West по 4 заказа, East — 3; равные счётчики по алфавиту
        assert_eq!(
            summary.region_distribution,
            vec![
                ("North".to_string(), 4),
                ("South".to_string(), 4),
                ("West".to_string(), 4),
                ("East".to_string(), 3),
            ]
        );
        let total: usize = summary.region_distribution.iter().map(|(_, n)| n).sum();
        assert_eq!(total, summary.order_count);
    }

    #[test]
    fn groupings_partition_total_revenue() {
        // группировки не теряют и не дублируют строки
        for state in [
            FilterState::all_selected(),
            FilterState {
                regions: HashSet::from([Region::North, Region::East]),
                genders: HashSet::from([Gender::Female]),
            },
            FilterState {
                regions: HashSet::from([Region::West]),
                genders: Gender::all().into_iter().collect(),
            },
        ] {
            let filtered = filter_orders(dataset(), &state);
            let summary = summarize(&filtered);
            let by_category: f64 = summary.top_categories.iter().map(|(_, v)| v).sum();
            let by_month: f64 = summary.monthly_revenue.iter().map(|(_, v)| v).sum();
            assert_eq!(by_category, summary.total_revenue);
            assert_eq!(by_month, summary.total_revenue);
        }
    }

    #[test]
    fn empty_selection_uses_none_sentinels() {
        let state = FilterState {
            regions: HashSet::new(),
            genders: HashSet::new(),
        };
        let filtered = filter_orders(dataset(), &state);
        let summary = summarize(&filtered);
        assert_eq!(summary.order_count, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.distinct_customers, 0);
        assert_eq!(summary.avg_order_value, None);
        assert_eq!(summary.repeat_customer_pct, None);
        assert!(summary.top_categories.is_empty());
        assert!(summary.monthly_revenue.is_empty());
        assert!(summary.region_distribution.is_empty());
    }

    #[test]
    fn summarize_is_idempotent() {
        let filtered = filter_orders(dataset(), &FilterState::all_selected());
        assert_eq!(summarize(&filtered), summarize(&filtered));
    }

    #[test]
    fn north_only_scenario() {
        let state = FilterState {
            regions: HashSet::from([Region::North]),
            genders: Gender::all().into_iter().collect(),
        };
        let filtered = filter_orders(dataset(), &state);
        let summary = summarize(&filtered);
        assert_eq!(summary.order_count, 4);
        assert_eq!(summary.total_revenue, 960.0);
        // C001 делает оба своих заказа в North
        assert_eq!(summary.distinct_customers, 3);
        let pct = summary.repeat_customer_pct.unwrap();
        assert!((pct - 1.0 / 3.0 * 100.0).abs() < 1e-9);
        assert_eq!(summary.region_distribution, vec![("North".to_string(), 4)]);
    }

    #[test]
    fn distinct_customers_never_exceeds_order_count() {
        for region in Region::all() {
            let state = FilterState {
                regions: HashSet::from([region]),
                genders: Gender::all().into_iter().collect(),
            };
            let filtered = filter_orders(dataset(), &state);
            let summary = summarize(&filtered);
            assert!(summary.distinct_customers <= summary.order_count);
        }
    }

    #[test]
    fn category_ties_break_alphabetically() {
        use crate::enums::Category;
        use crate::orders::OrderRecord;
        use chrono::NaiveDate;

        let date = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let rows = vec![
            OrderRecord::new(2001, "C101", date, Gender::Male, Region::North, Category::Fashion, 1, 100.0),
            OrderRecord::new(2002, "C102", date, Gender::Male, Region::North, Category::Electronics, 2, 50.0),
            OrderRecord::new(2003, "C103", date, Gender::Male, Region::North, Category::Groceries, 1, 100.0),
        ];
        let refs: Vec<&OrderRecord> = rows.iter().collect();
        let summary = summarize(&refs);
        // все три категории по 100 — порядок строго алфавитный
        assert_eq!(
            summary.top_categories,
            vec![
                ("Electronics".to_string(), 100.0),
                ("Fashion".to_string(), 100.0),
                ("Groceries".to_string(), 100.0),
            ]
        );
    }
}
