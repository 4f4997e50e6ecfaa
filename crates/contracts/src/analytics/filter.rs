use crate::enums::{Gender, Region};
use crate::orders::OrderRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Состояние селекторов боковой панели. Передаётся в конвейер по значению —
/// никакого разделяемого изменяемого состояния между сессиями.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub regions: HashSet<Region>,
    pub genders: HashSet<Gender>,
}

impl FilterState {
    /// Состояние по умолчанию: выбраны все значения обоих доменов.
    /// Пустое множество означает «ничего», а не «всё» — чтобы выбрать всё,
    /// вызывающая сторона передаёт полный домен.
    pub fn all_selected() -> Self {
        Self {
            regions: Region::all().into_iter().collect(),
            genders: Gender::all().into_iter().collect(),
        }
    }

    /// Верно, когда хотя бы один селектор пуст: результат фильтрации
    /// заведомо пуст, пересчитывать нечего
    pub fn is_empty_selection(&self) -> bool {
        self.regions.is_empty() || self.genders.is_empty()
    }

    /// Количество селекторов, суженных относительно полного домена
    /// (для бейджа на панели фильтров)
    pub fn active_restrictions(&self) -> usize {
        let mut n = 0;
        if self.regions.len() < Region::all().len() {
            n += 1;
        }
        if self.genders.len() < Gender::all().len() {
            n += 1;
        }
        n
    }
}

/// Отбирает заказы, у которых регион входит в `state.regions` И пол входит
/// в `state.genders`. Исходный порядок строк сохраняется. Чистая функция:
/// набор данных не изменяется, результат — заимствованное подмножество.
pub fn filter_orders<'a>(orders: &'a [OrderRecord], state: &FilterState) -> Vec<&'a OrderRecord> {
    orders
        .iter()
        .filter(|o| state.regions.contains(&o.region) && state.genders.contains(&o.gender))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::dataset;

    #[test]
    fn all_selected_returns_every_row_in_order() {
        let filtered = filter_orders(dataset(), &FilterState::all_selected());
        assert_eq!(filtered.len(), 15);
        let ids: Vec<u32> = filtered.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, (1001..=1015).collect::<Vec<u32>>());
    }

    #[test]
    fn empty_selection_yields_empty_result() {
        let state = FilterState {
            regions: HashSet::new(),
            genders: HashSet::new(),
        };
        assert!(filter_orders(dataset(), &state).is_empty());

        // пустой только один селектор — результат всё равно пуст
        let state = FilterState {
            regions: Region::all().into_iter().collect(),
            genders: HashSet::new(),
        };
        assert!(filter_orders(dataset(), &state).is_empty());
    }

    #[test]
    fn north_only_yields_four_records() {
        let state = FilterState {
            regions: HashSet::from([Region::North]),
            genders: Gender::all().into_iter().collect(),
        };
        let filtered = filter_orders(dataset(), &state);
        let ids: Vec<u32> = filtered.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![1001, 1004, 1007, 1012]);
        let revenue: f64 = filtered.iter().map(|o| o.total_amount).sum();
        assert_eq!(revenue, 960.0);
    }

    #[test]
    fn both_predicates_are_conjunctive() {
        let state = FilterState {
            regions: HashSet::from([Region::North]),
            genders: HashSet::from([Gender::Male]),
        };
        let filtered = filter_orders(dataset(), &state);
        // 1007 — North, но Female; отсеивается
        let ids: Vec<u32> = filtered.iter().map(|o| o.order_id).collect();
        assert_eq!(ids, vec![1001, 1004, 1012]);
    }

    #[test]
    fn filtered_count_never_exceeds_total() {
        let all_regions = Region::all();
        let all_genders = Gender::all();
        // все 2^4 × 2^2 комбинаций подмножеств доменов
        for region_mask in 0u32..(1 << all_regions.len()) {
            for gender_mask in 0u32..(1 << all_genders.len()) {
                let state = FilterState {
                    regions: all_regions
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| region_mask & (1 << i) != 0)
                        .map(|(_, r)| *r)
                        .collect(),
                    genders: all_genders
                        .iter()
                        .enumerate()
                        .filter(|(i, _)| gender_mask & (1 << i) != 0)
                        .map(|(_, g)| *g)
                        .collect(),
                };
                let filtered = filter_orders(dataset(), &state);
                assert!(filtered.len() <= dataset().len());
                let expected = dataset()
                    .iter()
                    .filter(|o| {
                        state.regions.contains(&o.region) && state.genders.contains(&o.gender)
                    })
                    .count();
                assert_eq!(filtered.len(), expected);
            }
        }
    }

    #[test]
    fn empty_selection_flag_matches_filter_result() {
        assert!(!FilterState::all_selected().is_empty_selection());

        let both_empty = FilterState {
            regions: HashSet::new(),
            genders: HashSet::new(),
        };
        assert!(both_empty.is_empty_selection());

        // пустой только один селектор — результат всё равно заведомо пуст
        let one_empty = FilterState {
            regions: HashSet::from([Region::North]),
            genders: HashSet::new(),
        };
        assert!(one_empty.is_empty_selection());
        assert!(filter_orders(dataset(), &one_empty).is_empty());

        let narrowed = FilterState {
            regions: HashSet::from([Region::North]),
            genders: HashSet::from([Gender::Male]),
        };
        assert!(!narrowed.is_empty_selection());
    }

    #[test]
    fn active_restrictions_counts_narrowed_selectors() {
        assert_eq!(FilterState::all_selected().active_restrictions(), 0);

        let state = FilterState {
            regions: HashSet::from([Region::North]),
            genders: Gender::all().into_iter().collect(),
        };
        assert_eq!(state.active_restrictions(), 1);

        let state = FilterState {
            regions: HashSet::new(),
            genders: HashSet::from([Gender::Male]),
        };
        assert_eq!(state.active_restrictions(), 2);
    }
}
