use super::record::OrderRecord;
use crate::enums::{Category, Gender, Region};
use chrono::NaiveDate;
use once_cell::sync::Lazy;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("дата в наборе данных корректна")
}

/// Фиксированный набор заказов. Строится один раз при первом обращении,
/// дальше используется только на чтение — фильтрация всегда возвращает
/// новое подмножество, исходные строки не изменяются.
static ORDERS: Lazy<Vec<OrderRecord>> = Lazy::new(|| {
    use Category::*;
    use Gender::*;
    use Region::*;

    vec![
        OrderRecord::new(1001, "C001", date(2024, 1, 5), Male, North, Electronics, 1, 300.0),
        OrderRecord::new(1002, "C002", date(2024, 1, 6), Female, South, Fashion, 2, 50.0),
        OrderRecord::new(1003, "C003", date(2024, 1, 10), Male, West, Groceries, 10, 5.0),
        OrderRecord::new(1004, "C001", date(2024, 2, 15), Male, North, Fashion, 1, 80.0),
        OrderRecord::new(1005, "C004", date(2024, 2, 20), Female, East, Electronics, 1, 250.0),
        OrderRecord::new(1006, "C005", date(2024, 3, 1), Male, South, Groceries, 20, 4.0),
        OrderRecord::new(1007, "C006", date(2024, 3, 5), Female, North, Fashion, 3, 60.0),
        OrderRecord::new(1008, "C007", date(2024, 3, 12), Female, West, Electronics, 2, 200.0),
        OrderRecord::new(1009, "C008", date(2024, 4, 2), Male, East, Groceries, 5, 10.0),
        OrderRecord::new(1010, "C002", date(2024, 4, 8), Female, South, Fashion, 1, 120.0),
        OrderRecord::new(1011, "C009", date(2024, 5, 5), Female, West, Fashion, 4, 75.0),
        OrderRecord::new(1012, "C010", date(2024, 5, 9), Male, North, Electronics, 1, 400.0),
        OrderRecord::new(1013, "C011", date(2024, 6, 1), Male, South, Groceries, 15, 6.0),
        OrderRecord::new(1014, "C012", date(2024, 6, 15), Female, East, Fashion, 2, 95.0),
        OrderRecord::new(1015, "C013", date(2024, 6, 20), Male, West, Electronics, 1, 500.0),
    ]
});

/// Полный набор заказов (только чтение)
pub fn dataset() -> &'static [OrderRecord] {
    &ORDERS
}
