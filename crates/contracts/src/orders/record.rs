use crate::enums::{Category, Gender, Region};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Одна строка заказа. Производные поля (`total_amount`, `month_bucket`)
/// вычисляются один раз в конструкторе и после этого не меняются.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub order_id: u32,
    pub customer_id: String,
    pub order_date: NaiveDate,
    pub gender: Gender,
    pub region: Region,
    pub category: Category,
    pub quantity: u32,
    pub unit_price: f64,
    /// quantity × unit_price
    pub total_amount: f64,
    /// Ключ месяца "YYYY-MM" — лексикографический порядок совпадает с хронологическим
    pub month_bucket: String,
}

impl OrderRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        order_id: u32,
        customer_id: &str,
        order_date: NaiveDate,
        gender: Gender,
        region: Region,
        category: Category,
        quantity: u32,
        unit_price: f64,
    ) -> Self {
        Self {
            order_id,
            customer_id: customer_id.to_string(),
            order_date,
            gender,
            region,
            category,
            quantity,
            unit_price,
            total_amount: quantity as f64 * unit_price,
            month_bucket: format!("{:04}-{:02}", order_date.year(), order_date.month()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_fields_are_computed_in_constructor() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let rec = OrderRecord::new(
            1007,
            "C006",
            date,
            Gender::Female,
            Region::North,
            Category::Fashion,
            3,
            60.0,
        );
        assert_eq!(rec.total_amount, 180.0);
        assert_eq!(rec.month_bucket, "2024-03");
    }

    #[test]
    fn month_bucket_is_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let rec = OrderRecord::new(
            1001,
            "C001",
            date,
            Gender::Male,
            Region::North,
            Category::Electronics,
            1,
            300.0,
        );
        assert_eq!(rec.month_bucket, "2024-01");
    }
}
