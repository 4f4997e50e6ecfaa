use serde::{Deserialize, Serialize};

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Percent { decimals: u8 },
    Integer,
}

/// Static metadata describing one KPI card (label, format, icon).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiMeta {
    pub id: String,
    pub label: String,
    pub icon: String,
    pub format: ValueFormat,
}

/// The four KPI cards of the dashboard, in display order.
pub fn kpi_catalog() -> Vec<KpiMeta> {
    vec![
        KpiMeta {
            id: "total_revenue".to_string(),
            label: "Выручка".to_string(),
            icon: "payments".to_string(),
            format: ValueFormat::Money {
                currency: "$".to_string(),
            },
        },
        KpiMeta {
            id: "distinct_customers".to_string(),
            label: "Покупатели".to_string(),
            icon: "customers".to_string(),
            format: ValueFormat::Integer,
        },
        KpiMeta {
            id: "avg_order_value".to_string(),
            label: "Средний чек".to_string(),
            icon: "purchases".to_string(),
            format: ValueFormat::Money {
                currency: "$".to_string(),
            },
        },
        KpiMeta {
            id: "repeat_customer_pct".to_string(),
            label: "Повторные покупатели".to_string(),
            icon: "repeat".to_string(),
            format: ValueFormat::Percent { decimals: 1 },
        },
    ]
}
