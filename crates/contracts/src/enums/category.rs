use serde::{Deserialize, Serialize};

/// Товарная категория заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    Groceries,
}

impl Category {
    /// Стабильный строковый код (совпадает со значениями в наборе данных)
    pub fn code(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Groceries => "Groceries",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Electronics => "Электроника",
            Category::Fashion => "Одежда",
            Category::Groceries => "Продукты",
        }
    }

    /// Полный домен значений
    pub fn all() -> Vec<Category> {
        vec![Category::Electronics, Category::Fashion, Category::Groceries]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Electronics" => Some(Category::Electronics),
            "Fashion" => Some(Category::Fashion),
            "Groceries" => Some(Category::Groceries),
            _ => None,
        }
    }
}

impl ToString for Category {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
