use serde::{Deserialize, Serialize};

/// Регион покупателя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    /// Стабильный строковый код (совпадает со значениями в наборе данных)
    pub fn code(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::North => "Север",
            Region::South => "Юг",
            Region::East => "Восток",
            Region::West => "Запад",
        }
    }

    /// Полный домен значений, в порядке отображения в фильтре
    pub fn all() -> Vec<Region> {
        vec![Region::North, Region::South, Region::East, Region::West]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "North" => Some(Region::North),
            "South" => Some(Region::South),
            "East" => Some(Region::East),
            "West" => Some(Region::West),
            _ => None,
        }
    }
}

impl ToString for Region {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
