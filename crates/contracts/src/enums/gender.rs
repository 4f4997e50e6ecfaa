use serde::{Deserialize, Serialize};

/// Пол покупателя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Стабильный строковый код (совпадает со значениями в наборе данных)
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Gender::Male => "Мужской",
            Gender::Female => "Женский",
        }
    }

    /// Полный домен значений, в порядке отображения в фильтре
    pub fn all() -> Vec<Gender> {
        vec![Gender::Male, Gender::Female]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl ToString for Gender {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
