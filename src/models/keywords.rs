use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// 关键词权重表
///
/// 保持配置文件中的书写顺序，命中关键词列表按此顺序输出。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordWeights {
    entries: Vec<(String, f64)>,
}

impl KeywordWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个关键词；重复的关键词覆盖原权重，位置不变
    pub fn insert(&mut self, keyword: impl Into<String>, weight: f64) {
        let keyword = keyword.into();
        match self.entries.iter_mut().find(|(k, _)| *k == keyword) {
            Some(entry) => entry.1 = weight,
            None => self.entries.push((keyword, weight)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(k, w)| (k.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for KeywordWeights {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut weights = KeywordWeights::new();
        for (keyword, weight) in iter {
            weights.insert(keyword, weight);
        }
        weights
    }
}

impl<'de> Deserialize<'de> for KeywordWeights {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WeightsVisitor;

        impl<'de> Visitor<'de> for WeightsVisitor {
            type Value = KeywordWeights;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a table mapping keyword to a numeric weight")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut weights = KeywordWeights::new();
                while let Some((keyword, weight)) = map.next_entry::<String, Weight>()? {
                    weights.insert(keyword, weight.0);
                }
                Ok(weights)
            }
        }

        deserializer.deserialize_map(WeightsVisitor)
    }
}

/// 权重既可以写成整数也可以写成小数
struct Weight(f64);

impl<'de> Deserialize<'de> for Weight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct WeightVisitor;

        impl<'de> Visitor<'de> for WeightVisitor {
            type Value = Weight;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or float weight")
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Weight(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Weight(value as f64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Weight(value as f64))
            }
        }

        deserializer.deserialize_any(WeightVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        keywords: KeywordWeights,
    }

    #[test]
    fn test_keeps_file_order() {
        let parsed: Wrapper = toml::from_str(
            r#"
            [keywords]
            transformer = 1.5
            "reinforcement learning" = 3
            diffusion = 2.0
            "#,
        )
        .unwrap();

        let keys: Vec<&str> = parsed.keywords.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["transformer", "reinforcement learning", "diffusion"]);
    }

    #[test]
    fn test_integer_weight_becomes_float() {
        let parsed: Wrapper = toml::from_str("[keywords]\nAI = 3\n").unwrap();
        assert_eq!(parsed.keywords.iter().next(), Some(("AI", 3.0)));
    }

    #[test]
    fn test_rejects_non_numeric_weight() {
        let parsed: Result<Wrapper, _> = toml::from_str("[keywords]\nAI = \"high\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_insert_overwrites_in_place() {
        let mut weights: KeywordWeights = vec![("a", 1.0), ("b", 2.0)].into_iter().collect();
        weights.insert("a", 5.0);
        assert_eq!(weights.iter().collect::<Vec<_>>(), vec![("a", 5.0), ("b", 2.0)]);
        assert_eq!(weights.len(), 2);
    }
}
