use crate::core::aggregate::SortOrder;
use crate::domain::ports::ConfigProvider;
use serde::Deserialize;

/// Raw query parameters of `GET /recipes`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeQuery {
    pub top: Option<String>,
    pub skip: Option<String>,
    pub ids: Option<String>,
}

impl RecipeQuery {
    /// Builds a query from decoded `key=value` pairs. The first occurrence of a
    /// repeated key wins; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = RecipeQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "top" => &mut query.top,
                "skip" => &mut query.skip,
                "ids" => &mut query.ids,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub max_top: u32,
    pub default_top: u32,
    pub default_skip: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            max_top: 10,
            default_top: 5,
            default_skip: 0,
        }
    }
}

impl Pagination {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            max_top: config.max_top(),
            default_top: config.default_top(),
            default_skip: config.default_skip(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BatchRequest {
    /// Recipes `skip + 1 ..= skip + top`.
    Window { top: u32, skip: u32 },
    /// Explicit identifiers, in the order the client listed them.
    Ids(Vec<String>),
}

impl BatchRequest {
    pub fn identifiers(&self) -> Vec<String> {
        match self {
            BatchRequest::Window { top, skip } => {
                let first = u64::from(*skip) + 1;
                let last = u64::from(*skip) + u64::from(*top);
                (first..=last).map(|i| i.to_string()).collect()
            }
            BatchRequest::Ids(ids) => ids.clone(),
        }
    }

    pub fn sort_order(&self) -> SortOrder {
        match self {
            BatchRequest::Window { .. } => SortOrder::Completion,
            BatchRequest::Ids(_) => SortOrder::PrepTime,
        }
    }
}

/// 將查詢參數轉為批次請求：有 ids 時優先使用 ids，否則使用分頁視窗
pub fn resolve(query: &RecipeQuery, pagination: &Pagination) -> BatchRequest {
    if let Some(raw) = query.ids.as_deref().filter(|raw| !raw.trim().is_empty()) {
        let candidates: Vec<String> = raw.split(',').map(|s| s.trim().to_string()).collect();
        return BatchRequest::Ids(filter_identifiers(candidates, is_positive_integer));
    }

    let top = parse_count(query.top.as_deref(), pagination.default_top).min(pagination.max_top);
    let skip = parse_count(query.skip.as_deref(), pagination.default_skip);

    BatchRequest::Window { top, skip }
}

pub fn filter_identifiers<F>(input: Vec<String>, keep: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    input.into_iter().filter(|s| keep(s)).collect()
}

pub fn is_positive_integer(value: &str) -> bool {
    matches!(value.parse::<i64>(), Ok(n) if n > 0)
}

// 未提供時使用預設值；無法解析或負數視為 0
fn parse_count(raw: Option<&str>, default: u32) -> u32 {
    match raw.map(|s| s.trim().parse::<i64>()) {
        None => default,
        Some(Ok(n)) if n < 0 => 0,
        Some(Ok(n)) => u32::try_from(n).unwrap_or(u32::MAX),
        Some(Err(_)) => 0,
    }
}
