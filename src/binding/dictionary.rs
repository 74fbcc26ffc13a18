use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::binding::binder::ModelBinder;
use crate::binding::context::BindingContext;
use crate::binding::convert::{KeyKind, KeyValue};
use crate::binding::shape::TargetType;
use crate::binding::value::BoundValue;

/// 方括号键字典/列表绑定器
/// 把 `model[key]` 形式的扁平参数名重组成字典或列表，
/// 其余目标交给链上的下一个绑定器或注册表的默认绑定器
pub struct DictionaryBinder {
    next: Option<Arc<dyn ModelBinder>>,
}

impl DictionaryBinder {
    pub fn new() -> Self {
        Self { next: None }
    }

    /// 链式回退：未命中字典/列表形状时调用 next
    pub fn with_next(next: Arc<dyn ModelBinder>) -> Self {
        Self { next: Some(next) }
    }
}

impl Default for DictionaryBinder {
    fn default() -> Self {
        Self::new()
    }
}

/// `<model>[` 的前缀匹配，ASCII 大小写不敏感，按字节比较
fn matches_prefix(name: &str, model: &str) -> bool {
    let name = name.as_bytes();
    let model = model.as_bytes();
    name.len() > model.len()
        && name[..model.len()].eq_ignore_ascii_case(model)
        && name[model.len()] == b'['
}

impl ModelBinder for DictionaryBinder {
    fn bind(&self, ctx: &BindingContext<'_>) -> anyhow::Result<Option<BoundValue>> {
        // 目标形状只判定一次，列表按 Uint 合成键的字典处理
        let (key_kind, value_type, as_list) = match ctx.target {
            TargetType::Dictionary { key, value } => (*key, value.as_ref(), false),
            TargetType::List { item } => (KeyKind::Uint, item.as_ref(), true),
            _ => {
                // 不支持的形状不是错误，回退结果原样返回
                trace!(model = %ctx.model_name, "not a collection target, delegating");
                let next = match &self.next {
                    Some(binder) => binder.clone(),
                    None => ctx.binders.fallback(),
                };
                return next.bind(ctx);
            }
        };

        let value_binder = ctx.binders.resolve(value_type);
        let prefix_len = ctx.model_name.len() + 1;

        let mut seen: Vec<KeyValue> = Vec::new();
        // 结果容器懒创建，没有任何键命中就不存在
        let mut result: Option<IndexMap<KeyValue, BoundValue>> = None;

        let names = ctx.provider.keys();
        for name in names.iter() {
            if !matches_prefix(name, &ctx.model_name) {
                continue;
            }
            // 前缀之后必须有闭括号，取第一个 `]` 之前的子串
            let Some(end) = name[prefix_len..].find(']').map(|i| i + prefix_len) else {
                continue;
            };
            // 键转换失败的候选直接丢弃
            let Some(key) = key_kind.convert(&name[prefix_len..end]) else {
                trace!(name = %name, "key not convertible, dropped");
                continue;
            };
            // 去重：同一个键第一次出现生效
            if seen.contains(&key) {
                continue;
            }
            seen.push(key.clone());

            // 子绑定的模型名取到闭括号为止，值绑定失败按原样向上传播
            let nested = ctx.nested(name[..=end].to_string(), value_type);
            let value = value_binder.bind(&nested)?.unwrap_or(BoundValue::Null);

            let entries = result.get_or_insert_with(IndexMap::new);
            if !entries.contains_key(&key) {
                entries.insert(key, value);
            }
        }

        let Some(entries) = result else {
            return Ok(None);
        };
        debug!(model = %ctx.model_name, count = entries.len(), "collection bound");

        if as_list {
            // 按容器迭代顺序取值还原列表，不按数字键排序
            let items = entries.into_values().collect();
            return Ok(Some(BoundValue::List(items)));
        }
        Ok(Some(BoundValue::Map(entries)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_prefix() {
        assert!(matches_prefix("model[1]", "model"));
        assert!(matches_prefix("model[", "model"));

        // 大小写不敏感
        assert!(matches_prefix("Model[1]", "model"));
        assert!(matches_prefix("MODEL[x]", "model"));

        // 前缀之后必须紧跟 `[`
        assert!(!matches_prefix("model.1", "model"));
        assert!(!matches_prefix("models[1]", "model"));
        assert!(!matches_prefix("model", "model"));
        assert!(!matches_prefix("other[1]", "model"));
    }
}
