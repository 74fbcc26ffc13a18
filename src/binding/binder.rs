use std::{collections::HashMap, sync::Arc};

use anyhow::Context;
use tracing::trace;

use crate::binding::context::BindingContext;
use crate::binding::convert::convert_scalar;
use crate::binding::dictionary::DictionaryBinder;
use crate::binding::shape::{TargetShape, TargetType};
use crate::binding::value::BoundValue;

/// 模型绑定器抽象
/// Send + Sync：注册表整个挂在 Arc 后面跨处理器共享
pub trait ModelBinder: Send + Sync {
    /// Ok(None) 表示没有可绑定的数据，错误只来自值转换失败
    fn bind(&self, ctx: &BindingContext<'_>) -> anyhow::Result<Option<BoundValue>>;
}

/// 标量默认绑定器：按模型名取第一个原始值，再按目标类型转换
pub struct ValueBinder;

impl ModelBinder for ValueBinder {
    fn bind(&self, ctx: &BindingContext<'_>) -> anyhow::Result<Option<BoundValue>> {
        if ctx.target.shape() != TargetShape::Other {
            // 扁平值救不了集合目标
            return Ok(None);
        }
        let Some(raw) = ctx.provider.raw(&ctx.model_name) else {
            trace!(model = %ctx.model_name, "no raw value");
            return Ok(None);
        };
        let value = convert_scalar(raw, ctx.target)
            .with_context(|| format!("binding '{}' failed", ctx.model_name))?;
        Ok(Some(value))
    }
}

/// 形状到绑定器的注册表，带默认回退
pub struct BinderRegistry {
    entries: HashMap<TargetShape, Arc<dyn ModelBinder>>,
    fallback: Arc<dyn ModelBinder>,
}

impl BinderRegistry {
    /// 空注册表：任何目标都走默认绑定器
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
            fallback: Arc::new(ValueBinder),
        }
    }

    pub fn register(&mut self, shape: TargetShape, binder: Arc<dyn ModelBinder>) {
        self.entries.insert(shape, binder);
    }

    pub fn set_fallback(&mut self, binder: Arc<dyn ModelBinder>) {
        self.fallback = binder;
    }

    pub fn fallback(&self) -> Arc<dyn ModelBinder> {
        self.fallback.clone()
    }

    /// 按目标形状解析，未注册的形状落到默认绑定器
    pub fn resolve(&self, target: &TargetType) -> Arc<dyn ModelBinder> {
        self.entries
            .get(&target.shape())
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}

impl Default for BinderRegistry {
    /// 默认装配：字典和列表走 DictionaryBinder，其余走 ValueBinder
    fn default() -> Self {
        let mut registry = Self::empty();
        let dictionary: Arc<dyn ModelBinder> = Arc::new(DictionaryBinder::new());
        registry.register(TargetShape::Dictionary, dictionary.clone());
        registry.register(TargetShape::List, dictionary);
        registry
    }
}
