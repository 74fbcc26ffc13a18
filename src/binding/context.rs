use crate::binding::binder::BinderRegistry;
use crate::binding::provider::ValueProvider;
use crate::binding::shape::TargetType;
use crate::binding::value::BoundValue;

/// 一次绑定调用的上下文
/// 子绑定继承 provider 和注册表，只换模型名和目标类型
pub struct BindingContext<'a> {
    /// 参数名前缀，例如 "items" 匹配 "items[0]"
    pub model_name: String,
    pub target: &'a TargetType,
    pub provider: &'a ValueProvider,
    pub binders: &'a BinderRegistry,
}

impl<'a> BindingContext<'a> {
    pub fn new(
        model_name: impl Into<String>,
        target: &'a TargetType,
        provider: &'a ValueProvider,
        binders: &'a BinderRegistry,
    ) -> Self {
        Self {
            model_name: model_name.into(),
            target,
            provider,
            binders,
        }
    }

    /// 以匹配到的 name[key] 为模型名构造子上下文
    pub fn nested(&self, model_name: String, target: &'a TargetType) -> BindingContext<'a> {
        BindingContext {
            model_name,
            target,
            provider: self.provider,
            binders: self.binders,
        }
    }

    /// 绑定入口：先从注册表解析 binder 再调用
    pub fn bind(&self) -> anyhow::Result<Option<BoundValue>> {
        self.binders.resolve(self.target).bind(self)
    }
}
