use crate::binding::convert::KeyKind;

/// 目标类型描述
/// 字典带键类型和值类型，列表带元素类型，标量对字典绑定器是透传
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetType {
    Str,
    Int,
    Uint,
    Float,
    Bool,
    Dictionary { key: KeyKind, value: Box<TargetType> },
    List { item: Box<TargetType> },
}

/// 形状标签，封闭集合，注册表按它派发
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetShape {
    Dictionary,
    List,
    Other,
}

impl TargetType {
    pub fn dictionary(key: KeyKind, value: TargetType) -> Self {
        TargetType::Dictionary {
            key,
            value: Box::new(value),
        }
    }

    pub fn list(item: TargetType) -> Self {
        TargetType::List {
            item: Box::new(item),
        }
    }

    /// 每次绑定调用只判定一次
    pub fn shape(&self) -> TargetShape {
        match self {
            TargetType::Dictionary { .. } => TargetShape::Dictionary,
            TargetType::List { .. } => TargetShape::List,
            _ => TargetShape::Other,
        }
    }
}
