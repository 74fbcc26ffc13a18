use anyhow::{Context, bail};

use crate::binding::shape::TargetType;
use crate::binding::value::BoundValue;

/// 字典键的类型，封闭集合
/// 没有 Float：键要参与去重，必须 Eq + Hash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    Str,
    Int,
    Uint,
    Bool,
}

/// 解码后的字典键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyValue {
    Str(String),
    Int(i64),
    Uint(u64),
    Bool(bool),
}

impl KeyKind {
    /// 把括号里的子串转换成键值
    /// 转换失败返回 None，候选名被丢弃，不是错误
    pub fn convert(&self, s: &str) -> Option<KeyValue> {
        match self {
            KeyKind::Str => Some(KeyValue::Str(s.to_owned())),
            KeyKind::Int => s.parse::<i64>().ok().map(KeyValue::Int),
            KeyKind::Uint => s.parse::<u64>().ok().map(KeyValue::Uint),
            KeyKind::Bool => parse_bool(s).map(KeyValue::Bool),
        }
    }
}

impl KeyValue {
    /// 键的字符串形式，JSON 对象键用它
    pub fn to_key_string(&self) -> String {
        match self {
            KeyValue::Str(s) => s.clone(),
            KeyValue::Int(i) => i.to_string(),
            KeyValue::Uint(u) => u.to_string(),
            KeyValue::Bool(b) => b.to_string(),
        }
    }
}

/// 宽松的布尔解析，对齐 form 的常见写法
fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") || s == "1" || s.eq_ignore_ascii_case("on") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") || s == "0" || s.eq_ignore_ascii_case("off") {
        Some(false)
    } else {
        None
    }
}

/// 标量原始值按目标类型转换，失败是绑定错误，按原样向上传播
pub fn convert_scalar(raw: &str, target: &TargetType) -> anyhow::Result<BoundValue> {
    match target {
        TargetType::Str => Ok(BoundValue::Str(raw.to_owned())),
        TargetType::Int => raw
            .parse::<i64>()
            .map(BoundValue::Int)
            .with_context(|| format!("'{raw}' is not a valid integer")),
        TargetType::Uint => raw
            .parse::<u64>()
            .map(BoundValue::Uint)
            .with_context(|| format!("'{raw}' is not a valid unsigned integer")),
        TargetType::Float => raw
            .parse::<f64>()
            .map(BoundValue::Float)
            .with_context(|| format!("'{raw}' is not a valid float")),
        TargetType::Bool => parse_bool(raw)
            .map(BoundValue::Bool)
            .with_context(|| format!("'{raw}' is not a valid boolean")),
        TargetType::Dictionary { .. } | TargetType::List { .. } => {
            bail!("'{raw}' cannot convert to a collection target")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_convert() {
        // 精确转换
        assert_eq!(
            KeyKind::Str.convert("abc"),
            Some(KeyValue::Str("abc".to_string()))
        );
        assert_eq!(KeyKind::Int.convert("-7"), Some(KeyValue::Int(-7)));
        assert_eq!(KeyKind::Uint.convert("42"), Some(KeyValue::Uint(42)));
        assert_eq!(KeyKind::Bool.convert("on"), Some(KeyValue::Bool(true)));

        // 转换失败 -> None，不是错误
        assert_eq!(KeyKind::Int.convert("abc"), None);
        assert_eq!(KeyKind::Uint.convert("-1"), None);
        assert_eq!(KeyKind::Uint.convert(""), None);
        assert_eq!(KeyKind::Bool.convert("yes"), None);

        // Str 接受空键
        assert_eq!(KeyKind::Str.convert(""), Some(KeyValue::Str(String::new())));
    }

    #[test]
    fn test_key_string() {
        assert_eq!(KeyValue::Int(3).to_key_string(), "3");
        assert_eq!(KeyValue::Uint(9).to_key_string(), "9");
        assert_eq!(KeyValue::Bool(false).to_key_string(), "false");
        assert_eq!(KeyValue::Str("k".to_string()).to_key_string(), "k");
    }

    #[test]
    fn test_convert_scalar() {
        assert_eq!(
            convert_scalar("hi", &TargetType::Str).unwrap(),
            BoundValue::Str("hi".to_string())
        );
        assert_eq!(
            convert_scalar("30", &TargetType::Int).unwrap(),
            BoundValue::Int(30)
        );
        assert_eq!(
            convert_scalar("1.5", &TargetType::Float).unwrap(),
            BoundValue::Float(1.5)
        );
        assert_eq!(
            convert_scalar("off", &TargetType::Bool).unwrap(),
            BoundValue::Bool(false)
        );

        // 标量转换失败要报错，错误会从值绑定器原样传播出去
        assert!(convert_scalar("abc", &TargetType::Int).is_err());
        assert!(convert_scalar("yes", &TargetType::Bool).is_err());

        // 集合目标不走标量转换
        let dict = TargetType::dictionary(KeyKind::Str, TargetType::Str);
        assert!(convert_scalar("x", &dict).is_err());
    }
}
