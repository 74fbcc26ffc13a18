use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use crate::binding::convert::KeyValue;

/// 绑定结果值
/// Map 按插入顺序迭代，列表还原依赖这一点
#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue {
    Null,
    Str(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Map(IndexMap<KeyValue, BoundValue>),
    List(Vec<BoundValue>),
}

impl BoundValue {
    pub fn as_map(&self) -> Option<&IndexMap<KeyValue, BoundValue>> {
        match self {
            BoundValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[BoundValue]> {
        match self {
            BoundValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// 转成 serde_json::Value 交给处理器消费，字典键统一转成字符串
    pub fn to_json(&self) -> Value {
        match self {
            BoundValue::Null => Value::Null,
            BoundValue::Str(s) => Value::String(s.clone()),
            BoundValue::Int(i) => Value::Number((*i).into()),
            BoundValue::Uint(u) => Value::Number((*u).into()),
            BoundValue::Float(f) => Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            BoundValue::Bool(b) => Value::Bool(*b),
            BoundValue::Map(map) => {
                let mut obj = Map::with_capacity(map.len());
                for (k, v) in map {
                    obj.insert(k.to_key_string(), v.to_json());
                }
                Value::Object(obj)
            }
            BoundValue::List(items) => Value::Array(items.iter().map(|v| v.to_json()).collect()),
        }
    }
}
