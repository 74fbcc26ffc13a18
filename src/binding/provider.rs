#[cfg(feature = "provider-cache")]
use once_cell::sync::OnceCell;

use crate::binding::params::Params;

/// 值提供者：把各来源聚合成一份扁平的参数名枚举
/// 枚举顺序固定：form -> data -> query -> files
pub struct ValueProvider {
    params: Params,
    /// 每个请求一份的枚举缓存，随 provider 一起销毁，绝不跨请求复用
    #[cfg(feature = "provider-cache")]
    keys: OnceCell<Vec<String>>,
}

impl ValueProvider {
    pub fn new(params: Params) -> Self {
        Self {
            params,
            #[cfg(feature = "provider-cache")]
            keys: OnceCell::new(),
        }
    }

    fn collect_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        if let Some(form) = &self.params.form {
            keys.extend(form.keys().cloned());
        }
        if let Some(data) = &self.params.data {
            keys.extend(data.keys().cloned());
        }
        keys.extend(self.params.query.keys().cloned());
        if let Some(files) = &self.params.files {
            keys.extend(files.iter().cloned());
        }
        keys
    }

    /// 当前可用的全部参数名
    #[cfg(feature = "provider-cache")]
    pub fn keys(&self) -> &[String] {
        self.keys.get_or_init(|| self.collect_keys())
    }

    /// 未开启缓存时每次重新枚举，来源不变则结果不变
    #[cfg(not(feature = "provider-cache"))]
    pub fn keys(&self) -> Vec<String> {
        self.collect_keys()
    }

    /// 按名字取第一个原始字符串值
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.params.raw(name)
    }
}
