use indexmap::IndexMap;

/// 请求参数来源结构
/// 绑定管道的输入面：Path 参数、Query、Form body、上传文件字段名。
/// 各来源用 IndexMap 保存，参数名枚举顺序就是文档顺序
#[derive(Debug, Clone, Default)]
pub struct Params {
    /// 原始请求 URL，包括 query
    pub url: String,
    /// Path 参数，例如 /user/:id -> {"id": "123"}
    pub data: Option<IndexMap<String, String>>,
    /// Query 参数，例如 ?active=true -> {"active": "true"}
    pub query: IndexMap<String, Vec<String>>,
    /// Form 参数 (x-www-form-urlencoded body)
    pub form: Option<IndexMap<String, Vec<String>>>,
    /// 上传文件的字段名，只参与名字枚举，没有字符串值
    pub files: Option<Vec<String>>,
}

impl Params {
    pub fn new(url: String) -> Self {
        let query = url
            .split_once('?')
            .map(|(_, qs)| Self::parse_pairs(qs))
            .unwrap_or_default();

        Self {
            url,
            data: None,
            query,
            form: None,
            files: None,
        }
    }

    pub fn parse_pairs(pairs: &str) -> IndexMap<String, Vec<String>> {
        let mut map: IndexMap<String, Vec<String>> = IndexMap::new();
        for (k, v) in form_urlencoded::parse(pairs.as_bytes()) {
            map.entry(k.into_owned()).or_default().push(v.into_owned());
        }
        map
    }

    pub fn set_form(&mut self, form: &str) {
        self.form = Some(Self::parse_pairs(form));
    }

    pub fn set_data(&mut self, data: IndexMap<String, String>) {
        self.data = Some(data);
    }

    pub fn set_files(&mut self, names: Vec<String>) {
        self.files = Some(names);
    }

    /// 取第一个原始字符串值，查找顺序：form -> data -> query
    /// 与名字枚举顺序保持一致，文件字段没有值
    pub fn raw(&self, name: &str) -> Option<&str> {
        if let Some(form) = &self.form
            && let Some(values) = form.get(name)
            && let Some(first) = values.first()
        {
            return Some(first.as_str());
        }
        if let Some(data) = &self.data
            && let Some(value) = data.get(name)
        {
            return Some(value.as_str());
        }
        self.query
            .get(name)
            .and_then(|values| values.first())
            .map(|s| s.as_str())
    }
}
