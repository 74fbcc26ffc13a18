#[cfg(test)]
mod tests {
    use bex::binding::params::Params;
    use bex::binding::provider::ValueProvider;
    use indexmap::IndexMap;

    fn full_provider() -> ValueProvider {
        let mut params = Params::new("https://x/path?page=1&sort=desc".to_string());
        params.set_form("name=alice&tags[0]=a");

        let mut data = IndexMap::new();
        data.insert("id".to_string(), "42".to_string());
        params.set_data(data);

        params.set_files(vec!["avatar".to_string()]);
        ValueProvider::new(params)
    }

    #[test]
    fn test_keys_aggregation_order() {
        let provider = full_provider();
        let keys = provider.keys();

        // 枚举顺序：form -> data -> query -> files
        assert_eq!(keys.len(), 6);
        assert_eq!(keys[0], "name");
        assert_eq!(keys[1], "tags[0]");
        assert_eq!(keys[2], "id");
        assert_eq!(keys[3], "page");
        assert_eq!(keys[4], "sort");
        assert_eq!(keys[5], "avatar");
    }

    #[test]
    fn test_keys_enumeration_is_idempotent() {
        let provider = full_provider();

        let first: Vec<String> = provider.keys().to_vec();
        let second: Vec<String> = provider.keys().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_keys_from_query_only() {
        let provider = ValueProvider::new(Params::new("https://x/?a=1&b=2".to_string()));
        let keys = provider.keys();

        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0], "a");
        assert_eq!(keys[1], "b");
    }

    #[test]
    fn test_keys_empty_request() {
        let provider = ValueProvider::new(Params::new("https://x/".to_string()));
        assert!(provider.keys().is_empty());
    }

    #[test]
    fn test_raw_goes_through_sources() {
        let provider = full_provider();

        assert_eq!(provider.raw("name"), Some("alice"));
        assert_eq!(provider.raw("id"), Some("42"));
        assert_eq!(provider.raw("page"), Some("1"));
        // 文件字段没有字符串值
        assert_eq!(provider.raw("avatar"), None);
    }
}
