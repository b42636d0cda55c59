//! Request paths of the AppSync control plane
//!
//! Every path carries the `/v1` API version prefix.

/// API version prefix prepended to every request path.
pub const VERSION_PREFIX: &str = "/v1";

/// `/v1/apis/{apiId}/types/{typeName}/resolvers`
pub fn resolvers(api_id: &str, type_name: &str) -> String {
    format!(
        "{VERSION_PREFIX}/apis/{}/types/{}/resolvers",
        encode_segment(api_id),
        encode_segment(type_name)
    )
}

/// `/v1/apis/{apiId}/types/{typeName}/resolvers/{fieldName}`
pub fn resolver(api_id: &str, type_name: &str, field_name: &str) -> String {
    format!("{}/{}", resolvers(api_id, type_name), encode_segment(field_name))
}

/// `/v1/apis/{apiId}/datasources`
pub fn data_sources(api_id: &str) -> String {
    format!("{VERSION_PREFIX}/apis/{}/datasources", encode_segment(api_id))
}

/// Percent-encode a single path segment, leaving RFC 3986 unreserved bytes.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn resolver_routes_carry_version_prefix() {
        assert_eq!(
            resolvers("abc123", "Query"),
            "/v1/apis/abc123/types/Query/resolvers"
        );
        assert_eq!(
            resolver("abc123", "Query", "getUser"),
            "/v1/apis/abc123/types/Query/resolvers/getUser"
        );
        assert_eq!(data_sources("abc123"), "/v1/apis/abc123/datasources");
    }

    #[rstest]
    #[case("getUser", "getUser")]
    #[case("a b", "a%20b")]
    #[case("a/b", "a%2Fb")]
    #[case("é", "%C3%A9")]
    #[case("a-b_c.d~e", "a-b_c.d~e")]
    #[case("%2F", "%252F")]
    fn encodes_segments(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(encode_segment(input), expected);
    }
}
