//! File names inside a resolver directory.

/// The files a resolver directory may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverFile {
    /// `request.vm`, the request mapping template
    RequestTemplate,
    /// `response.vm`, the response mapping template
    ResponseTemplate,
    /// `meta.json`, the last-known remote resolver record
    Meta,
}

impl ResolverFile {
    /// Get the file name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RequestTemplate => "request.vm",
            Self::ResponseTemplate => "response.vm",
            Self::Meta => "meta.json",
        }
    }
}

impl std::fmt::Display for ResolverFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_file_names() {
        assert_eq!(ResolverFile::RequestTemplate.as_str(), "request.vm");
        assert_eq!(ResolverFile::ResponseTemplate.as_str(), "response.vm");
    }

    #[test]
    fn meta_file_name() {
        assert_eq!(ResolverFile::Meta.to_string(), "meta.json");
    }
}
