use http::HeaderMap;
use http::HeaderName;
use http::Method;
use serde::Deserialize;

/// Identifies the operation a route dispatches to.
///
/// `module` is the identifier of the module owning the operation, empty for
/// the core service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationMetadata {
    pub module: String,
    pub resource: String,
    pub method: String,
}

impl OperationMetadata {
    /// Operation of the core module.
    pub fn new(resource: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            module: String::new(),
            resource: resource.into(),
            method: method.into(),
        }
    }

    /// Set the owning module.
    pub fn in_module(mut self, module: impl Into<String>) -> Self {
        self.module = module.into();
        self
    }

    /// Whether this operation is `operation`.
    pub fn is(&self, operation: &OperationRef) -> bool {
        self.resource == operation.resource && self.method == operation.method
    }
}

/// Reference to a single operation of a resource type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OperationRef {
    pub resource: String,
    pub method: String,
}

impl OperationRef {
    pub fn new(resource: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            method: method.into(),
        }
    }
}

/// Read-only view of an inbound request, borrowed for one gate pass.
#[derive(Debug, Clone, Copy)]
pub struct RequestDescriptor<'a> {
    pub path: &'a str,
    pub method: &'a Method,
    pub headers: &'a HeaderMap,
    pub operation: &'a OperationMetadata,
}

impl<'a> RequestDescriptor<'a> {
    pub fn new(
        path: &'a str,
        method: &'a Method,
        headers: &'a HeaderMap,
        operation: &'a OperationMetadata,
    ) -> Self {
        Self {
            path,
            method,
            headers,
            operation,
        }
    }

    /// Value of a header, case-insensitive.
    ///
    /// Repeated headers are joined with `,`. Returns `None` when the header is
    /// absent.
    pub fn header(&self, name: &HeaderName) -> Option<String> {
        let values: Vec<String> = self
            .headers
            .get_all(name)
            .iter()
            .map(|value| String::from_utf8_lossy(value.as_bytes()).into_owned())
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values.join(","))
        }
    }
}

#[cfg(test)]
mod tests {
    use http::header::AUTHORIZATION;
    use http::HeaderValue;

    use super::*;

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer abc"));
        let operation = OperationMetadata::default();

        let descriptor = RequestDescriptor::new("/data", &Method::GET, &headers, &operation);

        assert_eq!(
            descriptor.header(&AUTHORIZATION).as_deref(),
            Some("Bearer abc")
        );
        assert_eq!(
            descriptor
                .header(&HeaderName::from_static("authorization"))
                .as_deref(),
            Some("Bearer abc")
        );
    }

    #[test]
    fn test_header_repeated_values_are_joined() {
        let mut headers = HeaderMap::new();
        headers.append(AUTHORIZATION, HeaderValue::from_static("Bearer a"));
        headers.append(AUTHORIZATION, HeaderValue::from_static("Bearer b"));
        let operation = OperationMetadata::default();

        let descriptor = RequestDescriptor::new("/data", &Method::GET, &headers, &operation);

        assert_eq!(
            descriptor.header(&AUTHORIZATION).as_deref(),
            Some("Bearer a,Bearer b")
        );
    }

    #[test]
    fn test_header_absent() {
        let headers = HeaderMap::new();
        let operation = OperationMetadata::default();

        let descriptor = RequestDescriptor::new("/data", &Method::GET, &headers, &operation);

        assert_eq!(descriptor.header(&AUTHORIZATION), None);
    }
}
