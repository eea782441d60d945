use http::Method;

use crate::domain::exemption::models::OperationRef;
use crate::domain::exemption::models::RequestDescriptor;

/// Module tag whose operations are guarded by this gate.
pub const LEGACY_MODULE: &str = "phis2ws";

/// Path fragments that bypass authentication: token issuance, call
/// discovery, health check and API description.
pub const EXEMPT_PATH_FRAGMENTS: [&str; 4] = ["token", "calls", "hello", "swagger.json"];

/// Decides which requests must carry a valid bearer token.
///
/// Authentication is required only when every rule holds:
/// 1. the method is not `OPTIONS`;
/// 2. the operation belongs to no module or to the legacy module;
/// 3. the path contains none of the exempt fragments;
/// 4. the operation is not one of the public operations.
///
/// Fragments are matched anywhere in the path, not per segment, so
/// `/users/tokens-report` is exempt too.
#[derive(Debug, Clone)]
pub struct ExemptionPolicy {
    legacy_module: String,
    exempt_path_fragments: Vec<String>,
    public_operations: Vec<OperationRef>,
}

impl ExemptionPolicy {
    /// Create a policy from explicit rules.
    pub fn new(
        legacy_module: impl Into<String>,
        exempt_path_fragments: Vec<String>,
        public_operations: Vec<OperationRef>,
    ) -> Self {
        Self {
            legacy_module: legacy_module.into(),
            exempt_path_fragments,
            public_operations,
        }
    }

    /// Whether the request must be authenticated before reaching its operation.
    pub fn requires_authentication(&self, request: &RequestDescriptor<'_>) -> bool {
        *request.method != Method::OPTIONS
            && self.is_guarded_module(&request.operation.module)
            && !self.is_exempt_path(request.path)
            && !self.is_public_operation(request)
    }

    fn is_guarded_module(&self, module: &str) -> bool {
        module.is_empty() || module == self.legacy_module
    }

    fn is_exempt_path(&self, path: &str) -> bool {
        self.exempt_path_fragments
            .iter()
            .any(|fragment| path.contains(fragment.as_str()))
    }

    fn is_public_operation(&self, request: &RequestDescriptor<'_>) -> bool {
        self.public_operations
            .iter()
            .any(|operation| request.operation.is(operation))
    }
}

impl Default for ExemptionPolicy {
    fn default() -> Self {
        Self::new(
            LEGACY_MODULE,
            EXEMPT_PATH_FRAGMENTS.iter().map(|s| s.to_string()).collect(),
            vec![OperationRef::new("DataResourceService", "getDataFile")],
        )
    }
}
