//! Size limits applied to untrusted configuration documents.

use super::error::{ValidationError, ValidationErrorKind};

/// Limits for configuration validation.
#[derive(Debug, Clone)]
pub struct ValidationLimits {
    /// Maximum YAML document size in bytes (default: 4MB).
    pub max_file_size: usize,
    /// Maximum nesting depth in YAML structure (default: 64).
    pub max_nesting_depth: usize,
    /// Maximum number of declared modules (default: 2000).
    pub max_module_count: usize,
    /// Maximum number of declared execution paths (default: 256).
    pub max_path_count: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_file_size: 4 * 1024 * 1024,
            max_nesting_depth: 64,
            max_module_count: 2000,
            max_path_count: 256,
        }
    }
}

impl ValidationLimits {
    /// Create default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum file size.
    pub fn with_max_file_size(mut self, size: usize) -> Self {
        self.max_file_size = size;
        self
    }

    /// Set maximum nesting depth.
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// Set maximum module count.
    pub fn with_max_module_count(mut self, count: usize) -> Self {
        self.max_module_count = count;
        self
    }

    /// Set maximum path count.
    pub fn with_max_path_count(mut self, count: usize) -> Self {
        self.max_path_count = count;
        self
    }

    /// Validate raw YAML content size before parsing.
    pub fn validate_content_size(&self, content: &str) -> Result<(), ValidationError> {
        if content.len() > self.max_file_size {
            return Err(ValidationError::new(
                ValidationErrorKind::LimitExceeded,
                "configuration",
                format!(
                    "YAML content size ({} bytes) exceeds maximum allowed ({} bytes)",
                    content.len(),
                    self.max_file_size
                ),
            ));
        }
        Ok(())
    }

    /// Validate YAML nesting depth.
    pub fn validate_nesting_depth(&self, value: &serde_yaml::Value) -> Result<(), ValidationError> {
        let hard_limit = self.max_nesting_depth.saturating_add(8);

        match Self::measure_depth_limited(value, hard_limit) {
            Ok(depth) if depth > self.max_nesting_depth => Err(ValidationError::new(
                ValidationErrorKind::LimitExceeded,
                "configuration",
                format!(
                    "YAML nesting depth ({}) exceeds maximum allowed ({})",
                    depth, self.max_nesting_depth
                ),
            )),
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Measure nesting depth, giving up once `remaining` levels are exhausted.
    fn measure_depth_limited(
        value: &serde_yaml::Value,
        remaining: usize,
    ) -> Result<usize, ValidationError> {
        if remaining == 0 {
            return Err(ValidationError::new(
                ValidationErrorKind::LimitExceeded,
                "configuration",
                "YAML recursion depth exceeded hard limit",
            ));
        }

        let children: Box<dyn Iterator<Item = &serde_yaml::Value>> = match value {
            serde_yaml::Value::Mapping(map) => Box::new(map.values()),
            serde_yaml::Value::Sequence(seq) => Box::new(seq.iter()),
            serde_yaml::Value::Tagged(tagged) => Box::new(std::iter::once(&tagged.value)),
            _ => return Ok(1),
        };

        let mut max_child = 0;
        for child in children {
            max_child = max_child.max(Self::measure_depth_limited(child, remaining - 1)?);
        }
        Ok(1 + max_child)
    }
}
