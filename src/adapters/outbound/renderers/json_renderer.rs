use crate::dependency_mapping::domain::ClassSpec;
use crate::ports::outbound::ClassRenderer;
use crate::shared::Result;

/// JsonRenderer adapter for exporting the class hierarchy as JSON
///
/// This adapter implements the ClassRenderer port. The output is the
/// serialized `ClassSpec`, meant for tools that generate code themselves.
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRenderer for JsonRenderer {
    fn render(&self, spec: &ClassSpec) -> Result<String> {
        let mut json = serde_json::to_string_pretty(spec)?;
        json.push('\n');
        Ok(json)
    }

    fn default_file_name(&self, _root_class_name: &str) -> String {
        "deps-mapping.json".to_string()
    }
}
