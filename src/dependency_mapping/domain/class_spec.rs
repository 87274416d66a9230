use serde::{Deserialize, Serialize};

/// A generated `String` constant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub value: String,
}

/// Language-neutral description of a generated class and its members
///
/// `qualified_name` joins the enclosing class names with `$`
/// (e.g. `Libs$Com$Squareup`). Fields and inner classes are sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSpec {
    pub name: String,
    pub qualified_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldSpec>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inner_classes: Vec<ClassSpec>,
}

impl ClassSpec {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn inner_class(&self, name: &str) -> Option<&ClassSpec> {
        self.inner_classes.iter().find(|class| class.name == name)
    }

    /// Resolves a dotted member path such as `Com.Squareup.Okio` to its value
    pub fn find_field(&self, path: &str) -> Option<&str> {
        let (classes, field) = match path.rsplit_once('.') {
            Some((classes, field)) => (Some(classes), field),
            None => (None, path),
        };

        let mut class = self;
        if let Some(classes) = classes {
            for name in classes.split('.') {
                class = class.inner_class(name)?;
            }
        }

        class.field(field).map(|f| f.value.as_str())
    }

    /// Total number of fields in this class and all nested classes
    pub fn field_count(&self) -> usize {
        self.fields.len()
            + self
                .inner_classes
                .iter()
                .map(ClassSpec::field_count)
                .sum::<usize>()
    }

    /// Total number of nested classes, not counting this one
    pub fn inner_class_count(&self) -> usize {
        self.inner_classes.len()
            + self
                .inner_classes
                .iter()
                .map(ClassSpec::inner_class_count)
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.inner_classes.is_empty()
    }
}
