//! Schema descriptors.
//!
//! A [`Schema`] is a language-neutral description of the JSON shape a model
//! is asked to produce: named fields, scalar/object/list types, required or
//! optional, each with an optional human-readable description. It is derived
//! once from a Rust type (via [`Structured`]) or built by hand with
//! [`SchemaBuilder`], and is read-only afterwards.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::{json, Value as JsonValue};

/// The type of a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// UTF-8 string.
    String,
    /// Whole number.
    Integer,
    /// Floating-point number. Integers are accepted here during validation.
    Float,
    /// Boolean.
    Boolean,
    /// Nested object with its own schema.
    Object(Schema),
    /// Homogeneous list of the given element type.
    List(Box<FieldType>),
}

impl FieldType {
    /// JSON type name used in schema instructions and error messages.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "number",
            Self::Boolean => "boolean",
            Self::Object(_) => "object",
            Self::List(_) => "array",
        }
    }
}

/// A named field within a [`Schema`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// The field's type.
    pub ty: FieldType,
    /// Human-readable description, surfaced in the schema instruction.
    pub description: Option<String>,
    /// Whether the field must be present. Absent optional fields are not a
    /// validation failure.
    pub required: bool,
}

impl FieldSpec {
    /// Create a required field of the given type.
    #[must_use]
    pub fn required(ty: FieldType) -> Self {
        Self {
            ty,
            description: None,
            required: true,
        }
    }

    /// Create an optional field of the given type.
    #[must_use]
    pub fn optional(ty: FieldType) -> Self {
        Self {
            ty,
            description: None,
            required: false,
        }
    }

    /// Attach a description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Descriptor for an expected JSON object.
///
/// Field order is preserved so the rendered schema instruction reads the way
/// the caller declared it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schema {
    /// Optional title, typically the type name.
    pub title: Option<String>,
    /// Optional description of the whole object.
    pub description: Option<String>,
    /// Named fields in declaration order.
    pub fields: IndexMap<String, FieldSpec>,
}

impl Schema {
    /// Start building a schema.
    #[must_use]
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Names of all required fields, in declaration order.
    #[must_use]
    pub fn required_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, spec)| spec.required)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Render the descriptor as a JSON-Schema-style document.
    ///
    /// This is the machine-readable shape embedded into the system prompt.
    #[must_use]
    pub fn to_json_schema(&self) -> JsonValue {
        let mut properties = serde_json::Map::new();
        for (name, spec) in &self.fields {
            properties.insert(name.clone(), field_json_schema(spec));
        }

        let mut schema = serde_json::Map::new();
        schema.insert("type".to_string(), json!("object"));
        if let Some(ref title) = self.title {
            schema.insert("title".to_string(), json!(title));
        }
        if let Some(ref description) = self.description {
            schema.insert("description".to_string(), json!(description));
        }
        schema.insert("properties".to_string(), JsonValue::Object(properties));
        schema.insert(
            "required".to_string(),
            json!(self.required_fields()),
        );
        JsonValue::Object(schema)
    }

    /// Wrap this schema as the item type of a synthetic `{"items": [...]}`
    /// object, used by list generation.
    #[must_use]
    pub fn into_list_wrapper(self) -> Schema {
        let item_ty = FieldType::Object(self);
        Schema::builder()
            .title("ItemList")
            .field(
                "items",
                FieldSpec::required(FieldType::List(Box::new(item_ty)))
                    .with_description("The requested items"),
            )
            .build()
    }
}

fn field_json_schema(spec: &FieldSpec) -> JsonValue {
    let mut value = type_json_schema(&spec.ty);
    if let Some(ref description) = spec.description {
        if let Some(obj) = value.as_object_mut() {
            obj.insert("description".to_string(), json!(description));
        }
    }
    value
}

fn type_json_schema(ty: &FieldType) -> JsonValue {
    match ty {
        FieldType::Object(schema) => schema.to_json_schema(),
        FieldType::List(elem) => json!({
            "type": "array",
            "items": type_json_schema(elem),
        }),
        scalar => json!({ "type": scalar.type_name() }),
    }
}

/// Fluent builder for [`Schema`].
///
/// # Example
///
/// ```rust
/// use structgen_output::Schema;
///
/// let schema = Schema::builder()
///     .title("Person")
///     .string("name", "Full name", true)
///     .integer("age", "Age in years", true)
///     .string("occupation", "Current occupation", false)
///     .build();
///
/// assert_eq!(schema.required_fields(), vec!["name", "age"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaBuilder {
    title: Option<String>,
    description: Option<String>,
    fields: IndexMap<String, FieldSpec>,
}

impl SchemaBuilder {
    /// Set the schema title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the schema description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a field with an explicit [`FieldSpec`].
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, spec: FieldSpec) -> Self {
        self.fields.insert(name.into(), spec);
        self
    }

    /// Add a string field.
    #[must_use]
    pub fn string(self, name: &str, desc: &str, required: bool) -> Self {
        self.typed(name, desc, required, FieldType::String)
    }

    /// Add an integer field.
    #[must_use]
    pub fn integer(self, name: &str, desc: &str, required: bool) -> Self {
        self.typed(name, desc, required, FieldType::Integer)
    }

    /// Add a floating-point field.
    #[must_use]
    pub fn float(self, name: &str, desc: &str, required: bool) -> Self {
        self.typed(name, desc, required, FieldType::Float)
    }

    /// Add a boolean field.
    #[must_use]
    pub fn boolean(self, name: &str, desc: &str, required: bool) -> Self {
        self.typed(name, desc, required, FieldType::Boolean)
    }

    /// Add a list field with the given element type.
    #[must_use]
    pub fn list_of(self, name: &str, desc: &str, elem: FieldType, required: bool) -> Self {
        self.typed(name, desc, required, FieldType::List(Box::new(elem)))
    }

    /// Add a list-of-strings field.
    #[must_use]
    pub fn string_list(self, name: &str, desc: &str, required: bool) -> Self {
        self.list_of(name, desc, FieldType::String, required)
    }

    /// Add a nested object field.
    #[must_use]
    pub fn object(self, name: &str, desc: &str, schema: Schema, required: bool) -> Self {
        self.typed(name, desc, required, FieldType::Object(schema))
    }

    fn typed(mut self, name: &str, desc: &str, required: bool, ty: FieldType) -> Self {
        let spec = FieldSpec {
            ty,
            description: if desc.is_empty() {
                None
            } else {
                Some(desc.to_string())
            },
            required,
        };
        self.fields.insert(name.to_string(), spec);
        self
    }

    /// Finish building.
    #[must_use]
    pub fn build(self) -> Schema {
        Schema {
            title: self.title,
            description: self.description,
            fields: self.fields,
        }
    }
}

/// Types that carry their own schema descriptor.
///
/// This is the Rust-native "type definition" the descriptor is derived from:
/// implementors pair a `Deserialize` impl with a hand-declared [`Schema`],
/// and the generation loop never inspects the type beyond that.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use structgen_output::{Schema, Structured};
///
/// #[derive(Deserialize)]
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl Structured for Person {
///     fn schema() -> Schema {
///         Schema::builder()
///             .title("Person")
///             .string("name", "Full name", true)
///             .integer("age", "Age in years", true)
///             .build()
///     }
/// }
/// ```
pub trait Structured: DeserializeOwned {
    /// The schema describing this type's JSON shape.
    fn schema() -> Schema;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn person_schema() -> Schema {
        Schema::builder()
            .title("Person")
            .string("name", "Full name", true)
            .integer("age", "Age in years", true)
            .string("occupation", "Current occupation", false)
            .build()
    }

    #[test]
    fn test_required_fields() {
        let schema = person_schema();
        assert_eq!(schema.required_fields(), vec!["name", "age"]);
    }

    #[test]
    fn test_field_order_preserved() {
        let schema = person_schema();
        let names: Vec<&String> = schema.fields.keys().collect();
        assert_eq!(names, vec!["name", "age", "occupation"]);
    }

    #[test]
    fn test_to_json_schema() {
        let schema = person_schema();
        let json = schema.to_json_schema();

        assert_eq!(json["type"], "object");
        assert_eq!(json["title"], "Person");
        assert_eq!(json["properties"]["name"]["type"], "string");
        assert_eq!(json["properties"]["name"]["description"], "Full name");
        assert_eq!(json["properties"]["age"]["type"], "integer");
        assert_eq!(json["required"], serde_json::json!(["name", "age"]));
    }

    #[test]
    fn test_nested_object_json_schema() {
        let inner = Schema::builder()
            .string("street", "Street address", true)
            .build();
        let schema = Schema::builder()
            .object("address", "Mailing address", inner, false)
            .build();

        let json = schema.to_json_schema();
        assert_eq!(json["properties"]["address"]["type"], "object");
        assert_eq!(
            json["properties"]["address"]["properties"]["street"]["type"],
            "string"
        );
    }

    #[test]
    fn test_list_json_schema() {
        let schema = Schema::builder()
            .string_list("tags", "Free-form tags", true)
            .build();
        let json = schema.to_json_schema();
        assert_eq!(json["properties"]["tags"]["type"], "array");
        assert_eq!(json["properties"]["tags"]["items"]["type"], "string");
    }

    #[test]
    fn test_list_wrapper() {
        let wrapper = person_schema().into_list_wrapper();
        assert_eq!(wrapper.required_fields(), vec!["items"]);

        let items = &wrapper.fields["items"];
        match &items.ty {
            FieldType::List(elem) => match elem.as_ref() {
                FieldType::Object(inner) => {
                    assert_eq!(inner.title.as_deref(), Some("Person"));
                }
                other => panic!("expected object element, got {other:?}"),
            },
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_type_names() {
        assert_eq!(FieldType::String.type_name(), "string");
        assert_eq!(FieldType::Float.type_name(), "number");
        assert_eq!(
            FieldType::List(Box::new(FieldType::Integer)).type_name(),
            "array"
        );
    }
}
