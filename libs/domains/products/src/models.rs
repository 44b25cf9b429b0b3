use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{Display, EnumString};
use utoipa::openapi::schema::{AdditionalProperties, Object, ObjectBuilder, Schema, Type};
use utoipa::openapi::RefOr;

/// Upper bound on the `/new-products` response length
pub const NEW_PRODUCTS_LIMIT: usize = 4;

/// Collection queried when none is configured
pub const DEFAULT_COLLECTION: &str = "products";

/// A catalog document as returned to clients.
///
/// The stored document is kept verbatim, minus the storage key.
/// `id` is the storage key rendered as a string and always wins over a
/// stored field of the same name.
///
/// ```
/// use domain_products::Product;
/// use serde_json::{json, Map};
///
/// let fields: Map<_, _> = [("name".to_string(), json!("Widget"))].into_iter().collect();
/// let product = Product::new("p1", fields);
/// assert_eq!(serde_json::to_value(&product).unwrap(), json!({"id": "p1", "name": "Widget"}));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Product {
    pub id: String,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl Product {
    pub fn new(id: impl Into<String>, mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        Self {
            id: id.into(),
            fields,
        }
    }

    /// Stored field by name
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Every stored field except the key
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl TryFrom<Map<String, Value>> for Product {
    type Error = String;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        match fields.remove("id") {
            Some(Value::String(id)) => Ok(Self { id, fields }),
            Some(other) => Err(format!("product id must be a string, got {}", other)),
            None => Err("missing field `id`".to_string()),
        }
    }
}

// Free-form object with a mandatory string `id`.
impl utoipa::PartialSchema for Product {
    fn schema() -> RefOr<Schema> {
        let id = RefOr::T(Schema::Object(Object::with_type(Type::String)));
        let object = ObjectBuilder::new()
            .description(Some(
                "Stored product document with its storage key exposed as `id`",
            ))
            .property("id", id)
            .required("id")
            .additional_properties(Some(AdditionalProperties::<Schema>::FreeForm(true)))
            .build();
        RefOr::T(Schema::Object(object))
    }
}

impl utoipa::ToSchema for Product {
    fn name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("Product")
    }
}

/// Which catalog routes a deployment exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Default)]
#[strum(serialize_all = "kebab-case")]
pub enum ApiVariant {
    /// List, lookup by id and newest products
    #[default]
    Full,
    /// List only
    ListOnly,
}

impl ApiVariant {
    /// Whether `/product/{id}` and `/new-products` are routed
    pub fn serves_lookups(&self) -> bool {
        matches!(self, ApiVariant::Full)
    }
}
