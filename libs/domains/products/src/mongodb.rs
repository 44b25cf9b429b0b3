//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    Collection, Database,
};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::{Product, DEFAULT_COLLECTION};
use crate::repository::ProductRepository;

/// MongoDB implementation of the ProductRepository
///
/// Documents are read untyped; no schema is imposed on stored products.
pub struct MongoProductRepository {
    collection: Collection<Document>,
}

impl MongoProductRepository {
    /// Create a repository over the `products` collection
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    /// Create a new MongoProductRepository with a custom collection name
    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        let collection = db.collection::<Document>(collection_name);
        Self { collection }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    /// `_id` filter for a client-supplied key.
    ///
    /// Matches every stored key that [`storage_key_to_string`] renders as
    /// `id`: the string itself, plus the ObjectId and integer forms when the
    /// text parses as one.
    fn build_id_filter(id: &str) -> Document {
        let mut keys = candidate_keys(id);
        if keys.len() == 1 {
            doc! { "_id": keys.remove(0) }
        } else {
            doc! { "_id": { "$in": keys } }
        }
    }
}

fn candidate_keys(id: &str) -> Vec<Bson> {
    let mut keys = vec![Bson::String(id.to_string())];

    if let Ok(oid) = ObjectId::parse_str(id) {
        keys.push(Bson::ObjectId(oid));
    }

    // Only canonical decimals: "042" or "+42" never come out of a stored key
    if let Ok(n) = id.parse::<i64>() {
        if n.to_string() == id {
            if let Ok(small) = i32::try_from(n) {
                keys.push(Bson::Int32(small));
            }
            keys.push(Bson::Int64(n));
        }
    }

    keys
}

/// Choose the document whose key renders exactly as `id`.
///
/// A string key wins over an ObjectId or integer key with the same text.
fn pick_match(id: &str, documents: Vec<Document>) -> Option<Document> {
    let is_string_key = |doc: &Document| matches!(doc.get("_id"), Some(Bson::String(s)) if s == id);
    let renders_as_id = |doc: &Document| {
        doc.get("_id")
            .map(|key| storage_key_to_string(key.clone()) == id)
            .unwrap_or(false)
    };

    let position = documents
        .iter()
        .position(is_string_key)
        .or_else(|| documents.iter().position(renders_as_id))?;

    documents.into_iter().nth(position)
}

/// Render a storage key the way clients see it as `id`.
pub fn storage_key_to_string(key: Bson) -> String {
    match key {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        Bson::Int32(n) => n.to_string(),
        Bson::Int64(n) => n.to_string(),
        other => other.into_relaxed_extjson().to_string(),
    }
}

/// Stored document to Product: `_id` becomes `id`, every other field is
/// converted to relaxed Extended JSON.
pub fn product_from_document(mut document: Document) -> Product {
    let id = match document.remove("_id") {
        Some(key) => storage_key_to_string(key),
        None => {
            tracing::warn!("Document without _id in product collection");
            String::new()
        }
    };

    let fields = document
        .into_iter()
        .map(|(name, value)| (name, value.into_relaxed_extjson()))
        .collect();

    Product::new(id, fields)
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn list(&self) -> ProductResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        tracing::debug!(count = documents.len(), "Fetched product documents");
        Ok(documents.into_iter().map(product_from_document).collect())
    }

    #[instrument(skip(self), fields(collection = %self.collection.name()))]
    async fn get_by_id(&self, id: &str) -> ProductResult<Option<Product>> {
        let filter = Self::build_id_filter(id);
        let cursor = self.collection.find(filter).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;

        Ok(pick_match(id, documents).map(product_from_document))
    }
}
