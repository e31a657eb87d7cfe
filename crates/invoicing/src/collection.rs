use serde_json::{Map, Value};

use books_core::{DomainError, DomainResult};

/// Zoho Books list endpoints exposed by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Invoices,
    Items,
    Customers,
}

impl Collection {
    pub const ALL: [Collection; 3] = [Collection::Invoices, Collection::Items, Collection::Customers];

    /// JSON key used both upstream and in the frontend envelope.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Invoices => "invoices",
            Collection::Items => "items",
            Collection::Customers => "customers",
        }
    }

    /// Path below `{domain}/books/v3/`.
    pub fn path(&self) -> &'static str {
        self.key()
    }
}

impl core::fmt::Display for Collection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.key())
    }
}

/// An unwrapped upstream list: the records plus their count.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionPage {
    pub collection: Collection,
    pub records: Vec<Value>,
}

impl CollectionPage {
    /// Pull the collection array out of an upstream list response.
    ///
    /// A response without the key is an empty page; a key holding anything
    /// other than an array is a shape error.
    pub fn from_response(collection: Collection, mut response: Value) -> DomainResult<Self> {
        let records = match response.get_mut(collection.key()) {
            None => Vec::new(),
            Some(Value::Array(records)) => std::mem::take(records),
            Some(_) => {
                return Err(DomainError::unexpected_shape(format!(
                    "`{}` is not an array",
                    collection.key()
                )));
            }
        };

        Ok(Self { collection, records })
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Frontend envelope: `{<key>: [...], count: N}`.
    pub fn to_json(&self) -> Value {
        let mut out = Map::new();
        out.insert(self.collection.key().to_string(), Value::Array(self.records.clone()));
        out.insert("count".to_string(), Value::from(self.count()));
        Value::Object(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_upstream_list_has_zero_count() {
        let page = CollectionPage::from_response(Collection::Invoices, json!({ "invoices": [] })).unwrap();
        assert_eq!(page.to_json(), json!({ "invoices": [], "count": 0 }));
    }

    #[test]
    fn missing_key_is_an_empty_page() {
        let page = CollectionPage::from_response(Collection::Items, json!({ "code": 0 })).unwrap();
        assert_eq!(page.count(), 0);
        assert_eq!(page.to_json(), json!({ "items": [], "count": 0 }));
    }

    #[test]
    fn non_array_value_is_a_shape_error() {
        for bad in [json!({ "customers": null }), json!({ "customers": { "a": 1 } })] {
            let err = CollectionPage::from_response(Collection::Customers, bad).unwrap_err();
            assert!(matches!(err, DomainError::UnexpectedShape(_)));
        }
    }

    #[test]
    fn records_are_passed_through_untouched() {
        let upstream = json!({
            "code": 0,
            "customers": [{ "contact_id": "c1", "contact_name": "Acme", "custom": { "x": 1 } }],
            "page_context": { "page": 1 }
        });
        let page = CollectionPage::from_response(Collection::Customers, upstream).unwrap();
        assert_eq!(
            page.to_json(),
            json!({
                "customers": [{ "contact_id": "c1", "contact_name": "Acme", "custom": { "x": 1 } }],
                "count": 1
            })
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: count always equals the number of returned records.
            #[test]
            fn count_matches_length(n in 0usize..64, which in 0usize..3) {
                let collection = Collection::ALL[which];
                let records: Vec<Value> = (0..n).map(|i| json!({ "id": i })).collect();
                let upstream = json!({ (collection.key()): records });

                let body = CollectionPage::from_response(collection, upstream).unwrap().to_json();
                prop_assert_eq!(body["count"].as_u64(), Some(n as u64));
                prop_assert_eq!(body[collection.key()].as_array().map(Vec::len), Some(n));
            }
        }
    }
}
