use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub description: Option<String>,
    pub img: Option<String>,
}

/// Creation payload sent to the backend. The server assigns the id.
#[derive(Serialize, Debug)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub img: String,
}

#[derive(Deserialize)]
pub struct AddProductForm {
    pub title: String,
    pub price: String,
    pub description: String,
    pub img: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_without_optional_fields() {
        let json = r#"[{"id":1,"title":"Desk","price":120.5}]"#;
        let products: Vec<Product> = serde_json::from_str(json).unwrap();

        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].title, "Desk");
        assert!(products[0].description.is_none());
        assert!(products[0].img.is_none());
    }

    #[test]
    fn new_product_payload_has_no_id() {
        let payload = NewProduct {
            title: "Chair".to_string(),
            price: 49.9,
            description: "Wooden chair".to_string(),
            img: "http://example.com/chair.jpg".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.get("id").is_none());
        assert_eq!(object.len(), 4);
        assert_eq!(object["price"], serde_json::json!(49.9));
    }
}
